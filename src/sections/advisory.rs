//! Advisory section - informational message describing the strength level.

use super::SectionResult;
use crate::types::{Finding, FindingKind, StrengthLevel};

/// Emits one informational finding for `level`, unless something already blocks.
pub fn strength_advisory_section(level: StrengthLevel, has_blocking: bool) -> SectionResult {
    if has_blocking {
        return None;
    }
    Some(Finding::new(FindingKind::Advisory { level }))
}
