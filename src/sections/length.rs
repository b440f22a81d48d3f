//! Length section - checks password minimum and maximum length.

use super::SectionResult;
use crate::breach::BreachSet;
use crate::strength::password_length;
use crate::types::{Finding, FindingKind, PrivilegeTier};

pub const MAX_LENGTH: usize = 64;

/// Checks the password length against the tier minimum and the global maximum.
///
/// Length is counted in UTF-16 code units, see [`password_length`].
///
/// # Returns
/// - `Some(finding)` (blocking) if password is too short or too long
/// - `None` if password length is within bounds
pub fn length_section(password: &str, tier: PrivilegeTier, _breach: &BreachSet) -> SectionResult {
    let len = password_length(password);
    let min_length = tier.min_length();

    if len < min_length {
        Some(Finding::new(FindingKind::TooShort { min_length }))
    } else if len > MAX_LENGTH {
        Some(Finding::new(FindingKind::TooLong {
            max_length: MAX_LENGTH,
        }))
    } else {
        None
    }
}
