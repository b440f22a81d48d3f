//! Password validation sections
//!
//! Each section checks one aspect of the candidate and may emit a finding.

mod advisory;
mod breach;
mod length;

pub use advisory::strength_advisory_section;
pub use breach::breach_section;
pub use length::{MAX_LENGTH, length_section};

use crate::breach::BreachSet;
use crate::types::{Finding, PrivilegeTier};

/// Result type for section functions.
/// - `Some(finding)` - Section raised a finding
/// - `None` - Section passed
pub type SectionResult = Option<Finding>;

/// Signature shared by the blocking sections.
pub type BlockingSection = fn(&str, PrivilegeTier, &BreachSet) -> SectionResult;
