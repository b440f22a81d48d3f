//! Breach section - checks if password is in the breach corpus.

use super::SectionResult;
use crate::breach::BreachSet;
use crate::types::{Finding, FindingKind, PrivilegeTier};

/// Checks if the password appears verbatim in the breach corpus.
///
/// # Returns
/// - `Some(finding)` (blocking) if password is breached
/// - `None` if password is not in the corpus, or the corpus is empty
pub fn breach_section(password: &str, _tier: PrivilegeTier, breach: &BreachSet) -> SectionResult {
    if breach.contains(password) {
        return Some(Finding::new(FindingKind::Breached));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> BreachSet {
        ["password", "123456", "qwerty"].into_iter().collect()
    }

    #[test]
    fn test_breach_section_common_password() {
        let result = breach_section("password", PrivilegeTier::Standard, &corpus());
        assert_eq!(result, Some(Finding::new(FindingKind::Breached)));
    }

    #[test]
    fn test_breach_section_is_exact_match() {
        assert_eq!(breach_section("Password", PrivilegeTier::Standard, &corpus()), None);
        assert_eq!(breach_section("password!", PrivilegeTier::Standard, &corpus()), None);
    }

    #[test]
    fn test_breach_section_empty_corpus() {
        let result = breach_section("password", PrivilegeTier::Privileged, &BreachSet::new());
        assert_eq!(result, None);
    }
}
