//! Strength heuristic - one point per satisfied criterion.
//!
//! This is a coarse character-class and length count, not an entropy estimate:
//! `"Aa1!aaaa"` and a random 15-character string score the same.

use crate::types::{Strength, StrengthScore};

/// Length that earns the first length point.
pub const BASE_LENGTH: usize = 8;
/// Length that earns the second, additive, length point.
pub const LONG_LENGTH: usize = 16;

/// Password length in UTF-16 code units.
///
/// Characters outside the Basic Multilingual Plane (e.g. emoji) count as two.
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

/// Computes the strength score and level of `password`.
///
/// Total over all strings. Length is measured by [`password_length`] and the
/// character classes are ASCII: anything outside `[A-Za-z0-9]` counts as a
/// symbol.
pub fn compute_strength(password: &str) -> Strength {
    let len = password_length(password);

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| !c.is_ascii_alphanumeric());

    let score = [
        len >= BASE_LENGTH,
        len >= LONG_LENGTH,
        has_upper,
        has_lower,
        has_digit,
        has_symbol,
    ]
    .iter()
    .filter(|&&b| b)
    .count();

    StrengthScore::new(score as u8).into()
}
