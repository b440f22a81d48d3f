//! Core value types shared by the validator and its callers.

use secrecy::SecretString;
use serde::Serialize;
use std::fmt;

use crate::breach::BreachSet;

/// Highest value a [`StrengthScore`] can take.
pub const MAX_SCORE: u8 = 6;

/// Account sensitivity, selecting the minimum password length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivilegeTier {
    #[default]
    Standard,
    Privileged,
}

impl PrivilegeTier {
    /// Minimum number of characters accepted for this tier.
    pub const fn min_length(self) -> usize {
        match self {
            PrivilegeTier::Standard => 8,
            PrivilegeTier::Privileged => 16,
        }
    }

    /// Flips between standard and privileged.
    pub const fn toggle(self) -> Self {
        match self {
            PrivilegeTier::Standard => PrivilegeTier::Privileged,
            PrivilegeTier::Privileged => PrivilegeTier::Standard,
        }
    }

    pub const fn is_privileged(self) -> bool {
        matches!(self, PrivilegeTier::Privileged)
    }
}

impl From<bool> for PrivilegeTier {
    fn from(is_privileged: bool) -> Self {
        if is_privileged {
            PrivilegeTier::Privileged
        } else {
            PrivilegeTier::Standard
        }
    }
}

/// Coarse strength classification derived from a [`StrengthScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            StrengthLevel::Weak => "weak",
            StrengthLevel::Medium => "medium",
            StrengthLevel::Strong => "strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heuristic score in `[0, MAX_SCORE]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct StrengthScore(u8);

impl StrengthScore {
    /// Creates a score, clamping to [`MAX_SCORE`].
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_SCORE))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// `<= 2` is weak, `3..=4` is medium, `>= 5` is strong.
    pub fn level(&self) -> StrengthLevel {
        match self.0 {
            0..=2 => StrengthLevel::Weak,
            3..=4 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }
}

/// Score and level produced by [`compute_strength`](crate::compute_strength).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strength {
    pub score: StrengthScore,
    pub level: StrengthLevel,
}

impl From<StrengthScore> for Strength {
    fn from(score: StrengthScore) -> Self {
        Self {
            score,
            level: score.level(),
        }
    }
}

/// Whether a finding rejects the password or only informs about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Blocking,
    Informational,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FindingKind {
    /// Candidate is present in the breach corpus.
    Breached,
    TooShort { min_length: usize },
    TooLong { max_length: usize },
    /// Strength advisory, only emitted when nothing blocks.
    Advisory { level: StrengthLevel },
}

impl FindingKind {
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::Advisory { .. } => Severity::Informational,
            _ => Severity::Blocking,
        }
    }

    fn message(&self) -> String {
        match self {
            FindingKind::Breached => "Password was in many data breaches.".to_string(),
            FindingKind::TooShort { min_length } => {
                format!("Password needs to be at least {} characters long.", min_length)
            }
            FindingKind::TooLong { max_length } => {
                format!("Password should not have more than {} characters.", max_length)
            }
            FindingKind::Advisory { level } => match level {
                StrengthLevel::Weak => {
                    "We would not recommend using this as a password. Try a longer passphrase"
                        .to_string()
                }
                StrengthLevel::Medium => {
                    "Password is okay but consider using a longer passphrase.".to_string()
                }
                StrengthLevel::Strong => "Password looks strong!".to_string(),
            },
        }
    }
}

/// A single human-readable validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    #[serde(flatten)]
    pub kind: FindingKind,
    pub message: String,
}

impl Finding {
    pub fn new(kind: FindingKind) -> Self {
        let message = kind.message();
        Self { kind, message }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn is_blocking(&self) -> bool {
        self.severity() == Severity::Blocking
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Explicit input record for one validation pass.
#[derive(Debug)]
pub struct ValidationInput {
    pub password: SecretString,
    pub tier: PrivilegeTier,
}

impl ValidationInput {
    pub fn new(password: SecretString, tier: PrivilegeTier) -> Self {
        Self { password, tier }
    }

    /// Runs [`validate`](crate::validate) on this input.
    pub fn validate(&self, breach: &BreachSet) -> ValidationResult {
        crate::validator::validate(&self.password, self.tier, breach)
    }
}

/// Outcome of one validation pass. Recomputed from scratch on every input change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub score: Option<StrengthScore>,
    pub findings: Vec<Finding>,
    pub is_acceptable: bool,
}

impl ValidationResult {
    /// Result for an empty candidate: nothing to report, nothing flagged.
    pub fn empty() -> Self {
        Self {
            score: None,
            findings: Vec::new(),
            is_acceptable: true,
        }
    }

    pub fn strength_level(&self) -> Option<StrengthLevel> {
        self.score.map(|s| s.level())
    }

    pub fn blocking_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_blocking())
    }

    /// All finding messages joined by a single space, in display order.
    pub fn message(&self) -> String {
        self.findings
            .iter()
            .map(|f| f.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::empty()
    }
}
