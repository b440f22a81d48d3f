//! Password validator - runs the sections and assembles the result.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::types::ValidationInput;

use crate::breach::BreachSet;
use crate::sections::{
    BlockingSection, breach_section, length_section, strength_advisory_section,
};
use crate::strength::compute_strength;
use crate::types::{PrivilegeTier, ValidationResult};

/// Delay applied by [`validate_tx`] before validating, so bursts of input
/// collapse into one pass.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Validates a candidate password for the given tier against the breach corpus.
///
/// Never fails. An empty candidate yields [`ValidationResult::empty`]: no
/// score, no findings, acceptable. Otherwise findings are ordered breach,
/// length, then at most one strength advisory, which is only added when
/// nothing blocks.
pub fn validate(
    password: &SecretString,
    tier: PrivilegeTier,
    breach: &BreachSet,
) -> ValidationResult {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return ValidationResult::empty();
    }

    // Order matters for display: breach first, then length
    let sections: [(&str, BlockingSection); 2] = [
        ("breach", breach_section),
        ("length", length_section),
    ];

    let mut findings = Vec::new();
    for (_section_name, section_fn) in sections {
        if let Some(finding) = section_fn(pwd, tier, breach) {
            #[cfg(feature = "tracing")]
            tracing::trace!("section {} raised a blocking finding", _section_name);
            findings.push(finding);
        }
    }

    let has_blocking = findings.iter().any(|f| f.is_blocking());
    let strength = compute_strength(pwd);
    findings.extend(strength_advisory_section(strength.level, has_blocking));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        acceptable = !has_blocking,
        findings = findings.len(),
        strength = %strength.level,
        "password validated"
    );

    ValidationResult {
        score: Some(strength.score),
        findings,
        is_acceptable: !has_blocking,
    }
}

/// Debounced validation that sends the result via channel.
///
/// Waits [`DEBOUNCE`], then validates unless `token` was cancelled in the
/// meantime. Callers cancel the previous token on every input change, so only
/// the latest input produces a result.
#[cfg(feature = "async")]
pub async fn validate_tx(
    input: &ValidationInput,
    breach: &BreachSet,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationResult>,
) {
    tokio::time::sleep(DEBOUNCE).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("validation superseded by newer input");
        return;
    }

    let result = input.validate(breach);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send validation result: {}", _e);
    }
}
