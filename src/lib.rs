//! Password strength scoring and breach corpus validation
//!
//! This library scores candidate passwords with a coarse length and
//! character-class heuristic, enforces per-tier length bounds, and flags
//! passwords found in a known-breach corpus.
//!
//! # Features
//!
//! - `async` (default): Enables background corpus loading and debounced validation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_BREACH_LIST_PATH`: Custom path to the breach corpus, a JSON array of strings
//!   (default: `./assets/pwlist.json`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_checker::{load_breach_list, validate, PrivilegeTier};
//! use secrecy::SecretString;
//!
//! // Load the corpus once at startup; failures yield an empty set
//! let breach = load_breach_list();
//!
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let result = validate(&password, PrivilegeTier::Standard, &breach);
//!
//! println!("Level: {:?}", result.strength_level());
//! println!("Acceptable: {}", result.is_acceptable);
//! println!("{}", result.message());
//! ```

// Internal modules
mod breach;
mod sections;
mod strength;
mod types;
mod validator;

// Public API
pub use breach::{
    BreachListError, BreachListProvider, BreachSet, get_breach_list_path, load_breach_list,
    parse_breach_list, read_breach_list,
};
pub use sections::MAX_LENGTH;
pub use strength::{compute_strength, password_length};
pub use types::{
    Finding, FindingKind, MAX_SCORE, PrivilegeTier, Severity, Strength, StrengthLevel,
    StrengthScore, ValidationInput, ValidationResult,
};
pub use validator::validate;

#[cfg(feature = "async")]
pub use breach::load_breach_list_async;

#[cfg(feature = "async")]
pub use validator::{DEBOUNCE, validate_tx};
