//! Breach corpus management module
//!
//! Handles loading and querying the list of passwords known from data breaches.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::task::JoinHandle;

const BREACH_LIST_ENV: &str = "PWD_BREACH_LIST_PATH";
const DEFAULT_BREACH_LIST_PATH: &str = "./assets/pwlist.json";

#[derive(Error, Debug)]
pub enum BreachListError {
    #[error("Breach list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read breach list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Breach list is not a JSON array of strings: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Immutable set of breached passwords.
///
/// Membership is exact and case-sensitive. Cloning shares the underlying set.
#[derive(Debug, Clone, Default)]
pub struct BreachSet(Arc<HashSet<String>>);

impl BreachSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, password: &str) -> bool {
        self.0.contains(password)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for BreachSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(Arc::new(iter.into_iter().map(Into::into).collect()))
    }
}

/// Returns the breach list file path.
///
/// Priority:
/// 1. Environment variable `PWD_BREACH_LIST_PATH`
/// 2. Default path `./assets/pwlist.json`
pub fn get_breach_list_path() -> PathBuf {
    std::env::var(BREACH_LIST_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_BREACH_LIST_PATH))
}

/// Parses a JSON array of plain password strings.
///
/// Entries are kept verbatim (no trimming, no case folding).
pub fn parse_breach_list(json: &str) -> Result<BreachSet, BreachListError> {
    let entries: Vec<String> = serde_json::from_str(json)?;
    Ok(entries.into_iter().collect())
}

/// Reads and parses the breach list at `path`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - Content is not a JSON array of strings
pub fn read_breach_list<P: AsRef<Path>>(path: P) -> Result<BreachSet, BreachListError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BreachListError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_breach_list(&content)
}

/// Loads the breach list from the configured path, failing softly.
///
/// Any error is logged and yields an empty set, so validation keeps working
/// without breach findings.
pub fn load_breach_list() -> BreachSet {
    let path = get_breach_list_path();
    settle(read_breach_list(&path), &path)
}

/// Async counterpart of [`load_breach_list`], reading through `tokio::fs`.
#[cfg(feature = "async")]
pub async fn load_breach_list_async() -> BreachSet {
    let path = get_breach_list_path();
    let result = read_breach_list_async(&path).await;
    settle(result, &path)
}

#[cfg(feature = "async")]
async fn read_breach_list_async(path: &Path) -> Result<BreachSet, BreachListError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(BreachListError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    parse_breach_list(&content)
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn settle(result: Result<BreachSet, BreachListError>, path: &Path) -> BreachSet {
    match result {
        Ok(set) => {
            #[cfg(feature = "tracing")]
            tracing::info!("Breach list loaded: {} passwords from {:?}", set.len(), path);
            set
        }
        Err(e) => {
            #[cfg(feature = "tracing")]
            tracing::error!(
                "Breach list load FAILED ({:?}), continuing with empty list: {}",
                path,
                e
            );
            BreachSet::new()
        }
    }
}

/// Holds the session's breach set once it has been loaded.
///
/// Until a load succeeds, [`current`](Self::current) returns an empty set.
/// The set is installed at most once; there is no refresh.
#[derive(Debug, Clone, Default)]
pub struct BreachListProvider {
    cell: Arc<OnceLock<BreachSet>>,
}

impl BreachListProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded set, or an empty one if loading is pending or failed.
    pub fn current(&self) -> BreachSet {
        self.cell.get().cloned().unwrap_or_default()
    }

    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Loads the breach list synchronously and installs it.
    ///
    /// Idempotent: if a set is already installed, returns its size without
    /// touching the file.
    pub fn load_from_path<P: AsRef<Path>>(&self, path: P) -> Result<usize, BreachListError> {
        if let Some(set) = self.cell.get() {
            return Ok(set.len());
        }
        let set = read_breach_list(path.as_ref())?;
        Ok(self.install(set))
    }

    /// Starts loading in the background. Fire-and-forget: no timeout, no retry.
    ///
    /// Must be called from within a tokio runtime.
    #[cfg(feature = "async")]
    pub fn spawn_load(&self, path: PathBuf) -> JoinHandle<()> {
        let provider = self.clone();
        tokio::spawn(async move {
            if provider.is_loaded() {
                return;
            }
            match read_breach_list_async(&path).await {
                Ok(set) => {
                    let _count = provider.install(set);
                    #[cfg(feature = "tracing")]
                    tracing::info!("Breach list loaded: {} passwords from {:?}", _count, path);
                }
                Err(_e) => {
                    #[cfg(feature = "tracing")]
                    tracing::error!("Breach list load FAILED ({:?}): {}", path, _e);
                }
            }
        })
    }

    fn install(&self, set: BreachSet) -> usize {
        // A concurrent load may have won; keep whichever set landed first.
        let _ = self.cell.set(set);
        self.cell.get().map(BreachSet::len).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::set_var(key, value); }
    }

    /// Helper to safely remove env var in tests
    fn remove_env(key: &str) {
        // SAFETY: tests touching the environment run under #[serial]
        unsafe { std::env::remove_var(key); }
    }

    fn json_tempfile(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        write!(temp_file, "{}", content).expect("Failed to write");
        temp_file
    }

    #[test]
    #[serial]
    fn test_get_breach_list_path_default() {
        remove_env(BREACH_LIST_ENV);

        let path = get_breach_list_path();
        assert_eq!(path, PathBuf::from("./assets/pwlist.json"));
    }

    #[test]
    #[serial]
    fn test_get_breach_list_path_from_env() {
        let custom_path = "/custom/path/pwlist.json";
        set_env(BREACH_LIST_ENV, custom_path);

        let path = get_breach_list_path();
        assert_eq!(path, PathBuf::from(custom_path));

        remove_env(BREACH_LIST_ENV);
    }

    #[test]
    fn test_breach_set_is_case_sensitive() {
        let set: BreachSet = ["Password1"].into_iter().collect();
        assert!(set.contains("Password1"));
        assert!(!set.contains("password1"));
        assert!(!set.contains("Password1 "));
    }

    #[test]
    fn test_parse_breach_list() {
        let set = parse_breach_list(r#"["123456", "qwerty", "qwerty", " spaced "]"#)
            .expect("valid list");
        assert_eq!(set.len(), 3);
        assert!(set.contains(" spaced "));
    }

    #[test]
    fn test_parse_breach_list_empty_array() {
        let set = parse_breach_list("[]").expect("valid list");
        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_breach_list_rejects_non_array() {
        let result = parse_breach_list(r#"{"password": 1}"#);
        assert!(matches!(result, Err(BreachListError::ParseError(_))));
    }

    #[test]
    fn test_read_breach_list_file_not_found() {
        let result = read_breach_list("/nonexistent/path/pwlist.json");
        match result {
            Err(BreachListError::FileNotFound(_)) => {}
            _ => panic!("Expected FileNotFound error"),
        }
    }

    #[test]
    #[serial]
    fn test_load_breach_list_success() {
        let temp_file = json_tempfile(r#"["password123", "qwerty"]"#);
        set_env(BREACH_LIST_ENV, temp_file.path().to_str().unwrap());

        let set = load_breach_list();
        assert_eq!(set.len(), 2);
        assert!(set.contains("qwerty"));

        remove_env(BREACH_LIST_ENV);
    }

    #[test]
    #[serial]
    fn test_load_breach_list_missing_file_is_empty() {
        set_env(BREACH_LIST_ENV, "/nonexistent/path/pwlist.json");

        let set = load_breach_list();
        assert!(set.is_empty());

        remove_env(BREACH_LIST_ENV);
    }

    #[test]
    #[serial]
    fn test_load_breach_list_malformed_is_empty() {
        let temp_file = json_tempfile("not json at all");
        set_env(BREACH_LIST_ENV, temp_file.path().to_str().unwrap());

        let set = load_breach_list();
        assert!(set.is_empty());

        remove_env(BREACH_LIST_ENV);
    }

    #[test]
    fn test_provider_empty_until_loaded() {
        let provider = BreachListProvider::new();
        assert!(!provider.is_loaded());
        assert!(provider.current().is_empty());
    }

    #[test]
    fn test_provider_load_is_idempotent() {
        let first = json_tempfile(r#"["alpha", "beta"]"#);
        let second = json_tempfile(r#"["gamma"]"#);
        let provider = BreachListProvider::new();

        assert_eq!(provider.load_from_path(first.path()).unwrap(), 2);
        assert_eq!(provider.load_from_path(second.path()).unwrap(), 2);
        assert!(provider.current().contains("alpha"));
        assert!(!provider.current().contains("gamma"));
    }

    #[test]
    fn test_provider_failed_load_stays_empty() {
        let provider = BreachListProvider::new();
        let result = provider.load_from_path("/nonexistent/path/pwlist.json");
        assert!(result.is_err());
        assert!(!provider.is_loaded());
        assert!(provider.current().is_empty());
    }

    #[test]
    fn test_provider_clones_share_state() {
        let temp_file = json_tempfile(r#"["shared"]"#);
        let provider = BreachListProvider::new();
        let handle = provider.clone();

        provider.load_from_path(temp_file.path()).unwrap();
        assert!(handle.is_loaded());
        assert!(handle.current().contains("shared"));
    }
}
