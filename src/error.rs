//! Error type shared by the controllers, stores, and DOM adapters.

/// Failure raised while reading or mutating page chrome.
///
/// Absence of an optional element is not an error; lookups return `Option`
/// for that. This type covers targets an operation cannot proceed without and
/// failures reported by the host environment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChromeError {
    /// A required element was not present in the document.
    #[error("element not found: {selector}")]
    ElementNotFound { selector: String },
    /// The browser exposes no persistent key-value storage.
    #[error("preference storage unavailable")]
    StorageUnavailable,
    /// A storage read or write was rejected.
    #[error("preference storage error: {0}")]
    Storage(String),
    /// A DOM mutation or listener registration was rejected.
    #[error("dom operation failed: {0}")]
    Dom(String),
    /// Page-supplied configuration could not be parsed.
    #[error("invalid config: {0}")]
    Config(String),
}

impl ChromeError {
    pub(crate) fn not_found(selector: impl Into<String>) -> Self {
        Self::ElementNotFound { selector: selector.into() }
    }
}

impl From<serde_json::Error> for ChromeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}
