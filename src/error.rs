//! Crate error type.
//!
//! Missing page elements are not errors; callers skip them. What remains are
//! store failures, DOM writes the browser rejected, bad configuration, and
//! preference strings that name no known variant.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by store, DOM and configuration operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FolioError {
    /// The preference store rejected a read or write.
    #[error("preference store error: {0}")]
    Storage(String),
    /// The document rejected a mutation.
    #[error("dom error: {0}")]
    Dom(String),
    /// The page configuration is malformed or out of range.
    #[error("invalid config: {0}")]
    Config(String),
    /// A theme string other than `light` or `dark`.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    /// A language string other than `es` or `en`.
    #[error("unknown language: {0:?}")]
    UnknownLanguage(String),
}

/// Shorthand for results carrying a [`FolioError`].
pub type Result<T, E = FolioError> = std::result::Result<T, E>;

#[cfg(feature = "hydrate")]
impl FolioError {
    /// Wrap a rejected `JsValue` from a DOM call.
    pub(crate) fn dom(context: &str, err: &wasm_bindgen::JsValue) -> Self {
        Self::Dom(format!("{context}: {err:?}"))
    }

    /// Wrap a rejected `JsValue` from a storage call.
    pub(crate) fn storage(context: &str, err: &wasm_bindgen::JsValue) -> Self {
        Self::Storage(format!("{context}: {err:?}"))
    }
}
