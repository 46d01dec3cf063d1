//! Typed errors surfaced by the public cache API, as distinct from the
//! free-form [`anyhow::Error`] used for internal/store-facing failures.

use thiserror::Error;

/// Errors returned by [`crate::NamespaceCache`] lookups and lifecycle calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// No successful refresh has completed yet.
    #[error("namespace cache is not ready: no successful refresh has completed")]
    NotReady,

    /// The key is absent from the currently published index.
    #[error("namespace not found: {0}")]
    NotFound(String),

    /// [`crate::NamespaceCache::start`] failed because the initial refresh
    /// could not reach the metadata store. Never surfaced from lookups.
    #[error("metadata store unavailable: {0}")]
    StoreUnavailable(String),
}

impl CacheError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound(key.into())
    }

    pub fn store_unavailable(err: &anyhow::Error) -> Self {
        Self::StoreUnavailable(format!("{err:#}"))
    }
}
