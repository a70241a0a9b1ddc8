use thiserror::Error;

/// Errors surfaced by the library's setup paths and by the CLI.
///
/// Catalog and store failures never reach callers of the search or favorites
/// operations; they only show up here when a caller works with the lower
/// layers directly.
#[derive(Error, Debug)]
pub enum BrowserError {
    /// Failed to construct the HTTP client
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Favorites storage failed
    #[error("Storage error: {0}")]
    StoreError(#[from] StoreError),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// A recipe could not be resolved for a favorites command
    #[error("Recipe {0} is not available")]
    RecipeUnavailable(u64),

    /// A favorites change was not persisted
    #[error("Favorites not saved: {0}")]
    FavoritesUnsaved(String),
}

/// Reasons a call against the remote recipe catalog did not produce data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request never completed (DNS, connect, timeout, body read)
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-success status
    #[error("Catalog returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body did not match the expected shape
    #[error("Malformed catalog response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// No catalog is reachable from this configuration
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by a `KeyValueStore`.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Keys map onto file names, so only a safe character set is accepted
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
