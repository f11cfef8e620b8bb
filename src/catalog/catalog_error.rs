use thiserror::Error;

/// Errors raised while talking to an artist catalog.
///
/// A lookup that finds nothing is not an error; catalogs report it as
/// `Ok(None)` or an empty list.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog cannot be built from the supplied settings (missing credentials, etc.).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The HTTP request itself failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The catalog answered with a body we could not understand.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
