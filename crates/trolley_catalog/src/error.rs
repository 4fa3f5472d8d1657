use thiserror::Error;

/// Error enum.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing source could not serve the request.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}
