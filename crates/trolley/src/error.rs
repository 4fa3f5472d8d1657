use thiserror::Error;

/// Error enum.
///
/// Every variant is local to a single dispatch: the store reports the error
/// to the caller and leaves its state unchanged.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The action's type tag is not one the store recognises.
    #[error("invalid cart action '{0}'")]
    InvalidAction(String),
    /// The action payload does not match the expected shape.
    #[error("malformed cart action: {0}")]
    MalformedAction(String),
}
