//! Data generator errors

use thiserror::Error;

/// Result type for generator operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Generator errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("Cannot distribute records across zero nodes")]
    NoNodes,

    #[error("Cannot generate {0} orders without any users to reference")]
    NoUsers(u64),
}
