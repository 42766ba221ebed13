use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Failures reported by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A pooled connection could not be obtained.
    #[error("connection error: {0}")]
    Connection(String),
    /// A query failed to execute.
    #[error("query error: {0}")]
    Query(#[from] diesel::result::Error),
    /// A stored row violated a domain constraint.
    #[error("invalid stored data: {0}")]
    Validation(#[from] TypeConstraintError),
}

impl From<diesel::r2d2::PoolError> for RepositoryError {
    fn from(value: diesel::r2d2::PoolError) -> Self {
        Self::Connection(value.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
