//! Application error types.

use domain::{DispatchError, DomainError};
use persistence::PersistenceError;
use thiserror::Error;

/// Errors surfaced by the application services.
#[derive(Debug, Error)]
pub enum AppError {
    /// An entity rejected the requested change.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Reading or writing an entity failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// An event handler failed after the change was stored.
    #[error("Event dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// The database could not be reached.
    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
