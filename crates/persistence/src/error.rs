use domain::DomainError;
use thiserror::Error;

/// Errors that can occur when reading or writing entities.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// No entity with this id is stored.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An entity with this id is already stored.
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A stored row could not be turned back into a valid entity.
    #[error("Stored data violates domain rules: {0}")]
    InvalidRow(#[from] DomainError),
}

impl PersistenceError {
    /// Builds a [`PersistenceError::NotFound`].
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        PersistenceError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Builds a [`PersistenceError::AlreadyExists`].
    pub fn already_exists(entity: &'static str, id: impl ToString) -> Self {
        PersistenceError::AlreadyExists {
            entity,
            id: id.to_string(),
        }
    }

    /// Returns true for [`PersistenceError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, PersistenceError::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;
