use crate::domain::logger::Logger;

/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}

impl RepositoryError {
    /// True when the storage layer itself failed, as opposed to a missing or
    /// conflicting record.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            RepositoryError::Persistence | RepositoryError::DatabaseError
        )
    }
}

/// Reports storage failures of a repository call through the logger, leaving
/// missing or conflicting records to the caller.
pub trait LogStorageFailure<T> {
    fn log_failure(self, logger: &dyn Logger, action: &str) -> Result<T, RepositoryError>;
}

impl<T> LogStorageFailure<T> for Result<T, RepositoryError> {
    fn log_failure(self, logger: &dyn Logger, action: &str) -> Result<T, RepositoryError> {
        self.inspect_err(|e| {
            if e.is_storage_failure() {
                logger.failure(action, e);
            }
        })
    }
}
