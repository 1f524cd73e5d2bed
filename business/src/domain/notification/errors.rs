use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification.title_empty")]
    TitleEmpty,
    #[error("notification.title_too_long")]
    TitleTooLong,
    #[error("notification.message_empty")]
    MessageEmpty,
    #[error("notification.already_sent")]
    AlreadySent,
    #[error("notification.not_found")]
    NotFound,
    #[error("notification.shopping_list_not_found")]
    ShoppingListNotFound,
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl NotificationError {
    /// Maps a failed notification lookup.
    pub fn from_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => NotificationError::NotFound,
            other => NotificationError::Repository(other),
        }
    }

    /// Maps a failed lookup of the linked shopping list.
    pub fn from_list_lookup(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => NotificationError::ShoppingListNotFound,
            other => NotificationError::Repository(other),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            NotificationError::TitleEmpty
                | NotificationError::TitleTooLong
                | NotificationError::MessageEmpty
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_rows_per_lookup() {
        assert!(matches!(
            NotificationError::from_lookup(RepositoryError::NotFound),
            NotificationError::NotFound
        ));
        assert!(matches!(
            NotificationError::from_list_lookup(RepositoryError::NotFound),
            NotificationError::ShoppingListNotFound
        ));
        assert!(matches!(
            NotificationError::from_lookup(RepositoryError::DatabaseError),
            NotificationError::Repository(RepositoryError::DatabaseError)
        ));
    }

    #[test]
    fn should_classify_validation_errors() {
        assert!(NotificationError::TitleEmpty.is_validation());
        assert!(NotificationError::MessageEmpty.is_validation());
        assert!(!NotificationError::AlreadySent.is_validation());
        assert!(!NotificationError::NotFound.is_validation());
    }
}
