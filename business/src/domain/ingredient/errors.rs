#[derive(Debug, thiserror::Error)]
pub enum IngredientError {
    #[error("ingredient.name_empty")]
    NameEmpty,
    #[error("ingredient.name_too_long")]
    NameTooLong,
    #[error("ingredient.already_exists")]
    AlreadyExists,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
