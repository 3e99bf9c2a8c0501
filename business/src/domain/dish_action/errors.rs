use crate::domain::shared::dish_name::DishNameIssue;

#[derive(Debug, thiserror::Error)]
pub enum DishActionError {
    #[error("dish_action.name_empty")]
    NameEmpty,
    #[error("dish_action.name_too_long")]
    NameTooLong,
    #[error("dish_action.invalid_action")]
    InvalidAction,
    #[error("dish_action.user_not_found")]
    UserNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl From<DishNameIssue> for DishActionError {
    fn from(issue: DishNameIssue) -> Self {
        match issue {
            DishNameIssue::Empty => DishActionError::NameEmpty,
            DishNameIssue::TooLong => DishActionError::NameTooLong,
        }
    }
}

impl From<crate::domain::favorite::errors::FavoriteError> for DishActionError {
    fn from(err: crate::domain::favorite::errors::FavoriteError) -> Self {
        use crate::domain::favorite::errors::FavoriteError;
        match err {
            FavoriteError::NameEmpty => DishActionError::NameEmpty,
            FavoriteError::NameTooLong => DishActionError::NameTooLong,
            FavoriteError::UserNotFound => DishActionError::UserNotFound,
            FavoriteError::Repository(e) => DishActionError::Repository(e),
        }
    }
}
