use crate::domain::shared::dish_name::DishNameIssue;

#[derive(Debug, thiserror::Error)]
pub enum FavoriteError {
    #[error("favorite.name_empty")]
    NameEmpty,
    #[error("favorite.name_too_long")]
    NameTooLong,
    #[error("favorite.user_not_found")]
    UserNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl From<DishNameIssue> for FavoriteError {
    fn from(issue: DishNameIssue) -> Self {
        match issue {
            DishNameIssue::Empty => FavoriteError::NameEmpty,
            DishNameIssue::TooLong => FavoriteError::NameTooLong,
        }
    }
}
