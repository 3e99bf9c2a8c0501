use business::domain::favorite::errors::FavoriteError;

use crate::commands::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for FavoriteError {
    fn into_error_response(self) -> ErrorResponse {
        let name = match &self {
            FavoriteError::NameEmpty | FavoriteError::NameTooLong => "ValidationError",
            FavoriteError::UserNotFound => "NotFoundError",
            FavoriteError::Repository(_) => "PersistenceError",
        };
        error_response(name, self)
    }
}
