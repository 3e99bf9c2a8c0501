use business::domain::dish_action::errors::DishActionError;

use crate::commands::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for DishActionError {
    fn into_error_response(self) -> ErrorResponse {
        let name = match &self {
            DishActionError::NameEmpty
            | DishActionError::NameTooLong
            | DishActionError::InvalidAction => "ValidationError",
            DishActionError::UserNotFound => "NotFoundError",
            DishActionError::Repository(_) => "PersistenceError",
        };
        error_response(name, self)
    }
}
