use business::domain::user::errors::UserError;

use crate::commands::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> ErrorResponse {
        let name = match &self {
            UserError::NameEmpty | UserError::BirthDateInFuture => "ValidationError",
            UserError::IdExhausted => "ConflictError",
            UserError::Repository(_) => "PersistenceError",
        };
        error_response(name, self)
    }
}
