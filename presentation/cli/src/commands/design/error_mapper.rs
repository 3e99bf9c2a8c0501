use business::domain::design::errors::DesignError;

use crate::commands::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for DesignError {
    fn into_error_response(self) -> ErrorResponse {
        let name = match &self {
            DesignError::PromptEmpty => "ValidationError",
            DesignError::GenerationFailed => "GenerationError",
        };
        error_response(name, self)
    }
}
