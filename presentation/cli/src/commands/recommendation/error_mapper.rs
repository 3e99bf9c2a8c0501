use business::domain::recommendation::errors::RecommendationError;

use crate::commands::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for RecommendationError {
    fn into_error_response(self) -> ErrorResponse {
        let name = match &self {
            RecommendationError::QueryEmpty => "ValidationError",
            RecommendationError::GenerationFailed => "GenerationError",
        };
        error_response(name, self)
    }
}
