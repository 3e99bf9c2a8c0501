use serde::Serialize;

#[derive(Serialize, Debug, PartialEq)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> ErrorResponse;
}

/// Domain errors render their code-style message (`user.not_found`, ...).
pub(crate) fn error_response(name: &str, err: impl std::fmt::Display) -> ErrorResponse {
    ErrorResponse {
        name: name.to_string(),
        message: err.to_string(),
    }
}
