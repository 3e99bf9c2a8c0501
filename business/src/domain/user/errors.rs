#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.name_empty")]
    NameEmpty,
    #[error("user.birth_date_in_future")]
    BirthDateInFuture,
    #[error("user.id_exhausted")]
    IdExhausted,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
