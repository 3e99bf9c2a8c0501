use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use thiserror::Error;

use business::domain::errors::RepositoryError;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }
}

/// Creates a PostgreSQL connection pool
pub async fn create_postgres_pool(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(&config.connection_string)
        .await
        .map_err(|e| {
            tracing::error!("Database connection failed: {e}");
            DatabaseError::ConnectionError
        })?;

    Ok(pool)
}

/// Maps a sqlx error to the domain error, keeping unique-constraint
/// violations distinguishable from other failures.
pub(crate) fn map_write_error(err: sqlx::Error) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err
        && db_err.is_unique_violation()
    {
        return RepositoryError::Duplicated;
    }
    map_read_error(err)
}

pub(crate) fn map_read_error(err: sqlx::Error) -> RepositoryError {
    tracing::error!("Database error: {err}");
    RepositoryError::DatabaseError
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_pool_settings() {
        let config = DatabaseConfig::new("postgres://localhost/eatright".to_string());

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_map_non_database_errors_to_database_error() {
        assert!(matches!(
            map_write_error(sqlx::Error::RowNotFound),
            RepositoryError::DatabaseError
        ));
        assert!(matches!(
            map_write_error(sqlx::Error::PoolTimedOut),
            RepositoryError::DatabaseError
        ));
    }
}
