use business::domain::errors::RepositoryError;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{path::Path, time::Duration};
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the database connection
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Overrides the pool size. Zero falls back to the default.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = if max_connections == 0 {
            Self::DEFAULT_MAX_CONNECTIONS
        } else {
            max_connections
        };
        self
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
            error!(target: "persistence", "Cannot connect to database: {}", e);
            DatabaseError::ConnectionError
        })?;

    info!(
        target: "persistence",
        "Database pool ready (max {} connections)",
        config.max_connections
    );
    Ok(pool)
}

/// Runs database migrations from the specified directory
pub async fn run_migrations(pool: &PgPool, migrations_path: &str) -> Result<(), DatabaseError> {
    let path = Path::new(migrations_path);

    if !path.exists() {
        error!(target: "persistence", "Migrations directory not found: {}", migrations_path);
        return Err(DatabaseError::MigrationError);
    }

    sqlx::migrate::Migrator::new(path)
        .await
        .map_err(|e| {
            error!(target: "persistence", "Cannot load migrations: {}", e);
            DatabaseError::MigrationError
        })?
        .run(pool)
        .await
        .map_err(|e| {
            error!(target: "persistence", "Migration failed: {}", e);
            DatabaseError::MigrationError
        })
}

/// Maps a driver error onto the repository port. Unique violations become
/// `Duplicated`; everything else is logged and reported as `DatabaseError`.
pub(crate) fn map_sqlx_error(action: &str, err: sqlx::Error) -> RepositoryError {
    if err
        .as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
    {
        return RepositoryError::Duplicated;
    }
    error!(target: "persistence", "{} failed: {}", action, err);
    RepositoryError::DatabaseError
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_default_pool_size() {
        let config = DatabaseConfig::new("postgres://localhost/shopping".to_string());

        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(30));
    }

    #[test]
    fn should_fall_back_to_default_for_zero_connections() {
        let config = DatabaseConfig::new("postgres://localhost/shopping".to_string())
            .with_max_connections(0);

        assert_eq!(config.max_connections, DatabaseConfig::DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn should_map_missing_row_to_database_error() {
        let mapped = map_sqlx_error("Loading row", sqlx::Error::RowNotFound);

        assert_eq!(mapped, RepositoryError::DatabaseError);
    }

    #[tokio::test]
    async fn should_fail_when_migrations_directory_is_missing() {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/shopping")
            .unwrap();

        let result = run_migrations(&pool, "./does-not-exist").await;

        assert!(matches!(result, Err(DatabaseError::MigrationError)));
    }
}
