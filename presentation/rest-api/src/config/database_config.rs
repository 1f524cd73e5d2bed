use anyhow::Context;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Initialize the database pool and bring the schema up to date
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
/// - MIGRATIONS_PATH: directory with SQL migrations (default: "./migrations")
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails or a migration fails
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let max_connections = parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok());
    let migrations_path =
        env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

    let config = DatabaseConfig::new(db_url).with_max_connections(max_connections);
    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &migrations_path).await?;
    tracing::info!("Database migrations applied from {}", migrations_path);

    Ok(pool)
}

fn parse_max_connections(raw: Option<String>) -> u32 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(DatabaseConfig::DEFAULT_MAX_CONNECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_pool_size() {
        assert_eq!(parse_max_connections(Some(" 12 ".to_string())), 12);
    }

    #[test]
    fn should_default_pool_size_when_missing_or_invalid() {
        assert_eq!(parse_max_connections(None), 5);
        assert_eq!(parse_max_connections(Some("many".to_string())), 5);
    }
}
