use std::path::PathBuf;

use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

use super::ConfigError;

const DEFAULT_MIGRATIONS_PATH: &str = "./migrations";

/// Database settings read from the environment.
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub migrations_path: PathBuf,
}

impl DatabaseSettings {
    /// Reads `DATABASE_URL` (required), `DATABASE_MAX_CONNECTIONS` and
    /// `MIGRATIONS_PATH` through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .map(|raw| {
                raw.trim().parse::<u32>().map_err(|_| ConfigError::Invalid {
                    name: "DATABASE_MAX_CONNECTIONS",
                    value: raw,
                })
            })
            .transpose()?;
        let migrations_path = lookup("MIGRATIONS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MIGRATIONS_PATH));

        Ok(Self {
            url,
            max_connections,
            migrations_path,
        })
    }
}

/// Connects to Postgres and applies pending migrations.
pub async fn init_database(settings: &DatabaseSettings) -> anyhow::Result<PgPool> {
    let mut config = DatabaseConfig::new(settings.url.clone());
    if let Some(max_connections) = settings.max_connections {
        config = config.with_max_connections(max_connections);
    }

    let pool = create_postgres_pool(&config).await?;
    run_migrations(&pool, &settings.migrations_path).await?;
    tracing::info!(
        "Database ready, migrations applied from {}",
        settings.migrations_path.display()
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_require_database_url() {
        // Act
        let result = DatabaseSettings::from_lookup(|_| None);

        // Assert
        assert!(matches!(result, Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn should_default_migrations_path() {
        // Act
        let settings = DatabaseSettings::from_lookup(|name| {
            (name == "DATABASE_URL").then(|| "postgres://localhost/carts".to_string())
        })
        .unwrap();

        // Assert
        assert_eq!(settings.max_connections, None);
        assert_eq!(settings.migrations_path, PathBuf::from("./migrations"));
    }

    #[test]
    fn should_reject_invalid_max_connections() {
        // Act
        let result = DatabaseSettings::from_lookup(|name| match name {
            "DATABASE_URL" => Some("postgres://localhost/carts".to_string()),
            "DATABASE_MAX_CONNECTIONS" => Some("many".to_string()),
            _ => None,
        });

        // Assert
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
