/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * into a single immutable `AppConfig` value, built once at startup and
 * passed by reference into each component constructor. Nothing mutates it
 * afterwards, so it is shared across request tasks without synchronization.
 *
 * # Recognized Variables
 *
 * | Variable                 | Required | Default |
 * |--------------------------|----------|---------|
 * | `DATABASE_URL`           | yes      | -       |
 * | `JWT_SECRET`             | yes      | -       |
 * | `POLKA_KEY`              | yes      | -       |
 * | `PLATFORM`               | no       | `prod`  |
 * | `ACCESS_TOKEN_TTL_SECS`  | no       | `3600`  |
 * | `REFRESH_TOKEN_TTL_DAYS` | no       | `60`    |
 * | `SERVER_PORT`            | no       | `8080`  |
 *
 * Missing required variables abort startup; there is no degraded mode
 * without a signing secret or a database.
 */

use chrono::Duration;
use sqlx::PgPool;
use thiserror::Error;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// An environment variable holds an unparseable value
    #[error("invalid value for {var}: {message}")]
    Invalid {
        var: &'static str,
        message: String,
    },
}

/// Immutable server configuration
///
/// Secrets (`jwt_secret`, `polka_key`) live here and in the session guard
/// built from it; they are never logged or serialized.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string
    pub database_url: String,
    /// HMAC secret for access-token signing
    pub jwt_secret: String,
    /// Static API key expected from the Polka webhook
    pub polka_key: String,
    /// Deployment platform; destructive admin endpoints require `dev`
    pub platform: String,
    /// Access-token lifetime
    pub access_token_ttl: Duration,
    /// Refresh-token lifetime
    pub refresh_token_ttl: Duration,
    /// TCP port to listen on
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let jwt_secret = require_var("JWT_SECRET")?;
        let polka_key = require_var("POLKA_KEY")?;

        let platform = std::env::var("PLATFORM").unwrap_or_else(|_| "prod".to_string());

        let access_token_ttl = match std::env::var("ACCESS_TOKEN_TTL_SECS") {
            Ok(raw) => Duration::seconds(parse_var("ACCESS_TOKEN_TTL_SECS", &raw)?),
            Err(_) => Duration::hours(1),
        };

        let refresh_token_ttl = match std::env::var("REFRESH_TOKEN_TTL_DAYS") {
            Ok(raw) => Duration::days(parse_var("REFRESH_TOKEN_TTL_DAYS", &raw)?),
            Err(_) => Duration::days(60),
        };

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => parse_var("SERVER_PORT", &raw)?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            polka_key,
            platform,
            access_token_ttl,
            refresh_token_ttl,
            port,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn parse_var<T: std::str::FromStr>(name: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    raw.parse().map_err(|err: T::Err| ConfigError::Invalid {
        var: name,
        message: err.to_string(),
    })
}

/// Connect to Postgres and run the embedded migrations
///
/// Unlike optional services, the database is load-bearing: any failure here
/// propagates and stops startup.
pub async fn connect_database(config: &AppConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(&config.database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|err| sqlx::Error::Migrate(Box::new(err)))?;

    tracing::info!("Database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_var_accepts_numbers() {
        let value: i64 = parse_var("X", "3600").unwrap();
        assert_eq!(value, 3600);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        let result: Result<u16, _> = parse_var("SERVER_PORT", "not-a-port");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }
}
