#[cfg(feature = "config")]
use core_config::{ConfigError, FromEnv, env_parse};

use crate::common::{DatabaseError, DatabaseResult};

const DEFAULT_URL: &str = "mongodb://localhost:27017";
const DEFAULT_DATABASE: &str = "test_db";

/// MongoDB connection settings.
///
/// ```ignore
/// let config = MongoConfig {
///     database: "catalog".into(),
///     ..MongoConfig::new("mongodb://localhost:27017")
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MongoConfig {
    /// `mongodb://[username:password@]host[:port][/database][?options]`
    pub url: String,
    pub database: String,
    /// Reported to the server in the connection handshake.
    pub app_name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Reject settings the driver would only refuse at connect time.
    pub fn validate(&self) -> DatabaseResult<()> {
        if self.url.trim().is_empty() {
            return Err(DatabaseError::ConfigError("url must not be empty".into()));
        }
        if self.database.trim().is_empty() {
            return Err(DatabaseError::ConfigError(
                "database name must not be empty".into(),
            ));
        }
        if self.max_pool_size == 0 || self.min_pool_size > self.max_pool_size {
            return Err(DatabaseError::ConfigError(format!(
                "invalid pool bounds: min={} max={}",
                self.min_pool_size, self.max_pool_size
            )));
        }
        Ok(())
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            app_name: None,
            max_pool_size: 100,
            min_pool_size: 5,
            connect_timeout_secs: 10,
            server_selection_timeout_secs: 30,
        }
    }
}

/// Environment variables:
/// - `MONGODB_URL` or `MONGO_URL` (default `mongodb://localhost:27017`)
/// - `MONGODB_DATABASE` or `MONGO_DATABASE` (default `test_db`)
/// - `MONGODB_APP_NAME`
/// - `MONGODB_MAX_POOL_SIZE` (default 100), `MONGODB_MIN_POOL_SIZE` (default 5)
/// - `MONGODB_CONNECT_TIMEOUT_SECS` (default 10)
/// - `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` (default 30)
#[cfg(feature = "config")]
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let url = std::env::var("MONGODB_URL")
            .or_else(|_| std::env::var("MONGO_URL"))
            .unwrap_or(defaults.url);
        let database = std::env::var("MONGODB_DATABASE")
            .or_else(|_| std::env::var("MONGO_DATABASE"))
            .unwrap_or(defaults.database);

        let config = Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: env_parse("MONGODB_MAX_POOL_SIZE", defaults.max_pool_size)?,
            min_pool_size: env_parse("MONGODB_MIN_POOL_SIZE", defaults.min_pool_size)?,
            connect_timeout_secs: env_parse(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            server_selection_timeout_secs: env_parse(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                defaults.server_selection_timeout_secs,
            )?,
        };

        config.validate().map_err(|e| ConfigError::InvalidValue {
            key: "MONGODB".to_string(),
            details: e.to_string(),
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_local_test_db() {
        let config = MongoConfig::default();
        assert_eq!(config.url(), "mongodb://localhost:27017");
        assert_eq!(config.database(), "test_db");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_keeps_default_pool_and_database() {
        let config = MongoConfig::new("mongodb://db:27017");
        assert_eq!(config.url(), "mongodb://db:27017");
        assert_eq!(config.database(), "test_db");
        assert_eq!((config.max_pool_size, config.min_pool_size), (100, 5));
        assert!(config.app_name.is_none());
    }

    #[test]
    fn test_validate_rejects_inverted_pool_bounds() {
        let config = MongoConfig {
            max_pool_size: 2,
            min_pool_size: 10,
            ..MongoConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(DatabaseError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_database() {
        let config = MongoConfig {
            database: " ".into(),
            ..MongoConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", None),
                ("MONGODB_DATABASE", None),
                ("MONGO_DATABASE", None),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config, MongoConfig::default());
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_fallback_names() {
        temp_env::with_vars(
            [
                ("MONGODB_URL", None::<&str>),
                ("MONGO_URL", Some("mongodb://fallback:27017")),
                ("MONGODB_DATABASE", None),
                ("MONGO_DATABASE", Some("fallbackdb")),
            ],
            || {
                let config = MongoConfig::from_env().unwrap();
                assert_eq!(config.url, "mongodb://fallback:27017");
                assert_eq!(config.database, "fallbackdb");
            },
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn test_from_env_bad_pool_size() {
        temp_env::with_var("MONGODB_MAX_POOL_SIZE", Some("lots"), || {
            let err = MongoConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("MONGODB_MAX_POOL_SIZE"));
        });
    }
}
