use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_or_default, server::ServerConfig};
use validator::ValidateEmail;

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

use crate::cli::ServerArgs;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    /// `CORS_ALLOWED_ORIGINS`, comma-separated; `*` allows any origin
    pub cors_allowed_origins: Vec<String>,
    pub admin_email: String,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let cors_allowed_origins = parse_origins(&env_or_default("CORS_ALLOWED_ORIGINS", "*"))?;
        let admin_email = parse_admin_email(env_or_default("ADMIN_EMAIL", "admin@example.com"))?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            environment,
            cors_allowed_origins,
            admin_email,
        })
    }

    /// Apply command line overrides on top of the environment.
    pub fn with_overrides(mut self, args: ServerArgs) -> Self {
        self.server = self.server.with_overrides(args.host, args.port);
        if let Some(url) = args.mongodb {
            self.mongodb.url = url;
        }
        if let Some(database) = args.database {
            self.mongodb.database = database;
        }
        self
    }
}

fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect();

    if origins.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "CORS_ALLOWED_ORIGINS".to_string(),
            details: "at least one origin is required".to_string(),
        });
    }
    Ok(origins)
}

fn parse_admin_email(email: String) -> Result<String, ConfigError> {
    if !email.validate_email() {
        return Err(ConfigError::InvalidValue {
            key: "ADMIN_EMAIL".to_string(),
            details: format!("'{email}' is not an email address"),
        });
    }
    Ok(email)
}
