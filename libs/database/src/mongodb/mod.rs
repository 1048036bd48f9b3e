//! MongoDB connection management and health probing.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::connect_from_config;
pub use health::{HealthStatus, check_health_detailed, ping};

pub use mongodb::{Client, Collection, Database};
