//! Application state management.
//!
//! This module defines the shared application state passed to request handlers.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap: the MongoDB client and database handles share one
/// connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables and CLI flags
    pub config: crate::config::Config,
    pub mongo_client: Client,
    /// Database holding the `products` collection
    pub db: Database,
}
