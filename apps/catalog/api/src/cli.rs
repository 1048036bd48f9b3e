//! Command line interface

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "catalog-api")]
#[command(about = "Product catalog REST API backed by MongoDB")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// The subcommand to run; `start-server` with no overrides when none was given.
    pub fn command(self) -> Command {
        self.command
            .unwrap_or_else(|| Command::StartServer(ServerArgs::default()))
    }
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Connect to MongoDB and serve the HTTP API
    StartServer(ServerArgs),
}

/// Overrides for values otherwise read from the environment.
#[derive(Debug, Default, Args, PartialEq, Eq)]
pub struct ServerArgs {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// MongoDB connection string (overrides MONGODB_URL)
    #[arg(long)]
    pub mongodb: Option<String>,

    /// Database name (overrides MONGODB_DATABASE)
    #[arg(short, long)]
    pub database: Option<String>,
}
