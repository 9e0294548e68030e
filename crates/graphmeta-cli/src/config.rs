//! Binary configuration.

use std::time::Duration;

use clap::Parser;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "graphmeta")]
#[command(version, about = "Apply storage schema metadata to a Hasura endpoint", long_about = None)]
pub struct Args {
    /// Base URL of the Hasura API (e.g. "http://localhost:8080/v1").
    #[arg(long)]
    pub endpoint: String,

    /// Admin secret for the metadata endpoint.
    #[arg(long, env = "HASURA_GRAPHQL_ADMIN_SECRET", hide_env_values = true)]
    pub admin_secret: String,

    /// Per-request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
}

/// Resolved binary configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Base URL of the Hasura API.
    pub endpoint: String,
    /// Admin secret for the metadata endpoint.
    pub admin_secret: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Args {
    /// Convert command-line arguments to the binary configuration.
    pub fn into_config(self) -> CliConfig {
        CliConfig {
            endpoint: self.endpoint,
            admin_secret: self.admin_secret,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}
