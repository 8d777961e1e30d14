//! Command-line interface.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::schema::{
    CONFIG_LOCATION_ENV, DEFAULT_CONFIG_LOCATION, DEFAULT_ENDPOINT, DEFAULT_PORT,
};
use crate::config::validation::validate_endpoint;
use crate::config::ServerConfig;

#[derive(Debug, Parser)]
#[command(name = "nibble-auth")]
#[command(about = "Forward-auth gate checking a shared-secret token", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// URL path where the service is accessible
    #[arg(short, long, default_value = DEFAULT_ENDPOINT, value_parser = parse_endpoint)]
    pub endpoint: String,

    /// Address to bind
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub bind: IpAddr,

    /// Location of the JSON config file holding the token
    #[arg(short, long, env = CONFIG_LOCATION_ENV, default_value = DEFAULT_CONFIG_LOCATION)]
    pub config: PathBuf,

    /// Delay applied to every token comparison, in milliseconds
    #[arg(long, default_value_t = 100)]
    pub auth_delay_ms: u64,

    /// Let an empty configured token authenticate requests carrying no token
    #[arg(long, env = "NIBBLE_ALLOW_EMPTY_SECRET")]
    pub allow_empty_secret: bool,

    /// Serve Prometheus metrics on this address
    #[arg(long)]
    pub metrics_address: Option<SocketAddr>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_endpoint(value: &str) -> Result<String, String> {
    validate_endpoint(value).map_err(|e| e.to_string())
}

impl Cli {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_host: self.bind,
            port: self.port,
            endpoint: self.endpoint.clone(),
            config_location: self.config.clone(),
            auth_delay: Duration::from_millis(self.auth_delay_ms),
            allow_empty_secret: self.allow_empty_secret,
            metrics_address: self.metrics_address,
        }
    }
}
