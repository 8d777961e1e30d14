//! Configuration schema definitions.
//!
//! Two kinds of configuration live here:
//! - [`NibbleConfig`]: the shared-secret file, re-read on every request.
//! - [`ServerConfig`]: process settings resolved once at startup from the CLI.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Environment variable overriding the config file location.
pub const CONFIG_LOCATION_ENV: &str = "NIBBLE_CONFIG_LOCATION";

/// Config file location used when the environment does not name one.
pub const DEFAULT_CONFIG_LOCATION: &str = "/etc/nibble/config.json";

/// Default listening port.
pub const DEFAULT_PORT: u16 = 10001;

/// Default path of the auth endpoint.
pub const DEFAULT_ENDPOINT: &str = "/auth";

/// Contents of the shared-secret config file.
///
/// Missing fields deserialize to empty strings, so an absent or unreadable
/// file and an empty object both yield the same zero value.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NibbleConfig {
    /// The shared secret presented by clients.
    pub token: String,

    /// Directory the workspace services were started from.
    pub working_dir: String,
}

impl NibbleConfig {
    /// Build a config from a decoded JSON object, keeping only the fields
    /// that carry a string value.
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        let string_field = |name: &str| {
            fields
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .unwrap_or_default()
        };

        Self {
            token: string_field("token"),
            working_dir: string_field("working_dir"),
        }
    }

    /// Whether a secret has been configured at all.
    pub fn has_secret(&self) -> bool {
        !self.token.is_empty()
    }
}

// The token never reaches the logs.
impl fmt::Debug for NibbleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("NibbleConfig")
            .field("token", &token)
            .field("working_dir", &self.working_dir)
            .finish()
    }
}

/// Process settings for the auth service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub bind_host: IpAddr,

    /// Port the listener binds to.
    pub port: u16,

    /// URL path the auth handler is mounted on.
    pub endpoint: String,

    /// Location of the shared-secret config file.
    pub config_location: PathBuf,

    /// Fixed delay applied to every credential comparison.
    pub auth_delay: Duration,

    /// Let an empty configured secret match an absent token.
    pub allow_empty_secret: bool,

    /// Prometheus scrape endpoint, disabled when `None`.
    pub metrics_address: Option<SocketAddr>,
}

impl ServerConfig {
    /// Socket address the listener binds to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            config_location: PathBuf::from(DEFAULT_CONFIG_LOCATION),
            auth_delay: crate::auth::AUTH_DELAY,
            allow_empty_secret: false,
            metrics_address: None,
        }
    }
}
