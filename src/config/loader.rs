//! Configuration loading from disk.
//!
//! The shared-secret file is read on every call so a rotated token takes
//! effect on the next request without a restart. Failures never reach the
//! caller: they are logged and the zero-value config is returned instead.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::NibbleConfig;
use crate::observability::metrics;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "io",
            ConfigError::Parse { .. } => "parse",
        }
    }
}

/// Decode file contents, keeping every field that parsed.
///
/// A syntactically valid JSON object with a badly typed field still yields
/// its well-typed fields alongside the error.
pub fn decode(bytes: &[u8]) -> (NibbleConfig, Option<serde_json::Error>) {
    match serde_json::from_slice::<NibbleConfig>(bytes) {
        Ok(config) => (config, None),
        Err(err) => {
            let partial = serde_json::from_slice::<serde_json::Value>(bytes)
                .ok()
                .and_then(|value| value.as_object().map(NibbleConfig::from_fields))
                .unwrap_or_default();
            (partial, Some(err))
        }
    }
}

/// Handle to the external shared-secret file.
///
/// Holds only the location; nothing read from the file is cached.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    path: PathBuf,
}

impl ConfigSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the config file.
    pub async fn load(&self) -> NibbleConfig {
        tracing::debug!(path = %self.path.display(), "Parsing config");

        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(source) => {
                report(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                });
                return NibbleConfig::default();
            }
        };

        let (config, err) = decode(&bytes);
        if let Some(source) = err {
            report(ConfigError::Parse {
                path: self.path.clone(),
                source,
            });
        }

        config
    }
}

fn report(err: ConfigError) {
    tracing::error!(kind = err.kind(), error = %err, "Config load failed");
    metrics::record_config_error(err.kind());
}
