//! Redirect target resolution.
//!
//! Order: an explicit `redirect_to`, then a named workspace `service`, then
//! `/`. Targets are passed through verbatim; nothing checks that they stay on
//! the request's own origin.

use std::str::FromStr;

use axum::http::HeaderValue;

use crate::config::NibbleConfig;
use crate::http::request::QueryParams;

pub const REDIRECT_PARAM: &str = "redirect_to";
pub const SERVICE_PARAM: &str = "service";
pub const FOLDER_PARAM: &str = "folder";

pub const DEFAULT_REDIRECT: &str = "/";

/// Where vscode lands when a folder is requested but no working dir is set.
const FALLBACK_LOCATION: &str = "/home";

/// Workspace services reachable behind the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Notebook,
    Vscode,
    Terminal,
}

impl FromStr for Service {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "notebook" => Ok(Service::Notebook),
            "vscode" => Ok(Service::Vscode),
            "terminal" => Ok(Service::Terminal),
            other => Err(format!("unknown service '{other}'")),
        }
    }
}

impl Service {
    pub fn base_path(&self) -> &'static str {
        match self {
            Service::Notebook => "/notebook",
            Service::Vscode => "/vscode",
            Service::Terminal => "/notebook/terminals/1",
        }
    }

    /// Path of this service, opened on `folder` when one is given.
    pub fn location(&self, folder: Option<&str>, config: &NibbleConfig) -> String {
        let base = self.base_path();
        let Some(folder) = folder else {
            return base.to_string();
        };

        match self {
            // Notebook runs from the working dir, so the folder is already relative.
            Service::Notebook => format!("{base}/tree/{folder}"),
            Service::Vscode if config.working_dir.is_empty() => format!("{base}{FALLBACK_LOCATION}"),
            Service::Vscode => format!("{base}?folder={}/{folder}", config.working_dir),
            Service::Terminal => base.to_string(),
        }
    }
}

/// Resolve where an authenticated client is sent next.
pub fn resolve(query: &QueryParams, config: &NibbleConfig) -> String {
    let target = match query.get(REDIRECT_PARAM) {
        Some(target) => target.to_string(),
        None => match query.get(SERVICE_PARAM).map(str::parse::<Service>) {
            Some(Ok(service)) => service.location(query.get(FOLDER_PARAM), config),
            Some(Err(err)) => {
                tracing::warn!(error = %err, "Ignoring service parameter");
                DEFAULT_REDIRECT.to_string()
            }
            None => {
                tracing::debug!("Redirection URL not found in query params");
                DEFAULT_REDIRECT.to_string()
            }
        },
    };

    if HeaderValue::from_str(&target).is_err() {
        tracing::warn!("Redirect target is not a valid header value, using default");
        return DEFAULT_REDIRECT.to_string();
    }
    target
}
