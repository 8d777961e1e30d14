//! Nibble forward-auth gate.
//!
//! A reverse proxy delegates a sub-request here for every protected request.
//! The gate checks the presented token against a shared secret read fresh
//! from disk and answers 302 (with an optional session cookie) or 403.

pub mod auth;
pub mod cli;
pub mod config;
pub mod http;
pub mod observability;

pub use auth::{Decision, Gate};
pub use config::{NibbleConfig, ServerConfig};
pub use http::AuthServer;
