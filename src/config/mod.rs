//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags + environment
//!     → cli.rs (clap)
//!     → validation.rs (endpoint checks)
//!     → ServerConfig (resolved once at startup)
//!
//! On every request:
//!     loader.rs reads NIBBLE_CONFIG_LOCATION
//!     → JSON decode, keeping well-typed fields
//!     → NibbleConfig (immutable for that request)
//! ```
//!
//! # Design Decisions
//! - The secret file is never cached; rotation needs no restart
//! - Load failures degrade to an empty config, never to an error

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, ConfigSource};
pub use schema::{NibbleConfig, ServerConfig};
