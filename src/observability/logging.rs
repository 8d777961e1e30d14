//! Structured logging.
//!
//! `RUST_LOG` wins when set; otherwise the CLI verbosity picks the level for
//! this crate and for `tower_http`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a verbosity count.
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("nibble_auth={level},tower_http={level}")
}

/// Initialize the global tracing subscriber.
pub fn init(verbosity: u8) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directive(verbosity).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
