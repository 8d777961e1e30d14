use clap::Parser;

use nibble_auth::cli::Cli;
use nibble_auth::http::AuthServer;
use nibble_auth::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    tracing::info!("nibble-auth v{} starting", env!("CARGO_PKG_VERSION"));

    let config = cli.server_config();
    tracing::info!(
        bind_address = %config.bind_address(),
        endpoint = %config.endpoint,
        config_location = %config.config_location.display(),
        auth_delay_ms = config.auth_delay.as_millis() as u64,
        "Configuration loaded"
    );
    if config.allow_empty_secret {
        tracing::warn!("Empty configured token will authenticate requests without a token");
    }

    if let Some(addr) = config.metrics_address {
        metrics::init_metrics(addr);
    }

    let server = AuthServer::new(config);
    let listener = server.bind().await?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
