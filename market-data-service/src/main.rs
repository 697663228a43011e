//! Market data service entrypoint
//!
//! Backend worker intended to ingest and serve market data feeds; for now
//! it exposes the shared service skeleton only.

use common::config::ServiceConfig;
use common::descriptor::MARKET_DATA_SERVICE;
use common::server::{router, serve};
use dotenv::dotenv;
use tracing::{error, Level};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging with debug level when DEBUG=1 env var is set
    let env = std::env::var("DEBUG").unwrap_or_else(|_| "0".to_string());
    let log_level = if env == "1" { Level::DEBUG } else { Level::INFO };

    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match ServiceConfig::from_env(&MARKET_DATA_SERVICE) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    serve(&MARKET_DATA_SERVICE, &config, router(&MARKET_DATA_SERVICE)).await?;
    Ok(())
}
