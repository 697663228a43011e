//! API gateway service entrypoint

use api_gateway::app;
use common::config::{CorsConfig, ServiceConfig};
use common::descriptor::API_GATEWAY;
use common::server::serve;
use dotenv::dotenv;
use tracing::{error, info, Level};
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

    let config = match ServiceConfig::from_env(&API_GATEWAY) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let cors = CorsConfig::from_env();
    info!("Allowed CORS origins: {:?}", cors.allowed_origins);

    serve(&API_GATEWAY, &config, app(&cors)).await?;
    Ok(())
}
