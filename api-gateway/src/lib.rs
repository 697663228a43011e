//! API gateway for the VibeTrading platform
//!
//! The gateway is the front-of-house service: client traffic enters here.
//! At this stage it is the shared service skeleton with a CORS stage in
//! front so browser clients on configured origins can reach it; routing to
//! the backend services is not wired up yet.

use axum::Router;
use common::config::CorsConfig;
use common::descriptor::API_GATEWAY;
use common::server::{cors_layer, router};

/// Build the gateway application: skeleton routes behind the CORS stage
pub fn app(cors: &CorsConfig) -> Router {
    router(&API_GATEWAY).layer(cors_layer(cors))
}
