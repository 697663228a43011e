//! HTTP skeleton shared by all VibeTrading services
//!
//! Every service exposes the same two-route surface: `GET /health` as a
//! liveness probe and `GET /` echoing the service title. Both handlers are
//! constant functions of the service descriptor, so concurrent requests
//! need no synchronization. Unknown paths get a `404` from the router
//! fallback and wrong methods on the two routes get a `405` from the
//! method router.

use std::net::SocketAddr;

use axum::extract::State;
use axum::http::HeaderValue;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowCredentials, AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::{CorsConfig, ServiceConfig};
use crate::descriptor::ServiceDescriptor;
use crate::error::{Error, Result};

/// Liveness response body
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Identity response body
#[derive(Debug, Serialize)]
struct IdentityResponse {
    message: &'static str,
}

/// Liveness probe
///
/// Answers whenever the listener accepts connections; no dependency checks
/// happen here. "healthy" means the process is up, not that it is fully
/// functional.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Identity endpoint, serving the descriptor title verbatim
async fn root(State(descriptor): State<&'static ServiceDescriptor>) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        message: descriptor.title,
    })
}

/// Build the skeleton router for a service
pub fn router(descriptor: &'static ServiceDescriptor) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(root))
        .with_state(descriptor)
}

/// Build the gateway CORS layer from configuration
///
/// The policy carries credentials, so the origin list is explicit and the
/// allowed methods and headers mirror the preflight request rather than
/// using a wildcard. Non-listed origins receive the plain response with no
/// `Access-Control-Allow-*` headers.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring unusable CORS origin: {:?}", origin);
                None
            }
        })
        .collect();

    let layer = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins.clone()))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request());

    if config.allow_credentials {
        // Credentials are advertised only to origins on the list.
        layer.allow_credentials(AllowCredentials::predicate(move |origin, _| {
            origins.contains(origin)
        }))
    } else {
        layer
    }
}

/// Bind `0.0.0.0:<port>` and serve the app until a termination signal
///
/// In-flight requests are drained before the call returns.
pub async fn serve(
    descriptor: &ServiceDescriptor,
    config: &ServiceConfig,
    app: Router,
) -> Result<()> {
    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let listener = TcpListener::bind(addr).await.map_err(Error::Bind)?;
    info!("{} listening on {}", descriptor.title, addr);

    let app = app.layer(TraceLayer::new_for_http());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Server)?;

    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
