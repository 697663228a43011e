//! Common service skeleton for the VibeTrading platform
//!
//! This library contains the pieces shared by every VibeTrading
//! microservice: the service identity catalog, environment configuration,
//! error handling, and the HTTP skeleton (liveness probe plus identity
//! endpoint). Each service crate constructs its descriptor here and invokes
//! [`server::serve`].

pub mod config;
pub mod descriptor;
pub mod error;
pub mod server;

/// Re-export important types
pub use config::{CorsConfig, ServiceConfig};
pub use descriptor::ServiceDescriptor;
pub use error::{Error, Result};
