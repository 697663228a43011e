//! Environment configuration for the service skeleton
//!
//! Configuration is read once from the environment at startup and never
//! mutated afterwards. The parsing lives in plain helpers so the logic can
//! be tested without touching the process environment.

use std::env;

use crate::descriptor::ServiceDescriptor;
use crate::error::{Error, Result};

/// Runtime configuration for one service
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// TCP port the listener binds on
    pub port: u16,
}

impl ServiceConfig {
    /// Create a configuration from the `PORT` environment variable
    ///
    /// Services without a default port treat a missing `PORT` as a fatal
    /// configuration error; the backtest engine falls back to its default.
    pub fn from_env(descriptor: &ServiceDescriptor) -> Result<Self> {
        let port = resolve_port(env::var("PORT").ok().as_deref(), descriptor)?;
        Ok(Self { port })
    }
}

/// Resolve the listening port from an optional `PORT` value
fn resolve_port(value: Option<&str>, descriptor: &ServiceDescriptor) -> Result<u16> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::Configuration(format!("invalid PORT value: {:?}", raw))),
        None => descriptor.default_port.ok_or_else(|| {
            Error::Configuration(format!(
                "{} requires the PORT environment variable",
                descriptor.name
            ))
        }),
    }
}

/// Origin allowed when `CORS_ORIGINS` is not set
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// CORS policy for the API gateway
///
/// Origins come from `CORS_ORIGINS`, a comma-separated list. Values are not
/// trimmed: an entry with a stray space never matches a browser `Origin`
/// header.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed origins, in configured order
    pub allowed_origins: Vec<String>,
    /// Whether responses advertise `Access-Control-Allow-Credentials`
    pub allow_credentials: bool,
}

impl CorsConfig {
    /// Create a CORS policy from the `CORS_ORIGINS` environment variable
    pub fn from_env() -> Self {
        let raw =
            env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string());
        Self {
            allowed_origins: parse_origins(&raw),
            allow_credentials: true,
        }
    }
}

/// Split a `CORS_ORIGINS` value on `,` without trimming
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{API_GATEWAY, BACKTEST_ENGINE, MARKET_RESEARCH_SERVICE};

    #[test]
    fn explicit_port_wins_everywhere() {
        assert_eq!(resolve_port(Some("8000"), &API_GATEWAY).unwrap(), 8000);
        assert_eq!(resolve_port(Some("9102"), &BACKTEST_ENGINE).unwrap(), 9102);
    }

    #[test]
    fn backtest_engine_falls_back_to_8002() {
        assert_eq!(resolve_port(None, &BACKTEST_ENGINE).unwrap(), 8002);
    }

    #[test]
    fn missing_port_is_fatal_for_services_without_a_default() {
        let err = resolve_port(None, &MARKET_RESEARCH_SERVICE).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(err.to_string().contains("market-research-service"));
    }

    #[test]
    fn non_numeric_port_is_a_configuration_error() {
        let err = resolve_port(Some("not-a-port"), &BACKTEST_ENGINE).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn out_of_range_port_is_a_configuration_error() {
        let err = resolve_port(Some("70000"), &API_GATEWAY).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn origins_split_on_comma() {
        assert_eq!(
            parse_origins("https://a.example,https://b.example"),
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn origins_are_not_trimmed() {
        assert_eq!(
            parse_origins("https://a.example, https://b.example"),
            vec!["https://a.example", " https://b.example"]
        );
    }

    #[test]
    fn default_origin_is_the_local_frontend() {
        assert_eq!(parse_origins(DEFAULT_CORS_ORIGIN), vec!["http://localhost:3000"]);
    }
}
