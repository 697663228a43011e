//! Service identity catalog
//!
//! Every VibeTrading service is described by one compile-time
//! [`ServiceDescriptor`]. The identity endpoint serves the descriptor's
//! title verbatim, so the catalog is the single source of truth for what a
//! running process calls itself.

/// Immutable identity record for one service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDescriptor {
    /// Short identifier, e.g. `api-gateway`
    pub name: &'static str,
    /// Human-readable name, served verbatim by the identity endpoint
    pub title: &'static str,
    /// Semantic version; identical across all services in a release
    pub version: &'static str,
    /// Port used when `PORT` is unset; `None` means the operator must
    /// supply one
    pub default_port: Option<u16>,
}

/// Release version shared by every service in the catalog
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// API gateway, front-of-house for client traffic
pub const API_GATEWAY: ServiceDescriptor = ServiceDescriptor {
    name: "api-gateway",
    title: "VibeTrading API Gateway",
    version: VERSION,
    default_port: None,
};

/// Market data service
pub const MARKET_DATA_SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "market-data-service",
    title: "VibeTrading Market Data Service",
    version: VERSION,
    default_port: None,
};

/// Market research service
pub const MARKET_RESEARCH_SERVICE: ServiceDescriptor = ServiceDescriptor {
    name: "market-research-service",
    title: "VibeTrading Market Research Service",
    version: VERSION,
    default_port: None,
};

/// Backtest engine; the only service with a built-in default port
pub const BACKTEST_ENGINE: ServiceDescriptor = ServiceDescriptor {
    name: "backtest-engine",
    title: "VibeTrading Backtest Engine",
    version: VERSION,
    default_port: Some(8002),
};

/// Strategy AI worker
pub const STRATEGY_AI_WORKER: ServiceDescriptor = ServiceDescriptor {
    name: "strategy-ai-worker",
    title: "VibeTrading Strategy AI Worker",
    version: VERSION,
    default_port: None,
};

/// All five services, gateway first
pub const CATALOG: [ServiceDescriptor; 5] = [
    API_GATEWAY,
    MARKET_DATA_SERVICE,
    MARKET_RESEARCH_SERVICE,
    BACKTEST_ENGINE,
    STRATEGY_AI_WORKER,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_lists_exactly_five_services() {
        assert_eq!(CATALOG.len(), 5);

        let names: HashSet<&str> = CATALOG.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn versions_match_across_the_catalog() {
        for descriptor in &CATALOG {
            assert_eq!(descriptor.version, VERSION);
        }
    }

    #[test]
    fn titles_are_the_operator_facing_names() {
        assert_eq!(API_GATEWAY.title, "VibeTrading API Gateway");
        assert_eq!(MARKET_DATA_SERVICE.title, "VibeTrading Market Data Service");
        assert_eq!(
            MARKET_RESEARCH_SERVICE.title,
            "VibeTrading Market Research Service"
        );
        assert_eq!(BACKTEST_ENGINE.title, "VibeTrading Backtest Engine");
        assert_eq!(STRATEGY_AI_WORKER.title, "VibeTrading Strategy AI Worker");
    }

    #[test]
    fn only_the_backtest_engine_has_a_default_port() {
        for descriptor in &CATALOG {
            if descriptor.name == "backtest-engine" {
                assert_eq!(descriptor.default_port, Some(8002));
            } else {
                assert_eq!(descriptor.default_port, None);
            }
        }
    }
}
