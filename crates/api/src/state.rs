use std::sync::Arc;

use asn_core::RuleEngine;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Stateless rule engine, built once at startup and shared by every request.
    pub engine: Arc<RuleEngine>,
}

impl AppState {
    pub fn new(config: ServerConfig, engine: RuleEngine) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        }
    }
}
