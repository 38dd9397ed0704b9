//! Edge application state.
//!
//! This module defines the shared state that is available to all request
//! handlers and to the gate middleware.

use std::sync::Arc;

use betacall_auth::AuthBackend;
use betacall_gate::RouteGate;

use crate::config::EdgeConfig;

/// Shared application state for the edge.
pub struct EdgeState<B>
where
    B: AuthBackend,
{
    /// The user-API backend.
    pub backend: Arc<B>,
    /// The route gate, closed over its routing table.
    pub gate: RouteGate,
    /// Edge configuration.
    pub config: EdgeConfig,
}

impl<B> EdgeState<B>
where
    B: AuthBackend,
{
    /// Create a new edge state. The gate is built from the config's routing
    /// table.
    #[must_use]
    pub fn new(backend: Arc<B>, config: EdgeConfig) -> Self {
        Self {
            backend,
            gate: RouteGate::new(config.gate.clone()),
            config,
        }
    }
}

impl<B> Clone for EdgeState<B>
where
    B: AuthBackend,
{
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            gate: self.gate.clone(),
            config: self.config.clone(),
        }
    }
}
