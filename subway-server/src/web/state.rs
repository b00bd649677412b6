//! Application state for the web layer.

use std::sync::Arc;

use crate::network::NetworkGraph;
use crate::planner::{DirectionsConfig, Planner};

/// Shared application state.
///
/// Cloned into every request; clones share the loaded network.
#[derive(Clone)]
pub struct AppState {
    /// Route planner over the loaded network
    pub planner: Arc<Planner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: NetworkGraph, config: DirectionsConfig) -> Self {
        Self {
            planner: Arc::new(Planner::new(Arc::new(graph), config)),
        }
    }
}
