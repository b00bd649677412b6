//! The subway network: graph model and loader.
//!
//! The graph is built once at startup, either from a description file via
//! [`NetworkLoader`] or directly with [`NetworkGraph::builder`], and is
//! read-only afterwards.

mod error;
mod graph;
mod loader;

pub use error::{DataIntegrityError, LoadError, StationNotFound};
pub use graph::{Neighbor, NetworkGraph, NetworkGraphBuilder};
pub use loader::{NetworkLoader, default_network_path, load_network};

pub(crate) use graph::StationIdx;
