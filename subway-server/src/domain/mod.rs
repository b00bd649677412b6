//! Domain types for the subway route planner.
//!
//! This module contains the value types the network is made of. All types
//! enforce their invariants at construction time, so code that receives
//! these types can trust their validity.

mod error;
mod line;
mod station;

pub use error::DomainError;
pub use line::Line;
pub use station::{InvalidStationName, Station};
