//! Web layer for the subway route planner.
//!
//! Provides HTTP endpoints for listing stations and asking for directions.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, NotFoundKind, create_router};
pub use state::AppState;
pub use templates::*;
