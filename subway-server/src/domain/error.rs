//! Domain error types.
//!
//! These errors represent validation failures when constructing domain
//! values. They are distinct from load and routing errors.

use super::Station;

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Line name is blank
    #[error("line name must not be empty")]
    InvalidLineName,

    /// A line needs at least one hop
    #[error("line {line} has {count} stop(s); at least 2 are required")]
    TooFewStops { line: String, count: usize },

    /// The same station is listed twice in a row
    #[error("line {line} lists {station} twice in a row")]
    RepeatedStop { line: String, station: Station },
}
