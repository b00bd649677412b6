//! Network construction and loading errors.

use std::path::PathBuf;

use crate::domain::{DomainError, InvalidStationName, Station};

/// Structural problems found while building a [`NetworkGraph`].
///
/// These are startup-time failures: a graph that fails to build must not be
/// served.
///
/// [`NetworkGraph`]: super::NetworkGraph
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataIntegrityError {
    /// The network declares no stations at all
    #[error("network has no stations")]
    EmptyNetwork,

    /// A station name failed validation
    #[error("station {name:?}: {source}")]
    InvalidStation {
        name: String,
        #[source]
        source: InvalidStationName,
    },

    /// The same station is declared twice
    #[error("duplicate station name: {0}")]
    DuplicateStation(Station),

    /// The same line is declared twice
    #[error("duplicate line name: {0}")]
    DuplicateLine(String),

    /// A line stops at a station that was never declared
    #[error("line {line} references unknown station {station}")]
    UnknownStation { line: String, station: String },

    /// A line failed validation
    #[error(transparent)]
    InvalidLine(#[from] DomainError),

    /// A declared station is not served by any line
    #[error("station {0} is not served by any line")]
    IsolatedStation(Station),

    /// Two stations expected to be adjacent share no line
    #[error("no line connects {from} and {to}")]
    MissingEdge { from: Station, to: Station },
}

/// Failure to turn a network description into a graph.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source could not be read
    #[error("failed to read network from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The description is not in the expected block format
    #[error("malformed network description at row {row}: {message}")]
    Malformed { row: usize, message: String },

    /// The description parsed but describes an inconsistent network
    #[error("invalid network: {0}")]
    Integrity(#[from] DataIntegrityError),
}

/// Lookup of a station name that does not exist in the graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown station: {name}{}", format_suggestions(.suggestions))]
pub struct StationNotFound {
    /// The name as supplied by the caller.
    pub name: String,

    /// Similar station names, best match first.
    pub suggestions: Vec<String>,
}

fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(". Did you mean '{}'?", only),
        many => format!(
            ". Did you mean one of: {}?",
            many.iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
