//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::NetworkGraph;
use crate::planner::{DirectionStep, Directions};
use crate::printer::instructions;

/// Request for directions between two stations.
#[derive(Debug, Deserialize)]
pub struct DirectionsRequest {
    /// Starting station name
    #[serde(default)]
    pub from: String,

    /// Destination station name
    #[serde(default)]
    pub to: String,
}

/// Directions between two stations.
#[derive(Debug, Serialize)]
pub struct DirectionsResponse {
    /// Starting station name
    pub from: String,

    /// Destination station name
    pub to: String,

    /// Total stops ridden
    pub hops: usize,

    /// Number of line changes
    pub transfers: usize,

    /// Steps in travel order
    pub steps: Vec<StepResult>,

    /// Plain-text instructions, one sentence each
    pub instructions: Vec<String>,
}

impl DirectionsResponse {
    /// Create from planner output.
    pub fn from_directions(directions: &Directions) -> Self {
        Self {
            from: directions.from().name().to_string(),
            to: directions.to().name().to_string(),
            hops: directions.hops(),
            transfers: directions.transfers(),
            steps: directions.steps().iter().map(StepResult::from_step).collect(),
            instructions: instructions(directions.steps()),
        }
    }
}

/// One ride on one line.
#[derive(Debug, Serialize)]
pub struct StepResult {
    /// Line name
    pub line: String,

    /// Boarding station
    pub board: String,

    /// Alighting station
    pub alight: String,

    /// End of the line in the direction of travel
    pub towards: String,

    /// Number of stops ridden
    pub stops: usize,

    /// Every station on this step, boarding to alighting
    pub stations: Vec<String>,
}

impl StepResult {
    /// Create from a compiled step.
    pub fn from_step(step: &DirectionStep) -> Self {
        Self {
            line: step.line().to_string(),
            board: step.boarding().name().to_string(),
            alight: step.alighting().name().to_string(),
            towards: step.towards().name().to_string(),
            stops: step.stops(),
            stations: step.stations().iter().map(|s| s.name().to_string()).collect(),
        }
    }
}

/// Every station in the network.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    pub stations: Vec<StationResult>,
}

impl StationListResponse {
    /// List the stations of `graph` in declaration order.
    pub fn from_graph(graph: &NetworkGraph) -> Self {
        let stations = graph
            .stations()
            .iter()
            .map(|station| StationResult {
                name: station.name().to_string(),
                lines: graph
                    .lines_serving(station)
                    .iter()
                    .map(|line| line.name().to_string())
                    .collect(),
            })
            .collect();

        Self { stations }
    }
}

/// A station and the lines calling there.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub name: String,
    pub lines: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    /// Close matches for a misspelt station name
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}
