//! Askama templates for the web frontend.

use askama::Template;

use crate::network::NetworkGraph;
use crate::planner::{DirectionStep, Directions};
use crate::printer::instructions;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the station pickers.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stations: Vec<StationOption>,
}

impl IndexTemplate {
    /// Offer every station of `graph`, sorted by name.
    pub fn from_graph(graph: &NetworkGraph) -> Self {
        let mut stations: Vec<StationOption> = graph
            .stations()
            .iter()
            .map(|station| StationOption {
                name: station.name().to_string(),
                lines: graph
                    .lines_serving(station)
                    .iter()
                    .map(|line| line.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .collect();
        stations.sort_by(|a, b| a.name.cmp(&b.name));

        Self { stations }
    }
}

// ============================================================================
// Fragment Templates (fetched by the index page, no base.html)
// ============================================================================

/// Directions fragment.
#[derive(Template)]
#[template(path = "directions.html")]
pub struct DirectionsTemplate {
    pub from: String,
    pub to: String,
    pub hops: usize,
    pub transfers: usize,
    pub steps: Vec<StepView>,
    pub instructions: Vec<String>,
}

impl DirectionsTemplate {
    /// Create from planner output.
    pub fn from_directions(directions: &Directions) -> Self {
        Self {
            from: directions.from().name().to_string(),
            to: directions.to().name().to_string(),
            hops: directions.hops(),
            transfers: directions.transfers(),
            steps: directions.steps().iter().map(StepView::from_step).collect(),
            instructions: instructions(directions.steps()),
        }
    }
}

/// Error fragment.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
    pub suggestions: Vec<String>,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// A station in the pickers.
#[derive(Debug, Clone)]
pub struct StationOption {
    pub name: String,
    /// Lines calling here, comma separated
    pub lines: String,
}

/// A direction step view model.
#[derive(Debug, Clone)]
pub struct StepView {
    pub line: String,
    pub board: String,
    pub alight: String,
    pub towards: String,
    pub stops: usize,
    pub passing: Vec<String>,
}

impl StepView {
    /// "1 stop" or "N stops".
    pub fn stops_label(&self) -> String {
        if self.stops == 1 {
            "1 stop".to_string()
        } else {
            format!("{} stops", self.stops)
        }
    }

    /// Create from a compiled step.
    pub fn from_step(step: &DirectionStep) -> Self {
        Self {
            line: step.line().to_string(),
            board: step.boarding().name().to_string(),
            alight: step.alighting().name().to_string(),
            towards: step.towards().name().to_string(),
            stops: step.stops(),
            passing: step.passing().iter().map(|s| s.name().to_string()).collect(),
        }
    }
}
