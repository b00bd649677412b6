//! Compilation of a raw station path into rider-facing direction steps.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{Line, Station};
use crate::network::{DataIntegrityError, NetworkGraph};

use super::config::{DirectionsConfig, LineChoice};
use super::search::{RouteError, RoutePath};

/// One instruction: board a line, ride some stops, get off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionStep {
    line: Arc<str>,
    /// Boarding station through alighting station, inclusive. Always at
    /// least two entries.
    stations: Vec<Station>,
    towards: Station,
}

impl DirectionStep {
    /// Name of the line ridden.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Station where the rider boards.
    pub fn boarding(&self) -> &Station {
        &self.stations[0]
    }

    /// Station where the rider gets off.
    pub fn alighting(&self) -> &Station {
        &self.stations[self.stations.len() - 1]
    }

    /// Number of stops ridden (hops on this line).
    pub fn stops(&self) -> usize {
        self.stations.len() - 1
    }

    /// Every station on this leg, boarding to alighting inclusive.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Stations passed without getting off.
    pub fn passing(&self) -> &[Station] {
        &self.stations[1..self.stations.len() - 1]
    }

    /// End of the line in the direction of travel.
    pub fn towards(&self) -> &Station {
        &self.towards
    }
}

/// Turn a station path into direction steps, in travel order.
///
/// Consecutive hops ridden on the same line collapse into one step; a change
/// of line starts a new step. Which line is used for a hop served by several
/// is decided by [`LineChoice`].
pub fn compile(
    path: &RoutePath,
    graph: &NetworkGraph,
    config: &DirectionsConfig,
) -> Result<Vec<DirectionStep>, RouteError> {
    let stations = path.stations();
    if stations.len() < 2 {
        return Err(RouteError::InvalidQuery(
            "a route must visit at least two stations".to_string(),
        ));
    }

    let mut steps = Vec::new();
    let mut current: Option<(&Line, Vec<Station>)> = None;

    for pair in stations.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let candidates = graph.lines_between(from, to);
        let previous = current.as_ref().map(|(line, _)| *line);

        let line = choose_line(&candidates, previous, config.line_choice).ok_or_else(|| {
            DataIntegrityError::MissingEdge {
                from: from.clone(),
                to: to.clone(),
            }
        })?;

        let same_line = previous.is_some_and(|p| p.name() == line.name());
        if same_line {
            if let Some((_, run)) = current.as_mut() {
                run.push(to.clone());
            }
        } else {
            if let Some((ridden, run)) = current.take() {
                steps.push(finish_step(ridden, run));
            }
            current = Some((line, vec![from.clone(), to.clone()]));
        }
    }

    if let Some((ridden, run)) = current {
        steps.push(finish_step(ridden, run));
    }

    debug!(
        hops = path.hops(),
        steps = steps.len(),
        policy = %config.line_choice,
        "compiled directions"
    );

    Ok(steps)
}

/// Pick the line for one hop from the lines that serve it.
fn choose_line<'g>(
    candidates: &[&'g Line],
    previous: Option<&Line>,
    choice: LineChoice,
) -> Option<&'g Line> {
    if choice == LineChoice::PreferCurrent {
        if let Some(prev) = previous {
            if let Some(line) = candidates.iter().find(|l| l.name() == prev.name()) {
                return Some(*line);
            }
        }
    }
    candidates.first().copied()
}

fn finish_step(line: &Line, stations: Vec<Station>) -> DirectionStep {
    let towards = line
        .terminus_towards(&stations[0], &stations[1])
        .unwrap_or(&stations[stations.len() - 1])
        .clone();

    DirectionStep {
        line: line.shared_name(),
        stations,
        towards,
    }
}
