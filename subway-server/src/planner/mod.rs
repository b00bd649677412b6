//! Route planning over the subway network.
//!
//! A query runs in two stages: [`find_path`] searches the graph for a route
//! with the fewest hops, then [`compile`] turns that station sequence into
//! the boarding, transfer and alighting instructions a rider follows.
//! [`Planner`] bundles both behind `get_directions`.
//!
//! Everything here is synchronous and works on a shared, immutable graph;
//! callers decide whether to run queries off their own executor.

mod config;
mod directions;
mod search;

#[cfg(test)]
mod properties;

use std::sync::Arc;

pub use config::{DirectionsConfig, InvalidLineChoice, LineChoice};
pub use directions::{DirectionStep, compile};
pub use search::{RouteError, RoutePath, find_path};

use crate::domain::Station;
use crate::network::NetworkGraph;

/// The answer to a directions query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directions {
    path: RoutePath,
    steps: Vec<DirectionStep>,
}

impl Directions {
    /// The raw station path.
    pub fn path(&self) -> &RoutePath {
        &self.path
    }

    /// Steps in travel order. Never empty.
    pub fn steps(&self) -> &[DirectionStep] {
        &self.steps
    }

    /// Starting station.
    pub fn from(&self) -> &Station {
        self.steps[0].boarding()
    }

    /// Destination station.
    pub fn to(&self) -> &Station {
        self.steps[self.steps.len() - 1].alighting()
    }

    /// Total number of hops ridden.
    pub fn hops(&self) -> usize {
        self.path.hops()
    }

    /// Number of line changes.
    pub fn transfers(&self) -> usize {
        self.steps.len() - 1
    }

    /// Consume the answer, returning the steps.
    pub fn into_steps(self) -> Vec<DirectionStep> {
        self.steps
    }
}

/// Answers directions queries against one network.
///
/// Cheap to clone; clones share the graph.
#[derive(Debug, Clone)]
pub struct Planner {
    graph: Arc<NetworkGraph>,
    config: DirectionsConfig,
}

impl Planner {
    /// Create a planner over `graph`.
    pub fn new(graph: Arc<NetworkGraph>, config: DirectionsConfig) -> Self {
        Self { graph, config }
    }

    /// The network this planner routes over.
    pub fn graph(&self) -> &NetworkGraph {
        &self.graph
    }

    /// The direction compilation settings in use.
    pub fn config(&self) -> &DirectionsConfig {
        &self.config
    }

    /// Find the raw station path between two named stations.
    pub fn find_path(&self, start: &str, end: &str) -> Result<RoutePath, RouteError> {
        find_path(&self.graph, start, end)
    }

    /// Find a route and compile it into directions.
    pub fn get_directions(&self, start: &str, end: &str) -> Result<Directions, RouteError> {
        let path = find_path(&self.graph, start, end)?;
        let steps = compile(&path, &self.graph, &self.config)?;
        Ok(Directions { path, steps })
    }
}

/// Directions between two stations using the default line policy.
pub fn get_directions(
    graph: &NetworkGraph,
    start: &str,
    end: &str,
) -> Result<Vec<DirectionStep>, RouteError> {
    let path = find_path(graph, start, end)?;
    compile(&path, graph, &DirectionsConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn objectville() -> Arc<NetworkGraph> {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join(crate::network::default_network_path());
        Arc::new(crate::network::load_network(path).unwrap())
    }

    fn lines(directions: &Directions) -> Vec<&str> {
        directions.steps().iter().map(DirectionStep::line).collect()
    }

    #[test]
    fn direct_route_scenario() {
        let graph = NetworkGraph::builder()
            .stations(["A", "B", "C"])
            .line("L1", ["A", "B", "C"])
            .build()
            .unwrap();

        let steps = get_directions(&graph, "A", "C").unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].line(), "L1");
        assert_eq!(steps[0].boarding().name(), "A");
        assert_eq!(steps[0].alighting().name(), "C");
        assert_eq!(steps[0].stops(), 2);
    }

    #[test]
    fn one_transfer_scenario() {
        let graph = NetworkGraph::builder()
            .stations(["A", "B", "D"])
            .line("L1", ["A", "B"])
            .line("L2", ["B", "D"])
            .build()
            .unwrap();

        let steps = get_directions(&graph, "A", "D").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(
            (steps[0].line(), steps[0].boarding().name(), steps[0].alighting().name(), steps[0].stops()),
            ("L1", "A", "B", 1)
        );
        assert_eq!(
            (steps[1].line(), steps[1].boarding().name(), steps[1].alighting().name(), steps[1].stops()),
            ("L2", "B", "D", 1)
        );
    }

    #[test]
    fn unreachable_scenario() {
        let graph = NetworkGraph::builder()
            .stations(["A", "B", "E"])
            .line("L1", ["A", "B"])
            .allow_isolated_stations(true)
            .build()
            .unwrap();

        assert!(matches!(
            get_directions(&graph, "A", "E"),
            Err(RouteError::NoRouteFound { .. })
        ));
    }

    #[test]
    fn same_station_scenario() {
        let planner = Planner::new(objectville(), DirectionsConfig::default());
        assert!(matches!(
            planner.get_directions("LSP Lane", "LSP Lane"),
            Err(RouteError::InvalidQuery(_))
        ));
    }

    #[test]
    fn unknown_station_scenario() {
        let planner = Planner::new(objectville(), DirectionsConfig::default());
        match planner.get_directions("DRY Drive", "Ajax Rapids") {
            Err(RouteError::StationNotFound(e)) => assert_eq!(e.name, "Ajax Rapids"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn objectville_direct_route() {
        let planner = Planner::new(objectville(), DirectionsConfig::default());
        let directions = planner
            .get_directions("DRY Drive", "Head First Theater")
            .unwrap();

        assert_eq!(lines(&directions), vec!["Booch Line"]);
        assert_eq!(directions.hops(), 2);
        assert_eq!(directions.transfers(), 0);
        assert_eq!(directions.steps()[0].towards().name(), "LSP Lane");
    }

    #[test]
    fn objectville_one_transfer() {
        let planner = Planner::new(objectville(), DirectionsConfig::default());
        let directions = planner
            .get_directions("DRY Drive", "Infinite Circle")
            .unwrap();

        assert_eq!(lines(&directions), vec!["Booch Line", "Gamma Line"]);
        assert_eq!(directions.steps()[0].alighting().name(), "Head First Theater");
        assert_eq!(directions.from().name(), "DRY Drive");
        assert_eq!(directions.to().name(), "Infinite Circle");
        assert_eq!(directions.hops(), 4);
    }

    #[test]
    fn objectville_several_transfers() {
        let planner = Planner::new(objectville(), DirectionsConfig::default());
        let directions = planner
            .get_directions("Weather-O-Rama, Inc.", "Prime Numbers")
            .unwrap();

        assert_eq!(
            lines(&directions),
            vec!["Booch Line", "Gamma Line", "Liskov Line"]
        );
        assert_eq!(directions.hops(), 5);
        assert_eq!(directions.transfers(), 2);
    }

    #[test]
    fn objectville_to_fibonacci() {
        let planner = Planner::new(objectville(), DirectionsConfig::default());
        let directions = planner
            .get_directions("Boards 'R' Us", "Fibonacci")
            .unwrap();

        assert_eq!(
            lines(&directions),
            vec!["Gamma Line", "Booch Line", "Jacobson Line", "Meyer Line"]
        );
        assert_eq!(directions.hops(), 6);
        assert_eq!(directions.to().name(), "Fibonacci");
    }

    #[test]
    fn planner_clones_share_graph() {
        let graph = objectville();
        let planner = Planner::new(Arc::clone(&graph), DirectionsConfig::default());
        let clone = planner.clone();
        assert!(std::ptr::eq(planner.graph(), clone.graph()));
        assert_eq!(Arc::strong_count(&graph), 3);
    }

    #[test]
    fn concurrent_queries() {
        let planner = Planner::new(objectville(), DirectionsConfig::default());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let planner = planner.clone();
                std::thread::spawn(move || {
                    planner
                        .get_directions("DRY Drive", "Fibonacci")
                        .map(|d| d.hops())
                })
            })
            .collect();

        let hops: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();
        assert!(hops.windows(2).all(|w| w[0] == w[1]));
    }
}
