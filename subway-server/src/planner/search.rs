//! Breadth-first route search.
//!
//! Every hop costs the same regardless of which lines serve it, so BFS
//! yields a route with the fewest stations. Neighbours are expanded in the
//! order their edges were registered, which makes the choice among equally
//! short routes follow the network description.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::domain::Station;
use crate::network::{DataIntegrityError, NetworkGraph, StationIdx, StationNotFound};

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A requested station does not exist
    #[error(transparent)]
    StationNotFound(#[from] StationNotFound),

    /// The query cannot describe a trip (e.g. start equals destination)
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The stations exist but no sequence of lines joins them
    #[error("no route found from {from} to {to}")]
    NoRouteFound { from: Station, to: Station },

    /// The graph disagrees with a route handed to it
    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),
}

/// An ordered walk through the network, start to end inclusive.
///
/// Each consecutive pair of stations shares at least one line when the path
/// was produced by [`find_path`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePath {
    stations: Vec<Station>,
}

impl RoutePath {
    /// Wrap a station sequence.
    ///
    /// No adjacency check is made here; [`compile`](super::compile) rejects
    /// paths that do not follow the graph.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self { stations }
    }

    /// Stations in travel order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of hops (one fewer than the number of stations).
    pub fn hops(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }

    /// First station, if any.
    pub fn start(&self) -> Option<&Station> {
        self.stations.first()
    }

    /// Last station, if any.
    pub fn end(&self) -> Option<&Station> {
        self.stations.last()
    }

    /// Consume the path, returning its stations.
    pub fn into_stations(self) -> Vec<Station> {
        self.stations
    }
}

/// Find a shortest route between two named stations.
///
/// The start is resolved before the destination, so when both names are
/// unknown the error names the start.
pub fn find_path(
    graph: &NetworkGraph,
    start_name: &str,
    end_name: &str,
) -> Result<RoutePath, RouteError> {
    let start = graph.resolve(start_name)?;
    let end = graph.resolve(end_name)?;

    if start == end {
        return Err(RouteError::InvalidQuery(format!(
            "start and destination are both {}",
            graph.station_at(start)
        )));
    }

    let count = graph.stations().len();
    let mut parents: Vec<Option<StationIdx>> = vec![None; count];
    let mut visited = vec![false; count];
    let mut queue = VecDeque::new();
    let mut explored = 0usize;

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        explored += 1;
        trace!(station = %graph.station_at(current), "BFS exploring station");

        for next in graph.neighbor_indices(current) {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            parents[next] = Some(current);

            if next == end {
                let path = reconstruct_path(graph, &parents, end);
                debug!(
                    from = %graph.station_at(start),
                    to = %graph.station_at(end),
                    hops = path.hops(),
                    explored,
                    "route found"
                );
                return Ok(path);
            }
            queue.push_back(next);
        }
    }

    debug!(
        from = %graph.station_at(start),
        to = %graph.station_at(end),
        explored,
        "no route"
    );

    Err(RouteError::NoRouteFound {
        from: graph.station_at(start).clone(),
        to: graph.station_at(end).clone(),
    })
}

/// Walk parent links back from `end` to the root of the search tree.
fn reconstruct_path(
    graph: &NetworkGraph,
    parents: &[Option<StationIdx>],
    end: StationIdx,
) -> RoutePath {
    let mut stations = vec![graph.station_at(end).clone()];
    let mut cursor = parents[end];

    while let Some(idx) = cursor {
        stations.push(graph.station_at(idx).clone());
        cursor = parents[idx];
    }

    stations.reverse();
    RoutePath::from_stations(stations)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(path: &RoutePath) -> Vec<&str> {
        path.stations().iter().map(Station::name).collect()
    }

    fn line_abc() -> NetworkGraph {
        NetworkGraph::builder()
            .stations(["A", "B", "C"])
            .line("L1", ["A", "B", "C"])
            .build()
            .unwrap()
    }

    #[test]
    fn direct_route() {
        let graph = line_abc();
        let path = find_path(&graph, "A", "C").unwrap();
        assert_eq!(names(&path), vec!["A", "B", "C"]);
        assert_eq!(path.hops(), 2);
        assert_eq!(path.start().unwrap().name(), "A");
        assert_eq!(path.end().unwrap().name(), "C");
    }

    #[test]
    fn reverse_direction() {
        let graph = line_abc();
        let path = find_path(&graph, "C", "A").unwrap();
        assert_eq!(names(&path), vec!["C", "B", "A"]);
    }

    #[test]
    fn names_are_trimmed() {
        let graph = line_abc();
        let path = find_path(&graph, " A ", "B\t").unwrap();
        assert_eq!(names(&path), vec!["A", "B"]);
    }

    #[test]
    fn same_station_is_invalid() {
        let graph = line_abc();
        let err = find_path(&graph, "B", " B").unwrap_err();
        assert!(matches!(err, RouteError::InvalidQuery(_)));
    }

    #[test]
    fn unknown_start_reported_first() {
        let graph = line_abc();
        let err = find_path(&graph, "X", "Y").unwrap_err();
        match err {
            RouteError::StationNotFound(e) => assert_eq!(e.name, "X"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_end_reported() {
        let graph = line_abc();
        let err = find_path(&graph, "A", "Y").unwrap_err();
        match err {
            RouteError::StationNotFound(e) => assert_eq!(e.name, "Y"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unreachable_station() {
        let graph = NetworkGraph::builder()
            .stations(["A", "B", "C", "E"])
            .line("L1", ["A", "B", "C"])
            .allow_isolated_stations(true)
            .build()
            .unwrap();

        let err = find_path(&graph, "A", "E").unwrap_err();
        assert_eq!(
            err,
            RouteError::NoRouteFound {
                from: Station::new("A").unwrap(),
                to: Station::new("E").unwrap(),
            }
        );
    }

    #[test]
    fn disconnected_components() {
        let graph = NetworkGraph::builder()
            .stations(["A", "B", "C", "D"])
            .line("North", ["A", "B"])
            .line("South", ["C", "D"])
            .build()
            .unwrap();

        assert!(matches!(
            find_path(&graph, "A", "D"),
            Err(RouteError::NoRouteFound { .. })
        ));
    }

    #[test]
    fn prefers_fewest_hops_over_fewest_lines() {
        // One-line route A-B-C-D-E (4 hops) vs. two lines A-X-E (2 hops)
        let graph = NetworkGraph::builder()
            .stations(["A", "B", "C", "D", "E", "X"])
            .line("Long", ["A", "B", "C", "D", "E"])
            .line("Short1", ["A", "X"])
            .line("Short2", ["X", "E"])
            .build()
            .unwrap();

        let path = find_path(&graph, "A", "E").unwrap();
        assert_eq!(names(&path), vec!["A", "X", "E"]);
    }

    #[test]
    fn ties_follow_registration_order() {
        // Two 2-hop routes A-B-D and A-C-D; B's edge from A is registered first.
        let graph = NetworkGraph::builder()
            .stations(["A", "B", "C", "D"])
            .line("First", ["A", "B", "D"])
            .line("Second", ["A", "C", "D"])
            .build()
            .unwrap();

        let path = find_path(&graph, "A", "D").unwrap();
        assert_eq!(names(&path), vec!["A", "B", "D"]);

        let swapped = NetworkGraph::builder()
            .stations(["A", "B", "C", "D"])
            .line("Second", ["A", "C", "D"])
            .line("First", ["A", "B", "D"])
            .build()
            .unwrap();

        let path = find_path(&swapped, "A", "D").unwrap();
        assert_eq!(names(&path), vec!["A", "C", "D"]);
    }

    #[test]
    fn loop_line_takes_short_way_round() {
        let graph = NetworkGraph::builder()
            .stations(["A", "B", "C", "D", "E"])
            .line("Circle", ["A", "B", "C", "D", "E", "A"])
            .build()
            .unwrap();

        let path = find_path(&graph, "A", "E").unwrap();
        assert_eq!(names(&path), vec!["A", "E"]);
    }

    #[test]
    fn start_never_revisited() {
        let graph = NetworkGraph::builder()
            .stations(["A", "B", "C"])
            .line("Circle", ["A", "B", "C", "A"])
            .build()
            .unwrap();

        for (from, to) in [("A", "B"), ("A", "C"), ("B", "C")] {
            let path = find_path(&graph, from, to).unwrap();
            let starts = path
                .stations()
                .iter()
                .filter(|s| s.name() == from)
                .count();
            assert_eq!(starts, 1);
        }
    }
}
