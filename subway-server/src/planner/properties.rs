//! Property tests for route search and direction compilation over randomly
//! generated networks.

use std::collections::VecDeque;

use proptest::prelude::*;

use super::*;
use crate::domain::Station;

/// A random network: station count and lines as lists of station indices.
fn network() -> impl Strategy<Value = (usize, Vec<Vec<usize>>)> {
    (2usize..9).prop_flat_map(|n| {
        let line = proptest::collection::vec(0..n, 2..6)
            .prop_filter("no stop repeated in a row", |stops| {
                stops.windows(2).all(|w| w[0] != w[1])
            });
        (Just(n), proptest::collection::vec(line, 1..5))
    })
}

fn name(i: usize) -> String {
    format!("S{i}")
}

fn build(n: usize, lines: &[Vec<usize>]) -> NetworkGraph {
    let mut builder = NetworkGraph::builder()
        .stations((0..n).map(name))
        .allow_isolated_stations(true);
    for (i, stops) in lines.iter().enumerate() {
        builder = builder.line(&format!("L{i}"), stops.iter().map(|&s| name(s)));
    }
    builder.build().unwrap()
}

/// Hop distance computed straight from the line lists.
fn reference_distance(n: usize, lines: &[Vec<usize>], from: usize, to: usize) -> Option<usize> {
    let mut adjacent = vec![vec![false; n]; n];
    for stops in lines {
        for w in stops.windows(2) {
            adjacent[w[0]][w[1]] = true;
            adjacent[w[1]][w[0]] = true;
        }
    }

    let mut dist = vec![None; n];
    dist[from] = Some(0);
    let mut queue = VecDeque::from([from]);
    while let Some(u) = queue.pop_front() {
        let d = dist[u].unwrap_or(0);
        for v in 0..n {
            if adjacent[u][v] && dist[v].is_none() {
                dist[v] = Some(d + 1);
                queue.push_back(v);
            }
        }
    }
    dist[to]
}

/// Rebuild the station sequence from steps, dropping shared transfer stations.
fn flatten(steps: &[DirectionStep]) -> Vec<Station> {
    let mut stations: Vec<Station> = Vec::new();
    for step in steps {
        let skip = usize::from(!stations.is_empty());
        stations.extend(step.stations().iter().skip(skip).cloned());
    }
    stations
}

proptest! {
    /// BFS finds a route exactly when one exists, and it is a shortest one
    #[test]
    fn hop_count_matches_reference((n, lines) in network()) {
        let graph = build(n, &lines);
        for from in 0..n {
            for to in (0..n).filter(|&t| t != from) {
                let expected = reference_distance(n, &lines, from, to);
                match find_path(&graph, &name(from), &name(to)) {
                    Ok(path) => prop_assert_eq!(Some(path.hops()), expected),
                    Err(RouteError::NoRouteFound { .. }) => prop_assert_eq!(expected, None),
                    Err(e) => prop_assert!(false, "unexpected error: {}", e),
                }
            }
        }
    }

    /// Reversing a query never changes its hop count
    #[test]
    fn hop_count_symmetric((n, lines) in network()) {
        let graph = build(n, &lines);
        for from in 0..n {
            for to in (from + 1)..n {
                let there = find_path(&graph, &name(from), &name(to)).map(|p| p.hops()).ok();
                let back = find_path(&graph, &name(to), &name(from)).map(|p| p.hops()).ok();
                prop_assert_eq!(there, back);
            }
        }
    }

    /// Paths start and end where asked, and every hop is served by a line
    #[test]
    fn paths_follow_the_graph((n, lines) in network()) {
        let graph = build(n, &lines);
        for from in 0..n {
            for to in (0..n).filter(|&t| t != from) {
                let Ok(path) = find_path(&graph, &name(from), &name(to)) else {
                    continue;
                };
                let (start, end) = (name(from), name(to));
                prop_assert_eq!(path.start().map(Station::name), Some(start.as_str()));
                prop_assert_eq!(path.end().map(Station::name), Some(end.as_str()));
                for w in path.stations().windows(2) {
                    prop_assert!(!graph.lines_between(&w[0], &w[1]).is_empty());
                }
            }
        }
    }

    /// Steps are never empty, ride real lines and reassemble the path
    #[test]
    fn compile_reconstructs_path((n, lines) in network(), registration_order in any::<bool>()) {
        let graph = build(n, &lines);
        let config = DirectionsConfig::new(if registration_order {
            LineChoice::RegistrationOrder
        } else {
            LineChoice::PreferCurrent
        });

        for from in 0..n {
            for to in (0..n).filter(|&t| t != from) {
                let Ok(path) = find_path(&graph, &name(from), &name(to)) else {
                    continue;
                };
                let steps = compile(&path, &graph, &config).unwrap();

                prop_assert!(!steps.is_empty());
                prop_assert_eq!(flatten(&steps), path.stations().to_vec());
                let destination = name(to);
                prop_assert_eq!(
                    steps.last().map(|s| s.alighting().name()),
                    Some(destination.as_str())
                );

                for step in &steps {
                    prop_assert!(step.stops() > 0);
                    let line = graph.line_by_name(step.line()).unwrap();
                    for w in step.stations().windows(2) {
                        prop_assert!(line.connects(&w[0], &w[1]));
                    }
                }

                // Adjacent steps ride different lines
                for pair in steps.windows(2) {
                    prop_assert_ne!(pair[0].line(), pair[1].line());
                }
            }
        }
    }

    /// Staying on the current line never reports more transfers than the
    /// plain registration-order choice
    #[test]
    fn prefer_current_never_adds_transfers((n, lines) in network()) {
        let graph = build(n, &lines);
        let prefer = DirectionsConfig::new(LineChoice::PreferCurrent);
        let plain = DirectionsConfig::new(LineChoice::RegistrationOrder);

        for from in 0..n {
            for to in (0..n).filter(|&t| t != from) {
                let Ok(path) = find_path(&graph, &name(from), &name(to)) else {
                    continue;
                };
                let a = compile(&path, &graph, &prefer).unwrap();
                let b = compile(&path, &graph, &plain).unwrap();
                prop_assert!(a.len() <= b.len());
            }
        }
    }
}
