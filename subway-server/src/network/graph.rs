//! The subway network graph.
//!
//! Stations and lines live in arena vectors in the order they were
//! registered. Adjacency is derived once at build time into a flat
//! per-station edge list; the graph is read-only afterwards and can be
//! shared between threads without locking.

use std::collections::HashMap;

use strsim::jaro_winkler;
use tracing::{debug, warn};

use crate::domain::{Line, Station};

use super::error::{DataIntegrityError, StationNotFound};

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Index of a station in the graph's arena.
pub(crate) type StationIdx = usize;

/// Index of a line in the graph's arena (also its registration order).
pub(crate) type LineIdx = usize;

/// One adjacency slot: a neighbouring station and every line joining them.
#[derive(Debug, Clone)]
struct EdgeSlot {
    to: StationIdx,
    lines: Vec<LineIdx>,
}

/// A neighbour of a station together with the lines that reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighbor<'a> {
    pub station: &'a Station,
    /// Lines joining the two stations, in registration order.
    pub lines: Vec<&'a Line>,
}

/// The subway network: stations, lines and the adjacency between them.
#[derive(Debug, Clone)]
pub struct NetworkGraph {
    stations: Vec<Station>,
    station_index: HashMap<Station, StationIdx>,
    lines: Vec<Line>,
    line_index: HashMap<String, LineIdx>,
    adjacency: Vec<Vec<EdgeSlot>>,
}

impl NetworkGraph {
    /// Start building a graph.
    pub fn builder() -> NetworkGraphBuilder {
        NetworkGraphBuilder::new()
    }

    /// All stations, in registration order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// All lines, in registration order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Whether a station with this name exists.
    pub fn has_station(&self, name: &str) -> bool {
        self.station_index.contains_key(name.trim())
    }

    /// Look up a station by name.
    ///
    /// Surrounding whitespace is ignored. Unknown names fail with up to
    /// three similar station names as suggestions.
    pub fn station_by_name(&self, name: &str) -> Result<&Station, StationNotFound> {
        self.resolve(name).map(|idx| &self.stations[idx])
    }

    /// Look up a line by name.
    pub fn line_by_name(&self, name: &str) -> Option<&Line> {
        self.line_index
            .get(name.trim())
            .map(|&idx| &self.lines[idx])
    }

    /// Neighbours of `station`, in the order their edges were registered.
    ///
    /// Returns an empty list for stations that are not in the graph.
    pub fn neighbors_of(&self, station: &Station) -> Vec<Neighbor<'_>> {
        let Some(idx) = self.index_of(station) else {
            return Vec::new();
        };

        self.adjacency[idx]
            .iter()
            .map(|slot| Neighbor {
                station: &self.stations[slot.to],
                lines: slot.lines.iter().map(|&l| &self.lines[l]).collect(),
            })
            .collect()
    }

    /// Lines joining two adjacent stations, in registration order.
    ///
    /// Empty if the stations are not adjacent.
    pub fn lines_between(&self, a: &Station, b: &Station) -> Vec<&Line> {
        let (Some(a), Some(b)) = (self.index_of(a), self.index_of(b)) else {
            return Vec::new();
        };

        self.adjacency[a]
            .iter()
            .find(|slot| slot.to == b)
            .map(|slot| slot.lines.iter().map(|&l| &self.lines[l]).collect())
            .unwrap_or_default()
    }

    /// Lines calling at `station`, in registration order.
    pub fn lines_serving(&self, station: &Station) -> Vec<&Line> {
        self.lines.iter().filter(|l| l.serves(station)).collect()
    }

    /// Stations that no line serves.
    ///
    /// Always empty unless the graph was built with
    /// [`NetworkGraphBuilder::allow_isolated_stations`].
    pub fn isolated_stations(&self) -> Vec<&Station> {
        self.adjacency
            .iter()
            .enumerate()
            .filter(|(_, edges)| edges.is_empty())
            .map(|(idx, _)| &self.stations[idx])
            .collect()
    }

    /// Station names similar to `name`, best match first.
    pub fn fuzzy_station_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.trim().to_lowercase();

        let mut scored: Vec<(f64, &Station)> = self
            .stations
            .iter()
            .map(|s| (jaro_winkler(&needle, &s.name().to_lowercase()), s))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        scored
            .into_iter()
            .take(limit)
            .map(|(_, s)| s.name().to_string())
            .collect()
    }

    pub(crate) fn resolve(&self, name: &str) -> Result<StationIdx, StationNotFound> {
        self.station_index
            .get(name.trim())
            .copied()
            .ok_or_else(|| StationNotFound {
                name: name.to_string(),
                suggestions: self.fuzzy_station_matches(name, 3),
            })
    }

    pub(crate) fn index_of(&self, station: &Station) -> Option<StationIdx> {
        self.station_index.get(station).copied()
    }

    pub(crate) fn station_at(&self, idx: StationIdx) -> &Station {
        &self.stations[idx]
    }

    pub(crate) fn neighbor_indices(
        &self,
        idx: StationIdx,
    ) -> impl Iterator<Item = StationIdx> + '_ {
        self.adjacency[idx].iter().map(|slot| slot.to)
    }

    /// Total number of undirected station pairs joined by at least one line.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

/// Builder for [`NetworkGraph`].
///
/// Stations and lines are recorded as given; all validation happens in
/// [`build`](Self::build) so that the first structural problem is reported
/// with its context.
#[derive(Debug, Default)]
pub struct NetworkGraphBuilder {
    stations: Vec<String>,
    lines: Vec<(String, Vec<String>)>,
    allow_isolated: bool,
}

impl NetworkGraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a station.
    pub fn station(mut self, name: &str) -> Self {
        self.stations.push(name.to_string());
        self
    }

    /// Declare several stations.
    pub fn stations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stations
            .extend(names.into_iter().map(|n| n.as_ref().to_string()));
        self
    }

    /// Declare a line with its stops in travel order.
    pub fn line<I, S>(mut self, name: &str, stops: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stops = stops.into_iter().map(|s| s.as_ref().to_string()).collect();
        self.lines.push((name.to_string(), stops));
        self
    }

    /// Accept stations that no line serves instead of rejecting the network.
    pub fn allow_isolated_stations(mut self, allow: bool) -> Self {
        self.allow_isolated = allow;
        self
    }

    /// Validate the declarations and derive the adjacency.
    pub fn build(self) -> Result<NetworkGraph, DataIntegrityError> {
        if self.stations.is_empty() {
            return Err(DataIntegrityError::EmptyNetwork);
        }

        let mut stations = Vec::with_capacity(self.stations.len());
        let mut station_index = HashMap::with_capacity(self.stations.len());

        for name in &self.stations {
            let station = Station::new(name).map_err(|source| {
                DataIntegrityError::InvalidStation {
                    name: name.clone(),
                    source,
                }
            })?;
            if station_index.contains_key(&station) {
                return Err(DataIntegrityError::DuplicateStation(station));
            }
            station_index.insert(station.clone(), stations.len());
            stations.push(station);
        }

        let mut lines = Vec::with_capacity(self.lines.len());
        let mut line_index = HashMap::with_capacity(self.lines.len());

        for (name, stop_names) in &self.lines {
            let line_name = name.trim().to_string();
            if line_index.contains_key(&line_name) {
                return Err(DataIntegrityError::DuplicateLine(line_name));
            }

            let mut stops = Vec::with_capacity(stop_names.len());
            for stop in stop_names {
                let known = station_index
                    .get_key_value(stop.trim())
                    .map(|(station, _)| station.clone());
                match known {
                    Some(station) => stops.push(station),
                    None => {
                        return Err(DataIntegrityError::UnknownStation {
                            line: line_name,
                            station: stop.trim().to_string(),
                        });
                    }
                }
            }

            let line = Line::new(&line_name, stops)?;
            line_index.insert(line_name, lines.len());
            lines.push(line);
        }

        let mut adjacency: Vec<Vec<EdgeSlot>> = vec![Vec::new(); stations.len()];
        for (line_idx, line) in lines.iter().enumerate() {
            for (a, b) in line.hops() {
                let a = station_index[a];
                let b = station_index[b];
                link(&mut adjacency[a], b, line_idx);
                link(&mut adjacency[b], a, line_idx);
            }
        }

        let graph = NetworkGraph {
            stations,
            station_index,
            lines,
            line_index,
            adjacency,
        };

        let isolated = graph.isolated_stations();
        if let Some(first) = isolated.first() {
            if !self.allow_isolated {
                return Err(DataIntegrityError::IsolatedStation((*first).clone()));
            }
            for station in &isolated {
                warn!(station = %station, "station is not served by any line");
            }
        }

        debug!(
            stations = graph.stations.len(),
            lines = graph.lines.len(),
            edges = graph.edge_count(),
            "built network graph"
        );

        Ok(graph)
    }
}

/// Record that `line` joins the slot owner to `to`, merging duplicate edges.
fn link(edges: &mut Vec<EdgeSlot>, to: StationIdx, line: LineIdx) {
    match edges.iter_mut().find(|slot| slot.to == to) {
        Some(slot) => {
            if !slot.lines.contains(&line) {
                slot.lines.push(line);
            }
        }
        None => edges.push(EdgeSlot {
            to,
            lines: vec![line],
        }),
    }
}
