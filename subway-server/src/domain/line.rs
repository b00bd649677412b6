//! Subway line type.

use std::fmt;
use std::sync::Arc;

use super::{DomainError, Station};

/// A named subway line and the stops it serves, in travel order.
///
/// Lines are ridden in both directions: consecutive stops are adjacent
/// whichever way the rider is heading. A line may come back to a station it
/// already served (loop lines), but never lists the same station twice in a
/// row.
#[derive(Clone, PartialEq, Eq)]
pub struct Line {
    name: Arc<str>,
    stops: Vec<Station>,
}

impl Line {
    /// Create a line from its name and ordered stops.
    pub fn new(name: &str, stops: Vec<Station>) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::InvalidLineName);
        }

        if stops.len() < 2 {
            return Err(DomainError::TooFewStops {
                line: name.to_string(),
                count: stops.len(),
            });
        }

        if let Some(pair) = stops.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(DomainError::RepeatedStop {
                line: name.to_string(),
                station: pair[0].clone(),
            });
        }

        Ok(Self {
            name: Arc::from(name),
            stops,
        })
    }

    /// Returns the line's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the shared line name, for callers that keep it past the line.
    pub fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }

    /// Stops in the order the line was declared.
    pub fn stops(&self) -> &[Station] {
        &self.stops
    }

    /// Iterate over each pair of adjacent stops.
    pub fn hops(&self) -> impl Iterator<Item = (&Station, &Station)> {
        self.stops.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Whether the line calls at `station`.
    pub fn serves(&self, station: &Station) -> bool {
        self.stops.contains(station)
    }

    /// Whether `a` and `b` are adjacent stops on this line.
    pub fn connects(&self, a: &Station, b: &Station) -> bool {
        self.hops()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a))
    }

    /// Whether the line ends where it starts.
    pub fn is_loop(&self) -> bool {
        self.stops.len() > 2 && self.stops.first() == self.stops.last()
    }

    /// The end of the line a rider reaches by travelling from `from` to `to`.
    ///
    /// Returns `None` if the two stations are not adjacent on this line.
    /// A loop has no end, so this is the last station passed before coming
    /// back round to `from`. The first matching hop in declaration order wins.
    pub fn terminus_towards(&self, from: &Station, to: &Station) -> Option<&Station> {
        if self.is_loop() {
            let ring = &self.stops[..self.stops.len() - 1];
            let n = ring.len();
            for i in 0..n {
                let next = (i + 1) % n;
                if ring[i] == *from && ring[next] == *to {
                    return Some(&ring[(i + n - 1) % n]);
                }
                if ring[next] == *from && ring[i] == *to {
                    return Some(&ring[(next + 1) % n]);
                }
            }
            return None;
        }

        for (a, b) in self.hops() {
            if a == from && b == to {
                return self.stops.last();
            }
            if a == to && b == from {
                return self.stops.first();
            }
        }
        None
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Line")
            .field("name", &self.name())
            .field("stops", &self.stops.len())
            .finish()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
