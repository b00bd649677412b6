//! Station name type.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Error returned when constructing a station from an invalid name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A named stop in the subway network.
///
/// Stations are identified by their display name alone. The name is trimmed
/// on construction and must not be empty. Cloning is cheap: the name is a
/// shared string.
///
/// # Examples
///
/// ```
/// use subway_server::domain::Station;
///
/// let station = Station::new("  DRY Drive ").unwrap();
/// assert_eq!(station.name(), "DRY Drive");
///
/// // Blank names are rejected
/// assert!(Station::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(Arc<str>);

impl Station {
    /// Create a station from its display name.
    pub fn new(name: &str) -> Result<Self, InvalidStationName> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be empty",
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(InvalidStationName {
                reason: "must not contain control characters",
            });
        }

        Ok(Station(Arc::from(trimmed)))
    }

    /// Returns the station's display name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.name())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Hash and Eq both delegate to the name, so lookups by `&str` are sound.
impl Borrow<str> for Station {
    fn borrow(&self) -> &str {
        self.name()
    }
}

impl AsRef<str> for Station {
    fn as_ref(&self) -> &str {
        self.name()
    }
}
