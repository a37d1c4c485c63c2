//! Station types.

use std::fmt;

/// A station on the network, identified by its name.
///
/// Names are expected to be unique within a route's stop list; two stations
/// with the same name are the same station.
///
/// # Examples
///
/// ```
/// use ticketing_server::domain::Station;
///
/// let paris = Station::new("Paris");
/// assert_eq!(paris.name(), "Paris");
/// assert_eq!(paris, Station::new("Paris"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station {
    name: String,
}

impl Station {
    /// Create a station with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the station name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.name)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
