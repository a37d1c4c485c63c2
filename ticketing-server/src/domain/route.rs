//! Route and stop types.
//!
//! A `Route` is the ordered list of stops a service calls at. A `StopIndex`
//! provides an unambiguous position within that list, and is what travel
//! direction and segment coverage are decided on.

use std::collections::HashSet;

use super::Station;
use super::error::RouteError;

/// Index of a stop within a route's stop list.
///
/// # Examples
///
/// ```
/// use ticketing_server::domain::StopIndex;
///
/// let idx = StopIndex(0);
/// assert!(idx < StopIndex(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopIndex(pub usize);

impl std::fmt::Display for StopIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for StopIndex {
    fn from(value: usize) -> Self {
        StopIndex(value)
    }
}

/// A station's position on a specific route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    /// The station called at
    pub station: Station,
    /// Cumulative distance from the start of the route, in kilometres
    pub distance: u32,
    /// Position of this stop on the route
    pub order: StopIndex,
}

/// An ordered, non-empty sequence of stops.
///
/// Stop order is strictly increasing and distances never decrease. Travel
/// is only valid in the route's forward direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    /// Route identifier (e.g. "R002")
    pub id: String,
    /// Display name (e.g. "Paris-Amsterdam")
    pub name: String,
    stops: Vec<Stop>,
}

impl Route {
    /// Build a route from parallel station and distance lists.
    ///
    /// # Panics
    ///
    /// Panics if the lists differ in length, are empty, contain a repeated
    /// station, or if distances decrease. A malformed route is a setup
    /// bug; use [`Route::try_new`] for definitions from outside the program.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        stations: Vec<Station>,
        distances: Vec<u32>,
    ) -> Self {
        match Self::try_new(id, name, stations, distances) {
            Ok(route) => route,
            Err(e) => panic!("invalid route: {e}"),
        }
    }

    /// Build a route, reporting malformed input as an error.
    pub fn try_new(
        id: impl Into<String>,
        name: impl Into<String>,
        stations: Vec<Station>,
        distances: Vec<u32>,
    ) -> Result<Self, RouteError> {
        if stations.len() != distances.len() {
            return Err(RouteError::LengthMismatch {
                stations: stations.len(),
                distances: distances.len(),
            });
        }
        if stations.is_empty() {
            return Err(RouteError::Empty);
        }

        let mut seen = HashSet::new();
        let mut previous = 0;
        let mut stops = Vec::with_capacity(stations.len());

        for (i, (station, distance)) in stations.into_iter().zip(distances).enumerate() {
            if !seen.insert(station.name().to_string()) {
                return Err(RouteError::DuplicateStation(station.name().to_string()));
            }
            if distance < previous {
                return Err(RouteError::DecreasingDistance {
                    station: station.name().to_string(),
                    distance,
                    previous,
                });
            }
            previous = distance;
            stops.push(Stop {
                station,
                distance,
                order: StopIndex(i),
            });
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            stops,
        })
    }

    /// Returns all stops in travel order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Find the index of the stop at the named station.
    pub fn station_index(&self, name: &str) -> Option<StopIndex> {
        self.stops
            .iter()
            .position(|stop| stop.station.name() == name)
            .map(StopIndex)
    }

    /// Find the station with the given name on this route.
    pub fn station_by_name(&self, name: &str) -> Option<&Station> {
        self.stops
            .iter()
            .find(|stop| stop.station.name() == name)
            .map(|stop| &stop.station)
    }

    /// Can a passenger board at `origin` and alight at `destination`?
    ///
    /// Both must be stops on this route, with the origin strictly before the
    /// destination. Same-station and reversed journeys are rejected.
    pub fn is_valid_origin_destination(&self, origin: &str, destination: &str) -> bool {
        match (self.station_index(origin), self.station_index(destination)) {
            (Some(o), Some(d)) => o < d,
            _ => false,
        }
    }

    /// Distance travelled between two stops, if the pair is a valid journey.
    pub fn distance_between(&self, origin: &str, destination: &str) -> Option<u32> {
        let o = self.station_index(origin)?;
        let d = self.station_index(destination)?;
        if o >= d {
            return None;
        }
        Some(self.stops[d.0].distance - self.stops[o.0].distance)
    }

    /// Origin station of the route.
    pub fn first_station(&self) -> &Station {
        &self.stops[0].station
    }

    /// Terminus of the route.
    pub fn last_station(&self) -> &Station {
        &self.stops[self.stops.len() - 1].station
    }

    /// Returns the number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Always false; routes are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn route_of(len: usize) -> Route {
        let stations = (0..len).map(|i| Station::new(format!("S{i}"))).collect();
        let distances = (0..len as u32).map(|i| i * 10).collect();
        Route::new("R", "Test", stations, distances)
    }

    proptest! {
        /// Only strictly forward pairs are valid journeys
        #[test]
        fn validity_matches_stop_order(len in 1usize..12, a in 0usize..12, b in 0usize..12) {
            let route = route_of(len);
            let valid = route.is_valid_origin_destination(&format!("S{a}"), &format!("S{b}"));
            prop_assert_eq!(valid, a < len && b < len && a < b);
        }

        /// Every station on the route resolves to its own position
        #[test]
        fn station_index_matches_position(len in 1usize..12) {
            let route = route_of(len);
            for i in 0..len {
                prop_assert_eq!(route.station_index(&format!("S{i}")), Some(StopIndex(i)));
            }
        }

        /// Forward distances are never negative and add up along the route
        #[test]
        fn distances_are_additive(len in 3usize..12, a in 0usize..12, b in 0usize..12, c in 0usize..12) {
            let mut idx = [a % len, b % len, c % len];
            idx.sort_unstable();
            let [a, b, c] = idx;
            prop_assume!(a < b && b < c);
            let route = route_of(len);
            let ab = route.distance_between(&format!("S{a}"), &format!("S{b}")).unwrap();
            let bc = route.distance_between(&format!("S{b}"), &format!("S{c}")).unwrap();
            let ac = route.distance_between(&format!("S{a}"), &format!("S{c}")).unwrap();
            prop_assert_eq!(ab + bc, ac);
        }
    }
}
