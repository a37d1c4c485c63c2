//! Domain error types.
//!
//! These errors represent construction failures in the network model.
//! They are distinct from reservation errors, which describe rejected
//! booking requests against a valid network.

/// Errors from building a [`Route`](super::Route) out of raw inputs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Station and distance lists have different lengths
    #[error("number of stations ({stations}) must equal number of distances ({distances})")]
    LengthMismatch { stations: usize, distances: usize },

    /// A route needs at least one stop
    #[error("route must have at least one stop")]
    Empty,

    /// Cumulative distances went backwards
    #[error("distance to {station} ({distance}) is less than the previous stop ({previous})")]
    DecreasingDistance {
        station: String,
        distance: u32,
        previous: u32,
    },

    /// The same station appears twice on one route
    #[error("station {0} appears more than once on the route")]
    DuplicateStation(String),
}

/// Errors from building a [`Service`](super::Service) seat inventory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// Two carriages share an id
    #[error("carriage {0} appears more than once")]
    DuplicateCarriage(String),

    /// A seat number repeats within one carriage
    #[error("seat {seat} appears more than once in carriage {carriage}")]
    DuplicateSeat { carriage: String, seat: String },
}
