//! Network loading error types.

use crate::domain::{InvalidServiceId, RouteError, ServiceError};

/// Errors from reading or installing a network definition.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// File could not be read
    #[error("failed to read network file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid network document
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A route's stops are malformed
    #[error("route {route}: {source}")]
    InvalidRoute {
        route: String,
        #[source]
        source: RouteError,
    },

    /// A service's seat inventory is malformed
    #[error("service {service}: {source}")]
    InvalidService {
        service: String,
        #[source]
        source: ServiceError,
    },

    /// A built-in departure time is not a valid date-time
    #[error("service {service}: invalid departure {value:?}: {source}")]
    InvalidDeparture {
        service: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A service names a route that is not defined
    #[error("service {service} references unknown route {route}")]
    UnknownRoute { service: String, route: String },

    /// A service id is not usable
    #[error(transparent)]
    InvalidServiceId(#[from] InvalidServiceId),
}
