//! Built-in demo network.
//!
//! Three cross-border routes and three services on Paris-Amsterdam,
//! used when the server starts without a network file.

use chrono::NaiveDateTime;

use crate::domain::ComfortZone;
use crate::reservation::ReservationSystem;

use super::definition::{
    CarriageDefinition, NetworkDefinition, RouteDefinition, ServiceDefinition, StopDefinition,
};
use super::error::NetworkError;

const ROUTES: &[(&str, &str, &[(&str, u32)])] = &[
    (
        "R001",
        "Paris-London",
        &[("Paris", 0), ("Calais", 300), ("Dover", 380), ("London", 450)],
    ),
    (
        "R002",
        "Paris-Amsterdam",
        &[("Paris", 0), ("Calais", 300), ("Antwerp", 420), ("Amsterdam", 520)],
    ),
    (
        "R003",
        "Amsterdam-Berlin",
        &[("Amsterdam", 0), ("Utrecht", 45), ("Hannover", 280), ("Berlin", 450)],
    ),
];

/// (service id, route id, departure)
const SERVICES: &[(&str, &str, &str)] = &[
    ("5160", "R002", "2021-04-01T08:00:00"),
    ("5161", "R002", "2021-12-20T08:00:00"),
    ("5162", "R002", "2021-04-02T10:00:00"),
];

const DEPARTURE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const CARRIAGES: &[(&str, ComfortZone, usize)] = &[
    ("A", ComfortZone::First, 12),
    ("H", ComfortZone::Second, 10),
    ("N", ComfortZone::First, 10),
    ("T", ComfortZone::Second, 10),
];

fn departure(service: &str, value: &str) -> Result<NaiveDateTime, NetworkError> {
    NaiveDateTime::parse_from_str(value, DEPARTURE_FORMAT).map_err(|source| {
        NetworkError::InvalidDeparture {
            service: service.to_string(),
            value: value.to_string(),
            source,
        }
    })
}

/// The demo network as a definition, ready to install.
pub fn sample_network() -> Result<NetworkDefinition, NetworkError> {
    let routes = ROUTES
        .iter()
        .map(|(id, name, stops)| RouteDefinition {
            id: id.to_string(),
            name: name.to_string(),
            stops: stops
                .iter()
                .map(|(station, distance)| StopDefinition {
                    station: station.to_string(),
                    distance: *distance,
                })
                .collect(),
        })
        .collect();

    let carriages: Vec<CarriageDefinition> = CARRIAGES
        .iter()
        .map(|(id, class, seats)| CarriageDefinition {
            id: id.to_string(),
            class: *class,
            seats: *seats,
        })
        .collect();

    let services = SERVICES
        .iter()
        .map(|(id, route, at)| -> Result<_, NetworkError> {
            Ok(ServiceDefinition {
                id: id.to_string(),
                route: route.to_string(),
                departure: departure(id, at)?,
                carriages: carriages.clone(),
            })
        })
        .collect::<Result<Vec<ServiceDefinition>, _>>()?;

    Ok(NetworkDefinition { routes, services })
}

/// A fresh engine with the demo network installed and no bookings.
pub fn sample_system() -> Result<ReservationSystem, NetworkError> {
    let mut system = ReservationSystem::new();
    sample_network()?.install(&mut system)?;
    Ok(system)
}
