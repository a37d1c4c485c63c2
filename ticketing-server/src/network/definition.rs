//! JSON network definitions.
//!
//! Routes and services are described in a single JSON document and
//! installed into a [`ReservationSystem`] before any reservation is made.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::{Carriage, ComfortZone, Route, Service, ServiceId, Station};
use crate::reservation::ReservationSystem;

use super::error::NetworkError;

/// A whole network: every route and the services running on them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetworkDefinition {
    #[serde(default)]
    pub routes: Vec<RouteDefinition>,
    #[serde(default)]
    pub services: Vec<ServiceDefinition>,
}

/// A route as listed in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub id: String,
    pub name: String,
    pub stops: Vec<StopDefinition>,
}

/// One stop: station name and cumulative distance in kilometres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopDefinition {
    pub station: String,
    pub distance: u32,
}

/// A service referencing a route by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub id: String,
    pub route: String,
    pub departure: NaiveDateTime,
    pub carriages: Vec<CarriageDefinition>,
}

/// A carriage of identical seats, numbered `<id>1..=<id><seats>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarriageDefinition {
    pub id: String,
    pub class: ComfortZone,
    pub seats: usize,
}

impl NetworkDefinition {
    /// Read a network definition from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| NetworkError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse a network definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the routes, validating stops.
    pub fn build_routes(&self) -> Result<Vec<Route>, NetworkError> {
        self.routes
            .iter()
            .map(|def| {
                let stations = def.stops.iter().map(|s| Station::new(&s.station)).collect();
                let distances = def.stops.iter().map(|s| s.distance).collect();
                Route::try_new(&def.id, &def.name, stations, distances).map_err(|source| {
                    NetworkError::InvalidRoute {
                        route: def.id.clone(),
                        source,
                    }
                })
            })
            .collect()
    }

    /// Build the services against already-built routes.
    pub fn build_services(&self, routes: &[Route]) -> Result<Vec<Service>, NetworkError> {
        let by_id: HashMap<&str, &Route> = routes.iter().map(|r| (r.id.as_str(), r)).collect();

        self.services
            .iter()
            .map(|def| {
                let id = ServiceId::new(def.id.clone())?;
                let route = by_id
                    .get(def.route.as_str())
                    .ok_or_else(|| NetworkError::UnknownRoute {
                        service: def.id.clone(),
                        route: def.route.clone(),
                    })?;
                let carriages = def
                    .carriages
                    .iter()
                    .map(|c| Carriage::uniform(&c.id, c.seats, c.class))
                    .collect();
                Service::try_new(id, (*route).clone(), def.departure, carriages).map_err(
                    |source| NetworkError::InvalidService {
                        service: def.id.clone(),
                        source,
                    },
                )
            })
            .collect()
    }

    /// Validate the whole definition and register it with an engine.
    ///
    /// Nothing is registered unless every route and service is valid.
    /// Returns the number of (routes, services) installed.
    pub fn install(&self, system: &mut ReservationSystem) -> Result<(usize, usize), NetworkError> {
        let routes = self.build_routes()?;
        let services = self.build_services(&routes)?;
        let counts = (routes.len(), services.len());

        for route in routes {
            system.add_route(route);
        }
        for service in services {
            system.add_service(service);
        }

        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    const NETWORK: &str = r#"{
        "routes": [{
            "id": "R002",
            "name": "Paris-Amsterdam",
            "stops": [
                { "station": "Paris", "distance": 0 },
                { "station": "Calais", "distance": 300 },
                { "station": "Amsterdam", "distance": 520 }
            ]
        }],
        "services": [{
            "id": "5160",
            "route": "R002",
            "departure": "2021-04-01T08:00:00",
            "carriages": [
                { "id": "A", "class": "first", "seats": 12 },
                { "id": "H", "class": "second", "seats": 10 }
            ]
        }]
    }"#;

    #[test]
    fn parse_and_install() {
        let def = NetworkDefinition::from_json(NETWORK).unwrap();
        let mut system = ReservationSystem::new();
        let (routes, services) = def.install(&mut system).unwrap();

        assert_eq!((routes, services), (1, 1));
        let service = system.service("5160").unwrap();
        assert_eq!(service.route.len(), 3);
        assert_eq!(service.seat_count(), 22);
        assert_eq!(
            service.date(),
            chrono::NaiveDate::from_ymd_opt(2021, 4, 1).unwrap()
        );
        assert_eq!(
            service.seat_by_id("H", "H10").map(|s| s.comfort),
            Some(ComfortZone::Second)
        );
        assert!(system.route("R002").is_some());
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(NETWORK.as_bytes()).unwrap();

        let def = NetworkDefinition::load(file.path()).unwrap();
        assert_eq!(def.routes.len(), 1);
        assert_eq!(def.services.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = NetworkDefinition::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, NetworkError::Io { .. }));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let err = NetworkDefinition::from_json("{ not json").unwrap_err();
        assert!(matches!(err, NetworkError::Json(_)));
    }

    #[test]
    fn bad_departure_is_rejected() {
        let json = NETWORK.replace("2021-04-01T08:00:00", "first of April");
        assert!(matches!(
            NetworkDefinition::from_json(&json).unwrap_err(),
            NetworkError::Json(_)
        ));
    }

    #[test]
    fn unknown_route_reference() {
        let json = NETWORK.replace(r#""route": "R002""#, r#""route": "R999""#);
        let def = NetworkDefinition::from_json(&json).unwrap();
        let mut system = ReservationSystem::new();

        let err = def.install(&mut system).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownRoute { .. }));
        // Nothing was registered
        assert!(system.route("R002").is_none());
    }

    #[test]
    fn invalid_route_is_rejected() {
        let json = NETWORK.replace(r#""distance": 520"#, r#""distance": 5"#);
        let def = NetworkDefinition::from_json(&json).unwrap();

        let err = def.install(&mut ReservationSystem::new()).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidRoute { .. }));
        assert!(err.to_string().contains("R002"));
    }

    #[test]
    fn repeated_carriage_is_rejected() {
        let json = NETWORK.replace(
            r#"{ "id": "H", "class": "second", "seats": 10 }"#,
            r#"{ "id": "A", "class": "second", "seats": 15 }"#,
        );
        let def = NetworkDefinition::from_json(&json).unwrap();
        let mut system = ReservationSystem::new();

        let err = def.install(&mut system).unwrap_err();
        assert!(matches!(
            err,
            NetworkError::InvalidService {
                source: crate::domain::ServiceError::DuplicateCarriage(_),
                ..
            }
        ));
        assert!(system.service("5160").is_none());
        assert!(system.route("R002").is_none());
    }

    #[test]
    fn empty_service_id_is_rejected() {
        let json = NETWORK.replace(r#""id": "5160""#, r#""id": """#);
        let def = NetworkDefinition::from_json(&json).unwrap();

        let err = def.install(&mut ReservationSystem::new()).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidServiceId(_)));
    }

    #[test]
    fn empty_document_installs_nothing() {
        let def = NetworkDefinition::from_json("{}").unwrap();
        let mut system = ReservationSystem::new();
        assert_eq!(def.install(&mut system).unwrap(), (0, 0));
        assert!(system.services().is_empty());
    }
}
