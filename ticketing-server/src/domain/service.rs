//! Train service types.
//!
//! A `Service` is one run of a route on a given date, together with the
//! seat inventory of the train operating it. The inventory is fixed when
//! the service is created and never resized.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use super::{Carriage, Route, Seat, ServiceError, ServiceId};

/// A route running on a date with a fixed set of carriages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Timetable id of the run
    pub id: ServiceId,
    /// The route called at
    pub route: Route,
    /// Scheduled departure from the first stop
    pub departure: NaiveDateTime,
    /// Carriages in train order
    pub carriages: Vec<Carriage>,
}

impl Service {
    /// Create a new service.
    ///
    /// # Panics
    ///
    /// Panics if a carriage id repeats, or a seat number repeats within a
    /// carriage. Use [`Service::try_new`] for inventories read from outside
    /// the program.
    pub fn new(
        id: ServiceId,
        route: Route,
        departure: NaiveDateTime,
        carriages: Vec<Carriage>,
    ) -> Self {
        match Self::try_new(id, route, departure, carriages) {
            Ok(service) => service,
            Err(e) => panic!("invalid service: {e}"),
        }
    }

    /// Create a service, reporting a malformed seat inventory as an error.
    pub fn try_new(
        id: ServiceId,
        route: Route,
        departure: NaiveDateTime,
        carriages: Vec<Carriage>,
    ) -> Result<Self, ServiceError> {
        let mut carriage_ids = HashSet::new();
        for carriage in &carriages {
            if !carriage_ids.insert(carriage.id.as_str()) {
                return Err(ServiceError::DuplicateCarriage(carriage.id.clone()));
            }
            let mut numbers = HashSet::new();
            for seat in &carriage.seats {
                if !numbers.insert(seat.number.as_str()) {
                    return Err(ServiceError::DuplicateSeat {
                        carriage: carriage.id.clone(),
                        seat: seat.number.clone(),
                    });
                }
            }
        }

        Ok(Self {
            id,
            route,
            departure,
            carriages,
        })
    }

    /// Calendar date the service runs on.
    pub fn date(&self) -> NaiveDate {
        self.departure.date()
    }

    /// Look up a seat by carriage id and seat number.
    ///
    /// Returns `None` when either the carriage or the seat does not exist;
    /// the caller decides whether that is an error.
    pub fn seat_by_id(&self, carriage_id: &str, seat_number: &str) -> Option<&Seat> {
        self.carriages
            .iter()
            .filter(|carriage| carriage.id == carriage_id)
            .find_map(|carriage| carriage.seat(seat_number))
    }

    /// Find a carriage by id.
    pub fn carriage(&self, carriage_id: &str) -> Option<&Carriage> {
        self.carriages.iter().find(|c| c.id == carriage_id)
    }

    /// Total number of seats across all carriages.
    pub fn seat_count(&self) -> usize {
        self.carriages.iter().map(|c| c.seats.len()).sum()
    }
}
