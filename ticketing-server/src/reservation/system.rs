//! The reservation engine.
//!
//! Owns the route and service registries and the append-only booking
//! store. A reservation is validated completely before anything is
//! written, so a rejected request leaves the store untouched.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Booking, BookingId, ReservationRequest, Route, Service, ServiceId, Ticket};

use super::error::ReservationError;
use super::index::{SeatIndex, SeatKey};

/// Reservation engine for one transport network.
///
/// Mutating operations take `&mut self`; share an engine between tasks by
/// wrapping it in a lock, holding the write guard for the whole of
/// [`make_reservation`](Self::make_reservation).
#[derive(Debug)]
pub struct ReservationSystem {
    routes: HashMap<String, Route>,
    services: HashMap<ServiceId, Arc<Service>>,
    bookings: BTreeMap<BookingId, Booking>,
    seats: SeatIndex,
    next_booking_id: u32,
}

impl Default for ReservationSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationSystem {
    /// Create an engine with no routes, services or bookings.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            services: HashMap::new(),
            bookings: BTreeMap::new(),
            seats: SeatIndex::new(),
            next_booking_id: 1,
        }
    }

    /// Register a route. An existing route with the same id is replaced.
    pub fn add_route(&mut self, route: Route) {
        debug!(route = %route.id, stops = route.len(), "route registered");
        self.routes.insert(route.id.clone(), route);
    }

    /// Register a service. An existing service with the same id is replaced.
    pub fn add_service(&mut self, service: Service) {
        debug!(
            service = %service.id,
            route = %service.route.id,
            date = %service.date(),
            seats = service.seat_count(),
            "service registered"
        );
        self.services.insert(service.id.clone(), Arc::new(service));
    }

    /// Look up a route by id.
    pub fn route(&self, id: &str) -> Option<&Route> {
        self.routes.get(id)
    }

    /// Look up a service by id.
    pub fn service(&self, id: &str) -> Option<&Arc<Service>> {
        self.services.get(id)
    }

    /// All registered services, ordered by id.
    pub fn services(&self) -> Vec<&Arc<Service>> {
        let mut services: Vec<_> = self.services.values().collect();
        services.sort_by(|a, b| a.id.cmp(&b.id));
        services
    }

    /// Reserve seats for every passenger in the request.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// unknown service, invalid origin/destination, passenger/seat count
    /// mismatch, then per seat (in request order) unknown seat and seat
    /// already taken. Nothing is stored unless every check passes.
    ///
    /// Seats are held on the date the service runs. A request naming some
    /// other date still competes for those same seats.
    pub fn make_reservation(
        &mut self,
        request: &ReservationRequest,
    ) -> Result<Booking, ReservationError> {
        match self.validate(request) {
            Ok(tickets) => Ok(self.store(request, tickets)),
            Err(e) => {
                info!(
                    service = %request.service_id,
                    date = %request.date,
                    code = e.code(),
                    "reservation rejected: {e}"
                );
                Err(e)
            }
        }
    }

    /// Run every check and build the tickets, without touching the store.
    fn validate(&self, request: &ReservationRequest) -> Result<Vec<Ticket>, ReservationError> {
        let service = self
            .services
            .get(request.service_id.as_str())
            .ok_or_else(|| ReservationError::ServiceNotFound(request.service_id.clone()))?;

        let route = &service.route;
        let invalid_route = || ReservationError::InvalidRoute {
            service_id: request.service_id.clone(),
            origin: request.origin.clone(),
            destination: request.destination.clone(),
        };
        if !route.is_valid_origin_destination(&request.origin, &request.destination) {
            return Err(invalid_route());
        }
        let origin = route.station_by_name(&request.origin).ok_or_else(invalid_route)?;
        let destination = route
            .station_by_name(&request.destination)
            .ok_or_else(invalid_route)?;

        if request.passengers.len() != request.seats.len() {
            return Err(ReservationError::PassengerSeatMismatch {
                passengers: request.passengers.len(),
                seats: request.seats.len(),
            });
        }

        if request.date != service.date() {
            debug!(
                service = %service.id,
                requested = %request.date,
                runs = %service.date(),
                "request date differs from service date"
            );
        }

        let mut claimed = HashSet::new();
        let mut tickets = Vec::with_capacity(request.seats.len());

        for (seat_request, passenger) in request.seats.iter().zip(&request.passengers) {
            let seat = service
                .seat_by_id(&seat_request.carriage_id, &seat_request.seat_number)
                .ok_or_else(|| ReservationError::SeatNotFound {
                    service_id: request.service_id.clone(),
                    carriage_id: seat_request.carriage_id.clone(),
                    seat_number: seat_request.seat_number.clone(),
                })?;

            // A service runs on one date; its seats are keyed on that date
            // whatever date the request names.
            let key = SeatKey {
                service_id: service.id.clone(),
                date: service.date(),
                carriage_id: seat.carriage_id.clone(),
                seat_number: seat.number.clone(),
            };
            // A seat asked for twice in one request is as taken as one
            // already in the store.
            if self.seats.is_occupied(&key) || !claimed.insert(key) {
                return Err(ReservationError::SeatAlreadyBooked {
                    service_id: request.service_id.clone(),
                    carriage_id: seat_request.carriage_id.clone(),
                    seat_number: seat_request.seat_number.clone(),
                });
            }

            tickets.push(Ticket {
                seat: seat.clone(),
                origin: origin.clone(),
                destination: destination.clone(),
                service: Arc::clone(service),
                passenger: passenger.clone(),
            });
        }

        Ok(tickets)
    }

    /// Allocate an id and insert a fully validated booking.
    fn store(&mut self, request: &ReservationRequest, tickets: Vec<Ticket>) -> Booking {
        let id = BookingId::from_sequence(self.next_booking_id);
        self.next_booking_id += 1;

        let booking = Booking::new(id, request.passengers.clone(), tickets);
        self.seats.insert_all(id, &booking.tickets);
        self.bookings.insert(id, booking.clone());

        info!(
            booking = %id,
            service = %request.service_id,
            date = %request.date,
            origin = %request.origin,
            destination = %request.destination,
            tickets = booking.tickets.len(),
            seats_taken = self.seats.len(),
            "reservation accepted"
        );

        booking
    }

    /// Look up a booking by id.
    pub fn get_booking(&self, id: BookingId) -> Option<Booking> {
        self.bookings.get(&id).cloned()
    }

    /// Snapshot of every booking, in booking-id order.
    pub fn get_all_bookings(&self) -> Vec<Booking> {
        self.bookings.values().cloned().collect()
    }

    /// Number of stored bookings.
    pub fn booking_count(&self) -> usize {
        self.bookings.len()
    }

    /// Iterate stored bookings in id order.
    pub(super) fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.values()
    }

    pub(super) fn stored_booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.get(&id)
    }

    pub(super) fn seat_index(&self) -> &SeatIndex {
        &self.seats
    }
}
