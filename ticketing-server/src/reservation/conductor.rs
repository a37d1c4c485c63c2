//! Conductor queries.
//!
//! Read-only questions asked on board: who gets on or off at a station,
//! who is travelling through a stretch of line, and who sits in a seat.
//! All queries are restricted to one service on one calendar date, and
//! results come back in booking-id order (tickets within a booking keep
//! their request order). "Nobody" is an empty result, never an error.

use chrono::NaiveDate;

use crate::domain::{BookingId, ComfortZone, Passenger, Ticket};

use super::index::SeatKey;
use super::system::ReservationSystem;

/// One row of a passenger manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub booking_id: BookingId,
    pub passenger: Passenger,
    pub carriage_id: String,
    pub seat_number: String,
    pub comfort: ComfortZone,
    pub origin: String,
    pub destination: String,
}

impl ManifestEntry {
    fn from_ticket(booking_id: BookingId, ticket: &Ticket) -> Self {
        Self {
            booking_id,
            passenger: ticket.passenger.clone(),
            carriage_id: ticket.seat.carriage_id.clone(),
            seat_number: ticket.seat.number.clone(),
            comfort: ticket.seat.comfort,
            origin: ticket.origin.name().to_string(),
            destination: ticket.destination.name().to_string(),
        }
    }
}

impl ReservationSystem {
    /// Every ticket for a service on a date, with its booking id.
    fn tickets_on<'a>(
        &'a self,
        service_id: &'a str,
        date: NaiveDate,
    ) -> impl Iterator<Item = (BookingId, &'a Ticket)> + 'a {
        self.bookings()
            .flat_map(|booking| booking.tickets.iter().map(move |t| (booking.id, t)))
            .filter(move |(_, t)| t.is_for(service_id, date))
    }

    /// Manifest of passengers boarding at `station`.
    pub fn boarding_manifest(
        &self,
        service_id: &str,
        station: &str,
        date: NaiveDate,
    ) -> Vec<ManifestEntry> {
        self.tickets_on(service_id, date)
            .filter(|(_, t)| t.origin.name() == station)
            .map(|(id, t)| ManifestEntry::from_ticket(id, t))
            .collect()
    }

    /// Manifest of passengers alighting at `station`.
    pub fn alighting_manifest(
        &self,
        service_id: &str,
        station: &str,
        date: NaiveDate,
    ) -> Vec<ManifestEntry> {
        self.tickets_on(service_id, date)
            .filter(|(_, t)| t.destination.name() == station)
            .map(|(id, t)| ManifestEntry::from_ticket(id, t))
            .collect()
    }

    /// Manifest of passengers on board for the whole stretch between two
    /// stations.
    ///
    /// The stations may be given in either order. A ticket counts only if
    /// its journey covers the entire segment: boarding at or before the
    /// first station and alighting at or after the second. An unknown
    /// service or a station not on the route gives an empty manifest.
    pub fn between_manifest(
        &self,
        service_id: &str,
        station_a: &str,
        station_b: &str,
        date: NaiveDate,
    ) -> Vec<ManifestEntry> {
        let Some(service) = self.service(service_id) else {
            return Vec::new();
        };
        let route = &service.route;
        let (Some(a), Some(b)) = (route.station_index(station_a), route.station_index(station_b))
        else {
            return Vec::new();
        };
        let (start, end) = if a <= b { (a, b) } else { (b, a) };

        self.tickets_on(service_id, date)
            .filter(|(_, t)| {
                let origin = route.station_index(t.origin.name());
                let destination = route.station_index(t.destination.name());
                matches!((origin, destination), (Some(o), Some(d)) if o <= start && d >= end)
            })
            .map(|(id, t)| ManifestEntry::from_ticket(id, t))
            .collect()
    }

    /// Passengers boarding at `station`.
    pub fn passengers_boarding_at(
        &self,
        service_id: &str,
        station: &str,
        date: NaiveDate,
    ) -> Vec<Passenger> {
        passengers(self.boarding_manifest(service_id, station, date))
    }

    /// Passengers alighting at `station`.
    pub fn passengers_alighting_at(
        &self,
        service_id: &str,
        station: &str,
        date: NaiveDate,
    ) -> Vec<Passenger> {
        passengers(self.alighting_manifest(service_id, station, date))
    }

    /// Passengers whose journey covers the segment between two stations.
    pub fn passengers_between_stations(
        &self,
        service_id: &str,
        station_a: &str,
        station_b: &str,
        date: NaiveDate,
    ) -> Vec<Passenger> {
        passengers(self.between_manifest(service_id, station_a, station_b, date))
    }

    /// The ticket holding a seat, with its booking id.
    pub fn seat_occupant(
        &self,
        service_id: &str,
        carriage_id: &str,
        seat_number: &str,
        date: NaiveDate,
    ) -> Option<ManifestEntry> {
        let service = self.service(service_id)?;
        let key = SeatKey {
            service_id: service.id.clone(),
            date,
            carriage_id: carriage_id.to_string(),
            seat_number: seat_number.to_string(),
        };
        let booking_id = self.seat_index().holder(&key)?;
        self.stored_booking(booking_id)?
            .tickets
            .iter()
            .find(|t| t.holds_seat(service_id, carriage_id, seat_number, date))
            .map(|t| ManifestEntry::from_ticket(booking_id, t))
    }

    /// The passenger sitting in a seat, if it is taken.
    pub fn passenger_on_seat(
        &self,
        service_id: &str,
        carriage_id: &str,
        seat_number: &str,
        date: NaiveDate,
    ) -> Option<Passenger> {
        self.seat_occupant(service_id, carriage_id, seat_number, date)
            .map(|entry| entry.passenger)
    }
}

fn passengers(manifest: Vec<ManifestEntry>) -> Vec<Passenger> {
    manifest.into_iter().map(|entry| entry.passenger).collect()
}
