//! Data transfer objects for web requests and responses.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Booking, ComfortZone, Passenger, ReservationRequest, SeatRequest, Service, Ticket};
use crate::reservation::ManifestEntry;

/// Request to reserve seats.
///
/// Passengers and seats are paired by position.
#[derive(Debug, Deserialize)]
pub struct ReservationBody {
    /// Service id (e.g., "5160")
    pub service_id: String,

    /// Boarding station name
    pub origin: String,

    /// Alighting station name
    pub destination: String,

    /// Travel date in YYYY-MM-DD format
    pub date: String,

    /// Passenger names
    pub passengers: Vec<String>,

    /// Requested seats
    pub seats: Vec<SeatBody>,
}

/// A requested seat.
#[derive(Debug, Deserialize)]
pub struct SeatBody {
    pub carriage: String,
    pub seat: String,
}

impl ReservationBody {
    /// Convert into an engine request for the given (already parsed) date.
    pub fn into_request(self, date: NaiveDate) -> ReservationRequest {
        ReservationRequest {
            service_id: self.service_id,
            origin: self.origin,
            destination: self.destination,
            passengers: self.passengers.into_iter().map(Passenger::new).collect(),
            seats: self
                .seats
                .into_iter()
                .map(|s| SeatRequest::new(s.carriage, s.seat))
                .collect(),
            date,
        }
    }
}

/// Query for boarding and alighting manifests.
#[derive(Debug, Deserialize)]
pub struct StationQuery {
    pub station: String,
    pub date: String,
}

/// Query for the segment manifest.
#[derive(Debug, Deserialize)]
pub struct SegmentQuery {
    pub from: String,
    pub to: String,
    pub date: String,
}

/// Query carrying only a date.
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: String,
}

/// A registered service.
#[derive(Debug, Serialize)]
pub struct ServiceResult {
    pub id: String,
    pub route: String,
    pub route_name: String,
    pub departure: NaiveDateTime,
    pub date: NaiveDate,
    /// Station names in travel order
    pub stops: Vec<String>,
    pub seats: usize,
}

/// Response listing services.
#[derive(Debug, Serialize)]
pub struct ServicesResponse {
    pub services: Vec<ServiceResult>,
}

/// A ticket within a booking.
#[derive(Debug, Serialize)]
pub struct TicketResult {
    pub passenger: String,
    pub service_id: String,
    pub date: NaiveDate,
    pub carriage: String,
    pub seat: String,
    pub comfort: ComfortZone,
    pub origin: String,
    pub destination: String,
    /// Kilometres travelled
    pub distance: u32,
}

/// A confirmed booking.
#[derive(Debug, Serialize)]
pub struct BookingResult {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub passengers: Vec<String>,
    pub tickets: Vec<TicketResult>,
}

/// Response listing bookings.
#[derive(Debug, Serialize)]
pub struct BookingsResponse {
    pub bookings: Vec<BookingResult>,
}

/// One passenger on a manifest.
#[derive(Debug, Serialize)]
pub struct ManifestResult {
    pub booking_id: String,
    pub passenger: String,
    pub carriage: String,
    pub seat: String,
    pub comfort: ComfortZone,
    pub origin: String,
    pub destination: String,
}

/// A passenger manifest for one service on one date.
#[derive(Debug, Serialize)]
pub struct ManifestResponse {
    pub service_id: String,
    pub date: NaiveDate,
    pub passengers: Vec<ManifestResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Stable machine-readable code
    pub code: &'static str,
}

// Conversion implementations

impl ServiceResult {
    /// Create from a domain Service.
    pub fn from_service(service: &Service) -> Self {
        Self {
            id: service.id.to_string(),
            route: service.route.id.clone(),
            route_name: service.route.name.clone(),
            departure: service.departure,
            date: service.date(),
            stops: service
                .route
                .stops()
                .iter()
                .map(|stop| stop.station.name().to_string())
                .collect(),
            seats: service.seat_count(),
        }
    }
}

impl TicketResult {
    /// Create from a domain Ticket.
    pub fn from_ticket(ticket: &Ticket) -> Self {
        Self {
            passenger: ticket.passenger.name.clone(),
            service_id: ticket.service.id.to_string(),
            date: ticket.date(),
            carriage: ticket.seat.carriage_id.clone(),
            seat: ticket.seat.number.clone(),
            comfort: ticket.seat.comfort,
            origin: ticket.origin.name().to_string(),
            destination: ticket.destination.name().to_string(),
            distance: ticket.distance(),
        }
    }
}

impl BookingResult {
    /// Create from a domain Booking.
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            created_at: booking.created_at,
            passengers: booking.passengers.iter().map(|p| p.name.clone()).collect(),
            tickets: booking.tickets.iter().map(TicketResult::from_ticket).collect(),
        }
    }
}

impl From<ManifestEntry> for ManifestResult {
    fn from(entry: ManifestEntry) -> Self {
        Self {
            booking_id: entry.booking_id.to_string(),
            passenger: entry.passenger.name,
            carriage: entry.carriage_id,
            seat: entry.seat_number,
            comfort: entry.comfort,
            origin: entry.origin,
            destination: entry.destination,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reservation_body_pairs_passengers_with_seats() {
        let body: ReservationBody = serde_json::from_str(
            r#"{
                "service_id": "5160",
                "origin": "Paris",
                "destination": "Amsterdam",
                "date": "2021-04-01",
                "passengers": ["Ada", "Grace"],
                "seats": [
                    { "carriage": "A", "seat": "A11" },
                    { "carriage": "A", "seat": "A12" }
                ]
            }"#,
        )
        .unwrap();

        let date = NaiveDate::from_ymd_opt(2021, 4, 1).unwrap();
        let request = body.into_request(date);
        assert_eq!(request.passengers[1], Passenger::new("Grace"));
        assert_eq!(request.seats[1], SeatRequest::new("A", "A12"));
        assert_eq!(request.date, date);
    }

    #[test]
    fn manifest_result_json() {
        let entry = ManifestEntry {
            booking_id: crate::domain::BookingId::from_sequence(7),
            passenger: Passenger::new("Ada"),
            carriage_id: "A".into(),
            seat_number: "A11".into(),
            comfort: ComfortZone::First,
            origin: "Paris".into(),
            destination: "Calais".into(),
        };

        let json = serde_json::to_value(ManifestResult::from(entry)).unwrap();
        assert_eq!(json["booking_id"], "B0007");
        assert_eq!(json["comfort"], "first");
        assert_eq!(json["destination"], "Calais");
    }
}
