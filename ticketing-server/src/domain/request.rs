//! Reservation request types.

use chrono::NaiveDate;

use super::Passenger;

/// A specific seat asked for by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SeatRequest {
    pub carriage_id: String,
    pub seat_number: String,
}

impl SeatRequest {
    pub fn new(carriage_id: impl Into<String>, seat_number: impl Into<String>) -> Self {
        Self {
            carriage_id: carriage_id.into(),
            seat_number: seat_number.into(),
        }
    }
}

/// Input to [`ReservationSystem::make_reservation`](crate::reservation::ReservationSystem::make_reservation).
///
/// `passengers` and `seats` are paired by position: `passengers[i]` sits in
/// `seats[i]`. The request is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub service_id: String,
    pub origin: String,
    pub destination: String,
    pub passengers: Vec<Passenger>,
    pub seats: Vec<SeatRequest>,
    pub date: NaiveDate,
}

impl ReservationRequest {
    /// Start a request for one journey; add travellers with [`Self::passenger`].
    pub fn new(
        service_id: impl Into<String>,
        origin: impl Into<String>,
        destination: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            service_id: service_id.into(),
            origin: origin.into(),
            destination: destination.into(),
            passengers: Vec::new(),
            seats: Vec::new(),
            date,
        }
    }

    /// Add a passenger seated in the given carriage and seat.
    pub fn passenger(
        mut self,
        name: impl Into<String>,
        carriage_id: impl Into<String>,
        seat_number: impl Into<String>,
    ) -> Self {
        self.passengers.push(Passenger::new(name));
        self.seats.push(SeatRequest::new(carriage_id, seat_number));
        self
    }
}
