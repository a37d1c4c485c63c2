//! Seat occupancy index.
//!
//! Maps (service, date, carriage, seat) to the booking holding it, so
//! availability checks and seat-occupant queries don't have to scan every
//! booking. The index is only ever updated together with the booking store.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::{BookingId, ServiceId, Ticket};

/// Index key: one seat on one service on one date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct SeatKey {
    pub service_id: ServiceId,
    pub date: NaiveDate,
    pub carriage_id: String,
    pub seat_number: String,
}

impl SeatKey {
    /// Key for the seat held by a ticket.
    pub fn for_ticket(ticket: &Ticket) -> Self {
        Self {
            service_id: ticket.service.id.clone(),
            date: ticket.date(),
            carriage_id: ticket.seat.carriage_id.clone(),
            seat_number: ticket.seat.number.clone(),
        }
    }
}

/// Which booking holds each occupied seat.
#[derive(Debug, Clone, Default)]
pub(crate) struct SeatIndex {
    occupied: HashMap<SeatKey, BookingId>,
}

impl SeatIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// The booking holding the seat, if any.
    pub fn holder(&self, key: &SeatKey) -> Option<BookingId> {
        self.occupied.get(key).copied()
    }

    /// Is the seat taken?
    pub fn is_occupied(&self, key: &SeatKey) -> bool {
        self.occupied.contains_key(key)
    }

    /// Record every ticket of a booking.
    ///
    /// Callers must have checked availability first; an occupied key is a
    /// logic error and trips a debug assertion.
    pub fn insert_all<'a>(&mut self, booking: BookingId, tickets: impl IntoIterator<Item = &'a Ticket>) {
        for ticket in tickets {
            let previous = self.occupied.insert(SeatKey::for_ticket(ticket), booking);
            debug_assert!(previous.is_none(), "seat indexed twice");
        }
    }

    /// Number of occupied seats across all services and dates.
    pub fn len(&self) -> usize {
        self.occupied.len()
    }
}
