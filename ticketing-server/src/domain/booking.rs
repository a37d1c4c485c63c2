//! Booking, ticket and passenger types.
//!
//! Tickets only exist inside a `Booking`. Both are immutable once created:
//! the reservation engine never edits or removes a booking it has stored.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use super::{Seat, Service, Station};

/// Error returned when parsing an invalid booking id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid booking id: {reason}")]
pub struct InvalidBookingId {
    reason: &'static str,
}

/// Sequential booking reference, displayed as `B` followed by a
/// zero-padded number (`B0001`, `B0002`, ...).
///
/// Ordering follows the sequence number, so `B10000` sorts after `B9999`.
///
/// # Examples
///
/// ```
/// use ticketing_server::domain::BookingId;
///
/// let id = BookingId::from_sequence(1);
/// assert_eq!(id.to_string(), "B0001");
/// assert_eq!(BookingId::parse("B0001").unwrap(), id);
///
/// assert!(BookingId::parse("0001").is_err());
/// assert!(BookingId::parse("B").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookingId(u32);

impl BookingId {
    /// Prefix shared by every booking reference.
    pub const PREFIX: char = 'B';

    /// Booking id for the given sequence number.
    pub fn from_sequence(seq: u32) -> Self {
        BookingId(seq)
    }

    /// Parse a booking reference such as `B0042`.
    pub fn parse(s: &str) -> Result<Self, InvalidBookingId> {
        let digits = s.strip_prefix(Self::PREFIX).ok_or(InvalidBookingId {
            reason: "must start with 'B'",
        })?;

        if digits.len() < 4 {
            return Err(InvalidBookingId {
                reason: "must have at least 4 digits",
            });
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidBookingId {
                reason: "must be followed by digits only",
            });
        }

        let seq = digits.parse().map_err(|_| InvalidBookingId {
            reason: "sequence number out of range",
        })?;
        Ok(BookingId(seq))
    }

    /// Returns the sequence number.
    pub fn sequence(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", Self::PREFIX, self.0)
    }
}

/// A traveller. Passengers carry no identity beyond their name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Passenger {
    pub name: String,
}

impl Passenger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// One passenger's seat for one journey on one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Reserved seat
    pub seat: Seat,
    /// Boarding station
    pub origin: Station,
    /// Alighting station
    pub destination: Station,
    /// Service travelled on
    pub service: Arc<Service>,
    /// Ticket holder
    pub passenger: Passenger,
}

impl Ticket {
    /// Does this ticket hold the given seat on the given service and date?
    pub fn holds_seat(
        &self,
        service_id: &str,
        carriage_id: &str,
        seat_number: &str,
        date: NaiveDate,
    ) -> bool {
        self.is_for(service_id, date)
            && self.seat.carriage_id == carriage_id
            && self.seat.number == seat_number
    }

    /// Date of travel: the day the service runs.
    pub fn date(&self) -> NaiveDate {
        self.service.date()
    }

    /// Is this ticket for the given service on the given date?
    pub fn is_for(&self, service_id: &str, date: NaiveDate) -> bool {
        self.service.id.as_str() == service_id && self.date() == date
    }

    /// Distance travelled on this ticket, in kilometres.
    pub fn distance(&self) -> u32 {
        self.service
            .route
            .distance_between(self.origin.name(), self.destination.name())
            .unwrap_or(0)
    }
}

/// A confirmed reservation: one or more tickets sharing an id and a
/// creation time.
///
/// `passengers` and `tickets` are parallel: `tickets[i]` belongs to
/// `passengers[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub passengers: Vec<Passenger>,
    pub tickets: Vec<Ticket>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Create a booking stamped with the current time.
    pub fn new(id: BookingId, passengers: Vec<Passenger>, tickets: Vec<Ticket>) -> Self {
        Self::with_timestamp(id, passengers, tickets, Utc::now())
    }

    /// Create a booking with an explicit creation time.
    pub fn with_timestamp(
        id: BookingId,
        passengers: Vec<Passenger>,
        tickets: Vec<Ticket>,
        created_at: DateTime<Utc>,
    ) -> Self {
        debug_assert_eq!(passengers.len(), tickets.len());
        Self {
            id,
            passengers,
            tickets,
            created_at,
        }
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booking {}: {} passengers, {} tickets",
            self.id,
            self.passengers.len(),
            self.tickets.len()
        )
    }
}
