//! Seat inventory types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seat class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComfortZone {
    First,
    Second,
}

impl ComfortZone {
    /// Returns the display label (e.g. "first-class").
    pub fn as_str(&self) -> &'static str {
        match self {
            ComfortZone::First => "first-class",
            ComfortZone::Second => "second-class",
        }
    }
}

impl fmt::Display for ComfortZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single seat in a carriage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Seat {
    /// Seat number, unique within its carriage (e.g. "A11")
    pub number: String,
    /// Seat class
    pub comfort: ComfortZone,
    /// Id of the carriage the seat belongs to
    pub carriage_id: String,
}

impl Seat {
    /// Create a seat in the given carriage.
    pub fn new(
        number: impl Into<String>,
        comfort: ComfortZone,
        carriage_id: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            comfort,
            carriage_id: carriage_id.into(),
        }
    }
}

/// A carriage and its fixed set of seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carriage {
    /// Carriage id, unique within a service (e.g. "A")
    pub id: String,
    /// Seats in carriage order
    pub seats: Vec<Seat>,
}

impl Carriage {
    /// Create a carriage from an explicit seat list.
    pub fn new(id: impl Into<String>, seats: Vec<Seat>) -> Self {
        Self {
            id: id.into(),
            seats,
        }
    }

    /// Create a carriage of `count` seats of one class, numbered
    /// `<id>1` to `<id><count>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ticketing_server::domain::{Carriage, ComfortZone};
    ///
    /// let carriage = Carriage::uniform("A", 12, ComfortZone::First);
    /// assert_eq!(carriage.seats.len(), 12);
    /// assert_eq!(carriage.seats[10].number, "A11");
    /// ```
    pub fn uniform(id: impl Into<String>, count: usize, comfort: ComfortZone) -> Self {
        let id = id.into();
        let seats = (1..=count)
            .map(|n| Seat::new(format!("{id}{n}"), comfort, id.clone()))
            .collect();
        Self { id, seats }
    }

    /// Find a seat by number.
    pub fn seat(&self, number: &str) -> Option<&Seat> {
        self.seats.iter().find(|seat| seat.number == number)
    }
}
