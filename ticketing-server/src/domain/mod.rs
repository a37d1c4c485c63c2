//! Domain types for the ticketing server.
//!
//! This module contains the network model (stations, routes, services and
//! their seat inventory) and the records produced by reservations
//! (bookings, tickets). Types enforce their invariants at construction
//! time, so code that receives them can trust their validity.

mod booking;
mod error;
mod request;
mod route;
mod seat;
mod service;
mod service_id;
mod station;

pub use booking::{Booking, BookingId, InvalidBookingId, Passenger, Ticket};
pub use error::{RouteError, ServiceError};
pub use request::{ReservationRequest, SeatRequest};
pub use route::{Route, Stop, StopIndex};
pub use seat::{Carriage, ComfortZone, Seat};
pub use service::Service;
pub use service_id::{InvalidServiceId, ServiceId};
pub use station::Station;
