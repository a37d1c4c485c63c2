//! Seat reservation engine and conductor queries.
//!
//! `ReservationSystem` validates reservation requests against a service's
//! route and seat inventory, guarantees no seat is sold twice for the same
//! service and date, and answers read-only manifest queries over the
//! bookings it holds.

mod conductor;
mod error;
mod index;
mod system;


pub use conductor::ManifestEntry;
pub use error::ReservationError;
pub use system::ReservationSystem;
