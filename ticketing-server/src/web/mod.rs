//! Web layer for the ticketing server.
//!
//! JSON endpoints for reserving seats, looking up bookings and
//! answering conductor queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
