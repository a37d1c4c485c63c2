//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::reservation::ReservationSystem;

/// Shared application state.
///
/// Reservations take the write lock for their whole check-then-insert;
/// conductor queries and booking lookups share the read lock.
#[derive(Clone)]
pub struct AppState {
    /// The reservation engine
    pub system: Arc<RwLock<ReservationSystem>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(system: ReservationSystem) -> Self {
        Self {
            system: Arc::new(RwLock::new(system)),
        }
    }
}
