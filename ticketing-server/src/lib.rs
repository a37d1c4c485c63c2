//! Train seat reservation server.
//!
//! Books seats on train services for a segment of their route, never
//! selling the same seat twice on the same service and date, and answers
//! conductor questions about who is on board.

pub mod config;
pub mod domain;
pub mod network;
pub mod reservation;
pub mod web;
