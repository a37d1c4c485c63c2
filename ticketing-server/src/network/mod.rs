//! Network definitions: loading routes and services into an engine.

mod definition;
mod error;
pub mod sample;

pub use definition::{
    CarriageDefinition, NetworkDefinition, RouteDefinition, ServiceDefinition, StopDefinition,
};
pub use error::NetworkError;
pub use sample::{sample_network, sample_system};
