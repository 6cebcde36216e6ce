//! Trip and membership domain models and services.

mod trips_model;
mod trips_service;
mod trips_traits;

pub use trips_model::*;
pub use trips_service::*;
pub use trips_traits::*;
