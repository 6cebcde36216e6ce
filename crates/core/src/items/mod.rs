//! Saved item domain models and services.

mod items_model;
mod items_service;
mod items_traits;

pub use items_model::*;
pub use items_service::*;
pub use items_traits::*;

#[cfg(test)]
mod items_model_tests;
#[cfg(test)]
mod items_service_tests;
