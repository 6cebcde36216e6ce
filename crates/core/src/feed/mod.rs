//! Live change-feed reconciliation for a trip's saved items.
//!
//! The hosted backend pushes create/update/delete notifications for every
//! record in a trip; [`ItemCollection`] folds that unordered, at-least-once
//! stream into an ordered keyed collection, and [`TripSession`] scopes the
//! subscription to one trip view.

mod collection;
mod events;
mod session;

pub use collection::*;
pub use events::*;
pub use session::*;
