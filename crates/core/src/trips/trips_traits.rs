use crate::errors::Result;
use crate::trips::trips_model::{NewTrip, Trip, TripMember, TripSummary};
use async_trait::async_trait;

/// Trait for trip store operations, implemented by the hosted backend client.
#[async_trait]
pub trait TripRepositoryTrait: Send + Sync {
    async fn list_for_member(&self, user_id: &str) -> Result<Vec<TripSummary>>;
    async fn get_by_id(&self, trip_id: &str) -> Result<Trip>;
    async fn insert(&self, new_trip: NewTrip, created_by: &str) -> Result<Trip>;
    async fn list_members(&self, trip_id: &str) -> Result<Vec<TripMember>>;
}

/// Trait for trip service operations
#[async_trait]
pub trait TripServiceTrait: Send + Sync {
    /// Validate and persist a new trip, returning the stored record so the
    /// caller can navigate straight to it.
    async fn create_trip(&self, user_id: &str, new_trip: NewTrip) -> Result<Trip>;

    /// Trips the user belongs to, optionally narrowed by a case-insensitive
    /// name search.
    async fn list_trips(&self, user_id: &str, search: Option<&str>) -> Result<Vec<TripSummary>>;

    async fn get_trip(&self, trip_id: &str) -> Result<Trip>;

    async fn get_members(&self, trip_id: &str) -> Result<Vec<TripMember>>;
}
