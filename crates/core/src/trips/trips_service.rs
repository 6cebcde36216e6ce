use log::debug;
use std::sync::Arc;

use super::trips_model::{NewTrip, Trip, TripMember, TripSummary};
use super::trips_traits::{TripRepositoryTrait, TripServiceTrait};
use crate::errors::Result;

/// Service for managing trips.
pub struct TripService {
    repository: Arc<dyn TripRepositoryTrait>,
}

impl TripService {
    pub fn new(repository: Arc<dyn TripRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl TripServiceTrait for TripService {
    async fn create_trip(&self, user_id: &str, new_trip: NewTrip) -> Result<Trip> {
        new_trip.validate()?;
        debug!("creating trip '{}' for user {}", new_trip.name, user_id);
        self.repository.insert(new_trip, user_id).await
    }

    async fn list_trips(&self, user_id: &str, search: Option<&str>) -> Result<Vec<TripSummary>> {
        let mut trips = self.repository.list_for_member(user_id).await?;
        if let Some(needle) = search.map(str::trim).filter(|s| !s.is_empty()) {
            let needle = needle.to_lowercase();
            trips.retain(|summary| summary.trip.name.to_lowercase().contains(&needle));
        }
        Ok(trips)
    }

    async fn get_trip(&self, trip_id: &str) -> Result<Trip> {
        self.repository.get_by_id(trip_id).await
    }

    async fn get_members(&self, trip_id: &str) -> Result<Vec<TripMember>> {
        self.repository.list_members(trip_id).await
    }
}
