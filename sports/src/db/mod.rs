//! Sports event storage.

mod events_repo;
mod seed;

pub use events_repo::SqliteEventsRepository;

use entain_proto::sports::{ListEventsRequest, SportsEvent};
use entain_store::StoreResult;
use std::future::Future;

/// Repository for sports events.
pub trait EventsRepository: Send + Sync {
    /// Apply the schema and seed demo events. Work happens once per repository.
    fn init(&self) -> impl Future<Output = StoreResult<()>> + Send;
    fn list(
        &self,
        request: &ListEventsRequest,
    ) -> impl Future<Output = StoreResult<Vec<SportsEvent>>> + Send;
    /// `Ok(None)` when no event has this id.
    fn get(&self, id: i64) -> impl Future<Output = StoreResult<Option<SportsEvent>>> + Send;
}
