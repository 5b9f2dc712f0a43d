//! Races storage.
//!
//! [`RacesRepository`] is the only seam the gRPC layer talks to.
//! [`SqliteRacesRepository`] implements it over a shared `SqlitePool`:
//!
//! - `init` applies the embedded migrations and seeds demo races, once per
//!   repository, however many callers race to it.
//! - `list` builds a `SelectQuery` from the request filter and sort options,
//!   executes it and maps rows into `Race` messages with a derived status.
//! - `get` fetches one race by id; a missing race is `Ok(None)`.

mod races_repo;
mod seed;

pub use races_repo::SqliteRacesRepository;

use entain_proto::racing::{ListRacesRequest, Race};
use entain_store::StoreResult;
use std::future::Future;

/// Repository for races.
pub trait RacesRepository: Send + Sync {
    fn init(&self) -> impl Future<Output = StoreResult<()>> + Send;
    fn list(
        &self,
        request: &ListRacesRequest,
    ) -> impl Future<Output = StoreResult<Vec<Race>>> + Send;
    fn get(&self, id: i64) -> impl Future<Output = StoreResult<Option<Race>>> + Send;
}
