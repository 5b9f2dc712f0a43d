//! gRPC implementation of the `Racing` service.

use crate::db::RacesRepository;
use entain_proto::racing::racing_server::Racing;
use entain_proto::racing::{GetRaceRequest, ListRacesRequest, ListRacesResponse, Race};
use entain_store::StoreError;
use std::sync::Arc;
use tonic::{Request, Response, Status};

pub struct RacingService<R: RacesRepository> {
    repo: Arc<R>,
}

impl<R: RacesRepository> RacingService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

/// Map a store failure onto a gRPC status.
fn store_status(err: StoreError) -> Status {
    if err.is_invalid_request() {
        Status::invalid_argument(err.to_string())
    } else {
        tracing::error!(error = %err, "races query failed");
        Status::internal(err.to_string())
    }
}

#[tonic::async_trait]
impl<R: RacesRepository + 'static> Racing for RacingService<R> {
    async fn list_races(
        &self,
        request: Request<ListRacesRequest>,
    ) -> Result<Response<ListRacesResponse>, Status> {
        let req = request.into_inner();
        tracing::info!(filter = ?req.filter, sort_terms = req.sortoptions.len(), "RPC list_races");

        let races = self.repo.list(&req).await.map_err(store_status)?;
        tracing::debug!(count = races.len(), "list_races done");

        Ok(Response::new(ListRacesResponse { races }))
    }

    async fn get_race(&self, request: Request<GetRaceRequest>) -> Result<Response<Race>, Status> {
        let req = request.into_inner();
        tracing::info!(race_id = ?req.race_id, "RPC get_race");

        let id = req
            .race_id
            .ok_or_else(|| Status::invalid_argument("race_id is required"))?;

        self.repo
            .get(id)
            .await
            .map_err(store_status)?
            .map(Response::new)
            .ok_or_else(|| Status::not_found(format!("Race not found: {id}")))
    }
}
