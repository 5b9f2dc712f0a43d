//! gRPC implementation of the `Sports` service.

use crate::db::EventsRepository;
use entain_proto::sports::sports_server::Sports;
use entain_proto::sports::{GetEventRequest, ListEventsRequest, ListEventsResponse, SportsEvent};
use entain_store::StoreError;
use std::sync::Arc;
use tonic::{Request, Response, Status};

pub struct SportsService<R: EventsRepository> {
    repo: Arc<R>,
}

impl<R: EventsRepository> SportsService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn store_status(err: StoreError) -> Status {
    if err.is_invalid_request() {
        Status::invalid_argument(err.to_string())
    } else {
        tracing::error!(error = %err, "sports events query failed");
        Status::internal(err.to_string())
    }
}

#[tonic::async_trait]
impl<R: EventsRepository + 'static> Sports for SportsService<R> {
    async fn list_events(
        &self,
        request: Request<ListEventsRequest>,
    ) -> Result<Response<ListEventsResponse>, Status> {
        let req = request.into_inner();
        tracing::info!(filter = ?req.filter, sort_terms = req.sortoptions.len(), "RPC list_events");

        let events = self.repo.list(&req).await.map_err(store_status)?;

        Ok(Response::new(ListEventsResponse { events }))
    }

    async fn get_event(
        &self,
        request: Request<GetEventRequest>,
    ) -> Result<Response<SportsEvent>, Status> {
        let req = request.into_inner();
        tracing::info!(event_id = ?req.event_id, "RPC get_event");

        let id = req
            .event_id
            .ok_or_else(|| Status::invalid_argument("event_id is required"))?;

        self.repo
            .get(id)
            .await
            .map_err(store_status)?
            .map(Response::new)
            .ok_or_else(|| Status::not_found(format!("Sports event not found: {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::SqliteEventsRepository;
    use entain_proto::common::{SortOptions, SortOrder};
    use entain_proto::sports::EventsFilter;
    use entain_store::Database;
    use tonic::Code;

    async fn seeded_service() -> SportsService<SqliteEventsRepository> {
        let db = Database::new_in_memory().await.unwrap();
        let repo = SqliteEventsRepository::new(db.pool().clone());
        repo.init().await.unwrap();
        SportsService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_list_events_with_filter() {
        let service = seeded_service().await;
        let request = ListEventsRequest {
            filter: Some(EventsFilter {
                ids: vec![10, 20, 30],
            }),
            sortoptions: vec![],
        };
        let events = service
            .list_events(Request::new(request))
            .await
            .unwrap()
            .into_inner()
            .events;
        let mut ids: Vec<i64> = events.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn test_unspecified_direction_is_invalid_argument() {
        let service = seeded_service().await;
        let request = ListEventsRequest {
            filter: None,
            sortoptions: vec![SortOptions {
                field: "name".to_string(),
                sortorder: SortOrder::Unspecified as i32,
            }],
        };
        let status = service
            .list_events(Request::new(request))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[tokio::test]
    async fn test_get_event() {
        let service = seeded_service().await;
        let event = service
            .get_event(Request::new(GetEventRequest { event_id: Some(3) }))
            .await
            .unwrap()
            .into_inner();
        assert_eq!(event.id, 3);
        assert!(!event.location.is_empty());
    }

    #[tokio::test]
    async fn test_get_event_not_found() {
        let service = seeded_service().await;
        let status = service
            .get_event(Request::new(GetEventRequest {
                event_id: Some(101),
            }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::NotFound);
    }

    #[tokio::test]
    async fn test_get_event_requires_id() {
        let service = seeded_service().await;
        let status = service
            .get_event(Request::new(GetEventRequest { event_id: None }))
            .await
            .unwrap_err();
        assert_eq!(status.code(), Code::InvalidArgument);
    }
}
