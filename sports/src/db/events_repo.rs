//! SQLite-backed implementation of [`EventsRepository`].

use chrono::{DateTime, Utc};
use entain_proto::sports::{EventsFilter, ListEventsRequest, SportsEvent};
use entain_store::{materialize_start, parse_sort, SelectQuery, SortColumn, StoreResult};
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

use super::seed::seed_events;
use super::EventsRepository;

const EVENTS_SELECT: &str =
    "SELECT id, name, location, advertised_start_time FROM sportevents";

type EventRow = (i64, String, Option<String>, Option<DateTime<Utc>>);

/// Columns a caller may sort sports events by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventSortField {
    Id,
    Name,
    Location,
    AdvertisedStartTime,
}

impl SortColumn for EventSortField {
    const ALL: &'static [Self] = &[
        EventSortField::Id,
        EventSortField::Name,
        EventSortField::Location,
        EventSortField::AdvertisedStartTime,
    ];

    fn column(self) -> &'static str {
        match self {
            EventSortField::Id => "id",
            EventSortField::Name => "name",
            EventSortField::Location => "location",
            EventSortField::AdvertisedStartTime => "advertised_start_time",
        }
    }
}

fn apply_filter(query: &mut SelectQuery, filter: Option<&EventsFilter>) {
    if let Some(filter) = filter {
        query.filter_in("id", &filter.ids);
    }
}

fn event_from_row(row: EventRow, now: DateTime<Utc>) -> StoreResult<SportsEvent> {
    let (id, name, location, advertised_start_time) = row;
    let (advertised_start_time, status) = materialize_start(advertised_start_time, now)?;

    Ok(SportsEvent {
        id,
        name,
        location: location.unwrap_or_default(),
        advertised_start_time,
        status: status as i32,
    })
}

/// SQLite implementation of [`EventsRepository`].
pub struct SqliteEventsRepository {
    pool: SqlitePool,
    initialized: OnceCell<()>,
}

impl SqliteEventsRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            initialized: OnceCell::new(),
        }
    }

    async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    fn list_query(request: &ListEventsRequest) -> StoreResult<SelectQuery> {
        let sort = parse_sort::<EventSortField>(&request.sortoptions)?;

        let mut query = SelectQuery::new(EVENTS_SELECT);
        apply_filter(&mut query, request.filter.as_ref());
        query.order_by(&sort);
        Ok(query)
    }
}

impl EventsRepository for SqliteEventsRepository {
    async fn init(&self) -> StoreResult<()> {
        self.initialized
            .get_or_try_init(|| async {
                self.migrate().await?;
                seed_events(&self.pool).await
            })
            .await?;
        Ok(())
    }

    async fn list(&self, request: &ListEventsRequest) -> StoreResult<Vec<SportsEvent>> {
        let query = Self::list_query(request)?;
        let rows: Vec<EventRow> = query.fetch_all(&self.pool).await?;

        let now = Utc::now();
        rows.into_iter().map(|row| event_from_row(row, now)).collect()
    }

    async fn get(&self, id: i64) -> StoreResult<Option<SportsEvent>> {
        let mut query = SelectQuery::new(EVENTS_SELECT);
        query.filter_eq("id", id);
        let row: Option<EventRow> = query.fetch_optional(&self.pool).await?;

        row.map(|row| event_from_row(row, Utc::now())).transpose()
    }
}
