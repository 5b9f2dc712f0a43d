//! SQLite-backed implementation of [`RacesRepository`].

use chrono::{DateTime, Utc};
use entain_proto::racing::{ListRacesRequest, ListRacesRequestFilter, Race};
use entain_store::{materialize_start, parse_sort, SelectQuery, SortColumn, StoreResult};
use sqlx::SqlitePool;
use tokio::sync::OnceCell;

use super::seed::seed_races;
use super::RacesRepository;

const RACES_SELECT: &str =
    "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races";

/// Column order matches `RACES_SELECT`.
type RaceRow = (
    i64,
    Option<i64>,
    String,
    Option<i64>,
    Option<bool>,
    Option<DateTime<Utc>>,
);

/// Columns a caller may sort races by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceSortField {
    Id,
    MeetingId,
    Name,
    Number,
    Visible,
    AdvertisedStartTime,
}

impl SortColumn for RaceSortField {
    const ALL: &'static [Self] = &[
        RaceSortField::Id,
        RaceSortField::MeetingId,
        RaceSortField::Name,
        RaceSortField::Number,
        RaceSortField::Visible,
        RaceSortField::AdvertisedStartTime,
    ];

    fn column(self) -> &'static str {
        match self {
            RaceSortField::Id => "id",
            RaceSortField::MeetingId => "meeting_id",
            RaceSortField::Name => "name",
            RaceSortField::Number => "number",
            RaceSortField::Visible => "visible",
            RaceSortField::AdvertisedStartTime => "advertised_start_time",
        }
    }
}

/// Add the WHERE predicates for a list filter. No filter matches everything.
fn apply_filter(query: &mut SelectQuery, filter: Option<&ListRacesRequestFilter>) {
    let Some(filter) = filter else {
        return;
    };

    query.filter_in("meeting_id", &filter.meeting_ids);
    if let Some(visible) = filter.visible {
        query.filter_eq("visible", visible);
    }
}

fn race_from_row(row: RaceRow, now: DateTime<Utc>) -> StoreResult<Race> {
    let (id, meeting_id, name, number, visible, advertised_start_time) = row;
    let (advertised_start_time, status) = materialize_start(advertised_start_time, now)?;

    Ok(Race {
        id,
        meeting_id: meeting_id.unwrap_or_default(),
        name,
        number: number.unwrap_or_default(),
        visible: visible.unwrap_or_default(),
        advertised_start_time,
        status: status as i32,
    })
}

/// SQLite implementation of [`RacesRepository`].
pub struct SqliteRacesRepository {
    pub(super) pool: SqlitePool,
    initialized: OnceCell<()>,
}

impl SqliteRacesRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            initialized: OnceCell::new(),
        }
    }

    /// Apply embedded migrations from `racing/migrations/`.
    pub(crate) async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Build the list statement without executing it.
    pub(crate) fn list_query(request: &ListRacesRequest) -> StoreResult<SelectQuery> {
        let sort = parse_sort::<RaceSortField>(&request.sortoptions)?;

        let mut query = SelectQuery::new(RACES_SELECT);
        apply_filter(&mut query, request.filter.as_ref());
        query.order_by(&sort);
        Ok(query)
    }
}

impl RacesRepository for SqliteRacesRepository {
    async fn init(&self) -> StoreResult<()> {
        self.initialized
            .get_or_try_init(|| async {
                self.migrate().await?;
                seed_races(&self.pool).await
            })
            .await?;
        Ok(())
    }

    async fn list(&self, request: &ListRacesRequest) -> StoreResult<Vec<Race>> {
        let query = Self::list_query(request)?;
        let rows: Vec<RaceRow> = query.fetch_all(&self.pool).await?;

        let now = Utc::now();
        rows.into_iter().map(|row| race_from_row(row, now)).collect()
    }

    async fn get(&self, id: i64) -> StoreResult<Option<Race>> {
        let mut query = SelectQuery::new(RACES_SELECT);
        query.filter_eq("id", id);
        let row: Option<RaceRow> = query.fetch_optional(&self.pool).await?;

        row.map(|row| race_from_row(row, Utc::now())).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entain_proto::common::{SortOptions, SortOrder};
    use entain_store::{Param, StoreError};

    fn sort(field: &str, order: SortOrder) -> SortOptions {
        SortOptions {
            field: field.to_string(),
            sortorder: order as i32,
        }
    }

    #[test]
    fn test_list_query_without_filter() {
        let query = SqliteRacesRepository::list_query(&ListRacesRequest::default()).unwrap();
        assert_eq!(query.sql(), RACES_SELECT);
        assert!(query.params().is_empty());
    }

    #[test]
    fn test_list_query_with_empty_filter() {
        let request = ListRacesRequest {
            filter: Some(ListRacesRequestFilter::default()),
            sortoptions: vec![],
        };
        let query = SqliteRacesRepository::list_query(&request).unwrap();
        assert_eq!(query.sql(), RACES_SELECT);
    }

    #[test]
    fn test_list_query_filter_and_sort() {
        let request = ListRacesRequest {
            filter: Some(ListRacesRequestFilter {
                meeting_ids: vec![4, 2],
                visible: Some(false),
            }),
            sortoptions: vec![
                sort("advertised_start_time", SortOrder::Asc),
                sort("number", SortOrder::Desc),
            ],
        };
        let query = SqliteRacesRepository::list_query(&request).unwrap();
        assert_eq!(
            query.sql(),
            format!(
                "{RACES_SELECT} WHERE meeting_id IN (?, ?) AND visible = ? \
                 ORDER BY advertised_start_time ASC, number DESC"
            )
        );
        assert_eq!(
            query.params(),
            &[Param::Integer(4), Param::Integer(2), Param::Bool(false)]
        );
    }

    #[test]
    fn test_list_query_rejects_unknown_sort_field() {
        let request = ListRacesRequest {
            filter: None,
            sortoptions: vec![sort("location", SortOrder::Asc)],
        };
        let result = SqliteRacesRepository::list_query(&request);
        assert!(matches!(result, Err(StoreError::InvalidSortField(_))));
    }

    #[test]
    fn test_every_sort_field_is_a_select_column() {
        for field in RaceSortField::ALL {
            assert!(RACES_SELECT.contains(field.column()));
        }
    }

    #[test]
    fn test_race_from_row_defaults_nullable_columns() {
        let race = race_from_row((7, None, "Cup".to_string(), None, None, None), Utc::now()).unwrap();
        assert_eq!(race.id, 7);
        assert_eq!(race.meeting_id, 0);
        assert_eq!(race.number, 0);
        assert!(!race.visible);
        assert!(race.advertised_start_time.is_none());
        assert_eq!(race.status(), entain_proto::common::Status::Closed);
    }
}
