//! Query construction and result materialization for the racing and sports
//! query services.
//!
//! A list request flows through this crate in a fixed order:
//!
//! 1. The service's filter builder appends predicates to a [`SelectQuery`].
//!    Every predicate appends its own bind parameters in the same call, so
//!    placeholders and parameters cannot drift apart.
//! 2. [`parse_sort`] validates the caller's sort options against the
//!    service's [`SortColumn`] allow-list and the resulting terms are added
//!    with [`SelectQuery::order_by`].
//! 3. [`SelectQuery::fetch_all`] assembles `base WHERE … ORDER BY …`, binds
//!    the parameters and decodes the rows.
//! 4. The service's row mapper turns each row into a protocol record, using
//!    [`materialize_start`] for the timestamp and the derived status.

mod config;
mod database;
mod error;
mod query;
mod sort;
mod status;

pub use config::{get_data_dir, get_db_path};
pub use database::Database;
pub use error::{StoreError, StoreResult};
pub use query::{Param, SelectQuery};
pub use sort::{parse_sort, SortColumn, SortDirection, SortTerm};
pub use status::{derive_status, is_zero_time, materialize_start, to_timestamp};
