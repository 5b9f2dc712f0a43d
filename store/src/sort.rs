//! Sort option validation.
//!
//! Column names and directions cannot be bound as parameters, so they are
//! interpolated into the statement. Only values from a service's fixed
//! [`SortColumn`] set ever reach the SQL text; anything else is rejected.

use entain_proto::common::{SortOptions, SortOrder};
use std::fmt;

use crate::StoreError;

/// A fixed set of sortable columns for one table.
pub trait SortColumn: Copy + fmt::Debug + 'static {
    /// Every sortable column, in declaration order.
    const ALL: &'static [Self];

    /// The column name as it appears in the schema.
    fn column(self) -> &'static str;

    /// Look up a caller-supplied field name in the allow-list.
    fn parse(field: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.column() == field)
    }
}

/// Direction of one ORDER BY term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl TryFrom<i32> for SortDirection {
    type Error = StoreError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match SortOrder::try_from(value) {
            Ok(SortOrder::Asc) => Ok(SortDirection::Asc),
            Ok(SortOrder::Desc) => Ok(SortDirection::Desc),
            Ok(SortOrder::Unspecified) | Err(_) => Err(StoreError::InvalidSortDirection(value)),
        }
    }
}

/// A validated (column, direction) pair ready for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortTerm<C> {
    pub column: C,
    pub direction: SortDirection,
}

/// Validate caller sort options, preserving their order.
///
/// The first invalid entry fails the whole request; no partial ordering is
/// ever applied.
pub fn parse_sort<C: SortColumn>(options: &[SortOptions]) -> Result<Vec<SortTerm<C>>, StoreError> {
    options
        .iter()
        .map(|opt| {
            let column =
                C::parse(&opt.field).ok_or_else(|| StoreError::InvalidSortField(opt.field.clone()))?;
            let direction = SortDirection::try_from(opt.sortorder)?;
            Ok(SortTerm { column, direction })
        })
        .collect()
}
