//! Parameterized SELECT assembly.
//!
//! [`SelectQuery`] keeps predicate clauses, bind parameters and ORDER BY
//! terms as separate lists and only renders SQL on demand. Each filter method
//! pushes its placeholders and its parameters together, so the n-th `?` in
//! the rendered statement always binds the n-th entry of [`SelectQuery::params`].

use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Sqlite, SqlitePool};

use crate::sort::{SortColumn, SortTerm};
use crate::StoreResult;

/// A value bound to one positional placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Integer(i64),
    Bool(bool),
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Param::Integer(value)
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Param::Bool(value)
    }
}

/// A SELECT statement under construction with its positional bind parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectQuery {
    base: &'static str,
    clauses: Vec<String>,
    params: Vec<Param>,
    order: Vec<String>,
}

impl SelectQuery {
    /// Start from a fixed `SELECT … FROM …` template.
    pub fn new(base: &'static str) -> Self {
        Self {
            base,
            clauses: Vec::new(),
            params: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Restrict `column` to the given values. An empty slice adds nothing.
    pub fn filter_in(&mut self, column: &'static str, values: &[i64]) -> &mut Self {
        if values.is_empty() {
            return self;
        }
        let placeholders = vec!["?"; values.len()].join(", ");
        self.clauses.push(format!("{column} IN ({placeholders})"));
        self.params.extend(values.iter().copied().map(Param::from));
        self
    }

    /// Require `column` to equal `value`.
    pub fn filter_eq(&mut self, column: &'static str, value: impl Into<Param>) -> &mut Self {
        self.clauses.push(format!("{column} = ?"));
        self.params.push(value.into());
        self
    }

    /// Append ORDER BY terms after any already added.
    pub fn order_by<C: SortColumn>(&mut self, terms: &[SortTerm<C>]) -> &mut Self {
        self.order.extend(
            terms
                .iter()
                .map(|t| format!("{} {}", t.column.column(), t.direction.as_sql())),
        );
        self
    }

    /// Render the statement: base, then WHERE, then ORDER BY.
    pub fn sql(&self) -> String {
        let mut sql = String::from(self.base);
        if !self.clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.clauses.join(" AND "));
        }
        if !self.order.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order.join(", "));
        }
        sql
    }

    /// Bind parameters in placeholder order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Execute and decode every row. Zero rows is an empty vector.
    pub async fn fetch_all<R>(&self, pool: &SqlitePool) -> StoreResult<Vec<R>>
    where
        R: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let sql = self.sql();
        tracing::debug!(sql = %sql, params = self.params.len(), "executing select");
        let rows = self
            .bind(sqlx::query_as::<Sqlite, R>(&sql))
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Execute and decode at most one row.
    pub async fn fetch_optional<R>(&self, pool: &SqlitePool) -> StoreResult<Option<R>>
    where
        R: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
    {
        let sql = self.sql();
        tracing::debug!(sql = %sql, params = self.params.len(), "executing select");
        let row = self
            .bind(sqlx::query_as::<Sqlite, R>(&sql))
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    fn bind<'q, R>(
        &self,
        mut query: QueryAs<'q, Sqlite, R, SqliteArguments<'q>>,
    ) -> QueryAs<'q, Sqlite, R, SqliteArguments<'q>> {
        for param in &self.params {
            query = match *param {
                Param::Integer(v) => query.bind(v),
                Param::Bool(v) => query.bind(v),
            };
        }
        query
    }
}
