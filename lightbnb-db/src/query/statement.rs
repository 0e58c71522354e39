//! Parameter-safe SQL statement assembly
//!
//! Values never enter the SQL text. [`StatementBuilder::bind`] pushes a
//! value onto the parameter list and hands back the only thing a
//! [`Predicate`] accepts in its place: a [`Placeholder`] (`$n`). Column
//! names and fixed fragments are `&'static str`.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

/// Positional parameter value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Param {
    Text(String),
    Int(i32),
    BigInt(i64),
    Decimal(Decimal),
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i32> for Param {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<i64> for Param {
    fn from(value: i64) -> Self {
        Self::BigInt(value)
    }
}

impl From<Decimal> for Param {
    fn from(value: Decimal) -> Self {
        Self::Decimal(value)
    }
}

/// Reference to a bound parameter, rendered as `$n`.
///
/// Only [`StatementBuilder::bind`] creates these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(usize);

impl Placeholder {
    pub fn position(self) -> usize {
        self.0
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

/// A single condition contributed by one active filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Like {
        column: &'static str,
        pattern: Placeholder,
    },
    Eq {
        column: &'static str,
        value: Placeholder,
    },
    Between {
        column: &'static str,
        low: Placeholder,
        high: Placeholder,
    },
    AtLeast {
        column: &'static str,
        value: Placeholder,
    },
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Like { column, pattern } => write!(f, "{column} LIKE {pattern}"),
            Self::Eq { column, value } => write!(f, "{column} = {value}"),
            Self::Between { column, low, high } => {
                write!(f, "{column} BETWEEN {low} AND {high}")
            }
            Self::AtLeast { column, value } => write!(f, "{column} >= {value}"),
        }
    }
}

/// Incremental statement assembly.
///
/// Tracks how many predicates have been appended so the first one is
/// introduced by `WHERE` and every later one by `AND`.
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    sql: String,
    params: Vec<Param>,
    predicates: usize,
}

impl StatementBuilder {
    pub fn new(base: &'static str) -> Self {
        Self {
            sql: base.trim().to_owned(),
            params: Vec::new(),
            predicates: 0,
        }
    }

    /// Append a parameter and return its placeholder.
    pub fn bind(&mut self, value: impl Into<Param>) -> Placeholder {
        self.params.push(value.into());
        Placeholder(self.params.len())
    }

    /// Append a predicate clause.
    pub fn filter(&mut self, predicate: Predicate) -> &mut Self {
        let keyword = if self.predicates == 0 { "WHERE" } else { "AND" };
        self.predicates += 1;
        self.line(format_args!("{keyword} {predicate}"))
    }

    /// Append a fixed SQL fragment.
    pub fn push(&mut self, fragment: &'static str) -> &mut Self {
        self.line(format_args!("{fragment}"))
    }

    /// Append `LIMIT $n` for a freshly bound limit value.
    pub fn limit(&mut self, limit: i64) -> &mut Self {
        let limit = self.bind(limit);
        self.line(format_args!("LIMIT {limit}"))
    }

    pub fn predicate_count(&self) -> usize {
        self.predicates
    }

    pub fn finish(self) -> BuiltQuery {
        BuiltQuery {
            sql: self.sql,
            params: self.params,
        }
    }

    fn line(&mut self, fragment: fmt::Arguments<'_>) -> &mut Self {
        use std::fmt::Write;

        // Writing into a String cannot fail.
        let _ = write!(self.sql, "\n{fragment}");
        self
    }
}

/// Immutable statement text with its positional parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltQuery {
    sql: String,
    params: Vec<Param>,
}

impl BuiltQuery {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Bind every parameter, in order, onto a typed sqlx query.
    pub fn query_as<'q, O>(&'q self) -> QueryAs<'q, Postgres, O, PgArguments>
    where
        O: for<'r> FromRow<'r, PgRow>,
    {
        self.params
            .iter()
            .fold(sqlx::query_as(&self.sql), |query, param| match param {
                Param::Text(value) => query.bind(value.as_str()),
                Param::Int(value) => query.bind(*value),
                Param::BigInt(value) => query.bind(*value),
                Param::Decimal(value) => query.bind(*value),
            })
    }
}
