//! SQL statement construction
//!
//! - [`statement`]: placeholder-tracking builder, values always travel as parameters
//! - [`listing`]: the filtered property listing query

pub mod listing;
pub mod statement;

pub use listing::DEFAULT_LIMIT;
pub use statement::{BuiltQuery, Param, Placeholder, Predicate, StatementBuilder};
