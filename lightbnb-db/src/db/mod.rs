//! Database layer - connection pool, listing store, and repositories
//!
//! # Design Principles
//!
//! - Pool is passed in, never a process-wide handle
//! - Listing execution goes through [`ListingStore`] so callers can swap it
//! - Reads are fail-soft (`list`, `find_*`), with `try_*`/`get_*` variants
//!   that return the error
//! - Writes propagate errors

pub mod pool;
pub mod repos;
pub mod store;

pub use pool::{connect, PgPool};
pub use repos::*;
pub use store::ListingStore;
