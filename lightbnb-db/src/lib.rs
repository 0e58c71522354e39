//! lightbnb-db: data access for the LightBnB rental listing app
//!
//! Users, past reservations, and properties on PostgreSQL. Property search
//! goes through [`query::listing::build`], which turns a sparse
//! [`PropertyFilter`](models::PropertyFilter) into one parameterized
//! statement.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod query;

pub use config::{ConfigError, StoreConfig};
pub use db::{ListingStore, PropertyRepo, ReservationRepo, UserRepo};
pub use error::DbError;
pub use query::BuiltQuery;
