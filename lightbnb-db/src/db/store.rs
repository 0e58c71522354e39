//! Store-execution capability for listing queries

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::PropertyListing;
use crate::query::BuiltQuery;

/// Executes a built listing query against a store.
///
/// Implemented for [`PgPool`]; tests substitute in-memory doubles.
#[async_trait]
pub trait ListingStore: Send + Sync {
    async fn fetch_listings(&self, query: &BuiltQuery) -> Result<Vec<PropertyListing>, DbError>;
}

#[async_trait]
impl ListingStore for PgPool {
    async fn fetch_listings(&self, query: &BuiltQuery) -> Result<Vec<PropertyListing>, DbError> {
        let rows = query
            .query_as::<PropertyListing>()
            .fetch_all(self)
            .await?;
        Ok(rows)
    }
}
