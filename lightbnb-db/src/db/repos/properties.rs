//! Property repository
//!
//! - list: filtered search through a [`ListingStore`], fail-soft
//! - add: INSERT ... RETURNING the stored row

use sqlx::PgPool;
use tracing::instrument;

use crate::db::ListingStore;
use crate::error::{fail_soft, DbError};
use crate::models::{NewProperty, Property, PropertyFilter, PropertyListing};
use crate::query::{listing, DEFAULT_LIMIT};

/// Property repository
pub struct PropertyRepo<'a, S: ?Sized = PgPool> {
    store: &'a S,
}

impl<'a, S: ?Sized> PropertyRepo<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }
}

impl<S: ListingStore + ?Sized> PropertyRepo<'_, S> {
    /// List properties matching `filter`, cheapest first.
    ///
    /// `limit` defaults to [`DEFAULT_LIMIT`].
    #[instrument(skip_all)]
    pub async fn try_list(
        &self,
        filter: &PropertyFilter,
        limit: Option<i64>,
    ) -> Result<Vec<PropertyListing>, DbError> {
        let query = listing::build(filter, limit.unwrap_or(DEFAULT_LIMIT));
        self.store.fetch_listings(&query).await
    }

    /// Fail-soft [`try_list`](Self::try_list).
    ///
    /// An execution failure is logged and yields an empty list, the same
    /// as a search with no matches.
    pub async fn list(&self, filter: &PropertyFilter, limit: Option<i64>) -> Vec<PropertyListing> {
        fail_soft("list properties", self.try_list(filter, limit).await).unwrap_or_default()
    }
}

impl PropertyRepo<'_, PgPool> {
    /// Insert a property and return the stored row.
    #[instrument(skip_all, fields(owner_id = property.owner_id))]
    pub async fn add(&self, property: NewProperty) -> Result<Property, DbError> {
        let property = property.validate()?;

        let stored: Property = sqlx::query_as(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, street, city, province, post_code, country,
                parking_spaces, number_of_bathrooms, number_of_bedrooms
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14
            )
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(property.description.as_deref())
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .bind(&property.country)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .fetch_one(self.store)
        .await?;

        tracing::info!(property_id = stored.id, "property added");
        Ok(stored)
    }
}
