//! Reservation repository
//!
//! Past stays for a guest, each joined with its property and that
//! property's average rating.

use sqlx::PgPool;
use tracing::instrument;

use crate::error::{fail_soft, DbError};
use crate::models::Reservation;
use crate::query::DEFAULT_LIMIT;

/// Reservation repository
pub struct ReservationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ReservationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Reservations of `guest_id` that ended before today, oldest first.
    ///
    /// LEFT JOIN on reviews so unreviewed properties still appear, with
    /// no average rating.
    #[instrument(skip(self))]
    pub async fn try_list_past(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<Reservation>, DbError> {
        let rows = sqlx::query_as::<_, Reservation>(
            r#"
            SELECT
                reservations.id AS reservation_id,
                reservations.guest_id,
                reservations.start_date,
                reservations.end_date,
                properties.*,
                avg(property_reviews.rating) AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            AND reservations.end_date < now()::date
            GROUP BY reservations.id, properties.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit.unwrap_or(DEFAULT_LIMIT))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Fail-soft [`try_list_past`](Self::try_list_past).
    pub async fn list_past(&self, guest_id: i32, limit: Option<i64>) -> Vec<Reservation> {
        fail_soft(
            "list past reservations",
            self.try_list_past(guest_id, limit).await,
        )
        .unwrap_or_default()
    }
}
