//! Reservation records

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use super::Property;

/// A guest's reservation joined with the reserved property
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Reservation {
    pub reservation_id: i32,
    pub guest_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[sqlx(flatten)]
    pub property: Property,
    /// `None` when the property has never been reviewed.
    pub average_rating: Option<Decimal>,
}

impl Reservation {
    /// Number of nights booked.
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::property::fixtures;

    #[test]
    fn nights_between_dates() {
        let reservation = Reservation {
            reservation_id: 1,
            guest_id: 2,
            start_date: NaiveDate::from_ymd_opt(2018, 9, 11).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2018, 9, 26).unwrap(),
            property: fixtures::property(3, "Vancouver", 10000),
            average_rating: None,
        };
        assert_eq!(reservation.nights(), 15);

        let json = serde_json::to_value(&reservation).unwrap();
        assert_eq!(json["start_date"], "2018-09-11");
        assert!(json["average_rating"].is_null());
    }
}
