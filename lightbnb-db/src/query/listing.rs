//! Filtered property listing query
//!
//! Builds one parameterized statement from a sparse [`PropertyFilter`]:
//! properties joined with their review average, optional predicates in a
//! fixed order (city, owner, price range, minimum rating), grouped per
//! property, cheapest first, limited.
//!
//! # Schema contract
//!
//! - `properties(id, owner_id, city, cost_per_night, ...)`, with
//!   `cost_per_night` stored as integer cents
//! - `property_reviews(property_id, rating)`
//!
//! Properties without any review are not listed (inner join).

use crate::models::{Cents, PropertyFilter};

use super::statement::{BuiltQuery, Predicate, StatementBuilder};

/// Row limit when the caller does not give one.
pub const DEFAULT_LIMIT: i64 = 10;

const BASE: &str = r#"
SELECT properties.*, review_totals.average_rating
FROM properties
JOIN (
    SELECT property_id, avg(rating) AS average_rating
    FROM property_reviews
    GROUP BY property_id
) AS review_totals ON properties.id = review_totals.property_id
"#;

/// Contributes a predicate when its filter field is present, binding the
/// field's value(s) first.
type PredicateFactory = fn(&PropertyFilter, &mut StatementBuilder) -> Option<Predicate>;

/// Evaluated in order; the first predicate produced gets `WHERE`.
const PREDICATES: [PredicateFactory; 4] = [city, owner, price_range, minimum_rating];

/// Build the listing statement for `filter`, returning at most `limit` rows.
///
/// The limit is passed through as given; it is always the last parameter.
///
/// # Example
/// ```
/// use lightbnb_db::models::PropertyFilter;
/// use lightbnb_db::query::listing;
///
/// let query = listing::build(&PropertyFilter::default().city("van"), 10);
/// assert!(query.sql().contains("WHERE city LIKE $1"));
/// assert!(query.sql().ends_with("LIMIT $2"));
/// assert_eq!(query.params().len(), 2);
/// ```
pub fn build(filter: &PropertyFilter, limit: i64) -> BuiltQuery {
    let mut statement = StatementBuilder::new(BASE);

    for factory in PREDICATES {
        if let Some(predicate) = factory(filter, &mut statement) {
            statement.filter(predicate);
        }
    }

    statement
        .push("GROUP BY properties.id, review_totals.average_rating")
        .push("ORDER BY cost_per_night")
        .limit(limit);

    let query = statement.finish();
    tracing::debug!(
        sql = query.sql(),
        params = query.params().len(),
        "built property listing query"
    );
    query
}

fn city(filter: &PropertyFilter, statement: &mut StatementBuilder) -> Option<Predicate> {
    let city = filter.city.as_deref()?;
    Some(Predicate::Like {
        column: "city",
        pattern: statement.bind(format!("%{city}%")),
    })
}

fn owner(filter: &PropertyFilter, statement: &mut StatementBuilder) -> Option<Predicate> {
    let owner_id = filter.owner_id?;
    Some(Predicate::Eq {
        column: "owner_id",
        value: statement.bind(owner_id),
    })
}

// A single bound is ignored.
fn price_range(filter: &PropertyFilter, statement: &mut StatementBuilder) -> Option<Predicate> {
    let (minimum, maximum) = filter.price_bounds()?;
    let low = statement.bind(Cents::from_major(minimum).get());
    let high = statement.bind(Cents::from_major(maximum).get());
    Some(Predicate::Between {
        column: "cost_per_night",
        low,
        high,
    })
}

fn minimum_rating(filter: &PropertyFilter, statement: &mut StatementBuilder) -> Option<Predicate> {
    let rating = filter.minimum_rating?;
    Some(Predicate::AtLeast {
        column: "average_rating",
        value: statement.bind(rating),
    })
}
