//! Property search filters
//!
//! Every field is optional; presence is what activates the matching
//! predicate in [`crate::query::listing`].

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};

/// Sparse set of listing search criteria.
///
/// Prices are in dollars. The price range only applies when both
/// bounds are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFilter {
    /// Case-sensitive substring of the city name
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<Decimal>,
    pub maximum_price_per_night: Option<Decimal>,
    pub minimum_rating: Option<Decimal>,
}

impl PropertyFilter {
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn owner(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn price_range(mut self, minimum: Decimal, maximum: Decimal) -> Self {
        self.minimum_price_per_night = Some(minimum);
        self.maximum_price_per_night = Some(maximum);
        self
    }

    pub fn minimum_rating(mut self, rating: Decimal) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// Both price bounds, when both are present.
    pub fn price_bounds(&self) -> Option<(Decimal, Decimal)> {
        self.minimum_price_per_night
            .zip(self.maximum_price_per_night)
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Search form fields as submitted.
///
/// Blank fields count as absent. Numeric fields accept numbers or
/// numeric strings, since form encoders send `""` for an empty input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PropertyFilterParams {
    pub city: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub owner_id: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub minimum_price_per_night: Option<Decimal>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub maximum_price_per_night: Option<Decimal>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub minimum_rating: Option<Decimal>,
}

/// `null`, missing, `""` and whitespace become `None`; other strings are
/// parsed with [`FromStr`].
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: fmt::Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field<T> {
        Text(String),
        Value(T),
    }

    match Option::<Field<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Field::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Field::Text(text)) => text.trim().parse().map(Some).map_err(de::Error::custom),
        Some(Field::Value(value)) => Ok(Some(value)),
    }
}

impl From<PropertyFilterParams> for PropertyFilter {
    fn from(params: PropertyFilterParams) -> Self {
        Self {
            city: params.city.filter(|city| !city.trim().is_empty()),
            owner_id: params.owner_id,
            minimum_price_per_night: params.minimum_price_per_night,
            maximum_price_per_night: params.maximum_price_per_night,
            minimum_rating: params.minimum_rating,
        }
    }
}
