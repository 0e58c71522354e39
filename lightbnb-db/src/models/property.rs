//! Property records, listings, and new-property input

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{non_empty, non_negative};
use super::ValidationError;

/// Property record from database.
///
/// `cost_per_night` is in cents.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Property {
    pub id: i32,
    pub owner_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

/// Property with its average review rating, as returned by listing search
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PropertyListing {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Decimal,
}

/// Property submitted by an owner.
///
/// `cost_per_night` is already in cents and is stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewProperty {
    pub owner_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: i32,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub country: String,
    #[serde(default)]
    pub parking_spaces: i32,
    #[serde(default)]
    pub number_of_bathrooms: i32,
    #[serde(default)]
    pub number_of_bedrooms: i32,
}

impl NewProperty {
    /// Check the fields the database would otherwise accept silently.
    pub fn validate(self) -> Result<Self, ValidationError> {
        let title = non_empty("title", &self.title)?;
        non_negative("cost_per_night", self.cost_per_night)?;
        non_negative("parking_spaces", self.parking_spaces)?;
        non_negative("number_of_bathrooms", self.number_of_bathrooms)?;
        non_negative("number_of_bedrooms", self.number_of_bedrooms)?;
        Ok(Self { title, ..self })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn property(id: i32, city: &str, cost_per_night: i32) -> Property {
        Property {
            id,
            owner_id: 1,
            title: format!("Listing {id}"),
            description: None,
            thumbnail_photo_url: "https://images.example.com/thumb.jpg".into(),
            cover_photo_url: "https://images.example.com/cover.jpg".into(),
            cost_per_night,
            parking_spaces: 1,
            number_of_bathrooms: 1,
            number_of_bedrooms: 2,
            country: "Canada".into(),
            street: "536 Namsub Highway".into(),
            city: city.into(),
            province: "British Columbia".into(),
            post_code: "28142".into(),
            active: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_property_json() -> serde_json::Value {
        serde_json::json!({
            "owner_id": 4,
            "title": "Speed lamp",
            "thumbnail_photo_url": "https://images.example.com/t.jpg",
            "cover_photo_url": "https://images.example.com/c.jpg",
            "cost_per_night": 93061,
            "street": "536 Namsub Highway",
            "city": "Sotboske",
            "province": "Quebec",
            "post_code": "28142",
            "country": "Canada",
            "number_of_bedrooms": 3
        })
    }

    #[test]
    fn new_property_defaults_optional_counts() {
        let property: NewProperty = serde_json::from_value(new_property_json()).unwrap();
        assert_eq!(property.description, None);
        assert_eq!(property.parking_spaces, 0);
        assert_eq!(property.number_of_bedrooms, 3);
        assert_eq!(property.cost_per_night, 93061);
    }

    #[test]
    fn validate_rejects_blank_title_and_negative_cost() {
        let mut json = new_property_json();
        json["title"] = "  ".into();
        let property: NewProperty = serde_json::from_value(json).unwrap();
        assert_eq!(
            property.validate(),
            Err(ValidationError::Empty { field: "title" })
        );

        let mut json = new_property_json();
        json["cost_per_night"] = (-1).into();
        let property: NewProperty = serde_json::from_value(json).unwrap();
        assert_eq!(
            property.validate(),
            Err(ValidationError::Negative {
                field: "cost_per_night"
            })
        );
    }

    #[test]
    fn listing_serializes_flat() {
        let listing = PropertyListing {
            property: fixtures::property(7, "Vancouver", 12000),
            average_rating: Decimal::new(45, 1),
        };
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["city"], "Vancouver");
        assert_eq!(json["average_rating"], "4.5");
    }
}
