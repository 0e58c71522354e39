//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod filter;
pub mod money;
pub mod property;
pub mod reservation;
pub mod user;
pub mod validation;

pub use filter::{PropertyFilter, PropertyFilterParams};
pub use money::Cents;
pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::Reservation;
pub use user::{Email, NewUser, NewUserParams, User};
pub use validation::ValidationError;
