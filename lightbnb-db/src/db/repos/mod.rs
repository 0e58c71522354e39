//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Fixed parameterized statements, no string interpolation
//! - Fail-soft reads next to error-returning variants
//! - Writes return the stored row via RETURNING

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;
