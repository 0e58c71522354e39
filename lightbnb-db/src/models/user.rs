//! User records and validated sign-up input

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::non_empty;
use super::ValidationError;

/// User record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    /// Caller-hashed credential, never written to output.
    #[serde(skip_serializing)]
    pub password: String,
}

/// Validated, lowercased email address
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create an email, trimming and lowercasing it.
    ///
    /// # Example
    /// ```
    /// use lightbnb_db::models::Email;
    ///
    /// let email = Email::new(" Sebastian@Example.com ").unwrap();
    /// assert_eq!(email.as_str(), "sebastian@example.com");
    /// assert!(Email::new("not-an-email").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = non_empty("email", s)?;

        if !trimmed.contains('@') {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must contain '@'",
            });
        }

        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Raw sign-up form, as submitted
#[derive(Debug, Clone, Deserialize)]
pub struct NewUserParams {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Validated user ready for insertion
#[derive(Debug, Clone)]
pub struct NewUser {
    name: String,
    email: Email,
    password: String,
}

impl NewUser {
    pub fn new(name: &str, email: &str, password: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: non_empty("name", name)?,
            email: Email::new(email)?,
            password: non_empty("password", password)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl TryFrom<NewUserParams> for NewUser {
    type Error = ValidationError;

    fn try_from(params: NewUserParams) -> Result<Self, Self::Error> {
        Self::new(&params.name, &params.email, &params.password)
    }
}
