//! User records and validated request inputs.

use crate::error::AppError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub age: i64,
}

/// Fields required to insert a user. Only produced by [`CreateUser::into_new_user`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub age: i64,
}

/// Raw create body; every field optional so validation can answer 400 instead
/// of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUser {
    pub email: Option<String>,
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl CreateUser {
    /// All three fields are mandatory; empty strings count as missing.
    pub fn into_new_user(self) -> Result<NewUser, AppError> {
        match (
            self.email.filter(|s| !s.is_empty()),
            self.name.filter(|s| !s.is_empty()),
            self.age,
        ) {
            (Some(email), Some(name), Some(age)) => Ok(NewUser { email, name, age }),
            _ => Err(AppError::Validation(
                "all fields (email, name, age) are required".into(),
            )),
        }
    }
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl UserPatch {
    /// True when no field is set. The update handler rejects such a patch.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.name.is_none() && self.age.is_none()
    }
}

/// Equality filters for listing; `None` leaves the column unconstrained.
#[derive(Debug, Default, Clone)]
pub struct UserFilter {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

/// Raw query parameters for the list endpoint. `age` arrives as a string and
/// is parsed during validation.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
}

impl ListQuery {
    /// Empty parameters are treated as absent. A non-numeric `age` is
    /// rejected rather than matched against nothing.
    pub fn into_filter(self) -> Result<UserFilter, AppError> {
        let age = match self.age.filter(|s| !s.is_empty()) {
            Some(raw) => Some(
                raw.parse::<i64>()
                    .map_err(|_| AppError::BadRequest("age must be an integer".into()))?,
            ),
            None => None,
        };
        Ok(UserFilter {
            name: self.name.filter(|s| !s.is_empty()),
            email: self.email.filter(|s| !s.is_empty()),
            age,
        })
    }
}
