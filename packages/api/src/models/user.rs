//! # User entity
//!
//! [`User`] is the profile returned by `GET /api/auth/user/me`. The client holds
//! a read-only copy for as long as the session lasts.
//!
//! [`Role`] is closed over the three roles the dashboard knows how to render.
//! Any other value coming from the backend deserializes to [`Role::Unknown`]
//! instead of failing the whole profile fetch, so the dashboard can show an
//! explicit fallback.
//!
//! [`NewUser`] is the registration payload sent to `POST /api/auth/user/signup`.

use serde::{Deserialize, Serialize};

/// Authenticated user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Name for the header, falling back to the email when no name is set.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Courier,
    Admin,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Courier => "courier",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }
}

/// Registration payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub role: Role,
}

impl NewUser {
    /// Self-service registrations are always customers.
    pub fn customer(email: &str, password: &str, name: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            name: name.to_string(),
            role: Role::Customer,
        }
    }
}
