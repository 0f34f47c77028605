//! # Backend seams
//!
//! The UI never talks HTTP directly. It drives two traits:
//!
//! - [`Backend`]: authentication, the current-user lookup and generic
//!   collection queries.
//! - [`HealthProbe`]: a single liveness check.
//!
//! [`crate::ManifestClient`] implements both over HTTP; [`crate::MemoryBackend`]
//! implements both in memory for tests.

use serde::de::DeserializeOwned;

use crate::models::{NewUser, Paginator, User};
use crate::query::Query;
use crate::ApiError;

/// Async interface to the backend-as-a-service.
pub trait Backend {
    /// Exchange credentials for a session.
    fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// Create a new user. Does not sign the user in.
    fn register(&self, user: &NewUser) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// Drop the current session.
    fn end_session(&self) -> impl std::future::Future<Output = Result<(), ApiError>>;

    /// Profile of the user the current session belongs to.
    fn current_user(&self) -> impl std::future::Future<Output = Result<User, ApiError>>;

    /// Fetch a collection by entity slug.
    fn find<T: DeserializeOwned>(
        &self,
        entity: &str,
        query: &Query,
    ) -> impl std::future::Future<Output = Result<Paginator<T>, ApiError>>;
}

/// Liveness check. Any failure reads as offline.
pub trait HealthProbe {
    fn is_online(&self) -> impl std::future::Future<Output = bool>;
}
