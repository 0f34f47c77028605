//! # API crate: backend client for MarsDash
//!
//! Everything the UI knows about the backend-as-a-service lives here. The
//! backend itself (auth, storage, query evaluation, admin panel) is external;
//! this crate only describes how to call it.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`backend`] | The [`Backend`] and [`HealthProbe`] traits the UI is written against |
//! | [`client`] | [`ManifestClient`], the HTTP implementation with an in-memory bearer token |
//! | `memory` | `MemoryBackend`, an in-memory implementation that records every call (feature `testing`) |
//! | [`config`] | [`BackendConfig`], the build-time base URL and the endpoints derived from it |
//! | [`models`] | `User`, `Restaurant`, `Order` and the collection envelope |
//! | [`query`] | [`Query`] builder for relations, equality filters and sort order |
//!
//! Errors from every operation are reported as [`ApiError`].

pub mod backend;
pub mod client;
pub mod config;
mod error;
#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod models;
pub mod query;

pub use backend::{Backend, HealthProbe};
pub use client::ManifestClient;
pub use config::BackendConfig;
pub use error::ApiError;
#[cfg(any(test, feature = "testing"))]
pub use memory::{Call, MemoryBackend};
pub use models::{NewUser, Order, Restaurant, Role, User};
pub use query::{Direction, Query};
