//! This crate contains all shared UI for the workspace.
//!
//! Pure state lives next to each view ([`session`], [`views::LandingForm`],
//! [`views::load_dashboard`]) so it can be exercised against an in-memory
//! backend without a renderer.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod health;
pub mod session;
pub use session::{Screen, Session, Submission};

pub mod views;
pub use views::{Dashboard, Landing, MarsDash};

mod auth;
pub use auth::{use_session, SessionHandle, SessionProvider};

mod status_indicator;
pub use status_indicator::StatusIndicator;
