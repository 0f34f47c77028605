//! Entities returned by the backend.

mod id;
mod order;
mod paginator;
mod restaurant;
mod user;

pub use order::Order;
pub use paginator::Paginator;
pub use restaurant::{Image, Restaurant};
pub use user::{NewUser, Role, User};
