use serde::{Deserialize, Serialize};

use super::Restaurant;

/// Order with its restaurant relation expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,
    #[serde(default)]
    pub restaurant: Option<Restaurant>,
    #[serde(default)]
    pub total_price: f64,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Order {
    /// Status with separators turned into spaces, e.g. `in_transit` → `in transit`.
    pub fn status_label(&self) -> String {
        self.status.replace('_', " ")
    }

    /// Total formatted as a price, e.g. `$18.00`.
    pub fn total_label(&self) -> String {
        format!("${:.2}", self.total_price)
    }

    pub fn is_delivered(&self) -> bool {
        self.status == "delivered"
    }

    pub fn restaurant_name(&self) -> &str {
        self.restaurant.as_ref().map(|r| r.name.as_str()).unwrap_or_default()
    }
}
