use serde::{Deserialize, Serialize};

/// Shown when a restaurant has no logo.
pub const PLACEHOLDER_LOGO: &str = "https://via.placeholder.com/400x200";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(deserialize_with = "super::id::deserialize")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub logo: Option<Image>,
}

impl Restaurant {
    pub fn logo_url(&self) -> &str {
        self.logo
            .as_ref()
            .and_then(|logo| logo.url.as_deref())
            .unwrap_or(PLACEHOLDER_LOGO)
    }
}

/// Image reference as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default)]
    pub url: Option<String>,
}
