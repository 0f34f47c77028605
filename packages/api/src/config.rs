//! # Backend location
//!
//! The client talks to exactly one backend, identified by its base URL. The URL
//! is baked in at build time from `MARSDASH_BACKEND_URL`; when the variable is
//! unset the Manifest development default is used.
//!
//! Every endpoint the client touches is derived from the base URL here so the
//! rest of the crate never concatenates paths by hand.

/// Build-time variable holding the backend base URL.
pub const BACKEND_URL_VAR: &str = "MARSDASH_BACKEND_URL";

/// Base URL used when [`BACKEND_URL_VAR`] was not set at build time.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:1111";

/// Entity slug the backend authenticates against.
pub const AUTH_ENTITY: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

impl BackendConfig {
    /// Create a config for the given base URL. Trailing slashes are dropped.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Config from the value captured at compile time.
    pub fn from_build_env() -> Self {
        match option_env!("MARSDASH_BACKEND_URL") {
            Some(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Liveness endpoint polled by the status badge.
    pub fn health_url(&self) -> String {
        format!("{}/api/health", self.base_url)
    }

    /// Admin panel served by the backend.
    pub fn admin_url(&self) -> String {
        format!("{}/admin", self.base_url)
    }

    /// Auth endpoint for the user entity, e.g. `auth_url("login")`.
    pub fn auth_url(&self, action: &str) -> String {
        format!("{}/api/auth/{AUTH_ENTITY}/{action}", self.base_url)
    }

    /// Collection endpoint for an entity slug.
    pub fn collection_url(&self, entity: &str) -> String {
        format!("{}/api/collections/{entity}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        let config = BackendConfig::new("https://mars.example.com/");
        assert_eq!(config.base_url(), "https://mars.example.com");
        assert_eq!(config.health_url(), "https://mars.example.com/api/health");
        assert_eq!(config.admin_url(), "https://mars.example.com/admin");
        assert_eq!(config.auth_url("me"), "https://mars.example.com/api/auth/user/me");
        assert_eq!(
            config.collection_url("restaurant"),
            "https://mars.example.com/api/collections/restaurant"
        );
    }

    #[test]
    fn test_default_is_local_manifest() {
        assert_eq!(BackendConfig::default().base_url(), DEFAULT_BACKEND_URL);
    }
}
