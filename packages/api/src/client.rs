//! HTTP implementation of [`Backend`] for a Manifest backend.
//!
//! The session is a bearer token returned by the login endpoint. It lives only
//! in memory, shared between clones of the client, and is dropped on
//! [`end_session`](Backend::end_session).

use std::sync::{Arc, RwLock};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::backend::{Backend, HealthProbe};
use crate::config::BackendConfig;
use crate::models::{NewUser, Paginator, User};
use crate::query::Query;
use crate::ApiError;

#[derive(Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Clone, Debug)]
pub struct ManifestClient {
    config: BackendConfig,
    http: reqwest::Client,
    token: Arc<RwLock<Option<String>>>,
}

/// Two clients are equal when they target the same backend and share a session.
impl PartialEq for ManifestClient {
    fn eq(&self, other: &Self) -> bool {
        self.config == other.config && Arc::ptr_eq(&self.token, &other.token)
    }
}

impl ManifestClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            token: Arc::new(RwLock::new(None)),
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|t| t.clone())
    }

    fn set_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut slot) => *slot = token,
            Err(e) => tracing::error!("Session token lock poisoned: {}", e),
        }
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode a 2xx JSON body, mapping everything else to [`ApiError`].
    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl Backend for ManifestClient {
    async fn authenticate(&self, email: &str, password: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .post(self.config.auth_url("login"))
            .json(&serde_json::json!({ "email": email, "password": password }));
        let TokenResponse { token } = self.send(request).await?;
        self.set_token(Some(token));
        tracing::debug!("Authenticated {}", email);
        Ok(())
    }

    async fn register(&self, user: &NewUser) -> Result<(), ApiError> {
        let request = self.http.post(self.config.auth_url("signup")).json(user);
        let _: serde_json::Value = self.send(request).await?;
        tracing::debug!("Registered {}", user.email);
        Ok(())
    }

    async fn end_session(&self) -> Result<(), ApiError> {
        self.set_token(None);
        Ok(())
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        if self.token().is_none() {
            return Err(ApiError::NoSession);
        }
        let request = self.authorized(self.http.get(self.config.auth_url("me")));
        self.send(request).await
    }

    async fn find<T: DeserializeOwned>(&self, entity: &str, query: &Query) -> Result<Paginator<T>, ApiError> {
        let request = self
            .authorized(self.http.get(self.config.collection_url(entity)))
            .query(&query.to_params());
        self.send(request).await
    }
}

impl HealthProbe for ManifestClient {
    async fn is_online(&self) -> bool {
        match self.http.get(self.config.health_url()).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!("Health check failed: {}", e);
                false
            }
        }
    }
}
