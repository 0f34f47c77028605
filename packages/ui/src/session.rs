//! # Session state and lifecycle operations
//!
//! [`Session`] is the whole application state the root owns: which screen is
//! shown, whether the startup restore is still running and whether the
//! backend answered its last health check. The signed-in user lives inside
//! [`Screen::Dashboard`], so the dashboard can never be shown without one.
//!
//! The async functions here ([`restore`], [`login`], [`signup`], [`logout`])
//! only talk to the [`Backend`]; they return what happened and leave it to the
//! caller to fold the outcome into a [`Session`]. This keeps signal writes out
//! of await points and lets the lifecycle run against any backend.
//!
//! ```text
//! loading ──restore ok──▶ dashboard
//!    │                     ▲    │
//!    └─restore failed─▶ landing─┘ (login / signup ok)
//!                          ▲    │
//!                          └────┘ (logout)
//! ```

use api::{ApiError, Backend, NewUser, User};

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Landing,
    Dashboard(User),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub screen: Screen,
    /// True until the startup restore has settled.
    pub loading: bool,
    /// Result of the most recent health check.
    pub backend_online: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            screen: Screen::Landing,
            loading: true,
            backend_online: false,
        }
    }
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match &self.screen {
            Screen::Dashboard(user) => Some(user),
            Screen::Landing => None,
        }
    }

    /// Fold the startup restore into the state. Loading ends either way.
    pub fn finish_restore(&mut self, outcome: Result<User, ApiError>) {
        self.screen = match outcome {
            Ok(user) => Screen::Dashboard(user),
            Err(_) => Screen::Landing,
        };
        self.loading = false;
    }

    pub fn enter_dashboard(&mut self, user: User) {
        self.screen = Screen::Dashboard(user);
    }

    pub fn leave_dashboard(&mut self) {
        self.screen = Screen::Landing;
    }

    /// Record a health result. Returns whether the value changed.
    pub fn set_backend_online(&mut self, online: bool) -> bool {
        let changed = self.backend_online != online;
        self.backend_online = online;
        changed
    }
}

/// Look up the user behind an existing session.
pub async fn restore<B: Backend>(backend: &B) -> Result<User, ApiError> {
    match backend.current_user().await {
        Ok(user) => {
            tracing::info!("Restored session for {}", user.email);
            Ok(user)
        }
        Err(e) => {
            tracing::debug!("No session to restore: {}", e);
            Err(e)
        }
    }
}

/// Authenticate, then fetch the profile of the new session.
pub async fn login<B: Backend>(backend: &B, email: &str, password: &str) -> Result<User, ApiError> {
    backend.authenticate(email, password).await?;
    let user = backend.current_user().await?;
    tracing::info!("Signed in as {}", user.email);
    Ok(user)
}

/// Register a customer account and sign it in.
pub async fn signup<B: Backend>(
    backend: &B,
    email: &str,
    password: &str,
    name: &str,
) -> Result<User, ApiError> {
    backend.register(&NewUser::customer(email, password, name)).await?;
    login(backend, email, password).await
}

/// Validated credentials from the landing form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    SignIn {
        email: String,
        password: String,
    },
    CreateAccount {
        email: String,
        password: String,
        name: String,
    },
}

impl Submission {
    /// Sign in, or register then sign in, depending on the form mode.
    pub async fn send<B: Backend>(self, backend: &B) -> Result<User, ApiError> {
        match self {
            Submission::SignIn { email, password } => login(backend, &email, &password).await,
            Submission::CreateAccount { email, password, name } => {
                signup(backend, &email, &password, &name).await
            }
        }
    }
}

/// End the backend session. Failures are logged; the caller resets regardless.
pub async fn logout<B: Backend>(backend: &B) {
    if let Err(e) = backend.end_session().await {
        tracing::warn!("Failed to end session: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::memory::customer;
    use api::{Call, MemoryBackend, Role};

    #[tokio::test]
    async fn test_restore_without_session_lands() {
        let backend = MemoryBackend::new();
        let mut session = Session::default();
        assert!(session.loading);

        session.finish_restore(restore(&backend).await);

        assert_eq!(session.screen, Screen::Landing);
        assert!(session.user().is_none());
        assert!(!session.loading);
    }

    #[tokio::test]
    async fn test_restore_network_failure_lands() {
        let backend = MemoryBackend::new();
        backend.add_user(customer("7", "a@b.com"), "x");
        backend.resume_session("7");
        backend.set_unreachable(true);

        let mut session = Session::default();
        session.finish_restore(restore(&backend).await);

        assert_eq!(session.screen, Screen::Landing);
        assert!(!session.loading);
    }

    #[tokio::test]
    async fn test_restore_existing_session() {
        let backend = MemoryBackend::new();
        backend.add_user(customer("7", "a@b.com"), "x");
        backend.resume_session("7");

        let mut session = Session::default();
        session.finish_restore(restore(&backend).await);

        assert_eq!(session.screen, Screen::Dashboard(customer("7", "a@b.com")));
        assert!(!session.loading);
    }

    #[tokio::test]
    async fn test_login_fetches_user_after_authenticating() {
        let backend = MemoryBackend::new();
        backend.add_user(customer("7", "a@b.com"), "x");

        let user = login(&backend, "a@b.com", "x").await.unwrap();
        assert_eq!(user.id, "7");
        assert_eq!(backend.calls(), vec![Call::Authenticate, Call::CurrentUser]);
    }

    #[tokio::test]
    async fn test_login_failure_propagates() {
        let backend = MemoryBackend::new();
        backend.add_user(customer("7", "a@b.com"), "x");

        let err = login(&backend, "a@b.com", "wrong").await.unwrap_err();
        assert_eq!(err.message().as_deref(), Some("Invalid credentials"));
        // No profile lookup after a failed authentication
        assert_eq!(backend.calls(), vec![Call::Authenticate]);
    }

    #[tokio::test]
    async fn test_signup_registers_customer_then_logs_in() {
        let backend = MemoryBackend::new();

        let user = signup(&backend, "new@habitat.mars", "pw", "Elon M.").await.unwrap();
        assert_eq!(user.role, Role::Customer);
        assert_eq!(user.name, "Elon M.");
        assert_eq!(
            backend.calls(),
            vec![Call::Register, Call::Authenticate, Call::CurrentUser]
        );
    }

    #[tokio::test]
    async fn test_signup_conflict_short_circuits() {
        let backend = MemoryBackend::new();
        backend.add_user(customer("7", "a@b.com"), "x");

        assert!(signup(&backend, "a@b.com", "x", "Dup").await.is_err());
        assert_eq!(backend.calls(), vec![Call::Register]);
        assert!(!backend.has_session());
    }

    #[tokio::test]
    async fn test_sign_in_submission_logs_in() {
        let backend = MemoryBackend::new();
        backend.add_user(customer("7", "a@b.com"), "x");

        let submission = Submission::SignIn {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
        };
        assert_eq!(submission.send(&backend).await.unwrap().id, "7");
        assert_eq!(backend.calls(), vec![Call::Authenticate, Call::CurrentUser]);
    }

    #[tokio::test]
    async fn test_create_account_submission_registers_first() {
        let backend = MemoryBackend::new();

        let submission = Submission::CreateAccount {
            email: "new@habitat.mars".to_string(),
            password: "pw".to_string(),
            name: "Elon M.".to_string(),
        };
        let user = submission.send(&backend).await.unwrap();

        assert_eq!(user.name, "Elon M.");
        assert_eq!(backend.calls()[0], Call::Register);
    }

    #[tokio::test]
    async fn test_logout_ends_backend_session() {
        let backend = MemoryBackend::new();
        backend.add_user(customer("7", "a@b.com"), "x");
        backend.resume_session("7");

        logout(&backend).await;
        assert!(!backend.has_session());

        // A second logout without a session is harmless
        logout(&backend).await;
        assert_eq!(backend.calls(), vec![Call::EndSession, Call::EndSession]);
    }

    #[tokio::test]
    async fn test_logout_swallows_backend_failure() {
        let backend = MemoryBackend::new();
        backend.set_unreachable(true);

        logout(&backend).await;
        assert_eq!(backend.calls(), vec![Call::EndSession]);
    }

    #[test]
    fn test_backend_online_has_no_hysteresis() {
        let mut session = Session::default();
        assert!(session.set_backend_online(true));
        assert!(!session.set_backend_online(true));
        assert!(session.set_backend_online(false));
        assert!(!session.backend_online);
    }
}
