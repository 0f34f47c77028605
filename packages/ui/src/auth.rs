//! Session context and hooks for the UI.

use api::{ApiError, Backend, HealthProbe, ManifestClient};
use dioxus::prelude::*;

use crate::health::{poll_health, HEALTH_CHECK_INTERVAL};
use crate::session::{self, Session, Submission};

/// Read access to the session plus its lifecycle operations.
///
/// Copy it into event handlers freely; all copies point at the same state.
/// `B` is the backend [`SessionProvider`] was mounted with.
pub struct SessionHandle<B: 'static = ManifestClient> {
    state: Signal<Session>,
    backend: Signal<B>,
}

impl<B: 'static> Clone for SessionHandle<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: 'static> Copy for SessionHandle<B> {}

impl<B: Backend + Clone + 'static> SessionHandle<B> {
    /// Current session, subscribing the calling component to changes.
    pub fn read(&self) -> Session {
        (self.state)()
    }

    pub fn client(&self) -> B {
        self.backend.peek().clone()
    }

    /// Send validated credentials and switch to the dashboard.
    /// Errors are left for the caller to show.
    pub async fn submit(mut self, submission: Submission) -> Result<(), ApiError> {
        let backend = self.client();
        let user = submission.send(&backend).await?;
        self.state.write().enter_dashboard(user);
        Ok(())
    }

    /// End the session and return to the landing screen, even if the backend
    /// call fails.
    pub async fn logout(mut self) {
        let backend = self.client();
        session::logout(&backend).await;
        self.state.write().leave_dashboard();
    }
}

/// Get the session handle provided by [`SessionProvider`].
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Owns the session for everything below it.
///
/// On mount it restores any existing session and starts the health loop; both
/// tasks belong to this scope and are dropped with it.
#[component]
pub fn SessionProvider<B: Backend + HealthProbe + Clone + PartialEq + 'static>(
    backend: B,
    children: Element,
) -> Element {
    let backend = use_signal(move || backend);
    let mut state = use_signal(Session::default);

    // Restore an existing session on mount
    use_future(move || async move {
        let client = backend.peek().clone();
        let outcome = session::restore(&client).await;
        state.write().finish_restore(outcome);
    });

    // Periodic connectivity check
    use_future(move || async move {
        let client = backend.peek().clone();
        poll_health(&client, HEALTH_CHECK_INTERVAL, |online| {
            if state.peek().backend_online != online {
                state.write().set_backend_online(online);
            }
        })
        .await;
    });

    use_context_provider(|| SessionHandle { state, backend });

    rsx! {
        {children}
    }
}
