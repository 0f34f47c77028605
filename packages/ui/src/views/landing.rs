use dioxus::prelude::*;
use thiserror::Error;

use api::ApiError;

use crate::icons::{FaRightToBracket, FaRocket, FaUserPlus};
use crate::session::Submission;
use crate::{use_session, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Shown when a failed sign-in carries no message of its own.
pub const AUTH_FAILED: &str = "Authentication failed. Please check your credentials.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    CreateAccount,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
}

/// State of the landing credential form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandingForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl LandingForm {
    /// Switch between sign-in and create-account. Field values are kept.
    pub fn set_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
    }

    /// Check required fields. Only presence is checked, not format; values
    /// are sent as entered.
    pub fn validate(&self) -> Result<Submission, FormError> {
        if self.mode == AuthMode::CreateAccount && self.name.is_empty() {
            return Err(FormError::Missing("Full Name"));
        }
        if self.email.is_empty() {
            return Err(FormError::Missing("Email Address"));
        }
        if self.password.is_empty() {
            return Err(FormError::Missing("Password"));
        }

        let email = self.email.clone();
        let password = self.password.clone();
        Ok(match self.mode {
            AuthMode::SignIn => Submission::SignIn { email, password },
            AuthMode::CreateAccount => Submission::CreateAccount {
                email,
                password,
                name: self.name.clone(),
            },
        })
    }

    /// Start a submission. Returns `None` when one is already running or a
    /// required field is empty; nothing should be sent in that case.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.submitting {
            return None;
        }
        match self.validate() {
            Ok(submission) => {
                self.error = None;
                self.submitting = true;
                Some(submission)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Settle a submission. Credentials are dropped on success.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.email.clear();
                self.password.clear();
                self.name.clear();
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.message().unwrap_or_else(|| AUTH_FAILED.to_string()));
            }
        }
    }
}

/// Sign-in / create-account screen.
#[component]
pub fn Landing() -> Element {
    let session = use_session();
    let mut form = use_signal(LandingForm::default);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(submission) = form.write().begin_submit() else {
            return;
        };
        spawn(async move {
            let result = session.submit(submission).await;
            if let Err(e) = &result {
                tracing::warn!("Authentication failed: {}", e);
            }
            form.write().finish_submit(result);
        });
    };

    let state = form();
    let signing_in = state.mode == AuthMode::SignIn;

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "landing",

            div {
                class: "landing-hero",
                Icon { icon: FaRocket, width: 64, height: 64, class: "landing-logo" }
                h1 { "MarsDash" }
                p { "Interplanetary Food Delivery. Right to your habitat." }
            }

            div {
                class: "landing-card",

                div {
                    class: "mode-switch",
                    button {
                        r#type: "button",
                        class: if signing_in { "mode-switch__tab active" } else { "mode-switch__tab" },
                        onclick: move |_| form.write().set_mode(AuthMode::SignIn),
                        "Sign In"
                    }
                    button {
                        r#type: "button",
                        class: if signing_in { "mode-switch__tab" } else { "mode-switch__tab active" },
                        onclick: move |_| form.write().set_mode(AuthMode::CreateAccount),
                        "Create Account"
                    }
                }

                form {
                    class: "landing-form",
                    onsubmit: handle_submit,

                    if !signing_in {
                        label {
                            span { "Full Name" }
                            input {
                                r#type: "text",
                                placeholder: "Elon M.",
                                required: true,
                                value: "{state.name}",
                                oninput: move |evt: FormEvent| form.write().name = evt.value(),
                            }
                        }
                    }

                    label {
                        span { "Email Address" }
                        input {
                            r#type: "email",
                            placeholder: "you@habitat.mars",
                            required: true,
                            value: "{state.email}",
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }

                    label {
                        span { "Password" }
                        input {
                            r#type: "password",
                            placeholder: "••••••••",
                            required: true,
                            value: "{state.password}",
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }

                    if let Some(err) = &state.error {
                        p { class: "form-error", "{err}" }
                    }

                    button {
                        r#type: "submit",
                        class: "primary-button",
                        disabled: state.submitting,
                        if state.submitting {
                            div { class: "spinner spinner--small" }
                        } else if signing_in {
                            Icon { icon: FaRightToBracket, width: 16, height: 16 }
                            "Sign In"
                        } else {
                            Icon { icon: FaUserPlus, width: 16, height: 16 }
                            "Create Account"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionProvider;
    use api::memory::customer;
    use api::{Backend, BackendConfig, Call, ManifestClient, MemoryBackend};

    /// One submit cycle of `form` against `backend`.
    async fn submit<B: Backend>(form: &mut LandingForm, backend: &B) {
        let Some(submission) = form.begin_submit() else {
            return;
        };
        let result = submission.send(backend).await.map(|_| ());
        form.finish_submit(result);
    }

    fn sign_in_form(email: &str, password: &str) -> LandingForm {
        LandingForm {
            email: email.to_string(),
            password: password.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_failed_login_shows_backend_message() {
        let backend = MemoryBackend::new();
        let mut form = sign_in_form("a@b.com", "x");

        submit(&mut form, &backend).await;

        assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
        assert!(!form.submitting);
        assert_eq!(form.email, "a@b.com");
    }

    #[tokio::test]
    async fn test_successful_login_clears_credentials() {
        let backend = MemoryBackend::new();
        backend.add_user(customer("7", "a@b.com"), "x");
        let mut form = sign_in_form("a@b.com", "x");
        form.error = Some("stale".to_string());

        submit(&mut form, &backend).await;

        assert_eq!(form.error, None);
        assert!(form.email.is_empty() && form.password.is_empty());
        assert!(backend.has_session());
    }

    #[tokio::test]
    async fn test_create_account_registers_then_signs_in() {
        let backend = MemoryBackend::new();
        let mut form = sign_in_form("new@habitat.mars", "pw");
        form.set_mode(AuthMode::CreateAccount);
        form.name = "Elon M.".to_string();

        submit(&mut form, &backend).await;

        assert_eq!(form.error, None);
        assert_eq!(
            backend.calls(),
            vec![Call::Register, Call::Authenticate, Call::CurrentUser]
        );
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let mut form = sign_in_form("a@b.com", "x");
        form.begin_submit().unwrap();
        form.finish_submit(Err(ApiError::Http { status: 500, message: None }));

        assert_eq!(form.error.as_deref(), Some(AUTH_FAILED));
        assert!(!form.submitting);
    }

    #[tokio::test]
    async fn test_signup_without_name_is_blocked() {
        let backend = MemoryBackend::new();
        let mut form = sign_in_form("a@b.com", "x");
        form.set_mode(AuthMode::CreateAccount);

        submit(&mut form, &backend).await;

        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("Full Name is required"));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn test_name_not_required_when_signing_in() {
        let form = sign_in_form("a@b.com", "x");
        assert_eq!(
            form.validate(),
            Ok(Submission::SignIn {
                email: "a@b.com".to_string(),
                password: "x".to_string()
            })
        );
    }

    #[test]
    fn test_email_and_password_required_in_both_modes() {
        for mode in [AuthMode::SignIn, AuthMode::CreateAccount] {
            let mut form = LandingForm {
                mode,
                name: "Elon M.".to_string(),
                password: "x".to_string(),
                ..Default::default()
            };
            assert_eq!(form.validate(), Err(FormError::Missing("Email Address")));

            form.email = "a@b.com".to_string();
            form.password.clear();
            assert_eq!(form.validate(), Err(FormError::Missing("Password")));
        }
    }

    #[test]
    fn test_fields_are_sent_as_entered() {
        let mut form = sign_in_form(" a@b.com ", "x");
        form.set_mode(AuthMode::CreateAccount);
        form.name = " ".to_string();

        assert_eq!(
            form.validate(),
            Ok(Submission::CreateAccount {
                email: " a@b.com ".to_string(),
                password: "x".to_string(),
                name: " ".to_string(),
            })
        );
    }

    #[test]
    fn test_mode_toggle_keeps_fields() {
        let mut form = LandingForm {
            email: "a@b.com".to_string(),
            password: "x".to_string(),
            name: "Elon M.".to_string(),
            ..Default::default()
        };
        form.set_mode(AuthMode::CreateAccount);
        form.set_mode(AuthMode::SignIn);

        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.password, "x");
        assert_eq!(form.name, "Elon M.");
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut form = sign_in_form("a@b.com", "x");
        assert!(form.begin_submit().is_some());
        assert_eq!(form.begin_submit(), None);
        assert!(form.submitting);
    }

    #[test]
    fn test_landing_starts_in_sign_in_mode() {
        let client = ManifestClient::new(BackendConfig::new("http://127.0.0.1:9"));
        let html = dioxus_ssr::render_element(rsx! {
            SessionProvider {
                backend: client,
                Landing {}
            }
        });

        assert!(html.contains("Email Address"));
        assert!(html.contains("Password"));
        assert!(!html.contains("Full Name"));
    }
}
