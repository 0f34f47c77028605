use dioxus::prelude::*;

use crate::session::Screen;
use crate::use_session;

use super::{Dashboard, Landing};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top-level screen switch driven by the session.
///
/// Must be rendered inside [`crate::SessionProvider`].
#[component]
pub fn MarsDash() -> Element {
    let session = use_session().read();

    if session.loading {
        return rsx! {
            document::Stylesheet { href: VIEWS_CSS }
            div {
                class: "boot-screen",
                div { class: "spinner" }
                p { "Connecting to Mars Colony Network..." }
            }
        };
    }

    match session.screen {
        Screen::Landing => rsx! { Landing {} },
        Screen::Dashboard(user) => rsx! { Dashboard { user } },
    }
}
