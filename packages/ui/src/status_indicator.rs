//! Online/offline badge for the dashboard header.

use dioxus::prelude::*;

use crate::Icon;
use crate::icons::{FaCircleCheck, FaCircleXmark};

/// Badge reflecting the last backend health check.
///
/// - **Online**: green check ("Online")
/// - **Offline**: red cross ("Offline")
#[component]
pub fn StatusIndicator(online: bool) -> Element {
    if online {
        rsx! {
            span {
                class: "status-badge status-badge--online",
                title: "Backend reachable",
                Icon { icon: FaCircleCheck, width: 10, height: 10 }
                "Online"
            }
        }
    } else {
        rsx! {
            span {
                class: "status-badge status-badge--offline",
                title: "Backend unreachable",
                Icon { icon: FaCircleXmark, width: 10, height: 10 }
                "Offline"
            }
        }
    }
}
