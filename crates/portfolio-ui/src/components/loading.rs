//! Loading Screen
//!
//! Shown until every content resource has arrived. A failed load never
//! leaves this screen.

use dioxus::prelude::*;

#[component]
pub fn LoadingScreen(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div { class: "loading-screen", role: "status", "aria-live": "polite",
            div { class: "loading-text", "{message}" }
        }
    }
}
