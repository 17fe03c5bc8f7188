//! Dark Mode Toggle
//!
//! Floating round button in the bottom-right corner. Shows the sun while the
//! dark theme is active (click for light) and the moon otherwise.

use dioxus::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};

/// Accessible label describing what a click will do.
pub fn toggle_label(dark: bool) -> &'static str {
    if dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    }
}

/// Properties for the DarkModeToggle component
#[derive(Clone, PartialEq, Props)]
pub struct DarkModeToggleProps {
    /// Whether the dark theme is currently shown
    pub dark: bool,
    /// Called on click; the owner flips the theme
    pub on_toggle: EventHandler<()>,
}

#[component]
pub fn DarkModeToggle(props: DarkModeToggleProps) -> Element {
    let label = toggle_label(props.dark);

    rsx! {
        button {
            class: "dark-mode-toggle",
            r#type: "button",
            "aria-label": "{label}",
            title: "{label}",
            onclick: move |_| props.on_toggle.call(()),
            if props.dark {
                SunIcon { class: "icon icon-lg".to_string() }
            } else {
                MoonIcon { class: "icon icon-lg".to_string() }
            }
        }
    }
}
