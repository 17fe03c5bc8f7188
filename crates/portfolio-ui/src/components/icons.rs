//! Inline SVG icons.
//!
//! Stroke icons use `currentColor`, so they follow the surrounding text colour
//! in both themes.

use dioxus::prelude::*;

/// Properties shared by all icons
#[derive(Clone, PartialEq, Props)]
pub struct IconProps {
    /// CSS classes for sizing
    #[props(default = "icon".to_string())]
    pub class: String,
}

#[component]
pub fn SunIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            role: "img",
            "aria-label": "Sun icon",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z",
            }
        }
    }
}

#[component]
pub fn MoonIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            role: "img",
            "aria-label": "Moon icon",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z",
            }
        }
    }
}

/// Monitor icon for the "System" theme setting.
#[component]
pub fn SystemIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            role: "img",
            "aria-label": "System theme icon",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M9.75 17L9 20l-1 1h8l-1-1-.75-3M3 13h18M5 17h14a2 2 0 002-2V5a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            }
        }
    }
}

#[component]
pub fn EnvelopeIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            role: "img",
            "aria-label": "Envelope icon",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            }
        }
    }
}

#[component]
pub fn GitHubIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "currentColor",
            view_box: "0 0 24 24",
            role: "img",
            "aria-label": "GitHub icon",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "M12 2C6.477 2 2 6.484 2 12.017c0 4.425 2.865 8.18 6.839 9.504.5.092.682-.217.682-.483 0-.237-.008-.868-.013-1.703-2.782.605-3.369-1.343-3.369-1.343-.454-1.158-1.11-1.466-1.11-1.466-.908-.62.069-.608.069-.608 1.003.07 1.531 1.032 1.531 1.032.892 1.53 2.341 1.088 2.91.832.092-.647.35-1.088.636-1.338-2.22-.253-4.555-1.113-4.555-4.951 0-1.093.39-1.988 1.029-2.688-.103-.253-.446-1.272.098-2.65 0 0 .84-.27 2.75 1.026A9.564 9.564 0 0112 6.844c.85.004 1.705.115 2.504.337 1.909-1.296 2.747-1.027 2.747-1.027.546 1.379.202 2.398.1 2.651.64.7 1.028 1.595 1.028 2.688 0 3.848-2.339 4.695-4.566 4.943.359.309.678.92.678 1.855 0 1.338-.012 2.419-.012 2.747 0 .268.18.58.688.482A10.019 10.019 0 0022 12.017C22 6.484 17.522 2 12 2z",
            }
        }
    }
}

/// Check mark shown next to the selected menu entry.
#[component]
pub fn CheckIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "currentColor",
            view_box: "0 0 20 20",
            role: "img",
            "aria-label": "Selected",
            path {
                fill_rule: "evenodd",
                clip_rule: "evenodd",
                d: "M16.707 5.293a1 1 0 010 1.414l-8 8a1 1 0 01-1.414 0l-4-4a1 1 0 011.414-1.414L8 12.586l7.293-7.293a1 1 0 011.414 0z",
            }
        }
    }
}

#[component]
pub fn ChevronIcon(props: IconProps) -> Element {
    rsx! {
        svg {
            class: "{props.class}",
            fill: "none",
            stroke: "currentColor",
            view_box: "0 0 24 24",
            role: "img",
            "aria-label": "Expand dropdown",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "M19 9l-7 7-7-7",
            }
        }
    }
}
