//! Theme Selector Component
//!
//! Dropdown offering the three theme settings. While "System" is selected the
//! button also shows what the system setting currently resolves to.

use dioxus::prelude::*;
use portfolio_core::{ResolvedTheme, ThemeMode};

use crate::components::icons::{CheckIcon, ChevronIcon, MoonIcon, SunIcon, SystemIcon};

/// Properties for the ThemeSelector component
#[derive(Clone, PartialEq, Props)]
pub struct ThemeSelectorProps {
    /// Current raw setting
    pub mode: ThemeMode,
    /// What the page currently shows
    pub resolved: ResolvedTheme,
    /// Called with the chosen setting
    pub on_select: EventHandler<ThemeMode>,
}

/// CSS classes for a menu entry.
pub fn option_class(option: ThemeMode, current: ThemeMode) -> &'static str {
    if option == current {
        "theme-option selected"
    } else {
        "theme-option"
    }
}

fn mode_icon(mode: ThemeMode) -> Element {
    let class = "icon icon-sm".to_string();
    match mode {
        ThemeMode::Light => rsx! { SunIcon { class: class } },
        ThemeMode::Dark => rsx! { MoonIcon { class: class } },
        ThemeMode::System => rsx! { SystemIcon { class: class } },
    }
}

/// Dropdown for choosing light, dark or system theme
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ThemeSelector {
///         mode: state.mode(),
///         resolved: state.resolved(),
///         on_select: move |mode| theme.set_mode(mode),
///     }
/// }
/// ```
#[component]
pub fn ThemeSelector(props: ThemeSelectorProps) -> Element {
    let mut open = use_signal(|| false);
    let mode = props.mode;
    let resolved = props.resolved;
    let on_select = props.on_select;
    let chevron_class = if open() {
        "icon icon-sm chevron open"
    } else {
        "icon icon-sm chevron"
    };

    rsx! {
        div { class: "theme-selector",
            button {
                class: "theme-selector-button",
                r#type: "button",
                "aria-label": "Select theme",
                "aria-expanded": if open() { "true" } else { "false" },
                onclick: move |_| open.set(!open()),
                {mode_icon(mode)}
                span { "{mode.label()}" }
                if mode == ThemeMode::System {
                    span { class: "theme-resolved", "({resolved})" }
                }
                ChevronIcon { class: chevron_class.to_string() }
            }

            if open() {
                div {
                    class: "theme-overlay",
                    "aria-hidden": "true",
                    onclick: move |_| open.set(false),
                }
                div { class: "theme-menu", role: "menu",
                    for option in ThemeMode::ALL {
                        button {
                            key: "{option}",
                            class: option_class(option, mode),
                            r#type: "button",
                            role: "menuitemradio",
                            "aria-checked": if option == mode { "true" } else { "false" },
                            onclick: move |_| {
                                on_select.call(option);
                                open.set(false);
                            },
                            {mode_icon(option)}
                            span { class: "theme-option-label", "{option.label()}" }
                            if option == ThemeMode::System {
                                span { class: "theme-resolved", "({resolved})" }
                            }
                            if option == mode {
                                CheckIcon { class: "icon icon-sm theme-check".to_string() }
                            }
                        }
                    }
                }
            }
        }
    }
}
