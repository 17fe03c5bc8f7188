//! Site header: title, in-page navigation and the theme selector.

use dioxus::prelude::*;
use portfolio_core::{ResolvedTheme, ThemeMode};
use portfolio_ui::ThemeSelector;

/// Anchors for the in-page navigation, in page order.
const NAV_LINKS: [(&str, &str); 5] = [
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#experience", "Experience"),
    ("#projects", "Projects"),
    ("#contact", "Contact"),
];

#[component]
pub fn Header(
    title: String,
    mode: ThemeMode,
    resolved: ResolvedTheme,
    on_select: EventHandler<ThemeMode>,
) -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "site-title", "{title}" }
            nav { class: "site-nav", "aria-label": "Sections",
                for (href, label) in NAV_LINKS {
                    a { key: "{href}", class: "site-nav-link", href: "{href}", "{label}" }
                }
            }
            ThemeSelector { mode: mode, resolved: resolved, on_select: on_select }
        }
    }
}
