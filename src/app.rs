use dioxus::prelude::*;

use crate::context::use_theme_provider;
use crate::pages::Portfolio;
use crate::site_config;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, site configuration and theme context.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(site_config);
    use_theme_provider(&config);

    rsx! {
        document::Title { "{config.title}" }
        style { {GLOBAL_STYLES} }
        Portfolio {}
    }
}
