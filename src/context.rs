//! Theme context for the portfolio site.
//!
//! Provides the browser-backed [`ThemeManager`] to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_theme_provider(&config);
//!
//! // In child components
//! let mut theme = use_theme();
//! let dark = theme.state().is_dark();
//! theme.toggle();
//! ```

use std::rc::Rc;

use dioxus::prelude::*;
use futures::StreamExt;
use portfolio_core::{SiteConfig, ThemeManager, ThemeMode, ThemeState};

use crate::browser::{LocalPreferenceStore, MediaSchemeProbe, RootClassSurface, SchemeWatcher};

/// Theme manager wired to localStorage, matchMedia and the document root.
pub type BrowserThemeManager = ThemeManager<LocalPreferenceStore, MediaSchemeProbe, RootClassSurface>;

/// Copyable handle to the shared theme state.
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    manager: Signal<BrowserThemeManager>,
}

impl ThemeHandle {
    /// Current setting and resolved theme. Subscribes the caller to changes.
    pub fn state(&self) -> ThemeState {
        self.manager.read().state()
    }

    pub fn toggle(&mut self) {
        self.manager.write().toggle();
    }

    pub fn set_mode(&mut self, mode: ThemeMode) {
        self.manager.write().set_mode(mode);
    }
}

/// Initialise the theme and provide it to the component tree.
///
/// While the setting is `System`, OS colour-scheme changes are forwarded
/// through a coroutine so state is only touched inside the Dioxus runtime.
/// The media-query listener lives as long as the providing component.
pub fn use_theme_provider(config: &SiteConfig) -> ThemeHandle {
    let init_config = config.clone();
    let manager = use_signal(move || {
        ThemeManager::init(
            LocalPreferenceStore::new(&init_config.storage_key),
            MediaSchemeProbe::new(&init_config.color_scheme_query),
            RootClassSurface::new(&init_config.dark_class),
        )
    });

    let scheme_changes = use_coroutine(move |mut rx: UnboundedReceiver<bool>| {
        let mut manager = manager;
        async move {
            while let Some(prefers_dark) = rx.next().await {
                manager.write().system_changed(prefers_dark);
            }
        }
    });

    let query = config.color_scheme_query.clone();
    use_hook(move || {
        let watcher = SchemeWatcher::new(&query, move |prefers_dark| {
            scheme_changes.send(prefers_dark);
        });
        if watcher.is_none() {
            tracing::warn!("matchMedia unavailable; system theme changes will not be tracked");
        }
        Rc::new(watcher)
    });

    use_context_provider(|| ThemeHandle { manager })
}

/// Hook to access the theme from context.
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}
