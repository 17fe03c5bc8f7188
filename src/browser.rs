//! Browser-backed implementations of the core seams.
//!
//! - [`LocalPreferenceStore`]: `localStorage` via gloo-storage
//! - [`MediaSchemeProbe`] / [`SchemeWatcher`]: `matchMedia`
//! - [`RootClassSurface`]: the document root's class list
//! - [`HttpSource`]: `fetch` via gloo-net

use gloo::events::EventListener;
use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use portfolio_core::{
    ContentSource, PortfolioError, PreferenceStore, ResolvedTheme, Resource, Result, SchemeProbe,
    SiteConfig, ThemeSurface,
};
use web_sys::MediaQueryList;

fn match_media(query: &str) -> Option<MediaQueryList> {
    gloo::utils::window().match_media(query).ok().flatten()
}

/// Theme setting persisted in `localStorage` under a fixed key.
///
/// Values are written as bare words (`dark`, not `"dark"`), so reads and
/// writes go through the raw storage rather than gloo's JSON helpers.
pub struct LocalPreferenceStore {
    key: String,
}

impl LocalPreferenceStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(&self.key).ok().flatten()
    }

    fn save(&self, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(&self.key, value)
            .map_err(|e| PortfolioError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}

/// Reads the OS colour-scheme preference through a media query.
pub struct MediaSchemeProbe {
    query: String,
}

impl MediaSchemeProbe {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl SchemeProbe for MediaSchemeProbe {
    fn prefers_dark(&self) -> bool {
        match_media(&self.query).is_some_and(|mql| mql.matches())
    }
}

/// Subscription to media-query `change` events.
///
/// The listener is removed when the watcher is dropped.
pub struct SchemeWatcher {
    _listener: EventListener,
}

impl SchemeWatcher {
    /// Returns `None` when the browser has no `matchMedia`.
    pub fn new(query: &str, mut on_change: impl FnMut(bool) + 'static) -> Option<Self> {
        let mql = match_media(query)?;
        let target = mql.clone();
        let listener = EventListener::new(&mql, "change", move |_event| {
            on_change(target.matches());
        });
        Some(Self {
            _listener: listener,
        })
    }
}

/// Toggles the dark class on `<html>`.
pub struct RootClassSurface {
    class: String,
}

impl RootClassSurface {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }
}

impl ThemeSurface for RootClassSurface {
    fn apply(&self, theme: ResolvedTheme) {
        let root = gloo::utils::document_element();
        if let Err(e) = root.class_list().toggle_with_force(&self.class, theme.is_dark()) {
            tracing::warn!("Failed to apply {} theme: {:?}", theme, e);
        }
    }
}

/// Fetches content resources over HTTP relative to the configured base.
pub struct HttpSource {
    config: SiteConfig,
}

impl HttpSource {
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }
}

impl ContentSource for HttpSource {
    async fn fetch(&self, resource: Resource) -> Result<String> {
        let url = self.config.resource_url(resource);
        tracing::debug!("Fetching {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| PortfolioError::Fetch {
                resource,
                reason: e.to_string(),
            })?;

        if !response.ok() {
            return Err(PortfolioError::Fetch {
                resource,
                reason: format!("HTTP {}", response.status()),
            });
        }

        response.text().await.map_err(|e| PortfolioError::Fetch {
            resource,
            reason: e.to_string(),
        })
    }
}
