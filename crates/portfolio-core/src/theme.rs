//! Light/dark theme resolution.
//!
//! The visitor's raw setting is a [`ThemeMode`] (`light`, `dark` or `system`).
//! What the page actually shows is a [`ResolvedTheme`]. Resolution order at
//! startup:
//!
//! 1. the stored preference, if present and parseable
//! 2. the operating system colour-scheme preference
//! 3. light
//!
//! ## Architecture
//!
//! ```text
//!  PreferenceStore ──load/save──┐
//!                               ▼
//!  SchemeProbe ──prefers_dark──▶ ThemeManager ──apply──▶ ThemeSurface
//!       ▲                        (ThemeState)            (root `dark` class)
//!       └── system_changed() ◀── media query change events
//! ```
//!
//! The browser implements the three traits with `localStorage`,
//! `matchMedia` and the document root's class list. Tests use in-memory
//! fakes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Result;

/// Key under which the theme setting is persisted.
pub const STORAGE_KEY: &str = "theme";

/// Class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Media query reporting the OS dark-mode preference.
pub const COLOR_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The visitor's raw theme setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the operating system preference.
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Value written to storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Resolve against the current OS preference.
    pub fn resolve(&self, prefers_dark: bool) -> ResolvedTheme {
        match self {
            ThemeMode::Light => ResolvedTheme::Light,
            ThemeMode::Dark => ResolvedTheme::Dark,
            ThemeMode::System => ResolvedTheme::from_dark(prefers_dark),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ResolvedTheme> for ThemeMode {
    fn from(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => ThemeMode::Light,
            ResolvedTheme::Dark => ThemeMode::Dark,
        }
    }
}

/// A stored preference that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognised theme preference: {0:?}")]
pub struct ThemeParseError(pub String);

/// Shapes a stored preference may take when written as JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPreference {
    /// Older revisions persisted an `isDark` flag.
    Flag(bool),
    Word(String),
}

impl FromStr for ThemeMode {
    type Err = ThemeParseError;

    /// Parse a stored preference.
    ///
    /// Accepts `light`/`dark`/`system` (any case, surrounding whitespace
    /// ignored), the same words as JSON strings, and JSON `true`/`false`.
    fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let word = match serde_json::from_str::<StoredPreference>(trimmed) {
            Ok(StoredPreference::Flag(true)) => return Ok(ThemeMode::Dark),
            Ok(StoredPreference::Flag(false)) => return Ok(ThemeMode::Light),
            Ok(StoredPreference::Word(word)) => word,
            Err(_) => trimmed.to_string(),
        };

        match word.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            "system" => Ok(ThemeMode::System),
            _ => Err(ThemeParseError(raw.to_string())),
        }
    }
}

/// The concrete theme applied to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ResolvedTheme::Dark
        } else {
            ResolvedTheme::Light
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ResolvedTheme::Dark)
    }

    pub fn opposite(&self) -> Self {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }
}

impl fmt::Display for ResolvedTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw setting paired with what it currently resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    mode: ThemeMode,
    resolved: ResolvedTheme,
}

impl ThemeState {
    pub fn new(mode: ThemeMode, prefers_dark: bool) -> Self {
        Self {
            mode,
            resolved: mode.resolve(prefers_dark),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn resolved(&self) -> ResolvedTheme {
        self.resolved
    }

    pub fn is_dark(&self) -> bool {
        self.resolved.is_dark()
    }

    /// Whether OS preference changes affect this state.
    pub fn follows_system(&self) -> bool {
        self.mode == ThemeMode::System
    }

    /// The explicit mode a toggle moves to.
    ///
    /// From `System` this is the opposite of what is currently shown, so the
    /// toggle never cycles back through `System`.
    pub fn toggle_target(&self) -> ThemeMode {
        match self.mode {
            ThemeMode::System => self.resolved.opposite().into(),
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Re-resolve after an OS preference change.
    ///
    /// Returns `None` when the state does not follow the system or the
    /// resolved theme is unchanged.
    pub fn with_system_preference(self, prefers_dark: bool) -> Option<Self> {
        if !self.follows_system() {
            return None;
        }
        let resolved = ResolvedTheme::from_dark(prefers_dark);
        (resolved != self.resolved).then_some(Self { resolved, ..self })
    }
}

/// Client-side key/value storage holding the theme setting.
pub trait PreferenceStore {
    /// Raw stored value, if any.
    fn load(&self) -> Option<String>;

    /// Persist a new raw value.
    fn save(&self, value: &str) -> Result<()>;

    /// Remove the stored value.
    fn clear(&self);
}

/// Source of the operating system colour-scheme preference.
pub trait SchemeProbe {
    /// `true` when the OS prefers a dark scheme. Platforms that cannot tell
    /// report `false`.
    fn prefers_dark(&self) -> bool;
}

/// Whatever the resolved theme is applied to (the document root in a browser).
pub trait ThemeSurface {
    fn apply(&self, theme: ResolvedTheme);
}

/// Owns the theme state and keeps storage and the surface in step with it.
pub struct ThemeManager<S, P, T> {
    store: S,
    probe: P,
    surface: T,
    state: ThemeState,
}

impl<S, P, T> ThemeManager<S, P, T>
where
    S: PreferenceStore,
    P: SchemeProbe,
    T: ThemeSurface,
{
    /// Resolve the initial theme and apply it.
    ///
    /// A malformed stored value is logged, removed from storage, and treated
    /// as absent. Initialisation never fails.
    pub fn init(store: S, probe: P, surface: T) -> Self {
        let mode = match store.load() {
            Some(raw) => match raw.parse::<ThemeMode>() {
                Ok(mode) => mode,
                Err(e) => {
                    tracing::warn!("Discarding stored theme preference: {}", e);
                    store.clear();
                    ThemeMode::System
                }
            },
            None => ThemeMode::System,
        };

        let state = ThemeState::new(mode, probe.prefers_dark());
        tracing::debug!(mode = %state.mode(), resolved = %state.resolved(), "Theme initialised");
        surface.apply(state.resolved());

        Self {
            store,
            probe,
            surface,
            state,
        }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// Explicitly select a setting, persist it and apply the result.
    pub fn set_mode(&mut self, mode: ThemeMode) {
        if let Err(e) = self.store.save(mode.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        self.state = ThemeState::new(mode, self.probe.prefers_dark());
        self.surface.apply(self.state.resolved());
        tracing::info!(mode = %mode, resolved = %self.state.resolved(), "Theme changed");
    }

    /// Flip between light and dark. Returns the new resolved theme.
    pub fn toggle(&mut self) -> ResolvedTheme {
        let target = self.state.toggle_target();
        self.set_mode(target);
        self.state.resolved()
    }

    /// React to an OS preference change. Returns whether the page changed.
    pub fn system_changed(&mut self, prefers_dark: bool) -> bool {
        match self.state.with_system_preference(prefers_dark) {
            Some(next) => {
                self.state = next;
                self.surface.apply(next.resolved());
                tracing::debug!(resolved = %next.resolved(), "Followed system theme change");
                true
            }
            None => false,
        }
    }
}
