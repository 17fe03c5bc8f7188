//! Portfolio Core Library
//!
//! Platform-neutral pieces of the portfolio site: the content model, the
//! light/dark theme state machine and the concurrent content loader.
//!
//! ## Overview
//!
//! The site is a static single-page application. It fetches five JSON
//! resources, renders them into themed sections, and remembers one thing
//! between visits: the visitor's theme preference.
//!
//! Nothing in this crate touches the browser directly. Storage, the OS
//! colour-scheme query and the document root are reached through traits
//! ([`PreferenceStore`], [`SchemeProbe`], [`ThemeSurface`], [`ContentSource`])
//! so the same logic runs in the web app, the CLI and the tests.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{load_content, LoadState, ThemeManager};
//!
//! let mut theme = ThemeManager::init(store, probe, surface);
//! theme.toggle();
//!
//! let state = LoadState::settle(load_content(&source).await);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod theme;
pub mod types;

// Re-exports
pub use config::SiteConfig;
pub use content::{check_resources, load_content, ContentSource, LoadState, Resource};
pub use error::{PortfolioError, Result};
pub use theme::{
    PreferenceStore, ResolvedTheme, SchemeProbe, ThemeManager, ThemeMode, ThemeParseError,
    ThemeState, ThemeSurface,
};
pub use types::*;
