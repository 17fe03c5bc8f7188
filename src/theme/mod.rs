//! Visual theme: the global stylesheet.
//!
//! Colours are CSS custom properties on `:root`; `:root.dark` overrides them,
//! so toggling the single `dark` class on `<html>` switches every section.

mod styles;

pub use styles::GLOBAL_STYLES;
