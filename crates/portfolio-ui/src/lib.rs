//! Portfolio UI Components
//!
//! Reusable Dioxus components for the portfolio site: inline SVG icons,
//! skill badges, the loading screen and the theme controls.
//!
//! Components here take plain data and event handlers. They never read
//! context, storage or the network, so the page decides where data and theme
//! state come from.
//!
//! ## Styling
//!
//! Class names map onto the global stylesheet shipped by the web app. Colours
//! come from CSS custom properties that switch when the document root carries
//! the `dark` class.

pub mod components;

pub use components::*;
