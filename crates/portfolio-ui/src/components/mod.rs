//! Reusable UI components

mod icons;
mod loading;
mod skill_badge;
mod theme_selector;
mod theme_toggle;

pub use icons::*;
pub use loading::*;
pub use skill_badge::*;
pub use theme_selector::*;
pub use theme_toggle::*;
