//! Page components for the portfolio site.

mod portfolio;

pub use portfolio::Portfolio;
