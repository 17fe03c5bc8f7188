#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
pub mod context;
mod pages;
mod theme;

use dioxus::logger::tracing::Level;
use portfolio_core::SiteConfig;

/// Site configuration, with the data base path overridable at build time
/// through `PORTFOLIO_DATA_BASE`.
pub fn site_config() -> SiteConfig {
    match option_env!("PORTFOLIO_DATA_BASE") {
        Some(base) if !base.is_empty() => SiteConfig::with_data_base(base),
        _ => SiteConfig::default(),
    }
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");

    tracing::info!("Starting portfolio with data from {}", site_config().data_base);

    dioxus::launch(app::App);
}
