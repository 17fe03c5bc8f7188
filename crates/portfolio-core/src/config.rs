//! Site configuration.
//!
//! Defaults match the deployed layout: content under `/data`, the theme
//! setting under the `theme` storage key.

use crate::content::Resource;
use crate::theme::{COLOR_SCHEME_QUERY, DARK_CLASS, STORAGE_KEY};

/// Default base path the content resources are served from.
pub const DEFAULT_DATA_BASE: &str = "/data";

/// Site-wide settings shared by the web app and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Shown in the header and the document title
    pub title: String,
    /// Base path (or URL) the five JSON resources live under
    pub data_base: String,
    /// Storage key for the theme setting
    pub storage_key: String,
    /// Class toggled on the document root for the dark theme
    pub dark_class: String,
    /// Media query reporting the OS dark preference
    pub color_scheme_query: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Tech Portfolio".to_string(),
            data_base: DEFAULT_DATA_BASE.to_string(),
            storage_key: STORAGE_KEY.to_string(),
            dark_class: DARK_CLASS.to_string(),
            color_scheme_query: COLOR_SCHEME_QUERY.to_string(),
        }
    }
}

impl SiteConfig {
    /// Defaults with a different data base path.
    pub fn with_data_base(data_base: impl Into<String>) -> Self {
        Self {
            data_base: data_base.into(),
            ..Self::default()
        }
    }

    /// Location of a resource under the data base path.
    pub fn resource_url(&self, resource: Resource) -> String {
        format!("{}/{}", self.data_base.trim_end_matches('/'), resource.file_name())
    }
}
