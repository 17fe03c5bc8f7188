//! Content source backed by a local directory.

use std::path::{Path, PathBuf};

use portfolio_core::{ContentSource, PortfolioError, Resource, Result};

/// Reads resources from `<dir>/<file name>`.
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ContentSource for DirSource {
    async fn fetch(&self, resource: Resource) -> Result<String> {
        let path = self.dir.join(resource.file_name());
        tracing::debug!("Reading {}", path.display());

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| PortfolioError::Fetch {
                resource,
                reason: format!("{}: {}", path.display(), e),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_is_fetch_error() {
        let source = DirSource::new("/nonexistent/portfolio/data");
        let err = source.fetch(Resource::Contact).await.unwrap_err();
        assert!(matches!(
            err,
            PortfolioError::Fetch {
                resource: Resource::Contact,
                ..
            }
        ));
        assert!(err.to_string().contains("contact.json"));
    }
}
