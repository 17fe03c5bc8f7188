//! Concurrent loading of the five content resources.
//!
//! All five resources are requested at once and joined before anything is
//! rendered. There is no partial result: if any fetch or decode fails, the
//! whole load fails, and [`LoadState::settle`] keeps the page in its loading
//! state.

use std::fmt;

use serde::de::DeserializeOwned;

use crate::error::{PortfolioError, Result};
use crate::types::{ContactInfo, Experience, PersonalInfo, PortfolioContent, Project, SkillCategory};

/// One of the static JSON resources the page is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Personal,
    Skills,
    Experiences,
    Projects,
    Contact,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Personal,
        Resource::Skills,
        Resource::Experiences,
        Resource::Projects,
        Resource::Contact,
    ];

    /// File name relative to the data base path.
    pub fn file_name(&self) -> &'static str {
        match self {
            Resource::Personal => "personal.json",
            Resource::Skills => "skills.json",
            Resource::Experiences => "experiences.json",
            Resource::Projects => "projects.json",
            Resource::Contact => "contact.json",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Somewhere the raw JSON text of a resource can be read from.
///
/// The browser fetches over HTTP; the CLI reads a directory.
#[allow(async_fn_in_trait)]
pub trait ContentSource {
    async fn fetch(&self, resource: Resource) -> Result<String>;
}

async fn fetch_decoded<S, T>(source: &S, resource: Resource) -> Result<T>
where
    S: ContentSource,
    T: DeserializeOwned,
{
    let text = source.fetch(resource).await?;
    serde_json::from_str(&text).map_err(|source| PortfolioError::Decode { resource, source })
}

/// Fetch and decode all five resources concurrently.
pub async fn load_content<S: ContentSource>(source: &S) -> Result<PortfolioContent> {
    let (personal, skills, experiences, projects, contact) = futures::try_join!(
        fetch_decoded::<_, PersonalInfo>(source, Resource::Personal),
        fetch_decoded::<_, Vec<SkillCategory>>(source, Resource::Skills),
        fetch_decoded::<_, Vec<Experience>>(source, Resource::Experiences),
        fetch_decoded::<_, Vec<Project>>(source, Resource::Projects),
        fetch_decoded::<_, ContactInfo>(source, Resource::Contact),
    )?;

    tracing::info!(
        skills = skills.len(),
        experiences = experiences.len(),
        projects = projects.len(),
        "Portfolio content loaded"
    );

    Ok(PortfolioContent {
        personal,
        skills,
        experiences,
        projects,
        contact,
    })
}

/// Fetch and decode every resource independently.
///
/// Unlike [`load_content`] this does not stop at the first failure; each
/// resource reports its own outcome. On success the count is the number of
/// records the resource holds (1 for single-object resources).
pub async fn check_resources<S: ContentSource>(source: &S) -> Vec<(Resource, Result<usize>)> {
    let checks = Resource::ALL.map(|resource| async move { (resource, check_one(source, resource).await) });
    futures::future::join_all(checks).await
}

async fn check_one<S: ContentSource>(source: &S, resource: Resource) -> Result<usize> {
    match resource {
        Resource::Personal => fetch_decoded::<_, PersonalInfo>(source, resource).await.map(|_| 1),
        Resource::Skills => fetch_decoded::<_, Vec<SkillCategory>>(source, resource)
            .await
            .map(|v| v.len()),
        Resource::Experiences => fetch_decoded::<_, Vec<Experience>>(source, resource)
            .await
            .map(|v| v.len()),
        Resource::Projects => fetch_decoded::<_, Vec<Project>>(source, resource)
            .await
            .map(|v| v.len()),
        Resource::Contact => fetch_decoded::<_, ContactInfo>(source, resource).await.map(|_| 1),
    }
}

/// Page data state: loading until everything has arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Ready(T),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Loading
    }
}

impl<T> LoadState<T> {
    /// Turn a load result into page state.
    ///
    /// Failures are logged and leave the state at `Loading`; there is no
    /// retry and no error screen.
    pub fn settle(result: Result<T>) -> Self {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(e) => {
                tracing::error!("Error loading data: {}", e);
                LoadState::Loading
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            LoadState::Loading => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_file_names_are_distinct() {
        let mut names: Vec<_> = Resource::ALL.iter().map(|r| r.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_settle_error_stays_loading() {
        let state: LoadState<u32> = LoadState::settle(Err(PortfolioError::Fetch {
            resource: Resource::Skills,
            reason: "offline".to_string(),
        }));
        assert!(state.is_loading());
        assert!(state.ready().is_none());
    }

    #[test]
    fn test_settle_ok_is_ready() {
        let state = LoadState::settle(Ok(7u32));
        assert_eq!(state.ready(), Some(&7));
        assert_eq!(LoadState::<u32>::default(), LoadState::Loading);
    }
}
