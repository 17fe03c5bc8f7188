//! Content loading integration tests
//!
//! Exercise the concurrent loader against in-memory sources.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use portfolio_core::{load_content, ContentSource, LoadState, PortfolioError, Resource, Result, SkillLevel};
use tokio::sync::Barrier;

// ============================================================================
// Test Utilities
// ============================================================================

fn sample_files() -> HashMap<Resource, String> {
    HashMap::from([
        (
            Resource::Personal,
            r#"{"name":"Jane Doe","title":"Software Engineer","description":"Builds things",
                "avatar":"/icon.webp","about":"Ten years of shipping software."}"#
                .to_string(),
        ),
        (
            Resource::Skills,
            r#"[{"id":1,"name":"Languages","skills":[
                    {"name":"Rust","level":"Advanced","years":5,"description":"Daily driver"},
                    {"name":"TypeScript","level":"Intermediate","years":3,"description":"Web"}]},
                {"id":2,"title":"Tools","skills":["Git","Docker"]}]"#
                .to_string(),
        ),
        (
            Resource::Experiences,
            r#"[{"id":1,"title":"Senior Engineer","position":"Backend","company":"Acme",
                 "period":"2020 - Present","description":"Payments platform","logo":"/acme.png"}]"#
                .to_string(),
        ),
        (
            Resource::Projects,
            r#"[{"id":1,"title":"Portfolio","description":"This site","technologies":["Rust","Dioxus"],
                 "githubUrl":"https://github.com/jane/portfolio"}]"#
                .to_string(),
        ),
        (
            Resource::Contact,
            r#"{"email":"jane@example.com","github":"https://github.com/jane"}"#.to_string(),
        ),
    ])
}

struct MemorySource {
    files: HashMap<Resource, String>,
    requests: AtomicUsize,
}

impl MemorySource {
    fn new(files: HashMap<Resource, String>) -> Self {
        Self {
            files,
            requests: AtomicUsize::new(0),
        }
    }
}

impl ContentSource for MemorySource {
    async fn fetch(&self, resource: Resource) -> Result<String> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        self.files
            .get(&resource)
            .cloned()
            .ok_or_else(|| PortfolioError::Fetch {
                resource,
                reason: "HTTP 404".to_string(),
            })
    }
}

/// Source whose fetches only complete once all five are in flight.
struct RendezvousSource {
    barrier: Arc<Barrier>,
    files: HashMap<Resource, String>,
}

impl ContentSource for RendezvousSource {
    async fn fetch(&self, resource: Resource) -> Result<String> {
        self.barrier.wait().await;
        Ok(self.files[&resource].clone())
    }
}

// ============================================================================
// Loading Tests
// ============================================================================

#[tokio::test]
async fn test_load_all_resources() {
    let source = MemorySource::new(sample_files());
    let content = load_content(&source).await.unwrap();

    assert_eq!(content.personal.name, "Jane Doe");
    assert_eq!(content.skills.len(), 2);
    assert_eq!(content.skill_count(), 4);
    assert_eq!(content.skills[0].skills[0].level, Some(SkillLevel::Advanced));
    assert_eq!(content.skills[1].name, "Tools");
    assert_eq!(content.experiences[0].logo.as_deref(), Some("/acme.png"));
    assert_eq!(content.projects[0].technologies, vec!["Rust", "Dioxus"]);
    assert_eq!(content.contact.email, "jane@example.com");
    assert_eq!(source.requests.load(Ordering::SeqCst), 5);
}

#[tokio::test]
async fn test_fetches_run_concurrently() {
    let source = RendezvousSource {
        barrier: Arc::new(Barrier::new(Resource::ALL.len())),
        files: sample_files(),
    };

    // A sequential loader would never get past the first barrier wait.
    let content = tokio::time::timeout(Duration::from_secs(5), load_content(&source))
        .await
        .expect("loader should fan out all fetches at once")
        .unwrap();
    assert_eq!(content.projects.len(), 1);
}

#[tokio::test]
async fn test_any_missing_resource_fails_load() {
    for missing in Resource::ALL {
        let mut files = sample_files();
        files.remove(&missing);
        let source = MemorySource::new(files);

        match load_content(&source).await {
            Err(PortfolioError::Fetch { resource, .. }) => assert_eq!(resource, missing),
            other => panic!("expected fetch error for {missing}, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_malformed_resource_fails_load() {
    let mut files = sample_files();
    files.insert(Resource::Projects, "<html>Not Found</html>".to_string());
    let source = MemorySource::new(files);

    let err = load_content(&source).await.unwrap_err();
    assert!(matches!(
        err,
        PortfolioError::Decode {
            resource: Resource::Projects,
            ..
        }
    ));
}

#[tokio::test]
async fn test_failed_load_leaves_page_loading() {
    let mut files = sample_files();
    files.remove(&Resource::Contact);
    let source = MemorySource::new(files);

    let state = LoadState::settle(load_content(&source).await);
    assert!(state.is_loading());
    assert!(state.ready().is_none());
}

#[tokio::test]
async fn test_successful_load_is_ready() {
    let source = MemorySource::new(sample_files());

    let state = LoadState::settle(load_content(&source).await);
    let content = state.ready().expect("content should be ready");
    assert_eq!(content.personal.title, "Software Engineer");
}

// ============================================================================
// Checking Tests
// ============================================================================

#[tokio::test]
async fn test_check_reports_every_resource() {
    let mut files = sample_files();
    files.remove(&Resource::Personal);
    files.insert(Resource::Skills, "{}".to_string());
    let source = MemorySource::new(files);

    let report = portfolio_core::check_resources(&source).await;
    assert_eq!(report.len(), 5);

    for (resource, outcome) in report {
        match resource {
            Resource::Personal => assert!(matches!(outcome, Err(PortfolioError::Fetch { .. }))),
            Resource::Skills => assert!(matches!(outcome, Err(PortfolioError::Decode { .. }))),
            Resource::Experiences | Resource::Projects => assert_eq!(outcome.unwrap(), 1),
            Resource::Contact => assert_eq!(outcome.unwrap(), 1),
        }
    }
}

#[tokio::test]
async fn test_loose_content_still_loads() {
    let mut files = sample_files();
    files.insert(
        Resource::Personal,
        r#"{"name":"Jane Doe","title":"Engineer","description":"d","avatar":null,"about":"a"}"#
            .to_string(),
    );
    files.insert(
        Resource::Skills,
        r#"[{"id":1,"name":"Languages","skills":[
                {"name":"Rust","level":"advanced"},
                {"name":"Elm","level":"expert"}]}]"#
            .to_string(),
    );
    let source = MemorySource::new(files);

    let state = LoadState::settle(load_content(&source).await);
    let content = state.ready().expect("loose content should render");
    assert_eq!(content.personal.avatar, "");
    assert_eq!(content.skills[0].skills[0].level, Some(SkillLevel::Advanced));
    assert_eq!(content.skills[0].skills[1].level, None);
}
