//! Content model for the portfolio site.
//!
//! Each record is an immutable snapshot of one JSON payload. Records are
//! fetched once, held in memory and rendered; nothing here is ever mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// The person the site is about (`personal.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub description: String,
    /// Avatar image URL. May be empty or null, in which case the site icon
    /// is shown.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub avatar: String,
    pub about: String,
}

/// Self-assessed proficiency for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
        }
    }
}

impl FromStr for SkillLevel {
    type Err = String;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(SkillLevel::Beginner),
            "intermediate" => Ok(SkillLevel::Intermediate),
            "advanced" => Ok(SkillLevel::Advanced),
            _ => Err(raw.to_string()),
        }
    }
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single skill inside a [`SkillCategory`].
///
/// Older content lists skills as bare strings; those deserialize into a skill
/// with only a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SkillRepr")]
pub struct Skill {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<SkillLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Skill {
    /// A skill known only by name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            level: None,
            years: None,
            description: None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillRepr {
    Name(String),
    Detailed {
        name: String,
        #[serde(default, deserialize_with = "lenient_level")]
        level: Option<SkillLevel>,
        #[serde(default)]
        years: Option<f32>,
        #[serde(default)]
        description: Option<String>,
    },
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// An unrecognised level drops the level, not the skill.
fn lenient_level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<SkillLevel>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| match raw.parse() {
        Ok(level) => Some(level),
        Err(unknown) => {
            tracing::warn!("Ignoring unknown skill level {:?}", unknown);
            None
        }
    }))
}

impl From<SkillRepr> for Skill {
    fn from(repr: SkillRepr) -> Self {
        match repr {
            SkillRepr::Name(name) => Skill::named(name),
            SkillRepr::Detailed {
                name,
                level,
                years,
                description,
            } => Skill {
                name,
                level,
                years,
                description,
            },
        }
    }
}

/// A titled group of skills (`skills.json` is a list of these).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    #[serde(default)]
    pub id: u32,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// One position in the work history (`experiences.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub position: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// A showcased project (`projects.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

/// How to reach the person (`contact.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub github: String,
}

impl ContactInfo {
    /// `mailto:` link for the email address.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// Absolute GitHub URL. Accepts either a full URL or a bare username.
    pub fn github_url(&self) -> String {
        let github = self.github.trim();
        if github.starts_with("http://") || github.starts_with("https://") {
            github.to_string()
        } else {
            format!("https://github.com/{}", github.trim_start_matches('@'))
        }
    }
}

/// Everything the page renders, joined from the five resources.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioContent {
    pub personal: PersonalInfo,
    pub skills: Vec<SkillCategory>,
    pub experiences: Vec<Experience>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
}

impl PortfolioContent {
    /// Total number of skills across all categories.
    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|c| c.skills.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_from_detailed_object() {
        let skill: Skill = serde_json::from_str(
            r#"{"name":"Rust","level":"Advanced","years":4,"description":"Systems work"}"#,
        )
        .unwrap();
        assert_eq!(skill.name, "Rust");
        assert_eq!(skill.level, Some(SkillLevel::Advanced));
        assert_eq!(skill.years, Some(4.0));
        assert_eq!(skill.description.as_deref(), Some("Systems work"));
    }

    #[test]
    fn test_skill_from_bare_string() {
        let skill: Skill = serde_json::from_str(r#""TypeScript""#).unwrap();
        assert_eq!(skill, Skill::named("TypeScript"));
    }

    #[test]
    fn test_unknown_skill_level_keeps_skill() {
        let skill: Skill = serde_json::from_str(r#"{"name":"Go","level":"Guru","years":2}"#).unwrap();
        assert_eq!(skill.name, "Go");
        assert_eq!(skill.level, None);
        assert_eq!(skill.years, Some(2.0));
    }

    #[test]
    fn test_skill_level_any_case() {
        let categories: Vec<SkillCategory> = serde_json::from_str(
            r#"[{"name":"A","skills":[{"name":"x","level":"advanced"},{"name":"y","level":" BEGINNER "}]}]"#,
        )
        .unwrap();
        assert_eq!(categories[0].skills[0].level, Some(SkillLevel::Advanced));
        assert_eq!(categories[0].skills[1].level, Some(SkillLevel::Beginner));
    }

    #[test]
    fn test_null_skill_level_is_none() {
        let skill: Skill = serde_json::from_str(r#"{"name":"Go","level":null}"#).unwrap();
        assert_eq!(skill.level, None);
    }

    #[test]
    fn test_null_avatar_is_empty() {
        let personal: PersonalInfo = serde_json::from_str(
            r#"{"name":"Jane","title":"Engineer","description":"d","avatar":null,"about":"a"}"#,
        )
        .unwrap();
        assert_eq!(personal.avatar, "");

        let personal: PersonalInfo = serde_json::from_str(
            r#"{"name":"Jane","title":"Engineer","description":"d","about":"a"}"#,
        )
        .unwrap();
        assert_eq!(personal.avatar, "");
    }

    #[test]
    fn test_category_accepts_title_alias() {
        let category: SkillCategory =
            serde_json::from_str(r#"{"title":"Frontend","skills":["React","CSS"]}"#).unwrap();
        assert_eq!(category.name, "Frontend");
        assert_eq!(category.id, 0);
        assert_eq!(category.skills.len(), 2);
        assert!(category.icon_path.is_none());
    }

    #[test]
    fn test_project_camel_case_links() {
        let project: Project = serde_json::from_str(
            r#"{"id":1,"title":"Site","description":"This site","technologies":["Rust"],
                "githubUrl":"https://github.com/me/site","liveUrl":"https://me.dev"}"#,
        )
        .unwrap();
        assert_eq!(project.github_url.as_deref(), Some("https://github.com/me/site"));
        assert_eq!(project.live_url.as_deref(), Some("https://me.dev"));
        assert!(project.image.is_none());

        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("githubUrl").is_some());
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_personal_info_requires_name() {
        let result = serde_json::from_str::<PersonalInfo>(
            r#"{"title":"Engineer","description":"d","avatar":"","about":"a"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_contact_github_url() {
        let full = ContactInfo {
            email: "me@example.com".to_string(),
            github: "https://github.com/me".to_string(),
        };
        assert_eq!(full.github_url(), "https://github.com/me");
        assert_eq!(full.mailto(), "mailto:me@example.com");

        let bare = ContactInfo {
            email: "me@example.com".to_string(),
            github: "@me".to_string(),
        };
        assert_eq!(bare.github_url(), "https://github.com/me");
    }
}
