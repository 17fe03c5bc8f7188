//! Skill Badge Component
//!
//! Pill-shaped badge for a single skill. Level and years, when the content
//! provides them, appear as a short suffix and in the hover tooltip.

use dioxus::prelude::*;
use portfolio_core::Skill;

/// Short suffix shown after the skill name, e.g. `"Advanced · 5y"`.
pub fn skill_suffix(skill: &Skill) -> Option<String> {
    let years = skill.years.map(format_years);
    match (skill.level, years) {
        (Some(level), Some(years)) => Some(format!("{} · {}", level, years)),
        (Some(level), None) => Some(level.to_string()),
        (None, Some(years)) => Some(years),
        (None, None) => None,
    }
}

/// Tooltip text: the description, falling back to the name.
pub fn skill_tooltip(skill: &Skill) -> String {
    match skill.description.as_deref() {
        Some(description) if !description.trim().is_empty() => {
            format!("{}: {}", skill.name, description)
        }
        _ => skill.name.clone(),
    }
}

fn format_years(years: f32) -> String {
    if years.fract() == 0.0 {
        format!("{}y", years as u32)
    } else {
        format!("{:.1}y", years)
    }
}

/// Displays one skill as a badge
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SkillBadge { skill: Skill::named("Rust") }
/// }
/// ```
#[component]
pub fn SkillBadge(skill: Skill) -> Element {
    let suffix = skill_suffix(&skill);
    let tooltip = skill_tooltip(&skill);

    rsx! {
        div { class: "skill-badge", title: "{tooltip}",
            span { class: "skill-badge-mark" }
            p { class: "skill-badge-name", "{skill.name}" }
            if let Some(suffix) = suffix {
                span { class: "skill-badge-level", "{suffix}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::SkillLevel;

    fn detailed(level: Option<SkillLevel>, years: Option<f32>) -> Skill {
        Skill {
            name: "Rust".to_string(),
            level,
            years,
            description: Some("Systems programming".to_string()),
        }
    }

    #[test]
    fn suffix_combines_level_and_years() {
        let skill = detailed(Some(SkillLevel::Advanced), Some(5.0));
        assert_eq!(skill_suffix(&skill).as_deref(), Some("Advanced · 5y"));
    }

    #[test]
    fn suffix_fractional_years() {
        let skill = detailed(None, Some(1.5));
        assert_eq!(skill_suffix(&skill).as_deref(), Some("1.5y"));
    }

    #[test]
    fn bare_skill_has_no_suffix() {
        assert_eq!(skill_suffix(&Skill::named("Git")), None);
        assert_eq!(skill_tooltip(&Skill::named("Git")), "Git");
    }

    #[test]
    fn tooltip_includes_description() {
        let skill = detailed(Some(SkillLevel::Beginner), None);
        assert_eq!(skill_tooltip(&skill), "Rust: Systems programming");
    }
}
