//! Skills section: one heading and a row of badges per category.

use dioxus::prelude::*;
use portfolio_core::SkillCategory;
use portfolio_ui::SkillBadge;

#[component]
pub fn SkillsSection(categories: Vec<SkillCategory>) -> Element {
    rsx! {
        section { id: "skills", class: "section",
            h2 { class: "section-header section-header-lg", "Skills" }
            for category in categories {
                div { key: "{category.id}-{category.name}", class: "skill-category",
                    div { class: "skill-category-title",
                        if let Some(icon) = category.icon_path.as_deref() {
                            img { class: "skill-category-icon", src: "{icon}", alt: "" }
                        }
                        h3 { class: "subsection-header", "{category.name}" }
                    }
                    div { class: "skill-badges",
                        for skill in category.skills.iter().cloned() {
                            SkillBadge { key: "{skill.name}", skill: skill }
                        }
                    }
                }
            }
        }
    }
}
