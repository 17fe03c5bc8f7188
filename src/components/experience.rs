//! Work experience: a timeline followed by a detail block per position.

use dioxus::prelude::*;
use portfolio_core::Experience;

/// Whether a timeline entry draws the connector down to the next one.
fn has_connector(index: usize, len: usize) -> bool {
    index + 1 < len
}

fn logo_style(logo: Option<&str>) -> String {
    logo.map(|url| format!("background-image: url('{}');", url))
        .unwrap_or_default()
}

#[component]
fn ExperienceTimeline(experiences: Vec<Experience>) -> Element {
    let len = experiences.len();

    rsx! {
        div { class: "timeline",
            for (index, exp) in experiences.iter().enumerate() {
                div { key: "{exp.company}-{index}", class: "timeline-entry",
                    div { class: "timeline-marker",
                        div { class: "timeline-dot", style: logo_style(exp.logo.as_deref()) }
                        if has_connector(index, len) {
                            div { class: "timeline-connector" }
                        }
                    }
                    div { class: "timeline-body",
                        p { class: "timeline-title", "{exp.title}" }
                        if !exp.position.is_empty() {
                            p { class: "timeline-position", "{exp.position}" }
                        }
                        p { class: "timeline-meta", "{exp.company} | {exp.period}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ExperienceSection(experiences: Vec<Experience>) -> Element {
    rsx! {
        section { id: "experience", class: "section",
            h2 { class: "section-header section-header-lg", "Work Experience" }
            p { class: "section-subtitle",
                "A timeline of my professional journey in software engineering"
            }
            ExperienceTimeline { experiences: experiences.clone() }
            for exp in experiences.iter() {
                div { key: "{exp.id}-detail", class: "experience-detail",
                    h3 { class: "subsection-header", "{exp.company} | {exp.period}" }
                    p { class: "body-text", "{exp.description}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_becomes_background() {
        assert_eq!(logo_style(Some("/acme.png")), "background-image: url('/acme.png');");
        assert_eq!(logo_style(None), "");
    }

    #[test]
    fn last_entry_has_no_connector() {
        assert!(has_connector(0, 3));
        assert!(has_connector(1, 3));
        assert!(!has_connector(2, 3));
        assert!(!has_connector(0, 1));
    }
}
