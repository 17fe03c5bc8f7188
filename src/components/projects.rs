//! Projects section: a responsive grid of project cards.

use dioxus::prelude::*;
use portfolio_core::Project;
use portfolio_ui::GitHubIcon;

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        article { class: "project-card",
            if let Some(image) = project.image.as_deref() {
                img { class: "project-image", src: "{image}", alt: "{project.title}" }
            } else {
                div { class: "project-placeholder", "aria-hidden": "true", "📁" }
            }
            h3 { class: "project-title", "{project.title}" }
            p { class: "project-description", "{project.description}" }
            if !project.technologies.is_empty() {
                ul { class: "project-tech",
                    for tech in project.technologies.iter() {
                        li { key: "{tech}", class: "project-tech-item", "{tech}" }
                    }
                }
            }
            div { class: "project-links",
                if let Some(url) = project.github_url.as_deref() {
                    a {
                        class: "project-link",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        GitHubIcon { class: "icon icon-sm".to_string() }
                        "Source"
                    }
                }
                if let Some(url) = project.live_url.as_deref() {
                    a {
                        class: "project-link",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Live"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsSection(projects: Vec<Project>) -> Element {
    rsx! {
        section { id: "projects", class: "section",
            h2 { class: "section-header", "Projects" }
            div { class: "project-grid",
                for project in projects {
                    ProjectCard { key: "{project.id}", project: project }
                }
            }
        }
    }
}
