//! Contact section.

use dioxus::prelude::*;
use portfolio_core::ContactInfo;
use portfolio_ui::{EnvelopeIcon, GitHubIcon};

#[component]
fn ContactItem(href: String, value: String, children: Element) -> Element {
    rsx! {
        a { class: "contact-item", href: "{href}",
            div { class: "contact-icon", {children} }
            p { class: "contact-value", "{value}" }
        }
    }
}

#[component]
pub fn ContactSection(contact: ContactInfo) -> Element {
    rsx! {
        section { id: "contact", class: "section contact",
            p { class: "section-header section-header-lg", "Get in Touch" }
            p { class: "section-subtitle",
                "I'm always open to discussing new projects, creative ideas, or opportunities "
                "to be part of your visions. Feel free to reach out!"
            }
            div { class: "contact-list",
                ContactItem { href: contact.mailto(), value: contact.email.clone(),
                    EnvelopeIcon {}
                }
                if !contact.github.trim().is_empty() {
                    ContactItem { href: contact.github_url(), value: contact.github.clone(),
                        GitHubIcon {}
                    }
                }
            }
        }
    }
}
