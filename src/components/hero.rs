use dioxus::prelude::*;
use portfolio_core::PersonalInfo;

/// Shown when the content has no avatar.
const DEFAULT_AVATAR: &str = "/icon.webp";

#[component]
pub fn HeroSection(personal: PersonalInfo) -> Element {
    let avatar = if personal.avatar.trim().is_empty() {
        DEFAULT_AVATAR.to_string()
    } else {
        personal.avatar.clone()
    };

    rsx! {
        section { class: "hero",
            img { class: "hero-avatar", src: "{avatar}", alt: "profile" }
            div { class: "hero-text",
                h2 { class: "hero-name", "{personal.name}" }
                p { class: "hero-title", "{personal.title}" }
                p { class: "hero-description", "{personal.description}" }
            }
        }
    }
}
