use dioxus::prelude::*;

#[component]
pub fn AboutSection(about: String) -> Element {
    rsx! {
        section { id: "about", class: "section",
            h2 { class: "section-header", "About" }
            p { class: "body-text", "{about}" }
        }
    }
}
