//! Portfolio page - the whole site on one page.
//!
//! Loads the five content resources concurrently on mount. Until all of them
//! have arrived the loading screen is shown; a failed load stays there.

use std::rc::Rc;

use dioxus::prelude::*;
use portfolio_core::{load_content, LoadState, PortfolioContent, SiteConfig};
use portfolio_ui::{DarkModeToggle, LoadingScreen};

use crate::browser::HttpSource;
use crate::components::{
    AboutSection, ContactSection, ExperienceSection, Header, HeroSection, ProjectsSection,
    SkillsSection,
};
use crate::context::use_theme;

#[component]
pub fn Portfolio() -> Element {
    let config = use_context::<SiteConfig>();
    let mut theme = use_theme();
    let mut content: Signal<LoadState<Rc<PortfolioContent>>> = use_signal(LoadState::default);

    // Load content on mount
    let load_config = config.clone();
    use_effect(move || {
        let source = HttpSource::new(load_config.clone());
        spawn(async move {
            let result = load_content(&source).await.map(Rc::new);
            content.set(LoadState::settle(result));
        });
    });

    let Some(data) = content.read().ready().cloned() else {
        return rsx! { LoadingScreen {} };
    };

    let state = theme.state();

    rsx! {
        DarkModeToggle {
            dark: state.is_dark(),
            on_toggle: move |_| theme.toggle(),
        }
        div { class: "page",
            Header {
                title: config.title.clone(),
                mode: state.mode(),
                resolved: state.resolved(),
                on_select: move |mode| theme.set_mode(mode),
            }
            main { class: "page-main",
                div { class: "page-column",
                    HeroSection { personal: data.personal.clone() }
                    AboutSection { about: data.personal.about.clone() }
                    SkillsSection { categories: data.skills.clone() }
                    ExperienceSection { experiences: data.experiences.clone() }
                    ProjectsSection { projects: data.projects.clone() }
                    ContactSection { contact: data.contact.clone() }
                }
            }
        }
    }
}
