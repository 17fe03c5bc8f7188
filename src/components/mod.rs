//! Page sections for the portfolio site.

mod about;
mod contact;
mod experience;
mod header;
mod hero;
mod projects;
mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use header::Header;
pub use hero::HeroSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
