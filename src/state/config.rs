//! Static site configuration.
//!
//! DESIGN
//! ======
//! The four original page variants differ only in which extras they ship
//! (preloader, stat counters, typing subtitle). Those differences are
//! expressed here as configuration over one canonical implementation,
//! not as separate code paths. The struct is provided as a plain value
//! via context; nothing in it changes after startup.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Everything the page renders from: identity, section content, feature
/// flags, and the externally-configured contact endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub owner_name: String,
    pub tagline: String,
    /// Form-processor endpoint the contact form posts to. Its
    /// request/response contract is owned by the external service.
    pub contact_endpoint: String,
    pub contact_method: String,
    /// Hero subtitle roles for the typing loop; empty disables it and
    /// the static tagline is shown instead.
    pub typing_roles: Vec<String>,
    pub show_preloader: bool,
    pub show_counters: bool,
    pub stats: Vec<Stat>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

/// One animated stat counter in the about section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat {
    pub label: String,
    pub target: u32,
}

/// One skill bar with its fill level in percent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// One project card in the filterable grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub category: String,
    pub link: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Alex Carter".to_owned(),
            tagline: "I build things for the web.".to_owned(),
            contact_endpoint: "https://formspree.io/f/your-form-id".to_owned(),
            contact_method: "post".to_owned(),
            typing_roles: vec![
                "Frontend Developer".to_owned(),
                "UI/UX Designer".to_owned(),
                "Web Enthusiast".to_owned(),
            ],
            show_preloader: true,
            show_counters: true,
            stats: vec![
                Stat { label: "Projects Completed".to_owned(), target: 24 },
                Stat { label: "Years Experience".to_owned(), target: 3 },
                Stat { label: "Happy Clients".to_owned(), target: 12 },
            ],
            skills: vec![
                Skill { name: "HTML & CSS".to_owned(), level: 90 },
                Skill { name: "JavaScript".to_owned(), level: 85 },
                Skill { name: "Rust & WebAssembly".to_owned(), level: 80 },
                Skill { name: "UI Design".to_owned(), level: 70 },
            ],
            projects: vec![
                Project {
                    title: "Weather Dashboard".to_owned(),
                    description: "Live forecast dashboard with location search.".to_owned(),
                    category: "web".to_owned(),
                    link: "#".to_owned(),
                },
                Project {
                    title: "Task Tracker".to_owned(),
                    description: "Offline-first to-do app with sync.".to_owned(),
                    category: "app".to_owned(),
                    link: "#".to_owned(),
                },
                Project {
                    title: "Brand Refresh".to_owned(),
                    description: "Identity and style guide for a local cafe.".to_owned(),
                    category: "design".to_owned(),
                    link: "#".to_owned(),
                },
                Project {
                    title: "Recipe Finder".to_owned(),
                    description: "Search-as-you-type recipe explorer.".to_owned(),
                    category: "web".to_owned(),
                    link: "#".to_owned(),
                },
            ],
        }
    }
}
