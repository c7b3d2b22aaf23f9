// File: src/site.rs
// Purpose: Portfolio content loaded from the [site] table of folio.toml

use serde::{Deserialize, Serialize};

/// Everything the page displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Brand shown in the navigation bar and the document title
    #[serde(default = "default_title")]
    pub title: String,

    /// Person the portfolio belongs to
    #[serde(default = "default_owner")]
    pub owner: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Address contact submissions are handed off to
    #[serde(default = "default_contact_email")]
    pub contact_email: String,

    #[serde(default = "default_copyright_year")]
    pub copyright_year: u16,

    #[serde(default = "default_skills")]
    pub skills: Vec<String>,

    #[serde(default = "default_links")]
    pub links: Vec<HeroLink>,

    #[serde(default = "default_projects")]
    pub projects: Vec<Project>,
}

/// External profile link under the hero banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroLink {
    pub label: String,
    pub href: String,

    /// Offer the target as a download instead of opening a new tab
    #[serde(default)]
    pub download: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub repo: String,
}

impl HeroLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            download: false,
        }
    }
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            repo: repo.into(),
        }
    }
}

fn default_title() -> String {
    "My Portfolio".to_string()
}

fn default_owner() -> String {
    "Your Name".to_string()
}

fn default_tagline() -> String {
    "Developer building things for the web.".to_string()
}

fn default_contact_email() -> String {
    "you@example.com".to_string()
}

fn default_copyright_year() -> u16 {
    2024
}

fn default_skills() -> Vec<String> {
    ["HTML", "CSS", "JavaScript", "Rust"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_links() -> Vec<HeroLink> {
    vec![
        HeroLink::new("GitHub", "https://github.com/"),
        HeroLink::new("LinkedIn", "https://www.linkedin.com/"),
    ]
}

fn default_projects() -> Vec<Project> {
    vec![Project::new(
        "Portfolio",
        "This site: a single page rendered with Maud and a validated contact form.",
        "https://github.com/",
    )]
}

impl Default for Site {
    fn default() -> Self {
        Self {
            title: default_title(),
            owner: default_owner(),
            tagline: default_tagline(),
            contact_email: default_contact_email(),
            copyright_year: default_copyright_year(),
            skills: default_skills(),
            links: default_links(),
            projects: default_projects(),
        }
    }
}
