//! Portfolio content tables.
//!
//! Projects, skills, experience and contact methods are plain data read from
//! the `content` section of the configuration file. Anything left out falls
//! back to the built-in sample content.

use crate::state::Page;
use crate::ui::CrystalKind;
use serde::{Deserialize, Serialize};

/// Defines portfolio owner details shown on the intro and main pages.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub name: String,
    pub role: String,
    pub studio: String,
}

/// Defines project data structure.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// Defines skill data structure. `level` is a percentage.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

/// Defines experience entry data structure.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub description: String,
}

/// Defines contact method data structure.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMethod {
    pub title: String,
    pub value: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// Defines all content of the portfolio.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    pub owner: Owner,
    pub about: Vec<String>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experiences: Vec<Experience>,
    pub contact_methods: Vec<ContactMethod>,
}

/// Defines a landing page card linking to a secondary page.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubSection {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub button_text: &'static str,
    pub page: Page,
    pub crystal: CrystalKind,
    pub reversed: bool,
}

/// Return the landing page cards in display order.
///
pub fn sub_sections() -> Vec<SubSection> {
    vec![
        SubSection {
            title: "Projects",
            subtitle: "Creative Solutions",
            description: "Explore my latest work and the experiences I have built.",
            button_text: "Explore Projects",
            page: Page::Projects,
            crystal: CrystalKind::Green,
            reversed: false,
        },
        SubSection {
            title: "Let's Talk",
            subtitle: "Get in Touch",
            description: "Feel free to reach out if you'd like to connect, discuss ideas, or just say hello.",
            button_text: "Explore Let's Talk",
            page: Page::Contact,
            crystal: CrystalKind::Blue,
            reversed: true,
        },
        SubSection {
            title: "Experience",
            subtitle: "Professional Journey",
            description: "Discover my professional background, skills, and the path that led me here.",
            button_text: "Explore Experience",
            page: Page::About,
            crystal: CrystalKind::Golden,
            reversed: false,
        },
    ]
}

impl Default for Owner {
    fn default() -> Self {
        Owner {
            name: "Your Name".to_string(),
            role: "Software Engineer".to_string(),
            studio: "Studio Cristal".to_string(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content {
            owner: Owner::default(),
            about: vec![
                "I build fast, accessible interfaces and the tooling behind them.".to_string(),
                "Interests include design systems, typography, music and languages.".to_string(),
            ],
            projects: vec![
                Project {
                    title: "Clinic Platform".to_string(),
                    description: "Manage patients and appointments from one place.".to_string(),
                    technologies: vec!["Rust".to_string(), "TypeScript".to_string()],
                },
                Project {
                    title: "Piano Sheet Trainer".to_string(),
                    description: "Learn to read piano sheet music in C and G major.".to_string(),
                    technologies: vec!["React Native".to_string()],
                },
            ],
            skills: vec![
                Skill {
                    name: "Rust".to_string(),
                    level: 85,
                },
                Skill {
                    name: "TypeScript".to_string(),
                    level: 90,
                },
                Skill {
                    name: "Figma".to_string(),
                    level: 80,
                },
            ],
            experiences: vec![Experience {
                title: "Frontend Engineer".to_string(),
                company: "Example Health".to_string(),
                period: "2024 - Present".to_string(),
                location: "Remote".to_string(),
                description: "Led the revamp of the core platform and its design system."
                    .to_string(),
            }],
            contact_methods: vec![
                ContactMethod {
                    title: "Email".to_string(),
                    value: "hello@example.com".to_string(),
                    description: "Send me an email anytime".to_string(),
                    link: None,
                },
                ContactMethod {
                    title: "GitHub".to_string(),
                    value: "github.com/example".to_string(),
                    description: "Check out my code repositories".to_string(),
                    link: Some("https://github.com/example".to_string()),
                },
            ],
        }
    }
}
