use rust_embed::Embed;
use serde::Deserialize;
use std::sync::LazyLock;
use thiserror::Error;

pub static PORTFOLIO: LazyLock<Portfolio> =
    LazyLock::new(|| Portfolio::load().expect("Embedded portfolio content should parse"));

const CONTENT_FILE: &str = "portfolio.json";

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Portfolio content file not found")]
    Missing,
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub role: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub phone_display: String,
    pub location: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub points: Vec<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Award {
    pub title: String,
    pub period: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactFact {
    pub icon: String,
    pub value: String,
}

/// Everything the page renders, authored in `content/portfolio.json` and
/// compiled into the binary.
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub experience: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub awards: Vec<Award>,
    pub contact_links: Vec<ContactLink>,
    pub contact_facts: Vec<ContactFact>,
}

impl Portfolio {
    pub fn load() -> Result<Self, ContentError> {
        let file = Content::get(CONTENT_FILE).ok_or(ContentError::Missing)?;
        Self::parse(&file.data)
    }

    pub fn parse(bytes: &[u8]) -> Result<Self, ContentError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
