//! The content table: static biographical and professional data.
//!
//! Handlers read it through the [`ContentTable`] trait and never mutate it.
//! [`Portfolio`] is the serde-backed implementation; a sample table ships
//! embedded in the crate and is used when no content file is configured.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, TermfolioError};

/// Built-in sample content table.
const BUILTIN_PORTFOLIO: &str = include_str!("../assets/portfolio.toml");

/// Personal summary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct About {
    pub name: String,
    /// Login name used for the simulated user (`whoami`, `pwd`, listings).
    pub handle: String,
    pub greeting: String,
    /// Short tagline, e.g. "Software Engineer | Security Enthusiast".
    #[serde(default)]
    pub tagline: String,
    pub bio: String,
    pub location: String,
    pub status: String,
}

/// A named group of skills.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    /// Two-letter badge shown before the link name.
    pub icon: String,
}

/// Read-only access to the biographical content.
pub trait ContentTable {
    fn about(&self) -> &About;
    fn skills(&self) -> &[SkillCategory];
    fn projects(&self) -> &[Project];
    fn experience(&self) -> &[Experience];
    fn education(&self) -> &[Education];
    fn contact(&self) -> &Contact;
    fn social_links(&self) -> &[SocialLink];
    /// Where the full resume document can be downloaded.
    fn resume_location(&self) -> &str;
}

/// Serde-backed content table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    pub about: About,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    pub contact: Contact,
    #[serde(default)]
    pub social: Vec<SocialLink>,
    pub resume_url: String,
}

impl Portfolio {
    /// The embedded sample content table.
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_PORTFOLIO)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let portfolio: Self = toml::from_str(text)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let portfolio: Self = serde_json::from_str(text)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Load a content table file, choosing the format by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text),
            Some("toml") => Self::from_toml(&text),
            other => Err(TermfolioError::Content(format!(
                "unsupported content format: {}",
                other.unwrap_or("(none)")
            ))),
        }
    }

    fn validate(&self) -> Result<()> {
        let handle = &self.about.handle;
        if handle.is_empty() || handle.contains(char::is_whitespace) {
            return Err(TermfolioError::Content(format!(
                "about.handle must be a single word, got {handle:?}"
            )));
        }
        if self.about.bio.trim().is_empty() {
            return Err(TermfolioError::Content("about.bio is empty".to_string()));
        }
        Ok(())
    }
}

impl ContentTable for Portfolio {
    fn about(&self) -> &About {
        &self.about
    }
    fn skills(&self) -> &[SkillCategory] {
        &self.skills
    }
    fn projects(&self) -> &[Project] {
        &self.projects
    }
    fn experience(&self) -> &[Experience] {
        &self.experience
    }
    fn education(&self) -> &[Education] {
        &self.education
    }
    fn contact(&self) -> &Contact {
        &self.contact
    }
    fn social_links(&self) -> &[SocialLink] {
        &self.social
    }
    fn resume_location(&self) -> &str {
        &self.resume_url
    }
}
