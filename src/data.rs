//! Portfolio document model and loader.
//! The whole site renders from one JSON document read at page-render time;
//! nothing here is mutated or cached after the parse.

use std::fmt;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Fixed resource path of the portfolio document, relative to the server's
/// working directory.
pub const DATA_FILE: &str = "website/data/portfolio.json";

// ── Document model ─────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioDoc {
    pub personal: Personal,
    pub socials: Socials,
    pub about: About,
    /// Category → skill names. `IndexMap` keeps the document's insertion
    /// order, which drives the render order of the skill blocks.
    pub skills: IndexMap<String, Vec<String>>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub email: String,
}

/// Optional profile URLs. An absent key suppresses its control on the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Socials {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub resume: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct About {
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    /// Missing in the document ⇒ empty ⇒ no feature block rendered.
    #[serde(default)]
    pub features: Vec<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub organization: String,
    pub duration: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub field: String,
    pub institution: String,
    pub duration: String,
}

// ── Loading ────────────────────────────────────────────

/// The single load-failure kind. Read errors and parse errors both land
/// here; the caller shows one message either way and does not retry.
#[derive(Debug)]
pub enum DataLoadError {
    Read(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for DataLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataLoadError::Read(e) => write!(f, "could not read portfolio data: {}", e),
            DataLoadError::Parse(e) => write!(f, "could not parse portfolio data: {}", e),
        }
    }
}

impl From<std::io::Error> for DataLoadError {
    fn from(e: std::io::Error) -> Self {
        DataLoadError::Read(e)
    }
}

impl From<serde_json::Error> for DataLoadError {
    fn from(e: serde_json::Error) -> Self {
        DataLoadError::Parse(e)
    }
}

impl PortfolioDoc {
    /// One read, one parse. No timeout, no retry; a failed load surfaces
    /// as the in-page error message until the next request.
    pub fn load(path: &Path) -> Result<Self, DataLoadError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
