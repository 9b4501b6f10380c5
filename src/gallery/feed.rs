//! Static project feed (`projects-data.json`).

use crate::error::ShowreelResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Top-level feed document: `{ "projects": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFeed {
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ProjectFeed {
    pub fn from_json(json: &str) -> ShowreelResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> ShowreelResult<Self> {
        let contents = fs::read_to_string(path)?;
        let feed = Self::from_json(&contents)?;
        tracing::debug!(path = %path.display(), projects = feed.projects.len(), "Project feed loaded");
        Ok(feed)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
