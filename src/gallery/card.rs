//! Project card view models.

use super::feed::{Project, ProjectFeed};
use crate::constants::{CARD_ANIMATION_STAGGER_MS, GALLERY_ERROR_MESSAGE, SELECTED_PROJECT_KEY};
use crate::error::ShowreelResult;
use crate::host::KeyValueStore;
use serde::Serialize;
use std::path::Path;

/// Everything the host needs to build one `<article class="project-card">`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectCard {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub image: String,
    /// Image alt text (the project title)
    pub image_alt: String,
    pub tags: Vec<String>,
    /// Entrance animation delay, staggered by position
    pub animation_delay: String,
    #[serde(skip)]
    project: Project,
}

impl ProjectCard {
    pub const CLASS: &'static str = "project-card";
    pub const IMAGE_CLASS: &'static str = "project-image";
    pub const INFO_CLASS: &'static str = "project-info";
    pub const TITLE_CLASS: &'static str = "project-title";
    pub const TAGS_CLASS: &'static str = "project-tags";
    pub const TAG_CLASS: &'static str = "tag";
    pub const ARROW_CLASS: &'static str = "project-arrow";
    pub const ARROW: &'static str = "→";
    pub const IMAGE_LOADING: &'static str = "lazy";

    pub fn new(project: &Project, index: usize) -> Self {
        Self {
            id: project.id,
            slug: project.slug.clone(),
            title: project.title.clone(),
            image: project.image.clone(),
            image_alt: project.title.clone(),
            tags: project.tags.clone(),
            animation_delay: animation_delay(index),
            project: project.clone(),
        }
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Remember the clicked project for the detail page.
    pub fn select(&self, session: &mut impl KeyValueStore) -> ShowreelResult<()> {
        let json = serde_json::to_string(&self.project)?;
        session.set(SELECTED_PROJECT_KEY, json);
        tracing::info!(title = %self.title, slug = %self.slug, "Clicked project");
        Ok(())
    }
}

/// CSS animation delay for the card at `index`: 0.1s, 0.2s, ...
pub fn animation_delay(index: usize) -> String {
    let ms = (index as u32 + 1) * CARD_ANIMATION_STAGGER_MS;
    format!("{}s", ms as f32 / 1000.0)
}

/// Read back the project stored by [`ProjectCard::select`].
pub fn selected_project(session: &impl KeyValueStore) -> Option<Project> {
    let json = session.get(SELECTED_PROJECT_KEY)?;
    match serde_json::from_str(&json) {
        Ok(project) => Some(project),
        Err(e) => {
            tracing::warn!("Stored project is not valid JSON: {}", e);
            None
        }
    }
}

/// What the gallery container shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gallery {
    Cards { cards: Vec<ProjectCard> },
    Error { message: String },
}

impl Gallery {
    /// Build the gallery from a feed load result; failures become the error view.
    pub fn from_feed(feed: ShowreelResult<ProjectFeed>) -> Self {
        match feed {
            Ok(feed) => Self::Cards {
                cards: feed
                    .projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| ProjectCard::new(project, index))
                    .collect(),
            },
            Err(e) => {
                tracing::error!("Error loading projects: {}", e);
                Self::Error {
                    message: GALLERY_ERROR_MESSAGE.to_string(),
                }
            }
        }
    }

    pub fn load(path: &Path) -> Self {
        Self::from_feed(ProjectFeed::load(path))
    }

    pub fn cards(&self) -> &[ProjectCard] {
        match self {
            Self::Cards { cards } => cards,
            Self::Error { .. } => &[],
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
