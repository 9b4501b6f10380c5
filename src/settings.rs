//! Site settings.
//!
//! A JSON document where every section and field is optional; missing values
//! fall back to the defaults in [`crate::constants`].

use crate::constants::{
    CAROUSEL_SPEED, DEFAULT_FEED_PATH, DRAG_MULTIPLIER, GRID_GAP, REVEAL_BOTTOM_MARGIN,
    REVEAL_THRESHOLD,
};
use crate::error::{ShowreelError, ShowreelResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Carousel tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Auto-scroll pixels per frame
    pub speed: f32,
    /// Pointer travel multiplier while dragging
    pub drag_multiplier: f32,
    /// Horizontal gap between items, used for hit testing
    pub item_gap: f32,
    /// Re-measure the track width when the viewport resizes
    pub remeasure_on_resize: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            speed: CAROUSEL_SPEED,
            drag_multiplier: DRAG_MULTIPLIER,
            item_gap: 0.0,
            remeasure_on_resize: true,
        }
    }
}

/// Scroll reveal tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Visible ratio that triggers a reveal
    pub threshold: f32,
    /// Pixels trimmed off the bottom of the viewport
    pub bottom_margin: f32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: REVEAL_THRESHOLD,
            bottom_margin: REVEAL_BOTTOM_MARGIN,
        }
    }
}

/// Hero grid tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Distance between grid lines
    pub gap: f32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self { gap: GRID_GAP }
    }
}

/// All site settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub carousel: CarouselSettings,
    pub reveal: RevealSettings,
    pub grid: GridSettings,
    /// Location of the project feed
    pub feed_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            carousel: CarouselSettings::default(),
            reveal: RevealSettings::default(),
            grid: GridSettings::default(),
            feed_path: PathBuf::from(DEFAULT_FEED_PATH),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string.
    pub fn from_json(json: &str) -> ShowreelResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file.
    pub fn load_from(path: &Path) -> ShowreelResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load settings from a file, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(path = %path.display(), "Failed to load settings: {}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON.
    pub fn save_to(&self, path: &Path) -> ShowreelResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reject values the state machines cannot work with.
    pub fn validate(&self) -> ShowreelResult<()> {
        let carousel = &self.carousel;
        if !carousel.speed.is_finite() || carousel.speed < 0.0 {
            return Err(ShowreelError::InvalidSettings(format!(
                "carousel.speed must be a non-negative number, got {}",
                carousel.speed
            )));
        }
        if !carousel.drag_multiplier.is_finite() {
            return Err(ShowreelError::InvalidSettings(
                "carousel.drag_multiplier must be finite".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ShowreelError::InvalidSettings(format!(
                "reveal.threshold must be within 0..=1, got {}",
                self.reveal.threshold
            )));
        }
        if !(self.grid.gap.is_finite() && self.grid.gap > 0.0) {
            return Err(ShowreelError::InvalidSettings(format!(
                "grid.gap must be positive, got {}",
                self.grid.gap
            )));
        }
        Ok(())
    }
}

/// Default settings location: `<config_dir>/showreel/settings.json`.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("showreel").join("settings.json"))
}
