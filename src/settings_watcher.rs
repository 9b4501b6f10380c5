//! Settings hot-reload.
//!
//! Watches the settings file's directory (editors often replace files rather
//! than write in place) and reports changes to that one file.

use crate::error::ShowreelResult;
use crate::settings::Settings;
use anyhow::{anyhow, Context};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};

pub use crate::settings::default_settings_path;

/// A change to the watched settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    Created,
    Modified,
    Deleted,
    Error(String),
}

/// Non-blocking watcher for a single settings file.
pub struct SettingsWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    path: PathBuf,
}

impl SettingsWatcher {
    pub fn new(path: PathBuf) -> ShowreelResult<Self> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(tx)?;

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        tracing::debug!(path = %path.display(), "Watching settings file");
        Ok(Self {
            _watcher: watcher,
            rx,
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Next pending change to the settings file, if any.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        while let Ok(result) = self.rx.try_recv() {
            let event = match result {
                Ok(event) => event,
                Err(e) => return Some(SettingsEvent::Error(e.to_string())),
            };
            if !event.paths.iter().any(|p| p.file_name() == self.path.file_name()) {
                continue;
            }
            match event.kind {
                EventKind::Create(_) => return Some(SettingsEvent::Created),
                EventKind::Modify(_) => return Some(SettingsEvent::Modified),
                EventKind::Remove(_) => return Some(SettingsEvent::Deleted),
                _ => continue,
            }
        }
        None
    }

    /// Poll and reload. `None` when nothing changed; a deleted file reverts to
    /// defaults.
    pub fn next_settings(&mut self) -> Option<anyhow::Result<Settings>> {
        let event = self.poll()?;
        Some(match event {
            SettingsEvent::Created | SettingsEvent::Modified => {
                tracing::info!("Settings file changed, reloading...");
                Settings::load_from(&self.path)
                    .with_context(|| format!("reloading settings from {}", self.path.display()))
            }
            SettingsEvent::Deleted => {
                tracing::warn!("Settings file deleted, reverting to defaults");
                Ok(Settings::default())
            }
            SettingsEvent::Error(e) => Err(anyhow!("settings watch error: {e}")),
        })
    }
}
