//! Stored theme preference.

use crate::constants::THEME_KEY;
use crate::host::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Site theme, applied as `data-theme` on the root element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Read the saved preference, defaulting to dark.
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(THEME_KEY) {
            Some(value) => value.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %value, "Unknown theme preference, using dark");
                Self::Dark
            }),
            None => Self::Dark,
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) {
        store.set(THEME_KEY, self.as_str().to_string());
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}
