//! Game settings
//!
//! Persisted as JSON next to the binary (or wherever `--settings` points).
//! Missing fields fall back to their defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::persistence::DEFAULT_FILE_LOCATION;

pub const DEFAULT_SETTINGS_FILE: &str = "space_survival.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Emit gameplay messages (hits, level-ups, moves)
    pub verbose: bool,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Milliseconds between ticks
    pub tick_millis: u64,
    /// Where mastered achievements are appended
    pub achievement_log: PathBuf,
    /// When false, mastery entries are kept in memory only
    pub persist_achievements: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            seed: None,
            tick_millis: 100,
            achievement_log: PathBuf::from(DEFAULT_FILE_LOCATION),
            persist_achievements: true,
        }
    }
}

impl Settings {
    /// Load from `path`, falling back to defaults if the file is missing or
    /// malformed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Could not read settings {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
