//! Achievement log persistence
//!
//! A newline-delimited, append-only text log of mastered achievements.
//! Persistence is best-effort: read failures yield no entries and write
//! failures are logged and swallowed, so gameplay is never interrupted.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Used when no location is configured.
pub const DEFAULT_FILE_LOCATION: &str = "achievements.log";

/// Storage for achievement log entries.
pub trait AchievementFile {
    /// Every entry logged so far, one per line, in order.
    fn read(&self) -> Vec<String>;
    /// Append a single entry.
    fn save(&mut self, entry: &str);
}

/// File-backed log.
#[derive(Debug, Clone)]
pub struct AchievementLog {
    path: PathBuf,
}

impl Default for AchievementLog {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_LOCATION)
    }
}

impl AchievementLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, entry: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{entry}")
    }
}

impl AchievementFile for AchievementLog {
    fn read(&self) -> Vec<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => contents
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                log::warn!("could not read {}: {e}", self.path.display());
                Vec::new()
            }
        }
    }

    fn save(&mut self, entry: &str) {
        match self.append(entry) {
            Ok(()) => log::info!("logged '{entry}' to {}", self.path.display()),
            Err(e) => log::warn!("could not write {}: {e}", self.path.display()),
        }
    }
}

/// In-memory log, for sessions run without persistence.
#[derive(Debug, Clone, Default)]
pub struct MemoryAchievementFile {
    entries: Vec<String>,
}

impl MemoryAchievementFile {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AchievementFile for MemoryAchievementFile {
    fn read(&self) -> Vec<String> {
        self.entries.clone()
    }

    fn save(&mut self, entry: &str) {
        self.entries.push(entry.to_string());
    }
}

impl<F: AchievementFile + ?Sized> AchievementFile for Box<F> {
    fn read(&self) -> Vec<String> {
        (**self).read()
    }

    fn save(&mut self, entry: &str) {
        (**self).save(entry);
    }
}
