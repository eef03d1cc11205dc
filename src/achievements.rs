/// Achievements: named progress counters with derived tiers, plus the manager
/// that registers them and records mastery in the achievement log.
use std::fmt;

use crate::error::AchievementError;
use crate::persistence::AchievementFile;

/// Progress at or above this counts as the Master tier.
pub const MASTER_THRESHOLD: f64 = 0.999;
/// Progress at or above this counts as the Expert tier.
pub const EXPERT_THRESHOLD: f64 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Novice,
    Expert,
    Master,
}

impl Tier {
    pub fn from_progress(progress: f64) -> Self {
        if progress < EXPERT_THRESHOLD {
            Tier::Novice
        } else if progress < MASTER_THRESHOLD {
            Tier::Expert
        } else {
            Tier::Master
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Novice => "Novice",
            Tier::Expert => "Expert",
            Tier::Master => "Master",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Achievement {
    name: String,
    description: String,
    progress: f64,
}

impl Achievement {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            progress: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Always within `[0.0, 1.0]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Rejects values outside `[0.0, 1.0]`, leaving progress unchanged.
    pub fn set_progress(&mut self, progress: f64) -> Result<(), AchievementError> {
        if !(0.0..=1.0).contains(&progress) {
            return Err(AchievementError::InvalidProgress(progress));
        }
        self.progress = progress;
        Ok(())
    }

    pub fn tier(&self) -> Tier {
        Tier::from_progress(self.progress)
    }

    pub fn is_mastered(&self) -> bool {
        self.progress >= 1.0
    }

    /// Entry written to the achievement log once mastered.
    pub fn mastery_entry(&self) -> String {
        format!("{}: Mastered", self.name)
    }
}

/// Owns the registered achievements and the log they are recorded in.
///
/// Duplicate mastery entries are avoided by reading the log before each
/// append; a log backend that drops entries on read will see repeats.
#[derive(Debug)]
pub struct AchievementManager<F: AchievementFile> {
    file: F,
    achievements: Vec<Achievement>,
}

impl<F: AchievementFile> AchievementManager<F> {
    pub fn new(file: F) -> Self {
        Self {
            file,
            achievements: Vec::new(),
        }
    }

    pub fn add_achievement(&mut self, achievement: Achievement) -> Result<(), AchievementError> {
        if self.get(achievement.name()).is_some() {
            return Err(AchievementError::AlreadyRegistered(achievement.name));
        }
        self.achievements.push(achievement);
        Ok(())
    }

    /// Set progress, rounded to three decimals.
    pub fn update_achievement(&mut self, name: &str, progress: f64) -> Result<(), AchievementError> {
        let achievement = self
            .achievements
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| AchievementError::NotFound(name.to_string()))?;
        achievement.set_progress((progress * 1000.0).round() / 1000.0)
    }

    /// Append a mastery entry for every mastered achievement not yet in the log.
    pub fn log_mastered(&mut self) {
        let logged = self.file.read();
        for achievement in self.achievements.iter().filter(|a| a.is_mastered()) {
            let entry = achievement.mastery_entry();
            if !logged.contains(&entry) {
                self.file.save(&entry);
            }
        }
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn get(&self, name: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.name == name)
    }

    pub fn file(&self) -> &F {
        &self.file
    }
}
