//! Session wiring
//!
//! `GameController` sits between the frontend and the engine: it turns
//! command strings into ship actions, drives ticks, refreshes achievement
//! progress from the session statistics, and builds the end-of-game summary.

use crate::achievements::{Achievement, AchievementManager};
use crate::compute::GameState;
use crate::entities::Direction;
use crate::error::{AchievementError, GameError};
use crate::input::Command;
use crate::logging::LogSink;
use crate::persistence::AchievementFile;
use crate::spawn::RandomSource;
use crate::stats::PlayerStats;

/// How often (in ticks) verbose mode logs an achievement overview
pub const ACHIEVEMENT_REPORT_PERIOD: u64 = 100;

pub const SURVIVOR: &str = "Survivor";
pub const ENEMY_EXTERMINATOR: &str = "Enemy Exterminator";
pub const SHARP_SHOOTER: &str = "Sharp Shooter";

/// How an achievement's progress is derived from the session statistics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Metric {
    /// Elapsed seconds over a target duration.
    SurvivalTime { target_seconds: f64 },
    /// Enemies destroyed over a target count.
    EnemiesDestroyed { target: f64 },
    /// Accuracy over a target ratio, counted once more than `min_shots` were fired.
    Accuracy { target: f64, min_shots: u32 },
}

impl Metric {
    /// Progress clamped to 1.0, or `None` while the metric is gated.
    pub fn progress(&self, stats: &PlayerStats) -> Option<f64> {
        let raw = match *self {
            Metric::SurvivalTime { target_seconds } => {
                stats.elapsed_seconds() as f64 / target_seconds
            }
            Metric::EnemiesDestroyed { target } => f64::from(stats.shots_hit()) / target,
            Metric::Accuracy { target, min_shots } => {
                if stats.shots_fired() <= min_shots {
                    return None;
                }
                stats.accuracy() / target
            }
        };
        Some(raw.clamp(0.0, 1.0))
    }
}

/// The stock achievement set.
pub fn default_achievements() -> Vec<(Achievement, Metric)> {
    vec![
        (
            Achievement::new(SURVIVOR, "Survive for 2 minutes"),
            Metric::SurvivalTime {
                target_seconds: 120.0,
            },
        ),
        (
            Achievement::new(ENEMY_EXTERMINATOR, "Destroy 20 enemies"),
            Metric::EnemiesDestroyed { target: 20.0 },
        ),
        (
            Achievement::new(SHARP_SHOOTER, "Achieve 99% shot accuracy"),
            Metric::Accuracy {
                target: 0.99,
                min_shots: 10,
            },
        ),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Running,
    /// The tick was skipped because the game is paused.
    Paused,
    /// The ship has no health left.  The controller pauses itself.
    GameOver,
}

pub struct GameController<L: LogSink, F: AchievementFile> {
    model: GameState<L>,
    stats: PlayerStats,
    achievements: AchievementManager<F>,
    metrics: Vec<(String, Metric)>,
    paused: bool,
    verbose: bool,
}

impl<L: LogSink, F: AchievementFile> GameController<L, F> {
    pub fn new(model: GameState<L>, stats: PlayerStats, achievements: AchievementManager<F>) -> Self {
        Self {
            model,
            stats,
            achievements,
            metrics: Vec::new(),
            paused: false,
            verbose: false,
        }
    }

    /// A controller with the stock achievements registered.
    pub fn with_default_achievements(
        model: GameState<L>,
        stats: PlayerStats,
        achievements: AchievementManager<F>,
    ) -> Result<Self, AchievementError> {
        let mut controller = Self::new(model, stats, achievements);
        for (achievement, metric) in default_achievements() {
            controller.register_achievement(achievement, metric)?;
        }
        Ok(controller)
    }

    pub fn register_achievement(
        &mut self,
        achievement: Achievement,
        metric: Metric,
    ) -> Result<(), AchievementError> {
        let name = achievement.name().to_string();
        self.achievements.add_achievement(achievement)?;
        self.metrics.push((name, metric));
        Ok(())
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn model(&self) -> &GameState<L> {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut GameState<L> {
        &mut self.model
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn achievements(&self) -> &AchievementManager<F> {
        &self.achievements
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Applies to both the controller and the engine.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
        self.model.set_verbose(verbose);
    }

    fn log(&mut self, text: &str) {
        self.model.logger_mut().log(text);
    }

    // ── Input ────────────────────────────────────────────────────────────────

    /// Dispatch one command string.  Movement and firing are ignored while
    /// paused; `P` always toggles.
    pub fn handle_input(&mut self, input: &str) -> Result<(), GameError> {
        let command = match input.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                if !self.paused {
                    self.log(&e.to_string());
                }
                return Err(e);
            }
        };

        match command {
            Command::Pause => self.toggle_pause(),
            _ if self.paused => {}
            Command::Move(direction) => self.move_ship(direction)?,
            Command::Fire => {
                self.model.fire_bullet();
                self.stats.record_shot_fired();
            }
        }
        Ok(())
    }

    fn move_ship(&mut self, direction: Direction) -> Result<(), GameError> {
        if let Err(e) = self.model.ship_mut().move_in(direction) {
            log::debug!("ship move rejected: {e}");
            if self.verbose {
                self.log(&e.to_string());
            }
            return Err(e);
        }
        if self.verbose {
            let ship = self.model.ship();
            let message = format!("Ship moved to ({}, {})", ship.x(), ship.y());
            self.log(&message);
        }
        Ok(())
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        let message = if self.paused {
            "Game paused."
        } else {
            "Game unpaused."
        };
        self.log(message);
    }

    // ── Ticking ──────────────────────────────────────────────────────────────

    /// Advance the engine one tick, then refresh achievements.
    pub fn on_tick(&mut self, tick: u64, rng: &mut impl RandomSource) -> TickOutcome {
        if self.paused {
            return TickOutcome::Paused;
        }

        self.model.tick(tick, rng, &mut self.stats);
        self.refresh_achievements(tick);

        if self.model.is_game_over() {
            log::info!(
                "game over at tick {tick}: score {}, level {}",
                self.model.ship().score(),
                self.model.level()
            );
            self.toggle_pause();
            return TickOutcome::GameOver;
        }
        TickOutcome::Running
    }

    /// Recompute progress for every achievement not yet mastered.
    pub fn refresh_achievements(&mut self, tick: u64) {
        let mut newly_mastered = Vec::new();
        for (name, metric) in &self.metrics {
            let Some(achievement) = self.achievements.get(name) else {
                continue;
            };
            if achievement.is_mastered() {
                continue;
            }
            let Some(progress) = metric.progress(&self.stats) else {
                continue;
            };
            if let Err(e) = self.achievements.update_achievement(name, progress) {
                log::warn!("could not update achievement {name}: {e}");
                continue;
            }

            let mastered = self
                .achievements
                .get(name)
                .is_some_and(Achievement::is_mastered);
            if mastered {
                log::info!("achievement mastered: {name}");
                self.achievements.log_mastered();
                newly_mastered.push(name.clone());
            }
        }

        if self.verbose {
            for name in &newly_mastered {
                self.log(&format!("Achievement mastered: {name}"));
            }
        }

        if self.verbose && tick % ACHIEVEMENT_REPORT_PERIOD == 0 {
            let report = self
                .achievements
                .achievements()
                .iter()
                .map(|a| format!("{} {:.0}% ({})", a.name(), a.progress() * 100.0, a.tier()))
                .collect::<Vec<_>>()
                .join(", ");
            self.log(&format!("Achievements: {report}"));
        }
    }

    // ── Summary ──────────────────────────────────────────────────────────────

    /// End-of-game statistics, one line each.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Shots Fired: {}", self.stats.shots_fired()),
            format!("Shots Hit: {}", self.stats.shots_hit()),
            format!("Enemies Destroyed: {}", self.stats.shots_hit()),
            format!("Survival Time: {} seconds", self.stats.elapsed_seconds()),
        ];
        lines.extend(self.achievements.achievements().iter().map(|a| {
            format!(
                "{} - {} ({:.0}% complete, Tier: {})",
                a.name(),
                a.description(),
                a.progress() * 100.0,
                a.tier()
            )
        }));
        lines
    }
}
