//! Space Survival - a tick-driven grid shooter.
//!
//! Core modules:
//! - `entities`: ship and space objects, per-kind movement and effects
//! - `spawn`: deterministic spawning from an injected random source
//! - `collision`: bullet and ship collision resolution
//! - `compute`: the `GameState` engine that orders a tick
//! - `achievements` / `stats` / `persistence`: progress tracking and its log
//! - `controller`: input dispatch and per-tick session wiring
//!
//! Rendering and keyboard handling live in the binary.

pub mod achievements;
pub mod collision;
pub mod compute;
pub mod controller;
pub mod entities;
pub mod error;
pub mod input;
pub mod logging;
pub mod persistence;
pub mod settings;
pub mod spawn;
pub mod stats;

pub use achievements::{Achievement, AchievementManager, Tier};
pub use compute::GameState;
pub use controller::{GameController, TickOutcome};
pub use entities::{Direction, EntityId, ObjectKind, Position, Ship, SpaceObject};
pub use error::{AchievementError, GameError};
pub use logging::LogSink;
pub use settings::Settings;
pub use spawn::{RandomSource, RngSource};
pub use stats::PlayerStats;

/// Game configuration constants
pub mod consts {
    /// Grid dimensions
    pub const GAME_WIDTH: i32 = 10;
    pub const GAME_HEIGHT: i32 = 20;

    /// Spawn rate (percentage chance per tick) at level 1
    pub const START_SPAWN_RATE: u32 = 2;
    /// Spawn rate gained per level
    pub const SPAWN_RATE_INCREASE: u32 = 3;
    pub const START_LEVEL: u32 = 1;
    /// Score needed per level to advance
    pub const SCORE_THRESHOLD: u32 = 100;

    /// Enemy and power-up spawn chances, relative to the asteroid rate
    pub const ENEMY_SPAWN_RATE: f64 = 0.5;
    pub const POWER_UP_SPAWN_RATE: f64 = 0.25;

    pub const ASTEROID_DAMAGE: i32 = 10;
    pub const ENEMY_DAMAGE: i32 = 20;

    pub const SHIP_START_X: i32 = 5;
    pub const SHIP_START_Y: i32 = 10;
    pub const SHIP_START_HEALTH: i32 = 100;

    pub const SHIELD_SCORE_BONUS: u32 = 50;
    pub const HEALTH_RESTORE: i32 = 20;

    /// Enemies and power-ups only descend on ticks that are a multiple of this
    pub const SLOW_DESCENT_PERIOD: u64 = 10;
}
