/// All game entity types and their per-kind behaviour.
///
/// Movement rules are fixed: a call to `tick` moves an object by at most one
/// cell.  The tick counter only gates *whether* slow objects move, never how
/// far.
use std::fmt;

use crate::consts::{
    GAME_HEIGHT, GAME_WIDTH, HEALTH_RESTORE, SHIELD_SCORE_BONUS, SHIP_START_HEALTH, SHIP_START_X,
    SHIP_START_Y, SLOW_DESCENT_PERIOD,
};
use crate::error::GameError;

// ── Grid ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True iff the cell lies on the `GAME_WIDTH × GAME_HEIGHT` grid.
    pub fn in_bounds(&self) -> bool {
        (0..GAME_WIDTH).contains(&self.x) && (0..GAME_HEIGHT).contains(&self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

// ── Ship ──────────────────────────────────────────────────────────────────────

/// The player ship.  Held by `GameState` directly, never in the tracked
/// object list.
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub position: Position,
    health: i32,
    score: u32,
}

impl Default for Ship {
    fn default() -> Self {
        Self::new_at(SHIP_START_X, SHIP_START_Y, SHIP_START_HEALTH)
    }
}

impl Ship {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_at(x: i32, y: i32, health: i32) -> Self {
        Self {
            position: Position::new(x, y),
            health,
            score: 0,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Move one cell.  Fails without moving if the target cell is off the grid.
    pub fn move_in(&mut self, direction: Direction) -> Result<(), GameError> {
        let (dx, dy) = direction.offset();
        let target = Position::new(self.position.x + dx, self.position.y + dy);
        if !target.in_bounds() {
            return Err(GameError::BoundaryExceeded(direction));
        }
        self.position = target;
        Ok(())
    }

    /// Health never drops below zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health = (self.health - amount).max(0);
    }

    /// No upper cap is applied.
    pub fn heal(&mut self, amount: i32) {
        self.health += amount;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ship({}, {})", self.position.x, self.position.y)
    }
}

// ── Space objects ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerUpKind {
    /// +50 score.
    Shield,
    /// +20 health.
    Health,
}

impl PowerUpKind {
    pub fn apply_effect(&self, ship: &mut Ship) {
        match self {
            PowerUpKind::Shield => ship.add_score(SHIELD_SCORE_BONUS),
            PowerUpKind::Health => ship.heal(HEALTH_RESTORE),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Bullet,
    Asteroid,
    Enemy,
    PowerUp(PowerUpKind),
}

impl ObjectKind {
    pub fn name(&self) -> &'static str {
        match self {
            ObjectKind::Bullet => "Bullet",
            ObjectKind::Asteroid => "Asteroid",
            ObjectKind::Enemy => "Enemy",
            ObjectKind::PowerUp(PowerUpKind::Shield) => "ShieldPowerUp",
            ObjectKind::PowerUp(PowerUpKind::Health) => "HealthPowerUp",
        }
    }
}

/// Identity of a tracked object.  Two objects on the same cell are still
/// distinct; removal always goes by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct SpaceObject {
    pub id: EntityId,
    pub position: Position,
    pub kind: ObjectKind,
}

impl SpaceObject {
    pub fn new(id: EntityId, kind: ObjectKind, x: i32, y: i32) -> Self {
        Self {
            id,
            position: Position::new(x, y),
            kind,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Advance one tick:
    /// * bullets climb every tick,
    /// * asteroids fall every tick,
    /// * enemies and power-ups fall only when `tick % 10 == 0`.
    pub fn tick(&mut self, tick: u64) {
        match self.kind {
            ObjectKind::Bullet => self.position.y -= 1,
            ObjectKind::Asteroid => self.position.y += 1,
            ObjectKind::Enemy | ObjectKind::PowerUp(_) => {
                if tick % SLOW_DESCENT_PERIOD == 0 {
                    self.position.y += 1;
                }
            }
        }
    }

    /// Single-cell glyph for terminal drawing.
    pub fn glyph(&self) -> &'static str {
        match self.kind {
            ObjectKind::Bullet => "║",
            ObjectKind::Asteroid => "●",
            ObjectKind::Enemy => "▼",
            ObjectKind::PowerUp(PowerUpKind::Shield) => "◆",
            ObjectKind::PowerUp(PowerUpKind::Health) => "♥",
        }
    }
}

impl fmt::Display for SpaceObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {})",
            self.kind.name(),
            self.position.x,
            self.position.y
        )
    }
}
