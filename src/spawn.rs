/// Deterministic spawn sequencing.
///
/// All randomness flows through a `RandomSource` handed in by the caller, so a
/// seeded source replays the exact same game.  Every call to `draw_spawns`
/// consumes the same fixed sequence of draws:
///
/// 1. asteroid roll   `next_int(100)`
/// 2. asteroid column `next_int(GAME_WIDTH)`
/// 3. enemy roll      `next_int(100)`
/// 4. enemy column    `next_int(GAME_WIDTH)`
/// 5. power-up roll   `next_int(100)`
/// 6. power-up column `next_int(GAME_WIDTH)`
/// 7. power-up kind   `next_bool()`
///
/// Columns and kind are drawn even when the roll fails, and occupancy checks
/// happen afterwards in `GameState`, so the draw count never depends on what
/// is on the board.
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{ENEMY_SPAWN_RATE, GAME_WIDTH, POWER_UP_SPAWN_RATE};
use crate::entities::PowerUpKind;

/// Integer draws per `draw_spawns` call.
pub const INT_DRAWS_PER_SPAWN: usize = 6;
/// Boolean draws per `draw_spawns` call.
pub const BOOL_DRAWS_PER_SPAWN: usize = 1;

/// The pseudo-random capability the spawn engine consumes.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`.  `bound` is always positive.
    fn next_int(&mut self, bound: u32) -> u32;
    fn next_bool(&mut self) -> bool;
}

/// Adapts any `rand::Rng` into a `RandomSource`.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_int(&mut self, bound: u32) -> u32 {
        self.0.gen_range(0..bound)
    }

    fn next_bool(&mut self) -> bool {
        self.0.gen_bool(0.5)
    }
}

/// The game's default generator.
pub type GameRng = RngSource<Pcg32>;

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        RngSource(Pcg32::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RngSource(Pcg32::from_entropy())
    }
}

/// Candidates produced by one spawn pass.  Each is an x column on row 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnPlan {
    pub asteroid: Option<i32>,
    pub enemy: Option<i32>,
    pub power_up: Option<(i32, PowerUpKind)>,
}

impl SpawnPlan {
    pub fn is_empty(&self) -> bool {
        self.asteroid.is_none() && self.enemy.is_none() && self.power_up.is_none()
    }
}

fn column(rng: &mut impl RandomSource) -> i32 {
    rng.next_int(GAME_WIDTH as u32) as i32
}

/// Roll this tick's spawn candidates for the given spawn rate (percent).
pub fn draw_spawns(spawn_rate: u32, rng: &mut impl RandomSource) -> SpawnPlan {
    let rate = f64::from(spawn_rate);

    let asteroid_roll = rng.next_int(100);
    let asteroid_x = column(rng);

    let enemy_roll = rng.next_int(100);
    let enemy_x = column(rng);

    let power_up_roll = rng.next_int(100);
    let power_up_x = column(rng);
    let power_up_kind = if rng.next_bool() {
        PowerUpKind::Shield
    } else {
        PowerUpKind::Health
    };

    SpawnPlan {
        asteroid: (asteroid_roll < spawn_rate).then_some(asteroid_x),
        enemy: (f64::from(enemy_roll) < rate * ENEMY_SPAWN_RATE).then_some(enemy_x),
        power_up: (f64::from(power_up_roll) < rate * POWER_UP_SPAWN_RATE)
            .then_some((power_up_x, power_up_kind)),
    }
}
