/// The game-state engine.
///
/// `GameState` owns the ship and every tracked object, and advances them in a
/// fixed order each tick:
///
/// 1. move every object, then prune the ones that left the grid
/// 2. resolve collisions
/// 3. spawn new objects
/// 4. check for a level-up
///
/// Randomness and statistics are passed in by the caller; the engine holds
/// no hidden globals.
use crate::collision::{resolve_collisions, CollisionContext};
use crate::consts::{SCORE_THRESHOLD, SPAWN_RATE_INCREASE, START_LEVEL, START_SPAWN_RATE};
use crate::entities::{EntityId, ObjectKind, Position, Ship, SpaceObject};
use crate::logging::LogSink;
use crate::spawn::{draw_spawns, RandomSource};
use crate::stats::PlayerStats;

/// True if `position` lies on the game grid.
pub fn is_in_bounds(position: Position) -> bool {
    position.in_bounds()
}

#[derive(Debug)]
pub struct GameState<L: LogSink> {
    /// Tracked objects in insertion order.  Never contains the ship.
    objects: Vec<SpaceObject>,
    ship: Ship,
    level: u32,
    spawn_rate: u32,
    verbose: bool,
    logger: L,
    next_id: u64,
}

impl<L: LogSink> GameState<L> {
    pub fn new(logger: L) -> Self {
        Self {
            objects: Vec::new(),
            ship: Ship::new(),
            level: START_LEVEL,
            spawn_rate: START_SPAWN_RATE,
            verbose: false,
            logger,
            next_id: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn ship_mut(&mut self) -> &mut Ship {
        &mut self.ship
    }

    pub fn space_objects(&self) -> &[SpaceObject] {
        &self.objects
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.objects.iter().any(|o| o.id == id)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn spawn_rate(&self) -> u32 {
        self.spawn_rate
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut L {
        &mut self.logger
    }

    /// The game ends once the ship's health reaches zero.
    pub fn is_game_over(&self) -> bool {
        self.ship.health() <= 0
    }

    // ── Mutation ─────────────────────────────────────────────────────────────

    /// Start tracking a new object and return its id.
    pub fn add_object(&mut self, kind: ObjectKind, x: i32, y: i32) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        self.objects.push(SpaceObject::new(id, kind, x, y));
        id
    }

    /// Fire a bullet from the ship's cell.
    pub fn fire_bullet(&mut self) -> EntityId {
        let Position { x, y } = self.ship.position;
        self.add_object(ObjectKind::Bullet, x, y)
    }

    /// Advance one full tick in the fixed order.
    pub fn tick(&mut self, tick: u64, rng: &mut impl RandomSource, stats: &mut PlayerStats) {
        self.update_game(tick);
        self.check_collisions(stats);
        self.spawn_objects(rng);
        self.level_up();
    }

    /// Move every object, then drop those that left the grid.
    pub fn update_game(&mut self, tick: u64) {
        for object in &mut self.objects {
            object.tick(tick);
        }
        let before = self.objects.len();
        self.objects.retain(|o| o.position.in_bounds());
        let pruned = before - self.objects.len();
        if pruned > 0 {
            log::debug!("tick {tick}: pruned {pruned} off-grid objects");
        }
    }

    /// Resolve bullet and ship collisions, then remove everything consumed.
    pub fn check_collisions(&mut self, stats: &mut PlayerStats) {
        let removed = resolve_collisions(
            &self.objects,
            CollisionContext {
                ship: &mut self.ship,
                stats,
                sink: &mut self.logger,
                verbose: self.verbose,
            },
        );
        if !removed.is_empty() {
            self.objects.retain(|o| !removed.contains(&o.id));
        }
    }

    /// Roll this tick's candidates and place those whose cell is free.
    pub fn spawn_objects(&mut self, rng: &mut impl RandomSource) {
        let plan = draw_spawns(self.spawn_rate, rng);

        if let Some(x) = plan.asteroid {
            self.try_spawn(ObjectKind::Asteroid, x);
        }
        if let Some(x) = plan.enemy {
            self.try_spawn(ObjectKind::Enemy, x);
        }
        if let Some((x, kind)) = plan.power_up {
            self.try_spawn(ObjectKind::PowerUp(kind), x);
        }
    }

    fn try_spawn(&mut self, kind: ObjectKind, x: i32) {
        let cell = Position::new(x, 0);
        if self.is_occupied(cell) {
            log::debug!("spawn of {} at {x} skipped, cell occupied", kind.name());
            return;
        }
        self.add_object(kind, x, 0);
    }

    fn is_occupied(&self, cell: Position) -> bool {
        self.ship.position == cell || self.objects.iter().any(|o| o.position == cell)
    }

    /// Advance at most one level if the score has reached `level × 100`.
    pub fn level_up(&mut self) {
        if self.ship.score() < self.level * SCORE_THRESHOLD {
            return;
        }
        self.level += 1;
        self.spawn_rate += SPAWN_RATE_INCREASE;
        log::info!("level {} reached, spawn rate {}%", self.level, self.spawn_rate);
        if self.verbose {
            self.logger.log(&format!(
                "Level Up! Welcome to Level {}. Spawn rate increased to {}%.",
                self.level, self.spawn_rate
            ));
        }
    }
}

impl<L: LogSink + Default> Default for GameState<L> {
    fn default() -> Self {
        Self::new(L::default())
    }
}
