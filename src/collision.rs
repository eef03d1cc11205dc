//! Collision detection and resolution
//!
//! Objects collide when they share a grid cell.  Two passes run against the
//! same, unmodified object list:
//! - bullet pass: bullet ↔ enemy removes both and counts a hit; bullet ↔
//!   asteroid removes only the bullet.  The first matching target wins.
//! - ship pass: every non-bullet on the ship's cell is consumed, applying a
//!   power-up effect or collision damage.
//!
//! The caller removes the union of both passes afterwards.

use std::collections::HashSet;

use crate::consts::{ASTEROID_DAMAGE, ENEMY_DAMAGE};
use crate::entities::{EntityId, ObjectKind, Ship, SpaceObject};
use crate::logging::LogSink;
use crate::stats::PlayerStats;

/// Everything the resolver mutates besides the removal set.
pub struct CollisionContext<'a, L: LogSink> {
    pub ship: &'a mut Ship,
    pub stats: &'a mut PlayerStats,
    pub sink: &'a mut L,
    pub verbose: bool,
}

/// Run both passes and return the ids to remove.
pub fn resolve_collisions<L: LogSink>(
    objects: &[SpaceObject],
    ctx: CollisionContext<'_, L>,
) -> HashSet<EntityId> {
    let mut removed = bullet_collisions(objects, ctx.stats);
    removed.extend(ship_collisions(objects, ctx.ship, ctx.sink, ctx.verbose));
    removed
}

/// Bullets against enemies and asteroids.  No logging.
pub fn bullet_collisions(objects: &[SpaceObject], stats: &mut PlayerStats) -> HashSet<EntityId> {
    let mut removed = HashSet::new();

    for bullet in objects.iter().filter(|o| o.kind == ObjectKind::Bullet) {
        let target = objects.iter().find(|other| {
            matches!(other.kind, ObjectKind::Enemy | ObjectKind::Asteroid)
                && other.position == bullet.position
        });
        match target {
            Some(enemy) if enemy.kind == ObjectKind::Enemy => {
                removed.insert(bullet.id);
                removed.insert(enemy.id);
                stats.record_shot_hit();
            }
            // Asteroids absorb the bullet and survive.
            Some(_) => {
                removed.insert(bullet.id);
            }
            None => {}
        }
    }

    removed
}

/// Non-bullet objects sitting on the ship's cell.
pub fn ship_collisions<L: LogSink>(
    objects: &[SpaceObject],
    ship: &mut Ship,
    sink: &mut L,
    verbose: bool,
) -> HashSet<EntityId> {
    let mut removed = HashSet::new();
    let cell = ship.position;

    for object in objects.iter().filter(|o| o.position == cell) {
        let message = match object.kind {
            ObjectKind::Bullet => continue,
            ObjectKind::PowerUp(power_up) => {
                power_up.apply_effect(ship);
                format!("PowerUp collected: {object}")
            }
            ObjectKind::Asteroid => {
                ship.take_damage(ASTEROID_DAMAGE);
                format!("Hit by {object}! Health reduced by {ASTEROID_DAMAGE}.")
            }
            ObjectKind::Enemy => {
                ship.take_damage(ENEMY_DAMAGE);
                format!("Hit by {object}! Health reduced by {ENEMY_DAMAGE}.")
            }
        };
        log::debug!("ship collision: {object}, health now {}", ship.health());
        if verbose {
            sink.log(&message);
        }
        removed.insert(object.id);
    }

    removed
}
