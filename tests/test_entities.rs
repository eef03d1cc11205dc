use space_survival::consts::{GAME_HEIGHT, GAME_WIDTH};
use space_survival::entities::*;
use space_survival::error::GameError;

fn object(kind: ObjectKind, x: i32, y: i32) -> SpaceObject {
    SpaceObject::new(EntityId(0), kind, x, y)
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn bullet_climbs_every_tick() {
    let mut b = object(ObjectKind::Bullet, 1, 5);
    for t in [1, 2, 10, 11] {
        b.tick(t);
    }
    assert_eq!(b.position, Position::new(1, 1));
}

#[test]
fn asteroid_falls_every_tick() {
    let mut a = object(ObjectKind::Asteroid, 4, 0);
    a.tick(3);
    a.tick(10);
    assert_eq!(a.y(), 2);
    assert_eq!(a.x(), 4);
}

#[test]
fn enemy_moves_only_on_multiples_of_ten() {
    let mut e = object(ObjectKind::Enemy, 3, 4);
    e.tick(3);
    assert_eq!(e.y(), 4);
    e.tick(10);
    assert_eq!(e.y(), 5);
}

#[test]
fn power_up_moves_only_on_multiples_of_ten() {
    let mut p = object(ObjectKind::PowerUp(PowerUpKind::Health), 2, 4);
    p.tick(3);
    assert_eq!(p.position, Position::new(2, 4));
    p.tick(10);
    assert_eq!(p.position, Position::new(2, 5));
}

#[test]
fn large_tick_values_still_move_one_cell() {
    let mut e = object(ObjectKind::Enemy, 0, 0);
    e.tick(1_000_000);
    assert_eq!(e.y(), 1);
    let mut a = object(ObjectKind::Asteroid, 0, 0);
    a.tick(u64::MAX);
    assert_eq!(a.y(), 1);
}

#[test]
fn tick_zero_counts_as_multiple_of_ten() {
    let mut e = object(ObjectKind::Enemy, 0, 0);
    e.tick(0);
    assert_eq!(e.y(), 1);
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[test]
fn render_names_kind_and_cell() {
    assert_eq!(object(ObjectKind::Asteroid, 5, 10).to_string(), "Asteroid(5, 10)");
    assert_eq!(object(ObjectKind::Enemy, 0, 3).to_string(), "Enemy(0, 3)");
    assert_eq!(object(ObjectKind::Bullet, 9, 19).to_string(), "Bullet(9, 19)");
    assert_eq!(
        object(ObjectKind::PowerUp(PowerUpKind::Shield), 1, 1).to_string(),
        "ShieldPowerUp(1, 1)"
    );
    assert_eq!(
        object(ObjectKind::PowerUp(PowerUpKind::Health), 2, 4).to_string(),
        "HealthPowerUp(2, 4)"
    );
    assert_eq!(Ship::new_at(1, 2, 50).to_string(), "Ship(1, 2)");
}

#[test]
fn same_cell_objects_are_distinct() {
    let a = SpaceObject::new(EntityId(1), ObjectKind::Asteroid, 2, 2);
    let b = SpaceObject::new(EntityId(2), ObjectKind::Asteroid, 2, 2);
    assert_eq!(a.position, b.position);
    assert_ne!(a, b);
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[test]
fn ship_defaults() {
    let ship = Ship::new();
    assert_eq!(ship.position, Position::new(5, 10));
    assert_eq!(ship.health(), 100);
    assert_eq!(ship.score(), 0);
}

#[test]
fn ship_moves_one_cell() {
    let mut ship = Ship::new();
    ship.move_in(Direction::Up).unwrap();
    assert_eq!(ship.position, Position::new(5, 9));
    ship.move_in(Direction::Left).unwrap();
    assert_eq!(ship.position, Position::new(4, 9));
    ship.move_in(Direction::Down).unwrap();
    ship.move_in(Direction::Right).unwrap();
    assert_eq!(ship.position, Position::new(5, 10));
}

#[test]
fn ship_blocked_at_top_left() {
    let mut ship = Ship::new_at(0, 0, 100);

    let err = ship.move_in(Direction::Left).unwrap_err();
    assert_eq!(err, GameError::BoundaryExceeded(Direction::Left));
    assert_eq!(err.to_string(), "Cannot move left. Out of bounds!");

    let err = ship.move_in(Direction::Up).unwrap_err();
    assert_eq!(err.to_string(), "Cannot move up. Out of bounds!");

    assert_eq!(ship.position, Position::new(0, 0));
}

#[test]
fn ship_blocked_at_bottom_right() {
    let mut ship = Ship::new_at(GAME_WIDTH - 1, GAME_HEIGHT - 1, 100);

    let err = ship.move_in(Direction::Right).unwrap_err();
    assert_eq!(err.to_string(), "Cannot move right. Out of bounds!");

    let err = ship.move_in(Direction::Down).unwrap_err();
    assert_eq!(err.to_string(), "Cannot move down. Out of bounds!");

    assert_eq!(ship.position, Position::new(GAME_WIDTH - 1, GAME_HEIGHT - 1));
}

#[test]
fn damage_floors_at_zero() {
    let mut ship = Ship::new();
    ship.take_damage(30);
    assert_eq!(ship.health(), 70);
    ship.take_damage(500);
    assert_eq!(ship.health(), 0);
}

// ── Power-ups ─────────────────────────────────────────────────────────────────

#[test]
fn shield_adds_score() {
    let mut ship = Ship::new();
    PowerUpKind::Shield.apply_effect(&mut ship);
    assert_eq!(ship.score(), 50);
    assert_eq!(ship.health(), 100);
}

#[test]
fn health_restores_twenty() {
    let mut ship = Ship::new();
    ship.take_damage(30);
    PowerUpKind::Health.apply_effect(&mut ship);
    assert_eq!(ship.health(), 90);
    assert_eq!(ship.score(), 0);
}

#[test]
fn health_is_not_capped() {
    let mut ship = Ship::new();
    PowerUpKind::Health.apply_effect(&mut ship);
    assert_eq!(ship.health(), 120);
}

// ── Bounds ────────────────────────────────────────────────────────────────────

#[test]
fn bounds_are_half_open() {
    assert!(Position::new(GAME_WIDTH - 1, GAME_HEIGHT - 1).in_bounds());
    assert!(!Position::new(GAME_WIDTH - 1, GAME_HEIGHT).in_bounds());
    assert!(!Position::new(GAME_WIDTH, GAME_HEIGHT - 1).in_bounds());
    assert!(!Position::new(GAME_WIDTH, GAME_HEIGHT).in_bounds());
    assert!(Position::new(0, 0).in_bounds());
    assert!(!Position::new(-1, 0).in_bounds());
    assert!(!Position::new(0, -1).in_bounds());
}
