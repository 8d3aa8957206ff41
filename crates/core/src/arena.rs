//! Arena geometry - bounds checks for ships and bullets
//!
//! The arena is immutable: a 1200x600 surface split by [`BORDER`]. Every
//! check here is a pure function of a rectangle and a side.

use crate::types::{Direction, Rect, Side, ARENA_HEIGHT, ARENA_WIDTH, BORDER, SHIP_VELOCITY};

/// Pixel offset of one ship step in `dir`.
pub const fn step_delta(dir: Direction) -> (i32, i32) {
    match dir {
        Direction::Up => (0, -SHIP_VELOCITY),
        Direction::Down => (0, SHIP_VELOCITY),
        Direction::Left => (-SHIP_VELOCITY, 0),
        Direction::Right => (SHIP_VELOCITY, 0),
    }
}

/// Whether a ship of `side` at `ship` may take one step in `dir`.
///
/// The comparisons are asymmetric: strict for red's right edge and for the
/// bottom, inclusive for yellow's right edge.
pub fn can_step(side: Side, ship: &Rect, dir: Direction) -> bool {
    let v = SHIP_VELOCITY;
    match (side, dir) {
        (_, Direction::Up) => ship.y - v >= 0,
        (_, Direction::Down) => ship.bottom() + v < ARENA_HEIGHT,
        (Side::Red, Direction::Left) => ship.x - v >= 0,
        (Side::Red, Direction::Right) => ship.right() + v < BORDER.x,
        (Side::Yellow, Direction::Left) => ship.x - v > BORDER.right(),
        (Side::Yellow, Direction::Right) => ship.right() + v <= ARENA_WIDTH,
    }
}

/// The half of the arena a side's ship is confined to.
pub const fn region(side: Side) -> Rect {
    match side {
        Side::Red => Rect::new(0, 0, BORDER.x, ARENA_HEIGHT),
        Side::Yellow => Rect::new(
            BORDER.right(),
            0,
            ARENA_WIDTH - BORDER.right(),
            ARENA_HEIGHT,
        ),
    }
}

/// Whether a bullet fired by `side` has left the arena on its travel side.
pub const fn has_exited(side: Side, bullet: &Rect) -> bool {
    match side {
        Side::Red => bullet.x >= ARENA_WIDTH,
        Side::Yellow => bullet.x <= 0,
    }
}
