//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no I/O, so they can be used by the core
//! simulation, the terminal frontend and the tests alike.
//!
//! # Arena
//!
//! The play surface is a fixed 1200 x 600 pixel rectangle split by a 6 pixel
//! wide vertical border in the middle:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ARENA_WIDTH` | 1200 | Arena width in pixels |
//! | `ARENA_HEIGHT` | 600 | Arena height in pixels |
//! | `BORDER` | (597, 0, 6, 600) | Dividing border rectangle |
//!
//! # Entities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SHIP_WIDTH` x `SHIP_HEIGHT` | 55 x 50 | Ship hitbox |
//! | `SHIP_VELOCITY` | 6 | Pixels per frame per held direction |
//! | `BULLET_WIDTH` x `BULLET_HEIGHT` | 10 x 5 | Bullet hitbox |
//! | `BULLET_VELOCITY` | 11 | Pixels per frame |
//! | `MAX_BULLETS` | 3 | Live bullets per side |
//! | `STARTING_HEALTH` | 10 | Health per side at round start |
//!
//! # Timing
//!
//! - `FPS`: 60 frames per second
//! - `FRAME_MS`: 16ms (integer approximation used by timers)
//! - `WINNER_HOLD_MS`: 4000ms banner hold before the round restarts
//!
//! # Examples
//!
//! ```
//! use space_wars_types::{Rect, Side, BORDER, ARENA_WIDTH};
//!
//! assert_eq!(Side::Red.opponent(), Side::Yellow);
//! assert_eq!(BORDER.x, ARENA_WIDTH / 2 - 3);
//!
//! let a = Rect::new(0, 0, 10, 10);
//! assert!(a.collides(&Rect::new(9, 9, 10, 10)));
//! assert!(!a.collides(&Rect::new(10, 0, 10, 10)));
//! ```

/// Arena width in pixels
pub const ARENA_WIDTH: i32 = 1200;

/// Arena height in pixels
pub const ARENA_HEIGHT: i32 = 600;

/// Width of the dividing border
pub const BORDER_WIDTH: i32 = 6;

/// Dividing border, centered horizontally and spanning the full height
pub const BORDER: Rect = Rect::new(ARENA_WIDTH / 2 - BORDER_WIDTH / 2, 0, BORDER_WIDTH, ARENA_HEIGHT);

/// Frames per second of the fixed-rate loop
pub const FPS: u32 = 60;

/// Frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// How long the winner banner stays up before the round restarts
pub const WINNER_HOLD_MS: u32 = 4000;

/// Ship hitbox width
pub const SHIP_WIDTH: i32 = 55;

/// Ship hitbox height
pub const SHIP_HEIGHT: i32 = 50;

/// Ship movement step per frame and per held direction
pub const SHIP_VELOCITY: i32 = 6;

/// Bullet hitbox width
pub const BULLET_WIDTH: i32 = 10;

/// Bullet hitbox height
pub const BULLET_HEIGHT: i32 = 5;

/// Bullet travel per frame
pub const BULLET_VELOCITY: i32 = 11;

/// Maximum live bullets per side
pub const MAX_BULLETS: usize = 3;

/// Health of each side at round start
pub const STARTING_HEALTH: u8 = 10;

/// Red ship spawn position (top-left corner)
pub const RED_START: (i32, i32) = (100, 250);

/// Yellow ship spawn position (top-left corner)
pub const YELLOW_START: (i32, i32) = (700, 250);

/// Integer rectangle (top-left origin, y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Overlap test with half-open edges.
    ///
    /// Rectangles that only share an edge do not collide, and an empty
    /// rectangle never collides with anything.
    ///
    /// ```
    /// use space_wars_types::Rect;
    ///
    /// let ship = Rect::new(700, 250, 55, 50);
    /// assert!(ship.collides(&Rect::new(695, 274, 10, 5)));
    /// assert!(!ship.collides(&Rect::new(690, 274, 10, 5)));
    /// assert!(!ship.collides(&Rect::new(720, 274, 0, 5)));
    /// ```
    pub const fn collides(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True when `other` lies entirely inside `self` (edges inclusive).
    pub const fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub const fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

/// One of the two players.
///
/// Red starts on the left half and fires to the right; yellow starts on the
/// right half and fires to the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Red,
    Yellow,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Yellow];

    pub const fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Yellow,
            Side::Yellow => Side::Red,
        }
    }

    /// Horizontal travel sign of this side's bullets (+1 right, -1 left).
    pub const fn direction(self) -> i32 {
        match self {
            Side::Red => 1,
            Side::Yellow => -1,
        }
    }

    /// Stable index for per-side arrays.
    pub const fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Yellow => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Red => "red",
            Side::Yellow => "yellow",
        }
    }

    /// Banner text shown when this side wins a round.
    pub fn winner_text(&self) -> &'static str {
        match self {
            Side::Red => "Red Wins!",
            Side::Yellow => "Yellow Wins!",
        }
    }
}

/// A single movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Resolution order within a frame: horizontal first, then vertical.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Movement keys held for one ship during a frame.
///
/// Directions are independent: holding up and right moves a full step on
/// both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShipControls {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ShipControls {
    pub const IDLE: ShipControls = ShipControls {
        up: false,
        down: false,
        left: false,
        right: false,
    };

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, dir: Direction, held: bool) {
        match dir {
            Direction::Up => self.up = held,
            Direction::Down => self.down = held,
            Direction::Left => self.left = held,
            Direction::Right => self.right = held,
        }
    }
}

/// Domain events consumed by the frame step.
///
/// `Fire` and `Quit` originate from input, `Hit` from bullet resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A fire key was pressed for this side
    Fire { side: Side },
    /// A bullet struck this side's ship
    Hit { side: Side },
    /// The player asked to leave the game
    Quit,
}

/// Sound effects the frontend can be asked to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// A bullet left a ship
    Fire,
    /// A bullet struck a ship
    Hit,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Fire => "fire",
            SoundEffect::Hit => "hit",
        }
    }
}

/// Capacity of the per-frame input event list.
pub const MAX_FRAME_EVENTS: usize = 32;

/// Everything the input source observed since the previous frame.
///
/// `controls` is held state sampled once per frame (indexed by
/// [`Side::index`]); `events` are edge-triggered presses in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub controls: [ShipControls; 2],
    pub events: arrayvec::ArrayVec<GameEvent, MAX_FRAME_EVENTS>,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn controls(&self, side: Side) -> ShipControls {
        self.controls[side.index()]
    }

    pub fn set_controls(&mut self, side: Side, controls: ShipControls) {
        self.controls[side.index()] = controls;
    }

    /// Queue an event; events past capacity are dropped.
    pub fn push_event(&mut self, event: GameEvent) {
        let _ = self.events.try_push(event);
    }

    pub fn quit_requested(&self) -> bool {
        self.events.iter().any(|e| *e == GameEvent::Quit)
    }

    pub fn clear(&mut self) {
        self.controls = [ShipControls::IDLE; 2];
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arena_layout_constants() {
        assert_eq!(BORDER, Rect::new(597, 0, 6, 600));
        assert_eq!(BORDER.right(), 603);
        assert_eq!(FPS, 60);
        assert_eq!(MAX_BULLETS, 3);
        assert_eq!(STARTING_HEALTH, 10);
    }

    #[test]
    fn spawn_positions_are_on_their_own_side() {
        assert!(RED_START.0 + SHIP_WIDTH < BORDER.x);
        assert!(YELLOW_START.0 > BORDER.right());
    }
}
