//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains every rule of the game and nothing else. It has
//! **zero dependencies** on terminals, audio, clocks or threads, making it:
//!
//! - **Deterministic**: the same inputs always produce the same frames
//! - **Testable**: each rule is a plain function over plain data
//! - **Fast**: the frame step works on fixed-capacity containers and never
//!   allocates
//!
//! # Module Structure
//!
//! - [`arena`]: movement bounds per side and bullet exit checks
//! - [`ship`]: ship spawn, movement from held controls, muzzle position
//! - [`bullet`]: per-side bullet lists with the 3-bullet cap, travel and hit detection
//! - [`health`]: health counters and the winner rule
//! - [`round`]: all state that a restart resets, plus the queue of pending hits
//! - [`game`]: the frame step and the `Running → RoundOver → Running → Terminated` lifecycle
//! - [`snapshot`]: read-only per-frame view for the frontend
//!
//! # Example
//!
//! ```
//! use space_wars_core::{Game, Phase};
//! use space_wars_types::{FrameInput, GameEvent, ShipControls, Side, SoundEffect};
//!
//! let mut game = Game::new();
//!
//! let mut input = FrameInput::new();
//! input.push_event(GameEvent::Fire { side: Side::Red });
//! input.set_controls(Side::Yellow, ShipControls { up: true, ..ShipControls::IDLE });
//!
//! let report = game.step(&input);
//! assert_eq!(report.sounds.as_slice(), &[SoundEffect::Fire]);
//! assert_eq!(game.round().bullets.count(Side::Red), 1);
//! assert_eq!(game.round().ship(Side::Yellow).rect.y, 244);
//! assert_eq!(game.phase(), Phase::Running);
//! ```

pub mod arena;
pub mod bullet;
pub mod game;
pub mod health;
pub mod round;
pub mod ship;
pub mod snapshot;

pub use space_wars_types as types;

// Re-export commonly used types for convenience
pub use arena::{can_step, has_exited, region, step_delta};
pub use bullet::{Bullet, Bullets, MAX_HITS_PER_FRAME};
pub use game::{FrameReport, Game, Phase};
pub use health::Health;
pub use round::RoundState;
pub use ship::Ship;
pub use snapshot::RoundSnapshot;
