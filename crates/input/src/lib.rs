//! Terminal input (engine-facing).
//!
//! Maps `crossterm` key events onto [`map::Control`]s, tracks which keys are
//! held (including on terminals without key-release events) and exposes the
//! result as an [`space_wars_engine::InputSource`] producing one
//! [`types::FrameInput`] per frame.

pub mod map;
pub mod terminal;
pub mod tracker;

pub use space_wars_types as types;

pub use map::{map_key, should_quit, Control};
pub use terminal::TerminalInput;
pub use tracker::{KeyTracker, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
