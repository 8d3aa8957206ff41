//! Terminal rendering for the arena.
//!
//! Frames are drawn into a plain framebuffer by the pure [`ArenaView`] and
//! flushed by [`TerminalRenderer`], which only writes the cells that changed
//! since the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Scale the fixed pixel arena to whatever terminal size is available
//! - No allocation per frame once the framebuffer is sized

pub mod arena_view;
pub mod fb;
pub mod renderer;

pub use space_wars_core as core;
pub use space_wars_types as types;

pub use arena_view::{ArenaLayout, ArenaView, Viewport};
pub use fb::{palette, Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
