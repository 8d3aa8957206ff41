//! Frame loop orchestration
//!
//! The engine owns nothing but time. It pulls a [`FrameInput`] from an
//! [`InputSource`], advances the [`Game`] by one step, forwards sound and
//! draw requests to a [`Frontend`], and paces itself with a
//! [`FrameLimiter`]. Both collaborators are traits so the loop can be driven
//! headless in tests.
//!
//! ```
//! use std::time::Duration;
//!
//! use anyhow::Result;
//! use space_wars_core::{Game, RoundSnapshot};
//! use space_wars_engine::{run, Frontend, InputSource, LoopConfig};
//! use space_wars_types::{FrameInput, GameEvent, SoundEffect};
//!
//! struct QuitAfter(u32);
//!
//! impl InputSource for QuitAfter {
//!     fn poll(&mut self) -> Result<FrameInput> {
//!         let mut input = FrameInput::new();
//!         if self.0 == 0 {
//!             input.push_event(GameEvent::Quit);
//!         } else {
//!             self.0 -= 1;
//!         }
//!         Ok(input)
//!     }
//!
//!     fn reset(&mut self) {}
//! }
//!
//! struct Headless;
//!
//! impl Frontend for Headless {
//!     fn draw_frame(&mut self, _: &RoundSnapshot) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn draw_winner_banner(&mut self, _: &RoundSnapshot, _: &str) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn play(&mut self, _: SoundEffect) {}
//! }
//!
//! let config = LoopConfig::default().with_frame(Duration::ZERO);
//! let summary = run(&mut Game::new(), &mut QuitAfter(3), &mut Headless, &config)?;
//! assert_eq!(summary.frames, 3);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod limiter;
pub mod runner;

pub use space_wars_core as core;
pub use space_wars_types as types;

pub use limiter::FrameLimiter;
pub use runner::{run, LoopConfig, RunSummary};

use anyhow::Result;
use space_wars_core::RoundSnapshot;
use space_wars_types::{FrameInput, SoundEffect};

/// Where per-frame input comes from.
pub trait InputSource {
    /// Everything observed since the previous call.
    ///
    /// Called exactly once per frame, including during the winner banner
    /// hold. Must not block.
    fn poll(&mut self) -> Result<FrameInput>;

    /// Forget every held key. Called before a new round starts.
    fn reset(&mut self);
}

/// Rendering and audio collaborator.
pub trait Frontend {
    fn draw_frame(&mut self, snapshot: &RoundSnapshot) -> Result<()>;

    /// Draw the frame with `text` centered over it.
    fn draw_winner_banner(&mut self, snapshot: &RoundSnapshot, text: &str) -> Result<()>;

    /// Fire-and-forget. Playback problems are the frontend's to log.
    fn play(&mut self, effect: SoundEffect);
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn poll(&mut self) -> Result<FrameInput> {
        (**self).poll()
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}

impl<T: Frontend + ?Sized> Frontend for &mut T {
    fn draw_frame(&mut self, snapshot: &RoundSnapshot) -> Result<()> {
        (**self).draw_frame(snapshot)
    }

    fn draw_winner_banner(&mut self, snapshot: &RoundSnapshot, text: &str) -> Result<()> {
        (**self).draw_winner_banner(snapshot, text)
    }

    fn play(&mut self, effect: SoundEffect) {
        (**self).play(effect)
    }
}

