//! Sound effects.
//!
//! Effects are synthesized from short sine tones, so there are no asset
//! files to ship or find at runtime. Playback happens on a dedicated audio
//! thread fed over a channel; the game loop never waits on it.

pub mod player;
pub mod tone;

pub use space_wars_types as types;

pub use player::AudioPlayer;
pub use tone::{tones, total_duration, Tone};
