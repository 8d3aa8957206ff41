//! Tone recipes for each effect.

use std::time::Duration;

use crate::types::SoundEffect;

/// One sine segment of an effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    pub duration_ms: u32,
    /// Linear gain, 0.0 - 1.0
    pub volume: f32,
}

impl Tone {
    const fn new(freq_hz: f32, duration_ms: u32, volume: f32) -> Self {
        Self {
            freq_hz,
            duration_ms,
            volume,
        }
    }

    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms as u64)
    }
}

/// Short descending blip
const FIRE: &[Tone] = &[
    Tone::new(1320.0, 25, 0.18),
    Tone::new(990.0, 25, 0.15),
    Tone::new(660.0, 40, 0.12),
];

/// Low thump with a tail
const HIT: &[Tone] = &[
    Tone::new(220.0, 40, 0.35),
    Tone::new(140.0, 70, 0.30),
    Tone::new(90.0, 120, 0.22),
];

/// Segments of `effect`, played back to back.
pub fn tones(effect: SoundEffect) -> &'static [Tone] {
    match effect {
        SoundEffect::Fire => FIRE,
        SoundEffect::Hit => HIT,
    }
}

/// Total playing time of `effect`.
pub fn total_duration(effect: SoundEffect) -> Duration {
    tones(effect).iter().map(Tone::duration).sum()
}
