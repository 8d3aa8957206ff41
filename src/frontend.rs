//! The terminal [`Frontend`]: arena view, diff renderer and audio player.

use anyhow::Result;

use crate::audio::AudioPlayer;
use crate::core::RoundSnapshot;
use crate::engine::Frontend;
use crate::term::{ArenaView, FrameBuffer, TerminalRenderer, Viewport};
use crate::types::SoundEffect;

/// Everything the loop draws to or plays through, constructed once in
/// `main` and lent to the loop.
pub struct TerminalFrontend {
    renderer: TerminalRenderer,
    view: ArenaView,
    fb: FrameBuffer,
    audio: AudioPlayer,
}

impl TerminalFrontend {
    pub fn new(renderer: TerminalRenderer, view: ArenaView, audio: AudioPlayer) -> Self {
        Self {
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
            audio,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn keyboard_enhanced(&self) -> bool {
        self.renderer.keyboard_enhanced()
    }

    fn draw(&mut self, snapshot: &RoundSnapshot, banner: Option<&str>) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(snapshot, banner, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl Frontend for TerminalFrontend {
    fn draw_frame(&mut self, snapshot: &RoundSnapshot) -> Result<()> {
        self.draw(snapshot, None)
    }

    fn draw_winner_banner(&mut self, snapshot: &RoundSnapshot, text: &str) -> Result<()> {
        self.draw(snapshot, Some(text))
    }

    fn play(&mut self, effect: SoundEffect) {
        self.audio.play(effect);
    }
}
