//! Space Wars terminal runner (default binary).
//!
//! Red flies with WASD and fires with Left Alt or Space; yellow flies with
//! the arrow keys and fires with Right Alt or Enter. Esc quits.
//!
//! Logging goes to stderr and shows only errors by default; set `RUST_LOG=info` and
//! redirect stderr to a file to see it.

use anyhow::{Context, Result};
use log::info;

use space_wars::audio::AudioPlayer;
use space_wars::core::Game;
use space_wars::engine::{run, LoopConfig};
use space_wars::input::{KeyTracker, TerminalInput};
use space_wars::term::{ArenaView, TerminalRenderer};
use space_wars::types::Side;
use space_wars::TerminalFrontend;

fn main() -> Result<()> {
    env_logger::init();

    // Open the audio device before touching the terminal so a failure
    // prints on a normal screen.
    let audio = AudioPlayer::new().context("sound output is required")?;
    let mut frontend = TerminalFrontend::new(TerminalRenderer::new(), ArenaView::default(), audio);

    let result = frontend.enter().and_then(|()| play(&mut frontend));

    // Always try to restore terminal state.
    let restored = frontend.exit();
    result?;
    restored
}

fn play(frontend: &mut TerminalFrontend) -> Result<()> {
    let tracker = KeyTracker::new().with_release_events(frontend.keyboard_enhanced());
    let mut input = TerminalInput::new(tracker);
    let mut game = Game::new();

    let summary = run(&mut game, &mut input, frontend, &LoopConfig::default())?;
    info!(
        "finished after {} decided rounds (red {}, yellow {})",
        summary.rounds_decided,
        summary.wins(Side::Red),
        summary.wins(Side::Yellow)
    );
    Ok(())
}
