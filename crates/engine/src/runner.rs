//! The game loop.
//!
//! One iteration is one frame: poll input, step the game, play the sounds
//! the step asked for, draw. When a round is decided the banner is drawn and
//! held for [`LoopConfig::winner_hold`] while input keeps being polled so a
//! quit still lands promptly, then the game restarts in place.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, info};

use space_wars_core::{Game, RoundSnapshot};
use space_wars_types::{GameEvent, Side, FRAME_MS, WINNER_HOLD_MS};

use crate::limiter::FrameLimiter;
use crate::{Frontend, InputSource};

/// Loop timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopConfig {
    /// Target frame interval
    pub frame: Duration,
    /// How long the winner banner stays up
    pub winner_hold: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            frame: Duration::from_millis(FRAME_MS as u64),
            winner_hold: Duration::from_millis(WINNER_HOLD_MS as u64),
        }
    }
}

impl LoopConfig {
    pub fn with_frame(mut self, frame: Duration) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_winner_hold(mut self, hold: Duration) -> Self {
        self.winner_hold = hold;
        self
    }
}

/// What happened between start and quit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Frames stepped, across all rounds
    pub frames: u64,
    /// Rounds that reached a winner
    pub rounds_decided: u32,
    /// Round wins per side, indexed by [`Side::index`]
    pub wins: [u32; 2],
}

impl RunSummary {
    pub fn wins(&self, side: Side) -> u32 {
        self.wins[side.index()]
    }

    fn record(&mut self, winner: Side) {
        self.rounds_decided += 1;
        self.wins[winner.index()] += 1;
    }
}

enum Hold {
    Elapsed,
    Quit,
}

/// Run until the input source asks to quit.
///
/// Errors from the input source or the frontend end the loop and are
/// returned as-is with context; the game itself cannot fail.
pub fn run<I, F>(
    game: &mut Game,
    input: &mut I,
    frontend: &mut F,
    config: &LoopConfig,
) -> Result<RunSummary>
where
    I: InputSource + ?Sized,
    F: Frontend + ?Sized,
{
    let mut limiter = FrameLimiter::new(config.frame);
    let mut snapshot = RoundSnapshot::default();
    let mut summary = RunSummary::default();

    info!("round {} started", game.round_no());

    loop {
        let frame_input = input.poll().context("failed to poll input")?;
        let report = game.step(&frame_input);

        if report.quit() {
            info!(
                "quit during round {} after {} frames",
                game.round_no(),
                summary.frames
            );
            return Ok(summary);
        }
        summary.frames += 1;

        for event in &report.applied {
            match event {
                GameEvent::Fire { side } => debug!("{} fired", side.as_str()),
                GameEvent::Hit { side } => debug!(
                    "{} hit, health {}",
                    side.as_str(),
                    game.round().health.get(*side)
                ),
                GameEvent::Quit => {}
            }
        }
        for &effect in &report.sounds {
            frontend.play(effect);
        }

        game.snapshot_into(&mut snapshot);

        let Some(winner) = report.outcome else {
            frontend.draw_frame(&snapshot).context("failed to draw frame")?;
            limiter.wait();
            continue;
        };

        summary.record(winner);
        info!(
            "round {} won by {} ({} - {})",
            game.round_no(),
            winner.as_str(),
            summary.wins(Side::Red),
            summary.wins(Side::Yellow)
        );
        frontend
            .draw_winner_banner(&snapshot, winner.winner_text())
            .context("failed to draw winner banner")?;

        if let Hold::Quit = hold(input, &mut limiter, config.winner_hold)? {
            game.quit();
            info!("quit while showing the winner banner");
            return Ok(summary);
        }

        input.reset();
        game.restart();
        info!("round {} started", game.round_no());
    }
}

/// Keep polling input for `duration`, discarding everything but quit.
fn hold<I>(input: &mut I, limiter: &mut FrameLimiter, duration: Duration) -> Result<Hold>
where
    I: InputSource + ?Sized,
{
    let deadline = Instant::now() + duration;
    while Instant::now() < deadline {
        limiter.wait();
        let polled = input.poll().context("failed to poll input")?;
        if polled.quit_requested() {
            return Ok(Hold::Quit);
        }
    }
    Ok(Hold::Elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use space_wars_types::{FrameInput, ShipControls, SoundEffect, STARTING_HEALTH};

    /// Replays a fixed script, then asks to quit.
    struct Scripted {
        frames: std::vec::IntoIter<FrameInput>,
        polls: usize,
        resets: usize,
    }

    impl Scripted {
        fn new(frames: Vec<FrameInput>) -> Self {
            Self {
                frames: frames.into_iter(),
                polls: 0,
                resets: 0,
            }
        }
    }

    impl InputSource for Scripted {
        fn poll(&mut self) -> Result<FrameInput> {
            self.polls += 1;
            Ok(self.frames.next().unwrap_or_else(|| {
                let mut quit = FrameInput::new();
                quit.push_event(GameEvent::Quit);
                quit
            }))
        }

        fn reset(&mut self) {
            self.resets += 1;
        }
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<RoundSnapshot>,
        banners: Vec<String>,
        sounds: Vec<SoundEffect>,
    }

    impl Frontend for Recorder {
        fn draw_frame(&mut self, snapshot: &RoundSnapshot) -> Result<()> {
            self.frames.push(snapshot.clone());
            Ok(())
        }

        fn draw_winner_banner(&mut self, _snapshot: &RoundSnapshot, text: &str) -> Result<()> {
            self.banners.push(text.to_string());
            Ok(())
        }

        fn play(&mut self, effect: SoundEffect) {
            self.sounds.push(effect);
        }
    }

    fn fast() -> LoopConfig {
        LoopConfig::default()
            .with_frame(Duration::ZERO)
            .with_winner_hold(Duration::ZERO)
    }

    fn fire(side: Side) -> FrameInput {
        let mut input = FrameInput::new();
        input.push_event(GameEvent::Fire { side });
        input
    }

    #[test]
    fn quit_on_first_frame_draws_nothing() {
        let mut game = Game::new();
        let mut input = Scripted::new(vec![]);
        let mut frontend = Recorder::default();

        let summary = run(&mut game, &mut input, &mut frontend, &fast()).unwrap();

        assert_eq!(summary, RunSummary::default());
        assert!(frontend.frames.is_empty());
        assert!(game.is_terminated());
    }

    #[test]
    fn every_frame_is_drawn_and_sounds_are_forwarded() {
        let mut game = Game::new();
        let mut held = FrameInput::new();
        held.set_controls(
            Side::Yellow,
            ShipControls {
                down: true,
                ..ShipControls::IDLE
            },
        );
        let mut input = Scripted::new(vec![fire(Side::Red), held.clone(), held]);
        let mut frontend = Recorder::default();

        let summary = run(&mut game, &mut input, &mut frontend, &fast()).unwrap();

        assert_eq!(summary.frames, 3);
        assert_eq!(frontend.frames.len(), 3);
        assert_eq!(frontend.sounds, vec![SoundEffect::Fire]);
        assert_eq!(frontend.frames[2].ship(Side::Yellow).y, 262);
        assert_eq!(frontend.frames[2].bullets(Side::Red).len(), 1);
    }

    #[test]
    fn decided_round_shows_banner_then_restarts() {
        let mut game = Game::new();
        for _ in 0..STARTING_HEALTH {
            game.round_mut().health.apply_hit(Side::Yellow);
        }
        let mut input = Scripted::new(vec![FrameInput::new(), fire(Side::Yellow)]);
        let mut frontend = Recorder::default();

        let summary = run(&mut game, &mut input, &mut frontend, &fast()).unwrap();

        assert_eq!(frontend.banners, vec!["Red Wins!".to_string()]);
        assert_eq!(summary.wins(Side::Red), 1);
        assert_eq!(summary.rounds_decided, 1);
        assert_eq!(input.resets, 1);
        assert_eq!(game.round_no(), 2);

        // The frame after the restart runs on a fresh round.
        let fresh = frontend.frames.last().unwrap();
        assert_eq!(fresh.health, [STARTING_HEALTH; 2]);
        assert_eq!(fresh.bullets(Side::Yellow).len(), 1);
    }

    #[test]
    fn quit_during_banner_hold_ends_the_run() {
        let mut game = Game::new();
        for _ in 0..STARTING_HEALTH {
            game.round_mut().health.apply_hit(Side::Red);
        }
        let mut input = Scripted::new(vec![FrameInput::new(), fire(Side::Red)]);
        let mut frontend = Recorder::default();
        let config = fast().with_winner_hold(Duration::from_secs(60));

        let start = Instant::now();
        let summary = run(&mut game, &mut input, &mut frontend, &config).unwrap();

        assert!(start.elapsed() < Duration::from_secs(10));
        assert_eq!(summary.wins(Side::Yellow), 1);
        assert_eq!(frontend.banners, vec!["Yellow Wins!".to_string()]);
        // The fire during the hold was discarded.
        assert!(frontend.sounds.is_empty());
        assert!(game.is_terminated());
        assert_eq!(input.resets, 0);
    }

    #[test]
    fn frontend_errors_stop_the_loop() {
        struct Broken;

        impl Frontend for Broken {
            fn draw_frame(&mut self, _: &RoundSnapshot) -> Result<()> {
                anyhow::bail!("terminal gone")
            }

            fn draw_winner_banner(&mut self, _: &RoundSnapshot, _: &str) -> Result<()> {
                Ok(())
            }

            fn play(&mut self, _: SoundEffect) {}
        }

        let mut input = Scripted::new(vec![FrameInput::new()]);
        let err = run(&mut Game::new(), &mut input, &mut Broken, &fast()).unwrap_err();
        assert!(format!("{:#}", err).contains("terminal gone"));
    }
}
