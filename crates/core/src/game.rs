//! Game module - the per-frame step and the round lifecycle
//!
//! [`Game::step`] runs one frame in a fixed order:
//!
//! 1. drain events: hits queued by the previous frame, then this frame's
//!    input events (fire, quit)
//! 2. move both ships from held controls
//! 3. advance and resolve bullets; new hits are queued for the next frame
//! 4. check for a winner
//!
//! The step never allocates and never fails. Sound requests and the outcome
//! come back in a [`FrameReport`] for the frontend to act on.

use arrayvec::ArrayVec;

use crate::bullet::MAX_HITS_PER_FRAME;
use crate::round::{RoundState, MAX_PENDING_EVENTS};
use crate::snapshot::RoundSnapshot;
use crate::types::{FrameInput, GameEvent, Side, SoundEffect, MAX_FRAME_EVENTS};

/// Capacity of per-frame report lists.
pub const MAX_REPORT_EVENTS: usize = MAX_FRAME_EVENTS + MAX_PENDING_EVENTS;

/// Lifecycle of the game.
///
/// `RoundOver` is transient: the orchestrator shows the banner, waits, and
/// calls [`Game::restart`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    RoundOver { winner: Side },
    Terminated,
}

/// What a single frame did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// Events that took effect this frame (accepted fires, applied hits, quit)
    pub applied: ArrayVec<GameEvent, MAX_REPORT_EVENTS>,
    /// Hits detected by bullet resolution, queued for the next frame
    pub raised: ArrayVec<GameEvent, MAX_HITS_PER_FRAME>,
    /// Sounds the frontend should play, in order
    pub sounds: ArrayVec<SoundEffect, MAX_REPORT_EVENTS>,
    /// Winner declared at the end of this frame
    pub outcome: Option<Side>,
}

impl FrameReport {
    pub fn quit(&self) -> bool {
        self.applied.contains(&GameEvent::Quit)
    }
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct Game {
    round: RoundState,
    phase: Phase,
    /// 1-based, increments on every restart
    round_no: u32,
    /// Frames simulated in the current round
    frame: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            round: RoundState::new(),
            phase: Phase::Running,
            round_no: 1,
            frame: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Direct access to entity state, for scripted setups and tools.
    pub fn round_mut(&mut self) -> &mut RoundState {
        &mut self.round
    }

    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::RoundOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// Advance one frame. Does nothing unless the game is running.
    pub fn step(&mut self, input: &FrameInput) -> FrameReport {
        let mut report = FrameReport::default();
        if self.phase != Phase::Running {
            return report;
        }
        self.frame += 1;

        for event in self.round.take_pending() {
            self.apply_event(event, &mut report);
        }
        for &event in &input.events {
            self.apply_event(event, &mut report);
            if self.phase == Phase::Terminated {
                return report;
            }
        }

        for side in Side::ALL {
            self.round.ship_mut(side).apply_controls(input.controls(side));
        }

        let round = &mut self.round;
        let raised = round.bullets.resolve(&round.ships);
        for &event in &raised {
            round.queue_event(event);
        }
        report.raised = raised;

        if let Some(winner) = self.round.health.winner() {
            self.phase = Phase::RoundOver { winner };
            report.outcome = Some(winner);
        }

        report
    }

    fn apply_event(&mut self, event: GameEvent, report: &mut FrameReport) {
        match event {
            GameEvent::Fire { side } => {
                if self.round.fire(side) {
                    let _ = report.applied.try_push(event);
                    let _ = report.sounds.try_push(SoundEffect::Fire);
                }
            }
            GameEvent::Hit { side } => {
                self.round.health.apply_hit(side);
                let _ = report.applied.try_push(event);
                let _ = report.sounds.try_push(SoundEffect::Hit);
            }
            GameEvent::Quit => {
                self.phase = Phase::Terminated;
                let _ = report.applied.try_push(event);
            }
        }
    }

    /// Start a fresh round in place: spawn positions, no bullets, full health.
    pub fn restart(&mut self) {
        if self.phase == Phase::Terminated {
            return;
        }
        self.round.reset();
        self.phase = Phase::Running;
        self.round_no = self.round_no.wrapping_add(1);
        self.frame = 0;
    }

    /// Stop the game; further steps are no-ops.
    pub fn quit(&mut self) {
        self.phase = Phase::Terminated;
    }

    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        for side in Side::ALL {
            let i = side.index();
            out.ships[i] = self.round.ship(side).rect;
            out.bullets[i].clear();
            for bullet in self.round.bullets.get(side) {
                out.bullets[i].push(bullet.rect);
            }
        }
        out.health = self.round.health.values();
        out.round = self.round_no;
        out.frame = self.frame;
        out.winner = self.winner();
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut s = RoundSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rect, ShipControls, SHIP_HEIGHT, SHIP_WIDTH, STARTING_HEALTH};

    fn fire(side: Side) -> FrameInput {
        let mut input = FrameInput::new();
        input.push_event(GameEvent::Fire { side });
        input
    }

    #[test]
    fn fire_spawns_bullet_and_requests_sound() {
        let mut game = Game::new();
        let report = game.step(&fire(Side::Red));

        assert_eq!(report.sounds.as_slice(), &[SoundEffect::Fire]);
        assert_eq!(game.round().bullets.count(Side::Red), 1);
    }

    #[test]
    fn fire_over_the_cap_is_silent() {
        let mut game = Game::new();
        let mut input = FrameInput::new();
        for _ in 0..5 {
            input.push_event(GameEvent::Fire { side: Side::Yellow });
        }
        let report = game.step(&input);

        assert_eq!(report.sounds.len(), 3);
        assert_eq!(report.applied.len(), 3);
        assert_eq!(game.round().bullets.count(Side::Yellow), 3);
    }

    #[test]
    fn hits_are_applied_on_the_following_frame() {
        let mut game = Game::new();
        game.round_mut().ship_mut(Side::Yellow).rect = Rect::new(170, 250, SHIP_WIDTH, SHIP_HEIGHT);

        let report = game.step(&fire(Side::Red));
        assert_eq!(report.raised.as_slice(), &[GameEvent::Hit { side: Side::Yellow }]);
        assert_eq!(game.round().health.get(Side::Yellow), STARTING_HEALTH);
        assert_eq!(game.round().pending().len(), 1);

        let report = game.step(&FrameInput::new());
        assert_eq!(report.sounds.as_slice(), &[SoundEffect::Hit]);
        assert_eq!(game.round().health.get(Side::Yellow), STARTING_HEALTH - 1);
        assert!(game.round().pending().is_empty());
    }

    #[test]
    fn quit_stops_processing_immediately() {
        let mut game = Game::new();
        let mut input = FrameInput::new();
        input.push_event(GameEvent::Quit);
        input.push_event(GameEvent::Fire { side: Side::Red });
        input.set_controls(
            Side::Red,
            ShipControls {
                right: true,
                ..ShipControls::IDLE
            },
        );

        let report = game.step(&input);
        assert!(report.quit());
        assert!(game.is_terminated());
        assert!(game.round().bullets.is_empty());
        assert_eq!(game.round().ship(Side::Red).rect.x, 100);

        // Terminated games ignore further input.
        let report = game.step(&fire(Side::Red));
        assert_eq!(report, FrameReport::default());
    }

    #[test]
    fn round_over_freezes_until_restart() {
        let mut game = Game::new();
        for _ in 0..STARTING_HEALTH {
            game.round_mut().health.apply_hit(Side::Red);
        }
        let report = game.step(&FrameInput::new());
        assert_eq!(report.outcome, Some(Side::Yellow));
        assert_eq!(game.phase(), Phase::RoundOver { winner: Side::Yellow });

        let frame = game.frame();
        game.step(&fire(Side::Red));
        assert_eq!(game.frame(), frame);
        assert!(game.round().bullets.is_empty());

        game.restart();
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.round_no(), 2);
        assert_eq!(game.frame(), 0);
        assert_eq!(*game.round(), RoundState::new());
    }

    #[test]
    fn restart_does_not_revive_a_terminated_game() {
        let mut game = Game::new();
        game.quit();
        game.restart();
        assert!(game.is_terminated());
    }

    #[test]
    fn snapshot_mirrors_round_state() {
        let mut game = Game::new();
        game.step(&fire(Side::Red));
        let snap = game.snapshot();

        assert_eq!(snap.ship(Side::Red), Rect::new(100, 250, 55, 50));
        assert_eq!(snap.ship(Side::Yellow), Rect::new(700, 250, 55, 50));
        assert_eq!(snap.bullets(Side::Red), &[Rect::new(166, 275, 10, 5)]);
        assert!(snap.bullets(Side::Yellow).is_empty());
        assert_eq!(snap.health, [STARTING_HEALTH; 2]);
        assert_eq!(snap.round, 1);
        assert_eq!(snap.frame, 1);
        assert_eq!(snap.winner, None);
    }
}
