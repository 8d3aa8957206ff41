//! Held-key tracking for terminal environments.
//!
//! Terminals report key presses, but only some report releases. When they
//! do, a key is held from press to release. When they don't, a key counts as
//! held until a release timeout passes without a fresh press or repeat
//! report for it; the terminal's own auto-repeat keeps a held key alive.

use std::time::{Duration, Instant};

use crate::map::Control;
use crate::types::{Direction, GameEvent, ShipControls, Side};

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which movement and fire keys are currently down.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Last press/repeat report per side and direction
    moves: [[Option<Instant>; 4]; 2],
    /// Last press/repeat report per fire key
    fire: [Option<Instant>; 2],
    release_events: bool,
    key_release_timeout_ms: u32,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            moves: [[None; 4]; 2],
            fire: [None; 2],
            release_events: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    /// Trust release events instead of timing keys out.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// A key went down. Returns the edge-triggered event it produces, if any.
    ///
    /// A press for a fire key that is still held is a repeat and fires
    /// nothing.
    pub fn press(&mut self, control: Control, now: Instant) -> Option<GameEvent> {
        match control {
            Control::Move(side, dir) => {
                *self.move_slot(side, dir) = Some(now);
                None
            }
            Control::Fire(side) => {
                let held = self.is_live(self.fire[side.index()], now);
                self.fire[side.index()] = Some(now);
                if held {
                    None
                } else {
                    Some(GameEvent::Fire { side })
                }
            }
            Control::Quit => Some(GameEvent::Quit),
        }
    }

    /// Terminal auto-repeat for a key that is already down.
    pub fn repeat(&mut self, control: Control, now: Instant) {
        match control {
            Control::Move(side, dir) => *self.move_slot(side, dir) = Some(now),
            Control::Fire(side) => self.fire[side.index()] = Some(now),
            Control::Quit => {}
        }
    }

    pub fn release(&mut self, control: Control) {
        match control {
            Control::Move(side, dir) => *self.move_slot(side, dir) = None,
            Control::Fire(side) => self.fire[side.index()] = None,
            Control::Quit => {}
        }
    }

    /// Held movement keys for both ships as of `now`.
    ///
    /// Keys whose timeout has passed are released on the way.
    pub fn controls(&mut self, now: Instant) -> [ShipControls; 2] {
        let mut out = [ShipControls::IDLE; 2];
        for side in Side::ALL {
            for dir in Direction::ALL {
                let slot = self.moves[side.index()][dir.index()];
                let live = self.is_live(slot, now);
                if !live {
                    *self.move_slot(side, dir) = None;
                }
                out[side.index()].set(dir, live);
            }
        }
        for side in Side::ALL {
            if !self.is_live(self.fire[side.index()], now) {
                self.fire[side.index()] = None;
            }
        }
        out
    }

    pub fn is_held(&self, control: Control, now: Instant) -> bool {
        match control {
            Control::Move(side, dir) => self.is_live(self.moves[side.index()][dir.index()], now),
            Control::Fire(side) => self.is_live(self.fire[side.index()], now),
            Control::Quit => false,
        }
    }

    pub fn reset(&mut self) {
        self.moves = [[None; 4]; 2];
        self.fire = [None; 2];
    }

    fn move_slot(&mut self, side: Side, dir: Direction) -> &mut Option<Instant> {
        &mut self.moves[side.index()][dir.index()]
    }

    fn is_live(&self, last_seen: Option<Instant>, now: Instant) -> bool {
        match last_seen {
            None => false,
            Some(_) if self.release_events => true,
            Some(t) => {
                now.saturating_duration_since(t)
                    <= Duration::from_millis(self.key_release_timeout_ms as u64)
            }
        }
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    const RED_UP: Control = Control::Move(Side::Red, Direction::Up);
    const YELLOW_LEFT: Control = Control::Move(Side::Yellow, Direction::Left);

    #[test]
    fn test_press_holds_until_timeout_without_release_events() {
        let mut kt = KeyTracker::new().with_release_timeout_ms(50);
        let t0 = Instant::now();

        assert_eq!(kt.press(RED_UP, t0), None);
        assert!(kt.controls(t0 + ms(50))[0].up);

        // Simulate no key-release events: the key expires on its own.
        let controls = kt.controls(t0 + ms(51));
        assert!(controls[0].is_idle());
        assert!(!kt.is_held(RED_UP, t0 + ms(51)));
    }

    #[test]
    fn test_repeat_keeps_key_alive() {
        let mut kt = KeyTracker::new().with_release_timeout_ms(50);
        let t0 = Instant::now();

        kt.press(YELLOW_LEFT, t0);
        kt.repeat(YELLOW_LEFT, t0 + ms(40));
        kt.repeat(YELLOW_LEFT, t0 + ms(80));

        assert!(kt.controls(t0 + ms(120))[1].left);
    }

    #[test]
    fn test_release_events_hold_until_release() {
        let mut kt = KeyTracker::new().with_release_events(true);
        let t0 = Instant::now();

        kt.press(RED_UP, t0);
        assert!(kt.controls(t0 + Duration::from_secs(10))[0].up);

        kt.release(RED_UP);
        assert!(kt.controls(t0 + Duration::from_secs(10))[0].is_idle());
    }

    #[test]
    fn test_other_keys_do_not_extend_a_held_key() {
        let mut kt = KeyTracker::new().with_release_timeout_ms(50);
        let t0 = Instant::now();

        kt.press(RED_UP, t0);
        kt.press(YELLOW_LEFT, t0 + ms(40));

        let controls = kt.controls(t0 + ms(60));
        assert!(!controls[0].up);
        assert!(controls[1].left);
    }

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut kt = KeyTracker::new().with_release_timeout_ms(50);
        let t0 = Instant::now();
        let fire = Control::Fire(Side::Red);

        assert_eq!(kt.press(fire, t0), Some(GameEvent::Fire { side: Side::Red }));
        // Auto-repeat arrives as presses on some terminals.
        assert_eq!(kt.press(fire, t0 + ms(30)), None);
        assert_eq!(kt.press(fire, t0 + ms(60)), None);

        // After a real gap the key was let go and pressed again.
        assert_eq!(
            kt.press(fire, t0 + ms(200)),
            Some(GameEvent::Fire { side: Side::Red })
        );
    }

    #[test]
    fn test_fire_after_release_fires_again() {
        let mut kt = KeyTracker::new().with_release_events(true);
        let t0 = Instant::now();
        let fire = Control::Fire(Side::Yellow);

        assert!(kt.press(fire, t0).is_some());
        assert!(kt.press(fire, t0 + ms(1)).is_none());
        kt.release(fire);
        assert!(kt.press(fire, t0 + ms(2)).is_some());
    }

    #[test]
    fn test_quit_press_is_reported() {
        let mut kt = KeyTracker::new();
        assert_eq!(kt.press(Control::Quit, Instant::now()), Some(GameEvent::Quit));
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        let kt = KeyTracker::new();
        assert!(kt.key_release_timeout_ms() > 0);
        assert!(!kt.release_events());
    }

    #[test]
    fn test_reset_clears_held_state() {
        let mut kt = KeyTracker::new().with_release_events(true);
        let t0 = Instant::now();

        kt.press(RED_UP, t0);
        kt.press(Control::Fire(Side::Red), t0);
        kt.reset();

        assert!(kt.controls(t0)[0].is_idle());
        assert!(kt.press(Control::Fire(Side::Red), t0).is_some());
    }
}
