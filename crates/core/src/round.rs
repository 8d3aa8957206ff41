//! Round state - everything that is reset when a new round starts

use arrayvec::ArrayVec;

use crate::bullet::{Bullets, MAX_HITS_PER_FRAME};
use crate::health::Health;
use crate::ship::Ship;
use crate::types::{GameEvent, Side};

/// Capacity of the queue carrying hit events into the next frame.
pub const MAX_PENDING_EVENTS: usize = MAX_HITS_PER_FRAME;

/// Entity state of one round: ships, bullets, health and queued hits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Indexed by [`Side::index`]
    pub ships: [Ship; 2],
    pub bullets: Bullets,
    pub health: Health,
    pending: ArrayVec<GameEvent, MAX_PENDING_EVENTS>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundState {
    pub fn new() -> Self {
        Self {
            ships: [Ship::new(Side::Red), Ship::new(Side::Yellow)],
            bullets: Bullets::new(),
            health: Health::new(),
            pending: ArrayVec::new(),
        }
    }

    pub fn ship(&self, side: Side) -> &Ship {
        &self.ships[side.index()]
    }

    pub fn ship_mut(&mut self, side: Side) -> &mut Ship {
        &mut self.ships[side.index()]
    }

    /// Events raised during the previous frame, not yet applied.
    pub fn pending(&self) -> &[GameEvent] {
        &self.pending
    }

    /// Queue an event for the next frame. Drops it if the queue is full.
    pub fn queue_event(&mut self, event: GameEvent) -> bool {
        self.pending.try_push(event).is_ok()
    }

    /// Take every queued event, leaving the queue empty.
    pub(crate) fn take_pending(&mut self) -> ArrayVec<GameEvent, MAX_PENDING_EVENTS> {
        std::mem::take(&mut self.pending)
    }

    /// Fire from `side`'s ship. Returns true if a bullet was spawned.
    pub fn fire(&mut self, side: Side) -> bool {
        let ship = self.ships[side.index()];
        self.bullets.try_fire(&ship)
    }

    /// Put every entity back to its round-start state.
    pub fn reset(&mut self) {
        self.ships = [Ship::new(Side::Red), Ship::new(Side::Yellow)];
        self.bullets.clear();
        self.health.reset();
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rect, STARTING_HEALTH};

    #[test]
    fn reset_matches_a_fresh_round() {
        let mut round = RoundState::new();
        round.ship_mut(Side::Red).rect = Rect::new(0, 0, 55, 50);
        round.fire(Side::Yellow);
        round.health.apply_hit(Side::Red);
        round.queue_event(GameEvent::Hit { side: Side::Yellow });

        round.reset();
        assert_eq!(round, RoundState::new());
        assert_eq!(round.health.get(Side::Red), STARTING_HEALTH);
        assert!(round.pending().is_empty());
    }

    #[test]
    fn pending_queue_is_bounded() {
        let mut round = RoundState::new();
        for _ in 0..MAX_PENDING_EVENTS {
            assert!(round.queue_event(GameEvent::Hit { side: Side::Red }));
        }
        assert!(!round.queue_event(GameEvent::Hit { side: Side::Red }));

        let taken = round.take_pending();
        assert_eq!(taken.len(), MAX_PENDING_EVENTS);
        assert!(round.pending().is_empty());
    }
}
