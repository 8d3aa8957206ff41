use arrayvec::ArrayVec;

use crate::types::{Rect, Side, MAX_BULLETS, STARTING_HEALTH};

/// Read-only view of a round, handed to the frontend once per frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoundSnapshot {
    /// Ship hitboxes, indexed by [`Side::index`]
    pub ships: [Rect; 2],
    /// Live bullet hitboxes per side
    pub bullets: [ArrayVec<Rect, MAX_BULLETS>; 2],
    pub health: [u8; 2],
    /// 1-based round counter
    pub round: u32,
    /// Frames simulated in the current round
    pub frame: u64,
    pub winner: Option<Side>,
}

impl RoundSnapshot {
    pub fn ship(&self, side: Side) -> Rect {
        self.ships[side.index()]
    }

    pub fn bullets(&self, side: Side) -> &[Rect] {
        &self.bullets[side.index()]
    }

    pub fn health(&self, side: Side) -> u8 {
        self.health[side.index()]
    }

    pub fn clear(&mut self) {
        self.ships = [Rect::default(); 2];
        for list in &mut self.bullets {
            list.clear();
        }
        self.health = [STARTING_HEALTH; 2];
        self.round = 0;
        self.frame = 0;
        self.winner = None;
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            ships: [Rect::default(); 2],
            bullets: [ArrayVec::new(), ArrayVec::new()],
            health: [STARTING_HEALTH; 2],
            round: 0,
            frame: 0,
            winner: None,
        }
    }
}
