//! Ship entity and per-frame movement

use crate::arena::{can_step, step_delta};
use crate::types::{
    Direction, Rect, ShipControls, Side, BULLET_HEIGHT, BULLET_WIDTH, RED_START, SHIP_HEIGHT, SHIP_WIDTH,
    YELLOW_START,
};

/// A player's ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ship {
    pub side: Side,
    pub rect: Rect,
}

impl Ship {
    /// Create a ship at its side's spawn position
    pub fn new(side: Side) -> Self {
        let (x, y) = match side {
            Side::Red => RED_START,
            Side::Yellow => YELLOW_START,
        };
        Self {
            side,
            rect: Rect::new(x, y, SHIP_WIDTH, SHIP_HEIGHT),
        }
    }

    /// Apply held movement keys for one frame.
    ///
    /// Each axis is checked and moved on its own, so diagonal input moves a
    /// full step on both axes. Returns true if the ship moved.
    pub fn apply_controls(&mut self, controls: ShipControls) -> bool {
        let mut moved = false;
        for dir in Direction::ALL {
            if controls.is_held(dir) && can_step(self.side, &self.rect, dir) {
                let (dx, dy) = step_delta(dir);
                self.rect = self.rect.translated(dx, dy);
                moved = true;
            }
        }
        moved
    }

    /// Spawn rectangle of a bullet leaving this ship.
    ///
    /// Red fires from its right edge, yellow from its left edge, both at
    /// half height.
    pub fn muzzle(&self) -> Rect {
        let y = self.rect.y + self.rect.h / 2;
        let x = match self.side {
            Side::Red => self.rect.right(),
            Side::Yellow => self.rect.x,
        };
        Rect::new(x, y, BULLET_WIDTH, BULLET_HEIGHT)
    }
}
