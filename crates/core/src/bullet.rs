//! Bullet manager - spawning, travel, collision and removal
//!
//! Each side owns a fixed-capacity list of live bullets, so the three-bullet
//! cap is enforced by the container itself and the per-frame update never
//! allocates.

use arrayvec::ArrayVec;

use crate::arena::has_exited;
use crate::ship::Ship;
use crate::types::{GameEvent, Rect, Side, BULLET_VELOCITY, MAX_BULLETS};

/// Maximum hit events one resolution pass can produce.
pub const MAX_HITS_PER_FRAME: usize = MAX_BULLETS * 2;

/// A live bullet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bullet {
    pub side: Side,
    pub rect: Rect,
}

impl Bullet {
    pub fn new(side: Side, rect: Rect) -> Self {
        Self { side, rect }
    }

    /// Move one frame along the owner's firing direction.
    pub fn advance(&mut self) {
        self.rect = self.rect.translated(BULLET_VELOCITY * self.side.direction(), 0);
    }
}

/// What happened to a bullet during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolution {
    Flying,
    Hit,
    Exited,
}

/// Live bullets of both sides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bullets {
    lists: [ArrayVec<Bullet, MAX_BULLETS>; 2],
}

impl Bullets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, side: Side) -> usize {
        self.lists[side.index()].len()
    }

    pub fn get(&self, side: Side) -> &[Bullet] {
        &self.lists[side.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(|l| l.is_empty())
    }

    /// Spawn a bullet at `ship`'s muzzle if its side is under the cap.
    ///
    /// Returns true if a bullet was created.
    pub fn try_fire(&mut self, ship: &Ship) -> bool {
        let list = &mut self.lists[ship.side.index()];
        list.try_push(Bullet::new(ship.side, ship.muzzle())).is_ok()
    }

    /// Advance every bullet one frame and resolve it against the opposing ship.
    ///
    /// Red bullets resolve before yellow ones. A bullet that overlaps the
    /// opponent produces one `Hit` for that opponent and is removed; otherwise
    /// it is removed silently once it has left the arena. Collision is checked
    /// first, so a bullet is never both a hit and an exit.
    pub fn resolve(&mut self, ships: &[Ship; 2]) -> ArrayVec<GameEvent, MAX_HITS_PER_FRAME> {
        let mut hits = ArrayVec::new();

        for side in Side::ALL {
            let target = ships[side.opponent().index()].rect;
            self.lists[side.index()].retain(|bullet| {
                bullet.advance();
                match resolve_one(bullet, &target) {
                    Resolution::Flying => true,
                    Resolution::Hit => {
                        hits.push(GameEvent::Hit {
                            side: side.opponent(),
                        });
                        false
                    }
                    Resolution::Exited => false,
                }
            });
        }

        hits
    }

    pub fn clear(&mut self) {
        for list in &mut self.lists {
            list.clear();
        }
    }
}

fn resolve_one(bullet: &Bullet, target: &Rect) -> Resolution {
    if target.collides(&bullet.rect) {
        Resolution::Hit
    } else if has_exited(bullet.side, &bullet.rect) {
        Resolution::Exited
    } else {
        Resolution::Flying
    }
}
