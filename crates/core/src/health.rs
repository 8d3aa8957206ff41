//! Health and outcome tracking

use crate::types::{Side, STARTING_HEALTH};

/// Health counters for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Health {
    values: [u8; 2],
}

impl Default for Health {
    fn default() -> Self {
        Self::new()
    }
}

impl Health {
    pub fn new() -> Self {
        Self {
            values: [STARTING_HEALTH; 2],
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        self.values[side.index()]
    }

    pub fn values(&self) -> [u8; 2] {
        self.values
    }

    /// Take one point from `side`. Saturates at zero.
    pub fn apply_hit(&mut self, side: Side) {
        let v = &mut self.values[side.index()];
        *v = v.saturating_sub(1);
    }

    /// The side that has won, if any.
    ///
    /// Red is checked first: when both sides are at zero the round goes to
    /// yellow.
    pub fn winner(&self) -> Option<Side> {
        if self.get(Side::Red) == 0 {
            Some(Side::Yellow)
        } else if self.get(Side::Yellow) == 0 {
            Some(Side::Red)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.values = [STARTING_HEALTH; 2];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_hits_knock_out_a_side() {
        let mut h = Health::new();
        for n in 1..=STARTING_HEALTH {
            assert_eq!(h.winner(), None);
            h.apply_hit(Side::Yellow);
            assert_eq!(h.get(Side::Yellow), STARTING_HEALTH - n);
        }
        assert_eq!(h.winner(), Some(Side::Red));
        assert_eq!(h.get(Side::Red), STARTING_HEALTH);
    }

    #[test]
    fn health_never_goes_negative() {
        let mut h = Health::new();
        for _ in 0..50 {
            h.apply_hit(Side::Red);
        }
        assert_eq!(h.get(Side::Red), 0);
        assert_eq!(h.winner(), Some(Side::Yellow));
    }

    #[test]
    fn double_knockout_goes_to_yellow() {
        let mut h = Health::new();
        for _ in 0..STARTING_HEALTH {
            h.apply_hit(Side::Red);
            h.apply_hit(Side::Yellow);
        }
        assert_eq!(h.winner(), Some(Side::Yellow));
    }

    #[test]
    fn reset_restores_both_sides() {
        let mut h = Health::new();
        h.apply_hit(Side::Red);
        h.apply_hit(Side::Yellow);
        h.reset();
        assert_eq!(h.values(), [STARTING_HEALTH; 2]);
    }
}
