//! World/level counters with full wraparound in both directions.

use tui_platformer_types::{LEVELS_PER_WORLD, TOTAL_WORLDS};

/// Position in the fixed 9x5 level grid. Both counters are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progression {
    pub world: u32,
    pub level: u32,
}

impl Progression {
    pub fn new() -> Self {
        Self { world: 1, level: 1 }
    }

    /// Step forward one level; past the last world wraps to 1-1.
    pub fn advance(&mut self) {
        if self.level < LEVELS_PER_WORLD {
            self.level += 1;
        } else {
            self.level = 1;
            self.world = if self.world < TOTAL_WORLDS {
                self.world + 1
            } else {
                1
            };
        }
    }

    /// Step backward one level; before 1-1 wraps to the last level of
    /// the last world.
    pub fn retreat(&mut self) {
        if self.level > 1 {
            self.level -= 1;
        } else {
            self.level = LEVELS_PER_WORLD;
            self.world = if self.world > 1 {
                self.world - 1
            } else {
                TOTAL_WORLDS
            };
        }
    }

    /// 1-based position in the flattened grid, 1..=45. Drives the HUD
    /// progress readout.
    pub fn global_index(&self) -> u32 {
        (self.world - 1) * LEVELS_PER_WORLD + self.level
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new()
    }
}
