#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use flood::*;
pub use grid::*;
pub use input::*;
pub use palette::*;
pub use snapshot::*;
pub use types::*;

mod engine;
mod error;
mod flood;
mod grid;
mod input;
mod palette;
mod snapshot;
mod types;

/// Fewest clicks any board allows.
pub const MIN_CLICK_BUDGET: CellCount = 5;

/// Most clicks any board allows.
pub const MAX_CLICK_BUDGET: CellCount = 100;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub side: Coord,
    pub colors: u8,
    /// Replaces the budget derived from side and colors, still clamped to the allowed range.
    #[serde(default)]
    pub click_budget: Option<CellCount>,
}

impl GameConfig {
    pub const fn new_unchecked(side: Coord, colors: u8) -> Self {
        Self {
            side,
            colors,
            click_budget: None,
        }
    }

    pub fn new(side: Coord, colors: u8) -> Result<Self> {
        Self::new_unchecked(side, colors).validate()
    }

    pub fn validate(self) -> Result<Self> {
        if self.side == 0 {
            Err(GameError::InvalidSize)
        } else if self.colors == 0 {
            Err(GameError::NoColors)
        } else {
            Ok(self)
        }
    }

    pub const fn with_click_budget(mut self, budget: CellCount) -> Self {
        self.click_budget = Some(budget);
        self
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.side, self.side)
    }

    /// Clicks allowed before the game is lost.
    pub fn max_clicks(&self) -> CellCount {
        let derived = CellCount::from(self.side) + 2 * CellCount::from(self.colors) + 3;
        self.click_budget
            .unwrap_or(derived)
            .clamp(MIN_CLICK_BUDGET, MAX_CLICK_BUDGET)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(14, 6)
    }
}
