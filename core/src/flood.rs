use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Sweeps the board once in row-major order and floods every neighbor of a flooded cell that
/// currently shows `target`.
///
/// Cells flooded earlier in the sweep act as sources once the sweep reaches them, so a region
/// extending right or down from the flooded area is absorbed in one call. A region that can only be
/// reached against the sweep direction waits for a later call; this is not a fill to fixation.
///
/// Returns the number of newly flooded cells.
pub fn absorb_neighbors(grid: &mut Grid, target: Rgb) -> CellCount {
    let mut absorbed: CellCount = 0;

    for coords in grid.positions() {
        if !grid[coords].is_flooded() {
            continue;
        }

        for neighbor in grid.iter_neighbors(coords) {
            if grid[neighbor].color() == target && grid.cell_mut(neighbor).flood() {
                absorbed += 1;
            }
        }
    }

    absorbed
}

/// Paints every flooded cell of `wave` with `color`, returns how many cells changed color.
pub fn recolor_wave(grid: &mut Grid, wave: &[Coord2], color: Rgb) -> usize {
    let mut painted = 0;
    for &coords in wave {
        let cell = grid.cell_mut(coords);
        if cell.is_flooded() && cell.color() != color {
            cell.paint(color);
            painted += 1;
        }
    }
    painted
}

/// Fixed order in which the waterfall animation repaints the board.
///
/// Wave `i` holds the L-shaped band of cells at distance `i` from the top-left corner:
/// `(i, 0), (0, i), (i, 1), (1, i), ..., (i, i)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveOrder {
    waves: Vec<Vec<Coord2>>,
}

impl WaveOrder {
    pub fn new(side: Coord) -> Self {
        let waves = (0..side)
            .map(|i| {
                let mut band = Vec::with_capacity(2 * usize::from(i) + 1);
                for j in 0..i {
                    band.push((i, j));
                    band.push((j, i));
                }
                band.push((i, i));
                band
            })
            .collect();
        Self { waves }
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    pub fn wave(&self, index: usize) -> Option<&[Coord2]> {
        self.waves.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Coord2]> {
        self.waves.iter().map(Vec::as_slice)
    }
}
