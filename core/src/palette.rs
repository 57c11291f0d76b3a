use alloc::vec::Vec;
use rand::prelude::*;

use crate::*;

/// Supplies colors for new boards.
pub trait ColorSource {
    /// Draws `count` colors, repeats allowed. Called once per board build.
    fn palette(&mut self, count: u8) -> Vec<Rgb>;

    /// Picks one color from `palette` for a single cell.
    fn pick(&mut self, palette: &[Rgb]) -> Rgb;
}

/// Uniformly random colors from a seeded generator, the same seed always deals the same boards.
#[derive(Clone, Debug)]
pub struct RandomColorSource {
    seed: u64,
    rng: SmallRng,
}

impl RandomColorSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ColorSource for RandomColorSource {
    fn palette(&mut self, count: u8) -> Vec<Rgb> {
        let palette: Vec<Rgb> = (0..count)
            .map(|_| Rgb(self.rng.random(), self.rng.random(), self.rng.random()))
            .collect();
        log::debug!("Drew palette of {} colors: {:?}", count, palette);
        palette
    }

    fn pick(&mut self, palette: &[Rgb]) -> Rgb {
        palette.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

/// Replays a fixed list of cell colors in row-major order, for hand-made boards.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedColorSource {
    cells: Vec<Rgb>,
    next: usize,
}

impl FixedColorSource {
    pub fn new(cells: Vec<Rgb>) -> Self {
        Self { cells, next: 0 }
    }
}

impl ColorSource for FixedColorSource {
    fn palette(&mut self, count: u8) -> Vec<Rgb> {
        self.next = 0;
        let mut palette = Vec::new();
        for &color in &self.cells {
            if palette.len() >= usize::from(count) {
                break;
            }
            if !palette.contains(&color) {
                palette.push(color);
            }
        }
        palette
    }

    fn pick(&mut self, palette: &[Rgb]) -> Rgb {
        let color = if self.cells.is_empty() {
            palette.first().copied().unwrap_or_default()
        } else {
            self.cells[self.next % self.cells.len()]
        };
        self.next += 1;
        color
    }
}
