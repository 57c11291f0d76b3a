use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// One square of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    color: Rgb,
    flooded: bool,
}

impl Cell {
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            flooded: false,
        }
    }

    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn is_flooded(&self) -> bool {
        self.flooded
    }

    /// Joins the flooded region. There is no way back short of a new board.
    pub(crate) fn flood(&mut self) -> bool {
        let changed = !self.flooded;
        self.flooded = true;
        changed
    }

    pub(crate) fn paint(&mut self, color: Rgb) {
        self.color = color;
    }
}

/// Square board of cells, addressed by `(row, column)`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Deals a fresh board from `source` and floods the region already matching the top-left cell.
    pub fn build<S: ColorSource>(config: GameConfig, source: &mut S) -> Result<Self> {
        let side = usize::from(config.side);
        if side == 0 {
            return Err(GameError::InvalidSize);
        }

        let palette = source.palette(config.colors);
        if palette.is_empty() {
            return Err(GameError::NoColors);
        }

        let cells = Array2::from_shape_simple_fn((side, side), || Cell::new(source.pick(&palette)));
        log::debug!(
            "Built {0}x{0} board from {1} colors",
            config.side,
            palette.len()
        );
        Ok(Self::seeded(cells))
    }

    /// Builds a board from explicit colors listed row by row.
    pub fn from_colors(side: Coord, colors: &[Rgb]) -> Result<Self> {
        if side == 0 {
            return Err(GameError::InvalidSize);
        }

        let side = usize::from(side);
        let cells: Vec<Cell> = colors.iter().copied().map(Cell::new).collect();
        let cells = Array2::from_shape_vec((side, side), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self::seeded(cells))
    }

    fn seeded(mut cells: Array2<Cell>) -> Self {
        cells[[0, 0]].flood();
        let seed_color = cells[[0, 0]].color;

        let mut grid = Self { cells };
        let absorbed = absorb_neighbors(&mut grid, seed_color);
        if grid.is_fully_flooded() {
            log::warn!("Board is a single region from the start");
        } else {
            log::trace!("Seed region absorbed {} cells", absorbed);
        }
        grid
    }

    pub fn side(&self) -> Coord {
        self.cells.nrows().try_into().unwrap_or(Coord::MAX)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.side(), self.side())
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let side = self.side();
        if coords.0 < side && coords.1 < side {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Result<&Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(&self.cells[coords.to_nd_index()])
    }

    pub fn color_at(&self, coords: Coord2) -> Rgb {
        self[coords].color
    }

    pub fn is_flooded(&self, coords: Coord2) -> bool {
        self[coords].flooded
    }

    /// Color of the top-left cell, where the flooded region is anchored.
    pub fn origin_color(&self) -> Rgb {
        self.cells[[0, 0]].color
    }

    pub fn neighbor(&self, coords: Coord2, direction: Direction) -> Option<Coord2> {
        direction.step(coords, (self.side(), self.side()))
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Coord2> + use<> {
        let side = self.side();
        (0..side).flat_map(move |row| (0..side).map(move |col| (row, col)))
    }

    pub fn flooded_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.flooded)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn is_fully_flooded(&self) -> bool {
        self.cells.iter().all(|cell| cell.flooded)
    }

    pub fn colors(&self) -> Array2<Rgb> {
        self.cells.map(|cell| cell.color)
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const A: Rgb = Rgb(207, 235, 55);
    const B: Rgb = Rgb(187, 232, 235);
    const C: Rgb = Rgb(173, 72, 20);

    fn flooded_positions(grid: &Grid) -> Vec<Coord2> {
        grid.positions().filter(|&pos| grid.is_flooded(pos)).collect()
    }

    #[test]
    fn only_origin_is_flooded_without_matching_neighbors() {
        let grid = Grid::from_colors(2, &[A, B, C, C]).unwrap();

        assert_eq!(flooded_positions(&grid), [(0, 0)]);
        assert_eq!(grid.origin_color(), A);
    }

    #[test]
    fn seed_absorbs_same_colored_neighbors() {
        let grid = Grid::from_colors(3, &[A, A, B, A, C, B, C, B, C]).unwrap();

        assert_eq!(flooded_positions(&grid), [(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn single_color_board_starts_fully_flooded() {
        let grid = Grid::from_colors(3, &[B; 9]).unwrap();

        assert!(grid.is_fully_flooded());
        assert_eq!(grid.flooded_count(), 9);
    }

    #[test]
    fn neighbors_are_none_at_edges() {
        let grid = Grid::from_colors(2, &[A, B, C, C]).unwrap();

        assert_eq!(grid.neighbor((0, 0), Direction::Up), None);
        assert_eq!(grid.neighbor((0, 0), Direction::Left), None);
        assert_eq!(grid.neighbor((0, 0), Direction::Right), Some((0, 1)));
        assert_eq!(grid.neighbor((0, 0), Direction::Down), Some((1, 0)));
        assert_eq!(grid.neighbor((1, 1), Direction::Down), None);
        assert_eq!(grid.neighbor((1, 1), Direction::Right), None);
    }

    #[test]
    fn rejects_bad_shapes() {
        assert_eq!(Grid::from_colors(0, &[]), Err(GameError::InvalidSize));
        assert_eq!(
            Grid::from_colors(2, &[A, B, C]),
            Err(GameError::InvalidBoardShape)
        );
    }

    #[test]
    fn checked_lookup_rejects_outside_coords() {
        let grid = Grid::from_colors(2, &[A, B, C, C]).unwrap();

        assert_eq!(grid.cell((1, 0)).map(Cell::color), Ok(C));
        assert_eq!(grid.cell((2, 0)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn build_uses_color_source() {
        let mut source = FixedColorSource::new(vec![A, B, C, C]);
        let config = GameConfig::new(2, 3).unwrap();

        let grid = Grid::build(config, &mut source).unwrap();

        assert_eq!(grid.color_at((0, 1)), B);
        assert_eq!(grid.color_at((1, 1)), C);
    }

    #[test]
    fn build_rejects_empty_palette() {
        let mut source = FixedColorSource::new(vec![]);
        let config = GameConfig::new_unchecked(2, 0);

        assert_eq!(
            Grid::build(config, &mut source),
            Err(GameError::NoColors)
        );
    }
}
