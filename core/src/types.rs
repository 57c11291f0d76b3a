use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for the board side and positions.
pub type Coord = u8;

/// Count type used for cell counts and click counters.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Color triple as shown on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b)
    }

    pub const fn r(self) -> u8 {
        self.0
    }

    pub const fn g(self) -> u8 {
        self.1
    }

    pub const fn b(self) -> u8 {
        self.2
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self(r, g, b)
    }
}

/// The four orthogonal neighbor links of a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Applies this direction to `coords`, returning a value only when it remains in bounds.
    pub fn step(self, coords: Coord2, bounds: Coord2) -> Option<Coord2> {
        let (row, col) = coords;
        let (d_row, d_col) = self.delta();
        let (max_row, max_col) = bounds;

        let next_row = row.checked_add_signed(d_row)?;
        if next_row >= max_row {
            return None;
        }

        let next_col = col.checked_add_signed(d_col)?;
        if next_col >= max_col {
            return None;
        }

        Some((next_row, next_col))
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let size = (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, size)
    }
}

/// Iterates the orthogonal neighbors of a cell that exist on the board.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let direction = *Direction::ALL.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = direction.step(self.center, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn corner_has_two_neighbors() {
        let board: Array2<u8> = Array2::default((3, 3));

        let neighbors: Vec<_> = board.iter_neighbors((0, 0)).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0)]);
    }

    #[test]
    fn center_has_four_neighbors() {
        let board: Array2<u8> = Array2::default((3, 3));

        let neighbors: Vec<_> = board.iter_neighbors((1, 1)).collect();

        assert_eq!(neighbors, [(1, 0), (1, 2), (0, 1), (2, 1)]);
    }

    #[test]
    fn step_stops_at_edges() {
        assert_eq!(Direction::Up.step((0, 2), (3, 3)), None);
        assert_eq!(Direction::Right.step((1, 2), (3, 3)), None);
        assert_eq!(Direction::Down.step((1, 2), (3, 3)), Some((2, 2)));
        assert_eq!(Direction::Left.step((1, 2), (3, 3)), Some((1, 1)));
    }
}
