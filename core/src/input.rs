use serde::{Deserialize, Serialize};

use crate::*;

/// Where a pointer press landed relative to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardHit {
    Cell(Coord2),
    Outside,
}

impl BoardHit {
    pub const fn coords(self) -> Option<Coord2> {
        match self {
            Self::Cell(coords) => Some(coords),
            Self::Outside => None,
        }
    }
}

impl From<Coord2> for BoardHit {
    fn from(coords: Coord2) -> Self {
        Self::Cell(coords)
    }
}

/// Placement of the board inside the window, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardLayout {
    pub cell_size: u32,
    /// Window point the board is centered on, `(x, y)`.
    pub center: (i32, i32),
}

impl BoardLayout {
    pub const DEFAULT_CELL_SIZE: u32 = 25;
    pub const DEFAULT_CENTER: (i32, i32) = (250, 250);

    pub const fn new(cell_size: u32, center: (i32, i32)) -> Self {
        Self { cell_size, center }
    }

    fn half_extent(&self, side: Coord) -> i64 {
        i64::from(self.cell_size) * i64::from(side) / 2
    }

    /// Top-left corner of the board in window pixels.
    pub fn origin(&self, side: Coord) -> (i64, i64) {
        let half = self.half_extent(side);
        (
            i64::from(self.center.0) - half,
            i64::from(self.center.1) - half,
        )
    }

    /// Maps a window point to the cell under it. The board edges themselves count as outside.
    pub fn locate(&self, side: Coord, (x, y): (i32, i32)) -> BoardHit {
        if self.cell_size == 0 {
            return BoardHit::Outside;
        }

        let half = self.half_extent(side);
        let (x, y) = (i64::from(x), i64::from(y));
        let (center_x, center_y) = (i64::from(self.center.0), i64::from(self.center.1));
        let inside = x > center_x - half
            && x < center_x + half
            && y > center_y - half
            && y < center_y + half;
        if !inside {
            return BoardHit::Outside;
        }

        let (origin_x, origin_y) = self.origin(side);
        let cell = i64::from(self.cell_size);
        let row = Coord::try_from((y - origin_y) / cell);
        let col = Coord::try_from((x - origin_x) / cell);
        match (row, col) {
            (Ok(row), Ok(col)) if row < side && col < side => BoardHit::Cell((row, col)),
            _ => BoardHit::Outside,
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELL_SIZE, Self::DEFAULT_CENTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_cells_of_small_board() {
        let layout = BoardLayout::default();

        assert_eq!(layout.locate(2, (250, 250)), BoardHit::Cell((1, 1)));
        assert_eq!(layout.locate(2, (230, 260)), BoardHit::Cell((1, 0)));
        assert_eq!(layout.locate(2, (260, 230)), BoardHit::Cell((0, 1)));
        assert_eq!(layout.locate(2, (226, 226)), BoardHit::Cell((0, 0)));
    }

    #[test]
    fn odd_board_sides_round_half_extent_down() {
        let layout = BoardLayout::default();

        // board spans (213, 287) exclusive on both axes
        assert_eq!(layout.origin(3), (213, 213));
        assert_eq!(layout.locate(3, (214, 286)), BoardHit::Cell((2, 0)));
        assert_eq!(layout.locate(3, (213, 250)), BoardHit::Outside);
        assert_eq!(layout.locate(3, (287, 250)), BoardHit::Outside);
    }

    #[test]
    fn edges_and_far_points_are_outside() {
        let layout = BoardLayout::default();

        assert_eq!(layout.locate(2, (225, 240)), BoardHit::Outside);
        assert_eq!(layout.locate(2, (275, 240)), BoardHit::Outside);
        assert_eq!(layout.locate(2, (0, 0)), BoardHit::Outside);
        assert_eq!(layout.locate(2, (-40, 900)), BoardHit::Outside);
    }

    #[test]
    fn custom_layout_uses_its_own_cell_size() {
        let layout = BoardLayout::new(10, (50, 50));

        assert_eq!(layout.locate(4, (31, 69)), BoardHit::Cell((3, 0)));
        assert_eq!(layout.locate(4, (45, 31)), BoardHit::Cell((0, 1)));
        assert_eq!(layout.locate(4, (31, 70)), BoardHit::Outside);
    }
}
