use alloc::format;
use alloc::string::String;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Read-only view of a game handed to whatever draws it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub side: Coord,
    pub cells: Array2<Rgb>,
    pub flood_color: Rgb,
    pub clicks: CellCount,
    pub max_clicks: CellCount,
    pub phase: Phase,
    pub message: Option<&'static str>,
}

impl Snapshot {
    pub fn from_game<S: ColorSource>(game: &FloodGame<S>) -> Self {
        let session = game.session();
        Self {
            side: game.grid().side(),
            cells: game.grid().colors(),
            flood_color: session.flood_color(),
            clicks: session.clicks(),
            max_clicks: session.max_clicks(),
            phase: session.phase(),
            message: session.phase().outcome().map(Outcome::message),
        }
    }

    pub fn color_at(&self, coords: Coord2) -> Rgb {
        self.cells[coords.to_nd_index()]
    }

    /// Click counter as shown under the board, e.g. `3/20`.
    pub fn counter(&self) -> String {
        format!("{}/{}", self.clicks, self.max_clicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const A: Rgb = Rgb(207, 235, 55);
    const B: Rgb = Rgb(187, 232, 235);
    const C: Rgb = Rgb(173, 72, 20);

    #[test]
    fn snapshot_reflects_game_state() {
        let config = GameConfig::new(2, 3).unwrap();
        let mut game = FloodGame::new(config, FixedColorSource::new(vec![A, B, C, C])).unwrap();
        game.click((1, 0));
        game.tick();

        let snapshot = game.snapshot();

        assert_eq!(snapshot.side, 2);
        assert_eq!(snapshot.color_at((0, 0)), C);
        assert_eq!(snapshot.color_at((0, 1)), B);
        assert_eq!(snapshot.flood_color, C);
        assert_eq!(snapshot.phase, Phase::Waterfalling { wave: 1 });
        assert_eq!(snapshot.counter(), "1/11");
        assert_eq!(snapshot.message, None);
    }

    #[test]
    fn snapshot_serializes_for_drivers() {
        let config = GameConfig::new(1, 1).unwrap();
        let game = FloodGame::new(config, FixedColorSource::new(vec![B])).unwrap();

        let json = serde_json::to_value(game.snapshot()).unwrap();

        assert_eq!(json["side"], 1);
        assert_eq!(json["message"], "You Win");
        assert_eq!(json["phase"]["Ended"], "Won");
        assert_eq!(json["flood_color"], serde_json::json!([187, 232, 235]));
    }
}
