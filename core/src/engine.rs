use serde::{Deserialize, Serialize};

use crate::*;

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Won => "You Win",
            Self::Lost => "You Lose",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a color choice.
    Idle,
    /// Repainting the flooded region, `wave` is the next band to paint.
    Waterfalling { wave: usize },
    Ended(Outcome),
}

impl Phase {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_waterfalling(self) -> bool {
        matches!(self, Self::Waterfalling { .. })
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Ended(_))
    }

    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Per-game counters and the current phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    flood_color: Rgb,
    clicks: CellCount,
    max_clicks: CellCount,
    phase: Phase,
}

impl Session {
    fn new(grid: &Grid, max_clicks: CellCount) -> Self {
        let phase = if grid.is_fully_flooded() {
            Phase::Ended(Outcome::Won)
        } else {
            Phase::Idle
        };
        Self {
            flood_color: grid.origin_color(),
            clicks: 0,
            max_clicks,
            phase,
        }
    }

    pub fn flood_color(&self) -> Rgb {
        self.flood_color
    }

    pub fn clicks(&self) -> CellCount {
        self.clicks
    }

    pub fn max_clicks(&self) -> CellCount {
        self.max_clicks
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
}

/// Why a click left the game untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    Outside,
    SameColor,
    Waterfalling,
    Finished,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored(IgnoreReason),
    /// The flood color changed, `absorbed` cells joined the flooded region.
    Flooding { absorbed: CellCount },
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Flooding { .. })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    NoChange,
    /// Painted wave `wave`, more waves follow.
    Advanced { wave: usize },
    /// Painted the last wave, waiting for the next click.
    Settled,
    Won,
    Lost,
}

impl TickOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Input delivered by the driving event loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Tick,
    Click(BoardHit),
    Key(char),
    Restart,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Tick(TickOutcome),
    Click(ClickOutcome),
    Restarted,
    Ignored,
}

impl EventOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Tick(outcome) => outcome.has_update(),
            Self::Click(outcome) => outcome.has_update(),
            Self::Restarted => true,
            Self::Ignored => false,
        }
    }
}

/// A game of Flood-It: board, animation order and session, rebuilt together on restart.
#[derive(Clone, Debug)]
pub struct FloodGame<S> {
    config: GameConfig,
    source: S,
    grid: Grid,
    waves: WaveOrder,
    session: Session,
}

impl<S: ColorSource> FloodGame<S> {
    pub fn new(config: GameConfig, mut source: S) -> Result<Self> {
        let config = config.validate()?;
        let grid = Grid::build(config, &mut source)?;
        let session = Session::new(&grid, config.max_clicks());
        Ok(Self {
            config,
            source,
            waves: WaveOrder::new(config.side),
            grid,
            session,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn waves(&self) -> &WaveOrder {
        &self.waves
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn is_finished(&self) -> bool {
        self.session.phase.is_finished()
    }

    pub fn flood_color(&self) -> Rgb {
        self.session.flood_color
    }

    pub fn clicks(&self) -> CellCount {
        self.session.clicks
    }

    pub fn max_clicks(&self) -> CellCount {
        self.session.max_clicks
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_game(self)
    }

    pub fn handle(&mut self, event: GameEvent) -> Result<EventOutcome> {
        Ok(match event {
            GameEvent::Tick => EventOutcome::Tick(self.tick()),
            GameEvent::Click(hit) => EventOutcome::Click(self.click(hit)),
            GameEvent::Key('r') | GameEvent::Restart => {
                self.restart()?;
                EventOutcome::Restarted
            }
            GameEvent::Key(key) => {
                log::trace!("Ignoring key {:?}", key);
                EventOutcome::Ignored
            }
        })
    }

    /// Chooses the color of the clicked cell as the new flood color.
    pub fn click(&mut self, hit: impl Into<BoardHit>) -> ClickOutcome {
        use ClickOutcome::*;
        use IgnoreReason::*;

        match self.session.phase {
            Phase::Idle => {}
            Phase::Waterfalling { .. } => return Ignored(Waterfalling),
            Phase::Ended(_) => return Ignored(Finished),
        }

        let Some(coords) = hit.into().coords() else {
            return Ignored(Outside);
        };
        let Ok(cell) = self.grid.cell(coords) else {
            return Ignored(Outside);
        };

        let color = cell.color();
        if color == self.session.flood_color {
            return Ignored(SameColor);
        }

        let absorbed = absorb_neighbors(&mut self.grid, color);
        self.session.flood_color = color;
        self.session.clicks = self.session.clicks.saturating_add(1);
        self.session.phase = Phase::Waterfalling { wave: 0 };
        log::debug!(
            "Click {}/{} at {:?} floods with {:?}, absorbed {} cells",
            self.session.clicks,
            self.session.max_clicks,
            coords,
            color,
            absorbed
        );

        Flooding { absorbed }
    }

    /// Paints the next wave of the waterfall, settling the game after the last one.
    pub fn tick(&mut self) -> TickOutcome {
        let Phase::Waterfalling { wave } = self.session.phase else {
            return TickOutcome::NoChange;
        };

        if let Some(band) = self.waves.wave(wave) {
            let painted = recolor_wave(&mut self.grid, band, self.session.flood_color);
            log::trace!("Wave {} painted {} cells", wave, painted);
        }

        if wave + 1 < self.waves.len() {
            self.session.phase = Phase::Waterfalling { wave: wave + 1 };
            TickOutcome::Advanced { wave }
        } else {
            self.settle()
        }
    }

    fn settle(&mut self) -> TickOutcome {
        // a board flooded on the last allowed click is a win
        if self.grid.is_fully_flooded() {
            self.end_game(Outcome::Won);
            TickOutcome::Won
        } else if self.session.clicks >= self.session.max_clicks {
            self.end_game(Outcome::Lost);
            TickOutcome::Lost
        } else {
            self.session.phase = Phase::Idle;
            TickOutcome::Settled
        }
    }

    fn end_game(&mut self, outcome: Outcome) {
        if self.session.phase.is_finished() {
            return;
        }

        log::info!(
            "{} after {}/{} clicks",
            outcome.message(),
            self.session.clicks,
            self.session.max_clicks
        );
        self.session.phase = Phase::Ended(outcome);
    }

    /// Deals a fresh board and resets the counters, whatever the current phase.
    pub fn restart(&mut self) -> Result<()> {
        let grid = Grid::build(self.config, &mut self.source)?;
        self.session = Session::new(&grid, self.config.max_clicks());
        self.waves = WaveOrder::new(self.config.side);
        self.grid = grid;
        log::debug!("Restarted {0}x{0} game", self.config.side);
        Ok(())
    }
}
