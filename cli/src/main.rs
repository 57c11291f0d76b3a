//! Play Flood-It in the terminal.
//!
//! Reads one command per line from standard input and drives the game engine: every accepted
//! click is followed by ticks until the waterfall animation settles.

mod command;
mod render;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use floodit_core::{
    BoardLayout, ClickOutcome, ColorSource, EventOutcome, FloodGame, GameConfig, GameEvent,
    IgnoreReason, RandomColorSource,
};

use crate::command::Command;

/// Flood the board from the top-left corner before running out of clicks.
#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    /// Number of cells on each side of the square board
    #[arg(short, long, default_value_t = 14, value_parser = clap::value_parser!(u8).range(1..))]
    size: u8,

    /// Number of colors dealt on the board
    #[arg(short, long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(1..))]
    colors: u8,

    /// Seed for the color generator, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Override the click budget (still kept within 5..=100)
    #[arg(long)]
    max_clicks: Option<u16>,

    /// Delay between animation frames in milliseconds, 0 draws only settled boards
    #[arg(long, default_value_t = 40)]
    frame_ms: u64,

    /// Print a JSON snapshot after every move instead of drawing the board
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: Verbosity,
}

struct Driver<S, W> {
    game: FloodGame<S>,
    layout: BoardLayout,
    frame: Duration,
    json: bool,
    out: W,
}

impl<S: ColorSource, W: Write> Driver<S, W> {
    fn show(&mut self) -> Result<()> {
        let snapshot = self.game.snapshot();
        if self.json {
            serde_json::to_writer(&mut self.out, &snapshot)?;
            writeln!(self.out)?;
        } else {
            write!(self.out, "{}", render::draw(&snapshot))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn animate(&mut self) -> Result<()> {
        let animated = !self.json && !self.frame.is_zero();
        let mut drawn = false;
        while self.game.phase().is_waterfalling() {
            self.game.handle(GameEvent::Tick)?;
            if animated && self.game.phase().is_waterfalling() {
                let snapshot = self.game.snapshot();
                if drawn {
                    write!(self.out, "{}", render::rewind(&snapshot))?;
                }
                write!(self.out, "{}", render::draw(&snapshot))?;
                self.out.flush()?;
                thread::sleep(self.frame);
                drawn = true;
            }
        }
        if drawn {
            write!(self.out, "{}", render::rewind(&self.game.snapshot()))?;
        }
        self.show()
    }

    /// Runs one command, returns `false` when the player wants to stop.
    fn run(&mut self, command: Command) -> Result<bool> {
        let side = self.game.config().side;
        let Some(event) = command.to_event(side, &self.layout) else {
            match command {
                Command::Quit => return Ok(false),
                _ => writeln!(self.out, "{}", Command::HELP)?,
            }
            return Ok(true);
        };

        match self.game.handle(event)? {
            EventOutcome::Click(ClickOutcome::Flooding { .. }) => self.animate()?,
            EventOutcome::Click(ClickOutcome::Ignored(reason)) => {
                let why = match reason {
                    IgnoreReason::Outside => "outside the board",
                    IgnoreReason::SameColor => "already the flood color",
                    IgnoreReason::Waterfalling => "still flooding",
                    IgnoreReason::Finished => "game over, `r` to restart",
                };
                log::debug!("Ignored {:?}: {}", command, why);
                writeln!(self.out, "({})", why)?;
            }
            EventOutcome::Restarted => self.show()?,
            EventOutcome::Tick(_) | EventOutcome::Ignored => {}
        }
        Ok(true)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("system clock is before the Unix epoch")?
            .as_secs(),
    };
    log::info!("Using seed {}", seed);

    let mut config = GameConfig::new(args.size, args.colors)?;
    if let Some(budget) = args.max_clicks {
        config = config.with_click_budget(budget);
    }
    let game = FloodGame::new(config, RandomColorSource::new(seed))
        .context("cannot set up the board")?;

    let mut driver = Driver {
        game,
        layout: BoardLayout::default(),
        frame: Duration::from_millis(args.frame_ms),
        json: args.json,
        out: io::stdout().lock(),
    };
    driver.show()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("cannot read command")?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => {
                if !driver.run(command)? {
                    break;
                }
            }
            Err(err) => writeln!(driver.out, "{}", err)?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodit_core::{FixedColorSource, Outcome, Phase, Rgb};

    fn driver(seed: u64, json: bool) -> Driver<RandomColorSource, Vec<u8>> {
        let config = GameConfig::new(3, 3).unwrap();
        Driver {
            game: FloodGame::new(config, RandomColorSource::new(seed)).unwrap(),
            layout: BoardLayout::default(),
            frame: Duration::ZERO,
            json,
            out: Vec::new(),
        }
    }

    #[test]
    fn quit_stops_and_help_continues() {
        let mut driver = driver(1, false);

        assert!(driver.run(Command::Help).unwrap());
        assert!(String::from_utf8_lossy(&driver.out).contains("commands:"));
        assert!(!driver.run(Command::Quit).unwrap());
    }

    #[test]
    fn clicks_run_the_waterfall_to_completion() {
        let mut driver = driver(3, true);
        let grid = driver.game.grid();
        let target = grid
            .positions()
            .find(|&pos| grid.color_at(pos) != driver.game.flood_color())
            .unwrap();

        let (row, col) = target;
        assert!(driver.run(Command::Cell(row.into(), col.into())).unwrap());

        assert_eq!(driver.game.clicks(), 1);
        assert!(!driver.game.phase().is_waterfalling());
        let output = String::from_utf8(driver.out).unwrap();
        let last: serde_json::Value = serde_json::from_str(output.lines().last().unwrap()).unwrap();
        assert_eq!(last["clicks"], 1);
    }

    #[test]
    fn restart_after_loss_starts_over() {
        let (a, b, c, d) = (Rgb(1, 1, 1), Rgb(2, 2, 2), Rgb(3, 3, 3), Rgb(4, 4, 4));
        let config = GameConfig::new(3, 4).unwrap().with_click_budget(5);
        let source = FixedColorSource::new(vec![a, b, c, b, b, c, c, c, d]);
        let mut driver = Driver {
            game: FloodGame::new(config, source).unwrap(),
            layout: BoardLayout::default(),
            frame: Duration::ZERO,
            json: false,
            out: Vec::new(),
        };

        // C and D never touch the walled-in corner
        for (row, col) in [(0, 2), (2, 2), (0, 2), (2, 2), (0, 2)] {
            assert!(driver.run(Command::Cell(row, col)).unwrap());
        }
        assert_eq!(driver.game.phase(), Phase::Ended(Outcome::Lost));
        assert!(String::from_utf8_lossy(&driver.out).contains("You Lose"));

        assert!(driver.run(Command::Restart).unwrap());
        assert_eq!(driver.game.phase(), Phase::Idle);
        assert_eq!(driver.game.clicks(), 0);
    }
}
