use std::fmt::Write;

use floodit_core::{Rgb, Snapshot};

const RESET: &str = "\x1b[0m";

fn paint(out: &mut String, color: Rgb) {
    let _ = write!(
        out,
        "\x1b[48;2;{};{};{}m  ",
        color.r(),
        color.g(),
        color.b()
    );
}

/// Draws the board as truecolor blocks with row and column labels, followed by the counter and
/// the end message.
pub fn draw(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    out.push_str("   ");
    for col in 0..snapshot.side {
        let _ = write!(out, "{:>2}", col % 100);
    }
    out.push('\n');

    for (row, cells) in snapshot.cells.rows().into_iter().enumerate() {
        let _ = write!(out, "{:>2} ", row);
        for &color in cells {
            paint(&mut out, color);
        }
        out.push_str(RESET);
        out.push('\n');
    }

    let _ = writeln!(out, "{}", snapshot.counter());
    if let Some(message) = snapshot.message {
        let _ = writeln!(out, "{}", message);
    }
    out
}

/// Escape sequence that moves the cursor back over a previously drawn frame.
pub fn rewind(snapshot: &Snapshot) -> String {
    // header and one line per row, plus the counter
    format!("\x1b[{}A", usize::from(snapshot.side) + 2)
}
