//! Text presentation of a rover on its plateau.
//!
//! Not used by the simulation itself.

use crate::plateau::Plateau;
use crate::rover::{Direction, RoverState};

/// Arrow glyph for a heading.
pub fn glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::North => "⬆",
        Direction::East => "➡",
        Direction::South => "⬇",
        Direction::West => "⬅",
    }
}

/// Draws the plateau top row first. Each cell shows `x,y`, except the
/// rover's cell, which shows its heading glyph. Cells are separated by `|`.
pub fn render_plateau(plateau: &Plateau, rover: &RoverState) -> String {
    let mut out = String::new();
    for cell in plateau.cells() {
        if cell.x > 0 {
            out.push('|');
        } else if !out.is_empty() {
            out.push('\n');
        }
        if cell == rover.position {
            out.push_str(glyph(rover.heading));
        } else {
            out.push_str(&format!("{},{}", cell.x, cell.y));
        }
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}
