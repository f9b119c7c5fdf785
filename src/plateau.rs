//! The rectangular plateau a rover drives on.

use crate::rover::Position;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A `width × height` grid of cells.
///
/// The valid region is half-open: `0 <= x < width` and `0 <= y < height`.
/// A plateau with either extent at zero contains no cells at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Plateau {
    pub width: u32,
    pub height: u32,
}

impl Plateau {
    /// Creates a plateau. Any extent is accepted, zero included.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true iff `position` lies on the plateau. Total over all of `i32`.
    pub fn contains(&self, position: Position) -> bool {
        let (x, y) = (i64::from(position.x), i64::from(position.y));
        (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y)
    }

    /// Number of cells.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Every cell, top row first, each row left to right.
    ///
    /// Cells beyond `i32::MAX` on either axis have no [`Position`] and are
    /// not yielded.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        let columns = last_index(self.width);
        let rows = last_index(self.height);
        rows.into_iter()
            .flat_map(|max_y| (0..=max_y).rev())
            .flat_map(move |y| {
                columns
                    .into_iter()
                    .flat_map(|max_x| 0..=max_x)
                    .map(move |x| IVec2::new(x, y))
            })
    }
}

/// Largest coordinate on an axis of `extent` cells, saturated to `i32::MAX`.
fn last_index(extent: u32) -> Option<i32> {
    extent
        .checked_sub(1)
        .map(|last| i32::try_from(last).unwrap_or(i32::MAX))
}
