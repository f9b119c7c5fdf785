//! Caller-side parsing and validation of textual plateau and rover input.
//!
//! The simulation core accepts any plateau and trusts its starting state.
//! Range policy lives here, in front of it.

use crate::error::InputError;
use crate::plateau::Plateau;
use crate::rover::{Direction, RoverState};
use serde::{Deserialize, Serialize};

/// Accepted plateau extents, inclusive on both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputPolicy {
    /// Smallest accepted width or height.
    pub min_extent: u32,
    /// Largest accepted width or height.
    pub max_extent: u32,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            min_extent: 1,
            max_extent: 10,
        }
    }
}

fn grid_error(reason: impl Into<String>) -> InputError {
    InputError::InvalidGridBounds {
        reason: reason.into(),
    }
}

fn state_error(reason: impl Into<String>) -> InputError {
    InputError::InvalidInitialState {
        reason: reason.into(),
    }
}

impl InputPolicy {
    /// Checks both extents against the policy and builds the plateau.
    pub fn plateau(&self, width: i64, height: i64) -> Result<Plateau, InputError> {
        let range = i64::from(self.min_extent)..=i64::from(self.max_extent);
        if !range.contains(&width) || !range.contains(&height) {
            return Err(grid_error(format!(
                "expected width and height between {} and {}, got {width}x{height}",
                self.min_extent, self.max_extent
            )));
        }
        // Both values are inside a u32 range at this point.
        Ok(Plateau::new(width as u32, height as u32))
    }

    /// Parses `"<width> <height>"`, e.g. `"5 5"`.
    pub fn parse_plateau(&self, line: &str) -> Result<Plateau, InputError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [width, height] = fields.as_slice() else {
            return Err(grid_error(format!(
                "expected two numbers separated by a space, got {line:?}"
            )));
        };
        let width = width
            .parse::<i64>()
            .map_err(|e| grid_error(format!("width {width:?}: {e}")))?;
        let height = height
            .parse::<i64>()
            .map_err(|e| grid_error(format!("height {height:?}: {e}")))?;
        self.plateau(width, height)
    }

    /// Parses `"<x> <y> <heading>"`, e.g. `"1 2 N"`, and checks that the
    /// rover starts on `plateau`.
    pub fn parse_rover(&self, line: &str, plateau: &Plateau) -> Result<RoverState, InputError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [x, y, heading] = fields.as_slice() else {
            return Err(state_error(format!(
                "expected x, y and a cardinal direction separated by spaces, got {line:?}"
            )));
        };
        let x = x
            .parse::<i32>()
            .map_err(|e| state_error(format!("x {x:?}: {e}")))?;
        let y = y
            .parse::<i32>()
            .map_err(|e| state_error(format!("y {y:?}: {e}")))?;
        let heading = heading
            .parse::<Direction>()
            .map_err(|e| state_error(e.to_string()))?;

        let state = RoverState::new(x, y, heading);
        if !state.is_valid_on(plateau) {
            return Err(state_error(format!(
                "({x}, {y}) is outside the {}x{} plateau",
                plateau.width, plateau.height
            )));
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plateau() {
        let policy = InputPolicy::default();
        assert_eq!(policy.parse_plateau("5 5"), Ok(Plateau::new(5, 5)));
        assert_eq!(policy.parse_plateau("  3\t4 "), Ok(Plateau::new(3, 4)));
    }

    #[test]
    fn test_parse_plateau_rejects_out_of_policy() {
        let policy = InputPolicy::default();
        for line in ["0 5", "5 0", "11 5", "-1 3", "5", "5 5 5", "a b", ""] {
            assert!(
                matches!(
                    policy.parse_plateau(line),
                    Err(InputError::InvalidGridBounds { .. })
                ),
                "{line:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_custom_policy_allows_empty_plateau() {
        let policy = InputPolicy {
            min_extent: 0,
            max_extent: 100,
        };
        assert_eq!(policy.parse_plateau("0 0"), Ok(Plateau::new(0, 0)));
        assert_eq!(policy.parse_plateau("100 1"), Ok(Plateau::new(100, 1)));
    }

    #[test]
    fn test_parse_rover() {
        let policy = InputPolicy::default();
        let plateau = Plateau::new(5, 5);
        assert_eq!(
            policy.parse_rover("1 2 N", &plateau),
            Ok(RoverState::new(1, 2, Direction::North))
        );
        assert_eq!(
            policy.parse_rover("0 4 w", &plateau),
            Ok(RoverState::new(0, 4, Direction::West))
        );
    }

    #[test]
    fn test_parse_rover_rejects_bad_input() {
        let policy = InputPolicy::default();
        let plateau = Plateau::new(3, 4);
        for line in ["3 0 N", "0 4 N", "-1 0 N", "1 1 X", "1 1 NE", "1 1", "x 1 N"] {
            assert!(
                matches!(
                    policy.parse_rover(line, &plateau),
                    Err(InputError::InvalidInitialState { .. })
                ),
                "{line:?} should be rejected"
            );
        }
    }
}
