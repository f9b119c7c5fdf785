//! Rover state and its pure transitions.

use crate::instruction::Instruction;
use crate::plateau::Plateau;
use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A grid coordinate. Unbounded on its own; validity only means something
/// relative to a [`Plateau`].
pub type Position = IVec2;

/// The four cardinal headings, ordered clockwise N → E → S → W.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// One step counter-clockwise (N → W → S → E → N).
    pub fn left(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }

    /// One step clockwise (N → E → S → W → N).
    pub fn right(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// Unit offset of a forward move. North is `+y`.
    pub fn delta(self) -> IVec2 {
        match self {
            Self::North => IVec2::Y,
            Self::South => IVec2::NEG_Y,
            Self::East => IVec2::X,
            Self::West => IVec2::NEG_X,
        }
    }

    /// Single-letter token used in textual input and output.
    pub fn token(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    /// Parses a heading token, ignoring ASCII case.
    pub fn from_token(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Returned when a string is not exactly one heading token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown direction {0:?}, expected one of N, E, S, W")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_token(c).ok_or_else(|| UnknownDirection(s.to_owned())),
            _ => Err(UnknownDirection(s.to_owned())),
        }
    }
}

/// Where the rover is and which way it faces.
///
/// States are plain values: every transition returns a new state and leaves
/// the receiver untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoverState {
    /// Current grid cell.
    pub position: Position,

    /// Current heading.
    pub heading: Direction,
}

impl RoverState {
    /// Creates a state at `(x, y)` facing `heading`.
    pub fn new(x: i32, y: i32, heading: Direction) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }

    /// Column of the current cell.
    pub fn x(&self) -> i32 {
        self.position.x
    }

    /// Row of the current cell.
    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Returns the state turned 90 degrees counter-clockwise, position unchanged.
    pub fn rotate_left(self) -> Self {
        Self {
            heading: self.heading.left(),
            ..self
        }
    }

    /// Returns the state turned 90 degrees clockwise, position unchanged.
    pub fn rotate_right(self) -> Self {
        Self {
            heading: self.heading.right(),
            ..self
        }
    }

    /// Returns the state advanced one cell along the current heading. No
    /// bounds check here; that is the interpreter's job.
    ///
    /// Coordinates wrap at the `i32` limits. From any cell of a plateau the
    /// wrapped coordinate is negative, so the move is still rejected.
    pub fn move_forward(self) -> Self {
        Self {
            position: self.position.wrapping_add(self.heading.delta()),
            ..self
        }
    }

    /// Applies a single instruction.
    pub fn apply(self, instruction: Instruction) -> Self {
        match instruction {
            Instruction::RotateLeft => self.rotate_left(),
            Instruction::RotateRight => self.rotate_right(),
            Instruction::MoveForward => self.move_forward(),
        }
    }

    /// True if the rover stands on `plateau`.
    pub fn is_valid_on(&self, plateau: &Plateau) -> bool {
        plateau.contains(self.position)
    }
}

impl fmt::Display for RoverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.position.x, self.position.y, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotations_are_inverse() {
        for d in Direction::ALL {
            let state = RoverState::new(2, 2, d);
            assert_eq!(state.rotate_right().rotate_left(), state);
            assert_eq!(state.rotate_left().rotate_right(), state);
        }
    }

    #[test]
    fn test_four_right_turns_close_the_cycle() {
        for d in Direction::ALL {
            let state = RoverState::new(0, 0, d);
            let turned = (0..4).fold(state, |s, _| s.rotate_right());
            assert_eq!(turned.heading, d);
        }
    }

    #[test]
    fn test_clockwise_order() {
        assert_eq!(Direction::North.right(), Direction::East);
        assert_eq!(Direction::East.right(), Direction::South);
        assert_eq!(Direction::South.right(), Direction::West);
        assert_eq!(Direction::West.right(), Direction::North);
        assert_eq!(Direction::North.left(), Direction::West);
    }

    #[test]
    fn test_move_forward_per_heading() {
        let origin = RoverState::new(3, 3, Direction::North);
        assert_eq!(origin.move_forward().position, IVec2::new(3, 4));
        assert_eq!(
            RoverState { heading: Direction::South, ..origin }.move_forward().position,
            IVec2::new(3, 2)
        );
        assert_eq!(
            RoverState { heading: Direction::East, ..origin }.move_forward().position,
            IVec2::new(4, 3)
        );
        assert_eq!(
            RoverState { heading: Direction::West, ..origin }.move_forward().position,
            IVec2::new(2, 3)
        );
    }

    #[test]
    fn test_move_forward_can_leave_any_grid() {
        // Transitions are total; (0, 0) facing West goes negative.
        let moved = RoverState::new(0, 0, Direction::West).move_forward();
        assert_eq!(moved.position, IVec2::new(-1, 0));
        assert_eq!(moved.heading, Direction::West);
    }

    #[test]
    fn test_move_forward_wraps_at_coordinate_limits() {
        let east = RoverState::new(i32::MAX, 0, Direction::East).move_forward();
        assert_eq!(east.position, IVec2::new(i32::MIN, 0));

        let south = RoverState::new(0, i32::MIN, Direction::South).move_forward();
        assert_eq!(south.position, IVec2::new(0, i32::MAX));
        assert_eq!(south.heading, Direction::South);
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!(Direction::from_token('n'), Some(Direction::North));
        assert_eq!(Direction::from_token('W'), Some(Direction::West));
        assert_eq!(Direction::from_token('X'), None);
        assert_eq!("s".parse::<Direction>(), Ok(Direction::South));
        assert!("NE".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RoverState::new(1, 0, Direction::East).to_string(), "1 0 E");
    }
}
