//! Error types for parsing, validation and simulation.

use crate::rover::{Position, RoverState};
use thiserror::Error;

/// A command string contained a character with no registered instruction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid instruction character {character:?} at index {index}")]
    InvalidInstructionCharacter {
        /// The offending character.
        character: char,
        /// Character (not byte) offset into the command string.
        index: usize,
    },
}

/// A forward move would have taken the rover off the plateau.
///
/// The run is abandoned at this point; `last_valid` and `attempted` are
/// carried for diagnostics only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("rover left the plateau at instruction {step}: from {last_valid} towards {attempted}")]
pub struct OutOfBounds {
    /// Index of the failing instruction.
    pub step: usize,
    /// The position the rover tried to move to.
    pub attempted: Position,
    /// The state just before the failing move.
    pub last_valid: RoverState,
}

/// Caller-side validation failures, raised before the simulation is invoked.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid plateau bounds: {reason}")]
    InvalidGridBounds { reason: String },
    #[error("invalid initial rover state: {reason}")]
    InvalidInitialState { reason: String },
}

/// Any failure the crate can report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RoverError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBounds),
}
