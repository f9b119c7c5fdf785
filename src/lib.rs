//! # plateau-rover
//!
//! A small, engine-agnostic simulation of a rover driving on a rectangular plateau.
//!
//! The rover's state is a position and a cardinal heading. A command string of
//! `L` (turn left), `R` (turn right) and `M` (move forward) is parsed into
//! [`Instruction`]s and folded over that state. Every forward move is checked
//! against the [`Plateau`]; the first move off the edge aborts the whole run.
//!
//! ```
//! use plateau_rover::{Direction, Plateau, RoverState, run_commands};
//!
//! let plateau = Plateau::new(5, 5);
//! let start = RoverState::new(1, 2, Direction::North);
//! let end = run_commands(&plateau, start, "LMLMLMLMM").unwrap();
//! assert_eq!(end, RoverState::new(1, 3, Direction::North));
//! ```

pub mod error;
pub mod input;
pub mod instruction;
pub mod interpreter;
pub mod plateau;
pub mod render;
pub mod rover;

pub use error::*;
pub use input::*;
pub use instruction::*;
pub use interpreter::*;
pub use plateau::*;
pub use render::*;
pub use rover::*;
