//! Interpreter that drives a [`RoverState`] across a [`Plateau`].
//!
//! The one-shot entry points are [`run`] (pre-parsed instructions) and
//! [`run_commands`] (raw command string). [`Simulation`] exposes the same fold
//! one instruction at a time for callers that want to observe or stop early.

use crate::error::{OutOfBounds, RoverError};
use crate::instruction::{Instruction, InstructionSet};
use crate::plateau::Plateau;
use crate::rover::RoverState;
use log::{debug, trace};

/// Where a [`Simulation`] stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Instructions remain and no move has failed.
    Running,
    /// Every instruction was applied.
    Succeeded,
    /// A forward move would have left the plateau. Final.
    Failed,
}

/// Step-wise fold of instructions over a rover state.
///
/// Each call to [`step`](Self::step) consumes one instruction. A failed move
/// ends the run: the failure is yielded once and the iterator is exhausted
/// afterwards.
#[derive(Clone, Debug)]
pub struct Simulation<'a> {
    plateau: &'a Plateau,
    instructions: &'a [Instruction],
    cursor: usize,
    current: RoverState,
    failure: Option<OutOfBounds>,
}

impl<'a> Simulation<'a> {
    /// Starts a run. `initial` is assumed to be on the plateau already.
    pub fn new(plateau: &'a Plateau, initial: RoverState, instructions: &'a [Instruction]) -> Self {
        Self {
            plateau,
            instructions,
            cursor: 0,
            current: initial,
            failure: None,
        }
    }

    /// Whether the run is still going, finished, or failed.
    pub fn status(&self) -> Status {
        if self.failure.is_some() {
            Status::Failed
        } else if self.cursor >= self.instructions.len() {
            Status::Succeeded
        } else {
            Status::Running
        }
    }

    /// The last accepted state.
    pub fn current(&self) -> RoverState {
        self.current
    }

    /// The failure that ended the run, if any.
    pub fn failure(&self) -> Option<&OutOfBounds> {
        self.failure.as_ref()
    }

    /// Number of instructions consumed so far, the failing one included.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Applies the next instruction. Returns `None` once the run has ended.
    pub fn step(&mut self) -> Option<Result<RoverState, OutOfBounds>> {
        if self.status() != Status::Running {
            return None;
        }

        let step = self.cursor;
        let instruction = self.instructions[step];
        self.cursor += 1;

        let candidate = self.current.apply(instruction);
        // Rotations cannot leave the plateau; only moves are checked.
        if instruction == Instruction::MoveForward && !self.plateau.contains(candidate.position) {
            let failure = OutOfBounds {
                step,
                attempted: candidate.position,
                last_valid: self.current,
            };
            debug!("Rover run failed: {failure}");
            self.failure = Some(failure);
            return Some(Err(failure));
        }

        trace!("step {step}: {instruction:?} -> {candidate}");
        self.current = candidate;
        Some(Ok(candidate))
    }

    /// Drives the run to completion.
    pub fn finish(mut self) -> Result<RoverState, OutOfBounds> {
        while let Some(result) = self.step() {
            result?;
        }
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(self.current),
        }
    }
}

impl Iterator for Simulation<'_> {
    type Item = Result<RoverState, OutOfBounds>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.status() {
            Status::Running => (1, Some(self.instructions.len() - self.cursor)),
            Status::Succeeded | Status::Failed => (0, Some(0)),
        }
    }
}

/// Applies `instructions` to `initial` left to right.
///
/// Fails fast with [`OutOfBounds`] on the first forward move that would leave
/// `plateau`; no partial result is returned. An empty sequence returns
/// `initial` unchanged.
pub fn run(
    plateau: &Plateau,
    initial: RoverState,
    instructions: &[Instruction],
) -> Result<RoverState, OutOfBounds> {
    debug!(
        "Running {} instruction(s) from {initial} on {}x{} plateau",
        instructions.len(),
        plateau.width,
        plateau.height
    );
    let result = Simulation::new(plateau, initial, instructions).finish();
    if let Ok(state) = &result {
        debug!("Rover finished at {state}");
    }
    result
}

/// Like [`run`], but returns every state visited, starting with `initial`.
pub fn run_traced(
    plateau: &Plateau,
    initial: RoverState,
    instructions: &[Instruction],
) -> Result<Vec<RoverState>, OutOfBounds> {
    std::iter::once(Ok(initial))
        .chain(Simulation::new(plateau, initial, instructions))
        .collect()
}

/// Parses `commands` with the standard `L`/`R`/`M` set and runs them.
pub fn run_commands(
    plateau: &Plateau,
    initial: RoverState,
    commands: &str,
) -> Result<RoverState, RoverError> {
    RoverInterpreter::default().run_commands(plateau, initial, commands)
}

/// Runs raw command strings through a configurable [`InstructionSet`].
#[derive(Clone, Debug)]
pub struct RoverInterpreter {
    instructions: InstructionSet,
}

impl Default for RoverInterpreter {
    fn default() -> Self {
        Self::new(InstructionSet::standard())
    }
}

impl RoverInterpreter {
    /// Creates an interpreter that parses commands with `instructions`.
    pub fn new(instructions: InstructionSet) -> Self {
        Self { instructions }
    }

    /// The token table used for parsing.
    pub fn instruction_set(&self) -> &InstructionSet {
        &self.instructions
    }

    /// Parses the whole string before moving; a bad character is reported
    /// even if an earlier move would have left the plateau.
    pub fn run_commands(
        &self,
        plateau: &Plateau,
        initial: RoverState,
        commands: &str,
    ) -> Result<RoverState, RoverError> {
        let parsed = self.instructions.parse(commands)?;
        Ok(run(plateau, initial, &parsed)?)
    }
}
