//! Atomic rover instructions and the command-string parser.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Operations the rover can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instruction {
    /// Turn 90 degrees counter-clockwise (`L`).
    RotateLeft,
    /// Turn 90 degrees clockwise (`R`).
    RotateRight,
    /// Advance one cell along the current heading (`M`).
    MoveForward,
}

/// Maps command characters to [`Instruction`]s.
///
/// Lookup ignores ASCII case, so registering `'M'` also accepts `'m'`.
#[derive(Clone, Debug, Default)]
pub struct InstructionSet {
    tokens: HashMap<char, Instruction>,
}

impl InstructionSet {
    /// An empty set; every character is rejected until tokens are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The conventional `L`, `R`, `M` mapping.
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.populate_standard_tokens();
        set
    }

    /// Assigns `instruction` to `token`, replacing any earlier mapping.
    pub fn set_token(&mut self, token: char, instruction: Instruction) {
        self.tokens.insert(token.to_ascii_uppercase(), instruction);
    }

    /// Builder form of [`set_token`](Self::set_token).
    pub fn with_token(mut self, token: char, instruction: Instruction) -> Self {
        self.set_token(token, instruction);
        self
    }

    /// Registers the conventional `L`, `R`, `M` tokens, keeping any others.
    pub fn populate_standard_tokens(&mut self) {
        let mappings = [
            ('L', Instruction::RotateLeft),
            ('R', Instruction::RotateRight),
            ('M', Instruction::MoveForward),
        ];

        for (token, instruction) in mappings {
            self.set_token(token, instruction);
        }
    }

    /// The instruction registered for `token`, ignoring ASCII case.
    pub fn lookup(&self, token: char) -> Option<Instruction> {
        self.tokens.get(&token.to_ascii_uppercase()).copied()
    }

    /// Parses a whole command string.
    ///
    /// The first unregistered character aborts the parse; no partial sequence
    /// is returned. The reported index counts characters, not bytes.
    pub fn parse(&self, commands: &str) -> Result<Vec<Instruction>, ParseError> {
        commands
            .chars()
            .enumerate()
            .map(|(index, character)| {
                self.lookup(character)
                    .ok_or(ParseError::InvalidInstructionCharacter { character, index })
            })
            .collect()
    }
}

/// Parses `commands` with the standard `L`/`R`/`M` mapping.
pub fn parse_instructions(commands: &str) -> Result<Vec<Instruction>, ParseError> {
    InstructionSet::standard().parse(commands)
}
