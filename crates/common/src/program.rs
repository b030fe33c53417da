//! Program representation: a flat, immutable instruction sequence.

use crate::instruction::Instruction;

/// A brainrot program: instructions indexed 0..N-1.
///
/// The program counter ranges over `[0, N]`; a counter equal to `N`
/// signals completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The instruction sequence.
    pub instructions: Vec<Instruction>,
}

impl Program {
    /// Create a program from a vector of instructions.
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }

    /// The instruction at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Instruction> {
        self.instructions.get(index)
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}
