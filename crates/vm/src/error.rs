//! Runtime errors for the brainrot engine.
//!
//! Every variant carries the 1-based source line of the offending
//! instruction (0 for REPL input). A runtime error is fatal to the run;
//! there is no retry and no partial recovery.

use brainrot_common::DecodeError;
use brainrot_parser::ParseError;
use thiserror::Error;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The instruction's tokens did not decode to a known opcode.
    #[error("line {line}: {source}")]
    Instruction {
        line: usize,
        #[source]
        source: DecodeError,
    },

    /// `peekback` or `clapback` on an empty operand stack.
    #[error("stack is empty at line {line}")]
    EmptyStack { line: usize },

    /// `get` of a variable that was never `set`.
    #[error("unknown variable '{name}' at line {line}")]
    UnknownVariable { line: usize, name: String },

    /// `call` of a name absent from the function table.
    #[error("unknown function '{name}' at line {line}")]
    UnknownFunction { line: usize, name: String },

    /// `vibe` whose forward scan ran off the end of the program.
    #[error("unmatched 'vibe' at line {line}")]
    UnmatchedLoopStart { line: usize },

    /// `unvibe` with no open loop.
    #[error("unmatched 'unvibe' at line {line}")]
    UnmatchedLoopEnd { line: usize },

    /// `return` with an empty call-return stack.
    #[error("return without call at line {line}")]
    ReturnWithoutCall { line: usize },

    /// `spill` got something that does not parse as an integer.
    #[error("invalid integer input '{text}' at line {line}")]
    InvalidInput { line: usize, text: String },

    /// The `load` opcode failed to bring in the named file.
    #[error("cannot include file at line {line}: {source}")]
    Include {
        line: usize,
        #[source]
        source: ParseError,
    },
}

/// Union of the load-time and run-time error classes, for entry points
/// that do both.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
