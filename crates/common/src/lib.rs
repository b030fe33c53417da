//! Common types for the brainrot interpreter.
//!
//! This crate provides the foundational data structures shared by the
//! parser and the execution engine:
//!
//! - [`Instruction`] — one source line reduced to its tokens
//! - [`Program`] — a flat sequence of instructions
//! - [`Op`] — the tagged-variant decode of an instruction's tokens
//! - [`FunctionTable`] — `func`/`endfunc` body ranges discovered at load
//! - [`DecodeError`] — errors from decoding tokens into an [`Op`]
//!
//! This crate uses `thiserror` and has no other dependencies.

pub mod error;
pub mod functions;
pub mod instruction;
pub mod opcode;
pub mod program;

pub use error::DecodeError;
pub use functions::FunctionTable;
pub use instruction::Instruction;
pub use opcode::Op;
pub use program::Program;
