//! Load-time errors for brainrot source.
//!
//! Everything here aborts loading before any instruction executes, as
//! opposed to the runtime errors raised by the engine mid-run.

use thiserror::Error;

/// Errors that occur while loading source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The path does not resolve to a regular file.
    #[error("file not found: {path}")]
    FileNotFound { path: String },

    /// The file exists but could not be read.
    #[error("cannot read '{path}': {reason}")]
    Unreadable { path: String, reason: String },

    /// A `func` header without exactly one name argument.
    #[error("malformed func at line {line} (usage: func <name>)")]
    MalformedDefinition { line: usize },

    /// An `endfunc` with no open `func`.
    #[error("unmatched endfunc at line {line}")]
    UnmatchedEnd { line: usize },

    /// A `func` that never meets its `endfunc`. Names the innermost one.
    #[error("unclosed func '{name}' starting at line {line}")]
    UnclosedDefinition { name: String, line: usize },
}
