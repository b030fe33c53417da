//! Decode errors for brainrot instructions.

use thiserror::Error;

/// Errors that occur while decoding an instruction's tokens into an [`Op`].
///
/// Decoding happens at dispatch time, so these surface as runtime errors
/// carrying the offending source line.
///
/// [`Op`]: crate::Op
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The first token is not a known mnemonic.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A mnemonic that takes arguments got the wrong number of them.
    #[error("usage: {usage}")]
    WrongArgCount { usage: &'static str },

    /// An instruction with no tokens at all. The parser never produces one;
    /// this guards direct construction.
    #[error("empty instruction")]
    EmptyInstruction,
}
