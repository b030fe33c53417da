//! Input sources for the `spill` opcode.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Failure to produce an integer from an input source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The line read did not parse as an integer.
    #[error("not an integer: '{text}'")]
    NotAnInteger { text: String },

    /// The interactive stream reached end of input.
    #[error("input stream closed")]
    Closed,
}

/// Supplies integer values to the `spill` opcode.
///
/// Injected into the engine so the same program can read from a live
/// terminal or drain a pre-supplied queue inside a service.
pub trait InputSource {
    /// Produce the next input value.
    fn next_value(&mut self) -> Result<i64, InputError>;
}

/// Interactive source: prompts on stdout and reads one stdin line per
/// request.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptInput;

impl InputSource for PromptInput {
    fn next_value(&mut self) -> Result<i64, InputError> {
        print!("spill> ");
        let _ = io::stdout().flush();

        let mut buf = String::new();
        match io::stdin().lock().read_line(&mut buf) {
            Ok(0) => Err(InputError::Closed),
            Ok(_) => {
                let text = buf.trim();
                text.parse().map_err(|_| InputError::NotAnInteger {
                    text: text.to_string(),
                })
            }
            Err(_) => Err(InputError::Closed),
        }
    }
}

/// Finite pre-supplied queue for embedded runs.
///
/// Each request drains one value; once exhausted it yields 0 with no
/// error. That fallback is deliberate: a hosted program that reads more
/// values than it was given keeps running instead of failing the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueuedInput {
    values: VecDeque<i64>,
}

impl QueuedInput {
    /// Build a queue from the given values, served in order.
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl InputSource for QueuedInput {
    fn next_value(&mut self) -> Result<i64, InputError> {
        Ok(self.values.pop_front().unwrap_or(0))
    }
}
