//! Machine state: the mutable record every opcode operates on.

use std::collections::HashMap;

/// The five mutable registers of the accumulator machine, plus the
/// program counter.
///
/// Owned exclusively by one [`Interpreter`]; nothing is shared between
/// instances, so independent programs can run side by side without
/// interference. All fields are mutated only by opcode execution.
///
/// [`Interpreter`]: crate::Interpreter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// The accumulator. Arithmetic wraps; halving floors toward -infinity.
    pub acc: i64,
    /// Operand stack, last in first out.
    pub stack: Vec<i64>,
    /// Named variables.
    pub vars: HashMap<String, i64>,
    /// Counter values of open `vibe` loops, one per loop, LIFO.
    pub loop_stack: Vec<usize>,
    /// Return addresses pushed by `call`, LIFO.
    pub call_stack: Vec<usize>,
    /// Program counter: an index into the program, or its length when done.
    pub pc: usize,
}

impl State {
    /// Zeroed, empty state.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Where printed lines go: straight to stdout, or an in-memory buffer for
/// embedded runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    Capture(String),
}

impl OutputSink {
    /// Emit one line of output.
    pub(crate) fn write_line(&mut self, text: &str) {
        match self {
            OutputSink::Stdout => println!("{text}"),
            OutputSink::Capture(buf) => {
                buf.push_str(text);
                buf.push('\n');
            }
        }
    }

    /// Captured output so far, if capturing.
    pub fn captured(&self) -> Option<&str> {
        match self {
            OutputSink::Capture(buf) => Some(buf),
            OutputSink::Stdout => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_zeroed() {
        let state = State::new();
        assert_eq!(state.acc, 0);
        assert_eq!(state.pc, 0);
        assert!(state.stack.is_empty());
        assert!(state.vars.is_empty());
        assert!(state.loop_stack.is_empty());
        assert!(state.call_stack.is_empty());
    }

    #[test]
    fn capture_sink_collects_lines() {
        let mut sink = OutputSink::Capture(String::new());
        sink.write_line("20");
        sink.write_line("-3");
        assert_eq!(sink.captured(), Some("20\n-3\n"));
    }

    #[test]
    fn stdout_sink_has_no_capture() {
        assert_eq!(OutputSink::Stdout.captured(), None);
    }
}
