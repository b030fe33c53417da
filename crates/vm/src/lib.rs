//! Brainrot execution engine.
//!
//! A small accumulator machine: one interpreter instance owns a program,
//! its function table, and the machine state (accumulator, operand stack,
//! variables, loop and call stacks, program counter). Three ways in:
//!
//! - [`Interpreter`] for full control (batch runs, the REPL's
//!   line-at-a-time mode, custom input sources),
//! - [`run_captured`] for embedded runs with queued inputs and captured
//!   output,
//! - [`run_report`] for service boundaries that want errors folded into
//!   the response text instead of propagated.
//!
//! # Usage
//!
//! ```
//! use brainrot_vm::run_captured;
//!
//! let out = run_captured("lit\nlit\nskibidi\n", vec![]).unwrap();
//! assert_eq!(out, "20\n");
//! ```

pub mod error;
pub mod execute;
pub mod input;
pub mod machine;

pub use error::{Error, RuntimeError};
pub use execute::Interpreter;
pub use input::{InputError, InputSource, PromptInput, QueuedInput};
pub use machine::{OutputSink, State};

// Load-time errors surface through [`Interpreter::load`] and [`Error`].
pub use brainrot_parser::ParseError;

use brainrot_parser::{build_function_table, parse};

/// Run source text to completion, printing to stdout and prompting on
/// stdin for `spill`.
pub fn run_source(source: &str) -> Result<(), Error> {
    let program = parse(source);
    let functions = build_function_table(&program)?;
    let mut interp = Interpreter::new();
    interp.set_program(program, functions);
    interp.run()?;
    Ok(())
}

/// Run source text with a pre-supplied input queue, returning the
/// captured output. `spill` drains the queue and reads 0 once it is
/// exhausted.
pub fn run_captured(source: &str, inputs: Vec<i64>) -> Result<String, Error> {
    let program = parse(source);
    let functions = build_function_table(&program)?;
    let mut interp = Interpreter::new();
    interp.set_program(program, functions);
    interp.set_inputs(inputs);
    interp.capture_output();
    interp.run()?;
    Ok(interp.take_output())
}

/// Embeddable boundary: like [`run_captured`], but a load or runtime
/// error becomes part of the returned text, after whatever the program
/// managed to print. Never fails at the process level.
pub fn run_report(source: &str, inputs: Vec<i64>) -> String {
    let program = parse(source);
    let functions = match build_function_table(&program) {
        Ok(functions) => functions,
        Err(e) => return format!("Error: {e}\n"),
    };

    let mut interp = Interpreter::new();
    interp.set_program(program, functions);
    interp.set_inputs(inputs);
    interp.capture_output();
    let result = interp.run();

    let mut out = interp.take_output();
    if let Err(e) = result {
        out.push_str(&format!("Error: {e}\n"));
    }
    out
}
