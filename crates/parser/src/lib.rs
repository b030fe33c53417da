//! Brainrot source loading: tokenizing, parsing, and function discovery.
//!
//! Source files are plain text, one instruction per line. `#` starts a
//! comment (full-line or trailing), tokens are separated by runs of
//! whitespace, and the first token on a line is the opcode mnemonic.
//!
//! # Usage
//!
//! ```
//! use brainrot_parser::{build_function_table, parse};
//!
//! let program = parse("lit      # +10\nskibidi  # print\n");
//! let table = build_function_table(&program).unwrap();
//! assert_eq!(program.len(), 2);
//! assert!(table.is_empty());
//! ```

pub mod error;

mod functions;
mod lexer;

pub use error::ParseError;
pub use functions::build_function_table;

use brainrot_common::{FunctionTable, Instruction, Program};
use std::path::Path;

/// Parse source text into a program.
///
/// Blank lines and comments are dropped; every kept instruction remembers
/// its original 1-based source line. Tokenizing never fails — unparsable
/// lines are simply empty and skipped.
pub fn parse(source: &str) -> Program {
    let mut instructions = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let tokens = lexer::tokenize_line(raw);
        if !tokens.is_empty() {
            instructions.push(Instruction::new(idx + 1, tokens));
        }
    }
    Program::new(instructions)
}

/// Load a source file and build its function table.
///
/// Fails with [`ParseError::FileNotFound`] if the path is not a regular
/// file, and with the function-table builder's errors on malformed
/// `func`/`endfunc` nesting.
pub fn load_file(path: impl AsRef<Path>) -> Result<(Program, FunctionTable), ParseError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ParseError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let text = std::fs::read_to_string(path).map_err(|e| ParseError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let program = parse(&text);
    let table = build_function_table(&program)?;
    Ok((program, table))
}
