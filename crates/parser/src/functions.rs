//! Function discovery: a single scan matching `func`/`endfunc` pairs.

use crate::error::ParseError;
use brainrot_common::{FunctionTable, Program};

/// Scan a program left to right and record every function body range.
///
/// Maintains a LIFO stack of open definitions, so a `func` opened while
/// another is still open is fine as long as both close before the scan
/// ends. Later definitions of the same name silently overwrite earlier
/// ones. Malformed or unbalanced pairs are load-time errors; nothing
/// executes when the scan fails.
pub fn build_function_table(program: &Program) -> Result<FunctionTable, ParseError> {
    let mut table = FunctionTable::new();
    let mut open: Vec<(String, usize)> = Vec::new();

    for (idx, instr) in program.instructions.iter().enumerate() {
        match instr.mnemonic() {
            "func" => {
                if instr.tokens.len() != 2 {
                    return Err(ParseError::MalformedDefinition { line: instr.line });
                }
                open.push((instr.tokens[1].clone(), idx));
            }
            "endfunc" => {
                let (name, header) = open
                    .pop()
                    .ok_or(ParseError::UnmatchedEnd { line: instr.line })?;
                table.record(name, header, idx);
            }
            _ => {}
        }
    }

    // The innermost unclosed definition is the last one pushed.
    if let Some((name, header)) = open.pop() {
        return Err(ParseError::UnclosedDefinition {
            name,
            line: program.instructions[header].line,
        });
    }

    Ok(table)
}
