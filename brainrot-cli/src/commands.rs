//! CLI command implementations.

use brainrot_vm::Interpreter;
use std::io::{self, BufRead, Write};

/// Load and run a source file to completion.
pub fn run_file(path: &str, inputs: Option<Vec<i64>>) -> Result<(), i32> {
    let mut interp = Interpreter::new();

    interp.load(path).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    if let Some(values) = inputs {
        interp.set_inputs(values);
    }

    interp.run().map_err(|e| {
        eprintln!("runtime error: {e}");
        3
    })
}

/// Interactive session: one instruction per line against persistent
/// machine state. A bad line prints its error and the session continues.
pub fn repl() -> Result<(), i32> {
    println!(
        "brainrot v{} REPL. Type 'help' for commands, Ctrl-D to exit.",
        env!("CARGO_PKG_VERSION")
    );

    let mut interp = Interpreter::new();
    let stdin = io::stdin();

    loop {
        print!(">>> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error: {e}");
                return Err(1);
            }
        }

        if let Err(e) = interp.execute_line(&line) {
            eprintln!("error: {e}");
        }
    }

    println!();
    println!("Goodbye.");
    Ok(())
}
