//! brainrot CLI — run source files or an interactive session.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage or load error
//! - 3: Runtime error

mod commands;

use std::process;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut debug = false;
    let mut inputs: Option<Vec<i64>> = None;
    let mut file: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--debug" => debug = true,
            "--input" => {
                let Some(list) = iter.next() else {
                    eprintln!("error: --input requires a comma-separated list of integers");
                    process::exit(1);
                };
                match parse_inputs(list) {
                    Ok(values) => inputs = Some(values),
                    Err(bad) => {
                        eprintln!("error: invalid --input value '{bad}'");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--version" | "-V" => {
                println!("brainrot {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("error: unknown flag '{other}'");
                eprintln!();
                print_usage();
                process::exit(1);
            }
            other => {
                if file.is_some() {
                    eprintln!("error: more than one source file given");
                    process::exit(1);
                }
                file = Some(other.to_string());
            }
        }
    }

    let level = if debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let _ = simple_logger::SimpleLogger::new().with_level(level).init();

    let result = match file {
        Some(path) => commands::run_file(&path, inputs),
        None => commands::repl(),
    };

    if let Err(code) = result {
        process::exit(code);
    }
}

fn print_usage() {
    eprintln!("Usage: brainrot [file] [--debug] [--input N,N,...]");
    eprintln!();
    eprintln!("With a file, runs it to completion. Without one, starts a REPL.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --input N,N,...   Answer 'spill' from this list (then zeros)");
    eprintln!("  --debug           Trace execution to stderr");
    eprintln!("  -h, --help        Show this help");
    eprintln!("  -V, --version     Show the version");
}

fn parse_inputs(list: &str) -> Result<Vec<i64>, String> {
    list.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse().map_err(|_| part.to_string())
        })
        .collect()
}
