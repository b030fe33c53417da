//! Integration tests for the brainrot engine.
//!
//! Organized by opcode group: accumulator arithmetic, the operand stack,
//! variables, skips, loops, functions, input, inclusion, and a couple of
//! whole-program runs.

use brainrot_common::DecodeError;
use brainrot_parser::{build_function_table, parse};
use brainrot_vm::{run_captured, Interpreter, ParseError, RuntimeError};

// ============================================================
// Helpers
// ============================================================

/// Build an interpreter for well-formed source, capturing output.
fn interp(source: &str) -> Interpreter {
    let program = parse(source);
    let functions = build_function_table(&program).expect("test source must be well-formed");
    let mut interp = Interpreter::new();
    interp.set_program(program, functions);
    interp.capture_output();
    interp
}

/// Run source to completion, returning (captured output, final accumulator).
fn run_ok(source: &str) -> (String, i64) {
    let mut i = interp(source);
    i.run().expect("test program must run cleanly");
    let acc = i.state().acc;
    (i.take_output(), acc)
}

/// Run source and return the runtime error it must produce.
fn run_err(source: &str) -> RuntimeError {
    interp(source).run().unwrap_err()
}

// ============================================================
// Accumulator arithmetic
// ============================================================

#[test]
fn increments_and_decrements() {
    assert_eq!(run_ok("rizz\nrizz\ngyatt\n").1, 1);
    assert_eq!(run_ok("drip\nnpc\n").1, 0);
    assert_eq!(run_ok("lit\nslaps\nslaps\n").1, -10);
}

#[test]
fn yeet_doubles() {
    assert_eq!(run_ok("drip\nyeet\nyeet\n").1, 20);
}

#[test]
fn cringe_halves_positive() {
    assert_eq!(run_ok("lit\ncringe\n").1, 5);
}

#[test]
fn cringe_floors_toward_negative_infinity() {
    // -5 / 2 floors to -3, not -2.
    assert_eq!(run_ok("npc\ncringe\n").1, -3);
}

#[test]
fn cringe_on_zero_is_a_no_op() {
    assert_eq!(run_ok("cringe\n").1, 0);
}

// ============================================================
// Operand stack
// ============================================================

#[test]
fn fam_then_clapback_round_trips() {
    let mut i = interp("drip\nfam\nno cap\nclapback\n");
    i.run().unwrap();
    assert_eq!(i.state().acc, 5);
    assert!(i.state().stack.is_empty());
}

#[test]
fn flex_pushes_the_square() {
    assert_eq!(run_ok("npc\nflex\nclapback\n").1, 25);
}

#[test]
fn peekback_reads_without_popping() {
    let mut i = interp("drip\nfam\nno cap\npeekback\n");
    i.run().unwrap();
    assert_eq!(i.state().acc, 5);
    assert_eq!(i.state().stack, vec![5]);
}

#[test]
fn peekback_on_empty_stack_errors() {
    assert_eq!(run_err("peekback\n"), RuntimeError::EmptyStack { line: 1 });
}

#[test]
fn clapback_on_empty_stack_errors() {
    assert_eq!(
        run_err("rizz\nclapback\n"),
        RuntimeError::EmptyStack { line: 2 }
    );
}

// ============================================================
// Variables
// ============================================================

#[test]
fn set_get_round_trips() {
    assert_eq!(run_ok("drip\nset x\nno cap\nget x\n").1, 5);
}

#[test]
fn set_overwrites() {
    assert_eq!(run_ok("rizz\nset x\nlit\nset x\nno cap\nget x\n").1, 11);
}

#[test]
fn get_unknown_variable_errors() {
    assert_eq!(
        run_err("get nope\n"),
        RuntimeError::UnknownVariable {
            line: 1,
            name: "nope".to_string()
        }
    );
}

// ============================================================
// Decode failures happen at dispatch time
// ============================================================

#[test]
fn unknown_command_reports_line() {
    assert_eq!(
        run_err("rizz\nsigma\n"),
        RuntimeError::Instruction {
            line: 2,
            source: DecodeError::UnknownCommand("sigma".to_string())
        }
    );
}

#[test]
fn wrong_arg_count_reports_usage() {
    assert_eq!(
        run_err("set\n"),
        RuntimeError::Instruction {
            line: 1,
            source: DecodeError::WrongArgCount {
                usage: "set <varname>"
            }
        }
    );
}

#[test]
fn skipped_unknown_command_never_errors() {
    // acc == 0, so sus skips the bogus instruction entirely.
    assert_eq!(run_ok("sus\nsigma\nrizz\n").1, 1);
}

// ============================================================
// Conditional skips
// ============================================================

#[test]
fn sus_skips_exactly_one_when_zero() {
    // lit is skipped, rizz is not.
    let (out, acc) = run_ok("sus\nlit\nrizz\nskibidi\n");
    assert_eq!(acc, 1);
    assert_eq!(out, "1\n");
}

#[test]
fn sus_falls_through_when_nonzero() {
    assert_eq!(run_ok("rizz\nsus\nlit\n").1, 11);
}

#[test]
fn suspect_skips_when_positive() {
    assert_eq!(run_ok("rizz\nsuspect\nlit\nrizz\n").1, 2);
}

#[test]
fn suspect_falls_through_when_zero_or_negative() {
    assert_eq!(run_ok("suspect\nlit\n").1, 10);
    assert_eq!(run_ok("gyatt\nsuspect\nlit\n").1, 9);
}

// ============================================================
// Loops
// ============================================================

#[test]
fn loop_runs_body_until_accumulator_drops() {
    // Pushes 4, 3, 2, 1, 0 on the way down.
    let mut i = interp("drip\nvibe\ngyatt\nfam\nunvibe\n");
    i.run().unwrap();
    assert_eq!(i.state().stack, vec![4, 3, 2, 1, 0]);
    assert!(i.state().loop_stack.is_empty());
}

#[test]
fn loop_body_skipped_when_accumulator_not_positive() {
    let (out, _) = run_ok("vibe\nlit\nunvibe\nskibidi\n");
    assert_eq!(out, "0\n");
}

#[test]
fn nested_loop_skip_honors_depth() {
    // acc == 0: the scan must pair the outer vibe with the outer unvibe.
    let (out, _) = run_ok("vibe\nvibe\nlit\nunvibe\nlit\nunvibe\nskibidi\n");
    assert_eq!(out, "0\n");
}

#[test]
fn single_pass_loop_exits_after_one_decrement() {
    // acc reaches 1, the loop body decrements to 0, post-test exits.
    let (out, _) = run_ok("rizz\nvibe\ngyatt\nunvibe\nskibidi\n");
    assert_eq!(out, "0\n");
}

#[test]
fn nested_loops_multiply_via_variables() {
    let source = "\
rizz
rizz
rizz
set i
no cap
set total
get i
vibe
get total
drip
set total
get i
gyatt
set i
unvibe
get total
skibidi
";
    let (out, acc) = run_ok(source);
    assert_eq!(out, "15\n");
    assert_eq!(acc, 15);
}

#[test]
fn vibe_without_matching_unvibe_errors() {
    assert_eq!(
        run_err("vibe\nlit\n"),
        RuntimeError::UnmatchedLoopStart { line: 1 }
    );
}

#[test]
fn unvibe_without_open_loop_errors() {
    assert_eq!(run_err("unvibe\n"), RuntimeError::UnmatchedLoopEnd { line: 1 });
}

// ============================================================
// Functions
// ============================================================

#[test]
fn func_body_skipped_on_fall_through() {
    let (out, acc) = run_ok("func f\nlit\nlit\nendfunc\nskibidi\n");
    assert_eq!(out, "0\n");
    assert_eq!(acc, 0);
}

#[test]
fn call_and_return() {
    let (out, _) = run_ok("func add5\ndrip\nreturn\nendfunc\nrizz\ncall add5\nskibidi\n");
    assert_eq!(out, "6\n");
}

#[test]
fn call_falls_through_endfunc_to_after_the_body() {
    // No return: the body falls past its endfunc and resumes at the
    // instruction after the definition, not at the pushed return address.
    let (out, _) = run_ok("call add5\nfunc add5\ndrip\nendfunc\nskibidi\n");
    assert_eq!(out, "5\n");
}

#[test]
fn nested_inner_definition_skipped_inside_outer_call() {
    let source = "\
func outer
rizz
func inner
lit
endfunc
rizz
return
endfunc
call outer
skibidi
";
    let (out, _) = run_ok(source);
    assert_eq!(out, "2\n");
}

#[test]
fn calling_the_inner_function_works_too() {
    let source = "\
func outer
rizz
func inner
lit
endfunc
rizz
return
endfunc
call inner
skibidi
";
    let (out, _) = run_ok(source);
    // inner's body falls through its endfunc into the rest of outer's
    // body (rizz, return), which pops back to the main line.
    assert_eq!(out, "11\n");
}

#[test]
fn last_definition_of_a_name_wins() {
    let (out, _) =
        run_ok("func f\nrizz\nreturn\nendfunc\nfunc f\nlit\nreturn\nendfunc\ncall f\nskibidi\n");
    assert_eq!(out, "10\n");
}

#[test]
fn recursion_through_the_call_stack() {
    // f counts acc down to 0, one frame per step.
    let source = "\
func f
gyatt
suspect
return
call f
return
endfunc
drip
call f
skibidi
";
    let (out, acc) = run_ok(source);
    assert_eq!(out, "0\n");
    assert_eq!(acc, 0);
}

#[test]
fn call_unknown_function_errors() {
    assert_eq!(
        run_err("call ghost\n"),
        RuntimeError::UnknownFunction {
            line: 1,
            name: "ghost".to_string()
        }
    );
}

#[test]
fn return_without_call_errors() {
    assert_eq!(
        run_err("return\n"),
        RuntimeError::ReturnWithoutCall { line: 1 }
    );
}

// ============================================================
// Input
// ============================================================

#[test]
fn queued_inputs_then_zero_when_exhausted() {
    let mut i = interp("spill\nskibidi\nspill\nskibidi\n");
    i.set_inputs([5]);
    i.run().unwrap();
    assert_eq!(i.take_output(), "5\n0\n");
}

#[test]
fn queued_inputs_drain_in_order() {
    let mut i = interp("spill\nfam\nspill\nfam\nspill\nfam\n");
    i.set_inputs([1, -2, 3]);
    i.run().unwrap();
    assert_eq!(i.state().stack, vec![1, -2, 3]);
}

// ============================================================
// Whole programs and entry points
// ============================================================

#[test]
fn lit_lit_skibidi_prints_twenty() {
    assert_eq!(run_captured("lit\nlit\nskibidi\n", vec![]).unwrap(), "20\n");
}

#[test]
fn comments_and_blank_lines_are_invisible_to_execution() {
    let source = "# warm up\n\nlit   # +10\n\nlit\nskibidi # done\n";
    assert_eq!(run_captured(source, vec![]).unwrap(), "20\n");
}

#[test]
fn run_captured_feeds_spill_from_the_queue() {
    let out = run_captured("spill\nyeet\nskibidi\n", vec![21]).unwrap();
    assert_eq!(out, "42\n");
}

#[test]
fn run_captured_rejects_unbalanced_functions_before_executing() {
    let err = run_captured("skibidi\nfunc f\n", vec![]).unwrap_err();
    assert_eq!(
        err,
        brainrot_vm::Error::Parse(ParseError::UnclosedDefinition {
            name: "f".to_string(),
            line: 2
        })
    );
}

#[test]
fn help_lists_every_mnemonic() {
    let (out, _) = run_ok("help\n");
    for word in ["rizz", "skibidi", "vibe", "endfunc", "no cap"] {
        assert!(out.contains(word), "help output missing {word}");
    }
}

#[test]
fn version_prints_the_crate_version() {
    let (out, _) = run_ok("version\n");
    assert!(out.starts_with("brainrot version "));
}

#[test]
fn mid_does_nothing() {
    assert_eq!(run_ok("mid\nmid\n").1, 0);
}

// ============================================================
// Inclusion
// ============================================================

mod include {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_lib(dir: &TempDir, name: &str, contents: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path.display().to_string()
    }

    #[test]
    fn included_functions_become_callable() {
        let dir = TempDir::new().unwrap();
        let lib = write_lib(&dir, "lib.brainrot", "func add5\ndrip\nreturn\nendfunc\n");

        let source = format!("load {lib}\ncall add5\nskibidi\n");
        assert_eq!(run_captured(&source, vec![]).unwrap(), "5\n");
    }

    #[test]
    fn inclusion_keeps_previously_defined_functions() {
        let dir = TempDir::new().unwrap();
        let lib = write_lib(&dir, "lib.brainrot", "func g\nlit\nreturn\nendfunc\n");

        let source = format!(
            "func f\nrizz\nreturn\nendfunc\nload {lib}\ncall f\ncall g\nskibidi\n"
        );
        assert_eq!(run_captured(&source, vec![]).unwrap(), "11\n");
    }

    #[test]
    fn included_definition_wins_on_name_collision() {
        let dir = TempDir::new().unwrap();
        let lib = write_lib(&dir, "lib.brainrot", "func f\nlit\nreturn\nendfunc\n");

        let source = format!("func f\nrizz\nreturn\nendfunc\nload {lib}\ncall f\nskibidi\n");
        assert_eq!(run_captured(&source, vec![]).unwrap(), "10\n");
    }

    #[test]
    fn missing_include_is_a_runtime_error() {
        let err = run_err("load no/such/lib.brainrot\n");
        assert_eq!(
            err,
            RuntimeError::Include {
                line: 1,
                source: ParseError::FileNotFound {
                    path: "no/such/lib.brainrot".to_string()
                }
            }
        );
    }

    #[test]
    fn unbalanced_include_is_a_runtime_error() {
        let dir = TempDir::new().unwrap();
        let lib = write_lib(&dir, "bad.brainrot", "func f\nrizz\n");

        let err = run_err(&format!("load {lib}\n"));
        assert!(matches!(
            err,
            RuntimeError::Include {
                line: 1,
                source: ParseError::UnclosedDefinition { .. }
            }
        ));
    }
}

// ============================================================
// Properties
// ============================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    /// Pure accumulator mnemonics and their model.
    const PURE: &[(&str, fn(i64) -> i64)] = &[
        ("rizz", |a| a.wrapping_add(1)),
        ("gyatt", |a| a.wrapping_sub(1)),
        ("drip", |a| a.wrapping_add(5)),
        ("npc", |a| a.wrapping_sub(5)),
        ("lit", |a| a.wrapping_add(10)),
        ("slaps", |a| a.wrapping_sub(10)),
        ("yeet", |a| a.wrapping_mul(2)),
        ("cringe", |a| if a != 0 { a.div_euclid(2) } else { a }),
        ("no cap", |_| 0),
        ("mid", |a| a),
    ];

    proptest! {
        /// Any sequence of pure accumulator opcodes runs cleanly and the
        /// accumulator matches a straight fold of their effects.
        #[test]
        fn pure_opcode_sequences_match_the_model(
            picks in prop::collection::vec(0usize..PURE.len(), 0..60)
        ) {
            let source: String = picks
                .iter()
                .map(|&i| format!("{}\n", PURE[i].0))
                .collect();
            let expected = picks.iter().fold(0i64, |acc, &i| (PURE[i].1)(acc));

            let mut i = interp(&source);
            i.run().unwrap();
            prop_assert_eq!(i.state().acc, expected);
        }

        /// A countdown loop always terminates with the accumulator at 0
        /// and an empty loop stack, whatever the starting count.
        #[test]
        fn countdown_loops_terminate(count in 0i64..200) {
            let mut header = String::new();
            for _ in 0..count {
                header.push_str("rizz\n");
            }
            let source = format!("{header}vibe\ngyatt\nunvibe\n");

            let mut i = interp(&source);
            i.run().unwrap();
            prop_assert_eq!(i.state().acc, 0);
            prop_assert!(i.state().loop_stack.is_empty());
        }
    }
}
