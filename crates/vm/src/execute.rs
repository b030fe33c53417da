//! The fetch-execute loop and opcode dispatch.

use crate::error::RuntimeError;
use crate::input::{InputError, InputSource, PromptInput, QueuedInput};
use crate::machine::{OutputSink, State};
use brainrot_common::{FunctionTable, Instruction, Op, Program};
use brainrot_parser::ParseError;
use log::debug;
use std::path::Path;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP: &[&str] = &[
    "brainrot commands:",
    "- rizz       : +1",
    "- gyatt      : -1",
    "- drip       : +5",
    "- npc        : -5",
    "- lit        : +10",
    "- slaps      : -10",
    "- yeet       : *2",
    "- cringe     : floor-halve",
    "- flex       : push acc^2",
    "- fam        : push acc",
    "- peekback   : read top of stack",
    "- clapback   : pop to acc",
    "- set <v>    : var = acc",
    "- get <v>    : acc = var",
    "- spill      : input number",
    "- skibidi    : print acc",
    "- no cap     : acc = 0",
    "- sus        : skip if acc == 0",
    "- suspect    : skip if acc > 0",
    "- vibe ...   : loop while acc > 0",
    "- unvibe     : end loop",
    "- func <n>   : define function",
    "- endfunc    : end function",
    "- call <n>   : call function",
    "- return     : return from function",
    "- load <f>   : include file",
    "- mid        : do nothing",
    "- help       : this list",
    "- version    : show version",
];

/// One interpreter instance: a program, its function table, and the
/// machine state they execute against.
///
/// Fully synchronous and single-threaded; one opcode executes atomically
/// before the next is fetched. The engine applies no timeout of its own —
/// a program with an unconditional positive-accumulator loop runs forever,
/// and any wall-clock budget belongs to the hosting layer.
pub struct Interpreter {
    program: Program,
    functions: FunctionTable,
    state: State,
    input: Box<dyn InputSource>,
    output: OutputSink,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Empty program, zeroed state, interactive input, stdout output.
    pub fn new() -> Self {
        Self {
            program: Program::default(),
            functions: FunctionTable::new(),
            state: State::new(),
            input: Box::new(PromptInput),
            output: OutputSink::Stdout,
        }
    }

    /// Replace the program and function table from a source file.
    ///
    /// Machine state is untouched; the counter keeps its current value.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), ParseError> {
        let (program, functions) = brainrot_parser::load_file(path)?;
        self.program = program;
        self.functions = functions;
        Ok(())
    }

    /// Install a program parsed elsewhere.
    pub fn set_program(&mut self, program: Program, functions: FunctionTable) {
        self.program = program;
        self.functions = functions;
    }

    /// Queue `values` as the answers to subsequent `spill` opcodes.
    ///
    /// Must be installed before the first `spill` executes to take effect.
    pub fn set_inputs(&mut self, values: impl IntoIterator<Item = i64>) {
        self.input = Box::new(QueuedInput::new(values));
    }

    /// Replace the input source wholesale.
    pub fn set_input_source(&mut self, source: Box<dyn InputSource>) {
        self.input = source;
    }

    /// Capture printed output in memory instead of writing to stdout.
    pub fn capture_output(&mut self) {
        self.output = OutputSink::Capture(String::new());
    }

    /// Take the captured output, leaving an empty capture buffer.
    /// Returns an empty string when printing straight to stdout.
    pub fn take_output(&mut self) -> String {
        match &mut self.output {
            OutputSink::Capture(buf) => std::mem::take(buf),
            OutputSink::Stdout => String::new(),
        }
    }

    /// The machine state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Run the loaded program from the current counter to completion or
    /// the first error.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while self.state.pc < self.program.len() {
            let instr = self.program.instructions[self.state.pc].clone();

            // A `func` header reached by straight-line fall-through: skip
            // the whole body. The matching end is recorded per header at
            // load time, so shadowed names skip correctly too.
            if instr.mnemonic() == "func" {
                match self.functions.end_of_header(self.state.pc) {
                    Some(end) => self.state.pc = end + 1,
                    None => self.state.pc += 1,
                }
                continue;
            }
            // A body falls through its own terminator when reached without
            // an intervening `return`.
            if instr.mnemonic() == "endfunc" {
                self.state.pc += 1;
                continue;
            }

            debug!(
                "line {}: {:?} | acc={} stack={:?} vars={:?} calls={:?}",
                instr.line,
                instr.tokens,
                self.state.acc,
                self.state.stack,
                self.state.vars,
                self.state.call_stack
            );

            let before = self.state.pc;
            let op = Op::decode(&instr.tokens).map_err(|source| RuntimeError::Instruction {
                line: instr.line,
                source,
            })?;
            self.dispatch(&op, instr.line)?;

            // Opcodes that did not place the counter themselves advance by
            // exactly one.
            if self.state.pc == before {
                self.state.pc += 1;
            }
        }
        Ok(())
    }

    /// Execute one typed line against the current machine state (REPL).
    ///
    /// The program is reset to a single pseudo-instruction at line 0, so
    /// the skip opcodes have a counter to move; machine state persists
    /// across lines. Blank and comment-only lines do nothing.
    pub fn execute_line(&mut self, text: &str) -> Result<(), RuntimeError> {
        let parsed = brainrot_parser::parse(text);
        let Some(first) = parsed.instructions.into_iter().next() else {
            return Ok(());
        };

        let instr = Instruction::new(0, first.tokens);
        let op = Op::decode(&instr.tokens).map_err(|source| RuntimeError::Instruction {
            line: 0,
            source,
        })?;
        self.program = Program::new(vec![instr]);
        self.state.pc = 0;
        self.dispatch(&op, 0)
    }

    /// Execute a single decoded opcode.
    ///
    /// Control-flow opcodes that want a non-default target set the counter
    /// themselves; everything else leaves it untouched and relies on the
    /// caller's advance-by-one convention.
    fn dispatch(&mut self, op: &Op, line: usize) -> Result<(), RuntimeError> {
        match op {
            // Accumulator arithmetic. No overflow checking, no saturation.
            Op::Rizz => self.state.acc = self.state.acc.wrapping_add(1),
            Op::Gyatt => self.state.acc = self.state.acc.wrapping_sub(1),
            Op::Drip => self.state.acc = self.state.acc.wrapping_add(5),
            Op::Npc => self.state.acc = self.state.acc.wrapping_sub(5),
            Op::Lit => self.state.acc = self.state.acc.wrapping_add(10),
            Op::Slaps => self.state.acc = self.state.acc.wrapping_sub(10),
            Op::Yeet => self.state.acc = self.state.acc.wrapping_mul(2),
            Op::Cringe => {
                if self.state.acc != 0 {
                    self.state.acc = self.state.acc.div_euclid(2);
                }
            }

            // Operand stack.
            Op::Flex => {
                let sq = self.state.acc.wrapping_mul(self.state.acc);
                self.state.stack.push(sq);
            }
            Op::Fam => self.state.stack.push(self.state.acc),
            Op::Peekback => {
                self.state.acc = *self
                    .state
                    .stack
                    .last()
                    .ok_or(RuntimeError::EmptyStack { line })?;
            }
            Op::Clapback => {
                self.state.acc = self
                    .state
                    .stack
                    .pop()
                    .ok_or(RuntimeError::EmptyStack { line })?;
            }

            // Variables.
            Op::Set(name) => {
                self.state.vars.insert(name.clone(), self.state.acc);
            }
            Op::Get(name) => {
                self.state.acc =
                    *self
                        .state
                        .vars
                        .get(name)
                        .ok_or_else(|| RuntimeError::UnknownVariable {
                            line,
                            name: name.clone(),
                        })?;
            }

            // I/O.
            Op::Spill => self.exec_spill(line)?,
            Op::Skibidi => self.output.write_line(&self.state.acc.to_string()),

            // Control flow.
            Op::NoCap => self.state.acc = 0,
            Op::Sus => {
                if self.state.acc == 0 {
                    self.state.pc += 2;
                }
            }
            Op::Suspect => {
                if self.state.acc > 0 {
                    self.state.pc += 2;
                }
            }
            Op::Vibe => self.exec_vibe(line)?,
            Op::Unvibe => self.exec_unvibe(line)?,

            // Functions.
            Op::Call(name) => self.exec_call(name, line)?,
            Op::Return => {
                self.state.pc = self
                    .state
                    .call_stack
                    .pop()
                    .ok_or(RuntimeError::ReturnWithoutCall { line })?;
            }
            // Definition boundaries are handled by the run loop; reaching
            // them here means REPL input, where they do nothing.
            Op::Func(_) | Op::EndFunc => {}

            // File inclusion.
            Op::Load(path) => self.include(path.clone(), line)?,

            // Meta.
            Op::Help => {
                for help_line in HELP {
                    self.output.write_line(help_line);
                }
            }
            Op::Version => self.output.write_line(&format!("brainrot version {VERSION}")),
            Op::Mid => {}
        }

        Ok(())
    }

    fn exec_spill(&mut self, line: usize) -> Result<(), RuntimeError> {
        let value = self
            .input
            .next_value()
            .map_err(|e| RuntimeError::InvalidInput {
                line,
                text: match e {
                    InputError::NotAnInteger { text } => text,
                    InputError::Closed => "<end of input>".to_string(),
                },
            })?;
        self.state.acc = value;
        Ok(())
    }

    /// `vibe`: enter the loop body if the accumulator is positive,
    /// otherwise scan forward over nested pairs and land just past the
    /// matching `unvibe`.
    fn exec_vibe(&mut self, line: usize) -> Result<(), RuntimeError> {
        if self.state.acc > 0 {
            self.state.loop_stack.push(self.state.pc);
            return Ok(());
        }

        let mut depth = 1usize;
        let mut scan = self.state.pc;
        while depth > 0 {
            scan += 1;
            let Some(next) = self.program.get(scan) else {
                return Err(RuntimeError::UnmatchedLoopStart { line });
            };
            match next.mnemonic() {
                "vibe" => depth += 1,
                "unvibe" => depth -= 1,
                _ => {}
            }
        }
        self.state.pc = scan + 1;
        Ok(())
    }

    /// `unvibe`: post-test check. Jump back into the body while the
    /// accumulator stays positive; pop the loop once it is not.
    fn exec_unvibe(&mut self, line: usize) -> Result<(), RuntimeError> {
        let &start = self
            .state
            .loop_stack
            .last()
            .ok_or(RuntimeError::UnmatchedLoopEnd { line })?;
        if self.state.acc > 0 {
            self.state.pc = start + 1;
        } else {
            self.state.loop_stack.pop();
        }
        Ok(())
    }

    fn exec_call(&mut self, name: &str, line: usize) -> Result<(), RuntimeError> {
        let (start, _end) =
            self.functions
                .body(name)
                .ok_or_else(|| RuntimeError::UnknownFunction {
                    line,
                    name: name.to_string(),
                })?;
        self.state.call_stack.push(self.state.pc + 1);
        self.state.pc = start;
        Ok(())
    }

    /// The `load` opcode: splice another source file into this program.
    ///
    /// The included instructions are appended to the current program and
    /// the two function tables merged with shifted indices, included
    /// definitions winning on a name collision. The counter is left alone,
    /// so execution continues after the `load` instruction; appended
    /// straight-line code only runs if execution falls off the end of the
    /// current program.
    fn include(&mut self, path: String, line: usize) -> Result<(), RuntimeError> {
        let (included, functions) = brainrot_parser::load_file(&path)
            .map_err(|source| RuntimeError::Include { line, source })?;

        let offset = self.program.len();
        self.program.instructions.extend(included.instructions);
        self.functions.merge_offset(functions, offset);
        debug!("included '{path}': {offset} -> {} instructions", self.program.len());
        Ok(())
    }
}
