//! Opcode definitions for the brainrot language.

use crate::error::DecodeError;

/// A fully decoded instruction: mnemonic plus embedded arguments.
///
/// Tokens are decoded at dispatch time, not at load time, so an unknown
/// mnemonic in code that never executes is not an error. Trailing tokens
/// after a zero-argument mnemonic are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// `rizz` — accumulator += 1.
    Rizz,
    /// `gyatt` — accumulator -= 1.
    Gyatt,
    /// `drip` — accumulator += 5.
    Drip,
    /// `npc` — accumulator -= 5.
    Npc,
    /// `lit` — accumulator += 10.
    Lit,
    /// `slaps` — accumulator -= 10.
    Slaps,
    /// `yeet` — accumulator *= 2.
    Yeet,
    /// `cringe` — if the accumulator is non-zero, floor-halve it.
    Cringe,
    /// `flex` — push accumulator² onto the operand stack.
    Flex,
    /// `fam` — push the accumulator onto the operand stack.
    Fam,
    /// `peekback` — accumulator = top of stack without popping.
    Peekback,
    /// `clapback` — accumulator = popped top of stack.
    Clapback,
    /// `set <name>` — variable = accumulator.
    Set(String),
    /// `get <name>` — accumulator = variable.
    Get(String),
    /// `spill` — accumulator = next integer from the input source.
    Spill,
    /// `skibidi` — print the accumulator as a decimal line.
    Skibidi,
    /// `no cap` — accumulator = 0. The only two-token mnemonic.
    NoCap,
    /// `sus` — skip the next instruction if the accumulator is zero.
    Sus,
    /// `suspect` — skip the next instruction if the accumulator is positive.
    Suspect,
    /// `vibe` — loop entry: enter the body if the accumulator is positive,
    /// otherwise jump past the matching `unvibe`.
    Vibe,
    /// `unvibe` — loop exit: jump back to the body if the accumulator is
    /// still positive, otherwise fall through.
    Unvibe,
    /// `func <name>` — function definition header.
    Func(String),
    /// `endfunc` — function definition terminator.
    EndFunc,
    /// `call <name>` — push the return address and jump to the body.
    Call(String),
    /// `return` — pop the return address and jump there.
    Return,
    /// `load <path>` — include another source file.
    Load(String),
    /// `help` — print the command listing.
    Help,
    /// `version` — print the interpreter version.
    Version,
    /// `mid` — does nothing.
    Mid,
}

impl Op {
    /// Decode a token list into an opcode.
    pub fn decode(tokens: &[String]) -> Result<Self, DecodeError> {
        let Some((cmd, args)) = tokens.split_first() else {
            return Err(DecodeError::EmptyInstruction);
        };

        let op = match cmd.as_str() {
            "rizz" => Op::Rizz,
            "gyatt" => Op::Gyatt,
            "drip" => Op::Drip,
            "npc" => Op::Npc,
            "lit" => Op::Lit,
            "slaps" => Op::Slaps,
            "yeet" => Op::Yeet,
            "cringe" => Op::Cringe,
            "flex" => Op::Flex,
            "fam" => Op::Fam,
            "peekback" => Op::Peekback,
            "clapback" => Op::Clapback,
            "set" => Op::Set(one_arg(args, "set <varname>")?),
            "get" => Op::Get(one_arg(args, "get <varname>")?),
            "spill" => Op::Spill,
            "skibidi" => Op::Skibidi,
            "no" if args.len() == 1 && args[0] == "cap" => Op::NoCap,
            "sus" => Op::Sus,
            "suspect" => Op::Suspect,
            "vibe" => Op::Vibe,
            "unvibe" => Op::Unvibe,
            "func" => Op::Func(one_arg(args, "func <name>")?),
            "endfunc" => Op::EndFunc,
            "call" => Op::Call(one_arg(args, "call <funcname>")?),
            "return" => Op::Return,
            "load" => Op::Load(one_arg(args, "load <filename>")?),
            "help" => Op::Help,
            "version" => Op::Version,
            "mid" => Op::Mid,
            other => return Err(DecodeError::UnknownCommand(other.to_string())),
        };

        Ok(op)
    }

    /// The surface mnemonic for this opcode.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Op::Rizz => "rizz",
            Op::Gyatt => "gyatt",
            Op::Drip => "drip",
            Op::Npc => "npc",
            Op::Lit => "lit",
            Op::Slaps => "slaps",
            Op::Yeet => "yeet",
            Op::Cringe => "cringe",
            Op::Flex => "flex",
            Op::Fam => "fam",
            Op::Peekback => "peekback",
            Op::Clapback => "clapback",
            Op::Set(_) => "set",
            Op::Get(_) => "get",
            Op::Spill => "spill",
            Op::Skibidi => "skibidi",
            Op::NoCap => "no cap",
            Op::Sus => "sus",
            Op::Suspect => "suspect",
            Op::Vibe => "vibe",
            Op::Unvibe => "unvibe",
            Op::Func(_) => "func",
            Op::EndFunc => "endfunc",
            Op::Call(_) => "call",
            Op::Return => "return",
            Op::Load(_) => "load",
            Op::Help => "help",
            Op::Version => "version",
            Op::Mid => "mid",
        }
    }
}

fn one_arg(args: &[String], usage: &'static str) -> Result<String, DecodeError> {
    if args.len() != 1 {
        return Err(DecodeError::WrongArgCount { usage });
    }
    Ok(args[0].clone())
}
