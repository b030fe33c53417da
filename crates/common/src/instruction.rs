//! Source-line instruction representation.

/// One meaningful source line: its 1-based line number and its
/// whitespace-split tokens. The first token is the mnemonic; the rest are
/// arguments. Tokens are never empty for parser-produced instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// 1-based line number in the original source (0 for REPL input).
    pub line: usize,
    /// Whitespace-split tokens; the first is the mnemonic.
    pub tokens: Vec<String>,
}

impl Instruction {
    /// Create a new instruction.
    pub fn new(line: usize, tokens: Vec<String>) -> Self {
        Self { line, tokens }
    }

    /// The mnemonic (first token), or `""` for a token-less instruction.
    pub fn mnemonic(&self) -> &str {
        self.tokens.first().map(String::as_str).unwrap_or("")
    }

    /// The argument tokens (everything after the mnemonic).
    pub fn args(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }
}
