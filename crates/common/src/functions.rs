//! Function table: `func`/`endfunc` body ranges discovered at load time.

use std::collections::HashMap;

/// Where each function's body lives in the program.
///
/// The name map records `name -> (start, end)` where `start` is the index
/// just after the `func` header and `end` is the index of the matching
/// `endfunc`. Later definitions of the same name overwrite earlier ones.
///
/// A second, structural map records every header index against its matching
/// `endfunc` — shadowed definitions included — so the engine can skip a
/// body reached by straight-line fall-through without consulting the name
/// map at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionTable {
    bodies: HashMap<String, (usize, usize)>,
    header_ends: HashMap<usize, usize>,
}

impl FunctionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a definition whose `func` header sits at `header` and whose
    /// matching `endfunc` sits at `end`.
    pub fn record(&mut self, name: String, header: usize, end: usize) {
        self.bodies.insert(name, (header + 1, end));
        self.header_ends.insert(header, end);
    }

    /// The `(start, end)` body range for `name`, if defined.
    pub fn body(&self, name: &str) -> Option<(usize, usize)> {
        self.bodies.get(name).copied()
    }

    /// The matching `endfunc` index for the `func` header at `header`.
    pub fn end_of_header(&self, header: usize) -> Option<usize> {
        self.header_ends.get(&header).copied()
    }

    /// Whether `name` is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.bodies.contains_key(name)
    }

    /// Number of distinct function names.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Returns true if no functions are defined.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Merge `other` into this table, shifting its indices by `offset`.
    ///
    /// Used by file inclusion: the included program's instructions are
    /// appended at `offset`, and its definitions win on a name collision.
    pub fn merge_offset(&mut self, other: FunctionTable, offset: usize) {
        for (name, (start, end)) in other.bodies {
            self.bodies.insert(name, (start + offset, end + offset));
        }
        for (header, end) in other.header_ends {
            self.header_ends.insert(header + offset, end + offset);
        }
    }
}
