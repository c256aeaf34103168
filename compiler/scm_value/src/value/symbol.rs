//! Interned symbols.
//!
//! All symbols live in one process-wide `StringInterner`. Interning the
//! same text twice yields the same `Symbol`, so symbol identity and symbol
//! name equality coincide, and comparison is a 32-bit integer compare.
//! The table starts empty on first use, grows monotonically, and is never
//! torn down before process exit.

use scm_ir::{Name, StringInterner};
use std::fmt;
use std::sync::OnceLock;

use crate::errors::{nil_reference, SchemeResult};

static SYMBOL_TABLE: OnceLock<StringInterner> = OnceLock::new();

fn table() -> &'static StringInterner {
    SYMBOL_TABLE.get_or_init(|| {
        tracing::trace!("initializing symbol table");
        StringInterner::new()
    })
}

/// Canonical handle for an interned name.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Symbol(Name);

scm_ir::static_assert_size!(Symbol, 4);

impl Symbol {
    /// Return the symbol for `name`, registering it on first request.
    ///
    /// # Panics
    /// Panics if the symbol table overflows. Use `try_intern` to get an
    /// error instead.
    pub fn intern(name: &str) -> Self {
        Symbol(table().intern(name))
    }

    /// Fallible version of `intern`.
    pub fn try_intern(name: &str) -> SchemeResult<Self> {
        Ok(Symbol(table().try_intern(name)?))
    }

    /// The symbol's text.
    pub fn name(self) -> &'static str {
        table().lookup(self.0)
    }
}

/// Return the symbol for `name`, registering it on first request.
pub fn intern(name: &str) -> Symbol {
    Symbol::intern(name)
}

/// The text of a symbol.
pub fn symbol_name(sym: Option<Symbol>) -> SchemeResult<&'static str> {
    sym.map(Symbol::name).ok_or_else(|| nil_reference("sym"))
}

/// Number of distinct symbols interned so far in this process.
pub fn symbol_count() -> usize {
    SYMBOL_TABLE.get().map_or(0, StringInterner::len)
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.name())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
