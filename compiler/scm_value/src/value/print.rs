//! External representation of values.
//!
//! `Display` on `Object` writes the form a reader would accept back
//! (`write` style): strings are quoted and escaped, characters use `#\`
//! syntax. Ports and the non-datum immediates print as `#<...>`.

use std::fmt::{self, Write};

use scm_stack::ensure_sufficient_stack;

use super::{Immediate, Object, Pair};

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Object::Immediate(imm) => write!(f, "{imm}"),
            Object::Fixnum(n) => write!(f, "{n}"),
            Object::Character(c) => write_char(f, *c),
            Object::Flonum(x) => write_flonum(f, *x),
            Object::Symbol(sym) => write!(f, "{sym}"),
            Object::Pair(pair) => write_list(f, pair),
            Object::String(s) => write_string(f, &s.text()),
            Object::Vector(v) => write_items(f, "#(", v.to_vec().into_iter()),
            Object::ByteVector(bv) => write_items(f, "#u8(", bv.to_vec().into_iter()),
            Object::InputPort(_) => f.write_str("#<input-port>"),
            Object::OutputPort(_) => f.write_str("#<output-port>"),
        })
    }
}

/// Walks the cdr chain iteratively; only car nesting recurses.
fn write_list(f: &mut fmt::Formatter<'_>, pair: &Pair) -> fmt::Result {
    write!(f, "({}", pair.car())?;
    let mut tail = pair.cdr();
    loop {
        tail = match tail {
            Object::Immediate(Immediate::Null) => break,
            Object::Pair(next) => {
                write!(f, " {}", next.car())?;
                next.cdr()
            }
            other => {
                write!(f, " . {other}")?;
                break;
            }
        };
    }
    f.write_char(')')
}

fn write_items<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{item}")?;
    }
    f.write_char(')')
}

fn write_char(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    let name = match c {
        '\u{7}' => "alarm",
        '\u{8}' => "backspace",
        '\u{7f}' => "delete",
        '\u{1b}' => "escape",
        '\n' => "newline",
        '\0' => "null",
        '\r' => "return",
        ' ' => "space",
        '\t' => "tab",
        c if c.is_control() => return write!(f, "#\\x{:x}", u32::from(c)),
        c => return write!(f, "#\\{c}"),
    };
    write!(f, "#\\{name}")
}

fn write_flonum(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        f.write_str("+nan.0")
    } else if x.is_infinite() {
        f.write_str(if x > 0.0 { "+inf.0" } else { "-inf.0" })
    } else {
        // Debug keeps a trailing ".0" on integral values.
        write!(f, "{x:?}")
    }
}

fn write_string(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests;
