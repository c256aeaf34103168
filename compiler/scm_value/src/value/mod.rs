//! Runtime values.
//!
//! `Object` is a closed sum type: every consumer matches exhaustively, and
//! adding a variant is a compile error at each dispatch site until handled.
//!
//! # Representation
//!
//! Immediates and scalars are stored inline and each fits in one machine
//! word (asserted below). Compound values live behind `Heap<T>`; cloning an
//! `Object` shares them.
//!
//! # Equality
//!
//! - `==` is structural (`equal?`): recursive over pairs, element-wise over
//!   sequences. Identical allocations are equal without a content walk.
//! - `Object::is_eq` is identity (`eq?`): same singleton, same scalar value,
//!   same symbol, or same allocation.
//!
//! Flonums follow IEEE-754 under both, so `+nan.0` is not equal to itself.
//! Neither predicate detects cycles.
//!
//! # Locking
//!
//! The model does its own per-object locking: each pair field and each
//! sequence buffer sits behind a `parking_lot::RwLock`, so `Object` is
//! `Send + Sync` and a shared value can be read and mutated from any
//! thread without data races. A lock covers one field or one buffer for one
//! call. Sequences of calls (read, then `set`) are not atomic, and callers
//! that need that still serialize access themselves.
//!
//! # Teardown
//!
//! Dropping a pair or vector frees nested pairs and vectors through a
//! worklist (`teardown`), so depth is bounded by memory rather than stack.

mod heap;
mod immediate;
mod pair;
mod port;
mod print;
mod sequence;
mod symbol;
mod teardown;

use std::fmt;

use scm_stack::ensure_sufficient_stack;

use crate::errors::{type_mismatch, SchemeResult};

pub use heap::Heap;
pub use immediate::Immediate;
pub use pair::{car, cdr, set_car, set_cdr, Pair};
pub use port::{InputPort, OutputPort};
pub use sequence::{
    ref_at, set_at, ByteVector, BytesKind, SchemeString, Sequence, SequenceKind, StringKind,
    Vector, VectorKind,
};
pub use symbol::{intern, symbol_count, symbol_name, Symbol};

// One word of payload plus the tag.
#[cfg(target_pointer_width = "64")]
scm_ir::static_assert_size!(Object, 16);
#[cfg(target_pointer_width = "64")]
scm_ir::static_assert_size!(Heap<Pair>, 8);

/// A Scheme value.
#[derive(Clone)]
pub enum Object {
    // Inline values
    Immediate(Immediate),
    Fixnum(i64),
    Character(char),
    Flonum(f64),
    Symbol(Symbol),

    // Heap values (constructed only through factories)
    Pair(Heap<Pair>),
    String(Heap<SchemeString>),
    Vector(Heap<Vector>),
    ByteVector(Heap<ByteVector>),
    InputPort(Heap<InputPort>),
    OutputPort(Heap<OutputPort>),
}

/// Fieldless discriminator over `Object` variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Immediate,
    Fixnum,
    Character,
    Flonum,
    Symbol,
    Pair,
    String,
    Vector,
    ByteVector,
    InputPort,
    OutputPort,
}

// Factory methods

impl Object {
    pub const NULL: Object = Object::Immediate(Immediate::Null);
    pub const TRUE: Object = Object::Immediate(Immediate::True);
    pub const FALSE: Object = Object::Immediate(Immediate::False);
    pub const EOF: Object = Object::Immediate(Immediate::Eof);
    pub const UNDEFINED: Object = Object::Immediate(Immediate::Undefined);
    pub const UNSPECIFIED: Object = Object::Immediate(Immediate::Unspecified);

    #[inline]
    pub fn boolean(b: bool) -> Self {
        Object::Immediate(Immediate::boolean(b))
    }

    #[inline]
    pub fn fixnum(n: i64) -> Self {
        Object::Fixnum(n)
    }

    #[inline]
    pub fn character(c: char) -> Self {
        Object::Character(c)
    }

    #[inline]
    pub fn flonum(x: f64) -> Self {
        Object::Flonum(x)
    }

    /// The interned symbol named `name`.
    #[inline]
    pub fn symbol(name: &str) -> Self {
        Object::Symbol(Symbol::intern(name))
    }

    /// A freshly allocated pair.
    pub fn cons(car: Object, cdr: Object) -> Self {
        Object::Pair(Heap::new(Pair::new(car, cdr)))
    }

    /// A proper list of `items`, in order.
    pub fn list(items: impl IntoIterator<Item = Object>) -> Self {
        let items: Vec<Object> = items.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(Object::NULL, |tail, head| Object::cons(head, tail))
    }

    /// A string of `length` copies of `fill`.
    pub fn string(length: i64, fill: char) -> SchemeResult<Self> {
        Ok(Object::String(Heap::new(SchemeString::new(length, fill)?)))
    }

    /// A string holding the characters of `text`.
    pub fn string_from(text: &str) -> Self {
        Object::String(Heap::new(SchemeString::from_text(text)))
    }

    /// A vector of `length` references to `fill`.
    pub fn vector(length: i64, fill: Object) -> SchemeResult<Self> {
        Ok(Object::Vector(Heap::new(Vector::new(length, fill)?)))
    }

    pub fn vector_from(items: Vec<Object>) -> Self {
        Object::Vector(Heap::new(Vector::from(items)))
    }

    /// A byte-vector of `length` copies of `fill`, which must be in `[0, 255]`.
    pub fn bytevector(length: i64, fill: i64) -> SchemeResult<Self> {
        Ok(Object::ByteVector(Heap::new(ByteVector::new(length, fill)?)))
    }

    pub fn bytevector_from(bytes: Vec<u8>) -> Self {
        Object::ByteVector(Heap::new(ByteVector::from(bytes)))
    }

    pub fn input_port(reader: impl std::io::Read + Send + 'static) -> Self {
        Object::InputPort(Heap::new(InputPort::new(reader)))
    }

    pub fn output_port(writer: impl std::io::Write + Send + 'static) -> Self {
        Object::OutputPort(Heap::new(OutputPort::new(writer)))
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Object::Fixnum(n)
    }
}

impl From<char> for Object {
    fn from(c: char) -> Self {
        Object::Character(c)
    }
}

impl From<f64> for Object {
    fn from(x: f64) -> Self {
        Object::Flonum(x)
    }
}

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::boolean(b)
    }
}

impl From<Symbol> for Object {
    fn from(sym: Symbol) -> Self {
        Object::Symbol(sym)
    }
}

// Discrimination and projection

impl Object {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Object::Immediate(_) => ObjectKind::Immediate,
            Object::Fixnum(_) => ObjectKind::Fixnum,
            Object::Character(_) => ObjectKind::Character,
            Object::Flonum(_) => ObjectKind::Flonum,
            Object::Symbol(_) => ObjectKind::Symbol,
            Object::Pair(_) => ObjectKind::Pair,
            Object::String(_) => ObjectKind::String,
            Object::Vector(_) => ObjectKind::Vector,
            Object::ByteVector(_) => ObjectKind::ByteVector,
            Object::InputPort(_) => ObjectKind::InputPort,
            Object::OutputPort(_) => ObjectKind::OutputPort,
        }
    }

    /// Name of the value's type as seen by Scheme code.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Immediate(imm) => imm.type_name(),
            Object::Fixnum(_) => "fixnum",
            Object::Character(_) => "char",
            Object::Flonum(_) => "flonum",
            Object::Symbol(_) => "symbol",
            Object::Pair(_) => "pair",
            Object::String(_) => "string",
            Object::Vector(_) => "vector",
            Object::ByteVector(_) => "bytevector",
            Object::InputPort(_) => "input-port",
            Object::OutputPort(_) => "output-port",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Object::Immediate(Immediate::Null))
    }

    /// Everything except `#f` counts as true.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Object::Immediate(Immediate::False))
    }

    /// Whether this is a finite, `()`-terminated chain of pairs.
    pub fn is_list(&self) -> bool {
        // Floyd's cycle detection: `fast` takes two steps per `slow` step.
        let mut slow = self.clone();
        let mut fast = self.clone();
        loop {
            for _ in 0..2 {
                fast = match fast {
                    Object::Immediate(Immediate::Null) => return true,
                    Object::Pair(p) => p.cdr(),
                    _ => return false,
                };
            }
            slow = match &slow {
                Object::Pair(p) => p.cdr(),
                _ => return false,
            };
            if fast.is_eq(&slow) {
                return false;
            }
        }
    }

    pub fn as_pair(&self) -> Option<&Pair> {
        match self {
            Object::Pair(p) => Some(&**p),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<Symbol> {
        match self {
            Object::Symbol(sym) => Some(*sym),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&SchemeString> {
        match self {
            Object::String(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector> {
        match self {
            Object::Vector(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_bytevector(&self) -> Option<&ByteVector> {
        match self {
            Object::ByteVector(bv) => Some(&**bv),
            _ => None,
        }
    }

    pub fn expect_pair(&self) -> SchemeResult<&Pair> {
        self.as_pair()
            .ok_or_else(|| type_mismatch("pair", self.type_name()))
    }

    pub fn expect_symbol(&self) -> SchemeResult<Symbol> {
        self.as_symbol()
            .ok_or_else(|| type_mismatch("symbol", self.type_name()))
    }

    pub fn expect_string(&self) -> SchemeResult<&SchemeString> {
        self.as_string()
            .ok_or_else(|| type_mismatch("string", self.type_name()))
    }

    pub fn expect_vector(&self) -> SchemeResult<&Vector> {
        self.as_vector()
            .ok_or_else(|| type_mismatch("vector", self.type_name()))
    }

    pub fn expect_bytevector(&self) -> SchemeResult<&ByteVector> {
        self.as_bytevector()
            .ok_or_else(|| type_mismatch("bytevector", self.type_name()))
    }

    pub fn expect_fixnum(&self) -> SchemeResult<i64> {
        match self {
            Object::Fixnum(n) => Ok(*n),
            _ => Err(type_mismatch("fixnum", self.type_name())),
        }
    }

    pub fn expect_char(&self) -> SchemeResult<char> {
        match self {
            Object::Character(c) => Ok(*c),
            _ => Err(type_mismatch("char", self.type_name())),
        }
    }
}

// Equivalence

impl Object {
    /// Identity comparison (`eq?`).
    #[allow(clippy::float_cmp, reason = "flonum identity is IEEE equality")]
    pub fn is_eq(&self, other: &Object) -> bool {
        match (self, other) {
            (Object::Immediate(a), Object::Immediate(b)) => a == b,
            (Object::Fixnum(a), Object::Fixnum(b)) => a == b,
            (Object::Character(a), Object::Character(b)) => a == b,
            (Object::Flonum(a), Object::Flonum(b)) => a == b,
            (Object::Symbol(a), Object::Symbol(b)) => a == b,
            (Object::Pair(a), Object::Pair(b)) => Heap::ptr_eq(a, b),
            (Object::String(a), Object::String(b)) => Heap::ptr_eq(a, b),
            (Object::Vector(a), Object::Vector(b)) => Heap::ptr_eq(a, b),
            (Object::ByteVector(a), Object::ByteVector(b)) => Heap::ptr_eq(a, b),
            (Object::InputPort(a), Object::InputPort(b)) => Heap::ptr_eq(a, b),
            (Object::OutputPort(a), Object::OutputPort(b)) => Heap::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Structural equality (`equal?`).
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Object::Pair(a), Object::Pair(b)) => Heap::ptr_eq(a, b) || **a == **b,
            (Object::String(a), Object::String(b)) => Heap::ptr_eq(a, b) || **a == **b,
            (Object::Vector(a), Object::Vector(b)) => Heap::ptr_eq(a, b) || **a == **b,
            (Object::ByteVector(a), Object::ByteVector(b)) => Heap::ptr_eq(a, b) || **a == **b,
            _ => self.is_eq(other),
        })
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Immediate(imm) => write!(f, "{imm:?}"),
            Object::Fixnum(n) => write!(f, "Fixnum({n})"),
            Object::Character(c) => write!(f, "Character({c:?})"),
            Object::Flonum(x) => write!(f, "Flonum({x:?})"),
            Object::Symbol(sym) => write!(f, "{sym:?}"),
            Object::Pair(_) => write!(f, "Pair({self})"),
            Object::String(_) => write!(f, "String({self})"),
            Object::Vector(_) => write!(f, "Vector({self})"),
            Object::ByteVector(_) => write!(f, "ByteVector({self})"),
            Object::InputPort(_) => write!(f, "InputPort"),
            Object::OutputPort(_) => write!(f, "OutputPort"),
        }
    }
}
