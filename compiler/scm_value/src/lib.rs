//! Scheme Value Model - the runtime representation of Scheme data.
//!
//! This crate provides:
//! - `Object`, a closed sum type over every value kind
//! - Immediates (`Immediate`) and scalars (fixnum, character, flonum)
//! - Compound heap types: `Pair`, `SchemeString`, `Vector`, `ByteVector`,
//!   `InputPort`, `OutputPort`
//! - Interned symbols backed by a process-wide table
//! - The error taxonomy (`SchemeError`, `ErrorKind`, `SchemeResult`)
//!
//! # Heap Values
//!
//! Compound values are shared through `Heap<T>`, an `Arc` wrapper whose
//! constructor is private to the value module. Every heap allocation goes
//! through an `Object::` factory, so cloning an `Object` never deep-copies
//! and two separately constructed compounds are never identical.
//!
//! # Absent References
//!
//! Accessors that the reader and evaluator call on possibly-missing values
//! take `Option<&T>` and report `None` as a `Nil` error rather than
//! panicking: `car(obj.as_pair())` is the usual shape.

mod errors;
mod value;

pub use errors::{
    byte_out_of_range, index_out_of_bounds, invalid_length, length_too_large, nil_reference,
    type_mismatch, unexpected, ErrorKind, Irritant, SchemeError, SchemeResult,
};
pub use value::{
    car, cdr, intern, ref_at, set_at, set_car, set_cdr, symbol_count, symbol_name, ByteVector,
    BytesKind, Heap, Immediate, InputPort, Object, ObjectKind, OutputPort, Pair, SchemeString,
    Sequence, SequenceKind, StringKind, Symbol, Vector, VectorKind,
};
