//! Scheme IR - shared identifier types.
//!
//! This crate holds the pieces that every later phase (reader, evaluator,
//! printer) needs without depending on the value model:
//! - `Name`: a 32-bit handle to an interned string
//! - `StringInterner`: the sharded, thread-safe table that hands out `Name`s
//!
//! Interned strings are leaked and live until process exit, so a `Name`
//! resolves to a `&'static str` for as long as its interner exists.

/// Compile-time assertion that a type has a specific size.
///
/// Used to pin the word-sized representations that later encodings rely on.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod interner;
mod name;

pub use interner::{InternError, StringInterner};
pub use name::Name;
