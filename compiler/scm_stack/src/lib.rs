//! Stack growth for recursion over nested Scheme data.
//!
//! Pairs and vectors can nest to any depth (a reader handed
//! `((((...))))` builds exactly that), and structural equality and the
//! printer walk that nesting recursively. Wrapping each recursive step in
//! [`ensure_sufficient_stack`] grows the stack on demand instead of
//! overflowing it.
//!
//! - **Native targets**: uses `stacker` to grow the stack.
//! - **WASM targets**: plain call; the WASM runtime manages its own stack.

/// If less than this remains, grow the stack (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the
/// red zone.
///
/// ```text
/// fn depth(obj: &Object) -> usize {
///     ensure_sufficient_stack(|| match obj {
///         Object::Pair(p) => 1 + depth(&p.car()),
///         _ => 0,
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
