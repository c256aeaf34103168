//! Shared ownership for heap-allocated values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Reference-counted handle to a heap value.
///
/// `Heap::new` is visible only inside the value module, so every compound
/// `Object` is created by an `Object::` factory. Cloning a `Heap` shares the
/// allocation; identity is allocation identity (`Heap::ptr_eq`).
pub struct Heap<T: ?Sized>(Arc<T>);

impl<T> Heap<T> {
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// Take the value out if this is the last handle to it.
    #[inline]
    pub(super) fn into_inner(this: Self) -> Option<T> {
        Arc::into_inner(this.0)
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

#[cfg(test)]
mod tests;
