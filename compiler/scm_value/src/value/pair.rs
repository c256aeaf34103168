//! Cons cells.

use parking_lot::RwLock;
use std::fmt;

use super::{teardown, Object};
use crate::errors::{nil_reference, SchemeResult};

/// A mutable cons cell.
///
/// Fields are read by value (cloning an `Object` shares, never copies,
/// heap contents) and replaced in place through `set_car` / `set_cdr`.
/// The locks make concurrent access memory-safe; they do not make a
/// read-modify-write sequence atomic, which remains the caller's job.
pub struct Pair {
    car: RwLock<Object>,
    cdr: RwLock<Object>,
}

impl Pair {
    pub fn new(car: Object, cdr: Object) -> Self {
        Pair {
            car: RwLock::new(car),
            cdr: RwLock::new(cdr),
        }
    }

    #[inline]
    pub fn car(&self) -> Object {
        self.car.read().clone()
    }

    #[inline]
    pub fn cdr(&self) -> Object {
        self.cdr.read().clone()
    }

    pub fn set_car(&self, value: Object) {
        *self.car.write() = value;
    }

    pub fn set_cdr(&self, value: Object) {
        *self.cdr.write() = value;
    }
}

/// Hands both fields to the teardown worklist, so dropping a list nested
/// through either field does not recurse once per level.
impl Drop for Pair {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        teardown::release(pending);
    }
}

impl Pair {
    pub(super) fn take_children(&mut self, pending: &mut Vec<Object>) {
        teardown::defer(std::mem::replace(self.car.get_mut(), Object::NULL), pending);
        teardown::defer(std::mem::replace(self.cdr.get_mut(), Object::NULL), pending);
    }
}

/// First component of a pair.
pub fn car(pair: Option<&Pair>) -> SchemeResult<Object> {
    pair.map(Pair::car).ok_or_else(|| nil_reference("cons"))
}

/// Second component of a pair.
pub fn cdr(pair: Option<&Pair>) -> SchemeResult<Object> {
    pair.map(Pair::cdr).ok_or_else(|| nil_reference("cons"))
}

/// Replace the first component of a pair.
pub fn set_car(pair: Option<&Pair>, value: Object) -> SchemeResult<()> {
    pair.ok_or_else(|| nil_reference("cons"))?.set_car(value);
    Ok(())
}

/// Replace the second component of a pair.
pub fn set_cdr(pair: Option<&Pair>, value: Object) -> SchemeResult<()> {
    pair.ok_or_else(|| nil_reference("cons"))?.set_cdr(value);
    Ok(())
}

/// Structural equality (`equal?`).
///
/// The cdr chain is walked iteratively so long lists do not recurse once
/// per element; nesting in the car position recurses through `Object::eq`.
impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        if self.car() != other.car() {
            return false;
        }
        let (mut left, mut right) = (self.cdr(), other.cdr());
        loop {
            let (next_left, next_right) = match (&left, &right) {
                (Object::Pair(a), Object::Pair(b)) => {
                    if super::Heap::ptr_eq(a, b) {
                        return true;
                    }
                    if a.car() != b.car() {
                        return false;
                    }
                    (a.cdr(), b.cdr())
                }
                _ => return left == right,
            };
            left = next_left;
            right = next_right;
        }
    }
}

impl fmt::Debug for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair({:?}, {:?})", self.car(), self.cdr())
    }
}
