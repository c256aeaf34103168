//! Iterative release of nested compounds.
//!
//! Pairs and vectors can nest to any depth, and the default drop glue frees
//! a chain one stack frame per level. Their `Drop` impls instead move
//! children onto a worklist, and `release` frees the list in a loop: every
//! uniquely owned compound popped off it gives up its own children before
//! its shell is dropped, so no shell drops anything nested.

use super::{Heap, Object};

/// Queue `obj` if freeing it could recurse; drop it in place otherwise.
pub(super) fn defer(obj: Object, pending: &mut Vec<Object>) {
    if matches!(obj, Object::Pair(_) | Object::Vector(_)) {
        pending.push(obj);
    }
}

/// Drop everything in `pending` without recursing through nesting.
pub(super) fn release(mut pending: Vec<Object>) {
    while let Some(obj) = pending.pop() {
        match obj {
            Object::Pair(pair) => {
                if let Some(mut pair) = Heap::into_inner(pair) {
                    pair.take_children(&mut pending);
                }
            }
            Object::Vector(vector) => {
                if let Some(mut vector) = Heap::into_inner(vector) {
                    vector.take_children(&mut pending);
                }
            }
            _ => {}
        }
    }
}
