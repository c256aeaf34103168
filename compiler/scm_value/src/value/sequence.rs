//! Fixed-length mutable sequences: strings, vectors, and byte-vectors.
//!
//! The three share one bounds-checked implementation, `Sequence<K>`, where
//! the `SequenceKind` parameter fixes the element type, the storage type,
//! and how an incoming element is validated. Only byte-vectors reject
//! elements (outside `[0, 255]`); the check runs on construction, on every
//! `set`, and on `fill`.
//!
//! Lengths and indices are `i64` so negative inputs reach validation and
//! come back as `Value` / `OutOfBounds` errors.

use parking_lot::RwLock;
use std::fmt;
use std::marker::PhantomData;

use super::{teardown, Object};
use crate::errors::{
    byte_out_of_range, index_out_of_bounds, invalid_length, length_too_large, nil_reference,
    SchemeResult,
};

/// Element policy for a `Sequence`.
pub trait SequenceKind: 'static {
    /// Element type passed to and returned from accessors.
    type Elem: Clone;
    /// Element type held in storage.
    type Slot: Clone + PartialEq + Send + Sync;

    /// Name used in error descriptions ("string", "vector", ...).
    const NAME: &'static str;
    /// Irritant label for an absent sequence reference.
    const LABEL: &'static str;

    /// Validate and convert an element for storage.
    fn store(elem: Self::Elem) -> SchemeResult<Self::Slot>;

    /// Convert a stored element back for the caller.
    fn load(slot: &Self::Slot) -> Self::Elem;

    /// Move out any stored objects that could nest, for teardown.
    #[inline]
    fn take_children(_slots: &mut [Self::Slot], _pending: &mut Vec<Object>) {}
}

/// Characters; any Unicode scalar value is accepted.
pub enum StringKind {}

impl SequenceKind for StringKind {
    type Elem = char;
    type Slot = char;

    const NAME: &'static str = "string";
    const LABEL: &'static str = "str";

    #[inline]
    fn store(elem: char) -> SchemeResult<char> {
        Ok(elem)
    }

    #[inline]
    fn load(slot: &char) -> char {
        *slot
    }
}

/// Heterogeneous objects.
pub enum VectorKind {}

impl SequenceKind for VectorKind {
    type Elem = Object;
    type Slot = Object;

    const NAME: &'static str = "vector";
    const LABEL: &'static str = "vec";

    #[inline]
    fn store(elem: Object) -> SchemeResult<Object> {
        Ok(elem)
    }

    #[inline]
    fn load(slot: &Object) -> Object {
        slot.clone()
    }

    fn take_children(slots: &mut [Object], pending: &mut Vec<Object>) {
        for slot in slots {
            teardown::defer(std::mem::replace(slot, Object::NULL), pending);
        }
    }
}

/// Bytes, exchanged with callers as fixnums.
pub enum BytesKind {}

impl SequenceKind for BytesKind {
    type Elem = i64;
    type Slot = u8;

    const NAME: &'static str = "byte-vector";
    const LABEL: &'static str = "bv";

    #[inline]
    fn store(elem: i64) -> SchemeResult<u8> {
        u8::try_from(elem).map_err(|_| byte_out_of_range("byte", elem))
    }

    #[inline]
    fn load(slot: &u8) -> i64 {
        i64::from(*slot)
    }
}

/// A fixed-length, per-index mutable sequence.
pub struct Sequence<K: SequenceKind> {
    slots: RwLock<Box<[K::Slot]>>,
    _kind: PhantomData<K>,
}

pub type SchemeString = Sequence<StringKind>;
pub type Vector = Sequence<VectorKind>;
pub type ByteVector = Sequence<BytesKind>;

impl<K: SequenceKind> Sequence<K> {
    /// Allocate `length` elements, each set to `fill`.
    pub fn new(length: i64, fill: K::Elem) -> SchemeResult<Self> {
        if length < 0 {
            return Err(invalid_length(length));
        }
        let len = usize::try_from(length).map_err(|_| length_too_large(length))?;
        let slot = K::store(fill)?;

        let mut slots = Vec::new();
        slots
            .try_reserve_exact(len)
            .map_err(|_| length_too_large(length))?;
        slots.resize(len, slot);
        Ok(Self::from_slots(slots))
    }

    fn from_slots(slots: Vec<K::Slot>) -> Self {
        Sequence {
            slots: RwLock::new(slots.into_boxed_slice()),
            _kind: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn index(index: i64, len: usize) -> SchemeResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .ok_or_else(|| index_out_of_bounds(K::NAME, index, len))
    }

    /// Element at `index`.
    pub fn get(&self, index: i64) -> SchemeResult<K::Elem> {
        let slots = self.slots.read();
        let i = Self::index(index, slots.len())?;
        Ok(K::load(&slots[i]))
    }

    /// Replace the element at `index`.
    ///
    /// The bounds check runs before element validation, so an out-of-range
    /// index is reported even when the value is also invalid.
    pub fn set(&self, index: i64, value: K::Elem) -> SchemeResult<()> {
        let mut slots = self.slots.write();
        let i = Self::index(index, slots.len())?;
        slots[i] = K::store(value)?;
        Ok(())
    }

    /// Overwrite every element with `value`.
    pub fn fill(&self, value: K::Elem) -> SchemeResult<()> {
        let slot = K::store(value)?;
        self.slots.write().fill(slot);
        Ok(())
    }

    /// Snapshot of the current elements.
    pub fn to_vec(&self) -> Vec<K::Elem> {
        self.slots.read().iter().map(K::load).collect()
    }
}

impl<K: SequenceKind> Sequence<K> {
    pub(super) fn take_children(&mut self, pending: &mut Vec<Object>) {
        K::take_children(self.slots.get_mut(), pending);
    }
}

/// Vectors nested inside vectors are released through the teardown
/// worklist rather than by recursive drop glue.
impl<K: SequenceKind> Drop for Sequence<K> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.take_children(&mut pending);
        teardown::release(pending);
    }
}

impl SchemeString {
    /// A string holding the characters of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_slots(text.chars().collect())
    }

    /// The current contents as Rust text.
    pub fn text(&self) -> String {
        self.slots.read().iter().collect()
    }
}

impl From<Vec<Object>> for Vector {
    fn from(items: Vec<Object>) -> Self {
        Self::from_slots(items)
    }
}

impl From<Vec<u8>> for ByteVector {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_slots(bytes)
    }
}

/// Element at `index` of a possibly-absent sequence.
pub fn ref_at<K: SequenceKind>(seq: Option<&Sequence<K>>, index: i64) -> SchemeResult<K::Elem> {
    seq.ok_or_else(|| nil_reference(K::LABEL))?.get(index)
}

/// Replace the element at `index` of a possibly-absent sequence.
pub fn set_at<K: SequenceKind>(
    seq: Option<&Sequence<K>>,
    index: i64,
    value: K::Elem,
) -> SchemeResult<()> {
    seq.ok_or_else(|| nil_reference(K::LABEL))?.set(index, value)
}

/// Element-wise structural equality.
impl<K: SequenceKind> PartialEq for Sequence<K> {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        // Snapshot one side so the two locks are never held together.
        let left = self.slots.read().to_vec();
        *left == **other.slots.read()
    }
}

impl<K: SequenceKind> fmt::Debug for Sequence<K>
where
    K::Slot: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&&**self.slots.read()).finish()
    }
}
