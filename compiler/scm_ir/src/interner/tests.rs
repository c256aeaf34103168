#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let hello = interner.intern("hello");
    let world = interner.intern("world");
    let hello2 = interner.intern("hello");

    assert_eq!(hello, hello2);
    assert_ne!(hello, world);

    assert_eq!(interner.lookup(hello), "hello");
    assert_eq!(interner.lookup(world), "world");
}

#[test]
fn test_new_interner_is_empty() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.len(), 0);
}

#[test]
fn test_len_counts_distinct_strings() {
    let interner = StringInterner::new();
    interner.intern("a");
    interner.intern("b");
    interner.intern("a");
    assert_eq!(interner.len(), 2);
    assert!(!interner.is_empty());
}

#[test]
fn test_case_sensitive() {
    let interner = StringInterner::new();
    assert_ne!(interner.intern("foo"), interner.intern("FOO"));
}

#[test]
fn test_empty_string_interns_like_any_other() {
    let interner = StringInterner::new();
    let empty = interner.intern("");
    assert_eq!(interner.intern(""), empty);
    assert_eq!(interner.lookup(empty), "");
}

#[test]
fn test_try_intern_ok() {
    let interner = StringInterner::new();
    let name = interner.try_intern("lambda").unwrap();
    assert_eq!(interner.lookup(name), "lambda");
}

#[test]
fn test_overflow_message() {
    let err = InternError::ShardOverflow {
        shard_idx: 3,
        count: 1 << 28,
    };
    assert!(err.to_string().starts_with("interner shard 3 exceeded capacity"));
}

#[test]
fn test_concurrent_intern_agrees() {
    let interner = Arc::new(StringInterner::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let interner = Arc::clone(&interner);
            std::thread::spawn(move || {
                (0..200)
                    .map(|i| interner.intern(&format!("sym-{i}")))
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let results: Vec<Vec<Name>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for other in &results[1..] {
        assert_eq!(&results[0], other);
    }
    assert_eq!(interner.len(), 200);
}

proptest! {
    #[test]
    fn prop_intern_is_idempotent(s in ".{0,24}") {
        let interner = StringInterner::new();
        let first = interner.intern(&s);
        prop_assert_eq!(interner.intern(&s), first);
        prop_assert_eq!(interner.lookup(first), s.as_str());
    }

    #[test]
    fn prop_distinct_strings_get_distinct_names(a in "[a-z]{1,8}", b in "[a-z]{1,8}") {
        let interner = StringInterner::new();
        prop_assert_eq!(interner.intern(&a) == interner.intern(&b), a == b);
    }
}
