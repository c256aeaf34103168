#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::errors::ErrorKind;
use proptest::prelude::*;

#[test]
fn test_same_name_same_symbol() {
    assert_eq!(intern("foo"), intern("foo"));
}

#[test]
fn test_case_sensitive() {
    assert_ne!(intern("foo"), intern("FOO"));
}

#[test]
fn test_name_round_trips() {
    assert_eq!(symbol_name(Some(intern("foo"))).unwrap(), "foo");
    assert_eq!(intern("lambda").name(), "lambda");
}

#[test]
fn test_name_of_absent_symbol_is_nil_error() {
    let err = symbol_name(None).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Nil);
    assert_eq!(err.irritant("sym"), Some("<nil>"));
}

#[test]
fn test_try_intern_matches_intern() {
    assert_eq!(Symbol::try_intern("set-car!").unwrap(), intern("set-car!"));
}

#[test]
fn test_count_grows_only_for_new_names() {
    // Other tests share the table, so only assert on monotonic growth.
    intern("count-probe-a");
    let before = symbol_count();
    intern("count-probe-a");
    assert!(symbol_count() >= before);
    intern("count-probe-b-unique-4f1d");
    assert!(symbol_count() > before);
}

#[test]
fn test_concurrent_interning_yields_one_instance() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| intern("shared-across-threads")))
        .collect();
    let symbols: Vec<Symbol> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(symbols.iter().all(|&s| s == symbols[0]));
}

#[test]
fn test_display() {
    assert_eq!(intern("hello-world").to_string(), "hello-world");
    assert_eq!(format!("{:?}", intern("x")), "Symbol(x)");
}

proptest! {
    #[test]
    fn prop_identity_matches_name_equality(a in "[a-zA-Z!?*<>=/+-]{1,6}", b in "[a-zA-Z!?*<>=/+-]{1,6}") {
        prop_assert_eq!(intern(&a) == intern(&b), a == b);
    }

    #[test]
    fn prop_name_of_intern_is_input(s in "\\PC{0,16}") {
        prop_assert_eq!(intern(&s).name(), s.as_str());
    }
}
