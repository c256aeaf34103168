#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use pretty_assertions::assert_eq;

fn show(obj: &Object) -> String {
    obj.to_string()
}

#[test]
fn test_immediates() {
    assert_eq!(show(&Object::NULL), "()");
    assert_eq!(show(&Object::TRUE), "#t");
    assert_eq!(show(&Object::FALSE), "#f");
    assert_eq!(show(&Object::EOF), "#<eof>");
    assert_eq!(show(&Object::UNDEFINED), "#<undefined>");
    assert_eq!(show(&Object::UNSPECIFIED), "#<unspecified>");
}

#[test]
fn test_numbers() {
    assert_eq!(show(&Object::fixnum(-42)), "-42");
    assert_eq!(show(&Object::flonum(1.5)), "1.5");
    assert_eq!(show(&Object::flonum(3.0)), "3.0");
    assert_eq!(show(&Object::flonum(f64::NAN)), "+nan.0");
    assert_eq!(show(&Object::flonum(f64::INFINITY)), "+inf.0");
    assert_eq!(show(&Object::flonum(f64::NEG_INFINITY)), "-inf.0");
}

#[test]
fn test_characters() {
    assert_eq!(show(&Object::character('a')), "#\\a");
    assert_eq!(show(&Object::character(' ')), "#\\space");
    assert_eq!(show(&Object::character('\n')), "#\\newline");
    assert_eq!(show(&Object::character('\u{1}')), "#\\x1");
    assert_eq!(show(&Object::character('λ')), "#\\λ");
}

#[test]
fn test_strings_are_escaped() {
    assert_eq!(show(&Object::string_from("hi")), "\"hi\"");
    assert_eq!(
        show(&Object::string_from("say \"hi\"\\\n")),
        "\"say \\\"hi\\\"\\\\\\n\""
    );
}

#[test]
fn test_symbols() {
    assert_eq!(show(&Object::symbol("set-car!")), "set-car!");
}

#[test]
fn test_lists() {
    let proper = Object::list([1, 2, 3].map(Object::fixnum));
    assert_eq!(show(&proper), "(1 2 3)");

    let dotted = Object::cons(Object::fixnum(1), Object::fixnum(2));
    assert_eq!(show(&dotted), "(1 . 2)");

    let improper = Object::cons(
        Object::fixnum(1),
        Object::cons(Object::fixnum(2), Object::fixnum(3)),
    );
    assert_eq!(show(&improper), "(1 2 . 3)");

    let nested = Object::list([Object::list([Object::symbol("a")]), Object::NULL]);
    assert_eq!(show(&nested), "((a) ())");
}

#[test]
fn test_vectors() {
    let v = Object::vector_from(vec![Object::fixnum(1), Object::string_from("x")]);
    assert_eq!(show(&v), "#(1 \"x\")");
    assert_eq!(show(&Object::vector(0, Object::NULL).unwrap()), "#()");
    assert_eq!(show(&Object::bytevector_from(vec![0, 255])), "#u8(0 255)");
}

#[test]
fn test_ports() {
    assert_eq!(show(&Object::input_port(std::io::empty())), "#<input-port>");
    assert_eq!(show(&Object::output_port(std::io::sink())), "#<output-port>");
}

#[test]
fn test_long_list_prints_without_overflow() {
    let list = Object::list((0..100_000).map(Object::fixnum));
    let text = show(&list);
    assert!(text.starts_with("(0 1 2 "));
    assert!(text.ends_with(" 99999)"));
}
