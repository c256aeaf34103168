use super::*;

/// Minimal cons-list standing in for nested pair structure.
enum Nested {
    Leaf,
    Node(Box<Nested>),
}

fn build(depth: usize) -> Nested {
    let mut node = Nested::Leaf;
    for _ in 0..depth {
        node = Nested::Node(Box::new(node));
    }
    node
}

fn measure(n: &Nested) -> usize {
    ensure_sufficient_stack(|| match n {
        Nested::Leaf => 0,
        Nested::Node(inner) => measure(inner) + 1,
    })
}

fn unwind(mut n: Nested) {
    // Iterative drop so the test itself does not overflow on teardown.
    while let Nested::Node(inner) = n {
        n = *inner;
    }
}

#[test]
fn test_shallow_nesting() {
    let tree = build(10);
    assert_eq!(measure(&tree), 10);
    unwind(tree);
}

#[test]
fn test_deep_nesting() {
    // 100k levels would overflow a typical 8MB stack without growth
    let tree = build(100_000);
    assert_eq!(measure(&tree), 100_000);
    unwind(tree);
}

#[test]
fn test_works_with_result_type() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(123));
    assert_eq!(result, Ok(123));
}
