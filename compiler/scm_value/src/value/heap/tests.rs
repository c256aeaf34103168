use super::*;

#[test]
fn test_heap_deref() {
    let h = Heap::new(42i64);
    assert_eq!(*h, 42);
}

#[test]
fn test_heap_clone_shares_allocation() {
    let h1 = Heap::new(vec![1, 2, 3]);
    let h2 = h1.clone();
    assert_eq!(*h1, *h2);
    assert!(Heap::ptr_eq(&h1, &h2));
}

#[test]
fn test_separate_allocations_are_not_identical() {
    let h1 = Heap::new("hello".to_string());
    let h2 = Heap::new("hello".to_string());
    assert_eq!(*h1, *h2);
    assert!(!Heap::ptr_eq(&h1, &h2));
}

#[test]
fn test_into_inner_only_for_last_handle() {
    let h1 = Heap::new(7u8);
    let h2 = h1.clone();
    assert_eq!(Heap::into_inner(h1), None);
    assert_eq!(Heap::into_inner(h2), Some(7));
}
