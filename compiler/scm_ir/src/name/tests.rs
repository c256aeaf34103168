use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_name_layout() {
    let name = Name::new(5, 1000);
    assert_eq!(name.shard(), 5);
    assert_eq!(name.local(), 1000);
}

#[test]
fn test_name_max_local_does_not_bleed_into_shard() {
    let name = Name::new(15, Name::MAX_LOCAL);
    assert_eq!(name.shard(), 15);
    assert_eq!(name.local(), Name::MAX_LOCAL as usize);
    assert_eq!(name.raw(), u32::MAX);
}

#[test]
fn test_name_hash() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(Name::new(0, 1));
    set.insert(Name::new(0, 1)); // duplicate
    set.insert(Name::new(0, 2));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_name_debug() {
    assert_eq!(format!("{:?}", Name::new(3, 7)), "Name(shard=3, local=7)");
}
