#![cfg(test)]

use std::collections::HashMap as StdHashMap;

use proptest::prelude::*;

use super::*;
use crate::util::hash::{IdentityHasherBuilder, PinnedHash};

#[test]
fn test_roman_numerals() {
    let mut table: HashTable<&str, u32> = HashTable::with_cap(4);
    table.set("I", 1);
    table.set("V", 5);
    table.set("X", 10);

    assert_eq!(table.len(), 3);
    assert_eq!(table.cap(), 4, "A load factor of exactly 3/4 shouldn't trigger a resize.");
    assert_eq!(table.get("V"), Ok(&5));

    table.set("L", 50);
    assert_eq!(table.cap(), 8, "Passing a load factor of 3/4 should double the capacity.");
    assert_eq!(table.len(), 4);

    for (key, value) in [("I", 1), ("V", 5), ("X", 10), ("L", 50)] {
        assert_eq!(table.get(key), Ok(&value), "All entries should survive a resize.");
    }

    assert_eq!(table.delete("I"), Ok(1));
    assert_eq!(table.get("I"), Err(KeyNotFound), "A deleted key should no longer be found.");
    assert!(!table.contains("I"));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_only_set_resizes() {
    let mut table: HashTable<u64, u64> = HashTable::with_cap(2);
    for i in 0..12 {
        table.set(i, i * 10);
    }
    let cap = table.cap();
    assert_eq!(cap, 16);

    for i in 0..12 {
        assert_eq!(table.get(&i), Ok(&(i * 10)));
        assert!(table.contains(&i));
    }
    assert!(!table.contains(&100));
    assert_eq!(table.get(&100), Err(KeyNotFound));
    assert_eq!(table.cap(), cap, "Lookups should never reallocate the buckets.");

    for i in 0..12 {
        assert_eq!(table.delete(&i), Ok(i * 10));
        assert_eq!(table.cap(), cap, "Deleting should never shrink the buckets.");
    }
    assert_eq!(table.delete(&0), Err(KeyNotFound));
    assert!(table.is_empty());
    assert_eq!(table.cap(), cap, "An emptied HashTable should keep its capacity.");
}

#[test]
fn test_set_replaces_existing() {
    let mut table: HashTable<String, u32> = HashTable::new();
    assert_eq!(table.set("one".into(), 1), None);
    assert_eq!(table.set("one".into(), 11), Some(1), "The previous value should be returned.");

    assert_eq!(table.len(), 1, "Replacing a value shouldn't change the length.");
    assert_eq!(table.get("one"), Ok(&11));
}

#[test]
fn test_missing_keys() {
    let mut table: HashTable<u64, u64> = HashTable::new();
    assert_eq!(table.get(&1), Err(KeyNotFound));
    assert_eq!(table.delete(&1), Err(KeyNotFound));
    assert_eq!(table.get_mut(&1), Err(KeyNotFound));

    table.set(1, 1);
    assert_eq!(table.delete(&1), Ok(1));
    assert_eq!(
        table.delete(&1), Err(KeyNotFound),
        "Deleting the same key twice should fail the second time."
    );
    assert_eq!(table.len(), 0);
    assert_eq!(KeyNotFound.to_string(), "Key not found in HashTable!");
}

#[test]
fn test_get_mut() {
    let mut table: HashTable<&str, Vec<u32>> = HashTable::new();
    table.set("evens", vec![2]);

    if let Ok(evens) = table.get_mut("evens") {
        evens.push(4);
    }

    assert_eq!(table.get("evens"), Ok(&vec![2, 4]));
}

#[test]
fn test_hash_collisions() {
    let mut table = HashTable::with_cap_and_hasher(4, IdentityHasherBuilder);
    table.set(PinnedHash::new(0, "zero"), 0);
    table.set(PinnedHash::new(4, "four"), 4);
    table.set(PinnedHash::new(8, "eight"), 8);

    assert_eq!(table.cap(), 4);
    assert_eq!(table.buckets[0].len(), 3, "All three keys should share the first bucket.");
    for key in table.keys() {
        assert_eq!(table.bucket_index(key) as u64, key.pin() % 4);
    }

    assert_eq!(table.delete(&PinnedHash::new(4, "four")), Ok(4));
    assert_eq!(table.get(&PinnedHash::new(0, "zero")), Ok(&0));
    assert_eq!(table.get(&PinnedHash::new(8, "eight")), Ok(&8));
    assert_eq!(
        table.get(&PinnedHash::new(0, "four")), Err(KeyNotFound),
        "Equal hashes shouldn't be mistaken for equal keys."
    );

    assert_eq!(
        table.into_iter().map(|(k, _)| k.value()).collect::<Vec<_>>(),
        ["zero", "eight"],
        "Removing from the middle of a chain should keep the other entries in order."
    );
}

#[test]
fn test_resize_rehashes() {
    let mut table = HashTable::with_cap_and_hasher(4, IdentityHasherBuilder);
    table.set(1_u64, 'a');
    table.set(5_u64, 'b');

    assert_eq!(table.bucket_index(&5_u64), 1);
    assert_eq!(table.buckets[1].len(), 2);

    table.resize(Some(8));
    assert_eq!(table.cap(), 8);
    assert_eq!(
        table.bucket_index(&5_u64), 5,
        "The bucket index should be calculated from the new capacity."
    );
    assert_eq!(table.buckets[1].len(), 1);
    assert_eq!(table.buckets[5].len(), 1);
    assert_eq!(table.get(&1), Ok(&'a'));
    assert_eq!(table.get(&5), Ok(&'b'));
    assert_eq!(table.len(), 2);
}

#[test]
fn test_resize_bounds() {
    let mut table = HashTable::with_cap_and_hasher(16, IdentityHasherBuilder);
    for i in 0..6_u64 {
        table.set(i, i);
    }

    table.resize(Some(0));
    assert_eq!(table.cap(), 8, "Resizing to 0 should halve the capacity.");

    table.resize(Some(0));
    assert_eq!(
        table.cap(), 8,
        "Shrinking shouldn't push the load factor over 3/4."
    );

    table.resize(Some(2));
    assert_eq!(table.cap(), 8, "Explicit capacities are also raised to fit the entries.");

    table.resize(None);
    assert_eq!(table.cap(), 16, "Resizing without a capacity should double it.");

    for i in 0..6_u64 {
        assert_eq!(table.get(&i), Ok(&i));
    }
}

#[test]
fn test_zero_cap() {
    let mut table: HashTable<u64, ()> = HashTable::with_cap(0);
    assert_eq!(table.cap(), 1, "A HashTable should always have at least one bucket.");

    table.set(7, ());
    assert_eq!(table.cap(), 2);
    assert!(table.contains(&7));
}

#[test]
fn test_load_factor_after_growth() {
    let mut table: HashTable<u32, u32> = HashTable::with_cap(1);
    for i in 0..1_000 {
        table.set(i, i * 2);
        assert!(
            table.load_factor() <= 0.75,
            "Load factor {} exceeded 3/4 after inserting {i}.", table.load_factor()
        );
    }

    assert_eq!(table.len(), 1_000);
    for i in 0..1_000 {
        assert_eq!(table.get(&i), Ok(&(i * 2)));
    }
}

#[test]
fn test_snapshots() {
    let mut table = HashTable::with_cap_and_hasher(8, IdentityHasherBuilder);
    table.set(3_u64, "three");
    table.set(1_u64, "one");
    table.set(2_u64, "two");
    table.set(9_u64, "nine");

    assert_eq!(table.keys(), [&1, &9, &2, &3], "Keys should be in bucket, then chain order.");
    assert_eq!(table.values(), [&"one", &"nine", &"two", &"three"]);
    assert_eq!(table.items()[1], (&9, &"nine"));
    assert_eq!(table.iter().len(), 4);
}

#[test]
fn test_clear() {
    let mut table: HashTable<u32, u32> = (0..20).map(|i| (i, i)).collect();
    let cap = table.cap();

    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.cap(), cap, "Clearing should keep the capacity.");
    assert!(table.keys().is_empty());
}

#[test]
fn test_eq_and_fmt() {
    let a: HashTable<&str, u32> = [("I", 1), ("V", 5)].into_iter().collect();
    let mut b: HashTable<&str, u32> = HashTable::with_cap(1);
    b.set("V", 5);
    b.set("I", 1);

    assert_eq!(a, b, "Equality shouldn't depend on capacity or insertion order.");
    b.set("I", 2);
    assert_ne!(a, b);

    let mut single: HashTable<&str, u32> = HashTable::new();
    single.set("I", 1);
    assert_eq!(single.to_string(), r#"{"I": 1}"#);
}

#[derive(Debug, Clone)]
enum Op {
    Set(u8, i32),
    Delete(u8),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<u8>(), any::<i32>()).prop_map(|(k, v)| Op::Set(k % 64, v)),
        any::<u8>().prop_map(|k| Op::Delete(k % 64)),
    ]
}

proptest! {
    #[test]
    fn test_matches_model(ops in prop::collection::vec(arb_op(), 0..300)) {
        let mut table: HashTable<u8, i32> = HashTable::with_cap(2);
        let mut model = StdHashMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    prop_assert_eq!(table.set(k, v), model.insert(k, v));
                    prop_assert!(table.load_factor() <= 0.75);
                },
                Op::Delete(k) => {
                    prop_assert_eq!(table.delete(&k).ok(), model.remove(&k));
                },
            }
        }

        prop_assert_eq!(table.len(), model.len());
        for k in 0..64_u8 {
            prop_assert_eq!(table.contains(&k), model.contains_key(&k));
            prop_assert_eq!(table.get(&k).ok(), model.get(&k));
        }
    }
}
