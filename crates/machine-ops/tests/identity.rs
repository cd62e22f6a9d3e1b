//! Descriptors are never interned and are safe to read from many threads.

use machine_ops::test_harness::*;
use machine_ops::{MachineRepresentation, Operator};

#[test]
fn test_repeated_requests_yield_distinct_descriptors() {
    let zone = new_zone();
    let b = builder32(&zone);
    let first = b.int32_add();
    let second = b.int32_add();
    assert_eq!(first, second);
    assert!(!Operator::same_identity(first, second));

    let load_a = b.load(MachineRepresentation::Word16);
    let load_b = b.load(MachineRepresentation::Word16);
    assert_eq!(load_a, load_b);
    assert!(!std::ptr::eq(load_a, load_b));
}

#[test]
fn test_generic_word_op_is_fresh_each_call() {
    let zone = new_zone();
    let b = builder64(&zone);
    assert!(!Operator::same_identity(b.word_xor(), b.word_xor()));
}

#[test]
fn test_builders_share_a_zone() {
    let zone = new_zone();
    let narrow = builder32(&zone);
    let wide = builder64(&zone);
    let before = zone.allocated_bytes();
    let ops: Vec<_> = (0..256)
        .flat_map(|_| [narrow.word_or(), wide.word_or()])
        .collect();
    assert!(zone.allocated_bytes() > before);
    assert!(std::ptr::eq(narrow.zone(), wide.zone()));
    assert_eq!(ops.len(), 512);
}

#[test]
fn test_descriptors_are_readable_across_threads() {
    let zone = new_zone();
    let b = builder64(&zone);
    let ops = named_catalog(&b);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let pure = ops.iter().filter(|op| op.is_pure()).count();
                assert_eq!(pure, ops.len());
            });
        }
    });
}
