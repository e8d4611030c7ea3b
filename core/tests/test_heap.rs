//! Balance Heap Tests
//!
//! Exercises the min-heap under interleaved insertion, extraction, and
//! reinsertion, verifying the heap property by full-tree traversal after
//! every operation.

use split_settle_core::heap::{BalanceHeap, HeapEntry, HeapError};

// ============================================================================
// Test Helpers
// ============================================================================

fn heap_of(balances: &[i64]) -> BalanceHeap {
    let mut heap = BalanceHeap::new();
    for (i, &balance) in balances.iter().enumerate() {
        heap.insert(HeapEntry::new(i, balance));
    }
    heap
}

fn drain_balances(heap: &mut BalanceHeap) -> Vec<i64> {
    let mut out = Vec::new();
    while let Ok(entry) = heap.extract_min() {
        out.push(entry.balance);
    }
    out
}

// ============================================================================
// Basic operations
// ============================================================================

#[test]
fn most_negative_balance_sits_at_the_root() {
    let heap = heap_of(&[500, -2_000, 300, -100]);
    assert_eq!(heap.peek().unwrap().balance, -2_000);
    assert!(heap.is_valid());
}

#[test]
fn extraction_is_sorted_by_balance() {
    let mut heap = heap_of(&[0, 9, -3, 7, -8, 2, -1]);
    assert_eq!(drain_balances(&mut heap), vec![-8, -3, -1, 0, 2, 7, 9]);
}

#[test]
fn empty_heap_extraction_fails() {
    let mut heap = BalanceHeap::new();
    assert_eq!(heap.extract_min(), Err(HeapError::Empty));
    assert_eq!(heap.len(), 0);
}

#[test]
fn size_one_heap_pops_its_sole_entry() {
    let mut heap = heap_of(&[-42]);
    assert_eq!(heap.extract_min().unwrap().balance, -42);
    assert!(heap.is_empty());
    assert_eq!(heap.extract_min(), Err(HeapError::Empty));
}

#[test]
fn len_tracks_inserts_and_extracts() {
    let mut heap = BalanceHeap::new();
    assert!(heap.is_empty());

    heap.insert(HeapEntry::new(0, 10));
    heap.insert(HeapEntry::new(1, -10));
    assert_eq!(heap.len(), 2);

    heap.extract_min().unwrap();
    assert_eq!(heap.len(), 1);
}

// ============================================================================
// Heap property under interleaved mutation
// ============================================================================

#[test]
fn interleaved_insert_extract_reinsert_keeps_property() {
    let mut heap = heap_of(&[-900, -500, 200, 700, 500]);

    // Simulate a settlement round: pull two minimums, move one toward zero,
    // reinsert it
    let first = heap.extract_min().unwrap();
    let mut second = heap.extract_min().unwrap();
    assert_eq!(first.balance, -900);
    assert_eq!(second.balance, -500);
    assert!(heap.is_valid());

    second.balance = -300;
    heap.insert(second);
    assert!(heap.is_valid());
    assert_eq!(heap.peek().unwrap().balance, -300);

    heap.insert(HeapEntry::new(9, -1_000));
    assert!(heap.is_valid());
    assert_eq!(heap.peek().unwrap().balance, -1_000);
}

#[test]
fn descending_inserts_sift_up_to_the_root() {
    let mut heap = BalanceHeap::new();
    for i in 0..32usize {
        let balance = 1_000 - (i as i64) * 100;
        heap.insert(HeapEntry::new(i, balance));
        assert!(heap.is_valid());
        assert_eq!(heap.peek().unwrap().balance, balance);
    }
}

#[test]
fn ties_drain_completely_in_some_order() {
    // Order among equal keys is unspecified; only validity and completeness
    // are guaranteed
    let mut heap = heap_of(&[-5, -5, -5, 3, 3]);
    let drained = drain_balances(&mut heap);
    assert_eq!(drained, vec![-5, -5, -5, 3, 3]);
}
