//! Integration tests for the public container and cursor API.
//!
//! These exercise whole scenarios across mutation and traversal; the
//! per-module unit tests cover the individual operations.

use trifold::container::Trifold;
use trifold::cursor::Cursor;
use trifold::error::Error;

fn build(values: &[i64]) -> Trifold {
    let mut list = Trifold::new();
    for &value in values {
        list.insert(value);
    }
    return list;
}

// =============================================================================
// End-to-end scenario
// =============================================================================

#[test]
fn three_views_of_one_container() {
    let list = build(&[17, 2, 25, 9, 3]);
    assert_eq!(list.len(), 5);

    let ascending: Vec<i64> = list.ascending().collect();
    assert_eq!(ascending, vec![2, 3, 9, 17, 25]);

    let cross: Vec<i64> = list.side_cross().collect();
    assert_eq!(cross, vec![2, 25, 3, 17, 9]);

    let primes: Vec<i64> = list.primes().collect();
    assert_eq!(primes, vec![17, 2, 3]);
}

#[test]
fn views_stay_consistent_across_a_mutation_sequence() {
    let mut list = build(&[17, 2, 25, 9, 3]);

    list.insert(1000);
    let ascending: Vec<i64> = list.ascending().collect();
    assert_eq!(ascending, vec![2, 3, 9, 17, 25, 1000]);
    let cross: Vec<i64> = list.side_cross().collect();
    assert_eq!(cross, vec![2, 1000, 3, 25, 9, 17]);

    list.remove(17).unwrap();
    list.remove(2).unwrap();
    assert_eq!(list.elements(), vec![25, 9, 3, 1000]);

    let ascending: Vec<i64> = list.ascending().collect();
    assert_eq!(ascending, vec![3, 9, 25, 1000]);
    let cross: Vec<i64> = list.side_cross().collect();
    assert_eq!(cross, vec![3, 1000, 9, 25]);
    let primes: Vec<i64> = list.primes().collect();
    assert_eq!(primes, vec![3]);
}

// =============================================================================
// Live-view semantics
// =============================================================================

#[test]
fn cursors_created_before_a_mutation_observe_it() {
    let mut list = build(&[17, 2, 25, 9, 3]);
    let ascending = list.ascending();
    let cross = list.side_cross();
    let primes = list.primes();

    list.insert(11);

    let got: Vec<i64> = ascending.begin().collect();
    assert_eq!(got, vec![2, 3, 9, 11, 17, 25]);
    let got: Vec<i64> = cross.begin().collect();
    assert_eq!(got, vec![2, 25, 3, 17, 9, 11]);
    let got: Vec<i64> = primes.begin().collect();
    assert_eq!(got, vec![17, 2, 3, 11]);
}

#[test]
fn end_moves_when_the_container_grows() {
    let mut list = build(&[1, 2]);
    let cursor = list.ascending();
    let old_end = cursor.end();
    assert_eq!(old_end.position(), 2);

    list.insert(3);

    // The old sentinel is now a valid position; a fresh end is further out.
    assert_eq!(old_end.value().unwrap(), 3);
    assert_eq!(cursor.end().position(), 3);
    assert!(old_end.try_cmp(&cursor.end()).unwrap().is_lt());
}

#[test]
fn traversal_in_progress_picks_up_a_removal() {
    let mut list = build(&[2, 5, 7, 11]);
    let mut cursor = list.ascending();

    assert_eq!(cursor.next(), Some(2));
    list.remove(5).unwrap();
    // Position 1 of the rebuilt sorted view is 7.
    assert_eq!(cursor.next(), Some(7));
    assert_eq!(cursor.next(), Some(11));
    assert_eq!(cursor.next(), None);
}

// =============================================================================
// Cursor contract: bounds
// =============================================================================

#[test]
fn dereference_at_end_fails() {
    let list = build(&[4, 9, 25]);

    let at_end = list.ascending().end();
    assert_eq!(
        at_end.value(),
        Err(Error::OutOfRange { position: 3, len: 3 })
    );

    let at_end = list.side_cross().end();
    assert_eq!(
        at_end.value(),
        Err(Error::OutOfRange { position: 3, len: 3 })
    );

    // No primes among 4, 9, 25.
    let at_end = list.primes().end();
    assert_eq!(
        at_end.value(),
        Err(Error::OutOfRange { position: 0, len: 0 })
    );
}

#[test]
fn advance_at_end_fails_and_leaves_position_alone() {
    let list = build(&[10]);
    let mut cursor = list.side_cross();
    cursor.advance().unwrap();

    assert_eq!(
        cursor.advance(),
        Err(Error::OutOfRange { position: 1, len: 1 })
    );
    assert_eq!(cursor.position(), 1);
}

// =============================================================================
// Cursor contract: binding
// =============================================================================

#[test]
fn every_comparison_across_containers_is_rejected() {
    let a = build(&[17, 2, 25, 9, 3]);
    let b = build(&[12, 1, 3, 100, 53]);

    let from_a = a.ascending();
    let from_b = b.ascending();
    assert_eq!(from_a.try_eq(&from_b), Err(Error::MismatchedContainers));
    assert_eq!(from_a.try_cmp(&from_b), Err(Error::MismatchedContainers));

    let from_a = a.side_cross();
    let from_b = b.side_cross();
    assert_eq!(from_a.try_eq(&from_b), Err(Error::MismatchedContainers));
    assert_eq!(from_a.try_cmp(&from_b), Err(Error::MismatchedContainers));

    let from_a = a.primes();
    let from_b = b.primes();
    assert_eq!(from_a.try_eq(&from_b), Err(Error::MismatchedContainers));
    assert_eq!(from_a.try_cmp(&from_b), Err(Error::MismatchedContainers));
}

#[test]
fn same_container_comparisons_order_by_position() {
    let list = build(&[12, 1, 3, 100, 53]);
    let mut ahead = list.ascending();
    let behind = ahead.clone();

    ahead.advance().unwrap();
    assert!(!ahead.try_eq(&behind).unwrap());
    assert!(ahead.try_cmp(&behind).unwrap().is_gt());
    assert!(behind.try_cmp(&ahead).unwrap().is_lt());
}

// =============================================================================
// Remove semantics
// =============================================================================

#[test]
fn remove_of_absent_value_reports_not_found() {
    let mut list = build(&[17, 2, 25]);
    assert_eq!(list.remove(9), Err(Error::NotFound(9)));
    assert_eq!(list.len(), 3);
    assert_eq!(list.elements(), vec![17, 2, 25]);
}

#[test]
fn remove_from_empty_container_reports_not_found() {
    let mut list = Trifold::new();
    assert_eq!(list.remove(0), Err(Error::NotFound(0)));
}

#[test]
fn removing_duplicates_one_at_a_time() {
    let mut list = build(&[7, 4, 7, 7]);

    list.remove(7).unwrap();
    assert_eq!(list.elements(), vec![4, 7, 7]);
    list.remove(7).unwrap();
    assert_eq!(list.elements(), vec![4, 7]);
    list.remove(7).unwrap();
    assert_eq!(list.elements(), vec![4]);
    assert_eq!(list.remove(7), Err(Error::NotFound(7)));
}
