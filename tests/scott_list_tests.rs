//! Unit tests for the Scott-encoded list.

#![cfg(feature = "scott")]

use rstest::rstest;
use std::cell::Cell;
use std::rc::Rc;
use sumlist::scott::{self, Cases, List};

// =============================================================================
// Dispatch
// =============================================================================

#[rstest]
fn test_empty_invokes_only_empty_handler() {
    let list: List<i32> = scott::empty();
    let result = list.case_of(|| "empty", |_, _| "cons");
    assert_eq!(result, "empty");
}

#[rstest]
fn test_cons_invokes_cons_handler_with_payload() {
    let list = scott::cons(10, scott::cons(20, scott::empty()));
    let (head, tail_head) = list.case_of(
        || (None, None),
        |head, tail| (Some(*head), tail.case_of(|| None, |next, _| Some(*next))),
    );
    assert_eq!(head, Some(10));
    assert_eq!(tail_head, Some(20));
}

#[rstest]
fn test_keyed_dispatch_selects_matching_case() {
    let list: List<i32> = scott::empty();
    let result = list.match_cases(Cases {
        empty: || 0,
        cons: |head: &i32, _: &List<i32>| *head,
    });
    assert_eq!(result, 0);

    let list = scott::cons(8, scott::empty());
    let result = list.match_cases(Cases {
        empty: || 0,
        cons: |head: &i32, _: &List<i32>| *head,
    });
    assert_eq!(result, 8);
}

#[rstest]
fn test_handlers_may_borrow_local_state() {
    let mut seen = Vec::new();
    let list = scott::cons("x", scott::empty());
    list.case_of(|| (), |head, _| seen.push(*head));
    assert_eq!(seen, vec!["x"]);
}

// =============================================================================
// map / to_vec
// =============================================================================

#[rstest]
fn test_squares_scenario() {
    let numbers = scott::cons(3, scott::cons(2, scott::empty()));
    let squares = scott::map(&numbers, |n| n * n);
    assert_eq!(scott::to_vec(&squares), vec![9, 4]);
}

#[rstest]
fn test_map_forwards_empty_case() {
    let list: List<i32> = scott::empty();
    let mapped = scott::map(&list, |n| n + 1);
    assert!(mapped.case_of(|| true, |_, _| false));
}

#[rstest]
fn test_map_cons_case_receives_mapped_head_and_tail() {
    let list = scott::cons(1, scott::cons(2, scott::empty()));
    let mapped = scott::map(&list, |n| n * 100);
    let (head, rest) = mapped.case_of(|| (0, Vec::new()), |head, tail| (*head, scott::to_vec(tail)));
    assert_eq!(head, 100);
    assert_eq!(rest, vec![200]);
}

#[rstest]
fn test_map_defers_all_work_until_dispatch() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let list: List<i32> = (1..=10).collect();
    let mapped = scott::map(&list, move |n| {
        counter.set(counter.get() + 1);
        *n
    });
    assert_eq!(calls.get(), 0);
    let _ = mapped.head();
    assert_eq!(calls.get(), 1);
}

#[rstest]
#[case(vec![])]
#[case(vec![1])]
#[case(vec![3, 1, 2])]
fn test_to_vec_preserves_order(#[case] elements: Vec<i32>) {
    let list: List<i32> = elements.clone().into_iter().collect();
    assert_eq!(scott::to_vec(&list), elements);
}

#[rstest]
fn test_map_accepts_method_style() {
    let list: List<&str> = vec!["a", "bb"].into_iter().collect();
    assert_eq!(list.map(|word| word.len()).to_vec(), vec![1, 2]);
}

// =============================================================================
// Accessors
// =============================================================================

#[rstest]
fn test_uncons_and_tail() {
    let list = scott::cons('p', scott::cons('q', scott::empty()));
    let (head, tail) = list.uncons().expect("non-empty list");
    assert_eq!(head, 'p');
    assert_eq!(tail.to_vec(), vec!['q']);
    assert_eq!(list.tail().map(|rest| rest.len()), Some(1));
    assert!(scott::empty::<char>().uncons().is_none());
}

#[rstest]
fn test_iter_yields_clones() {
    let list: List<String> = vec!["one".to_string(), "two".to_string()]
        .into_iter()
        .collect();
    let collected: Vec<String> = list.iter().collect();
    assert_eq!(collected, vec!["one".to_string(), "two".to_string()]);
}
