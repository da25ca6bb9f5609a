//! Integration tests for constraint combinators.

use matchkit::constraint::{
    all_of, boxed, count_of, delegating, equal_to, greater_than, in_order, less_than, recorded,
    satisfies, Constraint,
};

#[test]
fn conjunction_requires_every_child() {
    let c = all_of(vec![
        boxed(greater_than(0)),
        boxed(less_than(100)),
        boxed(satisfies(|n: &i32| n % 2 == 0, "an even number")),
    ]);
    assert!(c.matches(&42));
    assert!(!c.matches(&43));
}

#[test]
fn conjunction_failure_names_the_first_offender() {
    let c = all_of(vec![boxed(greater_than(0)), boxed(less_than(10))]);
    let message = c.describe_mismatch(&50);
    assert!(message.starts_with("Specifically:"), "{message}");
    assert!(message.contains("less than 10"));
    assert!(!message.contains("greater than 0"));
}

#[test]
fn conjunction_never_evaluates_past_the_first_failure() {
    let (first, first_count) = recorded(greater_than(10));
    let (second, second_count) = recorded(less_than(0));
    let (third, third_count) = recorded(equal_to(5));
    let c = all_of(vec![boxed(first), boxed(second), boxed(third)]);

    assert!(!c.matches(&50));

    assert_eq!(first_count.get(), 1);
    assert_eq!(second_count.get(), 1);
    assert_eq!(third_count.get(), 0);
}

#[test]
fn per_element_counts_must_agree() {
    let c = in_order(vec![boxed(equal_to(1)), boxed(equal_to(2))]);
    assert!(!c.matches(&vec![1, 2, 3]));
    let message = c.describe_mismatch(&vec![1, 2, 3]);
    assert!(message.contains("expected 2 elements but found 3"), "{message}");
    assert!(message.contains("[1, 2, 3]"));
}

#[test]
fn per_element_failure_stops_at_the_failing_index() {
    let (first, first_count) = recorded(equal_to(1));
    let (second, second_count) = recorded(equal_to(2));
    let (third, third_count) = recorded(equal_to(3));
    let c = in_order(vec![boxed(first), boxed(second), boxed(third)]);

    assert!(!c.matches(&vec![1, 9, 3]));
    assert!(c.describe_mismatch(&vec![1, 9, 3]).contains("element [1]"));

    // One evaluation from matches, one from describe_mismatch, for the
    // children up to and including the offender; none past it.
    assert_eq!(first_count.get(), 2);
    assert_eq!(second_count.get(), 2);
    assert_eq!(third_count.get(), 0);
}

#[test]
fn count_of_wraps_a_numeric_constraint() {
    let c = count_of(greater_than(2));
    assert!(c.matches(&vec!["a", "b", "c"]));
    assert!(!c.matches(&vec!["a"]));
    let message = c.describe_mismatch(&vec!["a"]);
    assert!(message.contains("has 1 elements"), "{message}");
    assert!(message.contains("not greater than 2"));
}

#[test]
fn delegating_runs_a_multi_step_check() {
    // Length gates which rule does the talking.
    let c = delegating("a long capitalized word", |s: &String| {
        if s.len() > 4 {
            boxed(satisfies(
                |s: &String| s.chars().next().is_some_and(char::is_uppercase),
                "a capitalized word",
            ))
        } else {
            boxed(satisfies(|_: &String| false, "a word longer than 4"))
        }
    });

    assert!(c.matches(&"Rustacean".to_string()));
    assert!(!c.matches(&"rustacean".to_string()));
    assert!(!c.matches(&"Ox".to_string()));
    assert_eq!(c.describe(), "a long capitalized word");
    assert!(c
        .describe_mismatch(&"Ox".to_string())
        .contains("longer than 4"));
}
