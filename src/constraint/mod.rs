// Allow must_use_candidate for constraint factory functions since building the
// constraint without applying it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Core constraint trait, basic constraints, and combinators.
//!
//! A constraint is a reusable predicate with an explanation: applied to an
//! actual value it yields success or failure plus expected/actual text.
//!
//! - [`Constraint`] trait for custom constraints
//! - Basic constraints: [`equal_to`], [`greater_than`], [`less_than`],
//!   [`satisfies`], [`contains_str`], [`starts_with`]
//! - Combinators: [`all_of`], [`in_order`], [`count_of`], [`delegating`],
//!   [`not`]
//! - [`evaluate`] for the uniform success-or-failure-text entry point
//! - [`recorded`] for observing how often a constraint is evaluated
//!
//! # Example
//!
//! ```rust
//! use matchkit::constraint::{equal_to, not, Constraint};
//!
//! let c = equal_to(42);
//! assert!(c.matches(&42));
//!
//! let c = not(equal_to(0));
//! assert!(c.matches(&1));
//! ```

use std::fmt::Debug;

mod basic;
mod combinator;
mod recorded;

pub use basic::{
    contains_str, equal_to, greater_than, less_than, satisfies, starts_with, ContainsStr, EqualTo,
    GreaterThan, LessThan, Satisfies, StartsWith,
};
pub use combinator::{
    all_of, count_of, delegating, in_order, not, Conjunction, CountOf, Delegating, ElementsInOrder,
    Not,
};
pub use recorded::{recorded, EvalCount, Recorded};

/// A constraint over values of type `T`.
///
/// Constraints never panic for an ordinary mismatch: they return `false` from
/// [`matches`](Constraint::matches) and explain themselves through
/// [`describe`](Constraint::describe) (the expected clause) and
/// [`describe_mismatch`](Constraint::describe_mismatch) (the actual clause).
/// They hold no evaluation state, so both sides may re-evaluate the match.
///
/// # Implementing Custom Constraints
///
/// ```rust
/// use matchkit::constraint::Constraint;
///
/// struct IsEven;
///
/// impl Constraint<i32> for IsEven {
///     fn matches(&self, actual: &i32) -> bool {
///         actual % 2 == 0
///     }
///
///     fn describe(&self) -> String {
///         "an even number".to_string()
///     }
///
///     fn describe_mismatch(&self, actual: &i32) -> String {
///         format!("{actual} is odd")
///     }
/// }
///
/// assert!(IsEven.matches(&4));
/// assert!(!IsEven.matches(&3));
/// ```
pub trait Constraint<T: ?Sized> {
    /// Check whether the actual value satisfies the constraint.
    fn matches(&self, actual: &T) -> bool;

    /// Describe what this constraint expects.
    fn describe(&self) -> String;

    /// Describe why an actual value failed to match.
    fn describe_mismatch(&self, actual: &T) -> String;
}

// Forwarding impl so boxed constraints nest inside combinators.
impl<T: ?Sized> Constraint<T> for Box<dyn Constraint<T>> {
    fn matches(&self, actual: &T) -> bool {
        (**self).matches(actual)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        (**self).describe_mismatch(actual)
    }
}

/// Box a constraint for use in heterogeneous combinator lists.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{all_of, boxed, equal_to, greater_than, Constraint};
///
/// let c = all_of(vec![boxed(greater_than(0)), boxed(equal_to(7))]);
/// assert!(c.matches(&7));
/// ```
pub fn boxed<T: ?Sized, C>(constraint: C) -> Box<dyn Constraint<T>>
where
    C: Constraint<T> + 'static,
{
    Box::new(constraint)
}

/// Evaluate a constraint against an actual value.
///
/// Returns `None` on success, or the combined expected/actual failure text
/// on a mismatch. This is the uniform entry point the [`assert_that!`]
/// macro (and any custom reporting) goes through.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{equal_to, evaluate};
///
/// assert!(evaluate(&42, &equal_to(42)).is_none());
/// let failure = evaluate(&42, &equal_to(0)).unwrap();
/// assert!(failure.contains("equals 0"));
/// ```
pub fn evaluate<T: ?Sized>(actual: &T, constraint: &impl Constraint<T>) -> Option<String> {
    if constraint.matches(actual) {
        None
    } else {
        Some(format!(
            "expected: {}\n  but was: {}",
            constraint.describe(),
            constraint.describe_mismatch(actual)
        ))
    }
}

/// Assert that a value satisfies a constraint.
///
/// # Panics
///
/// Panics with the constraint's expected and mismatch text if the value does
/// not match.
///
/// # Example
///
/// ```rust
/// use matchkit::{assert_that, constraint::equal_to};
///
/// assert_that!(42, equal_to(42));
/// ```
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $constraint:expr) => {{
        if let Some(failure) = $crate::constraint::evaluate(&$actual, &$constraint) {
            panic!("assertion failed\n  {failure}");
        }
    }};
    ($actual:expr, $constraint:expr, $($arg:tt)+) => {{
        if let Some(failure) = $crate::constraint::evaluate(&$actual, &$constraint) {
            panic!(
                "assertion failed\n  {failure}\n  message: {}",
                format_args!($($arg)+)
            );
        }
    }};
}

/// Render a value the way mismatch messages expect it.
pub(crate) fn display_value<T: Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}
