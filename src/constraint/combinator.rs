//! Constraint combinators.
//!
//! Plumbing for composing simple constraints over values and collections:
//!
//! - [`all_of`] - ordered conjunction, short-circuiting on the first failure
//! - [`in_order`] - one child constraint per collection element, by position
//! - [`count_of`] - apply a numeric constraint to a collection's element count
//! - [`delegating`] - forward to a child constraint chosen per actual value
//! - [`not`] - negation
//!
//! # Example
//!
//! ```rust
//! use matchkit::constraint::{all_of, boxed, equal_to, greater_than, Constraint};
//!
//! let c = all_of(vec![boxed(greater_than(0)), boxed(equal_to(7))]);
//! assert!(c.matches(&7));
//! assert!(!c.matches(&8));
//! ```

use std::fmt::Debug;

use super::{display_value, Constraint};

/// Create an ordered conjunction of constraints.
///
/// Children are applied in order and evaluation stops at the first failing
/// child; its description is the one surfaced in the failure text, prefixed
/// with `Specifically:`. An empty list trivially succeeds.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{all_of, boxed, greater_than, less_than, Constraint};
///
/// let c = all_of(vec![boxed(greater_than(0)), boxed(less_than(100))]);
/// assert!(c.matches(&50));
/// assert!(c.describe_mismatch(&200).starts_with("Specifically:"));
/// ```
pub fn all_of<T: ?Sized>(children: Vec<Box<dyn Constraint<T>>>) -> Conjunction<T> {
    Conjunction { children }
}

/// Ordered conjunction of child constraints.
pub struct Conjunction<T: ?Sized> {
    children: Vec<Box<dyn Constraint<T>>>,
}

impl<T: ?Sized> Constraint<T> for Conjunction<T> {
    fn matches(&self, actual: &T) -> bool {
        // `all` stops at the first failing child.
        self.children.iter().all(|c| c.matches(actual))
    }

    fn describe(&self) -> String {
        if self.children.is_empty() {
            return "anything".to_string();
        }
        let parts: Vec<_> = self.children.iter().map(|c| c.describe()).collect();
        parts.join(" and ")
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        match self.children.iter().find(|c| !c.matches(actual)) {
            Some(offender) => format!(
                "Specifically: {}: {}",
                offender.describe(),
                offender.describe_mismatch(actual)
            ),
            None => "every constraint matched".to_string(),
        }
    }
}

/// Create a per-element constraint over a collection.
///
/// The actual collection must contain exactly one element per child
/// constraint; child *i* is applied to element *i*. Evaluation stops at the
/// first failing index, and no later element is examined.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{boxed, equal_to, in_order, Constraint};
///
/// let c = in_order(vec![boxed(equal_to(1)), boxed(equal_to(2))]);
/// assert!(c.matches(&vec![1, 2]));
/// assert!(!c.matches(&vec![1, 3]));
/// assert!(!c.matches(&vec![1, 2, 3]));
/// ```
pub fn in_order<T>(children: Vec<Box<dyn Constraint<T>>>) -> ElementsInOrder<T> {
    ElementsInOrder { children }
}

/// Positional per-element constraint.
pub struct ElementsInOrder<T> {
    children: Vec<Box<dyn Constraint<T>>>,
}

impl<T: Debug> Constraint<[T]> for ElementsInOrder<T> {
    fn matches(&self, actual: &[T]) -> bool {
        if actual.len() != self.children.len() {
            return false;
        }
        self.children
            .iter()
            .zip(actual)
            .all(|(child, element)| child.matches(element))
    }

    fn describe(&self) -> String {
        format!(
            "a collection of {} elements matching in order",
            self.children.len()
        )
    }

    fn describe_mismatch(&self, actual: &[T]) -> String {
        if actual.len() != self.children.len() {
            return format!(
                "expected {} elements but found {} in {}",
                self.children.len(),
                actual.len(),
                display_value(actual)
            );
        }
        for (i, (child, element)) in self.children.iter().zip(actual).enumerate() {
            if !child.matches(element) {
                return format!(
                    "element [{i}]: expected {}, but {}",
                    child.describe(),
                    child.describe_mismatch(element)
                );
            }
        }
        "every element matched".to_string()
    }
}

impl<T: Debug> Constraint<Vec<T>> for ElementsInOrder<T> {
    fn matches(&self, actual: &Vec<T>) -> bool {
        Constraint::<[T]>::matches(self, actual)
    }

    fn describe(&self) -> String {
        Constraint::<[T]>::describe(self)
    }

    fn describe_mismatch(&self, actual: &Vec<T>) -> String {
        Constraint::<[T]>::describe_mismatch(self, actual)
    }
}

/// Create a constraint on a collection's element count.
///
/// The collection is enumerated exactly once per evaluation to compute its
/// cardinality, which is then handed to the inner numeric constraint.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{count_of, equal_to, Constraint};
///
/// let c = count_of(equal_to(3));
/// assert!(c.matches(&vec!['a', 'b', 'c']));
/// assert!(!c.matches(&vec!['a']));
/// ```
pub fn count_of<C: Constraint<usize>>(inner: C) -> CountOf<C> {
    CountOf { inner }
}

/// Constraint applying an inner numeric constraint to an element count.
pub struct CountOf<C> {
    inner: C,
}

impl<T, C> Constraint<T> for CountOf<C>
where
    T: Debug,
    for<'a> &'a T: IntoIterator,
    C: Constraint<usize>,
{
    fn matches(&self, actual: &T) -> bool {
        let count = actual.into_iter().count();
        self.inner.matches(&count)
    }

    fn describe(&self) -> String {
        format!("a collection whose element count {}", self.inner.describe())
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        let count = actual.into_iter().count();
        format!(
            "{} has {} elements: {}",
            display_value(actual),
            count,
            self.inner.describe_mismatch(&count)
        )
    }
}

/// Create a constraint that forwards entirely to a chosen child.
///
/// The chooser runs once per evaluation and picks which child constraint is
/// authoritative for the given actual value, allowing multi-step checks to
/// swap their reporting.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{boxed, delegating, satisfies, Constraint};
///
/// // Long strings must be capitalized; short strings are rejected outright.
/// let c = delegating("a capitalized long string", |s: &String| {
///     if s.len() > 4 {
///         boxed(satisfies(
///             |s: &String| s.chars().next().is_some_and(char::is_uppercase),
///             "a capitalized string",
///         ))
///     } else {
///         boxed(satisfies(|_: &String| false, "a string longer than 4"))
///     }
/// });
/// assert!(c.matches(&"Hello".to_string()));
/// assert!(!c.matches(&"hello".to_string()));
/// assert!(!c.matches(&"Hi".to_string()));
/// ```
pub fn delegating<T: ?Sized>(
    description: impl Into<String>,
    chooser: impl Fn(&T) -> Box<dyn Constraint<T>> + 'static,
) -> Delegating<T> {
    Delegating {
        description: description.into(),
        chooser: Box::new(chooser),
    }
}

/// Constraint whose matching and mismatch text delegate to a chosen child.
pub struct Delegating<T: ?Sized> {
    description: String,
    chooser: Box<dyn Fn(&T) -> Box<dyn Constraint<T>>>,
}

impl<T: ?Sized> Constraint<T> for Delegating<T> {
    fn matches(&self, actual: &T) -> bool {
        (self.chooser)(actual).matches(actual)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        (self.chooser)(actual).describe_mismatch(actual)
    }
}

/// Create a negating constraint.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{equal_to, not, Constraint};
///
/// let c = not(equal_to(0));
/// assert!(c.matches(&1));
/// assert!(!c.matches(&0));
/// ```
pub fn not<T: ?Sized, C: Constraint<T> + 'static>(inner: C) -> Not<T> {
    Not {
        inner: Box::new(inner),
    }
}

/// Constraint negating another constraint.
pub struct Not<T: ?Sized> {
    inner: Box<dyn Constraint<T>>,
}

impl<T: ?Sized> Constraint<T> for Not<T> {
    fn matches(&self, actual: &T) -> bool {
        !self.inner.matches(actual)
    }

    fn describe(&self) -> String {
        format!("not {}", self.inner.describe())
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        format!("the value unexpectedly {}", self.inner.describe())
    }
}
