//! Evaluation recording for constraints.
//!
//! [`recorded`] wraps a constraint and counts how many times it is asked to
//! match. Combinators promise to stop evaluating children past the first
//! failure; the counter makes that observable from a test.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::Constraint;

/// Wrap a constraint, returning the wrapper and a counting handle.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{equal_to, recorded, Constraint};
///
/// let (c, count) = recorded(equal_to(1));
/// assert!(!c.matches(&2));
/// assert!(c.matches(&1));
/// assert_eq!(count.get(), 2);
/// ```
pub fn recorded<C>(inner: C) -> (Recorded<C>, EvalCount) {
    let counter = Arc::new(AtomicUsize::new(0));
    (
        Recorded {
            inner,
            counter: Arc::clone(&counter),
        },
        EvalCount(counter),
    )
}

/// A constraint wrapper that counts evaluations.
pub struct Recorded<C> {
    inner: C,
    counter: Arc<AtomicUsize>,
}

impl<T: ?Sized, C: Constraint<T>> Constraint<T> for Recorded<C> {
    fn matches(&self, actual: &T) -> bool {
        self.counter.fetch_add(1, Ordering::SeqCst);
        self.inner.matches(actual)
    }

    fn describe(&self) -> String {
        self.inner.describe()
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        self.inner.describe_mismatch(actual)
    }
}

/// Handle observing how often a [`Recorded`] constraint was evaluated.
#[derive(Clone)]
pub struct EvalCount(Arc<AtomicUsize>);

impl EvalCount {
    /// Number of `matches` evaluations so far.
    #[must_use]
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    /// Whether the constraint was evaluated at least once.
    #[must_use]
    pub fn was_evaluated(&self) -> bool {
        self.get() > 0
    }
}
