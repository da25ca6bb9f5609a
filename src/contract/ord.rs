//! [`Ord`] contract checking.

use std::cmp::Ordering;
use std::fmt::Debug;

use super::chain::{first_failure, ordering_verdict, Rule, RuleFailure, Verdict};
use crate::constraint::Constraint;

const HEADER: &str = "A type that implements the Ord contract.";

/// Create an [`Ord`] contract checker.
///
/// The target value under test must compare equal to itself, greater than
/// `lt`, less than `gt`, and order after `None` when wrapped in an `Option`.
/// An equal reference can be added with [`OrdContract::with_eq`]; without
/// one, the equality rule against a reference is skipped.
///
/// # Example
///
/// ```rust
/// use matchkit::contract::implements_ord;
/// use matchkit::constraint::Constraint;
///
/// assert!(implements_ord(1, 3).with_eq(2).matches(&2));
/// assert!(!implements_ord(5, 3).matches(&4));
/// ```
pub fn implements_ord<T>(lt: T, gt: T) -> OrdContract<T> {
    OrdContract { lt, gt, eq: None }
}

/// Constraint verifying an [`Ord`] implementation against reference values.
pub struct OrdContract<T> {
    lt: T,
    gt: T,
    eq: Option<T>,
}

impl<T> OrdContract<T> {
    /// Add a reference value the target must compare equal to.
    #[must_use]
    pub fn with_eq(mut self, eq: T) -> Self {
        self.eq = Some(eq);
        self
    }
}

impl<T: Ord + Clone + Debug> OrdContract<T> {
    fn offender(&self, target: &T) -> Option<RuleFailure> {
        let mut rules: Vec<Rule<'_>> = vec![(
            "equal to itself",
            Box::new(move || ordering_verdict(target.cmp(target), Ordering::Equal)),
        )];
        if let Some(eq) = &self.eq {
            rules.push((
                "equal to the eq reference",
                Box::new(move || ordering_verdict(target.cmp(eq), Ordering::Equal)),
            ));
        }
        rules.push((
            "greater than the lesser reference",
            Box::new(move || ordering_verdict(target.cmp(&self.lt), Ordering::Greater)),
        ));
        rules.push((
            "less than the greater reference",
            Box::new(move || ordering_verdict(target.cmp(&self.gt), Ordering::Less)),
        ));
        rules.push((
            "ordered after none",
            Box::new(move || {
                let some = Some(target.clone());
                let passed = some > None;
                Verdict {
                    passed,
                    expected: "Some(target) > None".to_string(),
                    actual: passed.to_string(),
                }
            }),
        ));
        first_failure(rules)
    }
}

impl<T: Ord + Clone + Debug> Constraint<T> for OrdContract<T> {
    fn matches(&self, actual: &T) -> bool {
        self.offender(actual).is_none()
    }

    fn describe(&self) -> String {
        format!(
            "consistent Ord comparisons against lt {:?} and gt {:?}",
            self.lt, self.gt
        )
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        match self.offender(actual) {
            Some(failure) => format!(
                "{HEADER} Rule `{}` failed: expected {}, but was {}",
                failure.name, failure.expected, failure.actual
            ),
            None => "every comparison rule held".to_string(),
        }
    }
}
