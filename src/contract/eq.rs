//! [`PartialEq`] contract checking.

// The reflexivity and none rules spell out the comparisons under test.
#![allow(clippy::eq_op)]
#![allow(clippy::partialeq_to_none)]

use std::fmt::Debug;

use super::chain::{bool_verdict, first_failure, Rule, RuleFailure};
use crate::constraint::Constraint;

const HEADER: &str = "A type that implements the PartialEq contract.";

/// Create a [`PartialEq`] contract checker.
///
/// The target value under test must equal itself, equal the `eq` reference,
/// agree between `==` and `!=`, differ from both `lt` and `gt`, and differ
/// from `None` when wrapped in an `Option`.
///
/// # Panics
///
/// Evaluation panics when the rule chain reaches the equality rule and no
/// `eq` reference was supplied with [`EqContract::with_eq`]. Forgetting the
/// operand is a usage error, not a failing assertion.
///
/// # Example
///
/// ```rust
/// use matchkit::contract::implements_eq;
/// use matchkit::constraint::Constraint;
///
/// assert!(implements_eq(1, 3).with_eq(2).matches(&2));
/// ```
pub fn implements_eq<T>(lt: T, gt: T) -> EqContract<T> {
    EqContract { lt, gt, eq: None }
}

/// Constraint verifying a [`PartialEq`] implementation against references.
pub struct EqContract<T> {
    lt: T,
    gt: T,
    eq: Option<T>,
}

impl<T> EqContract<T> {
    /// Add the reference value the target must compare equal to.
    #[must_use]
    pub fn with_eq(mut self, eq: T) -> Self {
        self.eq = Some(eq);
        self
    }
}

impl<T: PartialEq + Clone + Debug> EqContract<T> {
    fn required_eq(&self) -> &T {
        self.eq.as_ref().map_or_else(
            || {
                panic!(
                    "the PartialEq contract requires an `eq` reference value; \
                     supply one with `with_eq`"
                )
            },
            |eq| eq,
        )
    }

    fn offender(&self, target: &T) -> Option<RuleFailure> {
        let rules: Vec<Rule<'_>> = vec![
            (
                "equal to itself",
                Box::new(move || {
                    let value = target == target;
                    bool_verdict("`target == target` to be true", value, value)
                }),
            ),
            (
                "equal to the eq reference",
                Box::new(move || {
                    let value = target == self.required_eq();
                    bool_verdict("`target == eq` to be true", value, value)
                }),
            ),
            (
                "`==` and `!=` agree on the eq reference",
                Box::new(move || {
                    let value = target != self.required_eq();
                    bool_verdict("`target != eq` to be false", value, !value)
                }),
            ),
            (
                "not equal to the lesser reference",
                Box::new(move || {
                    let value = target != &self.lt;
                    bool_verdict("`target != lt` to be true", value, value)
                }),
            ),
            (
                "not equal to the greater reference",
                Box::new(move || {
                    let value = target != &self.gt;
                    bool_verdict("`target != gt` to be true", value, value)
                }),
            ),
            (
                "some not equal to none",
                Box::new(move || {
                    let value = Some(target.clone()) != None;
                    bool_verdict("`Some(target) != None` to be true", value, value)
                }),
            ),
        ];
        first_failure(rules)
    }
}

impl<T: PartialEq + Clone + Debug> Constraint<T> for EqContract<T> {
    fn matches(&self, actual: &T) -> bool {
        self.offender(actual).is_none()
    }

    fn describe(&self) -> String {
        format!(
            "consistent PartialEq comparisons against lt {:?} and gt {:?}",
            self.lt, self.gt
        )
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        match self.offender(actual) {
            Some(failure) => format!(
                "{HEADER} Rule `{}` failed: expected {}, but was {}",
                failure.name, failure.expected, failure.actual
            ),
            None => "every equality rule held".to_string(),
        }
    }
}
