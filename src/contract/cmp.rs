//! Comparison-operator ([`PartialOrd`]) contract checking.

// The reflexive rules compare a value against itself on purpose.
#![allow(clippy::eq_op)]

use std::fmt::Debug;

use super::chain::{bool_verdict, first_failure, Rule, RuleFailure};
use crate::constraint::Constraint;

const HEADER: &str = "A type that implements the PartialOrd contract.";

/// Create a comparison-operator contract checker.
///
/// Unlike [`implements_ord`](super::implements_ord), which exercises
/// [`Ord::cmp`], this checker exercises the comparison operators themselves:
/// `<`, `>`, `<=`, and `>=` against the reference values. Its `None`
/// handling is folded into the less-than rules rather than appended as a
/// trailing rule.
///
/// # Example
///
/// ```rust
/// use matchkit::contract::implements_comparison;
/// use matchkit::constraint::Constraint;
///
/// assert!(implements_comparison(1.0, 3.0).with_eq(2.0).matches(&2.0));
/// ```
pub fn implements_comparison<T>(lt: T, gt: T) -> ComparisonContract<T> {
    ComparisonContract { lt, gt, eq: None }
}

/// Constraint verifying comparison operators against reference values.
pub struct ComparisonContract<T> {
    lt: T,
    gt: T,
    eq: Option<T>,
}

impl<T> ComparisonContract<T> {
    /// Add a reference value the target must compare equal to.
    #[must_use]
    pub fn with_eq(mut self, eq: T) -> Self {
        self.eq = Some(eq);
        self
    }
}

impl<T: PartialOrd + Clone + Debug> ComparisonContract<T> {
    fn offender(&self, target: &T) -> Option<RuleFailure> {
        let mut rules: Vec<Rule<'_>> = vec![
            (
                "less than the greater reference",
                Box::new(move || {
                    let value = target < &self.gt;
                    bool_verdict("`target < gt` to be true", value, value)
                }),
            ),
            (
                "not less than the lesser reference",
                Box::new(move || {
                    let value = target < &self.lt;
                    bool_verdict("`target < lt` to be false", value, !value)
                }),
            ),
            (
                "not less than none",
                Box::new(move || {
                    let value = Some(target.clone()) < None;
                    bool_verdict("`Some(target) < None` to be false", value, !value)
                }),
            ),
            (
                "greater than the lesser reference",
                Box::new(move || {
                    let value = target > &self.lt;
                    bool_verdict("`target > lt` to be true", value, value)
                }),
            ),
            (
                "less than or equal to itself",
                Box::new(move || {
                    let value = target <= target;
                    bool_verdict("`target <= target` to be true", value, value)
                }),
            ),
            (
                "greater than or equal to itself",
                Box::new(move || {
                    let value = target >= target;
                    bool_verdict("`target >= target` to be true", value, value)
                }),
            ),
        ];
        if let Some(eq) = &self.eq {
            rules.push((
                "less than or equal to the eq reference",
                Box::new(move || {
                    let value = target <= eq;
                    bool_verdict("`target <= eq` to be true", value, value)
                }),
            ));
            rules.push((
                "greater than or equal to the eq reference",
                Box::new(move || {
                    let value = target >= eq;
                    bool_verdict("`target >= eq` to be true", value, value)
                }),
            ));
        }
        first_failure(rules)
    }
}

impl<T: PartialOrd + Clone + Debug> Constraint<T> for ComparisonContract<T> {
    fn matches(&self, actual: &T) -> bool {
        self.offender(actual).is_none()
    }

    fn describe(&self) -> String {
        format!(
            "consistent comparison operators against lt {:?} and gt {:?}",
            self.lt, self.gt
        )
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        match self.offender(actual) {
            Some(failure) => format!(
                "{HEADER} Rule `{}` failed: expected {}, but was {}",
                failure.name, failure.expected, failure.actual
            ),
            None => "every operator rule held".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_behaved_target_passes() {
        let c = implements_comparison(1, 3).with_eq(2);
        assert!(c.matches(&2));
    }

    #[test]
    fn floats_pass_with_ordinary_references() {
        let c = implements_comparison(0.5, 2.5).with_eq(1.5);
        assert!(c.matches(&1.5));
    }

    #[test]
    fn swapped_references_blame_the_first_less_than_rule() {
        let c = implements_comparison(9, 1);
        assert!(!c.matches(&5));
        let message = c.describe_mismatch(&5);
        assert!(message.starts_with(HEADER), "{message}");
        assert!(message.contains("less than the greater reference"));
    }

    #[test]
    fn nan_fails_on_the_first_rule() {
        let c = implements_comparison(0.0, 1.0);
        assert!(!c.matches(&f64::NAN));
        // NAN is not < 1.0, so the chain stops at the first rule.
        assert!(c
            .describe_mismatch(&f64::NAN)
            .contains("less than the greater reference"));
    }
}
