//! Rule-chain evaluation shared by the contract checkers.
//!
//! A checker builds an ordered list of lazily evaluated rules and asks for
//! the first failure. Evaluation is pure: nothing is stored on the checker
//! between runs.

use std::cmp::Ordering;

/// Outcome of evaluating one rule.
pub(crate) struct Verdict {
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// A named rule whose verdict is computed on demand.
pub(crate) type Rule<'a> = (&'static str, Box<dyn Fn() -> Verdict + 'a>);

/// The offending rule of a failed chain.
pub(crate) struct RuleFailure {
    pub name: &'static str,
    pub expected: String,
    pub actual: String,
}

/// Evaluate rules in order, returning the first failure.
///
/// Rules past the offender are never evaluated.
pub(crate) fn first_failure(rules: Vec<Rule<'_>>) -> Option<RuleFailure> {
    for (name, check) in rules {
        let verdict = check();
        if !verdict.passed {
            return Some(RuleFailure {
                name,
                expected: verdict.expected,
                actual: verdict.actual,
            });
        }
    }
    None
}

/// Verdict for a rule expecting a particular [`Ordering`].
pub(crate) fn ordering_verdict(got: Ordering, want: Ordering) -> Verdict {
    Verdict {
        passed: got == want,
        expected: format!("{want:?}"),
        actual: format!("{got:?}"),
    }
}

/// Verdict for a rule over a boolean expression.
pub(crate) fn bool_verdict(expectation: &str, value: bool, passed: bool) -> Verdict {
    Verdict {
        passed,
        expected: expectation.to_string(),
        actual: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};

    #[test]
    fn empty_chain_has_no_failure() {
        assert!(first_failure(Vec::new()).is_none());
    }

    #[test]
    fn first_failing_rule_is_the_offender() {
        let rules: Vec<Rule<'_>> = vec![
            ("passes", Box::new(|| bool_verdict("true", true, true))),
            ("fails", Box::new(|| bool_verdict("true", false, false))),
            ("also fails", Box::new(|| bool_verdict("true", false, false))),
        ];
        let failure = first_failure(rules).unwrap();
        assert_eq!(failure.name, "fails");
    }

    #[test]
    fn rules_past_the_offender_are_not_evaluated() {
        let evaluated = AtomicUsize::new(0);
        let rules: Vec<Rule<'_>> = vec![
            (
                "fails",
                Box::new(|| {
                    evaluated.fetch_add(1, AtomicOrdering::SeqCst);
                    bool_verdict("true", false, false)
                }),
            ),
            (
                "never reached",
                Box::new(|| {
                    evaluated.fetch_add(1, AtomicOrdering::SeqCst);
                    bool_verdict("true", true, true)
                }),
            ),
        ];
        assert!(first_failure(rules).is_some());
        assert_eq!(evaluated.load(AtomicOrdering::SeqCst), 1);
    }

    #[test]
    fn ordering_verdict_formats_both_sides() {
        let verdict = ordering_verdict(Ordering::Less, Ordering::Greater);
        assert!(!verdict.passed);
        assert_eq!(verdict.expected, "Greater");
        assert_eq!(verdict.actual, "Less");
    }
}
