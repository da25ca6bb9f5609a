//! Basic value constraints.
//!
//! These are the simple predicate vocabulary that the combinators in
//! [`super`] compose and index over. Each factory function returns a concrete
//! constraint struct.

use std::fmt::Debug;
use std::marker::PhantomData;

use super::{display_value, Constraint};

/// Create an equality constraint.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{equal_to, Constraint};
///
/// let c = equal_to(42);
/// assert!(c.matches(&42));
/// assert!(!c.matches(&0));
/// ```
pub fn equal_to<T: PartialEq + Debug>(expected: T) -> EqualTo<T> {
    EqualTo { expected }
}

/// Constraint requiring equality with an expected value.
pub struct EqualTo<T> {
    expected: T,
}

impl<T: PartialEq + Debug> Constraint<T> for EqualTo<T> {
    fn matches(&self, actual: &T) -> bool {
        actual == &self.expected
    }

    fn describe(&self) -> String {
        format!("equals {:?}", self.expected)
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        format!("{} is not equal to {:?}", display_value(actual), self.expected)
    }
}

/// Create a greater-than constraint.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{greater_than, Constraint};
///
/// let c = greater_than(10);
/// assert!(c.matches(&20));
/// assert!(!c.matches(&10));
/// ```
pub fn greater_than<T: PartialOrd + Debug>(threshold: T) -> GreaterThan<T> {
    GreaterThan { threshold }
}

/// Constraint requiring the actual value to exceed a threshold.
pub struct GreaterThan<T> {
    threshold: T,
}

impl<T: PartialOrd + Debug> Constraint<T> for GreaterThan<T> {
    fn matches(&self, actual: &T) -> bool {
        actual > &self.threshold
    }

    fn describe(&self) -> String {
        format!("greater than {:?}", self.threshold)
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        format!(
            "{} is not greater than {:?}",
            display_value(actual),
            self.threshold
        )
    }
}

/// Create a less-than constraint.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{less_than, Constraint};
///
/// let c = less_than(10);
/// assert!(c.matches(&5));
/// assert!(!c.matches(&20));
/// ```
pub fn less_than<T: PartialOrd + Debug>(threshold: T) -> LessThan<T> {
    LessThan { threshold }
}

/// Constraint requiring the actual value to fall below a threshold.
pub struct LessThan<T> {
    threshold: T,
}

impl<T: PartialOrd + Debug> Constraint<T> for LessThan<T> {
    fn matches(&self, actual: &T) -> bool {
        actual < &self.threshold
    }

    fn describe(&self) -> String {
        format!("less than {:?}", self.threshold)
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        format!(
            "{} is not less than {:?}",
            display_value(actual),
            self.threshold
        )
    }
}

/// Create a predicate-based constraint with a custom description.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{satisfies, Constraint};
///
/// let c = satisfies(|x: &i32| x % 2 == 0, "an even number");
/// assert!(c.matches(&4));
/// assert!(!c.matches(&3));
/// ```
pub fn satisfies<T, F>(predicate: F, description: &str) -> Satisfies<T, F>
where
    F: Fn(&T) -> bool,
{
    Satisfies {
        predicate,
        description: description.to_string(),
        _marker: PhantomData,
    }
}

/// Constraint backed by an arbitrary predicate function.
pub struct Satisfies<T: ?Sized, F> {
    predicate: F,
    description: String,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Debug + ?Sized, F: Fn(&T) -> bool> Constraint<T> for Satisfies<T, F> {
    fn matches(&self, actual: &T) -> bool {
        (self.predicate)(actual)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        format!("{} is not {}", display_value(actual), self.description)
    }
}

/// Create a substring constraint for strings.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{contains_str, Constraint};
///
/// let c = contains_str("world");
/// assert!(c.matches("hello world"));
/// assert!(!c.matches("hello"));
/// ```
pub fn contains_str(fragment: &str) -> ContainsStr {
    ContainsStr {
        fragment: fragment.to_string(),
    }
}

/// Constraint requiring a string to contain a fragment.
pub struct ContainsStr {
    fragment: String,
}

impl Constraint<str> for ContainsStr {
    fn matches(&self, actual: &str) -> bool {
        actual.contains(&self.fragment)
    }

    fn describe(&self) -> String {
        format!("a string containing {:?}", self.fragment)
    }

    fn describe_mismatch(&self, actual: &str) -> String {
        format!("{actual:?} does not contain {:?}", self.fragment)
    }
}

impl Constraint<String> for ContainsStr {
    fn matches(&self, actual: &String) -> bool {
        Constraint::<str>::matches(self, actual)
    }

    fn describe(&self) -> String {
        Constraint::<str>::describe(self)
    }

    fn describe_mismatch(&self, actual: &String) -> String {
        Constraint::<str>::describe_mismatch(self, actual)
    }
}

/// Create a prefix constraint for strings.
pub fn starts_with(prefix: &str) -> StartsWith {
    StartsWith {
        prefix: prefix.to_string(),
    }
}

/// Constraint requiring a string to start with a prefix.
pub struct StartsWith {
    prefix: String,
}

impl Constraint<str> for StartsWith {
    fn matches(&self, actual: &str) -> bool {
        actual.starts_with(&self.prefix)
    }

    fn describe(&self) -> String {
        format!("a string starting with {:?}", self.prefix)
    }

    fn describe_mismatch(&self, actual: &str) -> String {
        format!("{actual:?} does not start with {:?}", self.prefix)
    }
}

impl Constraint<String> for StartsWith {
    fn matches(&self, actual: &String) -> bool {
        Constraint::<str>::matches(self, actual)
    }

    fn describe(&self) -> String {
        Constraint::<str>::describe(self)
    }

    fn describe_mismatch(&self, actual: &String) -> String {
        Constraint::<str>::describe_mismatch(self, actual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_to_matches_and_describes() {
        let c = equal_to(42);
        assert!(c.matches(&42));
        assert!(!c.matches(&0));
        assert_eq!(c.describe(), "equals 42");
        assert!(c.describe_mismatch(&0).contains("not equal to 42"));
    }

    #[test]
    fn greater_than_excludes_threshold() {
        let c = greater_than(10);
        assert!(c.matches(&20));
        assert!(!c.matches(&10));
        assert!(!c.matches(&5));
    }

    #[test]
    fn less_than_excludes_threshold() {
        let c = less_than(10);
        assert!(c.matches(&5));
        assert!(!c.matches(&10));
    }

    #[test]
    fn satisfies_uses_description() {
        let c = satisfies(|x: &i32| x % 2 == 0, "an even number");
        assert!(c.matches(&4));
        assert!(!c.matches(&3));
        assert_eq!(c.describe(), "an even number");
        assert!(c.describe_mismatch(&3).contains("an even number"));
    }

    #[test]
    fn contains_str_on_both_string_kinds() {
        let c = contains_str("orl");
        assert!(c.matches("world"));
        assert!(c.matches(&"world".to_string()));
        assert!(!c.matches("word"));
    }

    #[test]
    fn starts_with_checks_prefix() {
        let c = starts_with("he");
        assert!(c.matches("hello"));
        assert!(!c.matches("oh hello"));
    }
}
