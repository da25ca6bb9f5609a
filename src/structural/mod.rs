//! Partial structural matching over object graphs.
//!
//! [`matching`] compares an actual value against a template that names only
//! the members of interest. Both sides are lowered to a tagged value model
//! (scalar, object, sequence) through [`serde`], so the comparison itself is
//! a pure walk that never touches the original types:
//!
//! - Object members present on the template must match; extra members on the
//!   actual value are ignored.
//! - Sequences compare element by element, by position, and must have equal
//!   lengths.
//! - Scalars compare by value, ignoring declared type differences (an `i32`
//!   field matches a `u64` template value of the same magnitude).
//!
//! The first leaf-level difference found is the only one reported, as a
//! [`Discrepancy`] carrying the dotted/bracketed path to the offending
//! member.
//!
//! # Example
//!
//! ```rust
//! use matchkit::structural::matching;
//! use matchkit::constraint::Constraint;
//! use serde::Serialize;
//! use serde_json::json;
//!
//! #[derive(Serialize)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let actual = Person { name: "Ada".into(), age: 36 };
//!
//! // Templates name only the members under test.
//! assert!(matching(&json!({"name": "Ada"})).matches(&actual));
//! assert!(!matching(&json!({"age": 37})).matches(&actual));
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::constraint::Constraint;

mod walk;

pub use walk::first_discrepancy;

/// Create a structural constraint from a template value.
///
/// The template may be any [`Serialize`] value; `serde_json::json!` literals
/// are the usual choice for partial shapes.
///
/// # Panics
///
/// Panics if the template cannot be lowered to a structural value (for
/// example a map with non-string keys). Passing such a template is a usage
/// error, not a failing assertion.
pub fn matching<S: Serialize>(template: &S) -> MatchingConstraint {
    MatchingConstraint {
        template: serde_json::to_value(template)
            .expect("template must lower to a structural value"),
    }
}

/// Constraint comparing an actual value against a partial template.
pub struct MatchingConstraint {
    template: Value,
}

impl<T: Serialize> Constraint<T> for MatchingConstraint {
    fn matches(&self, actual: &T) -> bool {
        first_discrepancy(&self.template, &lower(actual)).is_none()
    }

    fn describe(&self) -> String {
        format!("a value structurally matching {}", self.template)
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        match first_discrepancy(&self.template, &lower(actual)) {
            Some(discrepancy) => discrepancy.to_string(),
            None => "no structural difference".to_string(),
        }
    }
}

/// Lower an actual value to the tagged value model.
///
/// Panics on unrepresentable values for the same reason as [`matching`]:
/// handing the walker a value it cannot model is a programming error.
fn lower<T: Serialize>(actual: &T) -> Value {
    serde_json::to_value(actual).expect("actual value must lower to a structural value")
}

/// The deepest point of difference found during a structural walk.
#[derive(Debug, Clone, PartialEq)]
pub struct Discrepancy {
    /// Dotted/bracketed path to the offending member, empty at the root.
    pub path: String,
    /// Template-side value, `None` when the template lacks the member.
    pub expected: Option<Value>,
    /// Actual-side value, `None` when the actual lacks the member.
    pub actual: Option<Value>,
}

impl Discrepancy {
    fn render(side: &Option<Value>) -> String {
        match side {
            Some(value) => value.to_string(),
            None => "missing".to_string(),
        }
    }
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let subject = if self.path.is_empty() {
            "value"
        } else {
            self.path.as_str()
        };
        write!(
            f,
            "{subject}: expected {}, but was {}",
            Self::render(&self.expected),
            Self::render(&self.actual)
        )
    }
}
