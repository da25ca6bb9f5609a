// Allow must_use_candidate for contract factory functions since building the
// checker without applying it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Comparison-contract checkers.
//!
//! These constraints probe whether a type's comparison implementation is
//! internally consistent against supplied reference values:
//!
//! - [`implements_ord`] - checks an [`Ord`] implementation
//! - [`implements_comparison`] - checks the comparison operators
//!   ([`PartialOrd`])
//! - [`implements_eq`] - checks a [`PartialEq`] implementation
//!
//! Each checker evaluates an ordered chain of rules and stops at the first
//! one that fails; that rule is reported as the offender, prefixed by a fixed
//! contract-name header.
//!
//! # Example
//!
//! ```rust
//! use matchkit::contract::implements_ord;
//! use matchkit::constraint::Constraint;
//!
//! let c = implements_ord(1, 3).with_eq(2);
//! assert!(c.matches(&2));
//! ```

mod chain;
mod cmp;
mod eq;
mod ord;

pub use cmp::{implements_comparison, ComparisonContract};
pub use eq::{implements_eq, EqContract};
pub use ord::{implements_ord, OrdContract};
