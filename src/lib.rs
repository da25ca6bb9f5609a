//! # matchkit 🧰
//!
//! > Practical constraint-based assertions for Rust
//!
//! **matchkit** provides expressive matchers (constraints), serialization
//! round-trip checks, and test doubles to make assertions in your test
//! suites read like the property they verify.
//!
//! ## Quick Start
//!
//! ```rust
//! use matchkit::prelude::*;
//! use serde_json::json;
//!
//! // Value constraints with expected/actual failure text
//! assert_that!(42, equal_to(42));
//!
//! // Partial structural matching: name only the members under test
//! #[derive(serde::Serialize)]
//! struct User { name: String, age: u32 }
//! let user = User { name: "Ada".into(), age: 36 };
//! assert_that!(user, matching(&json!({"name": "Ada"})));
//!
//! // Serialization round trips
//! assert_that!(vec![1, 2, 3], round_trips(JsonSerializer::new(), equal_to(vec![1, 2, 3])));
//! ```
//!
//! ## Features
//!
//! - ✅ **Constraints** - predicates with expected/actual explanations
//! - 🧬 **Structural matching** - partial deep comparison with leaf-level
//!   discrepancy paths
//! - 📜 **Contract checkers** - probe `Ord`/`PartialEq` implementations for
//!   consistency
//! - 🔁 **Round-trip serialization** - JSON, binary, YAML, and TOML checks
//! - 🔔 **Event constraints** - assert property-change notifications fire
//! - 🌐 **Test doubles** - simulated requests, profile stores, lifecycle
//!   driving

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builders;
pub mod constraint;
pub mod contract;
pub mod error;
pub mod event;
pub mod serial;
pub mod structural;
pub mod web;

/// Prelude for convenient imports
///
/// ```rust
/// use matchkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assert_that;
    pub use crate::constraint::{
        all_of, boxed, contains_str, count_of, delegating, equal_to, evaluate, greater_than,
        in_order, less_than, not, recorded, satisfies, starts_with, Constraint,
    };
    pub use crate::contract::{implements_comparison, implements_eq, implements_ord};
    pub use crate::error::{Error, Result};
    pub use crate::event::{does_not_raise_property_changed, raises_property_changed};
    pub use crate::serial::{
        compact_json, deserializes_to, jsonify, round_trips, BinarySerializer, JsonSerializer,
        TomlSerializer, YamlSerializer,
    };
    pub use crate::structural::matching;
}

// Re-exports
pub use error::{Error, Result};
