//! Serialization round-trip helpers and constraints.
//!
//! A round-trip serializer turns a value into a string representation and
//! back, so a test can assert that a type survives its wire format:
//!
//! - [`RoundTrip`] / [`FromRepr`] - the serializer abstractions
//! - [`JsonSerializer`], [`BinarySerializer`], [`YamlSerializer`],
//!   [`TomlSerializer`] - format implementations
//! - [`round_trips`] - constraint applying an inner constraint to the
//!   deserialized result
//! - [`deserializes_to`] - constraint decoding a pre-serialized
//!   representation
//! - [`jsonify`] / [`compact_json`] - single-quote JSON convenience notation
//!
//! Each format's on-wire representation is whatever the underlying
//! serializer produces; this crate defines no framing of its own.
//!
//! # Example
//!
//! ```rust
//! use matchkit::constraint::{satisfies, Constraint};
//! use matchkit::serial::{round_trips, JsonSerializer};
//!
//! let c = round_trips(
//!     JsonSerializer::new(),
//!     satisfies(|v: &Vec<u8>| v == &[1, 2, 3], "the original bytes"),
//! );
//! assert!(c.matches(&vec![1, 2, 3]));
//! ```

use crate::error::Result;

mod binary;
mod constraint;
mod json;
mod toml;
mod yaml;

pub use binary::BinarySerializer;
pub use constraint::{
    deserializes_to, round_trips, DeserializationConstraint, RoundTripConstraint,
};
pub use json::{compact_json, jsonify, CompactJson, JsonSerializer};
pub use toml::TomlSerializer;
pub use yaml::YamlSerializer;

/// A serializer that can round-trip a value through its string form.
///
/// The two halves are temporally coupled: [`deserialize`](RoundTrip::deserialize)
/// reads the representation stored by the most recent successful
/// [`serialize`](RoundTrip::serialize) call and fails with
/// [`Error::NothingSerialized`](crate::Error::NothingSerialized) before one
/// happened.
pub trait RoundTrip<T> {
    /// Serialize a value, store its representation, and return it.
    fn serialize(&self, value: &T) -> Result<String>;

    /// Deserialize the stored representation back into a value.
    fn deserialize(&self) -> Result<T>;
}

/// The read-only half: decode a value from a supplied representation.
pub trait FromRepr<T> {
    /// Deserialize a value from the given representation.
    fn deserialize_str(&self, repr: &str) -> Result<T>;
}
