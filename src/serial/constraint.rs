//! Constraints over serialization round trips.

use std::marker::PhantomData;

use super::{FromRepr, RoundTrip};
use crate::constraint::Constraint;
use crate::error::Result;

/// Create a round-trip constraint.
///
/// The actual value is serialized and deserialized through the given
/// serializer and the inner constraint is applied to the deserialized
/// result. A failure in either serialization step fails the match, and the
/// mismatch text carries the caught error instead of a value.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{equal_to, Constraint};
/// use matchkit::serial::{round_trips, JsonSerializer};
///
/// let c = round_trips(JsonSerializer::new(), equal_to(vec![1, 2, 3]));
/// assert!(c.matches(&vec![1, 2, 3]));
/// ```
pub fn round_trips<T, S, C>(serializer: S, inner: C) -> RoundTripConstraint<T, S, C>
where
    S: RoundTrip<T>,
    C: Constraint<T>,
{
    RoundTripConstraint {
        serializer,
        inner,
        _marker: PhantomData,
    }
}

/// Constraint applying an inner constraint to a round-tripped value.
pub struct RoundTripConstraint<T, S, C> {
    serializer: S,
    inner: C,
    _marker: PhantomData<fn() -> T>,
}

impl<T, S, C> RoundTripConstraint<T, S, C>
where
    S: RoundTrip<T>,
{
    fn round_trip(&self, actual: &T) -> Result<T> {
        self.serializer.serialize(actual)?;
        self.serializer.deserialize()
    }
}

impl<T, S, C> Constraint<T> for RoundTripConstraint<T, S, C>
where
    S: RoundTrip<T>,
    C: Constraint<T>,
{
    fn matches(&self, actual: &T) -> bool {
        match self.round_trip(actual) {
            Ok(restored) => self.inner.matches(&restored),
            Err(_) => false,
        }
    }

    fn describe(&self) -> String {
        format!(
            "a value that round-trips through serialization and {}",
            self.inner.describe()
        )
    }

    fn describe_mismatch(&self, actual: &T) -> String {
        match self.round_trip(actual) {
            Ok(restored) => self.inner.describe_mismatch(&restored),
            Err(error) => {
                format!("Could not serialize/deserialize object because: {error}")
            }
        }
    }
}

/// Create a deserialization constraint.
///
/// The actual value is a pre-serialized string representation; it is decoded
/// through the given deserializer and the inner constraint applies to the
/// decoded value. Decode failures render the caught error, as with
/// [`round_trips`].
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::{equal_to, Constraint};
/// use matchkit::serial::{deserializes_to, JsonSerializer};
///
/// let c = deserializes_to(JsonSerializer::new(), equal_to(vec![1, 2, 3]));
/// assert!(c.matches("[1,2,3]"));
/// assert!(!c.matches("[4]"));
/// ```
pub fn deserializes_to<T, D, C>(deserializer: D, inner: C) -> DeserializationConstraint<T, D, C>
where
    D: FromRepr<T>,
    C: Constraint<T>,
{
    DeserializationConstraint {
        deserializer,
        inner,
        _marker: PhantomData,
    }
}

/// Constraint applying an inner constraint to a decoded representation.
pub struct DeserializationConstraint<T, D, C> {
    deserializer: D,
    inner: C,
    _marker: PhantomData<fn() -> T>,
}

impl<T, D, C> Constraint<str> for DeserializationConstraint<T, D, C>
where
    D: FromRepr<T>,
    C: Constraint<T>,
{
    fn matches(&self, actual: &str) -> bool {
        match self.deserializer.deserialize_str(actual) {
            Ok(decoded) => self.inner.matches(&decoded),
            Err(_) => false,
        }
    }

    fn describe(&self) -> String {
        format!(
            "a representation that deserializes to {}",
            self.inner.describe()
        )
    }

    fn describe_mismatch(&self, actual: &str) -> String {
        match self.deserializer.deserialize_str(actual) {
            Ok(decoded) => self.inner.describe_mismatch(&decoded),
            Err(error) => {
                format!("Could not serialize/deserialize object because: {error}")
            }
        }
    }
}

impl<T, D, C> Constraint<String> for DeserializationConstraint<T, D, C>
where
    D: FromRepr<T>,
    C: Constraint<T>,
{
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
