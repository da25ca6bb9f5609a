//! JSON round trips and the compact single-quote notation.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{FromRepr, RoundTrip};
use crate::constraint::Constraint;
use crate::error::{Error, Result};

/// Round-trip serializer backed by `serde_json`.
#[derive(Default)]
pub struct JsonSerializer {
    buf: Mutex<Option<String>>,
}

impl JsonSerializer {
    /// Create a JSON serializer with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> RoundTrip<T> for JsonSerializer
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self, value: &T) -> Result<String> {
        let repr = serde_json::to_string(value).map_err(Error::serialize)?;
        *self.buf.lock() = Some(repr.clone());
        Ok(repr)
    }

    fn deserialize(&self) -> Result<T> {
        let guard = self.buf.lock();
        let repr = guard.as_ref().ok_or(Error::NothingSerialized)?;
        serde_json::from_str(repr).map_err(Error::deserialize)
    }
}

impl<T: DeserializeOwned> FromRepr<T> for JsonSerializer {
    fn deserialize_str(&self, repr: &str) -> Result<T> {
        serde_json::from_str(repr).map_err(Error::deserialize)
    }
}

/// Rewrite compact single-quoted JSON-like text into standard JSON.
///
/// This is a pure character substitution, not a parser: every single quote
/// becomes a double quote. Text whose payload itself contains single quotes
/// is not expressible in the compact notation.
///
/// # Example
///
/// ```rust
/// use matchkit::serial::jsonify;
///
/// assert_eq!(jsonify("{'prop':'value'}"), "{\"prop\":\"value\"}");
/// ```
#[must_use]
pub fn jsonify(compact: &str) -> String {
    compact.replace('\'', "\"")
}

/// Create a string-equality constraint whose expected side is compact JSON.
///
/// The expected text is run through [`jsonify`] once at construction; the
/// actual string is compared literally.
///
/// # Example
///
/// ```rust
/// use matchkit::constraint::Constraint;
/// use matchkit::serial::compact_json;
///
/// let c = compact_json("{'prop':'value'}");
/// assert!(c.matches("{\"prop\":\"value\"}"));
/// assert!(!c.matches("{'prop':'value'}"));
/// ```
pub fn compact_json(expected: &str) -> CompactJson {
    CompactJson {
        expected: jsonify(expected),
    }
}

/// Constraint comparing a JSON string against an expanded compact template.
pub struct CompactJson {
    expected: String,
}

impl Constraint<str> for CompactJson {
    fn matches(&self, actual: &str) -> bool {
        actual == self.expected
    }

    fn describe(&self) -> String {
        format!("the JSON text {:?}", self.expected)
    }

    fn describe_mismatch(&self, actual: &str) -> String {
        format!("{actual:?} is not equal to {:?}", self.expected)
    }
}

impl Constraint<String> for CompactJson {
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
    fn round_trip_restores_the_value() {
        let serializer = JsonSerializer::new();
        let repr = RoundTrip::serialize(&serializer, &vec![1, 2, 3]).unwrap();
        assert_eq!(repr, "[1,2,3]");
        let back: Vec<i32> = serializer.deserialize().unwrap();
        assert_eq!(back, vec![1, 2, 3]);
    }

    #[test]
    fn deserialize_before_serialize_is_an_error() {
        let serializer = JsonSerializer::new();
        let result: Result<Vec<i32>> = serializer.deserialize();
        assert!(matches!(result, Err(Error::NothingSerialized)));
    }

    #[test]
    fn garbage_repr_is_a_deserialize_error() {
        let serializer = JsonSerializer::new();
        let result: Result<Vec<i32>> = serializer.deserialize_str("not json");
        assert!(matches!(result, Err(Error::Deserialize(_))));
    }

    #[test]
    fn jsonify_swaps_every_quote() {
        assert_eq!(jsonify("{'a':['b','c']}"), "{\"a\":[\"b\",\"c\"]}");
        assert_eq!(jsonify("plain"), "plain");
    }

    #[test]
    fn compact_json_compares_expanded_text() {
        let c = compact_json("{'prop':'value'}");
        assert!(c.matches("{\"prop\":\"value\"}"));
        assert!(!c.matches("{\"prop\":\"other\"}"));
    }
}
