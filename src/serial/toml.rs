//! TOML round trips.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{FromRepr, RoundTrip};
use crate::error::{Error, Result};

/// Round-trip serializer backed by the `toml` crate.
///
/// TOML only represents tables at the top level, so scalar and sequence
/// values fail to serialize; that failure surfaces through the constraint's
/// caught-error message like any other format error.
#[derive(Default)]
pub struct TomlSerializer {
    buf: Mutex<Option<String>>,
}

impl TomlSerializer {
    /// Create a TOML serializer with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> RoundTrip<T> for TomlSerializer
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self, value: &T) -> Result<String> {
        let repr = ::toml::to_string(value).map_err(Error::serialize)?;
        *self.buf.lock() = Some(repr.clone());
        Ok(repr)
    }

    fn deserialize(&self) -> Result<T> {
        let guard = self.buf.lock();
        let repr = guard.as_ref().ok_or(Error::NothingSerialized)?;
        ::toml::from_str(repr).map_err(Error::deserialize)
    }
}

impl<T: DeserializeOwned> FromRepr<T> for TomlSerializer {
    fn deserialize_str(&self, repr: &str) -> Result<T> {
        ::toml::from_str(repr).map_err(Error::deserialize)
    }
}
