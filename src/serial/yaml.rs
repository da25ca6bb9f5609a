//! YAML round trips.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{FromRepr, RoundTrip};
use crate::error::{Error, Result};

/// Round-trip serializer backed by `serde_yaml`.
#[derive(Default)]
pub struct YamlSerializer {
    buf: Mutex<Option<String>>,
}

impl YamlSerializer {
    /// Create a YAML serializer with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> RoundTrip<T> for YamlSerializer
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self, value: &T) -> Result<String> {
        let repr = serde_yaml::to_string(value).map_err(Error::serialize)?;
        *self.buf.lock() = Some(repr.clone());
        Ok(repr)
    }

    fn deserialize(&self) -> Result<T> {
        let guard = self.buf.lock();
        let repr = guard.as_ref().ok_or(Error::NothingSerialized)?;
        serde_yaml::from_str(repr).map_err(Error::deserialize)
    }
}

impl<T: DeserializeOwned> FromRepr<T> for YamlSerializer {
    fn deserialize_str(&self, repr: &str) -> Result<T> {
        serde_yaml::from_str(repr).map_err(Error::deserialize)
    }
}
