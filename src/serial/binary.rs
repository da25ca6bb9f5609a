//! Binary round trips: bincode bytes carried as base64 text.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{FromRepr, RoundTrip};
use crate::error::{Error, Result};

/// Round-trip serializer producing bincode bytes in base64 string form.
#[derive(Default)]
pub struct BinarySerializer {
    buf: Mutex<Option<String>>,
}

impl BinarySerializer {
    /// Create a binary serializer with an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> RoundTrip<T> for BinarySerializer
where
    T: Serialize + DeserializeOwned,
{
    fn serialize(&self, value: &T) -> Result<String> {
        let bytes = bincode::serialize(value).map_err(Error::serialize)?;
        let repr = BASE64.encode(bytes);
        *self.buf.lock() = Some(repr.clone());
        Ok(repr)
    }

    fn deserialize(&self) -> Result<T> {
        let guard = self.buf.lock();
        let repr = guard.as_ref().ok_or(Error::NothingSerialized)?;
        decode(repr)
    }
}

impl<T: DeserializeOwned> FromRepr<T> for BinarySerializer {
    fn deserialize_str(&self, repr: &str) -> Result<T> {
        decode(repr)
    }
}

fn decode<T: DeserializeOwned>(repr: &str) -> Result<T> {
    let bytes = BASE64.decode(repr).map_err(Error::deserialize)?;
    bincode::deserialize(&bytes).map_err(Error::deserialize)
}
