//! Deterministic and random UUIDs for fixtures.

use parking_lot::Mutex;
use uuid::Uuid;

/// Build a deterministic UUID from an integer.
///
/// The same input always yields the same UUID, so fixtures can name their
/// identifiers meaningfully (`guid_from(1)`, `guid_from(2)`).
#[must_use]
pub fn guid_from(n: u128) -> Uuid {
    Uuid::from_u128(n)
}

/// Generate a random v4 UUID.
#[must_use]
pub fn random_guid() -> Uuid {
    Uuid::new_v4()
}

/// A source of consecutive deterministic UUIDs.
///
/// # Example
///
/// ```rust
/// use matchkit::builders::guid::{guid_from, GuidSequence};
///
/// let sequence = GuidSequence::starting_at(10);
/// assert_eq!(sequence.next_guid(), guid_from(10));
/// assert_eq!(sequence.next_guid(), guid_from(11));
/// ```
pub struct GuidSequence {
    next: Mutex<u128>,
}

impl GuidSequence {
    /// A sequence starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A sequence starting at the given value.
    #[must_use]
    pub fn starting_at(first: u128) -> Self {
        Self {
            next: Mutex::new(first),
        }
    }

    /// The next UUID in the sequence.
    pub fn next_guid(&self) -> Uuid {
        let mut next = self.next.lock();
        let id = guid_from(*next);
        *next += 1;
        id
    }
}

impl Default for GuidSequence {
    fn default() -> Self {
        Self::new()
    }
}
