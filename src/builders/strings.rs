//! Fixture string helpers.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a random alphanumeric string of the given length.
#[must_use]
pub fn random_alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Repeat a fragment a number of times.
#[must_use]
pub fn repeated(fragment: &str, times: usize) -> String {
    fragment.repeat(times)
}
