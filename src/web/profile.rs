//! In-memory profile store stub.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde_json::Value;

/// A per-user profile property store with save tracking.
///
/// Tests seed property values, run the code under test, and then assert on
/// the values and on whether a save happened for the user.
///
/// # Example
///
/// ```rust
/// use matchkit::web::ProfileStub;
///
/// let profiles = ProfileStub::new();
/// profiles.set("ada", "theme", "dark");
/// profiles.save("ada");
///
/// assert_eq!(profiles.get("ada", "theme"), Some("dark".into()));
/// assert_eq!(profiles.save_count(), 1);
/// assert!(profiles.saved_users().contains(&"ada".to_string()));
/// ```
#[derive(Default)]
pub struct ProfileStub {
    profiles: Mutex<HashMap<String, HashMap<String, Value>>>,
    saves: Mutex<Vec<String>>,
}

impl ProfileStub {
    /// Create an empty profile store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property value for a user.
    pub fn set(&self, user: &str, property: &str, value: impl Into<Value>) {
        self.profiles
            .lock()
            .entry(user.to_string())
            .or_default()
            .insert(property.to_string(), value.into());
    }

    /// Get a property value for a user.
    #[must_use]
    pub fn get(&self, user: &str, property: &str) -> Option<Value> {
        self.profiles
            .lock()
            .get(user)
            .and_then(|props| props.get(property))
            .cloned()
    }

    /// Record that the user's profile was saved.
    pub fn save(&self, user: &str) {
        self.saves.lock().push(user.to_string());
    }

    /// Number of saves recorded so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.lock().len()
    }

    /// Users whose profiles were saved, in save order.
    #[must_use]
    pub fn saved_users(&self) -> Vec<String> {
        self.saves.lock().clone()
    }

    /// Drop all profiles and recorded saves.
    pub fn reset(&self) {
        self.profiles.lock().clear();
        self.saves.lock().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn properties_are_stored_per_user() {
        let profiles = ProfileStub::new();
        profiles.set("ada", "theme", "dark");
        profiles.set("grace", "theme", "light");

        assert_eq!(profiles.get("ada", "theme"), Some("dark".into()));
        assert_eq!(profiles.get("grace", "theme"), Some("light".into()));
        assert_eq!(profiles.get("ada", "missing"), None);
        assert_eq!(profiles.get("nobody", "theme"), None);
    }

    #[test]
    fn values_accept_any_json_kind() {
        let profiles = ProfileStub::new();
        profiles.set("ada", "age", 36);
        profiles.set("ada", "verified", true);

        assert_eq!(profiles.get("ada", "age"), Some(36.into()));
        assert_eq!(profiles.get("ada", "verified"), Some(true.into()));
    }

    #[test]
    fn saves_are_tracked_in_order() {
        let profiles = ProfileStub::new();
        assert_eq!(profiles.save_count(), 0);

        profiles.save("ada");
        profiles.save("grace");
        profiles.save("ada");

        assert_eq!(profiles.save_count(), 3);
        assert_eq!(profiles.saved_users(), vec!["ada", "grace", "ada"]);
    }

    #[test]
    fn reset_clears_everything() {
        let profiles = ProfileStub::new();
        profiles.set("ada", "theme", "dark");
        profiles.save("ada");

        profiles.reset();

        assert_eq!(profiles.get("ada", "theme"), None);
        assert_eq!(profiles.save_count(), 0);
    }
}
