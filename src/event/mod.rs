// Allow must_use_candidate for constraint factory functions since building the
// constraint without applying it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Property-change notification constraints.
//!
//! Subjects that announce property changes own a [`PropertyChanged`] hub and
//! expose it through [`NotifyPropertyChanged`]. The constraints subscribe a
//! recorder, invoke a caller-supplied action, and check whether the event
//! fired for the expected property:
//!
//! - [`raises_property_changed`] - the event must fire for the property
//! - [`does_not_raise_property_changed`] - the event must not fire for it
//!
//! # Example
//!
//! ```rust
//! use matchkit::constraint::Constraint;
//! use matchkit::event::{raises_property_changed, NotifyPropertyChanged, PropertyChanged};
//! use std::cell::Cell;
//!
//! struct Counter {
//!     value: Cell<i32>,
//!     changes: PropertyChanged,
//! }
//!
//! impl Counter {
//!     fn increment(&self) {
//!         self.value.set(self.value.get() + 1);
//!         self.changes.notify("value");
//!     }
//! }
//!
//! impl NotifyPropertyChanged for Counter {
//!     fn property_changed(&self) -> &PropertyChanged {
//!         &self.changes
//!     }
//! }
//!
//! let counter = Counter { value: Cell::new(0), changes: PropertyChanged::new() };
//! let c = raises_property_changed("value", |c: &Counter| c.increment());
//! assert!(c.matches(&counter));
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::constraint::Constraint;

/// A property-change event hub owned by a notifying subject.
#[derive(Default)]
pub struct PropertyChanged {
    listeners: Mutex<Vec<Box<dyn Fn(&str)>>>,
}

impl PropertyChanged {
    /// Create a hub with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Announce that the named property changed.
    pub fn notify(&self, property: &str) {
        for listener in self.listeners.lock().iter() {
            listener(property);
        }
    }

    /// Subscribe a listener invoked with each changed property name.
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) {
        self.listeners.lock().push(Box::new(listener));
    }
}

/// Capability bound for subjects that announce property changes.
pub trait NotifyPropertyChanged {
    /// The subject's event hub.
    fn property_changed(&self) -> &PropertyChanged;
}

/// Create a constraint asserting the event fires for a property.
///
/// The action runs once per evaluation with the subject, and the constraint
/// succeeds iff a change was announced for the given property name.
pub fn raises_property_changed<T>(
    property: impl Into<String>,
    action: impl Fn(&T) + 'static,
) -> PropertyChangedConstraint<T>
where
    T: NotifyPropertyChanged + ?Sized,
{
    PropertyChangedConstraint {
        property: property.into(),
        action: Box::new(action),
        negated: false,
    }
}

/// Create a constraint asserting the event does not fire for a property.
pub fn does_not_raise_property_changed<T>(
    property: impl Into<String>,
    action: impl Fn(&T) + 'static,
) -> PropertyChangedConstraint<T>
where
    T: NotifyPropertyChanged + ?Sized,
{
    PropertyChangedConstraint {
        property: property.into(),
        action: Box::new(action),
        negated: true,
    }
}

/// Constraint observing property-change notifications around an action.
pub struct PropertyChangedConstraint<T: ?Sized> {
    property: String,
    action: Box<dyn Fn(&T)>,
    negated: bool,
}

impl<T: NotifyPropertyChanged + ?Sized> PropertyChangedConstraint<T> {
    fn raised(&self, subject: &T) -> Vec<String> {
        let raised = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&raised);
        subject
            .property_changed()
            .subscribe(move |name| sink.lock().push(name.to_string()));
        (self.action)(subject);
        let names = raised.lock();
        names.clone()
    }
}

impl<T: NotifyPropertyChanged + ?Sized> Constraint<T> for PropertyChangedConstraint<T> {
    fn matches(&self, subject: &T) -> bool {
        let fired = self.raised(subject).iter().any(|n| n == &self.property);
        fired != self.negated
    }

    fn describe(&self) -> String {
        if self.negated {
            format!("no property change notification for {:?}", self.property)
        } else {
            format!("a property change notification for {:?}", self.property)
        }
    }

    fn describe_mismatch(&self, subject: &T) -> String {
        let raised = self.raised(subject);
        if self.negated {
            format!("the event fired for {:?}", self.property)
        } else if raised.is_empty() {
            "no property change was announced".to_string()
        } else {
            format!("the event fired for {raised:?}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Temperature {
        celsius: Cell<f64>,
        changes: PropertyChanged,
    }

    impl Temperature {
        fn new() -> Self {
            Self {
                celsius: Cell::new(0.0),
                changes: PropertyChanged::new(),
            }
        }

        fn set_celsius(&self, value: f64) {
            self.celsius.set(value);
            self.changes.notify("celsius");
            self.changes.notify("fahrenheit");
        }

        fn recalibrate(&self) {
            // Internal bookkeeping only, no notification.
        }
    }

    impl NotifyPropertyChanged for Temperature {
        fn property_changed(&self) -> &PropertyChanged {
            &self.changes
        }
    }

    #[test]
    fn raised_property_matches() {
        let subject = Temperature::new();
        let c = raises_property_changed("celsius", |t: &Temperature| t.set_celsius(21.5));
        assert!(c.matches(&subject));
        assert!((subject.celsius.get() - 21.5).abs() < f64::EPSILON);
    }

    #[test]
    fn dependent_property_also_fires() {
        let subject = Temperature::new();
        let c = raises_property_changed("fahrenheit", |t: &Temperature| t.set_celsius(30.0));
        assert!(c.matches(&subject));
    }

    #[test]
    fn silent_action_fails_and_says_so() {
        let subject = Temperature::new();
        let c = raises_property_changed("celsius", |t: &Temperature| t.recalibrate());
        assert!(!c.matches(&subject));
        assert_eq!(
            c.describe_mismatch(&subject),
            "no property change was announced"
        );
    }

    #[test]
    fn wrong_property_reports_what_fired() {
        let subject = Temperature::new();
        let c = raises_property_changed("humidity", |t: &Temperature| t.set_celsius(1.0));
        assert!(!c.matches(&subject));
        assert!(c.describe_mismatch(&subject).contains("celsius"));
    }

    #[test]
    fn negated_variant_rejects_a_firing_event() {
        let subject = Temperature::new();
        let c = does_not_raise_property_changed("celsius", |t: &Temperature| t.set_celsius(1.0));
        assert!(!c.matches(&subject));

        let quiet = does_not_raise_property_changed("celsius", |t: &Temperature| t.recalibrate());
        assert!(quiet.matches(&subject));
    }
}
