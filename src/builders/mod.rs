//! Fixture builders: dates, times, guids, and strings.
//!
//! Small utilities for constructing readable test data:
//!
//! - [`datetime`] - fluent calendar construction (`2.december(2009).at(10, 30, 0)`)
//! - [`guid`] - deterministic and random UUIDs
//! - [`strings`] - random and repeated fixture text

pub mod datetime;
pub mod guid;
pub mod strings;

pub use datetime::{DayOfMonth, InUtc, TimeOfDay};
pub use guid::{guid_from, random_guid, GuidSequence};
pub use strings::{random_alphanumeric, repeated};
