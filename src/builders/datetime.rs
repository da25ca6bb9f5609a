//! Fluent calendar and clock construction.
//!
//! Dates in test fixtures read as prose: the day names its month, the date
//! names its time of day.
//!
//! # Example
//!
//! ```rust
//! use matchkit::builders::datetime::{DayOfMonth, InUtc, TimeOfDay};
//!
//! let departure = 2.december(2009).at(10, 30, 0);
//! assert_eq!(departure.to_string(), "2009-12-02 10:30:00");
//!
//! let instant = 1.january(2020).at_midnight().utc();
//! assert_eq!(instant.timestamp(), 1_577_836_800);
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

macro_rules! months {
    ($($name:ident => $number:expr),* $(,)?) => {
        /// Calendar construction from a day-of-month number.
        ///
        /// # Panics
        ///
        /// Every method panics on a day that does not exist in the named
        /// month and year; a fixture naming an impossible date is a
        /// programming error.
        pub trait DayOfMonth {
            $(
                #[doc = concat!("Build the date in ", stringify!($name), " of the given year.")]
                fn $name(self, year: i32) -> NaiveDate;
            )*
        }

        impl DayOfMonth for u32 {
            $(
                fn $name(self, year: i32) -> NaiveDate {
                    NaiveDate::from_ymd_opt(year, $number, self)
                        .expect("valid calendar date")
                }
            )*
        }
    };
}

months! {
    january => 1,
    february => 2,
    march => 3,
    april => 4,
    may => 5,
    june => 6,
    july => 7,
    august => 8,
    september => 9,
    october => 10,
    november => 11,
    december => 12,
}

/// Clock construction on a date.
pub trait TimeOfDay {
    /// The date at the given wall-clock time.
    ///
    /// # Panics
    ///
    /// Panics on an impossible time of day.
    fn at(self, hour: u32, minute: u32, second: u32) -> NaiveDateTime;

    /// The date at 00:00:00.
    fn at_midnight(self) -> NaiveDateTime;
}

impl TimeOfDay for NaiveDate {
    fn at(self, hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        self.and_hms_opt(hour, minute, second)
            .expect("valid time of day")
    }

    fn at_midnight(self) -> NaiveDateTime {
        self.at(0, 0, 0)
    }
}

/// Anchoring a naive timestamp in UTC.
pub trait InUtc {
    /// Interpret the timestamp as UTC.
    fn utc(self) -> DateTime<Utc>;
}

impl InUtc for NaiveDateTime {
    fn utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self)
    }
}
