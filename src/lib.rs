//! The `hdate_rs` crate converts between the Hebrew calendar, the
//! proleptic Gregorian calendar and Julian Day Numbers, and derives the
//! calendar-dependent facts of a Hebrew date: its holidays and the weekly
//! Torah reading (parasha).
//!
//! ```rust
//! use hdate_rs::{GregorianDate, HebrewDate, HolidayDatabase, Month, Parasha};
//!
//! // 5 Tevet 5785 fell on January 5th, 2025.
//! let gdate = GregorianDate::try_new(2025, 1, 5).unwrap();
//! let hdate = HebrewDate::from_gdate(gdate).unwrap();
//! assert_eq!(hdate, HebrewDate::try_new(5785, Month::Tevet, 5).unwrap());
//!
//! // The 25th of Kislev is the first day of Chanukah.
//! let chanukah = HebrewDate::try_new(5783, Month::Kislev, 25).unwrap();
//! let holidays = HolidayDatabase::new(false).lookup(&chanukah).unwrap();
//! assert_eq!(holidays[0].name(), "chanukah");
//!
//! // The reading for Shabbat, November 3rd, 2018.
//! let shabbat = HebrewDate::from_gdate(GregorianDate::try_new(2018, 11, 3).unwrap()).unwrap();
//! assert_eq!(hdate_rs::get_reading(&shabbat, false).unwrap(), Parasha::ChayeiSara);
//! ```
//!
//! Names of months, holidays and parashot are exposed as opaque keys
//! (`"rosh_hashana_i"`, `"chayei_sara"`, ...). Rendering them in a given
//! language is left to the caller.
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // It may be worth to look if we can fix the issues highlighted by these lints.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

pub mod date;
pub mod error;
pub mod gregorian;
pub mod holidays;
pub mod info;
pub mod month;
pub mod parasha;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::HdateError;

/// The `hdate_rs` result type
pub type HdateResult<T> = Result<T, HdateError>;

pub use crate::{
    date::{HebrewDate, Weekday, YearLength},
    gregorian::GregorianDate,
    holidays::{Holiday, HolidayDatabase, HolidayType, Region},
    info::HDateInfo,
    month::{ComparisonMode, Month, MonthOrder},
    parasha::{get_reading, year_type, Parasha},
};

/// A library specific trait for unwrapping assertions.
pub(crate) trait HdateUnwrap {
    type Output;

    /// `hdate_rs` based assertion for unwrapping. This will panic in
    /// debug builds, but throws error during runtime.
    fn hdate_unwrap(self) -> HdateResult<Self::Output>;
}

impl<T> HdateUnwrap for Option<T> {
    type Output = T;

    #[cfg_attr(debug_assertions, track_caller)]
    fn hdate_unwrap(self) -> HdateResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or(HdateError::assert())
    }
}

#[doc(hidden)]
#[macro_export]
macro_rules! hdate_assert {
    ($condition:expr $(,)*) => {
        if !$condition {
            return Err($crate::HdateError::assert());
        }
    };
    ($condition:expr, $($args:tt)+) => {
        if !$condition {
            #[cfg(feature = "log")]
            log::error!($($args)+);
            return Err($crate::HdateError::assert());
        }
    };
}

/// The lowest Hebrew year with a regression-tested conversion.
pub const MIN_TESTED_YEAR: i32 = 3762;
/// The highest Hebrew year with a regression-tested conversion.
pub const MAX_TESTED_YEAR: i32 = 6000;
