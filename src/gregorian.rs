//! This module implements the proleptic Gregorian date record used to
//! bridge Hebrew dates to the civil calendar.
//!
//! Conversions go through the Julian Day Number (JDN), using the integer
//! algorithm of Fliegel and Van Flandern.

use core::fmt;

use num_traits::ToPrimitive;

use crate::{
    date::Weekday,
    error::{ErrorMessage, HdateError},
    HdateResult, HdateUnwrap,
};

/// The smallest JDN accepted by [`GregorianDate::from_jdn`] (-4713-11-24).
pub const MIN_JDN: i64 = 0;
/// The largest JDN accepted by [`GregorianDate::from_jdn`] (December 31st of
/// year `i32::MAX`).
pub const MAX_JDN: i64 = 784_354_017_364;

/// `GregorianDate` is a record of a proleptic Gregorian year, month and day.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `GregorianDate`.
    pub fn try_new(year: i32, month: u8, day: u8) -> HdateResult<Self> {
        if !is_valid_date(year, month, day) {
            return Err(HdateError::invalid_date().with_enum(ErrorMessage::GregorianOutOfRange));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the Julian Day Number of this date.
    pub fn to_jdn(self) -> i64 {
        let month = i64::from(self.month);
        let a = (14 - month).div_euclid(12);
        let y = i64::from(self.year) + 4800 - a;
        let m = month + 12 * a - 3;
        i64::from(self.day) + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4)
            - y.div_euclid(100)
            + y.div_euclid(400)
            - 32045
    }

    /// Creates a `GregorianDate` from a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> HdateResult<Self> {
        if !(MIN_JDN..=MAX_JDN).contains(&jdn) {
            return Err(HdateError::invalid_date().with_enum(ErrorMessage::GregorianOutOfRange));
        }
        let a = jdn + 32044;
        let b = (4 * a + 3).div_euclid(146_097);
        let c = a - (146_097 * b).div_euclid(4);
        let d = (4 * c + 3).div_euclid(1461);
        let e = c - (1461 * d).div_euclid(4);
        let m = (5 * e + 2).div_euclid(153);

        let day = e - (153 * m + 2).div_euclid(5) + 1;
        let month = m + 3 - 12 * m.div_euclid(10);
        let year = 100 * b + d - 4800 + m.div_euclid(10);

        Ok(Self::new_unchecked(
            year.to_i32()
                .ok_or(HdateError::invalid_date().with_enum(ErrorMessage::GregorianOutOfRange))?,
            month.to_u8().hdate_unwrap()?,
            day.to_u8().hdate_unwrap()?,
        ))
    }

    /// Returns the day of the week with Monday as 0 and Sunday as 6.
    #[inline]
    pub fn weekday(self) -> u8 {
        self.to_jdn().rem_euclid(7) as u8
    }

    /// Returns the day of the week in the Hebrew numbering, Sunday first.
    #[inline]
    pub fn hebrew_weekday(self) -> Weekday {
        Weekday::from_jdn(self.to_jdn())
    }

    /// Returns the date `days` days from this one.
    pub fn add_days(self, days: i64) -> HdateResult<Self> {
        let jdn = self
            .to_jdn()
            .checked_add(days)
            .ok_or(HdateError::invalid_date().with_enum(ErrorMessage::GregorianOutOfRange))?;
        Self::from_jdn(jdn)
    }

    /// Returns the number of days in this date's month.
    #[inline]
    pub fn days_in_month(self) -> u8 {
        days_in_month(self.year, self.month)
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

// ==== `GregorianDate` specific utility functions ====

#[inline]
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

#[inline]
fn is_valid_date(year: i32, month: u8, day: u8) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    (1..=days_in_month(year, month)).contains(&day)
}

// ==== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_julian_day_numbers() {
        let y2k = GregorianDate::try_new(2000, 1, 1).unwrap();
        assert_eq!(y2k.to_jdn(), 2_451_545);
        assert_eq!(GregorianDate::from_jdn(2_451_545).unwrap(), y2k);

        let date = GregorianDate::try_new(2025, 1, 5).unwrap();
        assert_eq!(date.to_jdn(), 2_460_681);

        let epoch = GregorianDate::try_new(1970, 1, 1).unwrap();
        assert_eq!(epoch.to_jdn(), 2_440_588);
    }

    #[test]
    fn jdn_round_trip() {
        for jdn in (1_700_000..2_600_000).step_by(97) {
            let date = GregorianDate::from_jdn(jdn).unwrap();
            assert_eq!(date.to_jdn(), jdn, "{date}");
        }
    }

    #[test]
    fn consecutive_days_are_contiguous() {
        let mut date = GregorianDate::try_new(1999, 12, 25).unwrap();
        for _ in 0..800 {
            let next = date.add_days(1).unwrap();
            assert_eq!(next.to_jdn() - date.to_jdn(), 1);
            assert!(next > date);
            date = next;
        }
        assert_eq!(date, GregorianDate::try_new(2002, 3, 4).unwrap());
    }

    #[test]
    fn weekdays() {
        // January 1st, 2000 was a Saturday.
        let y2k = GregorianDate::try_new(2000, 1, 1).unwrap();
        assert_eq!(y2k.weekday(), 5);
        assert_eq!(y2k.hebrew_weekday(), Weekday::Saturday);

        // April 18th, 2016 was a Monday.
        let monday = GregorianDate::try_new(2016, 4, 18).unwrap();
        assert_eq!(monday.weekday(), 0);
        assert_eq!(monday.hebrew_weekday(), Weekday::Monday);
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert!(GregorianDate::try_new(2023, 2, 29).is_err());
        assert!(GregorianDate::try_new(2024, 2, 29).is_ok());
        assert!(GregorianDate::try_new(1900, 2, 29).is_err());
        assert!(GregorianDate::try_new(2000, 2, 29).is_ok());
        assert!(GregorianDate::try_new(2024, 13, 1).is_err());
        assert!(GregorianDate::try_new(2024, 4, 31).is_err());
        assert!(GregorianDate::try_new(2024, 4, 0).is_err());
        assert!(GregorianDate::from_jdn(-1).is_err());
    }

    #[test]
    fn extreme_dates_are_errors() {
        let last = GregorianDate::try_new(i32::MAX, 12, 31).unwrap();
        assert_eq!(last.to_jdn(), MAX_JDN);
        assert_eq!(GregorianDate::from_jdn(MAX_JDN).unwrap(), last);
        assert!(GregorianDate::from_jdn(MAX_JDN + 1).is_err());
        assert!(GregorianDate::from_jdn(i64::MAX).is_err());
        assert!(last.add_days(1).is_err());
        assert!(last.add_days(i64::MAX).is_err());
        assert!(last.add_days(i64::MIN).is_err());
        assert_eq!(
            last.add_days(-1).unwrap(),
            GregorianDate::try_new(i32::MAX, 12, 30).unwrap()
        );
    }

    #[test]
    fn display() {
        let date = GregorianDate::try_new(2018, 11, 2).unwrap();
        assert_eq!(date.to_string(), "2018-11-02");
    }
}
