//! This module implements `HebrewDate` and its calendar arithmetic.

use core::cmp::Ordering;

use crate::{
    error::{ErrorMessage, HdateError},
    gregorian::GregorianDate,
    month::{ComparisonMode, Month, MonthOrder},
    utils, HdateResult, HdateUnwrap,
};

/// A day of the week, numbered from Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Returns the weekday of a Julian Day Number.
    pub const fn from_jdn(jdn: i64) -> Self {
        Self::ALL[((jdn.rem_euclid(7) + 1) % 7) as usize]
    }

    /// Returns the weekday number, Sunday being 1 and Saturday 7.
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the number of days until the next Saturday, 0 on a Saturday.
    #[inline]
    pub const fn days_until_shabbat(self) -> i64 {
        7 - self as i64
    }
}

/// The length class of a Hebrew year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearLength {
    /// 353 or 383 days: both Marcheshvan and Kislev have 29 days.
    Deficient,
    /// 354 or 384 days.
    Regular,
    /// 355 or 385 days: both Marcheshvan and Kislev have 30 days.
    Complete,
}

impl YearLength {
    /// Returns the length class of `year`.
    pub fn of(year: i32) -> Self {
        match utils::year_size(year) % 10 {
            3 => Self::Deficient,
            5 => Self::Complete,
            _ => Self::Regular,
        }
    }
}

/// A Hebrew calendar date.
///
/// A `HebrewDate` with a year of 0 is a relative date: it only carries a
/// month and a day, e.g. "15 Shvat of any year". Relative dates compare
/// against other dates by month and day alone, treating all Adar months as
/// equal. As a consequence equality is not transitive across relative and
/// absolute dates, so `HebrewDate` does not implement `Eq` or `Hash`.
#[derive(Debug, Clone, Copy)]
pub struct HebrewDate {
    year: i32,
    month: Month,
    day: u8,
}

// ==== Private API ====

impl HebrewDate {
    #[inline]
    pub(crate) const fn new_unchecked(year: i32, month: Month, day: u8) -> Self {
        Self { year, month, day }
    }

    fn require_absolute(&self) -> HdateResult<()> {
        if self.is_relative() {
            return Err(HdateError::type_mismatch().with_enum(ErrorMessage::RelativeDateNeedsYear));
        }
        Ok(())
    }
}

// ==== Public API ====

impl HebrewDate {
    /// Creates a new validated `HebrewDate`.
    ///
    /// A year of 0 creates a relative date, for which the month is not
    /// checked against the year.
    pub fn try_new(year: i32, month: Month, day: u8) -> HdateResult<Self> {
        if year < 0 {
            return Err(HdateError::invalid_date().with_enum(ErrorMessage::YearOutOfRange));
        }
        if year != 0 && !Month::in_year(year).contains(&month) {
            return Err(HdateError::invalid_month().with_enum(ErrorMessage::MonthNotInYear));
        }
        if !(1..=month.days(year)).contains(&day) {
            return Err(HdateError::invalid_date().with_enum(ErrorMessage::DayOutOfRange));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Creates a new relative `HebrewDate`.
    pub fn relative(month: Month, day: u8) -> HdateResult<Self> {
        Self::try_new(0, month, day)
    }

    /// Returns the year, 0 for a relative date.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of the month.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns whether this date has no year.
    #[inline]
    #[must_use]
    pub const fn is_relative(&self) -> bool {
        self.year == 0
    }

    /// Returns a copy of this date with the day replaced.
    pub fn with_day(&self, day: u8) -> HdateResult<Self> {
        Self::try_new(self.year, self.month, day)
    }

    /// Returns a copy of this date with the month replaced.
    pub fn with_month(&self, month: Month) -> HdateResult<Self> {
        Self::try_new(self.year, month, self.day)
    }

    /// Returns a copy of this date with the year replaced.
    pub fn with_year(&self, year: i32) -> HdateResult<Self> {
        Self::try_new(year, self.month, self.day)
    }

    /// Returns the Julian Day Number of this date.
    pub fn to_jdn(&self) -> HdateResult<i64> {
        self.require_absolute()?;
        let elapsed: i64 = Month::in_year(self.year)
            .iter()
            .take_while(|month| **month != self.month)
            .map(|month| i64::from(month.days(self.year)))
            .sum();
        Ok(utils::rosh_hashana_jdn(self.year) + elapsed + i64::from(self.day) - 1)
    }

    /// Creates a `HebrewDate` from a Julian Day Number.
    pub fn from_jdn(jdn: i64) -> HdateResult<Self> {
        let gregorian = GregorianDate::from_jdn(jdn)?;
        let year_out_of_range = HdateError::invalid_date().with_enum(ErrorMessage::YearOutOfRange);
        let mut year = gregorian.year.checked_add(3760).ok_or(year_out_of_range)?;
        while utils::next_rosh_hashana_jdn(year) <= jdn {
            year = year.checked_add(1).ok_or(year_out_of_range)?;
        }
        while utils::rosh_hashana_jdn(year) > jdn {
            year -= 1;
        }
        if year < 1 {
            return Err(year_out_of_range);
        }

        let mut remaining = jdn - utils::rosh_hashana_jdn(year);
        for month in Month::in_year(year) {
            let days = i64::from(month.days(year));
            if remaining < days {
                let day = u8::try_from(remaining + 1).ok().hdate_unwrap()?;
                return Ok(Self::new_unchecked(year, *month, day));
            }
            remaining -= days;
        }
        Err(HdateError::assert())
    }

    /// Creates a `HebrewDate` from a Gregorian date.
    pub fn from_gdate(date: GregorianDate) -> HdateResult<Self> {
        Self::from_jdn(date.to_jdn())
    }

    /// Returns the Gregorian date of this date.
    pub fn to_gdate(&self) -> HdateResult<GregorianDate> {
        GregorianDate::from_jdn(self.to_jdn()?)
    }

    /// Returns the date `days` days after this one, or before it when negative.
    pub fn add_days(&self, days: i64) -> HdateResult<Self> {
        let jdn = self
            .to_jdn()?
            .checked_add(days)
            .ok_or(HdateError::invalid_date().with_enum(ErrorMessage::YearOutOfRange))?;
        Self::from_jdn(jdn)
    }

    /// Returns the number of days from `other` to this date.
    ///
    /// When exactly one of the dates is relative, it is placed in the year
    /// of the other one.
    pub fn days_since(&self, other: &Self) -> HdateResult<i64> {
        let (this, other) = match (self.is_relative(), other.is_relative()) {
            (true, true) => {
                return Err(HdateError::type_mismatch().with_enum(ErrorMessage::BothDatesRelative))
            }
            (true, false) => (self.with_year(other.year)?, *other),
            (false, true) => (*self, other.with_year(self.year)?),
            (false, false) => (*self, *other),
        };
        Ok(this.to_jdn()? - other.to_jdn()?)
    }

    /// Returns the day of the week.
    pub fn weekday(&self) -> HdateResult<Weekday> {
        Ok(Weekday::from_jdn(self.to_jdn()?))
    }

    /// Returns the number of days in `year`.
    pub fn year_size(year: i32) -> i32 {
        utils::year_size(year)
    }

    /// Returns whether this date's year has thirteen months.
    #[inline]
    pub fn is_leap_year(&self) -> bool {
        utils::is_leap_year(self.year)
    }

    /// Returns the number of days of `month` in this date's year.
    #[inline]
    pub fn days_in_month(&self, month: Month) -> u8 {
        month.days(self.year)
    }

    /// Returns whether Marcheshvan has 30 days in this date's year.
    pub fn long_cheshvan(&self) -> bool {
        !self.is_relative() && self.year_length() == YearLength::Complete
    }

    /// Returns whether Kislev has 29 days in this date's year.
    pub fn short_kislev(&self) -> bool {
        !self.is_relative() && self.year_length() == YearLength::Deficient
    }

    /// Returns the length class of this date's year.
    pub fn year_length(&self) -> YearLength {
        YearLength::of(self.year)
    }

    fn compare_month_day(&self, other: &Self, mode: ComparisonMode) -> Ordering {
        self.month
            .compare(other.month, MonthOrder::Calendar, mode)
            .then(self.day.cmp(&other.day))
    }
}

impl PartialEq for HebrewDate {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.is_relative() || other.is_relative() {
            return Some(self.compare_month_day(other, ComparisonMode::ADAR_IS_ANY));
        }
        Some(
            self.year
                .cmp(&other.year)
                .then(self.compare_month_day(other, ComparisonMode::STRICT)),
        )
    }
}

// ==== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn hdate(year: i32, month: Month, day: u8) -> HebrewDate {
        HebrewDate::try_new(year, month, day).unwrap()
    }

    fn gdate(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn known_dates() {
        let cases = [
            (gdate(2025, 1, 5), hdate(5785, Month::Tevet, 5), Weekday::Sunday),
            (gdate(2024, 10, 3), hdate(5785, Month::Tishrei, 1), Weekday::Thursday),
            (gdate(2023, 12, 8), hdate(5784, Month::Kislev, 25), Weekday::Friday),
            (gdate(2016, 4, 18), hdate(5776, Month::Nisan, 10), Weekday::Monday),
            (gdate(2000, 1, 1), hdate(5760, Month::Tevet, 23), Weekday::Saturday),
        ];
        for (g, h, weekday) in cases {
            assert_eq!(HebrewDate::from_gdate(g).unwrap(), h, "{g}");
            assert_eq!(h.to_gdate().unwrap(), g);
            assert_eq!(h.weekday().unwrap(), weekday);
            assert_eq!(g.hebrew_weekday(), weekday);
        }
        assert_eq!(hdate(5785, Month::Tevet, 5).to_jdn().unwrap(), 2_460_681);
    }

    #[test]
    fn jdn_round_trip() {
        let first = utils::rosh_hashana_jdn(crate::MIN_TESTED_YEAR);
        let last = utils::next_rosh_hashana_jdn(crate::MAX_TESTED_YEAR);
        for jdn in (first..last).step_by(13) {
            let date = HebrewDate::from_jdn(jdn).unwrap();
            assert_eq!(date.to_jdn().unwrap(), jdn, "{date:?}");
        }
    }

    #[test]
    fn every_day_of_sampled_years_round_trips() {
        for year in (crate::MIN_TESTED_YEAR..=crate::MAX_TESTED_YEAR).step_by(37) {
            let mut expected = utils::rosh_hashana_jdn(year);
            for month in Month::in_year(year) {
                for day in 1..=month.days(year) {
                    let date = hdate(year, *month, day);
                    let jdn = date.to_jdn().unwrap();
                    assert_eq!(jdn, expected, "{date:?}");
                    assert_eq!(HebrewDate::from_jdn(jdn).unwrap(), date);
                    expected += 1;
                }
            }
            assert_eq!(expected, utils::next_rosh_hashana_jdn(year));
        }
    }

    #[test]
    fn gregorian_round_trip() {
        let mut g = gdate(1990, 1, 1);
        while g.year < 2050 {
            let h = HebrewDate::from_gdate(g).unwrap();
            assert_eq!(h.to_gdate().unwrap(), g);
            g = g.add_days(11).unwrap();
        }
    }

    #[test]
    fn addition_inverse() {
        let dates = [
            hdate(5785, Month::Tevet, 5),
            hdate(5784, Month::AdarI, 30),
            hdate(3762, Month::Tishrei, 1),
            hdate(5999, Month::Elul, 29),
        ];
        for date in dates {
            for n in -500..=500 {
                let moved = date.add_days(n).unwrap();
                assert_eq!(moved.days_since(&date).unwrap(), n, "{date:?} + {n}");
            }
        }
    }

    #[test]
    fn add_days_crosses_months_and_years() {
        assert_eq!(
            hdate(5784, Month::AdarI, 30).add_days(1).unwrap(),
            hdate(5784, Month::AdarII, 1)
        );
        assert_eq!(
            hdate(5785, Month::Shvat, 30).add_days(1).unwrap(),
            hdate(5785, Month::Adar, 1)
        );
        assert_eq!(
            hdate(5784, Month::Elul, 29).add_days(1).unwrap(),
            hdate(5785, Month::Tishrei, 1)
        );
        assert_eq!(
            hdate(5785, Month::Tishrei, 1).add_days(-1).unwrap(),
            hdate(5784, Month::Elul, 29)
        );
    }

    #[test]
    fn construction_errors() {
        let err = HebrewDate::try_new(5785, Month::AdarI, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMonth);
        let err = HebrewDate::try_new(5784, Month::Adar, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMonth);

        let err = HebrewDate::try_new(5785, Month::Tevet, 30).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        let err = HebrewDate::try_new(5781, Month::Kislev, 30).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert!(HebrewDate::try_new(5785, Month::Kislev, 30).is_ok());
        assert!(HebrewDate::try_new(5785, Month::Tishrei, 0).is_err());
        assert!(HebrewDate::try_new(-1, Month::Tishrei, 1).is_err());

        assert!(HebrewDate::relative(Month::Marcheshvan, 30).is_ok());
        assert!(HebrewDate::relative(Month::Adar, 30).is_err());

        assert!(HebrewDate::from_jdn(347_997).is_err());
        assert_eq!(
            HebrewDate::from_jdn(347_998).unwrap(),
            hdate(1, Month::Tishrei, 1)
        );
    }

    #[test]
    fn extreme_years_are_errors() {
        let last = GregorianDate::try_new(i32::MAX, 1, 1).unwrap();
        let err = HebrewDate::from_gdate(last).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDate);
        assert!(HebrewDate::from_jdn(i64::MAX).is_err());

        let date = HebrewDate::try_new(i32::MAX, Month::Marcheshvan, 1).unwrap();
        assert!(date.to_jdn().is_ok());
        assert!(date.weekday().is_ok());
        assert!(date.to_gdate().is_err());
        assert!(date.add_days(1).is_err());

        let date = hdate(5785, Month::Tishrei, 1);
        assert_eq!(date.add_days(i64::MAX).unwrap_err().kind(), ErrorKind::InvalidDate);
        assert!(date.add_days(i64::MIN).is_err());
        assert!(date.with_year(i32::MAX).is_ok());
        assert!(date.days_since(&date.with_year(i32::MAX).unwrap()).is_ok());
    }

    #[test]
    fn replacement() {
        let date = hdate(5784, Month::AdarI, 14);
        assert_eq!(date.with_day(30).unwrap(), hdate(5784, Month::AdarI, 30));
        assert_eq!(date.with_month(Month::AdarII).unwrap().month(), Month::AdarII);
        assert!(date.with_year(5785).is_err());
        assert!(hdate(5785, Month::Tevet, 29).with_day(30).is_err());
    }

    #[test]
    fn relative_dates() {
        let purim = HebrewDate::relative(Month::Adar, 14).unwrap();
        assert!(purim.is_relative());
        assert_eq!(purim, hdate(5784, Month::AdarII, 14));
        assert_eq!(purim, hdate(5784, Month::AdarI, 14));
        assert_eq!(purim, hdate(5785, Month::Adar, 14));
        assert_ne!(purim, hdate(5785, Month::Adar, 15));

        let tishrei = HebrewDate::relative(Month::Tishrei, 1).unwrap();
        let nisan = HebrewDate::relative(Month::Nisan, 1).unwrap();
        assert!(tishrei < nisan);
        assert!(tishrei < hdate(5000, Month::Tishrei, 2));

        let err = purim.add_days(1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(purim.to_jdn().unwrap_err().kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn absolute_comparison() {
        assert!(hdate(5784, Month::AdarI, 30) < hdate(5784, Month::AdarII, 1));
        assert!(hdate(5784, Month::Elul, 29) < hdate(5785, Month::Tishrei, 1));
        assert!(hdate(5785, Month::Tishrei, 1) < hdate(5785, Month::Nisan, 1));
        assert_ne!(hdate(5784, Month::AdarI, 14), hdate(5784, Month::AdarII, 14));
    }

    #[test]
    fn days_since_anchors_relative_dates() {
        let yom_kippur = HebrewDate::relative(Month::Tishrei, 10).unwrap();
        let rosh_hashana = hdate(5785, Month::Tishrei, 1);
        assert_eq!(yom_kippur.days_since(&rosh_hashana).unwrap(), 9);
        assert_eq!(rosh_hashana.days_since(&yom_kippur).unwrap(), -9);

        let err = yom_kippur.days_since(&yom_kippur).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);

        // Adar does not exist in the leap year 5784.
        let adar = HebrewDate::relative(Month::Adar, 1).unwrap();
        let err = adar.days_since(&hdate(5784, Month::Tishrei, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMonth);
    }

    #[test]
    fn year_properties() {
        assert_eq!(YearLength::of(5785), YearLength::Complete);
        assert_eq!(YearLength::of(5781), YearLength::Deficient);
        assert_eq!(YearLength::of(5786), YearLength::Regular);
        assert_eq!(HebrewDate::year_size(5784), 383);

        let date = hdate(5785, Month::Tevet, 5);
        assert!(date.long_cheshvan());
        assert!(!date.short_kislev());
        assert!(!date.is_leap_year());
        assert_eq!(date.days_in_month(Month::Marcheshvan), 30);

        let date = hdate(5784, Month::Tevet, 5);
        assert!(date.short_kislev());
        assert!(date.is_leap_year());
        assert_eq!(date.days_in_month(Month::Kislev), 29);
    }

    #[test]
    fn weekday_numbers() {
        assert_eq!(Weekday::from_jdn(2_460_681), Weekday::Sunday);
        assert_eq!(Weekday::from_jdn(-1), Weekday::Sunday);
        assert_eq!(Weekday::from_jdn(i64::MAX), Weekday::from_jdn(i64::MAX % 7));
        assert_eq!(Weekday::Saturday.number(), 7);
        assert_eq!(Weekday::Saturday.days_until_shabbat(), 0);
        assert_eq!(Weekday::Sunday.days_until_shabbat(), 6);
    }
}
