//! This module implements `HDateInfo`, a day known in both calendars
//! together with the region it is observed in.

use core::fmt;

use crate::{
    date::{HebrewDate, Weekday},
    error::ErrorKind,
    gregorian::GregorianDate,
    holidays::{DateFacts, Holiday, HolidayDatabase, HolidayType},
    parasha::{get_reading, Parasha},
    HdateResult,
};

/// `HDateInfo` bundles a Gregorian date, its Hebrew date and the diaspora
/// flag, and answers day-level questions about Shabbat and holidays.
#[derive(Debug, Clone, Copy)]
pub struct HDateInfo {
    gdate: GregorianDate,
    hdate: HebrewDate,
    database: HolidayDatabase,
}

// ==== Private API ====

impl HDateInfo {
    fn with_database(gdate: GregorianDate, database: HolidayDatabase) -> HdateResult<Self> {
        Ok(Self {
            gdate,
            hdate: HebrewDate::from_gdate(gdate)?,
            database,
        })
    }

    fn add_days(&self, days: i64) -> HdateResult<Self> {
        Self::with_database(self.gdate.add_days(days)?, self.database)
    }

    fn is_shabbat_or_yom_tov(&self) -> bool {
        self.is_shabbat() || self.is_yom_tov()
    }

    fn scan_limit(&self) -> u32 {
        self.database.scan_limit()
    }
}

// ==== Public API ====

impl HDateInfo {
    /// Creates a new `HDateInfo` from a Gregorian date.
    pub fn new(gdate: GregorianDate, diaspora: bool) -> HdateResult<Self> {
        Self::with_database(gdate, HolidayDatabase::new(diaspora))
    }

    /// Creates a new `HDateInfo` from an absolute Hebrew date.
    pub fn from_hebrew(hdate: HebrewDate, diaspora: bool) -> HdateResult<Self> {
        Ok(Self {
            gdate: hdate.to_gdate()?,
            hdate,
            database: HolidayDatabase::new(diaspora),
        })
    }

    /// Sets the number of days searched by the `upcoming_*`, `first_day`
    /// and `last_day` methods.
    #[inline]
    #[must_use]
    pub const fn with_scan_limit(mut self, scan_limit: u32) -> Self {
        self.database = self.database.with_scan_limit(scan_limit);
        self
    }

    /// Returns the Hebrew date.
    #[inline]
    pub const fn hdate(&self) -> HebrewDate {
        self.hdate
    }

    /// Returns the Gregorian date.
    #[inline]
    pub const fn gdate(&self) -> GregorianDate {
        self.gdate
    }

    /// Returns whether the day is observed in the diaspora.
    #[inline]
    pub const fn diaspora(&self) -> bool {
        self.database.diaspora()
    }

    /// Returns the day of the week.
    #[inline]
    pub fn dow(&self) -> Weekday {
        self.gdate.hebrew_weekday()
    }

    /// Returns whether the day is a Saturday.
    #[inline]
    pub fn is_shabbat(&self) -> bool {
        self.dow() == Weekday::Saturday
    }

    /// Returns the holidays of the day, in table order.
    pub fn holidays(&self) -> Vec<&'static Holiday> {
        self.database
            .lookup_facts(&DateFacts::from_parts(self.hdate, self.gdate))
    }

    /// Returns whether any holiday falls on the day.
    pub fn is_holiday(&self) -> bool {
        !self.holidays().is_empty()
    }

    /// Returns whether the day is a Yom Tov.
    pub fn is_yom_tov(&self) -> bool {
        self.holidays()
            .iter()
            .any(|holiday| holiday.kind() == HolidayType::YomTov)
    }

    /// Returns the following day.
    pub fn next_day(&self) -> HdateResult<Self> {
        self.add_days(1)
    }

    /// Returns the preceding day.
    pub fn previous_day(&self) -> HdateResult<Self> {
        self.add_days(-1)
    }

    /// Returns this day if it is Shabbat, or the following Saturday.
    pub fn upcoming_shabbat(&self) -> HdateResult<Self> {
        self.add_days(self.dow().days_until_shabbat())
    }

    /// Returns this day if it is Yom Tov, or the next Yom Tov.
    pub fn upcoming_yom_tov(&self) -> HdateResult<Self> {
        if self.is_yom_tov() {
            return Ok(*self);
        }
        let hdate = self
            .database
            .lookup_next_holiday(&self.hdate, &[HolidayType::YomTov])?;
        Ok(Self {
            gdate: hdate.to_gdate()?,
            hdate,
            database: self.database,
        })
    }

    /// Returns this day if it is Shabbat or Yom Tov, or the nearest of the
    /// upcoming Shabbat and the upcoming Yom Tov.
    pub fn upcoming_shabbat_or_yom_tov(&self) -> HdateResult<Self> {
        if self.is_shabbat_or_yom_tov() {
            return Ok(*self);
        }
        let shabbat = self.upcoming_shabbat()?;
        match self.upcoming_yom_tov() {
            Ok(yom_tov) if yom_tov.gdate < shabbat.gdate => Ok(yom_tov),
            Ok(_) => Ok(shabbat),
            // A scan window shorter than the distance to the next Yom Tov.
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(shabbat),
            Err(err) => Err(err),
        }
    }

    /// Returns the first day of the run of Shabbat and Yom Tov days this day
    /// belongs to, e.g. the first day of a three-day holiday.
    ///
    /// A day that is neither Shabbat nor Yom Tov is returned as is.
    pub fn first_day(&self) -> HdateResult<Self> {
        self.walk_run(-1)
    }

    /// Returns the last day of the run of Shabbat and Yom Tov days this day
    /// belongs to.
    ///
    /// A day that is neither Shabbat nor Yom Tov is returned as is.
    pub fn last_day(&self) -> HdateResult<Self> {
        self.walk_run(1)
    }

    /// Returns the parasha read on the Shabbat of this day's week.
    pub fn parasha(&self) -> HdateResult<Parasha> {
        get_reading(&self.hdate, self.diaspora())
    }

    fn walk_run(&self, step: i64) -> HdateResult<Self> {
        let mut current = *self;
        if !current.is_shabbat_or_yom_tov() {
            return Ok(current);
        }
        for _ in 0..self.scan_limit() {
            let neighbour = current.add_days(step)?;
            if !neighbour.is_shabbat_or_yom_tov() {
                break;
            }
            current = neighbour;
        }
        Ok(current)
    }
}

impl fmt::Display for HDateInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {} {})",
            self.gdate,
            self.hdate.day(),
            self.hdate.month().name(),
            self.hdate.year()
        )
    }
}

// ==== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::month::Month;

    fn info(year: i32, month: u8, day: u8, diaspora: bool) -> HDateInfo {
        HDateInfo::new(GregorianDate::try_new(year, month, day).unwrap(), diaspora).unwrap()
    }

    fn gdate(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::try_new(year, month, day).unwrap()
    }

    #[test]
    fn basic_facts() {
        let day = info(2023, 12, 8, false);
        assert_eq!(
            day.hdate(),
            HebrewDate::try_new(5784, Month::Kislev, 25).unwrap()
        );
        assert_eq!(day.dow(), Weekday::Friday);
        assert!(!day.is_shabbat());
        assert!(day.is_holiday());
        assert!(!day.is_yom_tov());
        assert_eq!(day.holidays()[0].name(), "chanukah");
        assert!(!day.diaspora());
        assert_eq!(day.to_string(), "2023-12-08 (25 kislev 5784)");

        let next = day.next_day().unwrap();
        assert!(next.is_shabbat());
        assert_eq!(next.previous_day().unwrap().gdate(), day.gdate());
    }

    #[test]
    fn from_hebrew() {
        let hdate = HebrewDate::try_new(5785, Month::Tishrei, 1).unwrap();
        let day = HDateInfo::from_hebrew(hdate, true).unwrap();
        assert_eq!(day.gdate(), gdate(2024, 10, 3));
        assert!(day.is_yom_tov());
        assert!(day.diaspora());

        let relative = HebrewDate::relative(Month::Tishrei, 1).unwrap();
        let err = HDateInfo::from_hebrew(relative, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn upcoming_shabbat() {
        let day = info(2025, 1, 5, false);
        assert_eq!(day.upcoming_shabbat().unwrap().gdate(), gdate(2025, 1, 11));

        let shabbat = info(2025, 1, 11, false);
        assert_eq!(shabbat.upcoming_shabbat().unwrap().gdate(), gdate(2025, 1, 11));
    }

    #[test]
    fn upcoming_yom_tov() {
        // From Tzom Gedaliah to Yom Kippur.
        let day = info(2024, 10, 6, false);
        assert_eq!(day.upcoming_yom_tov().unwrap().gdate(), gdate(2024, 10, 12));

        let yom_kippur = info(2024, 10, 12, false);
        assert_eq!(
            yom_kippur.upcoming_yom_tov().unwrap().gdate(),
            gdate(2024, 10, 12)
        );

        // Sukkot on Thursday comes before Shabbat.
        let day = info(2024, 10, 13, false);
        assert_eq!(
            day.upcoming_shabbat_or_yom_tov().unwrap().gdate(),
            gdate(2024, 10, 17)
        );
        let day = info(2024, 10, 20, false);
        assert_eq!(
            day.upcoming_shabbat_or_yom_tov().unwrap().gdate(),
            gdate(2024, 10, 24)
        );
        let day = info(2025, 1, 5, false);
        assert_eq!(
            day.upcoming_shabbat_or_yom_tov().unwrap().gdate(),
            gdate(2025, 1, 11)
        );
    }

    #[test]
    fn three_day_runs() {
        // Rosh Hashana 5785 fell on Thursday and Friday.
        for diaspora in [false, true] {
            let rosh_hashana = info(2024, 10, 3, diaspora);
            assert_eq!(rosh_hashana.last_day().unwrap().gdate(), gdate(2024, 10, 5));
            let shabbat = info(2024, 10, 5, diaspora);
            assert_eq!(shabbat.first_day().unwrap().gdate(), gdate(2024, 10, 3));
        }

        // Sukkot 5785: the second day is only Yom Tov in the diaspora.
        let sukkot = info(2024, 10, 17, true);
        assert_eq!(sukkot.last_day().unwrap().gdate(), gdate(2024, 10, 19));
        let sukkot = info(2024, 10, 17, false);
        assert_eq!(sukkot.last_day().unwrap().gdate(), gdate(2024, 10, 17));

        // Erev Pesach 5785 was a Shabbat.
        let shabbat = info(2025, 4, 12, false);
        assert_eq!(shabbat.last_day().unwrap().gdate(), gdate(2025, 4, 13));
        let shabbat = info(2025, 4, 12, true);
        assert_eq!(shabbat.last_day().unwrap().gdate(), gdate(2025, 4, 14));
        let pesach = info(2025, 4, 13, true);
        assert_eq!(pesach.first_day().unwrap().gdate(), gdate(2025, 4, 12));
    }

    #[test]
    fn weekdays_are_their_own_run() {
        let day = info(2024, 10, 6, false);
        assert_eq!(day.first_day().unwrap().gdate(), day.gdate());
        assert_eq!(day.last_day().unwrap().gdate(), day.gdate());
    }

    #[test]
    fn parasha() {
        assert_eq!(info(2018, 11, 3, false).parasha().unwrap(), Parasha::ChayeiSara);
        assert_eq!(info(2022, 4, 23, true).parasha().unwrap(), Parasha::None);
    }

    #[test]
    fn scan_limit_applies_to_upcoming_yom_tov() {
        let day = info(2024, 10, 13, false).with_scan_limit(2);
        let err = day.upcoming_yom_tov().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            day.upcoming_shabbat_or_yom_tov().unwrap().gdate(),
            gdate(2024, 10, 19)
        );
    }
}
