//! Utility date equations for the Hebrew calendar
//!
//! Time is measured in "parts" (chalakim): 1080 parts to the hour. The
//! calculation starts from the molad of Tishrei 3744 and counts lunar months
//! forward, applying the four postponement rules (dechiyot) to land on the
//! day of Rosh Hashana.

pub(crate) const PARTS_IN_HOUR: i64 = 1080;
pub(crate) const PARTS_IN_DAY: i64 = 24 * PARTS_IN_HOUR;
pub(crate) const PARTS_IN_WEEK: i64 = 7 * PARTS_IN_DAY;
/// A mean lunar month past its 28 whole days: 1 day 12 hours 793 parts.
pub(crate) const PARTS_IN_MONTH: i64 = PARTS_IN_DAY + chalakim(12, 793);

/// Offset between `days_from_3744` plus the day of the year and the Julian Day Number.
pub(crate) const JDN_OFFSET: i64 = 1_715_118;

/// Return the number of total parts.
pub(crate) const fn chalakim(hours: i64, parts: i64) -> i64 {
    hours * PARTS_IN_HOUR + parts
}

/// Returns the number of days from the molad of year 3744 to Rosh Hashana
/// of `hebrew_year`.
///
/// The year is widened to `i64`, so the year after `i32::MAX` is valid input.
pub(crate) fn days_from_3744(hebrew_year: i64) -> i64 {
    let years_from_3744 = hebrew_year - 3744;
    // Molad of 3744 shifted by 6 hours so that the day starts at midnight.
    let molad_3744 = chalakim(1 + 6, 779);

    // Number of leap months and position within the 19 year cycle.
    let leap_months = (years_from_3744 * 7 + 1).div_euclid(19);
    let leap_left = (years_from_3744 * 7 + 1).rem_euclid(19);
    let months = years_from_3744 * 12 + leap_months;

    let parts = months * PARTS_IN_MONTH + molad_3744;
    // 28 days a month is a whole number of weeks, so only the remainder moves the weekday.
    let mut days = months * 28 + parts.div_euclid(PARTS_IN_DAY) - 2;

    let parts_left_in_week = parts.rem_euclid(PARTS_IN_WEEK);
    let parts_left_in_day = parts.rem_euclid(PARTS_IN_DAY);
    let mut week_day = parts_left_in_week.div_euclid(PARTS_IN_DAY);

    // GaTaRaD: Tuesday, 9h 204p or later, in a common year.
    let molad_gatarad =
        leap_left < 12 && week_day == 3 && parts_left_in_day >= chalakim(9 + 6, 204);
    // BeTUTaKPaT: Monday, 15h 589p or later, following a leap year.
    let molad_betutakpat =
        leap_left < 7 && week_day == 2 && parts_left_in_day >= chalakim(15 + 6, 589);

    if molad_gatarad || molad_betutakpat {
        days += 1;
        week_day += 1;
    }

    // Lo ADU Rosh
    if matches!(week_day, 1 | 4 | 6) {
        days += 1;
    }

    days
}

/// Returns the number of days in `hebrew_year`.
pub(crate) fn year_size(hebrew_year: i32) -> i32 {
    let year = i64::from(hebrew_year);
    (days_from_3744(year + 1) - days_from_3744(year)) as i32
}

/// Returns whether the year has thirteen months.
pub(crate) const fn is_leap_year(hebrew_year: i32) -> bool {
    (7 * hebrew_year as i64 + 1).rem_euclid(19) < 7
}

/// Returns the Julian Day Number of 1 Tishrei of `hebrew_year`.
pub(crate) fn rosh_hashana_jdn(hebrew_year: i32) -> i64 {
    days_from_3744(i64::from(hebrew_year)) + 1 + JDN_OFFSET
}

/// Returns the Julian Day Number of 1 Tishrei of the year after `hebrew_year`.
pub(crate) fn next_rosh_hashana_jdn(hebrew_year: i32) -> i64 {
    days_from_3744(i64::from(hebrew_year) + 1) + 1 + JDN_OFFSET
}

// ==== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years_follow_the_metonic_cycle() {
        let leap_positions = [0, 3, 6, 8, 11, 14, 17];
        for year in 5700..5800 {
            assert_eq!(
                is_leap_year(year),
                leap_positions.contains(&(year % 19)),
                "year {year}"
            );
        }
    }

    #[test]
    fn known_year_sizes() {
        assert_eq!(year_size(5780), 355);
        assert_eq!(year_size(5781), 353);
        assert_eq!(year_size(5782), 384);
        assert_eq!(year_size(5783), 355);
        assert_eq!(year_size(5784), 383);
        assert_eq!(year_size(5785), 355);
        assert_eq!(year_size(5786), 354);
        assert_eq!(year_size(5787), 385);
    }

    #[test]
    fn year_sizes_are_legal() {
        for year in crate::MIN_TESTED_YEAR..=crate::MAX_TESTED_YEAR {
            let size = year_size(year);
            if is_leap_year(year) {
                assert!((383..=385).contains(&size), "year {year}: {size}");
            } else {
                assert!((353..=355).contains(&size), "year {year}: {size}");
            }
        }
    }

    #[test]
    fn rosh_hashana_never_on_sunday_wednesday_friday() {
        for year in crate::MIN_TESTED_YEAR..=crate::MAX_TESTED_YEAR {
            // (jdn + 1) % 7: 0 = Sunday, 3 = Wednesday, 5 = Friday
            let weekday = (rosh_hashana_jdn(year) + 1).rem_euclid(7);
            assert!(!matches!(weekday, 0 | 3 | 5), "year {year}");
        }
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        let size = year_size(i32::MAX);
        assert!((353..=385).contains(&size), "{size}");
        assert_eq!(
            next_rosh_hashana_jdn(i32::MAX) - rosh_hashana_jdn(i32::MAX),
            i64::from(size)
        );
        assert_eq!(next_rosh_hashana_jdn(5784), rosh_hashana_jdn(5785));
    }

    #[test]
    fn rosh_hashana_jdn_anchors() {
        // 1 Tishrei 5785 was October 3rd, 2024.
        assert_eq!(rosh_hashana_jdn(5785), 2_460_587);
        assert_eq!(rosh_hashana_jdn(3762), 1_721_674);
    }
}
