//! This module implements `Month` and the month ordering conventions.

use core::{cmp::Ordering, str::FromStr};

use bitflags::bitflags;
use tinystr::{tinystr, TinyAsciiStr};

use crate::{
    error::{ErrorMessage, HdateError},
    utils, HdateResult,
};

/// The months of the Hebrew calendar, numbered in calendar order.
///
/// `Adar` only exists in common years, while `AdarI` and `AdarII` only exist
/// in leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Month {
    Tishrei = 1,
    Marcheshvan,
    Kislev,
    Tevet,
    Shvat,
    Adar,
    AdarI,
    AdarII,
    Nisan,
    Iyyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

/// The ordering convention used to position a month within the year.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MonthOrder {
    /// Tishrei first.
    #[default]
    Calendar,
    /// Nisan first, with Adar and Adar I sharing a position.
    Biblical,
}

bitflags! {
    /// `ComparisonMode` selects which Adar months compare as equal.
    ///
    /// Combining modes with `|` unions their sets of equal months.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComparisonMode: u8 {
        /// No month is equal to another month.
        const STRICT = 0;
        /// Adar is equal to Adar I.
        const ADAR_IS_ADAR_I = 0b01;
        /// Adar is equal to Adar II.
        const ADAR_IS_ADAR_II = 0b10;
        /// Adar, Adar I and Adar II are all equal.
        const ADAR_IS_ANY = Self::ADAR_IS_ADAR_I.bits() | Self::ADAR_IS_ADAR_II.bits();
    }
}

impl Default for ComparisonMode {
    fn default() -> Self {
        Self::STRICT
    }
}

impl ComparisonMode {
    /// Returns the months that compare as equal under this mode.
    pub const fn equal_months(self) -> &'static [Month] {
        match (
            self.contains(Self::ADAR_IS_ADAR_I),
            self.contains(Self::ADAR_IS_ADAR_II),
        ) {
            (false, false) => &[],
            (true, false) => &[Month::Adar, Month::AdarI],
            (false, true) => &[Month::Adar, Month::AdarII],
            (true, true) => &[Month::Adar, Month::AdarI, Month::AdarII],
        }
    }

    fn equates(self, month: Month, other: Month) -> bool {
        let months = self.equal_months();
        months.contains(&month) && months.contains(&other)
    }
}

// MonthCode constants.
const MONTH_ONE: TinyAsciiStr<4> = tinystr!(4, "M01");
const MONTH_TWO: TinyAsciiStr<4> = tinystr!(4, "M02");
const MONTH_THREE: TinyAsciiStr<4> = tinystr!(4, "M03");
const MONTH_FOUR: TinyAsciiStr<4> = tinystr!(4, "M04");
const MONTH_FIVE: TinyAsciiStr<4> = tinystr!(4, "M05");
const MONTH_FIVE_LEAP: TinyAsciiStr<4> = tinystr!(4, "M05L");
const MONTH_SIX: TinyAsciiStr<4> = tinystr!(4, "M06");
const MONTH_SEVEN: TinyAsciiStr<4> = tinystr!(4, "M07");
const MONTH_EIGHT: TinyAsciiStr<4> = tinystr!(4, "M08");
const MONTH_NINE: TinyAsciiStr<4> = tinystr!(4, "M09");
const MONTH_TEN: TinyAsciiStr<4> = tinystr!(4, "M10");
const MONTH_ELEVEN: TinyAsciiStr<4> = tinystr!(4, "M11");
const MONTH_TWELVE: TinyAsciiStr<4> = tinystr!(4, "M12");

const COMMON_YEAR: [Month; 12] = [
    Month::Tishrei,
    Month::Marcheshvan,
    Month::Kislev,
    Month::Tevet,
    Month::Shvat,
    Month::Adar,
    Month::Nisan,
    Month::Iyyar,
    Month::Sivan,
    Month::Tammuz,
    Month::Av,
    Month::Elul,
];

const LEAP_YEAR: [Month; 13] = [
    Month::Tishrei,
    Month::Marcheshvan,
    Month::Kislev,
    Month::Tevet,
    Month::Shvat,
    Month::AdarI,
    Month::AdarII,
    Month::Nisan,
    Month::Iyyar,
    Month::Sivan,
    Month::Tammuz,
    Month::Av,
    Month::Elul,
];

impl Month {
    /// Every month, in calendar order.
    pub const ALL: [Month; 14] = [
        Month::Tishrei,
        Month::Marcheshvan,
        Month::Kislev,
        Month::Tevet,
        Month::Shvat,
        Month::Adar,
        Month::AdarI,
        Month::AdarII,
        Month::Nisan,
        Month::Iyyar,
        Month::Sivan,
        Month::Tammuz,
        Month::Av,
        Month::Elul,
    ];

    /// Returns the months of `year` in calendar order.
    pub const fn in_year(year: i32) -> &'static [Month] {
        if utils::is_leap_year(year) {
            &LEAP_YEAR
        } else {
            &COMMON_YEAR
        }
    }

    /// Returns the position of this month in the given order.
    pub const fn index(self, order: MonthOrder) -> u8 {
        match order {
            MonthOrder::Calendar => self as u8,
            MonthOrder::Biblical => match self {
                Self::Tishrei => 7,
                Self::Marcheshvan => 8,
                Self::Kislev => 9,
                Self::Tevet => 10,
                Self::Shvat => 11,
                Self::Adar | Self::AdarI => 12,
                Self::AdarII => 13,
                Self::Nisan => 1,
                Self::Iyyar => 2,
                Self::Sivan => 3,
                Self::Tammuz => 4,
                Self::Av => 5,
                Self::Elul => 6,
            },
        }
    }

    /// Compares two months under the given order and comparison mode.
    pub fn compare(self, other: Month, order: MonthOrder, mode: ComparisonMode) -> Ordering {
        if mode.equates(self, other) {
            return Ordering::Equal;
        }
        self.index(order).cmp(&other.index(order))
    }

    /// Returns the number of days of this month in `year`.
    ///
    /// For the relative year 0, Marcheshvan and Kislev report 30 days.
    pub fn days(self, year: i32) -> u8 {
        match self {
            Self::Marcheshvan => {
                if year == 0 || matches!(utils::year_size(year), 355 | 385) {
                    30
                } else {
                    29
                }
            }
            Self::Kislev => {
                if year != 0 && matches!(utils::year_size(year), 353 | 383) {
                    29
                } else {
                    30
                }
            }
            Self::Tishrei | Self::Shvat | Self::AdarI | Self::Nisan | Self::Sivan | Self::Av => 30,
            Self::Tevet | Self::Adar | Self::AdarII | Self::Iyyar | Self::Tammuz | Self::Elul => 29,
        }
    }

    /// Returns whether the month always has 30 days.
    pub const fn is_long(self) -> bool {
        matches!(
            self,
            Self::Tishrei | Self::Shvat | Self::AdarI | Self::Nisan | Self::Sivan | Self::Av
        )
    }

    /// Returns whether the month always has 29 days.
    pub const fn is_short(self) -> bool {
        matches!(
            self,
            Self::Tevet | Self::Adar | Self::AdarII | Self::Iyyar | Self::Tammuz | Self::Elul
        )
    }

    /// Returns whether the length of the month depends on the year.
    pub const fn is_changing(self) -> bool {
        matches!(self, Self::Marcheshvan | Self::Kislev)
    }

    /// Returns the month following this one in `year`.
    ///
    /// Elul wraps around to Tishrei.
    pub const fn next_month(self, year: i32) -> Month {
        match self {
            Self::Elul => Self::Tishrei,
            Self::Adar | Self::AdarII => Self::Nisan,
            Self::Shvat if utils::is_leap_year(year) => Self::AdarI,
            Self::Shvat => Self::Adar,
            Self::Tishrei => Self::Marcheshvan,
            Self::Marcheshvan => Self::Kislev,
            Self::Kislev => Self::Tevet,
            Self::Tevet => Self::Shvat,
            Self::AdarI => Self::AdarII,
            Self::Nisan => Self::Iyyar,
            Self::Iyyar => Self::Sivan,
            Self::Sivan => Self::Tammuz,
            Self::Tammuz => Self::Av,
            Self::Av => Self::Elul,
        }
    }

    /// Returns the month code of this month.
    ///
    /// Adar I is the leap month `M05L`; Adar and Adar II share `M06`.
    pub const fn month_code(self) -> TinyAsciiStr<4> {
        match self {
            Self::Tishrei => MONTH_ONE,
            Self::Marcheshvan => MONTH_TWO,
            Self::Kislev => MONTH_THREE,
            Self::Tevet => MONTH_FOUR,
            Self::Shvat => MONTH_FIVE,
            Self::AdarI => MONTH_FIVE_LEAP,
            Self::Adar | Self::AdarII => MONTH_SIX,
            Self::Nisan => MONTH_SEVEN,
            Self::Iyyar => MONTH_EIGHT,
            Self::Sivan => MONTH_NINE,
            Self::Tammuz => MONTH_TEN,
            Self::Av => MONTH_ELEVEN,
            Self::Elul => MONTH_TWELVE,
        }
    }

    /// Resolves a month code to the month it names in `year`.
    pub fn try_from_month_code(code: &TinyAsciiStr<4>, year: i32) -> HdateResult<Self> {
        let leap = utils::is_leap_year(year);
        if *code == MONTH_SIX {
            return Ok(if leap { Self::AdarII } else { Self::Adar });
        }
        if *code == MONTH_FIVE_LEAP && leap {
            return Ok(Self::AdarI);
        }
        Self::ALL
            .iter()
            .copied()
            .filter(|month| !month.is_adar())
            .find(|month| month.month_code() == *code)
            .ok_or(HdateError::invalid_month().with_enum(ErrorMessage::UnknownMonthCode))
    }

    /// Returns the name key of this month.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tishrei => "tishrei",
            Self::Marcheshvan => "marcheshvan",
            Self::Kislev => "kislev",
            Self::Tevet => "tevet",
            Self::Shvat => "shvat",
            Self::Adar => "adar",
            Self::AdarI => "adar_i",
            Self::AdarII => "adar_ii",
            Self::Nisan => "nisan",
            Self::Iyyar => "iyyar",
            Self::Sivan => "sivan",
            Self::Tammuz => "tammuz",
            Self::Av => "av",
            Self::Elul => "elul",
        }
    }

    pub(crate) const fn is_adar(self) -> bool {
        matches!(self, Self::Adar | Self::AdarI | Self::AdarII)
    }
}

impl TryFrom<u8> for Month {
    type Error = HdateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        value
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(usize::from(index)))
            .copied()
            .ok_or(HdateError::invalid_month().with_enum(ErrorMessage::UnknownMonth))
    }
}

impl FromStr for Month {
    type Err = HdateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|month| month.name().eq_ignore_ascii_case(s))
            .ok_or(HdateError::invalid_month().with_enum(ErrorMessage::UnknownMonth))
    }
}

// ==== Tests =====
