//! This module implements the holiday table and its lookups.
//!
//! Each [`Holiday`] row lists the days and months it may fall on, and a set
//! of [`Guard`]s that must all hold on the candidate date for the row to
//! match. Guards encode civil postponements, leap year Adar handling, month
//! length checks and the year a modern observance was introduced.

use crate::{
    date::{HebrewDate, Weekday},
    error::{ErrorMessage, HdateError},
    gregorian::GregorianDate,
    month::Month,
    HdateResult,
};


/// The class of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayType {
    YomTov,
    ErevYomTov,
    HolHamoed,
    MelachaPermittedHoliday,
    FastDay,
    ModernHoliday,
    MinorHoliday,
    MemorialDay,
    IsraelNationalHoliday,
    RoshChodesh,
}

/// Where a holiday is observed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    #[default]
    All,
    IsraelOnly,
    DiasporaOnly,
}

impl Region {
    /// Returns whether the region includes the diaspora, or Israel when
    /// `diaspora` is false.
    #[inline]
    pub const fn applies_to(self, diaspora: bool) -> bool {
        match self {
            Self::All => true,
            Self::IsraelOnly => !diaspora,
            Self::DiasporaOnly => diaspora,
        }
    }
}

/// The facts about a date that guards are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct DateFacts {
    pub hdate: HebrewDate,
    pub gdate: GregorianDate,
    pub is_leap_year: bool,
    pub long_cheshvan: bool,
    pub short_kislev: bool,
}

impl DateFacts {
    /// Collects the facts of an absolute `HebrewDate`.
    pub fn new(hdate: &HebrewDate) -> HdateResult<Self> {
        Ok(Self::from_parts(*hdate, hdate.to_gdate()?))
    }

    /// Collects the facts of a date known in both calendars.
    pub(crate) fn from_parts(hdate: HebrewDate, gdate: GregorianDate) -> Self {
        Self {
            hdate,
            gdate,
            is_leap_year: hdate.is_leap_year(),
            long_cheshvan: hdate.long_cheshvan(),
            short_kislev: hdate.short_kislev(),
        }
    }

    /// Returns the day of the week of the date.
    #[inline]
    pub fn weekday(&self) -> Weekday {
        self.gdate.hebrew_weekday()
    }
}

/// A civil postponement: the holiday is observed on `original`, unless that
/// day falls on `forbidden`, in which case it is observed on `replacement`
/// when that day falls on `expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRule {
    pub original: u8,
    pub replacement: u8,
    pub forbidden: Weekday,
    pub expected: Weekday,
}

impl MoveRule {
    /// Creates a new `MoveRule`.
    pub const fn new(original: u8, replacement: u8, forbidden: Weekday, expected: Weekday) -> Self {
        Self {
            original,
            replacement,
            forbidden,
            expected,
        }
    }
}

/// A predicate a date must satisfy for a holiday row to match.
#[derive(Debug, Clone, Copy)]
pub enum Guard {
    /// The year is strictly after the given year.
    YearAfter(i32),
    /// The year is strictly before the given year.
    YearBefore(i32),
    /// The day is kept or moved according to a set of [`MoveRule`]s.
    ///
    /// A replacement day matches when it falls on its rule's expected
    /// weekday. An original day matches unless any rule forbids its weekday.
    Move(&'static [MoveRule]),
    /// Adar is only valid in common years, Adar I and Adar II only in leap
    /// years.
    CorrectAdar,
    /// Day 30 only exists in months that have 30 days in the year.
    LegalMonthLength,
    /// The date is not 1 Tishrei.
    NotRoshHashana,
    /// A free-form predicate.
    Custom(fn(&DateFacts) -> bool),
}

impl Guard {
    /// Evaluates the guard against a date.
    pub fn holds(&self, facts: &DateFacts) -> bool {
        let date = &facts.hdate;
        match *self {
            Self::YearAfter(year) => date.year() > year,
            Self::YearBefore(year) => date.year() < year,
            Self::Move(rules) => {
                let weekday = facts.weekday();
                if rules
                    .iter()
                    .any(|rule| rule.replacement == date.day() && rule.expected == weekday)
                {
                    return true;
                }
                rules.iter().any(|rule| rule.original == date.day())
                    && rules.iter().all(|rule| rule.forbidden != weekday)
            }
            Self::CorrectAdar => match date.month() {
                Month::Adar => !facts.is_leap_year,
                Month::AdarI | Month::AdarII => facts.is_leap_year,
                _ => true,
            },
            Self::LegalMonthLength => date.day() != 30 || date.days_in_month(date.month()) == 30,
            Self::NotRoshHashana => !(date.month() == Month::Tishrei && date.day() == 1),
            Self::Custom(predicate) => predicate(facts),
        }
    }
}

/// A row of the holiday table.
#[derive(Debug)]
pub struct Holiday {
    kind: HolidayType,
    name: &'static str,
    days: &'static [u8],
    months: &'static [Month],
    region: Region,
    guards: &'static [Guard],
}

impl Holiday {
    const fn new(
        kind: HolidayType,
        name: &'static str,
        days: &'static [u8],
        months: &'static [Month],
        region: Region,
        guards: &'static [Guard],
    ) -> Self {
        Self {
            kind,
            name,
            days,
            months,
            region,
            guards,
        }
    }

    /// Returns the name key of the holiday, e.g. `"rosh_hashana_i"`.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the class of the holiday.
    #[inline]
    pub const fn kind(&self) -> HolidayType {
        self.kind
    }

    /// Returns where the holiday is observed.
    #[inline]
    pub const fn region(&self) -> Region {
        self.region
    }

    /// The days of the month the holiday may fall on.
    #[inline]
    pub const fn days(&self) -> &'static [u8] {
        self.days
    }

    /// The months the holiday may fall in.
    #[inline]
    pub const fn months(&self) -> &'static [Month] {
        self.months
    }

    /// Returns whether the holiday is observed in the diaspora, or in Israel
    /// when `diaspora` is false.
    #[inline]
    pub const fn applies_to(&self, diaspora: bool) -> bool {
        self.region.applies_to(diaspora)
    }

    /// Returns whether the holiday falls on the date described by `facts`,
    /// regardless of region.
    pub fn matches(&self, facts: &DateFacts) -> bool {
        let date = &facts.hdate;
        self.months.contains(&date.month())
            && self.days.contains(&date.day())
            && self.guards.iter().all(|guard| guard.holds(facts))
    }
}

/// `HolidayDatabase` answers holiday queries for one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayDatabase {
    diaspora: bool,
    scan_limit: u32,
}

impl HolidayDatabase {
    /// The default number of days `lookup_next_holiday` scans.
    pub const DEFAULT_SCAN_LIMIT: u32 = 400;

    /// Creates a new `HolidayDatabase` for the diaspora, or for Israel when
    /// `diaspora` is false.
    #[inline]
    pub const fn new(diaspora: bool) -> Self {
        Self {
            diaspora,
            scan_limit: Self::DEFAULT_SCAN_LIMIT,
        }
    }

    /// Sets the number of days `lookup_next_holiday` scans before giving up.
    #[inline]
    #[must_use]
    pub const fn with_scan_limit(mut self, scan_limit: u32) -> Self {
        self.scan_limit = scan_limit;
        self
    }

    /// Returns whether this database answers for the diaspora.
    #[inline]
    pub const fn diaspora(&self) -> bool {
        self.diaspora
    }

    /// Returns the number of days `lookup_next_holiday` scans.
    #[inline]
    pub const fn scan_limit(&self) -> u32 {
        self.scan_limit
    }

    /// Returns the holidays falling on `date`, in table order.
    pub fn lookup(&self, date: &HebrewDate) -> HdateResult<Vec<&'static Holiday>> {
        let facts = DateFacts::new(date)?;
        Ok(self.lookup_facts(&facts))
    }

    /// Returns the first date on or after `date` with a holiday of one of
    /// the given types.
    pub fn lookup_next_holiday(
        &self,
        date: &HebrewDate,
        types: &[HolidayType],
    ) -> HdateResult<HebrewDate> {
        let mut current = *date;
        for _ in 0..self.scan_limit {
            let facts = DateFacts::new(&current)?;
            if self
                .lookup_facts(&facts)
                .iter()
                .any(|holiday| types.contains(&holiday.kind))
            {
                #[cfg(feature = "log")]
                log::debug!("Next holiday of {types:?} after {date:?}: {current:?}");
                return Ok(current);
            }
            current = current.add_days(1)?;
        }
        #[cfg(feature = "log")]
        log::warn!(
            "No holiday of {types:?} within {} days of {date:?}",
            self.scan_limit
        );
        Err(HdateError::not_found().with_enum(ErrorMessage::HolidayScanExhausted))
    }

    pub(crate) fn lookup_facts(&self, facts: &DateFacts) -> Vec<&'static Holiday> {
        HOLIDAYS
            .iter()
            .filter(|holiday| holiday.applies_to(self.diaspora) && holiday.matches(facts))
            .collect()
    }
}

// ==== Holiday table ====

use HolidayType::{
    ErevYomTov, FastDay, HolHamoed, IsraelNationalHoliday, MelachaPermittedHoliday, MemorialDay,
    MinorHoliday, ModernHoliday, RoshChodesh, YomTov,
};
use Region::{All, DiasporaOnly, IsraelOnly};

const ADAR: &[Month] = &[Month::Adar, Month::AdarII];

fn chanukah_in_tevet(facts: &DateFacts) -> bool {
    matches!(facts.hdate.day(), 1 | 2) || (facts.hdate.day() == 3 && facts.short_kislev)
}

const YOM_HAATZMAUT_MOVES: &[MoveRule] = &[
    MoveRule::new(5, 4, Weekday::Friday, Weekday::Thursday),
    MoveRule::new(5, 3, Weekday::Saturday, Weekday::Thursday),
];

const YOM_HAATZMAUT_MOVES_5764: &[MoveRule] = &[
    MoveRule::new(5, 4, Weekday::Friday, Weekday::Thursday),
    MoveRule::new(5, 3, Weekday::Saturday, Weekday::Thursday),
    MoveRule::new(5, 6, Weekday::Monday, Weekday::Tuesday),
];

const YOM_HAZIKARON_MOVES: &[MoveRule] = &[
    MoveRule::new(4, 3, Weekday::Thursday, Weekday::Wednesday),
    MoveRule::new(4, 2, Weekday::Friday, Weekday::Wednesday),
];

const YOM_HAZIKARON_MOVES_5764: &[MoveRule] = &[
    MoveRule::new(4, 3, Weekday::Thursday, Weekday::Wednesday),
    MoveRule::new(4, 2, Weekday::Friday, Weekday::Wednesday),
    MoveRule::new(4, 5, Weekday::Sunday, Weekday::Monday),
];

/// The holiday table.
pub static HOLIDAYS: &[Holiday] = &[
    Holiday::new(ErevYomTov, "erev_rosh_hashana", &[29], &[Month::Elul], All, &[]),
    Holiday::new(YomTov, "rosh_hashana_i", &[1], &[Month::Tishrei], All, &[]),
    Holiday::new(YomTov, "rosh_hashana_ii", &[2], &[Month::Tishrei], All, &[]),
    Holiday::new(
        FastDay,
        "tzom_gedaliah",
        &[3, 4],
        &[Month::Tishrei],
        All,
        &[Guard::Move(&[MoveRule::new(3, 4, Weekday::Saturday, Weekday::Sunday)])],
    ),
    Holiday::new(ErevYomTov, "erev_yom_kippur", &[9], &[Month::Tishrei], All, &[]),
    Holiday::new(YomTov, "yom_kippur", &[10], &[Month::Tishrei], All, &[]),
    Holiday::new(ErevYomTov, "erev_sukkot", &[14], &[Month::Tishrei], All, &[]),
    Holiday::new(YomTov, "sukkot", &[15], &[Month::Tishrei], All, &[]),
    Holiday::new(HolHamoed, "hol_hamoed_sukkot", &[16], &[Month::Tishrei], IsraelOnly, &[]),
    Holiday::new(HolHamoed, "hol_hamoed_sukkot", &[17, 18, 19, 20], &[Month::Tishrei], All, &[]),
    Holiday::new(ErevYomTov, "hoshana_raba", &[21], &[Month::Tishrei], All, &[]),
    Holiday::new(YomTov, "simchat_torah", &[23], &[Month::Tishrei], DiasporaOnly, &[]),
    Holiday::new(
        MelachaPermittedHoliday,
        "chanukah",
        &[25, 26, 27, 28, 29, 30],
        &[Month::Kislev],
        All,
        &[],
    ),
    Holiday::new(
        MelachaPermittedHoliday,
        "chanukah",
        &[1, 2, 3],
        &[Month::Tevet],
        All,
        &[Guard::Custom(chanukah_in_tevet)],
    ),
    Holiday::new(FastDay, "asara_btevet", &[10], &[Month::Tevet], All, &[]),
    Holiday::new(MinorHoliday, "tu_bshvat", &[15], &[Month::Shvat], All, &[]),
    Holiday::new(
        FastDay,
        "taanit_esther",
        &[11, 13],
        ADAR,
        All,
        &[
            Guard::CorrectAdar,
            Guard::Move(&[MoveRule::new(13, 11, Weekday::Saturday, Weekday::Thursday)]),
        ],
    ),
    Holiday::new(MelachaPermittedHoliday, "purim", &[14], ADAR, All, &[Guard::CorrectAdar]),
    Holiday::new(
        MelachaPermittedHoliday,
        "shushan_purim",
        &[15],
        ADAR,
        All,
        &[Guard::CorrectAdar],
    ),
    Holiday::new(ErevYomTov, "erev_pesach", &[14], &[Month::Nisan], All, &[]),
    Holiday::new(YomTov, "pesach", &[15], &[Month::Nisan], All, &[]),
    Holiday::new(HolHamoed, "hol_hamoed_pesach", &[16], &[Month::Nisan], IsraelOnly, &[]),
    Holiday::new(HolHamoed, "hol_hamoed_pesach", &[17, 18, 19], &[Month::Nisan], All, &[]),
    Holiday::new(ErevYomTov, "hol_hamoed_pesach", &[20], &[Month::Nisan], All, &[]),
    Holiday::new(YomTov, "pesach_vii", &[21], &[Month::Nisan], All, &[]),
    Holiday::new(
        ModernHoliday,
        "yom_haatzmaut",
        &[3, 4, 5],
        &[Month::Iyyar],
        All,
        &[
            Guard::YearAfter(5708),
            Guard::YearBefore(5764),
            Guard::Move(YOM_HAATZMAUT_MOVES),
        ],
    ),
    Holiday::new(
        ModernHoliday,
        "yom_haatzmaut",
        &[3, 4, 5, 6],
        &[Month::Iyyar],
        All,
        &[Guard::YearAfter(5763), Guard::Move(YOM_HAATZMAUT_MOVES_5764)],
    ),
    Holiday::new(MinorHoliday, "lag_bomer", &[18], &[Month::Iyyar], All, &[]),
    Holiday::new(ErevYomTov, "erev_shavuot", &[5], &[Month::Sivan], All, &[]),
    Holiday::new(YomTov, "shavuot", &[6], &[Month::Sivan], All, &[]),
    Holiday::new(
        FastDay,
        "tzom_tammuz",
        &[17, 18],
        &[Month::Tammuz],
        All,
        &[Guard::Move(&[MoveRule::new(17, 18, Weekday::Saturday, Weekday::Sunday)])],
    ),
    Holiday::new(
        FastDay,
        "tisha_bav",
        &[9, 10],
        &[Month::Av],
        All,
        &[Guard::Move(&[MoveRule::new(9, 10, Weekday::Saturday, Weekday::Sunday)])],
    ),
    Holiday::new(MinorHoliday, "tu_bav", &[15], &[Month::Av], All, &[]),
    Holiday::new(
        MemorialDay,
        "yom_hashoah",
        &[26, 27, 28],
        &[Month::Nisan],
        All,
        &[
            Guard::Move(&[
                MoveRule::new(27, 28, Weekday::Sunday, Weekday::Monday),
                MoveRule::new(27, 26, Weekday::Friday, Weekday::Thursday),
            ]),
            Guard::YearAfter(5718),
        ],
    ),
    Holiday::new(
        MemorialDay,
        "yom_hazikaron",
        &[2, 3, 4],
        &[Month::Iyyar],
        All,
        &[
            Guard::YearAfter(5708),
            Guard::YearBefore(5764),
            Guard::Move(YOM_HAZIKARON_MOVES),
        ],
    ),
    Holiday::new(
        MemorialDay,
        "yom_hazikaron",
        &[2, 3, 4, 5],
        &[Month::Iyyar],
        All,
        &[Guard::YearAfter(5763), Guard::Move(YOM_HAZIKARON_MOVES_5764)],
    ),
    Holiday::new(
        ModernHoliday,
        "yom_yerushalayim",
        &[28],
        &[Month::Iyyar],
        All,
        &[Guard::YearAfter(5727)],
    ),
    Holiday::new(YomTov, "shmini_atzeret", &[22], &[Month::Tishrei], All, &[]),
    Holiday::new(YomTov, "pesach_viii", &[22], &[Month::Nisan], DiasporaOnly, &[]),
    Holiday::new(YomTov, "shavuot_ii", &[7], &[Month::Sivan], DiasporaOnly, &[]),
    Holiday::new(YomTov, "sukkot_ii", &[16], &[Month::Tishrei], DiasporaOnly, &[]),
    Holiday::new(YomTov, "pesach_ii", &[16], &[Month::Nisan], DiasporaOnly, &[]),
    Holiday::new(
        IsraelNationalHoliday,
        "family_day",
        &[30],
        &[Month::Shvat],
        IsraelOnly,
        &[Guard::YearAfter(5734)],
    ),
    Holiday::new(
        MemorialDay,
        "memorial_day_unknown",
        &[7],
        ADAR,
        IsraelOnly,
        &[Guard::CorrectAdar],
    ),
    Holiday::new(
        MemorialDay,
        "rabin_memorial_day",
        &[11, 12],
        &[Month::Marcheshvan],
        IsraelOnly,
        &[
            Guard::Move(&[MoveRule::new(12, 11, Weekday::Friday, Weekday::Thursday)]),
            Guard::YearAfter(5757),
        ],
    ),
    Holiday::new(
        MemorialDay,
        "zeev_zhabotinsky_day",
        &[29],
        &[Month::Tammuz],
        IsraelOnly,
        &[Guard::YearAfter(5764)],
    ),
    Holiday::new(
        RoshChodesh,
        "rosh_chodesh",
        &[1, 30],
        &Month::ALL,
        All,
        &[
            Guard::CorrectAdar,
            Guard::LegalMonthLength,
            Guard::NotRoshHashana,
        ],
    ),
];
