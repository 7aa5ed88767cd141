//! This module implements the weekly Torah reading (parasha) lookup.
//!
//! A year is classified by its year type: the weekday of Rosh Hashana, the
//! length class of the year and the weekday of Pesach, in Israel or in the
//! diaspora. Every year type maps to one fixed reading sequence, indexed by
//! the number of weeks elapsed since Rosh Hashana.

use rustc_hash::FxHashSet;

use crate::{
    date::{HebrewDate, Weekday, YearLength},
    error::{ErrorMessage, HdateError},
    utils, HdateResult, HdateUnwrap, MAX_TESTED_YEAR, MIN_TESTED_YEAR,
};


/// A weekly Torah portion.
///
/// `None` marks a Shabbat with no weekly portion, such as one falling on a
/// holiday. The last seven variants are the portions read together in short
/// years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Parasha {
    None = 0,
    Bereshit,
    Noach,
    LechLecha,
    Vayera,
    ChayeiSara,
    Toldot,
    Vayetzei,
    Vayishlach,
    Vayeshev,
    Miketz,
    Vayigash,
    Vayechi,
    Shemot,
    Vaera,
    Bo,
    Beshalach,
    Yitro,
    Mishpatim,
    Terumah,
    Tetzaveh,
    KiTisa,
    Vayakhel,
    Pekudei,
    Vayikra,
    Tzav,
    Shmini,
    Tazria,
    Metzora,
    AchreiMot,
    Kedoshim,
    Emor,
    Behar,
    Bechukotai,
    Bamidbar,
    Nasso,
    Behaalotcha,
    Shlach,
    Korach,
    Chukat,
    Balak,
    Pinchas,
    Matot,
    Masei,
    Devarim,
    Vaetchanan,
    Eikev,
    Reeh,
    Shoftim,
    KiTeitzei,
    KiTavo,
    Nitzavim,
    Vayeilech,
    Haazinu,
    VezotHabracha,
    VayakhelPekudei,
    TazriaMetzora,
    AchreiMotKedoshim,
    BeharBechukotai,
    ChukatBalak,
    MatotMasei,
    NitzavimVayeilech,
}

impl Parasha {
    const ALL: [Parasha; 62] = [
        Parasha::None,
        Parasha::Bereshit,
        Parasha::Noach,
        Parasha::LechLecha,
        Parasha::Vayera,
        Parasha::ChayeiSara,
        Parasha::Toldot,
        Parasha::Vayetzei,
        Parasha::Vayishlach,
        Parasha::Vayeshev,
        Parasha::Miketz,
        Parasha::Vayigash,
        Parasha::Vayechi,
        Parasha::Shemot,
        Parasha::Vaera,
        Parasha::Bo,
        Parasha::Beshalach,
        Parasha::Yitro,
        Parasha::Mishpatim,
        Parasha::Terumah,
        Parasha::Tetzaveh,
        Parasha::KiTisa,
        Parasha::Vayakhel,
        Parasha::Pekudei,
        Parasha::Vayikra,
        Parasha::Tzav,
        Parasha::Shmini,
        Parasha::Tazria,
        Parasha::Metzora,
        Parasha::AchreiMot,
        Parasha::Kedoshim,
        Parasha::Emor,
        Parasha::Behar,
        Parasha::Bechukotai,
        Parasha::Bamidbar,
        Parasha::Nasso,
        Parasha::Behaalotcha,
        Parasha::Shlach,
        Parasha::Korach,
        Parasha::Chukat,
        Parasha::Balak,
        Parasha::Pinchas,
        Parasha::Matot,
        Parasha::Masei,
        Parasha::Devarim,
        Parasha::Vaetchanan,
        Parasha::Eikev,
        Parasha::Reeh,
        Parasha::Shoftim,
        Parasha::KiTeitzei,
        Parasha::KiTavo,
        Parasha::Nitzavim,
        Parasha::Vayeilech,
        Parasha::Haazinu,
        Parasha::VezotHabracha,
        Parasha::VayakhelPekudei,
        Parasha::TazriaMetzora,
        Parasha::AchreiMotKedoshim,
        Parasha::BeharBechukotai,
        Parasha::ChukatBalak,
        Parasha::MatotMasei,
        Parasha::NitzavimVayeilech,
    ];

    /// Returns the `Parasha` with the given index.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Returns the index of this portion.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns whether this is one of the combined portions.
    #[inline]
    pub const fn is_combined(self) -> bool {
        self as u8 > Self::VezotHabracha as u8
    }

    /// Returns the name key of the portion, e.g. `"chayei_sara"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bereshit => "bereshit",
            Self::Noach => "noach",
            Self::LechLecha => "lech_lecha",
            Self::Vayera => "vayera",
            Self::ChayeiSara => "chayei_sara",
            Self::Toldot => "toldot",
            Self::Vayetzei => "vayetzei",
            Self::Vayishlach => "vayishlach",
            Self::Vayeshev => "vayeshev",
            Self::Miketz => "miketz",
            Self::Vayigash => "vayigash",
            Self::Vayechi => "vayechi",
            Self::Shemot => "shemot",
            Self::Vaera => "vaera",
            Self::Bo => "bo",
            Self::Beshalach => "beshalach",
            Self::Yitro => "yitro",
            Self::Mishpatim => "mishpatim",
            Self::Terumah => "terumah",
            Self::Tetzaveh => "tetzaveh",
            Self::KiTisa => "ki_tisa",
            Self::Vayakhel => "vayakhel",
            Self::Pekudei => "pekudei",
            Self::Vayikra => "vayikra",
            Self::Tzav => "tzav",
            Self::Shmini => "shmini",
            Self::Tazria => "tazria",
            Self::Metzora => "metzora",
            Self::AchreiMot => "achrei_mot",
            Self::Kedoshim => "kedoshim",
            Self::Emor => "emor",
            Self::Behar => "behar",
            Self::Bechukotai => "bechukotai",
            Self::Bamidbar => "bamidbar",
            Self::Nasso => "nasso",
            Self::Behaalotcha => "behaalotcha",
            Self::Shlach => "shlach",
            Self::Korach => "korach",
            Self::Chukat => "chukat",
            Self::Balak => "balak",
            Self::Pinchas => "pinchas",
            Self::Matot => "matot",
            Self::Masei => "masei",
            Self::Devarim => "devarim",
            Self::Vaetchanan => "vaetchanan",
            Self::Eikev => "eikev",
            Self::Reeh => "reeh",
            Self::Shoftim => "shoftim",
            Self::KiTeitzei => "ki_teitzei",
            Self::KiTavo => "ki_tavo",
            Self::Nitzavim => "nitzavim",
            Self::Vayeilech => "vayeilech",
            Self::Haazinu => "haazinu",
            Self::VezotHabracha => "vezot_habracha",
            Self::VayakhelPekudei => "vayakhel_pekudei",
            Self::TazriaMetzora => "tazria_metzora",
            Self::AchreiMotKedoshim => "achrei_mot_kedoshim",
            Self::BeharBechukotai => "behar_bechukotai",
            Self::ChukatBalak => "chukat_balak",
            Self::MatotMasei => "matot_masei",
            Self::NitzavimVayeilech => "nitzavim_vayeilech",
        }
    }
}

/// A run of entries in a reading sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// A single portion.
    Single(Parasha),
    /// Every portion from the first to the last, inclusive, in index order.
    Span(Parasha, Parasha),
}

impl Segment {
    const fn len(self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Span(first, last) => (last as usize + 1).saturating_sub(first as usize),
        }
    }

    fn get(self, index: usize) -> Option<Parasha> {
        match self {
            Self::Single(parasha) if index == 0 => Some(parasha),
            Self::Single(_) => None,
            Self::Span(first, _) if index < self.len() => {
                Parasha::from_index(first.index().checked_add(u8::try_from(index).ok()?)?)
            }
            Self::Span(..) => None,
        }
    }
}

/// The readings of every Shabbat of a year, for a set of year types.
#[derive(Debug)]
pub struct ReadingSequence {
    year_types: &'static [u16],
    segments: &'static [Segment],
}

impl ReadingSequence {
    const fn new(year_types: &'static [u16], segments: &'static [Segment]) -> Self {
        Self {
            year_types,
            segments,
        }
    }

    /// Returns the sequence used by the given year type.
    pub fn for_year_type(year_type: u16) -> Option<&'static Self> {
        READING_SEQUENCES
            .iter()
            .find(|sequence| sequence.year_types.contains(&year_type))
    }

    /// The year types that read this sequence.
    #[inline]
    pub const fn year_types(&self) -> &'static [u16] {
        self.year_types
    }

    /// Returns the number of weeks covered by the sequence.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|segment| segment.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the reading `week` weeks after Rosh Hashana.
    pub fn get(&self, week: usize) -> Option<Parasha> {
        let mut week = week;
        for segment in self.segments {
            let len = segment.len();
            if week < len {
                return segment.get(week);
            }
            week -= len;
        }
        None
    }

    /// Iterates over the readings of the sequence.
    pub fn iter(&self) -> impl Iterator<Item = Parasha> + '_ {
        self.segments
            .iter()
            .flat_map(|segment| (0..segment.len()).filter_map(move |index| segment.get(index)))
    }
}

/// Returns the year type of `year`.
///
/// The year type is `diaspora * 1000 + weekday(1 Tishrei) * 100 +
/// class * 10 + weekday(15 Nisan)`, where `class` is 0, 1 or 2 for a
/// deficient, regular or complete year.
pub fn year_type(year: i32, diaspora: bool) -> u16 {
    let rosh_hashana = Weekday::from_jdn(utils::rosh_hashana_jdn(year));
    // 15 Nisan is always 163 days before the next Rosh Hashana.
    let pesach = Weekday::from_jdn(utils::next_rosh_hashana_jdn(year) - 163);
    let class = match YearLength::of(year) {
        YearLength::Deficient => 0,
        YearLength::Regular => 1,
        YearLength::Complete => 2,
    };
    u16::from(diaspora) * 1000
        + u16::from(rosh_hashana.number()) * 100
        + class * 10
        + u16::from(pesach.number())
}

/// Returns the portion read on the Shabbat of the week containing `date`.
///
/// In the last days of a year whose sequence is exhausted, the reading is
/// taken from the upcoming Shabbat in the next year.
pub fn get_reading(date: &HebrewDate, diaspora: bool) -> HdateResult<Parasha> {
    let mut date = *date;
    loop {
        let jdn = date.to_jdn()?;
        let year = date.year();
        let rosh_hashana = utils::rosh_hashana_jdn(year);
        let year_type = year_type(year, diaspora);

        let days = jdn - rosh_hashana;
        let weeks = (days + i64::from(Weekday::from_jdn(rosh_hashana).number()) - 1).div_euclid(7);
        #[cfg(feature = "log")]
        log::debug!("Year type: {year_type}, days since Rosh Hashana: {days}, weeks: {weeks}");

        // Simchat Torah
        let weekday = Weekday::from_jdn(jdn);
        if weeks == 3
            && ((days <= 22 && diaspora && weekday != Weekday::Saturday)
                || (days <= 21 && !diaspora))
        {
            return Ok(Parasha::VezotHabracha);
        }
        if weeks == 4 && days == 22 && diaspora {
            return Ok(Parasha::VezotHabracha);
        }

        let sequence = ReadingSequence::for_year_type(year_type)
            .ok_or(HdateError::not_found().with_enum(ErrorMessage::YearTypeNotInTable))?;
        crate::hdate_assert!(weeks >= 0, "{date:?} precedes Rosh Hashana of {year}");
        let week = weeks as usize;
        if week < sequence.len() {
            return sequence.get(week).hdate_unwrap();
        }

        let shabbat = date.add_days(weekday.days_until_shabbat())?;
        if shabbat.year() <= year {
            return Err(HdateError::not_found().with_enum(ErrorMessage::ReadingIndexOutOfRange));
        }
        date = shabbat;
    }
}

/// Checks the consistency of [`READING_SEQUENCES`].
///
/// No year type may appear in two sequences, no sequence may be empty, and
/// every year type of the years from `MIN_TESTED_YEAR` to `MAX_TESTED_YEAR`
/// must have a sequence, in Israel and in the diaspora.
pub fn validate_reading_table() -> HdateResult<()> {
    let mut seen = FxHashSet::default();
    for sequence in READING_SEQUENCES {
        if sequence.is_empty() {
            return Err(HdateError::assert().with_enum(ErrorMessage::EmptyReadingSequence));
        }
        for year_type in sequence.year_types {
            if !seen.insert(*year_type) {
                return Err(HdateError::assert().with_enum(ErrorMessage::OverlappingYearType));
            }
        }
    }

    for year in MIN_TESTED_YEAR..=MAX_TESTED_YEAR {
        for diaspora in [false, true] {
            if !seen.contains(&year_type(year, diaspora)) {
                return Err(HdateError::not_found().with_enum(ErrorMessage::YearTypeNotInTable));
            }
        }
    }
    Ok(())
}

// ==== Reading table ====

use Segment::{Single, Span};

/// The reading sequences, keyed by year type.
pub static READING_SEQUENCES: &[ReadingSequence] = &[
    ReadingSequence::new(
        &[1725],
        &[
            Single(Parasha::None),
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Span(Parasha::None, Parasha::Metzora),
            Single(Parasha::None),
            Span(Parasha::AchreiMot, Parasha::Bamidbar),
            Single(Parasha::None),
            Span(Parasha::Nasso, Parasha::Korach),
            Single(Parasha::ChukatBalak),
            Single(Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::KiTavo),
            Single(Parasha::NitzavimVayeilech),
        ],
    ),
    ReadingSequence::new(
        &[1703],
        &[
            Single(Parasha::None),
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Span(Parasha::None, Parasha::Metzora),
            Single(Parasha::None),
            Span(Parasha::AchreiMot, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::KiTavo),
            Single(Parasha::NitzavimVayeilech),
        ],
    ),
    ReadingSequence::new(
        &[1523, 523],
        &[
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Span(Parasha::None, Parasha::AchreiMot),
            Single(Parasha::None),
            Span(Parasha::Kedoshim, Parasha::KiTavo),
            Single(Parasha::NitzavimVayeilech),
        ],
    ),
    ReadingSequence::new(
        &[1501, 501],
        &[
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Span(Parasha::None, Parasha::AchreiMot),
            Single(Parasha::None),
            Span(Parasha::Kedoshim, Parasha::Nitzavim),
        ],
    ),
    ReadingSequence::new(
        &[1317, 1227],
        &[
            Single(Parasha::Vayeilech),
            Single(Parasha::Haazinu),
            Span(Parasha::None, Parasha::Metzora),
            Single(Parasha::None),
            Single(Parasha::None),
            Span(Parasha::AchreiMot, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::Nitzavim),
        ],
    ),
    ReadingSequence::new(
        &[1205],
        &[
            Single(Parasha::Vayeilech),
            Single(Parasha::Haazinu),
            Span(Parasha::None, Parasha::Metzora),
            Single(Parasha::None),
            Span(Parasha::AchreiMot, Parasha::Bamidbar),
            Single(Parasha::None),
            Span(Parasha::Nasso, Parasha::Korach),
            Single(Parasha::ChukatBalak),
            Single(Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::KiTavo),
            Single(Parasha::NitzavimVayeilech),
        ],
    ),
    ReadingSequence::new(
        &[521, 1521],
        &[
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Span(Parasha::None, Parasha::Tzav),
            Single(Parasha::None),
            Single(Parasha::Shmini),
            Single(Parasha::TazriaMetzora),
            Single(Parasha::AchreiMotKedoshim),
            Single(Parasha::Emor),
            Single(Parasha::BeharBechukotai),
            Span(Parasha::Bamidbar, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::Nitzavim),
        ],
    ),
    ReadingSequence::new(
        &[1225, 1315],
        &[
            Single(Parasha::Vayeilech),
            Single(Parasha::Haazinu),
            Span(Parasha::None, Parasha::KiTisa),
            Single(Parasha::VayakhelPekudei),
            Single(Parasha::Vayikra),
            Single(Parasha::Tzav),
            Single(Parasha::None),
            Single(Parasha::Shmini),
            Single(Parasha::TazriaMetzora),
            Single(Parasha::AchreiMotKedoshim),
            Single(Parasha::Emor),
            Single(Parasha::BeharBechukotai),
            Single(Parasha::Bamidbar),
            Single(Parasha::None),
            Span(Parasha::Nasso, Parasha::Korach),
            Single(Parasha::ChukatBalak),
            Single(Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::KiTavo),
            Single(Parasha::NitzavimVayeilech),
        ],
    ),
    ReadingSequence::new(
        &[1701],
        &[
            Single(Parasha::None),
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Span(Parasha::None, Parasha::KiTisa),
            Single(Parasha::VayakhelPekudei),
            Single(Parasha::Vayikra),
            Single(Parasha::Tzav),
            Single(Parasha::None),
            Single(Parasha::Shmini),
            Single(Parasha::TazriaMetzora),
            Single(Parasha::AchreiMotKedoshim),
            Single(Parasha::Emor),
            Single(Parasha::BeharBechukotai),
            Span(Parasha::Bamidbar, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::Nitzavim),
        ],
    ),
    ReadingSequence::new(
        &[1723],
        &[
            Single(Parasha::None),
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Span(Parasha::None, Parasha::KiTisa),
            Single(Parasha::VayakhelPekudei),
            Single(Parasha::Vayikra),
            Single(Parasha::Tzav),
            Single(Parasha::None),
            Single(Parasha::Shmini),
            Single(Parasha::TazriaMetzora),
            Single(Parasha::AchreiMotKedoshim),
            Single(Parasha::Emor),
            Single(Parasha::BeharBechukotai),
            Span(Parasha::Bamidbar, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::KiTavo),
            Single(Parasha::NitzavimVayeilech),
        ],
    ),
    ReadingSequence::new(
        &[1517],
        &[
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Span(Parasha::None, Parasha::KiTisa),
            Single(Parasha::VayakhelPekudei),
            Single(Parasha::Vayikra),
            Single(Parasha::Tzav),
            Single(Parasha::None),
            Single(Parasha::None),
            Single(Parasha::Shmini),
            Single(Parasha::TazriaMetzora),
            Single(Parasha::AchreiMotKedoshim),
            Single(Parasha::Emor),
            Single(Parasha::BeharBechukotai),
            Span(Parasha::Bamidbar, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::Nitzavim),
        ],
    ),
    ReadingSequence::new(
        &[703, 725],
        &[
            Single(Parasha::None),
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Single(Parasha::VezotHabracha),
            Span(Parasha::Bereshit, Parasha::Metzora),
            Single(Parasha::None),
            Span(Parasha::AchreiMot, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::KiTavo),
            Single(Parasha::NitzavimVayeilech),
        ],
    ),
    ReadingSequence::new(
        &[317, 227],
        &[
            Single(Parasha::Vayeilech),
            Single(Parasha::Haazinu),
            Span(Parasha::None, Parasha::Metzora),
            Single(Parasha::None),
            Span(Parasha::AchreiMot, Parasha::Nitzavim),
        ],
    ),
    ReadingSequence::new(
        &[205],
        &[
            Single(Parasha::Vayeilech),
            Single(Parasha::Haazinu),
            Span(Parasha::None, Parasha::Metzora),
            Single(Parasha::None),
            Span(Parasha::AchreiMot, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::KiTavo),
            Single(Parasha::NitzavimVayeilech),
        ],
    ),
    ReadingSequence::new(
        &[701],
        &[
            Single(Parasha::None),
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Single(Parasha::VezotHabracha),
            Span(Parasha::Bereshit, Parasha::KiTisa),
            Single(Parasha::VayakhelPekudei),
            Single(Parasha::Vayikra),
            Single(Parasha::Tzav),
            Single(Parasha::None),
            Single(Parasha::Shmini),
            Single(Parasha::TazriaMetzora),
            Single(Parasha::AchreiMotKedoshim),
            Single(Parasha::Emor),
            Single(Parasha::BeharBechukotai),
            Span(Parasha::Bamidbar, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::Nitzavim),
        ],
    ),
    ReadingSequence::new(
        &[315, 203, 225, 1203],
        &[
            Single(Parasha::Vayeilech),
            Single(Parasha::Haazinu),
            Span(Parasha::None, Parasha::KiTisa),
            Single(Parasha::VayakhelPekudei),
            Single(Parasha::Vayikra),
            Single(Parasha::Tzav),
            Single(Parasha::None),
            Single(Parasha::Shmini),
            Single(Parasha::TazriaMetzora),
            Single(Parasha::AchreiMotKedoshim),
            Single(Parasha::Emor),
            Single(Parasha::BeharBechukotai),
            Span(Parasha::Bamidbar, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::KiTavo),
            Single(Parasha::NitzavimVayeilech),
        ],
    ),
    ReadingSequence::new(
        &[723],
        &[
            Single(Parasha::None),
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Single(Parasha::VezotHabracha),
            Span(Parasha::Bereshit, Parasha::KiTisa),
            Single(Parasha::VayakhelPekudei),
            Single(Parasha::Vayikra),
            Single(Parasha::Tzav),
            Single(Parasha::None),
            Single(Parasha::Shmini),
            Single(Parasha::TazriaMetzora),
            Single(Parasha::AchreiMotKedoshim),
            Single(Parasha::Emor),
            Single(Parasha::BeharBechukotai),
            Span(Parasha::Bamidbar, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::KiTavo),
            Single(Parasha::NitzavimVayeilech),
        ],
    ),
    ReadingSequence::new(
        &[517],
        &[
            Single(Parasha::Haazinu),
            Single(Parasha::None),
            Span(Parasha::None, Parasha::KiTisa),
            Single(Parasha::VayakhelPekudei),
            Single(Parasha::Vayikra),
            Single(Parasha::Tzav),
            Single(Parasha::None),
            Single(Parasha::Shmini),
            Single(Parasha::TazriaMetzora),
            Single(Parasha::AchreiMotKedoshim),
            Span(Parasha::Emor, Parasha::Pinchas),
            Single(Parasha::MatotMasei),
            Span(Parasha::Devarim, Parasha::Nitzavim),
        ],
    ),
];
