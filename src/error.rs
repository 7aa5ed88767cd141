//! This module implements `HdateError`.

use core::fmt;

/// `HdateError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A day outside of the valid range for its month and year.
    #[default]
    InvalidDate,
    /// An unknown month, or an Adar variant that does not exist in the year.
    InvalidMonth,
    /// A relative (year-less) date used where a concrete date is required.
    TypeMismatch,
    /// A search or table lookup that produced no result.
    NotFound,
    /// Internal invariant violation.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate => "InvalidDate",
            Self::InvalidMonth => "InvalidMonth",
            Self::TypeMismatch => "TypeMismatch",
            Self::NotFound => "NotFound",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `hdate_rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HdateError {
    kind: ErrorKind,
    msg: ErrorMessage,
}

impl HdateError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessage::None,
        }
    }

    /// Create an invalid date error.
    #[inline]
    #[must_use]
    pub const fn invalid_date() -> Self {
        Self::new(ErrorKind::InvalidDate)
    }

    /// Create an invalid month error.
    #[inline]
    #[must_use]
    pub const fn invalid_month() -> Self {
        Self::new(ErrorKind::InvalidMonth)
    }

    /// Create a type mismatch error.
    #[inline]
    #[must_use]
    pub const fn type_mismatch() -> Self {
        Self::new(ErrorKind::TypeMismatch)
    }

    /// Create a not found error.
    #[inline]
    #[must_use]
    pub const fn not_found() -> Self {
        Self::new(ErrorKind::NotFound)
    }

    /// Creates an assertion error
    #[inline]
    #[must_use]
    #[cfg_attr(debug_assertions, track_caller)]
    pub(crate) const fn assert() -> Self {
        #[cfg(not(debug_assertions))]
        {
            Self::new(ErrorKind::Assert)
        }
        #[cfg(debug_assertions)]
        Self {
            kind: ErrorKind::Assert,
            msg: ErrorMessage::String(core::panic::Location::caller().file()),
        }
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message(mut self, msg: &'static str) -> Self {
        self.msg = ErrorMessage::String(msg);
        self
    }

    /// Add a message enum to the error.
    #[inline]
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = msg;
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> &'static str {
        self.msg.to_str()
    }
}

impl fmt::Display for HdateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.to_str();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl std::error::Error for HdateError {}

/// The error message
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum ErrorMessage {
    // Construction
    DayOutOfRange,
    MonthNotInYear,
    UnknownMonth,
    UnknownMonthCode,
    YearOutOfRange,
    GregorianOutOfRange,

    // Relative dates
    RelativeDateNeedsYear,
    BothDatesRelative,

    // Lookups
    HolidayScanExhausted,
    YearTypeNotInTable,
    ReadingIndexOutOfRange,
    OverlappingYearType,
    EmptyReadingSequence,

    // Typed
    None,
    String(&'static str),
}

impl ErrorMessage {
    pub(crate) fn to_str(self) -> &'static str {
        match self {
            Self::DayOutOfRange => "Day is not within the valid range for the month.",
            Self::MonthNotInYear => "Month does not exist in the given year.",
            Self::UnknownMonth => "Unrecognized month value.",
            Self::UnknownMonthCode => "Unrecognized month code.",
            Self::YearOutOfRange => "Hebrew year must be positive.",
            Self::GregorianOutOfRange => "Gregorian date is not valid.",
            Self::RelativeDateNeedsYear => "A relative date has no year to anchor it.",
            Self::BothDatesRelative => "Cannot take the difference of two relative dates.",
            Self::HolidayScanExhausted => "No matching holiday within the scan limit.",
            Self::YearTypeNotInTable => "Year type has no reading sequence.",
            Self::ReadingIndexOutOfRange => "Week index exceeds the reading sequence.",
            Self::OverlappingYearType => "Year type appears in more than one reading sequence.",
            Self::EmptyReadingSequence => "Reading sequence has no entries.",
            Self::None => "",
            Self::String(s) => s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = HdateError::invalid_date().with_message("Day 31 is not valid.");
        assert_eq!(err.to_string(), "InvalidDate: Day 31 is not valid.");
        assert_eq!(err.kind(), ErrorKind::InvalidDate);

        let bare = HdateError::not_found();
        assert_eq!(bare.to_string(), "NotFound");
        assert_eq!(bare.into_message(), "");
    }

    #[test]
    fn enum_messages() {
        let err = HdateError::type_mismatch().with_enum(ErrorMessage::BothDatesRelative);
        assert_eq!(
            err.into_message(),
            "Cannot take the difference of two relative dates."
        );
    }
}
