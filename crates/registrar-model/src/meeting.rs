// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Meeting patterns: which weekdays an activity meets and between which
//! clock times.
//!
//! A `Meeting` is either `Arranged` (no fixed days or times, written `"A"` in
//! catalog data) or `Scheduled` on a non-empty `DaySet` from `start` to `end`.
//! Day sets are parsed from the catalog's single-letter symbols
//! (`M`, `T`, `W`, `H`, `F`); each symbol may appear at most once.

use crate::time::{ClockTime, TimeError};
use std::str::FromStr;

/// A weekday on which an activity may meet.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in calendar order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Returns the catalog symbol (`M`, `T`, `W`, `H` or `F`).
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Weekday::Monday => 'M',
            Weekday::Tuesday => 'T',
            Weekday::Wednesday => 'W',
            Weekday::Thursday => 'H',
            Weekday::Friday => 'F',
        }
    }

    /// Parses a catalog symbol.
    #[inline]
    pub const fn from_symbol(symbol: char) -> Option<Weekday> {
        match symbol {
            'M' => Some(Weekday::Monday),
            'T' => Some(Weekday::Tuesday),
            'W' => Some(Weekday::Wednesday),
            'H' => Some(Weekday::Thursday),
            'F' => Some(Weekday::Friday),
            _ => None,
        }
    }

    #[inline(always)]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The error type for meeting pattern construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeetingError {
    /// The day string is empty.
    #[error("meeting days are empty")]
    NoDays,
    /// The day string contains a character that is not a weekday symbol.
    #[error("'{0}' is not a meeting day")]
    UnknownDay(char),
    /// A weekday symbol appears more than once.
    #[error("meeting day '{0}' is listed more than once")]
    RepeatedDay(Weekday),
    /// A start or end time is not a valid clock time.
    #[error("invalid meeting time: {0}")]
    InvalidTime(#[from] TimeError),
    /// The meeting starts after it ends.
    #[error("meeting starts at {start} but ends at {end}")]
    StartAfterEnd { start: ClockTime, end: ClockTime },
    /// An arranged meeting was given start or end times.
    #[error("arranged meetings cannot have start or end times")]
    ArrangedWithTimes,
}

/// A set of weekdays stored as a five-bit mask.
///
/// # Examples
///
/// ```rust
/// # use registrar_model::meeting::{DaySet, Weekday};
///
/// let days: DaySet = "MW".parse().unwrap();
/// assert!(days.contains(Weekday::Monday));
/// assert!(!days.contains(Weekday::Thursday));
/// assert_eq!(days.len(), 2);
/// assert!("MM".parse::<DaySet>().is_err());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    /// The empty set.
    pub const EMPTY: DaySet = DaySet(0);

    /// Builds a set from weekdays, ignoring repeats.
    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = Weekday>,
    {
        days.into_iter()
            .fold(DaySet::EMPTY, |set, day| DaySet(set.0 | day.bit()))
    }

    /// Returns `true` if `day` is in the set.
    #[inline]
    pub const fn contains(&self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// Returns the days present in both sets.
    #[inline]
    pub const fn intersection(&self, other: DaySet) -> DaySet {
        DaySet(self.0 & other.0)
    }

    /// Returns `true` if the sets share at least one day.
    #[inline]
    pub const fn intersects(&self, other: DaySet) -> bool {
        self.0 & other.0 != 0
    }

    /// Returns `true` if the set contains no days.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the number of days in the set.
    #[inline]
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates over the days in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|day| self.contains(*day))
    }
}

impl FromStr for DaySet {
    type Err = MeetingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(MeetingError::NoDays);
        }
        let mut set = DaySet::EMPTY;
        for symbol in s.chars() {
            let day = Weekday::from_symbol(symbol).ok_or(MeetingError::UnknownDay(symbol))?;
            if set.contains(day) {
                return Err(MeetingError::RepeatedDay(day));
            }
            set.0 |= day.bit();
        }
        Ok(set)
    }
}

impl std::fmt::Debug for DaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DaySet({})", self)
    }
}

impl std::fmt::Display for DaySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for day in self.iter() {
            write!(f, "{}", day.symbol())?;
        }
        Ok(())
    }
}

/// When an activity meets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Meeting {
    /// No fixed days or times.
    Arranged,
    /// Meets on `days` from `start` to `end`, with `start <= end`.
    Scheduled {
        days: DaySet,
        start: ClockTime,
        end: ClockTime,
    },
}

impl Meeting {
    /// The catalog symbol for arranged meetings.
    pub const ARRANGED_SYMBOL: &'static str = "A";

    /// Parses a meeting from catalog data: a day string plus `hhmm` start and
    /// end times. The day string `"A"` denotes an arranged meeting, which must
    /// have both times set to `0`.
    ///
    /// # Errors
    ///
    /// Returns a `MeetingError` describing the first violated rule.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use registrar_model::meeting::{Meeting, MeetingError};
    ///
    /// let m = Meeting::parse("MW", 1330, 1445).unwrap();
    /// assert_eq!(m.to_string(), "MW 1:30PM-2:45PM");
    ///
    /// assert_eq!(Meeting::parse("A", 0, 0), Ok(Meeting::Arranged));
    /// assert_eq!(Meeting::parse("A", 800, 0), Err(MeetingError::ArrangedWithTimes));
    /// ```
    pub fn parse(days: &str, start: i32, end: i32) -> Result<Self, MeetingError> {
        if days == Self::ARRANGED_SYMBOL {
            if start != 0 || end != 0 {
                return Err(MeetingError::ArrangedWithTimes);
            }
            return Ok(Meeting::Arranged);
        }
        let days = days.parse::<DaySet>()?;
        Self::scheduled(days, ClockTime::from_hhmm(start)?, ClockTime::from_hhmm(end)?)
    }

    /// Creates a scheduled meeting.
    ///
    /// # Errors
    ///
    /// `NoDays` for an empty day set, `StartAfterEnd` if `start > end`.
    pub fn scheduled(days: DaySet, start: ClockTime, end: ClockTime) -> Result<Self, MeetingError> {
        if days.is_empty() {
            return Err(MeetingError::NoDays);
        }
        if start > end {
            return Err(MeetingError::StartAfterEnd { start, end });
        }
        Ok(Meeting::Scheduled { days, start, end })
    }

    /// Returns `true` for arranged meetings.
    #[inline]
    pub const fn is_arranged(&self) -> bool {
        matches!(self, Meeting::Arranged)
    }

    /// Returns the meeting days; empty for arranged meetings.
    #[inline]
    pub const fn days(&self) -> DaySet {
        match self {
            Meeting::Arranged => DaySet::EMPTY,
            Meeting::Scheduled { days, .. } => *days,
        }
    }

    /// Returns the start time; midnight for arranged meetings.
    #[inline]
    pub const fn start(&self) -> ClockTime {
        match self {
            Meeting::Arranged => ClockTime::MIDNIGHT,
            Meeting::Scheduled { start, .. } => *start,
        }
    }

    /// Returns the end time; midnight for arranged meetings.
    #[inline]
    pub const fn end(&self) -> ClockTime {
        match self {
            Meeting::Arranged => ClockTime::MIDNIGHT,
            Meeting::Scheduled { end, .. } => *end,
        }
    }

    /// Returns the day string as written in catalog data (`"A"` when
    /// arranged).
    pub fn day_symbols(&self) -> String {
        match self {
            Meeting::Arranged => Self::ARRANGED_SYMBOL.to_string(),
            Meeting::Scheduled { days, .. } => days.to_string(),
        }
    }
}

impl std::fmt::Display for Meeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Meeting::Arranged => write!(f, "Arranged"),
            Meeting::Scheduled { days, start, end } => write!(f, "{} {}-{}", days, start, end),
        }
    }
}
