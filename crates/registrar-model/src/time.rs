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

use std::str::FromStr;

/// The error type for clock time construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// The value is negative.
    #[error("clock time {0} is negative")]
    Negative(i32),
    /// The hour component is not in `0..24`.
    #[error("clock time {0} has an hour outside 0..24")]
    HourOutOfRange(i32),
    /// The minute component is not in `0..60`.
    #[error("clock time {0} has a minute outside 0..60")]
    MinuteOutOfRange(i32),
    /// The text is not an integer.
    #[error("clock time '{0}' is not an integer")]
    NotANumber(String),
}

/// A time of day on the 24-hour clock, stored as the `hhmm` integer the
/// catalog uses (`1330` is 1:30PM).
///
/// The hour is always in `0..24` and the minute in `0..60`, so ordering the
/// raw `hhmm` value orders times within a day.
///
/// # Examples
///
/// ```rust
/// # use registrar_model::time::ClockTime;
///
/// let t = ClockTime::from_hhmm(1330).unwrap();
/// assert_eq!(t.hour(), 13);
/// assert_eq!(t.minute(), 30);
/// assert_eq!(t.to_string(), "1:30PM");
/// assert!(ClockTime::from_hhmm(1360).is_err());
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ClockTime(u16);

impl ClockTime {
    /// 12:00AM, also the placeholder time of arranged meetings.
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Creates a `ClockTime` from an `hhmm` integer.
    ///
    /// # Errors
    ///
    /// Returns a `TimeError` if the value is negative, or its hour or minute
    /// component is out of range.
    pub fn from_hhmm(hhmm: i32) -> Result<Self, TimeError> {
        if hhmm < 0 {
            return Err(TimeError::Negative(hhmm));
        }
        let hour = hhmm / 100;
        let minute = hhmm % 100;
        if hour >= 24 {
            return Err(TimeError::HourOutOfRange(hhmm));
        }
        if minute >= 60 {
            return Err(TimeError::MinuteOutOfRange(hhmm));
        }
        Ok(ClockTime(hhmm as u16))
    }

    /// Returns the raw `hhmm` value.
    #[inline]
    pub const fn hhmm(&self) -> u16 {
        self.0
    }

    /// Returns the hour component in `0..24`.
    #[inline]
    pub const fn hour(&self) -> u16 {
        self.0 / 100
    }

    /// Returns the minute component in `0..60`.
    #[inline]
    pub const fn minute(&self) -> u16 {
        self.0 % 100
    }

    /// Returns `true` for 12:00AM.
    #[inline]
    pub const fn is_midnight(&self) -> bool {
        self.0 == 0
    }
}

impl FromStr for ClockTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<i32>()
            .map_err(|_| TimeError::NotANumber(s.to_string()))?;
        Self::from_hhmm(raw)
    }
}

impl TryFrom<i32> for ClockTime {
    type Error = TimeError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_hhmm(value)
    }
}

impl std::fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClockTime({:04})", self.0)
    }
}

/// Formats on the 12-hour clock with zero-padded minutes: `9:05AM`,
/// `12:00PM`, `12:00AM`.
impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (hour, suffix) = match self.hour() {
            0 => (12, "AM"),
            h @ 1..=11 => (h, "AM"),
            12 => (12, "PM"),
            h => (h - 12, "PM"),
        };
        write!(f, "{}:{:02}{}", hour, self.minute(), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_boundaries() {
        assert_eq!(ClockTime::from_hhmm(0), Ok(ClockTime::MIDNIGHT));
        assert_eq!(ClockTime::from_hhmm(2359).map(|t| t.hhmm()), Ok(2359));
        assert_eq!(ClockTime::from_hhmm(59).map(|t| t.minute()), Ok(59));
    }

    #[test]
    fn test_invalid_components() {
        assert_eq!(ClockTime::from_hhmm(-1), Err(TimeError::Negative(-1)));
        assert_eq!(
            ClockTime::from_hhmm(2400),
            Err(TimeError::HourOutOfRange(2400))
        );
        assert_eq!(
            ClockTime::from_hhmm(1260),
            Err(TimeError::MinuteOutOfRange(1260))
        );
    }

    #[test]
    fn test_display_twelve_hour_clock() {
        let fmt = |v| ClockTime::from_hhmm(v).unwrap().to_string();
        assert_eq!(fmt(0), "12:00AM");
        assert_eq!(fmt(905), "9:05AM");
        assert_eq!(fmt(1200), "12:00PM");
        assert_eq!(fmt(1330), "1:30PM");
        assert_eq!(fmt(2359), "11:59PM");
    }

    #[test]
    fn test_parse_from_str() {
        assert_eq!("1445".parse::<ClockTime>().map(|t| t.hhmm()), Ok(1445));
        assert_eq!(
            "noon".parse::<ClockTime>(),
            Err(TimeError::NotANumber("noon".to_string()))
        );
    }

    #[test]
    fn test_error_clones_with_owned_text() {
        let err = "9am".parse::<ClockTime>().unwrap_err();
        let copy = err.clone();
        assert_eq!(copy, TimeError::NotANumber("9am".to_string()));
        assert_eq!(err.to_string(), "clock time '9am' is not an integer");
    }

    #[test]
    fn test_ordering_matches_time_of_day() {
        let early = ClockTime::from_hhmm(800).unwrap();
        let late = ClockTime::from_hhmm(1715).unwrap();
        assert!(early < late);
        assert_eq!(format!("{:?}", early), "ClockTime(0800)");
    }
}
