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

//! Catalog courses.
//!
//! A `Course` is the concrete `Activity` the registrar schedules. Courses are
//! assembled with `CourseBuilder`, which validates every field eagerly in
//! `build` so that an invalid course can never reach a roster or schedule.

use crate::{
    activity::{Activity, ActivityRow},
    meeting::Meeting,
};

/// Fewest credit hours a course may carry.
pub const MIN_CREDITS: u32 = 1;
/// Most credit hours a course may carry.
pub const MAX_CREDITS: u32 = 5;
/// Number of digits in a section identifier.
pub const SECTION_LENGTH: usize = 3;

/// The error type for course construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseError {
    #[error("course name must not be empty")]
    EmptyName,
    #[error("course title must not be empty")]
    EmptyTitle,
    #[error("section '{0}' must be exactly three digits")]
    InvalidSection(String),
    #[error("{0} credits is outside 1..=5")]
    InvalidCredits(u32),
    #[error("instructor id must not be empty")]
    EmptyInstructor,
}

/// A course section offered in the catalog.
///
/// Equality compares every field; the duplicate relation used by schedules
/// (`Activity::is_duplicate`) compares course names only.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Course {
    name: String,
    title: String,
    section: String,
    credits: u32,
    instructor_id: Option<String>,
    meeting: Meeting,
}

impl Course {
    /// Returns the course name, e.g. `CSC216`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the three-digit section.
    #[inline]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Returns the assigned instructor's id, if any.
    #[inline]
    pub fn instructor_id(&self) -> Option<&str> {
        self.instructor_id.as_deref()
    }
}

impl Activity for Course {
    #[inline]
    fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    fn meeting(&self) -> &Meeting {
        &self.meeting
    }

    #[inline]
    fn credits(&self) -> u32 {
        self.credits
    }

    #[inline]
    fn is_duplicate(&self, other: &Self) -> bool {
        self.name == other.name
    }

    fn display_row(&self) -> ActivityRow {
        ActivityRow {
            name: self.name.clone(),
            section: self.section.clone(),
            title: self.title.clone(),
            meeting: self.meeting.to_string(),
        }
    }
}

/// Catalog line format: `name,title,section,credits,instructor,days[,start,end]`
/// with `-` for a missing instructor. The enrollment cap is not part of the
/// course; the registrar owns it.
impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.name,
            self.title,
            self.section,
            self.credits,
            self.instructor_id.as_deref().unwrap_or("-"),
            self.meeting.day_symbols()
        )?;
        if let Meeting::Scheduled { start, end, .. } = self.meeting {
            write!(f, ",{},{}", start.hhmm(), end.hhmm())?;
        }
        Ok(())
    }
}

/// A builder for `Course`.
///
/// Defaults: 3 credits, no instructor, arranged meeting.
///
/// # Examples
///
/// ```rust
/// # use registrar_model::course::CourseBuilder;
/// # use registrar_model::meeting::Meeting;
/// # use registrar_model::activity::Activity;
///
/// let mut builder = CourseBuilder::new("CSC216", "Software Development Fundamentals", "001");
/// builder
///     .set_credits(4)
///     .set_instructor_id("sesmith5")
///     .set_meeting(Meeting::parse("MW", 1330, 1445).unwrap());
/// let course = builder.build().unwrap();
/// assert_eq!(course.credits(), 4);
/// assert_eq!(course.to_string(), "CSC216,Software Development Fundamentals,001,4,sesmith5,MW,1330,1445");
/// ```
#[derive(Clone, Debug)]
pub struct CourseBuilder {
    name: String,
    title: String,
    section: String,
    credits: u32,
    instructor_id: Option<String>,
    meeting: Meeting,
}

impl CourseBuilder {
    /// Default credit hours for a new builder.
    pub const DEFAULT_CREDITS: u32 = 3;

    /// Starts a course with the given identity.
    pub fn new(name: impl Into<String>, title: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            section: section.into(),
            credits: Self::DEFAULT_CREDITS,
            instructor_id: None,
            meeting: Meeting::Arranged,
        }
    }

    /// Sets the credit hours.
    #[inline]
    pub fn set_credits(&mut self, credits: u32) -> &mut Self {
        self.credits = credits;
        self
    }

    /// Assigns an instructor.
    #[inline]
    pub fn set_instructor_id(&mut self, instructor_id: impl Into<String>) -> &mut Self {
        self.instructor_id = Some(instructor_id.into());
        self
    }

    /// Sets the meeting pattern.
    #[inline]
    pub fn set_meeting(&mut self, meeting: Meeting) -> &mut Self {
        self.meeting = meeting;
        self
    }

    /// Validates the fields and produces the course.
    ///
    /// # Errors
    ///
    /// Returns the first `CourseError` found, checking name, title,
    /// section, credits, then instructor id.
    pub fn build(self) -> Result<Course, CourseError> {
        if self.name.trim().is_empty() {
            return Err(CourseError::EmptyName);
        }
        if self.title.trim().is_empty() {
            return Err(CourseError::EmptyTitle);
        }
        if self.section.len() != SECTION_LENGTH
            || !self.section.chars().all(|c| c.is_ascii_digit())
        {
            return Err(CourseError::InvalidSection(self.section));
        }
        if !(MIN_CREDITS..=MAX_CREDITS).contains(&self.credits) {
            return Err(CourseError::InvalidCredits(self.credits));
        }
        if matches!(self.instructor_id.as_deref(), Some(id) if id.trim().is_empty()) {
            return Err(CourseError::EmptyInstructor);
        }

        Ok(Course {
            name: self.name,
            title: self.title,
            section: self.section,
            credits: self.credits,
            instructor_id: self.instructor_id,
            meeting: self.meeting,
        })
    }
}
