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

//! # Conflict Detection
//!
//! Decides whether two activities may share a schedule. Only meeting times
//! matter here; whether two activities are the *same* offering is the
//! schedule's duplicate check, not a conflict.
//!
//! ## Rules
//!
//! Two arranged activities never conflict, and an arranged activity shares no
//! day with anything. For scheduled activities meeting on at least one common
//! day, any of the following is a conflict:
//!
//! - equal start times, or equal end times
//! - one starts exactly when the other ends (back-to-back meetings collide)
//! - one starts strictly inside the other
//!
//! The check is symmetric and never mutates either operand.

use registrar_model::{
    activity::Activity,
    meeting::{Meeting, Weekday},
};
use smallvec::SmallVec;

/// Two activities overlap on at least one shared day.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
#[error("'{first}' conflicts with '{second}' on {}", format_days(.days))]
pub struct ConflictError {
    first: String,
    second: String,
    days: SmallVec<[Weekday; 5]>,
}

impl ConflictError {
    /// Returns the title of the activity being checked.
    #[inline]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Returns the title of the activity it collided with.
    #[inline]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Returns the shared meeting days, in calendar order.
    #[inline]
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }
}

fn format_days(days: &[Weekday]) -> String {
    days.iter().map(|day| day.symbol()).collect()
}

/// Returns the shared days on which `a` and `b` overlap, or an empty vector.
fn overlapping_days(a: &Meeting, b: &Meeting) -> SmallVec<[Weekday; 5]> {
    let shared = a.days().intersection(b.days());
    if shared.is_empty() {
        return SmallVec::new();
    }

    let (a_start, a_end) = (a.start(), a.end());
    let (b_start, b_end) = (b.start(), b.end());
    let overlaps = a_start == b_start
        || a_start == b_end
        || b_start == a_end
        || a_end == b_end
        || (a_start < b_start && b_start < a_end)
        || (b_start < a_start && a_start < b_end);

    if overlaps {
        shared.iter().collect()
    } else {
        SmallVec::new()
    }
}

/// Checks two bare meetings, labelling a conflict with the given titles.
///
/// # Errors
///
/// Returns a `ConflictError` naming the shared days if the meetings overlap.
pub fn check_meetings(
    first_title: &str,
    first: &Meeting,
    second_title: &str,
    second: &Meeting,
) -> Result<(), ConflictError> {
    if first.is_arranged() && second.is_arranged() {
        return Ok(());
    }
    let days = overlapping_days(first, second);
    if days.is_empty() {
        return Ok(());
    }
    Err(ConflictError {
        first: first_title.to_string(),
        second: second_title.to_string(),
        days,
    })
}

/// Checks whether `candidate` conflicts with `existing`.
///
/// # Errors
///
/// Returns a `ConflictError` if the activities overlap on a shared day.
///
/// # Examples
///
/// ```rust
/// # use registrar_enroll::conflict::check_conflict;
/// # use registrar_model::course::CourseBuilder;
/// # use registrar_model::meeting::Meeting;
///
/// let mut a = CourseBuilder::new("CSC216", "Programming Concepts", "001");
/// a.set_meeting(Meeting::parse("MW", 1330, 1445).unwrap());
/// let mut b = CourseBuilder::new("CSC226", "Discrete Mathematics", "001");
/// b.set_meeting(Meeting::parse("MW", 1445, 1600).unwrap());
///
/// let err = check_conflict(&a.build().unwrap(), &b.build().unwrap()).unwrap_err();
/// assert_eq!(err.to_string(), "'Programming Concepts' conflicts with 'Discrete Mathematics' on MW");
/// ```
#[inline]
pub fn check_conflict<A>(candidate: &A, existing: &A) -> Result<(), ConflictError>
where
    A: Activity,
{
    check_meetings(
        candidate.title(),
        candidate.meeting(),
        existing.title(),
        existing.meeting(),
    )
}

/// Returns `true` if the two activities conflict.
#[inline]
pub fn conflicts<A>(a: &A, b: &A) -> bool
where
    A: Activity,
{
    check_conflict(a, b).is_err()
}
