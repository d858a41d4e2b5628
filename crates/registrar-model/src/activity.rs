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

use crate::meeting::Meeting;

/// A time-bounded, day-tagged offering that can appear on a schedule.
///
/// Two questions are asked of activities, and they are deliberately
/// independent:
///
/// - `is_duplicate`: do two activities refer to the same logical offering
///   (for courses: the same course name, whatever the section)?
/// - conflict (see `registrar_enroll::conflict`): do their meetings overlap?
pub trait Activity {
    /// Returns the descriptive title.
    fn title(&self) -> &str;

    /// Returns when the activity meets.
    fn meeting(&self) -> &Meeting;

    /// Returns the credit-hour weight counted against a student's limit.
    fn credits(&self) -> u32;

    /// Returns `true` if `other` is the same logical offering.
    fn is_duplicate(&self, other: &Self) -> bool;

    /// Returns the short tabular representation used by schedule views.
    fn display_row(&self) -> ActivityRow;
}

/// One row of a tabular schedule or catalog view.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ActivityRow {
    /// The logical offering name, e.g. `CSC216`.
    pub name: String,
    /// The section, e.g. `001`.
    pub section: String,
    /// The descriptive title.
    pub title: String,
    /// The rendered meeting string, e.g. `MW 1:30PM-2:45PM` or `Arranged`.
    pub meeting: String,
}

impl std::fmt::Display for ActivityRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} | {} | {}",
            self.name, self.section, self.title, self.meeting
        )
    }
}
