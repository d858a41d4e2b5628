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

//! # Schedule
//!
//! A person's ordered set of activities. Every insertion re-runs the
//! duplicate and conflict scans against all scheduled activities, so no
//! validity state is cached between calls.

use crate::conflict::{ConflictError, check_conflict};
use registrar_model::activity::{Activity, ActivityRow};

/// Title given to new and reset schedules.
pub const DEFAULT_TITLE: &str = "My Schedule";

/// The error type for schedule insertions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// The same logical offering is already scheduled, in any section.
    #[error("You are already enrolled in {name}")]
    Duplicate { name: String },
    /// The activity overlaps one already scheduled.
    #[error("The course cannot be added due to a conflict: {0}")]
    Conflict(#[from] ConflictError),
    #[error("schedule title must not be empty")]
    EmptyTitle,
}

/// An ordered, duplicate-free, conflict-free list of activities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule<A> {
    title: String,
    default_title: String,
    activities: Vec<A>,
}

impl<A> Default for Schedule<A> {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            default_title: DEFAULT_TITLE.to_string(),
            activities: Vec::new(),
        }
    }
}

impl<A> Schedule<A>
where
    A: Activity + PartialEq + Clone,
{
    /// Creates an empty schedule titled `"My Schedule"`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty schedule with a custom title, which also becomes
    /// the title `reset_schedule` restores.
    ///
    /// # Errors
    ///
    /// `ScheduleError::EmptyTitle` for an empty title.
    pub fn with_title(title: impl Into<String>) -> Result<Self, ScheduleError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }
        Ok(Self {
            default_title: title.clone(),
            title,
            activities: Vec::new(),
        })
    }

    #[inline]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Renames the schedule.
    ///
    /// # Errors
    ///
    /// `ScheduleError::EmptyTitle` for an empty title.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<(), ScheduleError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ScheduleError::EmptyTitle);
        }
        self.title = title;
        Ok(())
    }

    /// Runs the duplicate and conflict scans for `activity`.
    ///
    /// # Errors
    ///
    /// The error `add_course_to_schedule` would return.
    pub fn check_can_add(&self, activity: &A) -> Result<(), ScheduleError> {
        for scheduled in &self.activities {
            if activity.is_duplicate(scheduled) {
                return Err(ScheduleError::Duplicate {
                    name: activity.display_row().name,
                });
            }
            check_conflict(activity, scheduled)?;
        }
        Ok(())
    }

    /// Returns `true` if `activity` is neither a duplicate of nor in conflict
    /// with any scheduled activity.
    #[inline]
    pub fn can_add(&self, activity: &A) -> bool {
        self.check_can_add(activity).is_ok()
    }

    /// Appends `activity` after re-checking duplicates and conflicts.
    ///
    /// # Errors
    ///
    /// `ScheduleError::Duplicate` or `ScheduleError::Conflict`; the schedule
    /// is unchanged on error.
    pub fn add_course_to_schedule(&mut self, activity: A) -> Result<(), ScheduleError> {
        self.check_can_add(&activity)?;
        self.activities.push(activity);
        Ok(())
    }

    /// Removes the activity equal to `activity`. Returns `false` if it was
    /// not scheduled.
    pub fn remove_course_from_schedule(&mut self, activity: &A) -> bool {
        match self.activities.iter().position(|a| a == activity) {
            Some(index) => {
                self.activities.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes every activity and restores the title the schedule was
    /// created with.
    pub fn reset_schedule(&mut self) {
        self.activities.clear();
        self.title.clone_from(&self.default_title);
    }

    /// Returns the summed credit hours.
    #[inline]
    pub fn schedule_credits(&self) -> u32 {
        self.activities.iter().map(|a| a.credits()).sum()
    }

    /// Returns one display row per scheduled activity, in schedule order.
    pub fn scheduled_courses(&self) -> Vec<ActivityRow> {
        self.activities.iter().map(|a| a.display_row()).collect()
    }

    #[inline]
    pub fn contains(&self, activity: &A) -> bool {
        self.activities.contains(activity)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, A> {
        self.activities.iter()
    }
}

impl<A> std::fmt::Display for Schedule<A>
where
    A: Activity,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}:", self.title)?;
        for activity in &self.activities {
            writeln!(f, "  {}", activity.display_row())?;
        }
        Ok(())
    }
}
