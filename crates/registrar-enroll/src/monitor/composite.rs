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

//! Monitoring combinators
//!
//! Provides `CompositeMonitor`, a fan-out monitor that forwards every event to
//! its children in insertion order. This lets a logger and a statistics
//! collector observe the same registrar.

use crate::{
    monitor::enrollment_monitor::EnrollmentMonitor, registrar::RegistrarError,
    stats::RegistrarStatistics,
};
use registrar_model::{course::Course, person::Student};

/// An enrollment monitor that forwards events to all of its children.
pub struct CompositeMonitor<'a> {
    monitors: Vec<Box<dyn EnrollmentMonitor + 'a>>,
}

impl<'a> Default for CompositeMonitor<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CompositeMonitor<'a> {
    /// Creates a new empty `CompositeMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: EnrollmentMonitor + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn EnrollmentMonitor + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn EnrollmentMonitor + 'a>] {
        &self.monitors
    }

    /// Returns the number of child monitors.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a> FromIterator<Box<dyn EnrollmentMonitor + 'a>> for CompositeMonitor<'a> {
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn EnrollmentMonitor + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a> EnrollmentMonitor for CompositeMonitor<'a> {
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeMonitor"
    }

    fn on_enrolled(&mut self, student: &Student, course: &Course, statistics: &RegistrarStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_enrolled(student, course, statistics);
        }
    }

    fn on_waitlisted(
        &mut self,
        student: &Student,
        course: &Course,
        position: usize,
        statistics: &RegistrarStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_waitlisted(student, course, position, statistics);
        }
    }

    fn on_dropped(&mut self, student: &Student, course: &Course, statistics: &RegistrarStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_dropped(student, course, statistics);
        }
    }

    fn on_promoted(&mut self, student: &Student, course: &Course, statistics: &RegistrarStatistics) {
        for monitor in &mut self.monitors {
            monitor.on_promoted(student, course, statistics);
        }
    }

    fn on_rejected(
        &mut self,
        student: &Student,
        course: &Course,
        reason: &RegistrarError,
        statistics: &RegistrarStatistics,
    ) {
        for monitor in &mut self.monitors {
            monitor.on_rejected(student, course, reason, statistics);
        }
    }
}

impl std::fmt::Debug for CompositeMonitor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CompositeMonitor(monitors: {})", self.monitors.len())
    }
}
