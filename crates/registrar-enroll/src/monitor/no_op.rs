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

use crate::{
    monitor::enrollment_monitor::EnrollmentMonitor, registrar::RegistrarError,
    stats::RegistrarStatistics,
};
use registrar_model::{course::Course, person::Student};

/// A monitor that ignores every event.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct NoOperationMonitor;

impl NoOperationMonitor {
    /// Creates a new `NoOperationMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self
    }
}

impl EnrollmentMonitor for NoOperationMonitor {
    #[inline(always)]
    fn name(&self) -> &str {
        "NoOperationMonitor"
    }

    #[inline(always)]
    fn on_enrolled(&mut self, _student: &Student, _course: &Course, _statistics: &RegistrarStatistics) {}

    #[inline(always)]
    fn on_waitlisted(
        &mut self,
        _student: &Student,
        _course: &Course,
        _position: usize,
        _statistics: &RegistrarStatistics,
    ) {
    }

    #[inline(always)]
    fn on_dropped(&mut self, _student: &Student, _course: &Course, _statistics: &RegistrarStatistics) {}

    #[inline(always)]
    fn on_promoted(&mut self, _student: &Student, _course: &Course, _statistics: &RegistrarStatistics) {}

    #[inline(always)]
    fn on_rejected(
        &mut self,
        _student: &Student,
        _course: &Course,
        _reason: &RegistrarError,
        _statistics: &RegistrarStatistics,
    ) {
    }
}
