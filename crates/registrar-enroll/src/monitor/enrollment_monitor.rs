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

use crate::{registrar::RegistrarError, stats::RegistrarStatistics};
use registrar_model::{course::Course, person::Student};

/// Trait for observing the outcome of registrar operations.
///
/// Every callback fires after the state change it reports, and receives the
/// already-updated statistics.
pub trait EnrollmentMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when a student takes a roster seat on request.
    fn on_enrolled(&mut self, student: &Student, course: &Course, statistics: &RegistrarStatistics);
    /// Called when a request lands on the waitlist at `position`.
    fn on_waitlisted(
        &mut self,
        student: &Student,
        course: &Course,
        position: usize,
        statistics: &RegistrarStatistics,
    );
    /// Called when a student leaves a roster or waitlist.
    fn on_dropped(&mut self, student: &Student, course: &Course, statistics: &RegistrarStatistics);
    /// Called when a waitlisted student is moved onto the roster.
    fn on_promoted(&mut self, student: &Student, course: &Course, statistics: &RegistrarStatistics);
    /// Called when an enrollment request is rejected.
    fn on_rejected(
        &mut self,
        student: &Student,
        course: &Course,
        reason: &RegistrarError,
        statistics: &RegistrarStatistics,
    );
}

impl std::fmt::Debug for dyn EnrollmentMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EnrollmentMonitor({})", self.name())
    }
}

impl std::fmt::Display for dyn EnrollmentMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "EnrollmentMonitor({})", self.name())
    }
}
