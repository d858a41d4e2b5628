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
    config::{ConfigError, RegistrarConfig},
    monitor::enrollment_monitor::EnrollmentMonitor,
    registrar::RegistrarError,
    stats::RegistrarStatistics,
};
use registrar_model::{course::Course, person::Student};

/// Reports registrar events through the `log` facade.
///
/// Successful events are emitted at the configured level; rejections are
/// always emitted at `warn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogMonitor {
    level: log::Level,
}

impl LogMonitor {
    pub fn new(level: log::Level) -> Self {
        Self { level }
    }

    /// Creates a monitor at the level named by `config.log_level`.
    pub fn from_config(config: &RegistrarConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.log_level()?))
    }

    #[inline]
    pub fn level(&self) -> log::Level {
        self.level
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(log::Level::Info)
    }
}

impl std::fmt::Display for LogMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "LogMonitor(level: {})", self.level)
    }
}

impl EnrollmentMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enrolled(&mut self, student: &Student, course: &Course, statistics: &RegistrarStatistics) {
        log::log!(
            self.level,
            "{} enrolled in {}-{} (enrollments: {})",
            student.id(),
            course.name(),
            course.section(),
            statistics.enrollments
        );
    }

    fn on_waitlisted(
        &mut self,
        student: &Student,
        course: &Course,
        position: usize,
        statistics: &RegistrarStatistics,
    ) {
        log::log!(
            self.level,
            "{} waitlisted for {}-{} at position {} (waitlistings: {})",
            student.id(),
            course.name(),
            course.section(),
            position,
            statistics.waitlistings
        );
    }

    fn on_dropped(&mut self, student: &Student, course: &Course, statistics: &RegistrarStatistics) {
        log::log!(
            self.level,
            "{} dropped {}-{} (drops: {})",
            student.id(),
            course.name(),
            course.section(),
            statistics.drops
        );
    }

    fn on_promoted(&mut self, student: &Student, course: &Course, statistics: &RegistrarStatistics) {
        log::log!(
            self.level,
            "{} promoted from the waitlist of {}-{} (promotions: {})",
            student.id(),
            course.name(),
            course.section(),
            statistics.promotions
        );
    }

    fn on_rejected(
        &mut self,
        student: &Student,
        course: &Course,
        reason: &RegistrarError,
        statistics: &RegistrarStatistics,
    ) {
        log::warn!(
            "{} could not enroll in {}-{}: {} (rejections: {})",
            student.id(),
            course.name(),
            course.section(),
            reason,
            statistics.rejections
        );
    }
}
