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

/// Counters collected by a `Registrar` over its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrarStatistics {
    /// Requests that ended with a roster seat.
    pub enrollments: u64,
    /// Requests that ended on a waitlist.
    pub waitlistings: u64,
    /// Removals from a roster or waitlist, including cascaded ones.
    pub drops: u64,
    /// Waitlisted students moved onto a roster.
    pub promotions: u64,
    /// Requests rejected without any state change.
    pub rejections: u64,
}

impl RegistrarStatistics {
    #[inline]
    pub fn on_enrollment(&mut self) {
        self.enrollments = self.enrollments.saturating_add(1);
    }

    #[inline]
    pub fn on_waitlisting(&mut self) {
        self.waitlistings = self.waitlistings.saturating_add(1);
    }

    #[inline]
    pub fn on_drop(&mut self) {
        self.drops = self.drops.saturating_add(1);
    }

    #[inline]
    pub fn on_promotion(&mut self) {
        self.promotions = self.promotions.saturating_add(1);
    }

    #[inline]
    pub fn on_rejection(&mut self) {
        self.rejections = self.rejections.saturating_add(1);
    }

    /// Returns the number of requests seen, accepted or not.
    #[inline]
    pub fn requests(&self) -> u64 {
        self.enrollments
            .saturating_add(self.waitlistings)
            .saturating_add(self.rejections)
    }
}

impl std::fmt::Display for RegistrarStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Registrar Statistics:")?;
        writeln!(f, "  Enrollments:          {}", self.enrollments)?;
        writeln!(f, "  Waitlistings:         {}", self.waitlistings)?;
        writeln!(f, "  Drops:                {}", self.drops)?;
        writeln!(f, "  Promotions:           {}", self.promotions)?;
        writeln!(f, "  Rejections:           {}", self.rejections)?;
        Ok(())
    }
}
