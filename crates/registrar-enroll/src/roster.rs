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

//! # Enrollment Roster
//!
//! The per-course enrollment state machine: a capacity-bounded roster plus a
//! fixed-size FIFO waitlist.
//!
//! ## Invariants
//!
//! - `roster.len() <= enrollment_cap` and `enrollment_cap` is in
//!   `MIN_ENROLLMENT..=MAX_ENROLLMENT`; the cap never drops below the current
//!   roster size.
//! - `waitlist.len() <= WAITLIST_CAPACITY`.
//! - A person is on at most one of the two lists.
//!
//! ## Promotion
//!
//! Dropping a roster member moves the waitlist head onto the roster. The
//! roster cannot see schedules, so the promoted person is handed back in
//! `DropOutcome::Dropped` and the caller updates that person's schedule.

use registrar_core::collections::{
    bounded_list::BoundedList, bounded_queue::BoundedQueue, error::CollectionError,
};

/// Smallest allowed enrollment cap.
pub const MIN_ENROLLMENT: usize = 10;
/// Largest allowed enrollment cap.
pub const MAX_ENROLLMENT: usize = 250;
/// Fixed waitlist size, independent of the enrollment cap.
pub const WAITLIST_CAPACITY: usize = 10;

/// Where an enrollment request landed.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Placement {
    /// A seat on the roster.
    Enrolled,
    /// A spot on the waitlist, `position` 0 being the next to be promoted.
    Waitlisted { position: usize },
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Placement::Enrolled => write!(f, "Enrolled"),
            Placement::Waitlisted { position } => write!(f, "Waitlisted(position: {})", position),
        }
    }
}

/// What a successful drop did.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DropOutcome<P> {
    /// The person left the roster; `promoted` is the former waitlist head now
    /// holding the freed seat, if the waitlist was non-empty.
    Dropped { promoted: Option<P> },
    /// The person left the waitlist; nobody was promoted.
    LeftWaitlist,
}

/// The error type for roster operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("roster and waitlist are full")]
    Full,
    #[error("already enrolled")]
    AlreadyEnrolled,
    #[error("already on the waitlist")]
    AlreadyWaitlisted,
    #[error("not enrolled or waitlisted")]
    NotEnrolled,
    #[error("invalid enrollment cap {requested} (allowed 10..=250, currently enrolled {enrolled})")]
    InvalidCapacity { requested: usize, enrolled: usize },
    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// Roster and waitlist for one course.
#[derive(Clone)]
pub struct EnrollmentRoster<P> {
    roster: BoundedList<P>,
    waitlist: BoundedQueue<P>,
}

impl<P> EnrollmentRoster<P>
where
    P: PartialEq + Clone,
{
    /// Creates an empty roster with the given enrollment cap.
    ///
    /// # Errors
    ///
    /// `RosterError::InvalidCapacity` if `enrollment_cap` is outside `10..=250`.
    pub fn new(enrollment_cap: usize) -> Result<Self, RosterError> {
        Self::validate_cap(enrollment_cap, 0)?;
        Ok(Self {
            roster: BoundedList::new(enrollment_cap),
            waitlist: BoundedQueue::new(WAITLIST_CAPACITY),
        })
    }

    #[inline]
    fn validate_cap(requested: usize, enrolled: usize) -> Result<(), RosterError> {
        if !(MIN_ENROLLMENT..=MAX_ENROLLMENT).contains(&requested) || requested < enrolled {
            return Err(RosterError::InvalidCapacity {
                requested,
                enrolled,
            });
        }
        Ok(())
    }

    /// Returns the enrollment cap.
    #[inline]
    pub fn enrollment_cap(&self) -> usize {
        self.roster.capacity()
    }

    /// Changes the enrollment cap.
    ///
    /// # Errors
    ///
    /// `RosterError::InvalidCapacity` if `cap` is outside `10..=250` or below
    /// the number of enrolled people.
    pub fn set_enrollment_cap(&mut self, cap: usize) -> Result<(), RosterError> {
        Self::validate_cap(cap, self.roster.len())?;
        self.roster.set_capacity(cap)?;
        Ok(())
    }

    /// Returns the number of free roster seats.
    #[inline]
    pub fn open_seats(&self) -> usize {
        self.roster.remaining()
    }

    /// Returns the number of people on the roster.
    #[inline]
    pub fn number_enrolled(&self) -> usize {
        self.roster.len()
    }

    /// Returns the number of people on the waitlist.
    #[inline]
    pub fn number_on_waitlist(&self) -> usize {
        self.waitlist.len()
    }

    #[inline]
    pub fn is_enrolled(&self, person: &P) -> bool {
        self.roster.contains(person)
    }

    #[inline]
    pub fn is_waitlisted(&self, person: &P) -> bool {
        self.waitlist.contains(person)
    }

    /// Returns the person's waitlist position, 0 being next in line.
    #[inline]
    pub fn waitlist_position(&self, person: &P) -> Option<usize> {
        self.waitlist.position(person)
    }

    /// Returns `true` if `person` is on neither list and either a seat or a
    /// waitlist spot is free.
    pub fn can_enroll(&self, person: &P) -> bool {
        if self.is_enrolled(person) || self.is_waitlisted(person) {
            return false;
        }
        self.open_seats() > 0 || !self.waitlist.is_full()
    }

    /// Enrolls `person`, on the roster if a seat is free, otherwise on the
    /// waitlist.
    ///
    /// # Errors
    ///
    /// `AlreadyEnrolled` / `AlreadyWaitlisted` if the person is present,
    /// `Full` if both lists are full. The roster is unchanged on error.
    pub fn enroll(&mut self, person: P) -> Result<Placement, RosterError> {
        if self.is_enrolled(&person) {
            return Err(RosterError::AlreadyEnrolled);
        }
        if self.is_waitlisted(&person) {
            return Err(RosterError::AlreadyWaitlisted);
        }

        if !self.roster.is_full() {
            self.roster.push(person)?;
            return Ok(Placement::Enrolled);
        }
        if !self.waitlist.is_full() {
            self.waitlist.enqueue(person)?;
            return Ok(Placement::Waitlisted {
                position: self.waitlist.len() - 1,
            });
        }
        Err(RosterError::Full)
    }

    /// Removes `person` from whichever list holds them.
    ///
    /// Leaving the roster promotes the waitlist head into the freed seat.
    /// Leaving the waitlist keeps everyone else in order.
    ///
    /// # Errors
    ///
    /// `RosterError::NotEnrolled` if the person is on neither list.
    pub fn drop(&mut self, person: &P) -> Result<DropOutcome<P>, RosterError> {
        if let Some(index) = self.roster.position(person) {
            self.roster.remove(index)?;
            let promoted = match self.waitlist.dequeue() {
                Ok(next) => {
                    self.roster.push(next.clone())?;
                    Some(next)
                }
                Err(CollectionError::Empty) => None,
                Err(e) => return Err(e.into()),
            };
            return Ok(DropOutcome::Dropped { promoted });
        }

        match self.waitlist.remove_first(|p| p == person) {
            Some(_) => Ok(DropOutcome::LeftWaitlist),
            None => Err(RosterError::NotEnrolled),
        }
    }

    /// Empties both lists, keeping the enrollment cap.
    pub fn clear(&mut self) {
        self.roster.clear();
        self.waitlist.clear();
    }

    /// Iterates over the roster in enrollment order.
    #[inline]
    pub fn roster(&self) -> impl Iterator<Item = &P> {
        self.roster.iter()
    }

    /// Iterates over the waitlist, head first.
    #[inline]
    pub fn waitlist(&self) -> impl Iterator<Item = &P> {
        self.waitlist.iter()
    }
}

impl<P> std::fmt::Debug for EnrollmentRoster<P>
where
    P: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrollmentRoster")
            .field("enrollment_cap", &self.roster.capacity())
            .field("roster", &self.roster.as_slice())
            .field("waitlist", &self.waitlist)
            .finish()
    }
}

impl<P> std::fmt::Display for EnrollmentRoster<P>
where
    P: PartialEq,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EnrollmentRoster(enrolled: {}/{}, waitlisted: {}/{})",
            self.roster.len(),
            self.roster.capacity(),
            self.waitlist.len(),
            self.waitlist.capacity()
        )
    }
}
