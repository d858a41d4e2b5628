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

//! People known to the registrar.
//!
//! Students and faculty share an `Identity` (names, id, email). Equality and
//! hashing use identity fields plus the per-role limit, which makes a
//! `Student` usable directly as the element type of rosters and waitlists.

/// Most credit hours a student may carry, and the default limit.
pub const MAX_STUDENT_CREDITS: u32 = 18;
/// Fewest credit hours a student's limit may be set to.
pub const MIN_STUDENT_CREDITS: u32 = 3;
/// Fewest courses a faculty member may be assigned as a limit.
pub const MIN_FACULTY_COURSES: usize = 1;
/// Most courses a faculty member may be assigned as a limit.
pub const MAX_FACULTY_COURSES: usize = 3;

/// The error type for person construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersonError {
    #[error("first name must not be empty")]
    EmptyFirstName,
    #[error("last name must not be empty")]
    EmptyLastName,
    #[error("id must not be empty")]
    EmptyId,
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("max credits {0} is outside 3..=18")]
    InvalidMaxCredits(u32),
    #[error("max courses {0} is outside 1..=3")]
    InvalidMaxCourses(usize),
}

/// Name, id and email shared by every person.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Identity {
    first_name: String,
    last_name: String,
    id: String,
    email: String,
}

impl Identity {
    /// Validates and creates an identity.
    ///
    /// The email must contain an `@` followed somewhere later by a `.`.
    ///
    /// # Errors
    ///
    /// Returns the first `PersonError` found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use registrar_model::person::{Identity, PersonError};
    ///
    /// assert!(Identity::new("Ada", "Lovelace", "alovela", "alovela@ncsu.edu").is_ok());
    /// assert_eq!(
    ///     Identity::new("Ada", "Lovelace", "alovela", "alovela.ncsu@edu"),
    ///     Err(PersonError::InvalidEmail("alovela.ncsu@edu".to_string()))
    /// );
    /// ```
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        id: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, PersonError> {
        let (first_name, last_name, id, email) =
            (first_name.into(), last_name.into(), id.into(), email.into());
        if first_name.is_empty() {
            return Err(PersonError::EmptyFirstName);
        }
        if last_name.is_empty() {
            return Err(PersonError::EmptyLastName);
        }
        if id.is_empty() {
            return Err(PersonError::EmptyId);
        }
        let valid_email = email
            .find('@')
            .is_some_and(|at| email[at..].contains('.'));
        if !valid_email {
            return Err(PersonError::InvalidEmail(email));
        }
        Ok(Self {
            first_name,
            last_name,
            id,
            email,
        })
    }

    #[inline]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[inline]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn email(&self) -> &str {
        &self.email
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.first_name, self.last_name, self.id)
    }
}

/// A student with a credit-hour limit.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Student {
    identity: Identity,
    max_credits: u32,
}

impl Student {
    /// Creates a student with an explicit credit limit.
    ///
    /// # Errors
    ///
    /// `PersonError::InvalidMaxCredits` if `max_credits` is outside `3..=18`.
    pub fn new(identity: Identity, max_credits: u32) -> Result<Self, PersonError> {
        if !(MIN_STUDENT_CREDITS..=MAX_STUDENT_CREDITS).contains(&max_credits) {
            return Err(PersonError::InvalidMaxCredits(max_credits));
        }
        Ok(Self {
            identity,
            max_credits,
        })
    }

    /// Creates a student with the default limit of 18 credits.
    #[inline]
    pub fn with_default_credits(identity: Identity) -> Self {
        Self {
            identity,
            max_credits: MAX_STUDENT_CREDITS,
        }
    }

    #[inline]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    #[inline]
    pub fn id(&self) -> &str {
        self.identity.id()
    }

    /// Returns the credit-hour limit.
    #[inline]
    pub fn max_credits(&self) -> u32 {
        self.max_credits
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Student({}, max credits: {})", self.identity, self.max_credits)
    }
}

/// A faculty member with a course-load limit.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Faculty {
    identity: Identity,
    max_courses: usize,
}

impl Faculty {
    /// Creates a faculty member.
    ///
    /// # Errors
    ///
    /// `PersonError::InvalidMaxCourses` if `max_courses` is outside `1..=3`.
    pub fn new(identity: Identity, max_courses: usize) -> Result<Self, PersonError> {
        if !(MIN_FACULTY_COURSES..=MAX_FACULTY_COURSES).contains(&max_courses) {
            return Err(PersonError::InvalidMaxCourses(max_courses));
        }
        Ok(Self {
            identity,
            max_courses,
        })
    }

    #[inline]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    #[inline]
    pub fn id(&self) -> &str {
        self.identity.id()
    }

    /// Returns how many courses this faculty member should teach at most.
    #[inline]
    pub fn max_courses(&self) -> usize {
        self.max_courses
    }
}

impl std::fmt::Display for Faculty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Faculty({}, max courses: {})", self.identity, self.max_courses)
    }
}
