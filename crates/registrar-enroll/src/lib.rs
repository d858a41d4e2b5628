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

//! # Registrar Enrollment Engine
//!
//! Decides whether a student may be bound to a course without breaking
//! capacity limits or time overlaps, and keeps waitlist promotion strictly
//! first-in first-out.
//!
//! ## Components
//!
//! - **`conflict`**: pure overlap test between two activities' meetings.
//! - **`roster`**: `EnrollmentRoster`, the per-course roster plus waitlist.
//! - **`schedule`**: `Schedule`, a person's duplicate-free, conflict-free
//!   activity list.
//! - **`registrar`**: `Registrar`, the context owning catalog, directory,
//!   rosters and schedules; enrollments and drops are atomic here.
//! - **`monitor`**: `EnrollmentMonitor` observers (no-op, composite, log).
//! - **`stats`**: `RegistrarStatistics` counters.
//! - **`config`**: `RegistrarConfig`, loaded from TOML.
//!
//! ## Example
//!
//! ```rust
//! use registrar_enroll::{registrar::Registrar, roster::Placement};
//! use registrar_model::{course::CourseBuilder, meeting::Meeting, person::Identity};
//!
//! let mut registrar = Registrar::default();
//! let mut course = CourseBuilder::new("CSC216", "Programming Concepts", "001");
//! course.set_meeting(Meeting::parse("MW", 1330, 1445).unwrap());
//! let csc216 = registrar.add_course(course.build().unwrap()).unwrap();
//!
//! let ada = registrar
//!     .add_student_with_defaults(Identity::new("Ada", "Lovelace", "alovela", "alovela@ncsu.edu").unwrap())
//!     .unwrap();
//! assert_eq!(registrar.enroll_student_in_course(ada, csc216), Ok(Placement::Enrolled));
//! assert_eq!(registrar.student_schedule(ada).unwrap().schedule_credits(), 3);
//! ```

pub mod config;
pub mod conflict;
pub mod monitor;
pub mod registrar;
pub mod roster;
pub mod schedule;
pub mod stats;
