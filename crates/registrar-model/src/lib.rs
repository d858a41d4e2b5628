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

//! # Registrar Model
//!
//! The domain data the enrollment engine works on: when activities meet,
//! what a course is, and who the people are.
//!
//! * **`time`**: `ClockTime`, a validated 24-hour `hhmm` time of day.
//! * **`meeting`**: `Weekday`, `DaySet` and `Meeting` (arranged, or scheduled
//!   on a set of days between two clock times).
//! * **`activity`**: the `Activity` trait, the capability schedules and the
//!   conflict detector are written against.
//! * **`course`**: `Course` and its validating `CourseBuilder`.
//! * **`person`**: `Identity`, `Student` (credit limit) and `Faculty`
//!   (course-load limit).
//! * **`index`**: `StudentIndex`, `FacultyIndex` and `CourseIndex` handles.
//!
//! Constructors validate eagerly, so the engine never sees an activity with
//! an out-of-range time or a repeated weekday.

pub mod activity;
pub mod course;
pub mod index;
pub mod meeting;
pub mod person;
pub mod time;
