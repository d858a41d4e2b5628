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

//! # Registrar
//!
//! The application context that ties the catalog, the student and faculty
//! directories, one `EnrollmentRoster` per course and one `Schedule` per
//! person together.
//!
//! Every mutating method takes `&mut self`, so a single call is one atomic
//! transaction over the roster and every schedule it touches. A call that
//! returns an error has changed nothing.
//!
//! ## Guarantees
//!
//! - A student on a course roster has that course on their schedule.
//! - A waitlisted student does not have the course on their schedule until
//!   promoted.
//! - When a promoted student can no longer take the course (conflict,
//!   duplicate or credit limit), they are dropped in turn and the next
//!   waitlisted student is tried.

use crate::{
    config::{ConfigError, RegistrarConfig},
    monitor::{enrollment_monitor::EnrollmentMonitor, no_op::NoOperationMonitor},
    roster::{DropOutcome, EnrollmentRoster, Placement, RosterError},
    schedule::{Schedule, ScheduleError},
    stats::RegistrarStatistics,
};
use registrar_model::{
    activity::{Activity, ActivityRow},
    course::Course,
    index::{CourseIndex, FacultyIndex, StudentIndex},
    person::{Faculty, Identity, PersonError, Student},
};
use rustc_hash::FxHashMap;

/// The error type for registrar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrarError {
    #[error("unknown course {0}")]
    UnknownCourse(CourseIndex),
    #[error("unknown student {0}")]
    UnknownStudent(StudentIndex),
    #[error("unknown faculty {0}")]
    UnknownFaculty(FacultyIndex),
    #[error("course {name}-{section} is already in the catalog")]
    DuplicateCourse { name: String, section: String },
    #[error("a person with id '{0}' is already registered")]
    DuplicateId(String),
    #[error("adding {requested} credits would exceed the limit of {max} (currently {scheduled})")]
    CreditLimit {
        scheduled: u32,
        requested: u32,
        max: u32,
    },
    #[error("course already taught by '{0}'")]
    InstructorAssigned(String),
    #[error("faculty member does not teach this course")]
    NotTeaching,
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Person(#[from] PersonError),
}

/// One row of the course catalog view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseSummary {
    /// Name, section, title and meeting string.
    pub row: ActivityRow,
    /// Id of the assigned faculty member, or the instructor named in the
    /// catalog entry.
    pub instructor_id: Option<String>,
    pub enrollment_cap: usize,
    pub open_seats: usize,
    pub waitlisted: usize,
}

impl std::fmt::Display for CourseSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | open seats: {}/{} | waitlist: {}",
            self.row, self.open_seats, self.enrollment_cap, self.waitlisted
        )
    }
}

#[derive(Debug)]
struct CourseRecord {
    course: Course,
    roster: EnrollmentRoster<StudentIndex>,
    instructor: Option<FacultyIndex>,
}

#[derive(Debug)]
struct StudentRecord {
    student: Student,
    schedule: Schedule<Course>,
}

#[derive(Debug)]
struct FacultyRecord {
    faculty: Faculty,
    schedule: Schedule<Course>,
}

/// The course registration context.
pub struct Registrar<M = NoOperationMonitor> {
    config: RegistrarConfig,
    courses: Vec<CourseRecord>,
    course_lookup: FxHashMap<(String, String), CourseIndex>,
    students: Vec<StudentRecord>,
    faculty: Vec<FacultyRecord>,
    person_lookup: FxHashMap<String, PersonIndex>,
    monitor: M,
    statistics: RegistrarStatistics,
}

#[derive(Clone, Copy, Debug)]
enum PersonIndex {
    Student(StudentIndex),
    Faculty(FacultyIndex),
}

impl Default for Registrar<NoOperationMonitor> {
    fn default() -> Self {
        Self::from_validated(RegistrarConfig::default(), NoOperationMonitor::new())
    }
}

impl Registrar<NoOperationMonitor> {
    /// Creates an empty registrar that reports to no monitor.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` if `config` fails `RegistrarConfig::validate`.
    pub fn new(config: RegistrarConfig) -> Result<Self, ConfigError> {
        Self::with_monitor(config, NoOperationMonitor::new())
    }
}

impl<M> Registrar<M>
where
    M: EnrollmentMonitor,
{
    /// Creates an empty registrar reporting events to `monitor`.
    ///
    /// The configuration is validated here, so schedule titles, credit
    /// limits and caps taken from it later cannot fail.
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` if `config` fails `RegistrarConfig::validate`.
    pub fn with_monitor(config: RegistrarConfig, monitor: M) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config, monitor))
    }

    fn from_validated(config: RegistrarConfig, monitor: M) -> Self {
        Self {
            config,
            courses: Vec::new(),
            course_lookup: FxHashMap::default(),
            students: Vec::new(),
            faculty: Vec::new(),
            person_lookup: FxHashMap::default(),
            monitor,
            statistics: RegistrarStatistics::default(),
        }
    }

    #[inline]
    pub fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    #[inline]
    pub fn statistics(&self) -> &RegistrarStatistics {
        &self.statistics
    }

    #[inline]
    pub fn monitor(&self) -> &M {
        &self.monitor
    }

    #[inline]
    pub fn monitor_mut(&mut self) -> &mut M {
        &mut self.monitor
    }

    // ---------------------------------------------------------------------
    // Catalog
    // ---------------------------------------------------------------------

    /// Adds a course with the configured default enrollment cap.
    ///
    /// # Errors
    ///
    /// `DuplicateCourse` if the same name and section is already cataloged.
    pub fn add_course(&mut self, course: Course) -> Result<CourseIndex, RegistrarError> {
        let cap = self.config.default_enrollment_cap;
        self.add_course_with_cap(course, cap)
    }

    /// Adds a course with an explicit enrollment cap.
    pub fn add_course_with_cap(
        &mut self,
        course: Course,
        enrollment_cap: usize,
    ) -> Result<CourseIndex, RegistrarError> {
        let key = (course.name().to_string(), course.section().to_string());
        if self.course_lookup.contains_key(&key) {
            return Err(RegistrarError::DuplicateCourse {
                name: key.0,
                section: key.1,
            });
        }
        let roster = EnrollmentRoster::new(enrollment_cap)?;
        let index = CourseIndex::new(self.courses.len());
        self.courses.push(CourseRecord {
            course,
            roster,
            instructor: None,
        });
        self.course_lookup.insert(key, index);
        Ok(index)
    }

    #[inline]
    pub fn num_courses(&self) -> usize {
        self.courses.len()
    }

    #[inline]
    pub fn course(&self, index: CourseIndex) -> Option<&Course> {
        self.courses.get(index.get()).map(|r| &r.course)
    }

    /// Looks a course up by name and section.
    pub fn find_course(&self, name: &str, section: &str) -> Option<CourseIndex> {
        self.course_lookup
            .get(&(name.to_string(), section.to_string()))
            .copied()
    }

    /// Returns the roster of a course.
    #[inline]
    pub fn roster(&self, index: CourseIndex) -> Option<&EnrollmentRoster<StudentIndex>> {
        self.courses.get(index.get()).map(|r| &r.roster)
    }

    /// Returns one summary row per course, in catalog order.
    pub fn course_rows(&self) -> Vec<CourseSummary> {
        self.courses
            .iter()
            .map(|record| CourseSummary {
                row: record.course.display_row(),
                instructor_id: match record.instructor {
                    Some(f) => self.faculty.get(f.get()).map(|r| r.faculty.id().to_string()),
                    None => record.course.instructor_id().map(str::to_string),
                },
                enrollment_cap: record.roster.enrollment_cap(),
                open_seats: record.roster.open_seats(),
                waitlisted: record.roster.number_on_waitlist(),
            })
            .collect()
    }

    /// Changes a course's enrollment cap.
    pub fn set_enrollment_cap(
        &mut self,
        course: CourseIndex,
        cap: usize,
    ) -> Result<(), RegistrarError> {
        self.course_record_mut(course)?
            .roster
            .set_enrollment_cap(cap)?;
        Ok(())
    }

    /// Empties a course's roster and waitlist and removes the course from
    /// every enrolled student's schedule.
    pub fn reset_course_roll(&mut self, course: CourseIndex) -> Result<(), RegistrarError> {
        let record = self
            .courses
            .get_mut(course.get())
            .ok_or(RegistrarError::UnknownCourse(course))?;
        for student in record.roster.roster() {
            if let Some(s) = self.students.get_mut(student.get()) {
                s.schedule.remove_course_from_schedule(&record.course);
            }
        }
        let removed = record.roster.number_enrolled() + record.roster.number_on_waitlist();
        record.roster.clear();
        log::info!(
            "reset roll of {}-{}, removed {} students",
            record.course.name(),
            record.course.section(),
            removed
        );
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Directory
    // ---------------------------------------------------------------------

    fn register_id(&self, id: &str) -> Result<(), RegistrarError> {
        if self.person_lookup.contains_key(id) {
            return Err(RegistrarError::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    /// Registers a student with an empty schedule.
    ///
    /// # Errors
    ///
    /// `DuplicateId` if a student or faculty member already uses the id.
    pub fn add_student(&mut self, student: Student) -> Result<StudentIndex, RegistrarError> {
        self.register_id(student.id())?;
        let schedule = Schedule::with_title(self.config.schedule_title.clone())?;
        let index = StudentIndex::new(self.students.len());
        self.person_lookup
            .insert(student.id().to_string(), PersonIndex::Student(index));
        self.students.push(StudentRecord { student, schedule });
        Ok(index)
    }

    /// Registers a student with the configured default credit limit.
    pub fn add_student_with_defaults(
        &mut self,
        identity: Identity,
    ) -> Result<StudentIndex, RegistrarError> {
        let student = Student::new(identity, self.config.default_max_credits)?;
        self.add_student(student)
    }

    /// Registers a faculty member with an empty schedule.
    pub fn add_faculty(&mut self, faculty: Faculty) -> Result<FacultyIndex, RegistrarError> {
        self.register_id(faculty.id())?;
        let schedule = Schedule::with_title(self.config.schedule_title.clone())?;
        let index = FacultyIndex::new(self.faculty.len());
        self.person_lookup
            .insert(faculty.id().to_string(), PersonIndex::Faculty(index));
        self.faculty.push(FacultyRecord { faculty, schedule });
        Ok(index)
    }

    #[inline]
    pub fn num_students(&self) -> usize {
        self.students.len()
    }

    #[inline]
    pub fn student(&self, index: StudentIndex) -> Option<&Student> {
        self.students.get(index.get()).map(|r| &r.student)
    }

    #[inline]
    pub fn faculty(&self, index: FacultyIndex) -> Option<&Faculty> {
        self.faculty.get(index.get()).map(|r| &r.faculty)
    }

    /// Looks a student up by id.
    pub fn find_student(&self, id: &str) -> Option<StudentIndex> {
        match self.person_lookup.get(id) {
            Some(PersonIndex::Student(index)) => Some(*index),
            _ => None,
        }
    }

    /// Looks a faculty member up by id.
    pub fn find_faculty(&self, id: &str) -> Option<FacultyIndex> {
        match self.person_lookup.get(id) {
            Some(PersonIndex::Faculty(index)) => Some(*index),
            _ => None,
        }
    }

    #[inline]
    pub fn student_schedule(&self, index: StudentIndex) -> Option<&Schedule<Course>> {
        self.students.get(index.get()).map(|r| &r.schedule)
    }

    #[inline]
    pub fn faculty_schedule(&self, index: FacultyIndex) -> Option<&Schedule<Course>> {
        self.faculty.get(index.get()).map(|r| &r.schedule)
    }

    /// Renames a student's schedule.
    pub fn set_schedule_title(
        &mut self,
        student: StudentIndex,
        title: impl Into<String>,
    ) -> Result<(), RegistrarError> {
        self.student_record_mut(student)?.schedule.set_title(title)?;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Enrollment
    // ---------------------------------------------------------------------

    #[inline]
    fn course_record_mut(&mut self, index: CourseIndex) -> Result<&mut CourseRecord, RegistrarError> {
        self.courses
            .get_mut(index.get())
            .ok_or(RegistrarError::UnknownCourse(index))
    }

    #[inline]
    fn student_record_mut(
        &mut self,
        index: StudentIndex,
    ) -> Result<&mut StudentRecord, RegistrarError> {
        self.students
            .get_mut(index.get())
            .ok_or(RegistrarError::UnknownStudent(index))
    }

    /// Checks that `course` fits on the student's schedule and under their
    /// credit limit.
    fn check_admissible(record: &StudentRecord, course: &Course) -> Result<(), RegistrarError> {
        record.schedule.check_can_add(course)?;
        let scheduled = record.schedule.schedule_credits();
        let requested = course.credits();
        let max = record.student.max_credits();
        if scheduled + requested > max {
            return Err(RegistrarError::CreditLimit {
                scheduled,
                requested,
                max,
            });
        }
        Ok(())
    }

    /// Returns `true` if `enroll_student_in_course` would succeed.
    pub fn can_enroll(&self, student: StudentIndex, course: CourseIndex) -> bool {
        match (
            self.students.get(student.get()),
            self.courses.get(course.get()),
        ) {
            (Some(s), Some(c)) => {
                Self::check_admissible(s, &c.course).is_ok() && c.roster.can_enroll(&student)
            }
            _ => false,
        }
    }

    /// Enrolls a student in a course.
    ///
    /// The schedule, the credit limit and the roster are all checked before
    /// anything changes. A roster seat also puts the course on the
    /// student's schedule; a waitlist spot does not.
    ///
    /// # Errors
    ///
    /// Unknown indices, `Schedule` (duplicate or conflict), `CreditLimit`, or
    /// `Roster` (already present or full). Nothing changes on error.
    pub fn enroll_student_in_course(
        &mut self,
        student: StudentIndex,
        course: CourseIndex,
    ) -> Result<Placement, RegistrarError> {
        let result = self.try_enroll(student, course);
        let (Some(s), Some(c)) = (
            self.students.get(student.get()),
            self.courses.get(course.get()),
        ) else {
            return result;
        };

        match &result {
            Ok(Placement::Enrolled) => {
                self.statistics.on_enrollment();
                self.monitor
                    .on_enrolled(&s.student, &c.course, &self.statistics);
            }
            Ok(Placement::Waitlisted { position }) => {
                self.statistics.on_waitlisting();
                self.monitor
                    .on_waitlisted(&s.student, &c.course, *position, &self.statistics);
            }
            Err(e) => {
                self.statistics.on_rejection();
                self.monitor
                    .on_rejected(&s.student, &c.course, e, &self.statistics);
            }
        }
        result
    }

    fn try_enroll(
        &mut self,
        student: StudentIndex,
        course: CourseIndex,
    ) -> Result<Placement, RegistrarError> {
        let c = self
            .courses
            .get_mut(course.get())
            .ok_or(RegistrarError::UnknownCourse(course))?;
        let s = self
            .students
            .get_mut(student.get())
            .ok_or(RegistrarError::UnknownStudent(student))?;

        Self::check_admissible(s, &c.course)?;
        let placement = c.roster.enroll(student)?;
        if placement == Placement::Enrolled
            && let Err(e) = s.schedule.add_course_to_schedule(c.course.clone())
        {
            c.roster.drop(&student)?;
            return Err(e.into());
        }
        Ok(placement)
    }

    /// Removes a student from a course's roster or waitlist.
    ///
    /// Leaving the roster removes the course from the student's schedule and
    /// promotes waitlisted students until one of them can take the seat. The
    /// returned outcome names the student who ended up with it.
    ///
    /// # Errors
    ///
    /// Unknown indices, or `Roster(NotEnrolled)` if the student holds neither
    /// a seat nor a waitlist spot.
    pub fn drop_student_from_course(
        &mut self,
        student: StudentIndex,
        course: CourseIndex,
    ) -> Result<DropOutcome<StudentIndex>, RegistrarError> {
        if student.get() >= self.students.len() {
            return Err(RegistrarError::UnknownStudent(student));
        }
        let c = self
            .courses
            .get_mut(course.get())
            .ok_or(RegistrarError::UnknownCourse(course))?;

        let outcome = c.roster.drop(&student)?;
        let s = &mut self.students[student.get()];
        s.schedule.remove_course_from_schedule(&c.course);
        self.statistics.on_drop();
        self.monitor
            .on_dropped(&s.student, &c.course, &self.statistics);

        let mut promoted = match outcome {
            DropOutcome::Dropped { promoted } => promoted,
            DropOutcome::LeftWaitlist => return Ok(DropOutcome::LeftWaitlist),
        };

        while let Some(next) = promoted {
            let Some(p) = self.students.get_mut(next.get()) else {
                break;
            };
            let admitted = Self::check_admissible(p, &c.course).and_then(|()| {
                p.schedule
                    .add_course_to_schedule(c.course.clone())
                    .map_err(RegistrarError::from)
            });
            match admitted {
                Ok(()) => {
                    self.statistics.on_promotion();
                    self.monitor
                        .on_promoted(&p.student, &c.course, &self.statistics);
                    break;
                }
                Err(e) => {
                    log::warn!(
                        "{} cannot take the freed seat in {}-{}: {}",
                        p.student.id(),
                        c.course.name(),
                        c.course.section(),
                        e
                    );
                    promoted = match c.roster.drop(&next)? {
                        DropOutcome::Dropped { promoted } => promoted,
                        DropOutcome::LeftWaitlist => None,
                    };
                    self.statistics.on_drop();
                    self.monitor
                        .on_dropped(&p.student, &c.course, &self.statistics);
                }
            }
        }
        Ok(DropOutcome::Dropped { promoted })
    }

    /// Drops a student from every course they are enrolled or waitlisted in
    /// and resets their schedule.
    pub fn reset_schedule(&mut self, student: StudentIndex) -> Result<(), RegistrarError> {
        if student.get() >= self.students.len() {
            return Err(RegistrarError::UnknownStudent(student));
        }
        let held: Vec<CourseIndex> = (0..self.courses.len())
            .map(CourseIndex::new)
            .filter(|c| {
                let roster = &self.courses[c.get()].roster;
                roster.is_enrolled(&student) || roster.is_waitlisted(&student)
            })
            .collect();
        for course in held {
            self.drop_student_from_course(student, course)?;
        }
        self.student_record_mut(student)?.schedule.reset_schedule();
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Faculty
    // ---------------------------------------------------------------------

    /// Assigns a faculty member to teach a course.
    ///
    /// # Errors
    ///
    /// `InstructorAssigned` if someone already teaches the course, or
    /// `Schedule` if it does not fit the faculty member's schedule.
    pub fn add_faculty_to_course(
        &mut self,
        course: CourseIndex,
        faculty: FacultyIndex,
    ) -> Result<(), RegistrarError> {
        let current = self
            .courses
            .get(course.get())
            .ok_or(RegistrarError::UnknownCourse(course))?
            .instructor;
        if let Some(current) = current {
            return Err(RegistrarError::InstructorAssigned(
                self.faculty_id_or_index(current),
            ));
        }
        let c = &mut self.courses[course.get()];
        let f = self
            .faculty
            .get_mut(faculty.get())
            .ok_or(RegistrarError::UnknownFaculty(faculty))?;
        f.schedule.add_course_to_schedule(c.course.clone())?;
        c.instructor = Some(faculty);
        Ok(())
    }

    fn faculty_id_or_index(&self, index: FacultyIndex) -> String {
        self.faculty
            .get(index.get())
            .map_or_else(|| index.to_string(), |f| f.faculty.id().to_string())
    }

    /// Unassigns a faculty member from a course.
    ///
    /// # Errors
    ///
    /// `NotTeaching` if the faculty member is not the course's instructor.
    pub fn remove_faculty_from_course(
        &mut self,
        course: CourseIndex,
        faculty: FacultyIndex,
    ) -> Result<(), RegistrarError> {
        let c = self
            .courses
            .get_mut(course.get())
            .ok_or(RegistrarError::UnknownCourse(course))?;
        let f = self
            .faculty
            .get_mut(faculty.get())
            .ok_or(RegistrarError::UnknownFaculty(faculty))?;
        if c.instructor != Some(faculty) {
            return Err(RegistrarError::NotTeaching);
        }
        f.schedule.remove_course_from_schedule(&c.course);
        c.instructor = None;
        Ok(())
    }

    /// Unassigns a faculty member from every course and resets their
    /// schedule.
    pub fn reset_faculty_schedule(&mut self, faculty: FacultyIndex) -> Result<(), RegistrarError> {
        let f = self
            .faculty
            .get_mut(faculty.get())
            .ok_or(RegistrarError::UnknownFaculty(faculty))?;
        for c in &mut self.courses {
            if c.instructor == Some(faculty) {
                c.instructor = None;
            }
        }
        f.schedule.reset_schedule();
        Ok(())
    }

    /// Returns `true` if the faculty member teaches more courses than their
    /// limit allows.
    pub fn is_overloaded(&self, faculty: FacultyIndex) -> Result<bool, RegistrarError> {
        let f = self
            .faculty
            .get(faculty.get())
            .ok_or(RegistrarError::UnknownFaculty(faculty))?;
        Ok(f.schedule.len() > f.faculty.max_courses())
    }
}

impl<M> std::fmt::Debug for Registrar<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Registrar(courses: {}, students: {}, faculty: {})",
            self.courses.len(),
            self.students.len(),
            self.faculty.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar_model::course::CourseBuilder;

    fn student(id: &str) -> Student {
        Student::with_default_credits(Identity::new("A", "B", id, format!("{id}@ncsu.edu")).unwrap())
    }

    #[test]
    fn test_unknown_indices() {
        let mut registrar = Registrar::default();
        let s = registrar.add_student(student("s")).unwrap();
        let missing_course = CourseIndex::new(7);
        let missing_student = StudentIndex::new(7);

        assert_eq!(
            registrar.enroll_student_in_course(s, missing_course),
            Err(RegistrarError::UnknownCourse(missing_course))
        );
        let c = registrar
            .add_course(CourseBuilder::new("CSC216", "Title", "001").build().unwrap())
            .unwrap();
        assert_eq!(
            registrar.drop_student_from_course(missing_student, c),
            Err(RegistrarError::UnknownStudent(missing_student))
        );
        assert!(!registrar.can_enroll(missing_student, c));
        assert_eq!(
            registrar.is_overloaded(FacultyIndex::new(0)),
            Err(RegistrarError::UnknownFaculty(FacultyIndex::new(0)))
        );
        assert_eq!(registrar.statistics().rejections, 0);
    }

    #[test]
    fn test_lookup_by_id() {
        let mut registrar = Registrar::default();
        let s = registrar.add_student(student("jdoe")).unwrap();
        let f = registrar
            .add_faculty(
                Faculty::new(Identity::new("C", "D", "prof", "prof@ncsu.edu").unwrap(), 2)
                    .unwrap(),
            )
            .unwrap();
        assert_eq!(registrar.find_student("jdoe"), Some(s));
        assert_eq!(registrar.find_student("prof"), None);
        assert_eq!(registrar.find_faculty("prof"), Some(f));
        assert_eq!(registrar.num_students(), 1);
        assert_eq!(
            registrar.add_student(student("jdoe")),
            Err(RegistrarError::DuplicateId("jdoe".to_string()))
        );
    }

    #[test]
    fn test_invalid_config_is_rejected_at_construction() {
        let empty_title = RegistrarConfig {
            schedule_title: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            Registrar::new(empty_title),
            Err(ConfigError::Invalid(_))
        ));

        let too_many_credits = RegistrarConfig {
            default_max_credits: 40,
            ..Default::default()
        };
        assert!(matches!(
            Registrar::with_monitor(too_many_credits, NoOperationMonitor::new()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_resets_restore_configured_title() {
        let config = RegistrarConfig {
            schedule_title: "Fall".to_string(),
            ..Default::default()
        };
        let mut registrar = Registrar::new(config).unwrap();
        let c = registrar
            .add_course(CourseBuilder::new("CSC216", "Title", "001").build().unwrap())
            .unwrap();
        let s = registrar.add_student(student("s")).unwrap();
        let f = registrar
            .add_faculty(
                Faculty::new(Identity::new("C", "D", "prof", "prof@ncsu.edu").unwrap(), 1)
                    .unwrap(),
            )
            .unwrap();
        registrar.enroll_student_in_course(s, c).unwrap();
        registrar.add_faculty_to_course(c, f).unwrap();
        registrar.set_schedule_title(s, "Renamed").unwrap();

        assert_eq!(registrar.reset_schedule(s), Ok(()));
        let schedule = registrar.student_schedule(s).unwrap();
        assert!(schedule.is_empty());
        assert_eq!(schedule.title(), "Fall");
        assert!(!registrar.roster(c).unwrap().is_enrolled(&s));

        assert_eq!(registrar.reset_faculty_schedule(f), Ok(()));
        assert!(registrar.faculty_schedule(f).unwrap().is_empty());
        assert_eq!(registrar.faculty_schedule(f).unwrap().title(), "Fall");
        assert_eq!(registrar.course_rows()[0].instructor_id, None);
    }

    #[test]
    fn test_error_messages() {
        let err = RegistrarError::CreditLimit {
            scheduled: 16,
            requested: 3,
            max: 18,
        };
        assert_eq!(
            err.to_string(),
            "adding 3 credits would exceed the limit of 18 (currently 16)"
        );
        assert_eq!(
            RegistrarError::UnknownCourse(CourseIndex::new(2)).to_string(),
            "unknown course CourseIndex(2)"
        );
    }
}
