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

use registrar_enroll::{
    config::RegistrarConfig,
    monitor::{
        composite::CompositeMonitor, enrollment_monitor::EnrollmentMonitor, log::LogMonitor,
    },
    registrar::{Registrar, RegistrarError},
    roster::{DropOutcome, Placement, RosterError},
    schedule::ScheduleError,
    stats::RegistrarStatistics,
};
use registrar_model::{
    course::{Course, CourseBuilder},
    index::{CourseIndex, StudentIndex},
    meeting::Meeting,
    person::{Faculty, Identity, Student},
};
use std::{cell::RefCell, io::Write, rc::Rc};

fn identity(id: &str) -> Identity {
    Identity::new("First", "Last", id, format!("{id}@ncsu.edu")).unwrap()
}

fn course(name: &str, section: &str, credits: u32, days: &str, start: i32, end: i32) -> Course {
    let mut builder = CourseBuilder::new(name, format!("{name} title"), section);
    builder
        .set_credits(credits)
        .set_meeting(Meeting::parse(days, start, end).unwrap());
    builder.build().unwrap()
}

fn add_students<M: EnrollmentMonitor>(registrar: &mut Registrar<M>, n: usize) -> Vec<StudentIndex> {
    (0..n)
        .map(|i| {
            registrar
                .add_student(Student::with_default_credits(identity(&format!("s{i}"))))
                .unwrap()
        })
        .collect()
}

fn fill<M: EnrollmentMonitor>(registrar: &mut Registrar<M>, course: CourseIndex, students: &[StudentIndex]) {
    for &s in students {
        registrar.enroll_student_in_course(s, course).unwrap();
    }
}

#[test]
fn test_waitlisted_student_is_promoted_onto_schedule() {
    let mut registrar = Registrar::default();
    let csc216 = registrar
        .add_course(course("CSC216", "001", 3, "MW", 1330, 1445))
        .unwrap();
    let students = add_students(&mut registrar, 11);

    fill(&mut registrar, csc216, &students[..10]);
    assert_eq!(
        registrar.enroll_student_in_course(students[10], csc216),
        Ok(Placement::Waitlisted { position: 0 })
    );
    let waitlisted = students[10];
    assert!(registrar.student_schedule(waitlisted).unwrap().is_empty());

    let outcome = registrar
        .drop_student_from_course(students[0], csc216)
        .unwrap();
    assert_eq!(outcome, DropOutcome::Dropped { promoted: Some(waitlisted) });

    let roster = registrar.roster(csc216).unwrap();
    assert!(roster.is_enrolled(&waitlisted));
    assert_eq!(roster.number_on_waitlist(), 0);
    assert_eq!(roster.open_seats(), 0);

    let course = registrar.course(csc216).unwrap().clone();
    assert!(registrar.student_schedule(waitlisted).unwrap().contains(&course));
    assert!(!registrar.student_schedule(students[0]).unwrap().contains(&course));

    let stats = registrar.statistics();
    assert_eq!(stats.enrollments, 10);
    assert_eq!(stats.waitlistings, 1);
    assert_eq!(stats.drops, 1);
    assert_eq!(stats.promotions, 1);
}

#[test]
fn test_duplicate_and_conflict_reasons_are_distinct() {
    let mut registrar = Registrar::default();
    let a = registrar
        .add_course(course("CSC216", "001", 3, "MW", 1330, 1445))
        .unwrap();
    let a2 = registrar
        .add_course(course("CSC216", "002", 3, "TH", 1330, 1445))
        .unwrap();
    let b = registrar
        .add_course(course("CSC226", "001", 3, "MW", 1445, 1600))
        .unwrap();
    let s = add_students(&mut registrar, 1)[0];

    registrar.enroll_student_in_course(s, a).unwrap();
    assert_eq!(
        registrar.enroll_student_in_course(s, a2),
        Err(RegistrarError::Schedule(ScheduleError::Duplicate {
            name: "CSC216".to_string()
        }))
    );
    assert!(matches!(
        registrar.enroll_student_in_course(s, b),
        Err(RegistrarError::Schedule(ScheduleError::Conflict(_)))
    ));
    assert_eq!(registrar.statistics().rejections, 2);
}

#[test]
fn test_rejected_enrollment_changes_nothing() {
    let mut registrar = Registrar::default();
    let a = registrar
        .add_course(course("CSC216", "001", 3, "MW", 1330, 1445))
        .unwrap();
    let b = registrar
        .add_course(course("CSC226", "001", 3, "MW", 1400, 1500))
        .unwrap();
    let students = add_students(&mut registrar, 11);
    fill(&mut registrar, b, &students[..10]);

    let s = students[10];
    registrar.enroll_student_in_course(s, a).unwrap();
    let before = registrar.student_schedule(s).unwrap().clone();

    assert!(!registrar.can_enroll(s, b));
    assert!(registrar.enroll_student_in_course(s, b).is_err());
    let roster = registrar.roster(b).unwrap();
    assert_eq!(roster.number_enrolled(), 10);
    assert_eq!(roster.number_on_waitlist(), 0);
    assert_eq!(registrar.student_schedule(s).unwrap(), &before);
}

#[test]
fn test_credit_limit_is_checked_before_enrolling() {
    let mut registrar = Registrar::default();
    let student = Student::new(identity("light"), 6).unwrap();
    let s = registrar.add_student(student).unwrap();
    let a = registrar
        .add_course(course("CSC216", "001", 4, "MW", 800, 915))
        .unwrap();
    let b = registrar
        .add_course(course("CSC226", "001", 3, "TH", 800, 915))
        .unwrap();

    registrar.enroll_student_in_course(s, a).unwrap();
    assert_eq!(
        registrar.enroll_student_in_course(s, b),
        Err(RegistrarError::CreditLimit {
            scheduled: 4,
            requested: 3,
            max: 6
        })
    );
    assert!(!registrar.roster(b).unwrap().is_enrolled(&s));
}

#[test]
fn test_double_request_is_rejected() {
    let mut registrar = Registrar::default();
    let a = registrar
        .add_course(course("CSC216", "001", 3, "MW", 1330, 1445))
        .unwrap();
    let students = add_students(&mut registrar, 11);
    fill(&mut registrar, a, &students);

    assert!(matches!(
        registrar.enroll_student_in_course(students[0], a),
        Err(RegistrarError::Schedule(ScheduleError::Duplicate { .. }))
    ));
    assert_eq!(
        registrar.enroll_student_in_course(students[10], a),
        Err(RegistrarError::Roster(RosterError::AlreadyWaitlisted))
    );
}

#[test]
fn test_promotion_skips_students_who_no_longer_fit() {
    let mut registrar = Registrar::default();
    let a = registrar
        .add_course(course("CSC216", "001", 3, "MW", 1000, 1100))
        .unwrap();
    let b = registrar
        .add_course(course("CSC226", "001", 3, "MW", 1030, 1130))
        .unwrap();
    let students = add_students(&mut registrar, 12);
    fill(&mut registrar, a, &students[..10]);

    let (blocked, next) = (students[10], students[11]);
    registrar.enroll_student_in_course(blocked, a).unwrap();
    registrar.enroll_student_in_course(next, a).unwrap();
    // Legal while `a` is only waitlisted.
    assert_eq!(
        registrar.enroll_student_in_course(blocked, b),
        Ok(Placement::Enrolled)
    );

    let outcome = registrar.drop_student_from_course(students[0], a).unwrap();
    assert_eq!(outcome, DropOutcome::Dropped { promoted: Some(next) });

    let roster = registrar.roster(a).unwrap();
    assert!(!roster.is_enrolled(&blocked));
    assert!(!roster.is_waitlisted(&blocked));
    assert!(roster.is_enrolled(&next));
    assert_eq!(roster.number_on_waitlist(), 0);

    let course_a = registrar.course(a).unwrap().clone();
    let course_b = registrar.course(b).unwrap().clone();
    assert!(registrar.student_schedule(next).unwrap().contains(&course_a));
    let blocked_schedule = registrar.student_schedule(blocked).unwrap();
    assert!(blocked_schedule.contains(&course_b));
    assert!(!blocked_schedule.contains(&course_a));

    assert_eq!(registrar.statistics().drops, 2);
    assert_eq!(registrar.statistics().promotions, 1);
}

#[test]
fn test_drop_from_waitlist_and_absent_student() {
    let mut registrar = Registrar::default();
    let a = registrar
        .add_course(course("CSC216", "001", 3, "MW", 1330, 1445))
        .unwrap();
    let students = add_students(&mut registrar, 13);
    fill(&mut registrar, a, &students[..12]);

    assert_eq!(
        registrar.drop_student_from_course(students[10], a),
        Ok(DropOutcome::LeftWaitlist)
    );
    assert_eq!(
        registrar.roster(a).unwrap().waitlist_position(&students[11]),
        Some(0)
    );
    assert_eq!(
        registrar.drop_student_from_course(students[12], a),
        Err(RegistrarError::Roster(RosterError::NotEnrolled))
    );
}

#[test]
fn test_reset_schedule_releases_every_seat() {
    let mut registrar = Registrar::default();
    let a = registrar
        .add_course(course("CSC216", "001", 3, "MW", 1330, 1445))
        .unwrap();
    let b = registrar
        .add_course(course("CSC226", "001", 3, "TH", 1330, 1445))
        .unwrap();
    let students = add_students(&mut registrar, 11);
    fill(&mut registrar, a, &students[..11]);
    registrar.enroll_student_in_course(students[0], b).unwrap();
    registrar
        .set_schedule_title(students[0], "Spring")
        .unwrap();

    registrar.reset_schedule(students[0]).unwrap();

    let schedule = registrar.student_schedule(students[0]).unwrap();
    assert!(schedule.is_empty());
    assert_eq!(schedule.title(), "My Schedule");
    assert!(registrar.roster(a).unwrap().is_enrolled(&students[10]));
    assert!(!registrar.roster(b).unwrap().is_enrolled(&students[0]));
}

#[test]
fn test_reset_course_roll() {
    let mut registrar = Registrar::default();
    let a = registrar
        .add_course(course("CSC216", "001", 3, "MW", 1330, 1445))
        .unwrap();
    let students = add_students(&mut registrar, 12);
    fill(&mut registrar, a, &students);

    registrar.reset_course_roll(a).unwrap();

    let roster = registrar.roster(a).unwrap();
    assert_eq!(roster.number_enrolled(), 0);
    assert_eq!(roster.number_on_waitlist(), 0);
    for s in students {
        assert!(registrar.student_schedule(s).unwrap().is_empty());
    }
}

#[test]
fn test_catalog_rows_and_caps() {
    let mut registrar = Registrar::default();
    let a = registrar
        .add_course_with_cap(course("CSC216", "001", 3, "MW", 1330, 1445), 20)
        .unwrap();
    registrar
        .add_course(course("CSC230", "001", 3, "A", 0, 0))
        .unwrap();
    assert!(matches!(
        registrar.add_course(course("CSC216", "001", 3, "TH", 900, 1015)),
        Err(RegistrarError::DuplicateCourse { .. })
    ));
    assert_eq!(registrar.find_course("CSC216", "001"), Some(a));
    assert_eq!(registrar.find_course("CSC216", "002"), None);

    let students = add_students(&mut registrar, 12);
    fill(&mut registrar, a, &students);
    assert!(matches!(
        registrar.set_enrollment_cap(a, 11),
        Err(RegistrarError::Roster(RosterError::InvalidCapacity { .. }))
    ));
    registrar.set_enrollment_cap(a, 12).unwrap();

    let rows = registrar.course_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].row.meeting, "MW 1:30PM-2:45PM");
    assert_eq!(rows[0].enrollment_cap, 12);
    assert_eq!(rows[0].open_seats, 0);
    assert_eq!(rows[1].row.meeting, "Arranged");
    assert_eq!(rows[1].open_seats, 10);
}

#[test]
fn test_faculty_assignment() {
    let mut registrar = Registrar::default();
    let a = registrar
        .add_course(course("CSC216", "001", 3, "MW", 1330, 1445))
        .unwrap();
    let b = registrar
        .add_course(course("CSC226", "001", 3, "MW", 1400, 1515))
        .unwrap();
    let c = registrar
        .add_course(course("CSC230", "001", 3, "TH", 1330, 1445))
        .unwrap();
    let prof = registrar
        .add_faculty(Faculty::new(identity("sesmith5"), 1).unwrap())
        .unwrap();
    let other = registrar
        .add_faculty(Faculty::new(identity("jtking"), 2).unwrap())
        .unwrap();
    assert!(matches!(
        registrar.add_student(Student::with_default_credits(identity("sesmith5"))),
        Err(RegistrarError::DuplicateId(_))
    ));

    registrar.add_faculty_to_course(a, prof).unwrap();
    assert_eq!(
        registrar.add_faculty_to_course(a, other),
        Err(RegistrarError::InstructorAssigned("sesmith5".to_string()))
    );
    assert!(matches!(
        registrar.add_faculty_to_course(b, prof),
        Err(RegistrarError::Schedule(ScheduleError::Conflict(_)))
    ));
    assert_eq!(registrar.is_overloaded(prof), Ok(false));
    registrar.add_faculty_to_course(c, prof).unwrap();
    assert_eq!(registrar.is_overloaded(prof), Ok(true));
    assert_eq!(
        registrar.course_rows()[0].instructor_id.as_deref(),
        Some("sesmith5")
    );

    assert_eq!(
        registrar.remove_faculty_from_course(a, other),
        Err(RegistrarError::NotTeaching)
    );
    registrar.remove_faculty_from_course(a, prof).unwrap();
    assert_eq!(registrar.faculty_schedule(prof).unwrap().len(), 1);

    registrar.reset_faculty_schedule(prof).unwrap();
    assert!(registrar.faculty_schedule(prof).unwrap().is_empty());
    assert_eq!(registrar.course_rows()[2].instructor_id, None);
    registrar.add_faculty_to_course(c, other).unwrap();
}

#[test]
fn test_registrar_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "schedule_title = \"Fall 2025\"").unwrap();
    writeln!(file, "default_max_credits = 9").unwrap();
    writeln!(file, "default_enrollment_cap = 25").unwrap();
    writeln!(file, "log_level = \"debug\"").unwrap();

    let config = RegistrarConfig::from_file(file.path()).unwrap();
    let monitor = LogMonitor::from_config(&config).unwrap();
    let mut registrar = Registrar::with_monitor(config, monitor).unwrap();

    let a = registrar
        .add_course(course("CSC216", "001", 3, "MW", 1330, 1445))
        .unwrap();
    let s = registrar.add_student_with_defaults(identity("ada")).unwrap();

    assert_eq!(registrar.roster(a).unwrap().enrollment_cap(), 25);
    assert_eq!(registrar.student(s).unwrap().max_credits(), 9);
    assert_eq!(registrar.student_schedule(s).unwrap().title(), "Fall 2025");
    assert_eq!(registrar.monitor().level(), log::Level::Debug);
}

struct Counter {
    events: Rc<RefCell<Vec<&'static str>>>,
}

impl EnrollmentMonitor for Counter {
    fn name(&self) -> &str {
        "Counter"
    }

    fn on_enrolled(&mut self, _: &Student, _: &Course, _: &RegistrarStatistics) {
        self.events.borrow_mut().push("enrolled");
    }

    fn on_waitlisted(&mut self, _: &Student, _: &Course, _: usize, _: &RegistrarStatistics) {
        self.events.borrow_mut().push("waitlisted");
    }

    fn on_dropped(&mut self, _: &Student, _: &Course, _: &RegistrarStatistics) {
        self.events.borrow_mut().push("dropped");
    }

    fn on_promoted(&mut self, _: &Student, _: &Course, _: &RegistrarStatistics) {
        self.events.borrow_mut().push("promoted");
    }

    fn on_rejected(&mut self, _: &Student, _: &Course, _: &RegistrarError, _: &RegistrarStatistics) {
        self.events.borrow_mut().push("rejected");
    }
}

#[test]
fn test_monitor_sees_every_event() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let mut monitor = CompositeMonitor::new();
    monitor.add_monitor(LogMonitor::default());
    monitor.add_monitor(Counter {
        events: Rc::clone(&events),
    });
    let mut registrar = Registrar::with_monitor(RegistrarConfig::default(), monitor).unwrap();

    let a = registrar
        .add_course(course("CSC216", "001", 3, "MW", 1330, 1445))
        .unwrap();
    let students = add_students(&mut registrar, 11);
    fill(&mut registrar, a, &students);
    let _ = registrar.enroll_student_in_course(students[0], a);
    registrar.drop_student_from_course(students[0], a).unwrap();

    let events = events.borrow();
    assert_eq!(events.iter().filter(|e| **e == "enrolled").count(), 10);
    assert_eq!(
        &events[10..],
        &["waitlisted", "rejected", "dropped", "promoted"]
    );
}
