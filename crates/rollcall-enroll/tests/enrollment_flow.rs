//! End-to-end enrollment scenarios over a small campus.

use rollcall_campus::{Course, CourseCatalog, Student, StudentDirectory};
use rollcall_enroll::{EnrollOutcome, EnrollmentLedger, WaitlistBoard};

fn campus() -> (StudentDirectory, CourseCatalog) {
    let mut students = StudentDirectory::default();
    for (id, name) in [(1, "Alice Johnson"), (2, "Bob Smith"), (3, "Charlie Brown")] {
        students
            .add_student(Student::new(id, name))
            .expect("student should register");
    }

    let mut catalog = CourseCatalog::default();

    let mut intro = Course::new(101, "Introduction to Programming", 3, "Dr. Smith");
    intro.capacity = Some(2);

    let mut data_structures = Course::new(201, "Data Structures", 4, "Dr. Johnson");
    data_structures.prerequisites = vec![101];

    let mut algorithms = Course::new(301, "Algorithms", 4, "Dr. Wilson");
    algorithms.prerequisites = vec![101, 201];

    let math = Course::new(102, "Mathematics", 3, "Prof. Euler");
    let mut physics = Course::new(202, "Physics", 4, "Prof. Feynman");
    physics.prerequisites = vec![102];

    for course in [intro, data_structures, algorithms, math, physics] {
        catalog.add_course(course).expect("course should list");
    }
    (students, catalog)
}

#[test]
fn prerequisite_chain_unlocks_only_through_completion() {
    let (students, catalog) = campus();
    let mut ledger = EnrollmentLedger::default();

    // Bob cannot take Data Structures cold.
    assert_eq!(
        ledger.enroll(&students, &catalog, 2, 201),
        EnrollOutcome::PrerequisitesNotMet
    );
    assert_eq!(ledger.missing_prerequisites(&catalog, 2, 201), vec![101]);

    // Enrolling in the prerequisite is not enough while it is still active.
    assert_eq!(
        ledger.enroll(&students, &catalog, 2, 101),
        EnrollOutcome::Enrolled
    );
    assert_eq!(
        ledger.enroll(&students, &catalog, 2, 201),
        EnrollOutcome::PrerequisitesNotMet
    );
    assert_eq!(ledger.missing_prerequisites(&catalog, 2, 201), vec![101]);

    // Completion is the explicit administrative step that unlocks it.
    assert!(ledger.complete_enrollment(2, 101));
    assert_eq!(
        ledger.enroll(&students, &catalog, 2, 201),
        EnrollOutcome::Enrolled
    );

    // Algorithms still needs Data Structures completed as well.
    assert_eq!(
        ledger.enroll(&students, &catalog, 2, 301),
        EnrollOutcome::PrerequisitesNotMet
    );
    assert_eq!(ledger.missing_prerequisites(&catalog, 2, 301), vec![201]);
}

#[test]
fn full_course_overflows_onto_the_waitlist() {
    let (students, catalog) = campus();
    let mut ledger = EnrollmentLedger::default();
    let mut board = WaitlistBoard::default();

    assert_eq!(
        ledger.enroll(&students, &catalog, 1, 101),
        EnrollOutcome::Enrolled
    );
    assert_eq!(
        ledger.enroll(&students, &catalog, 2, 101),
        EnrollOutcome::Enrolled
    );

    // Intro is capped at two seats; Charlie waits.
    let outcome = ledger.enroll(&students, &catalog, 3, 101);
    assert_eq!(outcome, EnrollOutcome::CourseFull);
    assert!(board.join(101, 3));
    assert_eq!(board.position(101, 3), Some(1));

    // A drop frees the seat; the head of the queue gets it.
    assert!(ledger.drop_enrollment(1, 101));
    let admitted = board.admit_next(101).expect("someone should be waiting");
    assert_eq!(admitted, 3);
    assert_eq!(
        ledger.enroll(&students, &catalog, admitted, 101),
        EnrollOutcome::Enrolled
    );

    assert!(board.is_empty(101));
    assert_eq!(ledger.active_course_count(101), 2);
}

#[test]
fn dropping_and_reenrolling_grows_the_log() {
    let (students, catalog) = campus();
    let mut ledger = EnrollmentLedger::default();

    assert_eq!(
        ledger.enroll(&students, &catalog, 1, 102),
        EnrollOutcome::Enrolled
    );
    assert!(ledger.drop_enrollment(1, 102));
    assert_eq!(
        ledger.enroll(&students, &catalog, 1, 102),
        EnrollOutcome::Enrolled
    );

    // Both records survive; only one is active.
    assert_eq!(ledger.all_enrollments().len(), 2);
    assert_eq!(ledger.student_enrollments(1).len(), 1);
}

#[test]
fn independent_prerequisite_tracks_do_not_interfere() {
    let (students, catalog) = campus();
    let mut ledger = EnrollmentLedger::default();

    // Completing Mathematics unlocks Physics but says nothing about the
    // programming track.
    assert_eq!(
        ledger.enroll(&students, &catalog, 3, 102),
        EnrollOutcome::Enrolled
    );
    assert!(ledger.complete_enrollment(3, 102));
    assert_eq!(
        ledger.enroll(&students, &catalog, 3, 202),
        EnrollOutcome::Enrolled
    );
    assert_eq!(
        ledger.enroll(&students, &catalog, 3, 201),
        EnrollOutcome::PrerequisitesNotMet
    );
}
