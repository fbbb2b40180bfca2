//! Append-only enrollment ledger and the admission rules over it.

use std::collections::BTreeSet;

use rollcall_campus::{CourseId, StudentId};
use serde::{Deserialize, Serialize};

use crate::lookup::{CourseLookup, StudentLookup};
use crate::record::{Enrollment, EnrollmentStatus};

/// Outcome of an enrollment request.
///
/// Every precondition violation is an ordinary value the caller branches
/// on; nothing here is an error in the `Result` sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollOutcome {
    Enrolled,
    StudentNotFound,
    CourseNotFound,
    AlreadyEnrolled,
    PrerequisitesNotMet,
    CourseFull,
}

impl EnrollOutcome {
    pub fn is_enrolled(self) -> bool {
        self == EnrollOutcome::Enrolled
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnrollOutcome::Enrolled => "enrolled",
            EnrollOutcome::StudentNotFound => "student_not_found",
            EnrollOutcome::CourseNotFound => "course_not_found",
            EnrollOutcome::AlreadyEnrolled => "already_enrolled",
            EnrollOutcome::PrerequisitesNotMet => "prerequisites_not_met",
            EnrollOutcome::CourseFull => "course_full",
        }
    }
}

/// The authoritative log of every enrollment ever created.
///
/// Records are appended, never deleted; leaving a course flips the record's
/// status instead. Queries hand out shared references, so callers can
/// inspect history but only the ledger itself can change it.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentLedger {
    records: Vec<Enrollment>,
}

impl EnrollmentLedger {
    /// Attempt to enroll a student in a course.
    ///
    /// Checks run in a fixed order and the first failure wins: student
    /// exists, course exists, not already actively enrolled, prerequisites
    /// completed, seat available. Only on `Enrolled` is a record appended.
    pub fn enroll(
        &mut self,
        students: &impl StudentLookup,
        courses: &impl CourseLookup,
        student_id: StudentId,
        course_id: CourseId,
    ) -> EnrollOutcome {
        if !students.student_exists(student_id) {
            return EnrollOutcome::StudentNotFound;
        }

        let Some(course) = courses.course(course_id) else {
            return EnrollOutcome::CourseNotFound;
        };

        if self.is_actively_enrolled(student_id, course_id) {
            return EnrollOutcome::AlreadyEnrolled;
        }

        if !self.has_prerequisites(courses, student_id, course_id) {
            return EnrollOutcome::PrerequisitesNotMet;
        }

        if let Some(capacity) = course.capacity
            && self.active_course_count(course_id) >= capacity as usize
        {
            return EnrollOutcome::CourseFull;
        }

        self.records.push(Enrollment::new(student_id, course_id));
        EnrollOutcome::Enrolled
    }

    /// Drop a student's active enrollment. Returns whether one existed.
    pub fn drop_enrollment(&mut self, student_id: StudentId, course_id: CourseId) -> bool {
        self.transition_active(student_id, course_id, EnrollmentStatus::Dropped)
    }

    /// Mark a student's active enrollment completed.
    ///
    /// This is the administrative action that makes the course count toward
    /// prerequisite checks; nothing triggers it automatically.
    pub fn complete_enrollment(&mut self, student_id: StudentId, course_id: CourseId) -> bool {
        self.transition_active(student_id, course_id, EnrollmentStatus::Completed)
    }

    /// Withdraw a student's active enrollment.
    pub fn withdraw_enrollment(&mut self, student_id: StudentId, course_id: CourseId) -> bool {
        self.transition_active(student_id, course_id, EnrollmentStatus::Withdrawn)
    }

    /// Active enrollments for one student.
    pub fn student_enrollments(&self, student_id: StudentId) -> Vec<&Enrollment> {
        self.records
            .iter()
            .filter(|record| record.student_id == student_id && record.is_active())
            .collect()
    }

    /// Active enrollments for one course.
    pub fn course_enrollments(&self, course_id: CourseId) -> Vec<&Enrollment> {
        self.records
            .iter()
            .filter(|record| record.course_id == course_id && record.is_active())
            .collect()
    }

    /// Every record ever created, regardless of status, in creation order.
    pub fn all_enrollments(&self) -> &[Enrollment] {
        &self.records
    }

    /// Number of active enrollments in a course (the seat count).
    pub fn active_course_count(&self, course_id: CourseId) -> usize {
        self.records
            .iter()
            .filter(|record| record.course_id == course_id && record.is_active())
            .count()
    }

    /// Whether the student has completed every prerequisite of the course.
    ///
    /// Vacuously true when the course has no prerequisites or does not
    /// exist at all.
    pub fn has_prerequisites(
        &self,
        courses: &impl CourseLookup,
        student_id: StudentId,
        course_id: CourseId,
    ) -> bool {
        let Some(course) = courses.course(course_id) else {
            return true;
        };
        if course.prerequisites.is_empty() {
            return true;
        }

        let completed = self.completed_courses(student_id);
        course
            .prerequisites
            .iter()
            .all(|prereq| completed.contains(prereq))
    }

    /// Prerequisites the student has not completed, in the course's
    /// declared order. Empty when the course does not exist.
    pub fn missing_prerequisites(
        &self,
        courses: &impl CourseLookup,
        student_id: StudentId,
        course_id: CourseId,
    ) -> Vec<CourseId> {
        let Some(course) = courses.course(course_id) else {
            return Vec::new();
        };

        let completed = self.completed_courses(student_id);
        course
            .prerequisites
            .iter()
            .copied()
            .filter(|prereq| !completed.contains(prereq))
            .collect()
    }

    fn is_actively_enrolled(&self, student_id: StudentId, course_id: CourseId) -> bool {
        self.records.iter().any(|record| {
            record.student_id == student_id && record.course_id == course_id && record.is_active()
        })
    }

    fn completed_courses(&self, student_id: StudentId) -> BTreeSet<CourseId> {
        self.records
            .iter()
            .filter(|record| record.student_id == student_id && record.is_completed())
            .map(|record| record.course_id)
            .collect()
    }

    /// Flip the first active (student, course) record to `next_status`.
    fn transition_active(
        &mut self,
        student_id: StudentId,
        course_id: CourseId,
        next_status: EnrollmentStatus,
    ) -> bool {
        let Some(record) = self.records.iter_mut().find(|record| {
            record.student_id == student_id && record.course_id == course_id && record.is_active()
        }) else {
            return false;
        };
        record.status = next_status;
        true
    }
}
