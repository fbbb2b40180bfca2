//! Enrollment record: one student's registration in one course.

use chrono::{DateTime, Utc};
use rollcall_campus::{CourseId, StudentId};
use serde::{Deserialize, Serialize};

/// Lifecycle of an enrollment record.
///
/// A record starts `Active` and leaves that state exactly once; there is no
/// way back. Re-enrolling after a drop creates a brand-new record instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Active,
    Completed,
    Dropped,
    Withdrawn,
}

impl EnrollmentStatus {
    pub fn is_active(self) -> bool {
        self == EnrollmentStatus::Active
    }

    pub fn is_completed(self) -> bool {
        self == EnrollmentStatus::Completed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnrollmentStatus::Active => "active",
            EnrollmentStatus::Completed => "completed",
            EnrollmentStatus::Dropped => "dropped",
            EnrollmentStatus::Withdrawn => "withdrawn",
        }
    }
}

/// A single registration of a student in a course.
///
/// Identity (`student_id`, `course_id`, `enrolled_at`) is fixed at
/// creation; only `status` changes afterwards, and only through the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enrollment {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub status: EnrollmentStatus,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    pub fn new(student_id: StudentId, course_id: CourseId) -> Self {
        Self {
            student_id,
            course_id,
            status: EnrollmentStatus::Active,
            enrolled_at: Utc::now(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_records_start_active() {
        let record = Enrollment::new(1, 101);
        assert!(record.is_active());
        assert!(!record.is_completed());
    }

    #[test]
    fn status_serializes_snake_case() {
        let raw = serde_json::to_string(&EnrollmentStatus::Withdrawn)
            .expect("status should serialize");
        assert_eq!(raw, r#""withdrawn""#);

        let back: EnrollmentStatus =
            serde_json::from_str(r#""completed""#).expect("status should deserialize");
        assert!(back.is_completed());
    }
}
