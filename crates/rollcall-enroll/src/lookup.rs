//! Lookup traits: the ledger's read-only view of the campus.

use rollcall_campus::{Course, CourseCatalog, CourseId, StudentDirectory, StudentId};

/// Answers whether a student id is known to the institution.
pub trait StudentLookup {
    fn student_exists(&self, id: StudentId) -> bool;
}

/// Resolves a course id to its catalog record.
///
/// The ledger only reads the prerequisite list and capacity from the
/// returned course; it never mutates the catalog.
pub trait CourseLookup {
    fn course(&self, id: CourseId) -> Option<&Course>;
}

impl StudentLookup for StudentDirectory {
    fn student_exists(&self, id: StudentId) -> bool {
        self.student(id).is_some()
    }
}

impl CourseLookup for CourseCatalog {
    fn course(&self, id: CourseId) -> Option<&Course> {
        self.course(id)
    }
}
