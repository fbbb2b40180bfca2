//! Keyed storage for students and courses.
//!
//! Both directories are deterministic `BTreeMap` repositories: inserts
//! reject duplicate ids, removals report whether anything was removed, and
//! iteration always runs in ascending id order.

use std::collections::BTreeMap;

use crate::{Course, CourseId, Student, StudentId};

/// Errors raised by directory inserts.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("student already registered: {0}")]
    DuplicateStudent(StudentId),

    #[error("course already listed: {0}")]
    DuplicateCourse(CourseId),
}

/// Id-keyed store of all known students.
#[derive(Debug, Clone, Default)]
pub struct StudentDirectory {
    students: BTreeMap<StudentId, Student>,
}

impl StudentDirectory {
    /// Register a student. Rejects an id that is already taken.
    pub fn add_student(&mut self, student: Student) -> Result<(), DirectoryError> {
        if self.students.contains_key(&student.id) {
            return Err(DirectoryError::DuplicateStudent(student.id));
        }
        self.students.insert(student.id, student);
        Ok(())
    }

    /// Remove a student by id. Returns whether a record was removed.
    pub fn remove_student(&mut self, id: StudentId) -> bool {
        self.students.remove(&id).is_some()
    }

    /// Lookup one student by id.
    pub fn student(&self, id: StudentId) -> Option<&Student> {
        self.students.get(&id)
    }

    /// Iterate all students in ascending id order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Id-keyed store of the course catalog.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: BTreeMap<CourseId, Course>,
}

impl CourseCatalog {
    /// List a course. Rejects an id that is already taken.
    pub fn add_course(&mut self, course: Course) -> Result<(), DirectoryError> {
        if self.courses.contains_key(&course.id) {
            return Err(DirectoryError::DuplicateCourse(course.id));
        }
        self.courses.insert(course.id, course);
        Ok(())
    }

    /// Remove a course by id. Returns whether a record was removed.
    pub fn remove_course(&mut self, id: CourseId) -> bool {
        self.courses.remove(&id).is_some()
    }

    /// Lookup one course by id.
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id)
    }

    /// Iterate all courses in ascending id order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.courses.values()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_student_rejects_duplicate_id() {
        let mut directory = StudentDirectory::default();
        directory
            .add_student(Student::new(1, "Alice Johnson"))
            .expect("first insert should succeed");

        let err = directory
            .add_student(Student::new(1, "Someone Else"))
            .expect_err("duplicate id must be rejected");
        assert!(matches!(err, DirectoryError::DuplicateStudent(1)));
        assert_eq!(
            directory.student(1).expect("student must remain").name,
            "Alice Johnson"
        );
    }

    #[test]
    fn remove_student_reports_presence() {
        let mut directory = StudentDirectory::default();
        directory
            .add_student(Student::new(7, "Bob Smith"))
            .expect("insert should succeed");

        assert!(directory.remove_student(7));
        assert!(!directory.remove_student(7));
        assert!(directory.is_empty());
    }

    #[test]
    fn students_iterate_in_id_order() {
        let mut directory = StudentDirectory::default();
        for id in [3, 1, 2] {
            directory
                .add_student(Student::new(id, format!("Student {id}")))
                .expect("insert should succeed");
        }

        let ids: Vec<_> = directory.students().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn catalog_rejects_duplicate_course() {
        let mut catalog = CourseCatalog::default();
        catalog
            .add_course(Course::new(101, "Introduction to Programming", 3, "Dr. Smith"))
            .expect("first insert should succeed");

        let err = catalog
            .add_course(Course::new(101, "Shadow Course", 1, "Nobody"))
            .expect_err("duplicate id must be rejected");
        assert!(matches!(err, DirectoryError::DuplicateCourse(101)));
    }

    #[test]
    fn course_round_trips_through_json() {
        let mut course = Course::new(201, "Data Structures", 4, "Dr. Johnson");
        course.prerequisites = vec![101];
        course.capacity = Some(30);

        let raw = serde_json::to_string(&course).expect("course should serialize");
        let back: Course = serde_json::from_str(&raw).expect("course should deserialize");
        assert_eq!(back.prerequisites, vec![101]);
        assert_eq!(back.capacity, Some(30));
    }

    #[test]
    fn course_defaults_apply_to_sparse_json() {
        let raw = r#"{"id":102,"name":"Mathematics","credits":3,"instructor":"Prof. Euler"}"#;
        let course: Course = serde_json::from_str(raw).expect("sparse course should parse");
        assert!(course.prerequisites.is_empty());
        assert_eq!(course.capacity, None);
    }
}
