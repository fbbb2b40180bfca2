//! # rollcall-campus
//!
//! Passive lookup collaborators for the enrollment core.
//!
//! This crate provides:
//! - `Student` and `Course` value types
//! - `StudentDirectory` and `CourseCatalog` (keyed, deterministic storage)
//!
//! It intentionally contains no enrollment logic. Admission rules,
//! prerequisite checks, and waitlists live in `rollcall-enroll`; this crate
//! only answers "who is this id" questions.

pub mod course;
pub mod directory;
pub mod student;

pub use course::Course;
pub use directory::{CourseCatalog, DirectoryError, StudentDirectory};
pub use student::Student;

/// Numeric student identifier, assigned by the institution.
pub type StudentId = i32;

/// Numeric course identifier (catalog number).
pub type CourseId = i32;
