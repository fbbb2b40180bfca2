//! Seed data for the sample campus.
//!
//! Every CLI invocation starts from this fixed roster; nothing is
//! persisted between runs.

use rollcall_campus::{Course, CourseCatalog, Student, StudentDirectory};

/// Build the sample campus: three students and a five-course catalog with
/// two prerequisite tracks. Introduction to Programming is capped at two
/// seats so the waitlist flow can be exercised.
pub fn sample_campus() -> (StudentDirectory, CourseCatalog) {
    let mut students = StudentDirectory::default();
    for (id, name, email, phone, address) in [
        (1, "Alice Johnson", "alice@university.edu", "555-0101", "123 Main St"),
        (2, "Bob Smith", "bob@university.edu", "555-0102", "456 Oak Ave"),
        (3, "Charlie Brown", "charlie@university.edu", "555-0103", "789 Pine Rd"),
    ] {
        let mut student = Student::new(id, name);
        student.email = email.to_string();
        student.phone = phone.to_string();
        student.address = address.to_string();
        students
            .add_student(student)
            .expect("sample student ids are distinct");
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
        catalog
            .add_course(course)
            .expect("sample course ids are distinct");
    }

    (students, catalog)
}
