//! Seeded campus rosters: who studies here and what is on offer.

use serde_json::json;

use crate::sample::sample_campus;

pub fn run(json_output: bool) {
    let (students, catalog) = sample_campus();

    if json_output {
        let student_items = students.students().collect::<Vec<_>>();
        let course_items = catalog.courses().collect::<Vec<_>>();
        let payload = json!({
            "action": "roster",
            "studentCount": student_items.len(),
            "students": student_items,
            "courseCount": course_items.len(),
            "courses": course_items
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("rollcall roster");
        println!("  Students: {}", students.len());
        for student in students.students() {
            println!("    - {} {} <{}>", student.id, student.name, student.email);
        }
        println!("  Courses: {}", catalog.len());
        for course in catalog.courses() {
            println!(
                "    - {} {} ({} cr, {})",
                course.id, course.name, course.credits, course.instructor
            );
            if !course.prerequisites.is_empty() {
                let prereqs = course
                    .prerequisites
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("      prerequisites: {prereqs}");
            }
            if let Some(capacity) = course.capacity {
                println!("      capacity: {capacity}");
            }
        }
    }
}
