//! Scripted walkthrough of the enrollment rules on the sample campus.

use rollcall_campus::{CourseCatalog, CourseId, StudentDirectory, StudentId};
use rollcall_enroll::{EnrollmentLedger, WaitlistBoard};
use serde_json::json;

use crate::sample::sample_campus;

struct DemoStep {
    description: String,
    outcome: String,
}

pub fn run(json_output: bool) {
    let (students, catalog) = sample_campus();
    let mut ledger = EnrollmentLedger::default();
    let mut board = WaitlistBoard::default();
    let mut steps: Vec<DemoStep> = Vec::new();

    let mut record = |description: String, outcome: String| {
        steps.push(DemoStep {
            description,
            outcome,
        });
    };

    // Alice takes the intro course while seats are open.
    let outcome = ledger.enroll(&students, &catalog, 1, 101);
    record(
        describe_enroll(&students, &catalog, 1, 101),
        outcome.as_str().to_string(),
    );

    // Bob tries to skip ahead and is told what is missing.
    let outcome = ledger.enroll(&students, &catalog, 2, 201);
    let missing = ledger.missing_prerequisites(&catalog, 2, 201);
    record(
        describe_enroll(&students, &catalog, 2, 201),
        format!(
            "{} (missing: {})",
            outcome.as_str(),
            join_ids(&missing)
        ),
    );

    // So Bob starts with the prerequisite instead, filling the course.
    let outcome = ledger.enroll(&students, &catalog, 2, 101);
    record(
        describe_enroll(&students, &catalog, 2, 101),
        outcome.as_str().to_string(),
    );

    // Charlie bounces off the full course and joins the waitlist.
    let outcome = ledger.enroll(&students, &catalog, 3, 101);
    record(
        describe_enroll(&students, &catalog, 3, 101),
        outcome.as_str().to_string(),
    );
    board.join(101, 3);
    record(
        format!(
            "{} joins the waitlist for {}",
            student_name(&students, 3),
            course_name(&catalog, 101)
        ),
        match board.position(101, 3) {
            Some(position) => format!("waiting at position {position}"),
            None => "not waiting".to_string(),
        },
    );

    // An administrator marks Bob's intro course completed.
    let completed = ledger.complete_enrollment(2, 101);
    record(
        format!(
            "registrar marks {} completed for {}",
            course_name(&catalog, 101),
            student_name(&students, 2)
        ),
        if completed { "completed" } else { "no active record" }.to_string(),
    );

    // The freed seat goes to the head of the queue.
    match board.admit_next(101) {
        Some(admitted) => {
            let outcome = ledger.enroll(&students, &catalog, admitted, 101);
            record(
                format!(
                    "{} is admitted from the waitlist into {}",
                    student_name(&students, admitted),
                    course_name(&catalog, 101)
                ),
                outcome.as_str().to_string(),
            );
        }
        None => record(
            format!("admit next from the {} waitlist", course_name(&catalog, 101)),
            "nobody waiting".to_string(),
        ),
    }

    // With the prerequisite completed, Bob's original plan works.
    let outcome = ledger.enroll(&students, &catalog, 2, 201);
    record(
        describe_enroll(&students, &catalog, 2, 201),
        outcome.as_str().to_string(),
    );

    let active: Vec<&rollcall_enroll::Enrollment> = ledger
        .all_enrollments()
        .iter()
        .filter(|record| record.is_active())
        .collect();

    if json_output {
        let step_items = steps
            .iter()
            .enumerate()
            .map(|(index, step)| {
                json!({
                    "step": index + 1,
                    "description": step.description,
                    "outcome": step.outcome
                })
            })
            .collect::<Vec<_>>();
        let active_items = active
            .iter()
            .map(|record| {
                json!({
                    "studentId": record.student_id,
                    "student": student_name(&students, record.student_id),
                    "courseId": record.course_id,
                    "course": course_name(&catalog, record.course_id)
                })
            })
            .collect::<Vec<_>>();
        let payload = json!({
            "action": "demo",
            "steps": step_items,
            "activeEnrollments": active_items,
            "recordCount": ledger.all_enrollments().len()
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("rollcall demo");
        for (index, step) in steps.iter().enumerate() {
            println!("  {}. {}: {}", index + 1, step.description, step.outcome);
        }
        println!("  Active enrollments:");
        for record in &active {
            println!(
                "    - {} in {}",
                student_name(&students, record.student_id),
                course_name(&catalog, record.course_id)
            );
        }
        println!("  Records on the ledger: {}", ledger.all_enrollments().len());
    }
}

fn describe_enroll(
    students: &StudentDirectory,
    catalog: &CourseCatalog,
    student_id: StudentId,
    course_id: CourseId,
) -> String {
    format!(
        "{} enrolls in {}",
        student_name(students, student_id),
        course_name(catalog, course_id)
    )
}

fn student_name(students: &StudentDirectory, id: StudentId) -> String {
    students
        .student(id)
        .map(|student| student.name.clone())
        .unwrap_or_else(|| format!("student {id}"))
}

fn course_name(catalog: &CourseCatalog, id: CourseId) -> String {
    catalog
        .course(id)
        .map(|course| course.name.clone())
        .unwrap_or_else(|| format!("course {id}"))
}

fn join_ids(ids: &[CourseId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
