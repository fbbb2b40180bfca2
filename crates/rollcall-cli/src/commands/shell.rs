//! Interactive enrollment session over the sample campus.
//!
//! A menu loop reading stdin line by line. The session holds one in-memory
//! campus; nothing survives past exit.

use std::io::{self, BufRead, Write};

use rollcall_campus::{Course, CourseCatalog, Student, StudentDirectory};
use rollcall_enroll::{EnrollmentLedger, WaitlistBoard};

use crate::sample::sample_campus;

pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::seeded();
    session.run(&mut stdin.lock(), &mut stdout.lock())
}

struct Session {
    students: StudentDirectory,
    catalog: CourseCatalog,
    ledger: EnrollmentLedger,
    board: WaitlistBoard,
}

impl Session {
    fn seeded() -> Self {
        let (students, catalog) = sample_campus();
        Session {
            students,
            catalog,
            ledger: EnrollmentLedger::default(),
            board: WaitlistBoard::default(),
        }
    }

    fn run(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        loop {
            writeln!(out)?;
            writeln!(out, "=== Rollcall ===")?;
            writeln!(out, "1. Students")?;
            writeln!(out, "2. Courses")?;
            writeln!(out, "3. Enrollment")?;
            writeln!(out, "4. Reports")?;
            writeln!(out, "5. Waitlists")?;
            writeln!(out, "0. Exit")?;
            let Some(choice) = prompt(input, out, "Choice: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.students_menu(input, out)?,
                "2" => self.courses_menu(input, out)?,
                "3" => self.enrollment_menu(input, out)?,
                "4" => self.reports_menu(input, out)?,
                "5" => self.waitlists_menu(input, out)?,
                "0" => return Ok(()),
                other => writeln!(out, "Unknown choice: {other}")?,
            }
        }
    }

    fn students_menu(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- Students ---")?;
        writeln!(out, "1. Add student")?;
        writeln!(out, "2. Remove student")?;
        writeln!(out, "3. List students")?;
        writeln!(out, "0. Back")?;
        let Some(choice) = prompt(input, out, "Choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(id) = prompt_id(input, out, "Student id: ")? else {
                    return Ok(());
                };
                let Some(name) = prompt(input, out, "Name: ")? else {
                    return Ok(());
                };
                match self.students.add_student(Student::new(id, name)) {
                    Ok(()) => writeln!(out, "Student {id} added")?,
                    Err(e) => writeln!(out, "Rejected: {e}")?,
                }
            }
            "2" => {
                let Some(id) = prompt_id(input, out, "Student id: ")? else {
                    return Ok(());
                };
                if self.students.remove_student(id) {
                    writeln!(out, "Student {id} removed")?;
                } else {
                    writeln!(out, "No student with id {id}")?;
                }
            }
            "3" => {
                writeln!(out, "Students ({}):", self.students.len())?;
                for student in self.students.students() {
                    writeln!(out, "  {} {} <{}>", student.id, student.name, student.email)?;
                }
            }
            "0" => {}
            other => writeln!(out, "Unknown choice: {other}")?,
        }
        Ok(())
    }

    fn courses_menu(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- Courses ---")?;
        writeln!(out, "1. Add course")?;
        writeln!(out, "2. Remove course")?;
        writeln!(out, "3. List courses")?;
        writeln!(out, "0. Back")?;
        let Some(choice) = prompt(input, out, "Choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(id) = prompt_id(input, out, "Course id: ")? else {
                    return Ok(());
                };
                let Some(name) = prompt(input, out, "Name: ")? else {
                    return Ok(());
                };
                let Some(credits) = prompt_parsed::<u8>(input, out, "Credits: ")? else {
                    return Ok(());
                };
                let Some(instructor) = prompt(input, out, "Instructor: ")? else {
                    return Ok(());
                };
                match self
                    .catalog
                    .add_course(Course::new(id, name, credits, instructor))
                {
                    Ok(()) => writeln!(out, "Course {id} added")?,
                    Err(e) => writeln!(out, "Rejected: {e}")?,
                }
            }
            "2" => {
                let Some(id) = prompt_id(input, out, "Course id: ")? else {
                    return Ok(());
                };
                if self.catalog.remove_course(id) {
                    writeln!(out, "Course {id} removed")?;
                } else {
                    writeln!(out, "No course with id {id}")?;
                }
            }
            "3" => {
                writeln!(out, "Courses ({}):", self.catalog.len())?;
                for course in self.catalog.courses() {
                    write!(
                        out,
                        "  {} {} ({} cr, {})",
                        course.id, course.name, course.credits, course.instructor
                    )?;
                    if !course.prerequisites.is_empty() {
                        write!(out, " prereqs {:?}", course.prerequisites)?;
                    }
                    if let Some(capacity) = course.capacity {
                        write!(out, " cap {capacity}")?;
                    }
                    writeln!(out)?;
                }
            }
            "0" => {}
            other => writeln!(out, "Unknown choice: {other}")?,
        }
        Ok(())
    }

    fn enrollment_menu(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- Enrollment ---")?;
        writeln!(out, "1. Enroll student")?;
        writeln!(out, "2. Drop enrollment")?;
        writeln!(out, "3. Mark completed")?;
        writeln!(out, "4. Withdraw")?;
        writeln!(out, "0. Back")?;
        let Some(choice) = prompt(input, out, "Choice: ")? else {
            return Ok(());
        };
        if choice == "0" {
            return Ok(());
        }
        if !matches!(choice.as_str(), "1" | "2" | "3" | "4") {
            writeln!(out, "Unknown choice: {choice}")?;
            return Ok(());
        }
        let Some(student_id) = prompt_id(input, out, "Student id: ")? else {
            return Ok(());
        };
        let Some(course_id) = prompt_id(input, out, "Course id: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let outcome =
                    self.ledger
                        .enroll(&self.students, &self.catalog, student_id, course_id);
                writeln!(out, "Result: {}", outcome.as_str())?;
                if !outcome.is_enrolled() {
                    let missing =
                        self.ledger
                            .missing_prerequisites(&self.catalog, student_id, course_id);
                    if !missing.is_empty() {
                        writeln!(out, "Missing prerequisites: {missing:?}")?;
                    }
                }
            }
            "2" => {
                if self.ledger.drop_enrollment(student_id, course_id) {
                    writeln!(out, "Dropped")?;
                } else {
                    writeln!(out, "No active enrollment")?;
                }
            }
            "3" => {
                if self.ledger.complete_enrollment(student_id, course_id) {
                    writeln!(out, "Marked completed")?;
                } else {
                    writeln!(out, "No active enrollment")?;
                }
            }
            "4" => {
                if self.ledger.withdraw_enrollment(student_id, course_id) {
                    writeln!(out, "Withdrawn")?;
                } else {
                    writeln!(out, "No active enrollment")?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn reports_menu(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- Reports ---")?;
        writeln!(out, "1. Student schedule")?;
        writeln!(out, "2. Course roster")?;
        writeln!(out, "3. Full ledger")?;
        writeln!(out, "0. Back")?;
        let Some(choice) = prompt(input, out, "Choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(student_id) = prompt_id(input, out, "Student id: ")? else {
                    return Ok(());
                };
                let records = self.ledger.student_enrollments(student_id);
                writeln!(out, "Active enrollments ({}):", records.len())?;
                for record in records {
                    let name = self
                        .catalog
                        .course(record.course_id)
                        .map(|c| c.name.as_str())
                        .unwrap_or("(removed course)");
                    writeln!(out, "  {} {}", record.course_id, name)?;
                }
            }
            "2" => {
                let Some(course_id) = prompt_id(input, out, "Course id: ")? else {
                    return Ok(());
                };
                let records = self.ledger.course_enrollments(course_id);
                writeln!(out, "Enrolled students ({}):", records.len())?;
                for record in records {
                    let name = self
                        .students
                        .student(record.student_id)
                        .map(|s| s.name.as_str())
                        .unwrap_or("(removed student)");
                    writeln!(out, "  {} {}", record.student_id, name)?;
                }
            }
            "3" => {
                let records = self.ledger.all_enrollments();
                writeln!(out, "Ledger ({} records):", records.len())?;
                for record in records {
                    writeln!(
                        out,
                        "  student {} course {} {}",
                        record.student_id,
                        record.course_id,
                        record.status.as_str()
                    )?;
                }
            }
            "0" => {}
            other => writeln!(out, "Unknown choice: {other}")?,
        }
        Ok(())
    }

    fn waitlists_menu(&mut self, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "--- Waitlists ---")?;
        writeln!(out, "1. Join waitlist")?;
        writeln!(out, "2. Admit next")?;
        writeln!(out, "3. Leave waitlist")?;
        writeln!(out, "4. Show queue")?;
        writeln!(out, "0. Back")?;
        let Some(choice) = prompt(input, out, "Choice: ")? else {
            return Ok(());
        };
        match choice.as_str() {
            "1" => {
                let Some(course_id) = prompt_id(input, out, "Course id: ")? else {
                    return Ok(());
                };
                let Some(student_id) = prompt_id(input, out, "Student id: ")? else {
                    return Ok(());
                };
                if self.board.join(course_id, student_id) {
                    match self.board.position(course_id, student_id) {
                        Some(position) => writeln!(out, "Joined at position {position}")?,
                        None => writeln!(out, "Joined")?,
                    }
                } else {
                    writeln!(out, "Already on that waitlist")?;
                }
            }
            "2" => {
                let Some(course_id) = prompt_id(input, out, "Course id: ")? else {
                    return Ok(());
                };
                match self.board.admit_next(course_id) {
                    Some(student_id) => {
                        let outcome = self.ledger.enroll(
                            &self.students,
                            &self.catalog,
                            student_id,
                            course_id,
                        );
                        writeln!(
                            out,
                            "Admitted student {student_id}: {}",
                            outcome.as_str()
                        )?;
                    }
                    None => writeln!(out, "Nobody waiting")?,
                }
            }
            "3" => {
                let Some(course_id) = prompt_id(input, out, "Course id: ")? else {
                    return Ok(());
                };
                let Some(student_id) = prompt_id(input, out, "Student id: ")? else {
                    return Ok(());
                };
                if self.board.leave(course_id, student_id) {
                    writeln!(out, "Removed from the waitlist")?;
                } else {
                    writeln!(out, "Not on that waitlist")?;
                }
            }
            "4" => {
                let Some(course_id) = prompt_id(input, out, "Course id: ")? else {
                    return Ok(());
                };
                let waiting = self.board.waiting(course_id);
                writeln!(out, "Waiting ({}):", waiting.len())?;
                for (index, student_id) in waiting.iter().enumerate() {
                    let name = self
                        .students
                        .student(*student_id)
                        .map(|s| s.name.as_str())
                        .unwrap_or("(removed student)");
                    writeln!(out, "  {}. {} {}", index + 1, student_id, name)?;
                }
            }
            "0" => {}
            other => writeln!(out, "Unknown choice: {other}")?,
        }
        Ok(())
    }
}

/// Print a prompt and read one trimmed line. `None` means end of input.
fn prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<String>> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt_id(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<i32>> {
    prompt_parsed(input, out, label)
}

fn prompt_parsed<T: std::str::FromStr>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    label: &str,
) -> io::Result<Option<T>> {
    loop {
        let Some(line) = prompt(input, out, label)? else {
            return Ok(None);
        };
        match line.parse::<T>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "Not a number: {line}")?,
        }
    }
}
