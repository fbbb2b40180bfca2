//! # rollcall-enroll
//!
//! The enrollment core: the only part of the system with decision logic.
//!
//! This crate provides:
//! - `Enrollment` and `EnrollmentStatus` (the record type)
//! - `EnrollmentLedger` (append-only record log with admission rules)
//! - `WaitlistBoard` (per-course FIFO queues)
//! - `StudentLookup` / `CourseLookup` (the seam to the campus directories)
//!
//! It holds no student or course data of its own. Existence and
//! prerequisite questions are answered through the lookup traits, so the
//! ledger can be driven by the real directories or by test doubles.
//!
//! ## Data model
//!
//! ```text
//! EnrollmentLedger (append-only; records flip status, never vanish)
//!     consults  StudentLookup + CourseLookup
//! WaitlistBoard (course id -> FIFO of student ids; independent of both)
//! ```

pub mod ledger;
pub mod lookup;
pub mod record;
pub mod waitlist;

pub use ledger::{EnrollOutcome, EnrollmentLedger};
pub use lookup::{CourseLookup, StudentLookup};
pub use record::{Enrollment, EnrollmentStatus};
pub use waitlist::WaitlistBoard;
