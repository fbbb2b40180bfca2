//! Course record: catalog entry with prerequisites and optional seat cap.

use serde::{Deserialize, Serialize};

use crate::CourseId;

/// A course offered by the institution.
///
/// `prerequisites` is an ordered list of course ids; the order is the
/// catalog's declared order and is preserved when reporting missing
/// prerequisites. `capacity` is an explicit seat cap — `None` means the
/// course is uncapped and can never be full.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub credits: u8,
    pub instructor: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prerequisites: Vec<CourseId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl Course {
    pub fn new(
        id: CourseId,
        name: impl Into<String>,
        credits: u8,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            credits,
            instructor: instructor.into(),
            prerequisites: Vec::new(),
            capacity: None,
        }
    }
}
