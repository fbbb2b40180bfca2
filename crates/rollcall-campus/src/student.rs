//! Student record: a contact-card value object.

use serde::{Deserialize, Serialize};

use crate::StudentId;

/// A student known to the institution.
///
/// Pure data; whether a student may enroll in anything is decided by the
/// enrollment ledger, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address: String,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }
}
