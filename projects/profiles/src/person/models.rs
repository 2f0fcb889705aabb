use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A person known only by their date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub date_of_birth: NaiveDate,
}

impl Person {
    pub fn new(date_of_birth: NaiveDate) -> Self {
        Self { date_of_birth }
    }
}
