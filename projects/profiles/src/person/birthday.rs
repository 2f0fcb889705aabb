use chrono::{Datelike, Local, NaiveDate};

use super::models::Person;

pub const BIRTHDAY_GREETING: &str = "Happy birthday!";
pub const DEFAULT_GREETING: &str = "Good morning!";

impl Person {
    /// Month and day must match `today`; the year is ignored.
    pub fn is_birthday(&self, today: NaiveDate) -> bool {
        self.date_of_birth.month() == today.month() && self.date_of_birth.day() == today.day()
    }

    pub fn greet(&self, today: NaiveDate) -> &'static str {
        if self.is_birthday(today) {
            BIRTHDAY_GREETING
        } else {
            DEFAULT_GREETING
        }
    }

    pub fn is_birthday_today(&self) -> bool {
        self.is_birthday(local_today())
    }

    pub fn greet_today(&self) -> &'static str {
        self.greet(local_today())
    }
}

/// Current date on the local system clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
