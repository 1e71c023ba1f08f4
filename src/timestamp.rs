use chrono::{Local, NaiveDateTime};

/// Time and date strings carried in an action record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiTimestamp {
    pub timestamp: String,
    pub date: String,
}

pub fn display_timestamp() -> String {
    display_timestamp_at(Local::now().naive_local())
}

/// `3:04 PM on Friday, October 16`
pub fn display_timestamp_at(now: NaiveDateTime) -> String {
    format!(
        "{} on {}",
        now.format("%-I:%M %p"),
        now.format("%A, %B %-d")
    )
}

pub fn api_timestamp() -> ApiTimestamp {
    api_timestamp_at(Local::now().naive_local())
}

pub fn api_timestamp_at(now: NaiveDateTime) -> ApiTimestamp {
    ApiTimestamp {
        timestamp: now.format("%-I:%M %p").to_string(),
        date: now.format("%A, %B %-d, %Y").to_string(),
    }
}
