//! Clock and date strings

use chrono::{DateTime, Local, TimeZone};

use crate::constants::clock::{DATE_FORMAT, TIME_FORMAT};

/// (time, date) for the header
pub fn format_clock<Tz: TimeZone>(now: &DateTime<Tz>) -> (String, String)
where
    Tz::Offset: std::fmt::Display,
{
    (
        now.format(TIME_FORMAT).to_string(),
        now.format(DATE_FORMAT).to_string(),
    )
}

pub fn now() -> (String, String) {
    format_clock(&Local::now())
}
