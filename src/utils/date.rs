// Snapshot timestamp formatting

use chrono::{DateTime, Local, TimeZone};

/// Display format for snapshot timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format any zoned datetime for the summary header
pub fn format_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, used when the caller supplies no timestamp
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}
