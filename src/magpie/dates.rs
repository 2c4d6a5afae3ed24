//! Date rendering for stored quote timestamps.
//!
//! Both forms are computed in UTC so that output does not depend on the host
//! timezone. Unparseable input renders as `Invalid Date`.

use crate::model::parse_timestamp;

pub const INVALID_DATE: &str = "Invalid Date";

/// `Jan 5, 2024`
pub fn format_short(raw: &str) -> String {
    format_with(raw, "%b %-d, %Y")
}

/// `January 5, 2024`
pub fn format_long(raw: &str) -> String {
    format_with(raw, "%B %-d, %Y")
}

fn format_with(raw: &str, pattern: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format(pattern).to_string(),
        None => INVALID_DATE.to_string(),
    }
}
