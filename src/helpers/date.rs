//! Date helper functions

use chrono::NaiveDate;

/// Format date in full format (like "January 2, 2006")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
