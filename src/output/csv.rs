use crate::domain::model::{DayCounter, MONTH_NAMES};
use chrono::{Datelike, NaiveDate, NaiveTime};

/// The year the launch table covers.
const TALLY_YEAR: i32 = 2019;

const HEADER: &str = "date, value";

/// Lookup key for a calendar day in the table's label format: day of month
/// without a leading zero, a space, the full English month name. Built
/// explicitly so no locale or platform formatting directive is involved.
pub fn day_label(date: NaiveDate) -> String {
    format!("{} {}", date.day(), MONTH_NAMES[date.month0() as usize])
}

/// Renders one line per calendar day of the year in ascending order,
/// zero-filling days without a counted launch. Always 365 data rows plus
/// the header, each line `<rfc3339 timestamp>, <count>`.
pub fn render_daily_csv(counts: &DayCounter) -> String {
    let first = NaiveDate::from_ymd_opt(TALLY_YEAR, 1, 1).expect("first day of the year");
    let last = NaiveDate::from_ymd_opt(TALLY_YEAR, 12, 31).expect("last day of the year");

    let mut lines = vec![HEADER.to_string()];
    for day in first.iter_days().take_while(|d| *d <= last) {
        let value = counts.get(&day_label(day)).copied().unwrap_or(0);
        let timestamp = day.and_time(NaiveTime::MIN).and_utc().to_rfc3339();
        lines.push(format!("{}, {}", timestamp, value));
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}
