use crate::domain::model::{DayCounter, LaunchRow, MONTH_NAMES};
use crate::utils::error::{EtlError, Result};
use regex::Regex;

/// Status fragments that mark a launch as counted.
const QUALIFYING_STATUSES: [&str; 3] = ["operational", "successful", "en route"];

/// Counts qualifying launches per `"<day> <Month>"` label.
///
/// Rows whose status does not contain one of [`QUALIFYING_STATUSES`]
/// (case-insensitive) are dropped. Consecutive rows sharing one date label
/// belong to a single multi-payload launch and are counted once. Pure
/// function of the row sequence.
pub fn tally_by_day(rows: &[LaunchRow]) -> Result<DayCounter> {
    let label_pattern = Regex::new(&format!(r"\d*\s({})", MONTH_NAMES.join("|")))
        .expect("Invalid day-and-month pattern");

    let mut counts = DayCounter::new();
    let mut current_date = String::new();

    for row in rows {
        let status = row.result.to_lowercase();
        if !QUALIFYING_STATUSES.iter().any(|s| status.contains(s)) {
            continue;
        }

        if row.date == current_date {
            // continuation row of the launch we already counted
            continue;
        }
        current_date = row.date.clone();

        let label = label_pattern
            .find(&current_date)
            .ok_or_else(|| EtlError::DateLabelError {
                label: current_date.clone(),
            })?
            .as_str()
            .to_string();

        *counts.entry(label).or_insert(0) += 1;
    }

    Ok(counts)
}
