use crate::TimeSpan;
use chrono::prelude::*;
use chrono_tz::Tz;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
#[error("Due date: {0} is not a valid calendar date")]
pub struct InvalidDueDateError(pub String);

/// Parses a due date given by a client. Accepts RFC 3339 timestamps and
/// plain `YYYY-MM-DD` dates, where a plain date means midnight UTC.
/// Anything else is an error, never a silent coercion.
pub fn parse_due_date(datestr: &str) -> Result<i64, InvalidDueDateError> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(datestr) {
        return Ok(datetime.timestamp_millis());
    }

    let date = NaiveDate::parse_from_str(datestr, "%Y-%m-%d")
        .map_err(|_| InvalidDueDateError(datestr.to_string()))?;
    date.and_hms_opt(0, 0, 0)
        .map(|midnight| Utc.from_utc_datetime(&midnight).timestamp_millis())
        .ok_or_else(|| InvalidDueDateError(datestr.to_string()))
}

fn start_of_day(day: NaiveDate, tz: Tz) -> Option<DateTime<Tz>> {
    let midnight = day.and_hms_opt(0, 0, 0)?;
    // `earliest` resolves the ambiguous case where a DST transition
    // repeats the local midnight hour
    tz.from_local_datetime(&midnight).earliest()
}

/// The closed calendar-day interval containing `as_of` in the given
/// timezone: [00:00:00.000, 23:59:59.999] at millisecond granularity.
pub fn calendar_day_window(as_of: i64, tz: Tz) -> TimeSpan {
    let as_of_utc = Utc
        .timestamp_millis_opt(as_of)
        .single()
        .unwrap_or_else(Utc::now);
    let day = as_of_utc.with_timezone(&tz).date_naive();

    let start = start_of_day(day, tz)
        .map(|start| start.timestamp_millis())
        .unwrap_or(as_of);
    let end = day
        .succ_opt()
        .and_then(|next_day| start_of_day(next_day, tz))
        .map(|next_start| next_start.timestamp_millis() - 1)
        .unwrap_or(as_of);

    TimeSpan::new(start, end)
}
