use chrono::{Local, TimeZone};

/// Second-granularity timestamp format used for session bounds and SQL
/// start times
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

pub const MICROS_PER_SECOND: i64 = 1_000_000;

/// Format an epoch-microsecond timestamp as a local-time YYYYMMDDHHMMSS
/// string, discarding the sub-second component.
///
/// Local time matches what the database host wrote into the log. Returns
/// `None` when the value falls outside chrono's representable range.
pub fn format_epoch_micros(micros: i64) -> Option<String> {
    let secs = micros.div_euclid(MICROS_PER_SECOND);
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

/// Sub-second remainder of an epoch-microsecond timestamp
pub fn micros_remainder(micros: i64) -> i64 {
    micros.rem_euclid(MICROS_PER_SECOND)
}
