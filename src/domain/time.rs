use crate::errors::UtilError;
use chrono::{DateTime, NaiveTime, TimeZone, Timelike, Utc};
use ethers::types::U256;

/// 2050-01-01T00:00:00Z. Marks orders where the user never picked an expiry;
/// far enough out that no real selection collides with it.
pub const INITIAL_ORDER_EXPIRY_UNIX_TIMESTAMP_SEC: u64 = 2_524_608_000;

// `%m` is the month, not the minute: the portal has always shown `h:MMa`.
const READABLE_FORMAT: &str = "%-I:%m%P %B %-d %Y";

pub fn initial_order_expiry_unix_timestamp_sec() -> U256 {
    U256::from(INITIAL_ORDER_EXPIRY_UNIX_TIMESTAMP_SEC)
}

/// Unix seconds for `date`, with its hour and minute replaced by those of
/// `time` when given. Seconds are kept from `date`. Negative before 1970.
pub fn convert_to_unix_timestamp_seconds(date: DateTime<Utc>, time: Option<NaiveTime>) -> i64 {
    let combined = match time {
        Some(t) => date
            .with_hour(t.hour())
            .and_then(|d| d.with_minute(t.minute()))
            .unwrap_or(date),
        None => date,
    };
    combined.timestamp()
}

pub fn convert_to_date_time_from_unix_timestamp(unix_timestamp_sec: i64) -> Result<DateTime<Utc>, UtilError> {
    Utc.timestamp_opt(unix_timestamp_sec, 0)
        .single()
        .ok_or_else(|| UtilError::TimestampOutOfRange(unix_timestamp_sec.to_string()))
}

/// Renders e.g. `3:01pm January 1 2050` for 15:05 on 2050-01-01.
pub fn convert_to_readable_date_time_from_unix_timestamp(unix_timestamp_sec: i64) -> Result<String, UtilError> {
    let dt = convert_to_date_time_from_unix_timestamp(unix_timestamp_sec)?;
    Ok(dt.format(READABLE_FORMAT).to_string())
}
