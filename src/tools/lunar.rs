//! Lunar Tool

use chrono::{DateTime, Utc};

use crate::lunar::{Ephemeris, LunarCalculator, LunarSnapshot};

/// Parse an RFC 3339 timestamp into UTC
pub fn parse_timestamp(at: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(at.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid timestamp '{}' (expected RFC 3339): {}", at, e))
}

/// Lunar snapshot at `at`, or now when no timestamp is given
pub fn moon_phase<E: Ephemeris>(
    calculator: &LunarCalculator<E>,
    at: Option<&str>,
) -> Result<LunarSnapshot, String> {
    match at {
        Some(s) => Ok(calculator.snapshot(parse_timestamp(s)?)),
        None => Ok(calculator.snapshot_now()),
    }
}
