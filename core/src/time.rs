//! Time related utils.

use chrono::Utc;

/// DateTime in UTC, the only time zone signers care about.
pub type DateTime = chrono::DateTime<Utc>;

/// Current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time as seconds since the unix epoch, e.g. `"1191242096"`.
pub fn format_unix_timestamp(t: DateTime) -> String {
    t.timestamp().to_string()
}

/// Parse a unix timestamp in seconds back into a DateTime.
pub fn parse_unix_timestamp(s: &str) -> crate::Result<DateTime> {
    let secs: i64 = s.parse().map_err(|e| {
        crate::Error::request_invalid(format!("invalid unix timestamp {s:?}")).with_source(
            anyhow::Error::new(e),
        )
    })?;

    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| crate::Error::request_invalid(format!("unix timestamp {s} out of range")))
}
