//! Timestamps for roster snapshots.

use chrono::{DateTime, SecondsFormat, Utc};

/// UTC timestamp recorded when a roster is loaded.
pub type Timestamp = DateTime<Utc>;

#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// RFC 3339 rendering at second precision, e.g. `2024-05-01T08:30:00Z`.
#[must_use]
pub fn to_display(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn should_return_current_utc_time() {
        let before = Utc::now();
        let ts = now();
        let after = Utc::now();
        assert!(ts >= before);
        assert!(ts <= after);
    }

    #[test]
    fn should_render_seconds_precision_with_z_suffix() {
        let ts = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();
        assert_eq!(to_display(ts), "2024-05-01T08:30:00Z");
    }
}
