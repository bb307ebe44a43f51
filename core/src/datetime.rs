//! Local-time handling: UTC normalization and date path segments.

use chrono::{Datelike, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::FlexError;

// Flex local timestamps carry no offset; fractional seconds and the space
// separator both occur in the wild.
const LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Convert a local timestamp in the named IANA zone to an RFC 3339 UTC
/// string with an explicit `+00:00` offset.
///
/// Fails with [`FlexError::Parse`] when the timestamp does not match the
/// expected format, the zone name is unrecognized, or the local time does
/// not exist in that zone (DST gap). Ambiguous local times (DST overlap)
/// resolve to the earlier instant.
pub fn to_utc(local: &str, zone: &str) -> Result<String, FlexError> {
    let tz: Tz = zone
        .parse()
        .map_err(|_| FlexError::Parse(format!("unrecognized time zone {zone:?}")))?;

    let naive = parse_local(local)?;

    let resolved = tz.from_local_datetime(&naive).earliest().ok_or_else(|| {
        FlexError::Parse(format!("local time {local:?} does not exist in {zone}"))
    })?;

    Ok(resolved
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, false))
}

fn parse_local(s: &str) -> Result<NaiveDateTime, FlexError> {
    for format in LOCAL_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }
    Err(FlexError::Parse(format!(
        "timestamp {s:?} is not a local ISO-8601 date/time"
    )))
}

/// Format a date as the `year/month/day` path segments the Flex endpoints
/// use: 4-digit year, unpadded month, unpadded day.
pub(crate) fn date_segments(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::New_York;

    #[test]
    fn converts_winter_local_time_to_utc() {
        // EST is UTC-5.
        let utc = to_utc("2024-03-01T09:00:00.000", "America/New_York").unwrap();
        assert_eq!(utc, "2024-03-01T14:00:00+00:00");
    }

    #[test]
    fn converts_summer_local_time_to_utc() {
        // EDT is UTC-4.
        let utc = to_utc("2024-07-01T09:00:00", "America/New_York").unwrap();
        assert_eq!(utc, "2024-07-01T13:00:00+00:00");
    }

    #[test]
    fn accepts_space_separated_timestamps() {
        let utc = to_utc("2024-03-01 09:00:00", "UTC").unwrap();
        assert_eq!(utc, "2024-03-01T09:00:00+00:00");
    }

    #[test]
    fn is_deterministic() {
        let a = to_utc("2024-03-01T09:00:00", "Asia/Tokyo").unwrap();
        let b = to_utc("2024-03-01T09:00:00", "Asia/Tokyo").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn round_trips_through_the_local_zone() {
        let local = "2024-03-01T09:00:00";
        let utc = to_utc(local, "America/New_York").unwrap();

        // Map the UTC instant back into the zone; the local wall-clock time
        // must match the original input.
        let instant = chrono::DateTime::parse_from_rfc3339(&utc).unwrap();
        let back = New_York.from_utc_datetime(&instant.naive_utc());
        assert_eq!(back.format("%Y-%m-%dT%H:%M:%S").to_string(), local);
    }

    #[test]
    fn rejects_malformed_timestamp() {
        let err = to_utc("03/01/2024 9am", "America/New_York").unwrap_err();
        assert!(matches!(err, FlexError::Parse(_)));
    }

    #[test]
    fn rejects_unknown_zone() {
        let err = to_utc("2024-03-01T09:00:00", "America/Gotham").unwrap_err();
        assert!(matches!(err, FlexError::Parse(_)));
    }

    #[test]
    fn rejects_nonexistent_local_time() {
        // 2024-03-10 02:30 never happened in New York (spring-forward gap).
        let err = to_utc("2024-03-10T02:30:00", "America/New_York").unwrap_err();
        assert!(matches!(err, FlexError::Parse(_)));
    }

    #[test]
    fn date_segments_are_unpadded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(date_segments(date), "2024/3/1");

        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(date_segments(date), "2024/12/25");
    }
}
