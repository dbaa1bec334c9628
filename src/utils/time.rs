//! Time utilities: parsing HH:MM, converting local wall-clock times to epoch
//! seconds and back.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// Rendering for a timestamp that was never punched.
pub const UNSET_TIME: &str = "-";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

pub fn parse_timezone(name: &str) -> AppResult<Tz> {
    name.parse::<Tz>()
        .map_err(|_| AppError::Config(format!("unknown timezone '{}'", name)))
}

/// Interpret `time` ("HH:MM") on `date` in `tz` and return UTC epoch seconds.
///
/// Ambiguous local times (DST fall-back) resolve to the earlier instant;
/// times inside a DST gap do not exist and are rejected.
pub fn local_to_epoch(tz: &Tz, date: NaiveDate, time: &str) -> AppResult<i64> {
    let t = parse_time(time)
        .ok_or_else(|| AppError::NotParsable(format!("invalid time '{} {}'", date, time)))?;

    let local = tz
        .from_local_datetime(&date.and_time(t))
        .earliest()
        .ok_or_else(|| {
            AppError::NotParsable(format!("time '{} {}' does not exist in {}", date, time, tz))
        })?;

    Ok(local.timestamp())
}

/// Format epoch seconds as local "HH:MM". `0` means unset and yields `None`.
pub fn epoch_to_hhmm(tz: &Tz, secs: i64) -> Option<String> {
    if secs == 0 {
        return None;
    }
    DateTime::from_timestamp(secs, 0).map(|utc| utc.with_timezone(tz).format("%H:%M").to_string())
}

/// Hours between two epoch timestamps, kept only when strictly inside (0, 24).
pub fn hours_between(start: i64, end: i64) -> f64 {
    let hours = (end - start) as f64 / 3600.0;
    if hours > 0.0 && hours < 24.0 { hours } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Amsterdam;

    #[test]
    fn converts_amsterdam_wall_clock() {
        let date = NaiveDate::from_ymd_opt(2009, 11, 10).unwrap();
        assert_eq!(local_to_epoch(&Amsterdam, date, "13:00").unwrap(), 1257854400);
        assert_eq!(epoch_to_hhmm(&Amsterdam, 1257854400).as_deref(), Some("13:00"));
    }

    #[test]
    fn rejects_bad_times() {
        let date = NaiveDate::from_ymd_opt(2014, 1, 1).unwrap();
        assert!(matches!(
            local_to_epoch(&Amsterdam, date, "25:99"),
            Err(AppError::NotParsable(_))
        ));
        assert!(local_to_epoch(&Amsterdam, date, "jemoeder").is_err());
    }

    #[test]
    fn dst_gap_is_rejected() {
        // 2014-03-30 02:30 does not exist in Amsterdam
        let date = NaiveDate::from_ymd_opt(2014, 3, 30).unwrap();
        assert!(local_to_epoch(&Amsterdam, date, "02:30").is_err());
    }

    #[test]
    fn unset_timestamp_has_no_display() {
        assert_eq!(epoch_to_hhmm(&Amsterdam, 0), None);
    }

    #[test]
    fn hours_outside_a_day_are_dropped() {
        assert_eq!(hours_between(1388577600, 0), 0.0);
        assert_eq!(hours_between(0, 1388577600), 0.0);
        assert_eq!(hours_between(100, 100), 0.0);
        assert!((hours_between(1388577600, 1388578800) - 1.0 / 3.0).abs() < 1e-9);
    }
}
