//! Tests for timezone-bound instants: parsing, rendering, zone rebinding,
//! and wall-clock day arithmetic.

use chrono::{Duration, TimeZone, Utc};
use chrono_tz::Tz;
use rota_engine::{parse_timezone, CalendarUnit, RotaError, WallClockTime};

const LOS_ANGELES: Tz = chrono_tz::America::Los_Angeles;

fn la(s: &str) -> WallClockTime {
    WallClockTime::parse(s, LOS_ANGELES).expect("valid datetime")
}

// ── Parsing ─────────────────────────────────────────────────────────────────

#[test]
fn parses_minute_precision_local_time() {
    let t = la("2025-01-01T11:00");
    assert_eq!(t.to_string(), "2025-01-01T11:00");
    assert_eq!(
        t.to_utc(),
        Utc.with_ymd_and_hms(2025, 1, 1, 19, 0, 0).unwrap()
    );
}

#[test]
fn parses_second_precision_local_time() {
    let t = la("2025-01-01T11:00:45");
    assert_eq!(
        t.to_utc(),
        Utc.with_ymd_and_hms(2025, 1, 1, 19, 0, 45).unwrap()
    );
    // canonical rendering stays minute precision
    assert_eq!(t.to_string(), "2025-01-01T11:00");
}

#[test]
fn date_only_means_local_midnight() {
    let t = la("2025-02-01");
    assert_eq!(t.to_string(), "2025-02-01T00:00");
    assert_eq!(
        t.to_utc(),
        Utc.with_ymd_and_hms(2025, 2, 1, 8, 0, 0).unwrap()
    );
}

#[test]
fn malformed_datetime_is_rejected() {
    for bad in ["", "not a date", "2025-13-01", "2025-01-01T25:00", "01/02/2025"] {
        let err = WallClockTime::parse(bad, LOS_ANGELES).unwrap_err();
        assert!(
            matches!(err, RotaError::InvalidDatetime(_)),
            "expected InvalidDatetime for {:?}",
            bad
        );
    }
}

#[test]
fn timezone_identifiers_parse_or_reject() {
    assert_eq!(parse_timezone("America/Los_Angeles").unwrap(), LOS_ANGELES);
    assert!(matches!(
        parse_timezone("Mars/Olympus_Mons"),
        Err(RotaError::InvalidTimezone(_))
    ));
}

// ── DST gap and fold resolution ─────────────────────────────────────────────

#[test]
fn nonexistent_local_time_advances_past_the_gap() {
    // clocks spring forward at 02:00 on 2026-03-08; 02:30 never happens
    let t = la("2026-03-08T02:30");
    assert_eq!(t.to_string(), "2026-03-08T03:30");
}

#[test]
fn ambiguous_local_time_takes_the_earlier_offset() {
    // clocks fall back at 02:00 on 2026-11-01; 01:30 happens twice.
    // The earlier pass is still PDT (UTC-7).
    let t = la("2026-11-01T01:30");
    assert_eq!(
        t.to_utc(),
        Utc.with_ymd_and_hms(2026, 11, 1, 8, 30, 0).unwrap()
    );
}

// ── Zone rebinding and comparison ───────────────────────────────────────────

#[test]
fn rebinding_preserves_the_instant_and_changes_rendering() {
    let t = la("2025-01-01T11:00");
    let utc = t.in_zone(chrono_tz::UTC);
    assert_eq!(utc.to_string(), "2025-01-01T19:00");
    assert_eq!(t, utc);
    assert_eq!(utc.zone(), chrono_tz::UTC);
    assert_eq!(t.zone(), LOS_ANGELES);
}

#[test]
fn comparisons_use_the_absolute_instant() {
    let pacific = la("2025-01-01T11:00");
    let same = WallClockTime::parse("2025-01-01T19:00", chrono_tz::UTC).unwrap();
    let earlier = WallClockTime::parse("2025-01-01T18:59", chrono_tz::UTC).unwrap();

    assert_eq!(pacific, same);
    assert!(earlier < pacific);
    assert!(pacific > earlier);
}

#[test]
fn subtraction_is_elapsed_duration_and_signed() {
    let a = la("2025-01-01T11:00");
    let b = la("2025-01-02T09:30");
    assert_eq!(b - a, Duration::minutes(22 * 60 + 30));
    assert_eq!(a - b, Duration::minutes(-(22 * 60 + 30)));
}

// ── Wall-clock day arithmetic ───────────────────────────────────────────────

#[test]
fn adding_a_day_across_spring_forward_keeps_local_time() {
    let t = la("2020-03-07T09:00");
    let next = t.add_calendar(CalendarUnit::Days, 1);
    assert_eq!(next.to_string(), "2020-03-08T09:00");
    // the day itself was only 23 hours long
    assert_eq!(next - t, Duration::hours(23));
}

#[test]
fn negative_day_counts_step_backwards() {
    let t = la("2020-03-09T09:00");
    let back = t.add_calendar(CalendarUnit::Days, -2);
    assert_eq!(back.to_string(), "2020-03-07T09:00");
}

// ── Persistence shape ───────────────────────────────────────────────────────

#[test]
fn serializes_as_an_rfc3339_utc_timestamp() {
    let t = la("2025-01-01T11:00");
    let json = serde_json::to_string(&t).expect("serializes");
    assert_eq!(json, "\"2025-01-01T19:00:00Z\"");

    let restored: WallClockTime = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(restored, t);
    assert_eq!(restored.zone(), chrono_tz::UTC);
}
