//! Derived status and wire timestamps for scheduled events.

use chrono::{DateTime, Utc};
use entain_proto::common::Status;
use prost_types::Timestamp;

use crate::StoreError;

/// 0001-01-01T00:00:00Z, the zero time and the earliest wire timestamp.
const MIN_WIRE_SECONDS: i64 = -62_135_596_800;
/// 9999-12-31T23:59:59Z, the latest wire timestamp.
const MAX_WIRE_SECONDS: i64 = 253_402_300_799;

/// Whether `at` is the zero time, meaning "no start time recorded".
pub fn is_zero_time(at: DateTime<Utc>) -> bool {
    at.timestamp() == MIN_WIRE_SECONDS && at.timestamp_subsec_nanos() == 0
}

/// OPEN while the start is strictly in the future, CLOSED otherwise.
/// A missing or zero start time is always CLOSED.
pub fn derive_status(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Status {
    match start {
        Some(at) if !is_zero_time(at) && at > now => Status::Open,
        _ => Status::Closed,
    }
}

/// Convert a stored time into the protobuf timestamp representation.
pub fn to_timestamp(at: DateTime<Utc>) -> Result<Timestamp, StoreError> {
    let seconds = at.timestamp();
    let nanos = at.timestamp_subsec_nanos();
    // chrono folds leap seconds into nanos >= 1e9
    if !(MIN_WIRE_SECONDS..=MAX_WIRE_SECONDS).contains(&seconds) || nanos >= 1_000_000_000 {
        return Err(StoreError::TimestampConversion { seconds, nanos });
    }
    Ok(Timestamp {
        seconds,
        nanos: nanos as i32,
    })
}

/// Produce the wire timestamp and derived status for one row.
///
/// `now` is taken once per response by the caller so every row in a list is
/// judged against the same instant.
pub fn materialize_start(
    start: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<(Option<Timestamp>, Status), StoreError> {
    let timestamp = start.map(to_timestamp).transpose()?;
    Ok((timestamp, derive_status(start, now)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn zero_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_zero_time_detection() {
        assert!(is_zero_time(zero_time()));
        assert!(!is_zero_time(zero_time() + Duration::seconds(1)));
        assert!(!is_zero_time(Utc::now()));
    }

    #[test]
    fn test_future_start_is_open() {
        let now = Utc::now();
        assert_eq!(
            derive_status(Some(now + Duration::minutes(5)), now),
            Status::Open
        );
    }

    #[test]
    fn test_past_start_is_closed() {
        let now = Utc::now();
        assert_eq!(
            derive_status(Some(now - Duration::minutes(5)), now),
            Status::Closed
        );
    }

    #[test]
    fn test_start_equal_to_now_is_closed() {
        let now = Utc::now();
        assert_eq!(derive_status(Some(now), now), Status::Closed);
    }

    #[test]
    fn test_zero_and_missing_start_are_closed() {
        let now = zero_time() - Duration::days(1);
        // Even when "now" precedes it, the zero time never reads as open.
        assert_eq!(derive_status(Some(zero_time()), now), Status::Closed);
        assert_eq!(derive_status(None, Utc::now()), Status::Closed);
    }

    #[test]
    fn test_to_timestamp_epoch_and_fraction() {
        let at = Utc.timestamp_opt(1_700_000_000, 250_000_000).unwrap();
        let ts = to_timestamp(at).unwrap();
        assert_eq!(ts.seconds, 1_700_000_000);
        assert_eq!(ts.nanos, 250_000_000);
    }

    #[test]
    fn test_to_timestamp_bounds() {
        assert_eq!(to_timestamp(zero_time()).unwrap().seconds, MIN_WIRE_SECONDS);
        let last = Utc.with_ymd_and_hms(9999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(to_timestamp(last).unwrap().seconds, MAX_WIRE_SECONDS);
    }

    #[test]
    fn test_to_timestamp_out_of_range() {
        let too_early = Utc.with_ymd_and_hms(0, 6, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            to_timestamp(too_early),
            Err(StoreError::TimestampConversion { .. })
        ));
        let too_late = Utc.with_ymd_and_hms(10000, 1, 1, 0, 0, 0).unwrap();
        assert!(matches!(
            to_timestamp(too_late),
            Err(StoreError::TimestampConversion { .. })
        ));
    }

    #[test]
    fn test_materialize_start_missing() {
        let (ts, status) = materialize_start(None, Utc::now()).unwrap();
        assert!(ts.is_none());
        assert_eq!(status, Status::Closed);
    }

    #[test]
    fn test_materialize_start_propagates_conversion_error() {
        let too_early = Utc.with_ymd_and_hms(0, 6, 1, 0, 0, 0).unwrap();
        assert!(materialize_start(Some(too_early), Utc::now()).is_err());
    }
}
