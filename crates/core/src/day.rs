//! Day-number calculator.
//!
//! A user's "day number" is 1-based and counts whole calendar days in the
//! reference timezone since their first access. Registering at 23:59 and
//! returning at 00:01 the next calendar day is day 2, even though only two
//! minutes of wall time elapsed.

use crate::clock::midnight_of;
use crate::types::Timestamp;

/// 1-based day index of `current` relative to `epoch`.
///
/// `max(1, whole_days(midnight(current) - midnight(epoch)) + 1)`. The
/// clamp covers clock skew: a timestamp before the epoch must never
/// produce day 0 or a negative day.
///
/// Callers must pass the same user's `first_access_date` as `epoch` for
/// every session they classify; mixing epochs across users is a caller
/// error this function cannot detect.
pub fn day_number(epoch: Timestamp, current: Timestamp) -> i64 {
    let elapsed_days = (midnight_of(current) - midnight_of(epoch)).num_days();
    (elapsed_days + 1).max(1)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::clock::reference_offset;

    fn ref_tz(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> Timestamp {
        reference_offset()
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn first_visit_is_day_one() {
        let t = ref_tz(2024, 1, 1, 10, 0);
        assert_eq!(day_number(t, t), 1);
    }

    #[test]
    fn crossing_one_midnight_is_day_two() {
        // Registered 23:59, back at 00:01: ~2 minutes elapsed, but one
        // reference-tz midnight was crossed.
        let epoch = ref_tz(2024, 1, 1, 23, 59);
        let back = ref_tz(2024, 1, 2, 0, 1);
        assert_eq!(day_number(epoch, back), 2);
    }

    #[test]
    fn same_day_late_evening_is_still_day_one() {
        let epoch = ref_tz(2024, 1, 1, 0, 5);
        let later = ref_tz(2024, 1, 1, 23, 55);
        assert_eq!(day_number(epoch, later), 1);
    }

    #[test]
    fn clamped_to_one_before_epoch() {
        let epoch = ref_tz(2024, 1, 10, 12, 0);
        let skewed = ref_tz(2024, 1, 7, 12, 0);
        assert_eq!(day_number(epoch, skewed), 1);
    }

    #[test]
    fn monotone_in_current_time() {
        let epoch = ref_tz(2024, 1, 1, 8, 30);
        let mut prev = 0;
        for hours in 0..24 * 14 {
            let t = epoch + Duration::hours(hours);
            let day = day_number(epoch, t);
            assert!(day >= prev, "day number regressed at +{hours}h");
            prev = day;
        }
        assert_eq!(prev, 15);
    }

    #[test]
    fn fourteen_whole_days_is_day_fifteen() {
        let epoch = ref_tz(2024, 1, 1, 8, 30);
        assert_eq!(day_number(epoch, epoch + Duration::days(14)), 15);
    }
}
