//! Reference-timezone clock.
//!
//! Day boundaries are identical for every user regardless of where they
//! are: all "midnight" math is anchored to one fixed reference timezone
//! (America/Sao_Paulo), never the user's local timezone and never UTC.
//! Brazil abolished DST in 2019, so the offset is a constant -03:00 and
//! every local datetime maps to exactly one instant.

use chrono::{Duration, FixedOffset, NaiveTime, Utc};

use crate::types::Timestamp;

/// Fixed UTC offset of the reference timezone, in seconds.
const REFERENCE_OFFSET_SECS: i32 = -3 * 3600;

/// The reference timezone as a chrono offset.
pub fn reference_offset() -> FixedOffset {
    // -03:00 is well within FixedOffset's valid range.
    FixedOffset::east_opt(REFERENCE_OFFSET_SECS).expect("valid fixed offset")
}

/// Current instant.
pub fn now() -> Timestamp {
    Utc::now()
}

/// The 00:00:00.000 instant of `instant`'s calendar date in the reference
/// timezone, returned as UTC.
///
/// Idempotent: `midnight_of(midnight_of(x)) == midnight_of(x)`.
pub fn midnight_of(instant: Timestamp) -> Timestamp {
    let time_of_day = instant.with_timezone(&reference_offset()).time();
    instant - time_of_day.signed_duration_since(NaiveTime::MIN)
}

/// The first midnight strictly after `instant` (reference timezone).
///
/// With a fixed offset every day is exactly 24 hours, so this is just
/// `midnight_of(instant) + 1 day`.
pub fn next_midnight_after(instant: Timestamp) -> Timestamp {
    midnight_of(instant) + Duration::days(1)
}
