//! Planner for the admin "skip day" action.
//!
//! Skip-day simulates the passage of one calendar day for manual QA: the
//! user's epoch moves back one day, and every session belonging to the
//! user's *current* day moves back one day with it, so "today's" work
//! stays today relative to the shifted epoch instead of being orphaned
//! into a different day bucket.
//!
//! The whole plan is computed against the pre-mutation epoch. Shifting
//! `first_access_date` first would reclassify which sessions count as
//! "today" and silently lose (or double-move) a day's data, so callers
//! must apply the plan in order: sessions first, then the epoch.

use chrono::Duration;

use crate::day::day_number;
use crate::session::SessionRecord;
use crate::types::{DbId, Timestamp};

/// One day, the amount both the epoch and today's sessions move by.
pub fn skip_shift() -> Duration {
    Duration::days(1)
}

/// Everything the storage layer needs to apply one skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySkipPlan {
    /// The user's day number at planning time (pre-mutation epoch).
    pub current_day: i64,
    /// Sessions on `current_day` whose `created_at` moves back one day.
    /// All of them, completed or not: debug users exempt from the
    /// one-per-day rule can hold several, and they move together in
    /// their original order.
    pub session_ids: Vec<DbId>,
    /// The user's `first_access_date` after the skip.
    pub new_first_access: Timestamp,
}

/// Compute the skip plan for a user.
///
/// Pure function: `epoch` and `sessions` are the user's state as stored
/// right now, `now` is the instant of the request.
pub fn plan_day_skip(epoch: Timestamp, now: Timestamp, sessions: &[SessionRecord]) -> DaySkipPlan {
    let current_day = day_number(epoch, now);

    let session_ids = sessions
        .iter()
        .filter(|s| day_number(epoch, s.created_at) == current_day)
        .map(|s| s.id)
        .collect();

    DaySkipPlan {
        current_day,
        session_ids,
        new_first_access: epoch - skip_shift(),
    }
}
