//! Streak continuation rule.
//!
//! Streaks are updated exactly once per newly-completed day, at session
//! creation. Debug users can complete several sessions on one day; a
//! repeat of the same day leaves the streak untouched.

/// New `(current_streak, longest_streak)` after completing a session on
/// `today`.
///
/// `last_completed_day` is the day number of the most recent completed
/// session before this one, if any.
pub fn update_streaks(
    current: i32,
    longest: i32,
    last_completed_day: Option<i64>,
    today: i64,
) -> (i32, i32) {
    let new_current = match last_completed_day {
        // Consecutive day: streak continues.
        Some(last) if last == today - 1 => current + 1,
        // Same day again (debug accounts): no change.
        Some(last) if last == today => current.max(1),
        // Gap, or first session ever: streak restarts.
        _ => 1,
    };
    (new_current, longest.max(new_current))
}
