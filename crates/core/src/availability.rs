//! Session-existence check and the two daily availability gates.
//!
//! Both gates are pure decision functions over a user's already-fetched
//! session history. Denials are ordinary return values (routine UX flow
//! control), never errors: a missing user is the caller's `NotFound`,
//! a denied action is `Availability { allowed: false, .. }`.

use serde::Serialize;

use crate::clock::next_midnight_after;
use crate::day::day_number;
use crate::session::SessionRecord;
use crate::types::Timestamp;

/// Denial reason when a completed session already exists today.
pub const REASON_ALREADY_RECORDED: &str = "Only one recording per day is allowed";

/// Denial reason when no completed voice session exists yet today.
pub const REASON_NO_SESSION_TODAY: &str = "Complete today's voice analysis session first";

/// Denial reason when today's track was generated but not finished.
pub const REASON_GAMMA_PENDING: &str = "Session generated - listen to complete it";

/// Denial reason when today's track was generated and finished.
pub const REASON_GAMMA_DONE: &str = "Neural session completed for today";

/// Outcome of an availability check.
///
/// `next_available_at` is set on "come back tomorrow" denials so clients
/// can render a countdown to the next reference-timezone midnight.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub allowed: bool,
    pub reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_available_at: Option<Timestamp>,
}

impl Availability {
    fn allowed() -> Self {
        Availability {
            allowed: true,
            reason: None,
            next_available_at: None,
        }
    }

    fn denied(reason: &'static str) -> Self {
        Availability {
            allowed: false,
            reason: Some(reason),
            next_available_at: None,
        }
    }
}

/// Find the completed session whose day number (relative to `epoch`)
/// equals `day`, if one exists.
///
/// Sessions may arrive in any order; a linear scan is fine because a
/// user accrues at most one session per elapsed day. Debug accounts are
/// bypassed at the call site (the caller simply does not consult this),
/// never in here.
pub fn find_completed_session<'a>(
    epoch: Timestamp,
    sessions: &'a [SessionRecord],
    day: i64,
) -> Option<&'a SessionRecord> {
    sessions
        .iter()
        .find(|s| s.completed && day_number(epoch, s.created_at) == day)
}

/// May the user record a new voice sample right now?
///
/// `enforce_daily` is the one-per-day rule switch, sourced from
/// `!user.is_debug` at the boundary so this gate never reads a stored
/// flag itself.
pub fn recording_availability(
    epoch: Timestamp,
    sessions: &[SessionRecord],
    now: Timestamp,
    enforce_daily: bool,
) -> Availability {
    if !enforce_daily {
        return Availability::allowed();
    }

    let today = day_number(epoch, now);
    match find_completed_session(epoch, sessions, today) {
        None => Availability::allowed(),
        Some(_) => Availability {
            allowed: false,
            reason: Some(REASON_ALREADY_RECORDED),
            next_available_at: Some(next_midnight_after(now)),
        },
    }
}

/// May the user generate a neural audio track right now?
///
/// Generation requires a completed voice session today and walks a
/// three-denial state machine: no session yet, track pending, track done.
pub fn gamma_availability(
    epoch: Timestamp,
    sessions: &[SessionRecord],
    now: Timestamp,
) -> Availability {
    let today = day_number(epoch, now);
    let Some(session) = find_completed_session(epoch, sessions, today) else {
        return Availability::denied(REASON_NO_SESSION_TODAY);
    };

    match (session.has_generated_gamma, session.gamma_completed) {
        (false, _) => Availability::allowed(),
        (true, false) => Availability::denied(REASON_GAMMA_PENDING),
        (true, true) => Availability::denied(REASON_GAMMA_DONE),
    }
}
