//! Storage-agnostic view of a wealth session.
//!
//! The availability gate and the day-skip planner operate on this record
//! rather than on the `db` crate's row types, keeping this crate at zero
//! internal dependencies. The repository layer converts its rows into
//! `SessionRecord` before calling in.

use crate::types::{DbId, Timestamp};

/// The slice of a session the daily-boundary logic cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: DbId,
    pub created_at: Timestamp,
    /// Only completed sessions count toward "today's session exists".
    pub completed: bool,
    /// An audio track has been generated for this session.
    pub has_generated_gamma: bool,
    /// The generated track has been listened to in full.
    pub gamma_completed: bool,
}
