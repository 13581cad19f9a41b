//! Pure domain logic for the NeuroWealth backend.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the API layer, and any future CLI tooling. Everything
//! in here is a pure function over already-fetched data; all I/O lives in
//! `neurowealth-db` and `neurowealth-api`.

pub mod availability;
pub mod clock;
pub mod day;
pub mod dayskip;
pub mod error;
pub mod scoring;
pub mod session;
pub mod streak;
pub mod types;
