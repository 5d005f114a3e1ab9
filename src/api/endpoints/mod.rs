//! API endpoint handlers.
//!
//! Handlers are thin: parse, call into `triage` / `session` / `reasoning`,
//! map errors to `ApiError`.

pub mod health;
pub mod sessions;
pub mod triage;
