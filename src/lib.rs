//! sitelog library root.
//! Daily work time entries with visited-location sequencing on SQLite.
//!
//! The crate is the business core of a timesheet system: time parsing and
//! validation, worked-hours calculation with break deduction, an in-memory
//! location sequencer, and the transactional repository that persists one
//! entry per user per day. Login/session handling and rendering belong to
//! the embedding application; every operation here receives an already
//! authenticated user id through a [`models::context::RequestContext`].

pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod utils;
