//! fittracker library root.
//! Data-sync core for a personal fitness tracker: per-user resource stores
//! backed by SQLite, batched referential validation for exercise references,
//! and an idempotent local-to-server migration path.
//!
//! Transport wiring (HTTP routing, auth token issuance, uploads) lives in the
//! embedding application; this crate exposes the typed operations it calls.

pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
