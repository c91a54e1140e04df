//! Core domain types
//!
//! Read-only projections of the orchestrator's records. The orchestrator
//! owns these entities; the console never mutates them locally and rebuilds
//! its copies wholesale from fetch responses.

pub mod job;
