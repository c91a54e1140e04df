//! Rewind Core
//!
//! Core types shared by the rewind console crates.
//!
//! This crate contains:
//! - Domain types: read-only projections of orchestrator records (Job, JobVersion)
//! - DTOs: request payloads sent back to the orchestrator
//! - Display formatting for version submit times

pub mod domain;
pub mod dto;
pub mod timefmt;
