//! Data Transfer Objects sent to the orchestrator
//!
//! Request payloads for the orchestrator API. These are kept separate from
//! the domain projections so the wire shape stays explicit.

pub mod revert;
