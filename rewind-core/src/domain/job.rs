//! Job domain types

use serde::{Deserialize, Serialize};

/// A deployable job definition tracked by the orchestrator
///
/// The console holds a read-only projection of this record; the
/// orchestrator remains the source of truth after every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Opaque job identifier
    pub id: String,
    pub name: String,
    /// Current version number. Monotonic and non-negative; advances with
    /// every accepted submission, not necessarily contiguously.
    pub version: u64,
}

/// One immutable historical version of a job definition
///
/// Exactly one version per job matches the job's current `version`; all
/// others are historical and may be reverted to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobVersion {
    /// Unique within a job, strictly increasing by submission order
    pub version: u64,
    /// Submission timestamp, integer nanoseconds since the Unix epoch
    pub submit_time: i64,
    /// Deployment stability flag, opaque to the revert workflow
    pub stable: bool,
}
