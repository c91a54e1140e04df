//! Version timeline view model

use rewind_core::domain::job::{Job, JobVersion};
use rewind_core::timefmt::format_submit_time;

/// One row of the version timeline
///
/// The current version differs from historical ones only in whether a
/// revert action is offered, so row kind is a computed boolean rather
/// than a subtype.
#[derive(Debug, Clone)]
pub struct VersionRow {
    pub version: u64,
    pub stable: bool,
    /// Submission timestamp, integer nanoseconds since the Unix epoch
    pub submit_time: i64,
    /// Whether this row matches the job's current version
    pub is_current: bool,
}

impl VersionRow {
    /// A revert action is available for every row except the current one
    pub fn can_revert(&self) -> bool {
        !self.is_current
    }

    /// Submit time rendered for display in local time
    pub fn submit_time_display(&self) -> String {
        format_submit_time(self.submit_time)
    }
}

/// Ordered, read-only view of a job's version history
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    rows: Vec<VersionRow>,
}

impl Timeline {
    /// Build a timeline from a job projection and its version records
    ///
    /// Rows are ordered most recent first: descending by submit time, ties
    /// broken by version number descending.
    pub fn build(job: &Job, mut versions: Vec<JobVersion>) -> Self {
        versions.sort_by(|a, b| {
            b.submit_time
                .cmp(&a.submit_time)
                .then(b.version.cmp(&a.version))
        });

        let rows = versions
            .into_iter()
            .map(|v| VersionRow {
                version: v.version,
                stable: v.stable,
                submit_time: v.submit_time,
                is_current: v.version == job.version,
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[VersionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the timeline holds a record for `version`
    pub fn contains(&self, version: u64) -> bool {
        self.rows.iter().any(|row| row.version == version)
    }

    /// The row matching the job's current version, if present
    pub fn current(&self) -> Option<&VersionRow> {
        self.rows.iter().find(|row| row.is_current)
    }
}

/// Display-layer error state for the timeline
///
/// Entering this state suppresses the version list but aborts nothing;
/// the surrounding session (and its requested job ID) stays intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineError {
    pub title: String,
    pub message: String,
}

impl TimelineError {
    /// Error state for a job that no longer exists
    pub fn not_found(job_id: &str) -> Self {
        Self {
            title: "Not Found".to_string(),
            message: format!("No job with the ID \"{}\" was found", job_id),
        }
    }
}
