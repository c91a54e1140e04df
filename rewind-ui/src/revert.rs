//! Revert controller
//!
//! Single entry point for the revert workflow: issue the request, then
//! classify what actually happened. Classification never inspects the
//! revert response body; a fresh fetch of the job is the sole source of
//! truth for the success / no-op distinction.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use rewind_client::{ApiClient, ClientError};
use rewind_core::domain::job::Job;
use tracing::{debug, warn};

/// Classified result of one revert attempt
///
/// Created per attempt and consumed immediately; never persisted beyond
/// the running session.
#[derive(Debug, Clone)]
pub enum RevertOutcome {
    /// The orchestrator accepted the revert and the job's version moved.
    /// Carries the reloaded job projection.
    Reverted(Job),
    /// The orchestrator reported success but the version number did not
    /// move: the target definition is identical to the current one.
    NoEffect,
    /// Transport or server failure; carries the raw response body.
    Failed(String),
}

type RevertKey = (String, u64);

/// Issues revert requests and classifies their outcomes
///
/// Each invocation is one request: no debouncing, no queueing, no
/// automatic retry. An attempt runs Idle → Requesting → terminal; a new
/// attempt always starts fresh.
pub struct RevertController {
    client: ApiClient,
    in_flight: Mutex<HashSet<RevertKey>>,
}

impl RevertController {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Run one revert attempt for `job` against `target_version`
    ///
    /// Returns `None` without issuing a request when an identical attempt
    /// (same job, same target) is still outstanding; the guard is released
    /// when the attempt finishes or its future is dropped, so an abandoned
    /// attempt never wedges the key.
    ///
    /// `job` is the projection the caller currently holds; its version is
    /// the "before" side of the classification comparison.
    pub async fn revert(&self, job: &Job, target_version: u64) -> Option<RevertOutcome> {
        let _guard = InFlightGuard::acquire(&self.in_flight, (job.id.clone(), target_version))?;

        debug!("Reverting job {} to version {}", job.id, target_version);
        if let Err(err) = self.client.revert_job(&job.id, target_version).await {
            warn!("Revert of job {} failed: {}", job.id, err);
            return Some(RevertOutcome::Failed(failure_message(err)));
        }

        // 2xx so far; only the before/after version comparison can tell a
        // real reversion from a no-op.
        match self.client.get_job(&job.id).await {
            Ok(reloaded) if reloaded.version == job.version => Some(RevertOutcome::NoEffect),
            Ok(reloaded) => Some(RevertOutcome::Reverted(reloaded)),
            Err(err) => {
                warn!("Could not reload job {} after revert: {}", job.id, err);
                Some(RevertOutcome::Failed(failure_message(err)))
            }
        }
    }
}

/// Operator-facing text for a failed attempt
///
/// API errors surface the raw response body, unwrapped; anything else
/// falls back to the error display.
fn failure_message(err: ClientError) -> String {
    match err {
        ClientError::ApiError { message, .. } => message,
        other => other.to_string(),
    }
}

/// Marks one `(job, target)` pair as in flight until dropped
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<RevertKey>>,
    key: RevertKey,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(set: &'a Mutex<HashSet<RevertKey>>, key: RevertKey) -> Option<Self> {
        let mut held = set.lock().unwrap_or_else(PoisonError::into_inner);
        if !held.insert(key.clone()) {
            return None;
        }
        Some(Self { set, key })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut held = self.set.lock().unwrap_or_else(PoisonError::into_inner);
        held.remove(&self.key);
    }
}
