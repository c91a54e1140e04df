//! Versions session
//!
//! One operator's view of one job's version history: the loaded job
//! projection, the timeline built from it, the live notification, and the
//! revert controller driving changes. Server state is authoritative; the
//! projection is rebuilt wholesale after every successful revert rather
//! than patched in place.

use rewind_client::{ApiClient, ClientError};
use rewind_core::domain::job::Job;
use thiserror::Error;
use tracing::debug;

use crate::notify::Notification;
use crate::revert::{RevertController, RevertOutcome};
use crate::timeline::{Timeline, TimelineError};

/// Errors from driving a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// A revert was requested before (or after a failed) load
    #[error("job {0} is not loaded")]
    NotLoaded(String),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// State for the version history of a single job
pub struct VersionsSession {
    client: ApiClient,
    controller: RevertController,
    job_id: String,
    job: Option<Job>,
    timeline: Timeline,
    error: Option<TimelineError>,
    notification: Option<Notification>,
}

impl VersionsSession {
    pub fn new(client: ApiClient, job_id: impl Into<String>) -> Self {
        let controller = RevertController::new(client.clone());
        Self {
            client,
            controller,
            job_id: job_id.into(),
            job: None,
            timeline: Timeline::default(),
            error: None,
            notification: None,
        }
    }

    /// The job ID this session was opened for
    ///
    /// Unchanged even when the job turns out not to exist; the Not Found
    /// state never redirects the operator elsewhere.
    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn job(&self) -> Option<&Job> {
        self.job.as_ref()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn error(&self) -> Option<&TimelineError> {
        self.error.as_ref()
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Fetch the job and rebuild the timeline wholesale
    ///
    /// A missing job is a display condition, not a failure: the session
    /// flips into the Not Found state, keeps its requested ID, and returns
    /// `Ok`. Any other fetch failure propagates.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        let job = match self.client.get_job(&self.job_id).await {
            Ok(job) => job,
            Err(err) if err.is_not_found() => {
                debug!("Job {} not found; entering error state", self.job_id);
                self.job = None;
                self.timeline = Timeline::default();
                self.error = Some(TimelineError::not_found(&self.job_id));
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        let versions = self.client.list_versions(&self.job_id).await?;
        self.timeline = Timeline::build(&job, versions);
        self.job = Some(job);
        self.error = None;
        Ok(())
    }

    /// Run one revert attempt against the loaded job
    ///
    /// Returns `Ok(None)` when an identical attempt is already in flight;
    /// no request is issued and the live notification is untouched.
    /// Otherwise the outcome replaces the notification (a successful
    /// revert is silent and clears any prior one), and on `Reverted` the
    /// job and timeline are rebuilt from the server before returning.
    pub async fn revert_to(
        &mut self,
        target_version: u64,
    ) -> Result<Option<RevertOutcome>, SessionError> {
        let Some(job) = self.job.clone() else {
            return Err(SessionError::NotLoaded(self.job_id.clone()));
        };

        let Some(outcome) = self.controller.revert(&job, target_version).await else {
            return Ok(None);
        };

        if let RevertOutcome::Reverted(reloaded) = &outcome {
            let versions = self.client.list_versions(&self.job_id).await?;
            self.timeline = Timeline::build(reloaded, versions);
            self.job = Some(reloaded.clone());
            self.error = None;
        }

        self.notification = Notification::from_outcome(&outcome);
        Ok(Some(outcome))
    }

    /// Hide the live notification, if any. Safe to call repeatedly.
    pub fn dismiss_notification(&mut self) {
        if let Some(notification) = self.notification.as_mut() {
            notification.dismiss();
        }
    }
}
