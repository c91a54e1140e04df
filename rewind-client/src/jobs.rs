//! Job-related API endpoints

use crate::ApiClient;
use crate::error::Result;
use rewind_core::domain::job::{Job, JobVersion};
use rewind_core::dto::revert::RevertRequest;
use tracing::debug;

impl ApiClient {
    /// Get a job by ID
    ///
    /// # Arguments
    /// * `job_id` - The opaque job identifier
    ///
    /// # Returns
    /// The current job projection (`id`, `name`, `version`). A missing job
    /// surfaces as an `ApiError` with status 404; callers can branch on
    /// [`ClientError::is_not_found`](crate::ClientError::is_not_found).
    pub async fn get_job(&self, job_id: &str) -> Result<Job> {
        let url = format!("{}/api/jobs/{}", self.base_url, job_id);
        debug!("Fetching job {}", job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// List the version history of a job
    ///
    /// # Arguments
    /// * `job_id` - The opaque job identifier
    ///
    /// # Returns
    /// All version records for the job, in server order. Display ordering
    /// is a caller concern.
    pub async fn list_versions(&self, job_id: &str) -> Result<Vec<JobVersion>> {
        let url = format!("{}/api/jobs/{}/versions", self.base_url, job_id);
        debug!("Fetching versions of job {}", job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Request a revert of a job to an older version
    ///
    /// Sends exactly the job identifier and the target version; the
    /// payload carries no other fields. A 2xx response only means the
    /// orchestrator accepted the request — whether anything changed is
    /// decided by re-fetching the job and comparing version numbers, never
    /// by inspecting this response's body.
    ///
    /// # Arguments
    /// * `job_id` - The opaque job identifier
    /// * `target_version` - The historical version to revert to
    pub async fn revert_job(&self, job_id: &str, target_version: u64) -> Result<()> {
        let url = format!("{}/api/jobs/{}/revert", self.base_url, job_id);
        debug!("Requesting revert of job {} to version {}", job_id, target_version);
        let response = self
            .client
            .post(&url)
            .json(&RevertRequest {
                job_id: job_id.to_string(),
                target_version,
            })
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
