//! Revert request DTO

use serde::{Deserialize, Serialize};

/// Body of a revert request
///
/// The wire payload carries exactly these two fields and nothing else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevertRequest {
    pub job_id: String,
    pub target_version: u64,
}
