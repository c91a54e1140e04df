//! Configuration module
//!
//! Handles CLI configuration including the orchestrator URL.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the orchestrator service
    pub api_url: String,
}
