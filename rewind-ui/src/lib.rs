//! Rewind workflow state
//!
//! The state layer behind the console: a read-only version timeline, the
//! revert controller that classifies what a revert attempt actually did,
//! and the notification surface that reflects each outcome to the
//! operator. `VersionsSession` composes the three for one job.
//!
//! Rendering is a caller concern; everything here is plain state that
//! tests can assert on directly.

pub mod notify;
pub mod revert;
pub mod session;
pub mod timeline;

// Re-export commonly used types
pub use notify::{Notification, Severity};
pub use revert::{RevertController, RevertOutcome};
pub use session::{SessionError, VersionsSession};
pub use timeline::{Timeline, TimelineError, VersionRow};
