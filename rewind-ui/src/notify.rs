//! Notification surface

use crate::revert::RevertOutcome;

/// Message shown when a revert left the version number unchanged
pub const NO_EFFECT_MESSAGE: &str =
    "Reverting to an identical older version doesn't produce a new version";

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Danger,
    Warning,
    Info,
}

/// Ephemeral, dismissible operator notification
///
/// At most one notification is live at a time; each new classification
/// replaces whatever was showing before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub is_shown: bool,
}

impl Notification {
    /// Map a revert outcome to its notification
    ///
    /// A successful revert is silent: the refreshed timeline is the
    /// feedback. Failures carry the server's message verbatim.
    pub fn from_outcome(outcome: &RevertOutcome) -> Option<Self> {
        match outcome {
            RevertOutcome::Reverted(_) => None,
            RevertOutcome::NoEffect => Some(Self {
                severity: Severity::Warning,
                title: "Reversion Had No Effect".to_string(),
                message: NO_EFFECT_MESSAGE.to_string(),
                is_shown: true,
            }),
            RevertOutcome::Failed(message) => Some(Self {
                severity: Severity::Danger,
                title: "Could Not Revert".to_string(),
                message: message.clone(),
                is_shown: true,
            }),
        }
    }

    /// Hide the notification. Safe to call repeatedly.
    pub fn dismiss(&mut self) {
        self.is_shown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_core::domain::job::Job;

    #[test]
    fn failure_maps_to_a_danger_notification_with_the_raw_message() {
        let outcome = RevertOutcome::Failed("A plaintext error message".to_string());
        let notification = Notification::from_outcome(&outcome).unwrap();

        assert_eq!(notification.severity, Severity::Danger);
        assert_eq!(notification.title, "Could Not Revert");
        assert_eq!(notification.message, "A plaintext error message");
        assert!(notification.is_shown);
    }

    #[test]
    fn no_effect_maps_to_a_warning_notification() {
        let notification = Notification::from_outcome(&RevertOutcome::NoEffect).unwrap();

        assert_eq!(notification.severity, Severity::Warning);
        assert_eq!(notification.title, "Reversion Had No Effect");
        assert_eq!(notification.message, NO_EFFECT_MESSAGE);
    }

    #[test]
    fn successful_reverts_are_silent() {
        let outcome = RevertOutcome::Reverted(Job {
            id: "web-ingest".to_string(),
            name: "web-ingest".to_string(),
            version: 8,
        });

        assert!(Notification::from_outcome(&outcome).is_none());
    }

    #[test]
    fn dismissal_is_idempotent() {
        let mut notification = Notification::from_outcome(&RevertOutcome::NoEffect).unwrap();

        notification.dismiss();
        assert!(!notification.is_shown);

        notification.dismiss();
        assert!(!notification.is_shown);
    }
}
