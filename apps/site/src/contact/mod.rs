//! Contact intake — validation, email rendering, and the ordered dual
//! dispatch.
//!
//! Flow: received → validated → confirmation-sent →
//! {notification-sent | notification-failed} → responded. The confirmation
//! send is the critical path; the studio notification is best-effort and
//! records its own outcome without affecting the response.

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;

pub mod emails;
pub mod handlers;
pub mod mailer;

use self::mailer::{MailError, MailSender, OutboundEmail};

#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// ISO date (`YYYY-MM-DD`) from the form's date picker.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("confirmation email failed: {0}")]
    Confirmation(#[source] MailError),
}

/// Outcome of the best-effort studio notification, recorded independently
/// of the request's result.
#[derive(Debug)]
pub enum NotificationOutcome {
    Sent { id: String },
    Failed { reason: String },
}

impl NotificationOutcome {
    pub fn message_id(&self) -> Option<&str> {
        match self {
            NotificationOutcome::Sent { id } => Some(id),
            NotificationOutcome::Failed { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            NotificationOutcome::Sent { .. } => None,
            NotificationOutcome::Failed { reason } => Some(reason),
        }
    }
}

#[derive(Debug)]
pub struct IntakeOutcome {
    pub confirmation_id: String,
    pub notification: NotificationOutcome,
}

/// Validates a submission and dispatches both emails, confirmation first.
/// Succeeds exactly when the confirmation send succeeds.
pub async fn process_submission(
    mailer: &dyn MailSender,
    config: &Config,
    submission: &ContactSubmission,
    request_id: Uuid,
) -> Result<IntakeOutcome, IntakeError> {
    let name = submission.name.trim();
    if name.is_empty() {
        return Err(IntakeError::MissingField("name"));
    }
    let email = submission.email.trim();
    if email.is_empty() {
        return Err(IntakeError::MissingField("email"));
    }

    let confirmation = OutboundEmail {
        from: config.contact_from.clone(),
        to: email.to_string(),
        subject: emails::CONFIRMATION_SUBJECT.to_string(),
        html: emails::render_confirmation(submission),
        reply_to: Some(config.contact_notify.clone()),
    };
    let confirmation_id = mailer
        .send(&confirmation)
        .await
        .map_err(IntakeError::Confirmation)?;
    info!(%request_id, %confirmation_id, "confirmation email sent");

    // The submitter has been told of success at this point; a notification
    // failure must not walk that back.
    let notification = OutboundEmail {
        from: config.contact_from.clone(),
        to: config.contact_notify.clone(),
        subject: emails::notification_subject(name),
        html: emails::render_notification(submission),
        reply_to: Some(email.to_string()),
    };
    let notification = match mailer.send(&notification).await {
        Ok(id) => NotificationOutcome::Sent { id },
        Err(e) => {
            warn!(%request_id, "studio notification failed, submitter already confirmed: {e}");
            NotificationOutcome::Failed {
                reason: e.to_string(),
            }
        }
    };

    Ok(IntakeOutcome {
        confirmation_id,
        notification,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every send; fails sends whose recipient is on the fail list.
    struct RecordingMailer {
        sent: Mutex<Vec<OutboundEmail>>,
        fail_to: Vec<String>,
    }

    impl RecordingMailer {
        fn new(fail_to: &[&str]) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_to: fail_to.iter().map(|s| s.to_string()).collect(),
            }
        }

        fn sent(&self) -> Vec<OutboundEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl MailSender for RecordingMailer {
        async fn send(&self, email: &OutboundEmail) -> Result<String, MailError> {
            self.sent.lock().unwrap().push(email.clone());
            if self.fail_to.contains(&email.to) {
                return Err(MailError::Api {
                    status: 500,
                    message: "provider down".to_string(),
                });
            }
            Ok(format!("msg-{}", self.sent.lock().unwrap().len()))
        }
    }

    fn config() -> Config {
        Config::for_tests()
    }

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            phone: None,
            date: Some("2026-06-14".to_string()),
            venue: Some("Hotel del Coronado".to_string()),
            message: None,
        }
    }

    #[tokio::test]
    async fn test_success_sends_confirmation_then_notification() {
        let mailer = RecordingMailer::new(&[]);
        let outcome = process_submission(&mailer, &config(), &submission(), Uuid::new_v4())
            .await
            .unwrap();

        let sent = mailer.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].to, "sam@example.com");
        assert_eq!(sent[1].to, config().contact_notify);
        assert!(sent[0].html.contains("Sunday, June 14, 2026"));
        assert!(sent[0].html.contains("Hotel del Coronado"));
        assert!(matches!(outcome.notification, NotificationOutcome::Sent { .. }));
    }

    #[tokio::test]
    async fn test_notification_failure_does_not_fail_intake() {
        let notify_to = config().contact_notify;
        let mailer = RecordingMailer::new(&[notify_to.as_str()]);
        let outcome = process_submission(&mailer, &config(), &submission(), Uuid::new_v4())
            .await
            .unwrap();

        assert_eq!(mailer.sent().len(), 2);
        assert!(matches!(
            outcome.notification,
            NotificationOutcome::Failed { .. }
        ));
    }

    #[tokio::test]
    async fn test_confirmation_failure_fails_intake_and_skips_notification() {
        let mailer = RecordingMailer::new(&["sam@example.com"]);
        let err = process_submission(&mailer, &config(), &submission(), Uuid::new_v4())
            .await
            .unwrap_err();

        assert!(matches!(err, IntakeError::Confirmation(_)));
        assert_eq!(mailer.sent().len(), 1, "notification must not be attempted");
    }

    #[tokio::test]
    async fn test_missing_required_fields_send_nothing() {
        let mailer = RecordingMailer::new(&[]);

        let mut no_name = submission();
        no_name.name = "  ".to_string();
        let err = process_submission(&mailer, &config(), &no_name, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::MissingField("name")));

        let mut no_email = submission();
        no_email.email = String::new();
        let err = process_submission(&mailer, &config(), &no_email, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::MissingField("email")));

        assert!(mailer.sent().is_empty());
    }
}
