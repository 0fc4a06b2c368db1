use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{error, info};
use uuid::Uuid;

use crate::contact::{process_submission, ContactSubmission, IntakeError};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<Value>, AppError> {
    let request_id = Uuid::new_v4();
    info!(%request_id, "contact submission received");

    let Some(mailer) = state.mailer.as_ref() else {
        error!(%request_id, "mail provider not configured, rejecting submission");
        return Err(AppError::MailNotConfigured);
    };

    let outcome =
        process_submission(mailer.as_ref(), &state.config, &submission, request_id).await?;

    // Responding success here even when the notification failed: the
    // submitter was confirmed the moment the first send went through.
    match outcome.notification.failure_reason() {
        Some(reason) => info!(
            %request_id,
            confirmation_id = %outcome.confirmation_id,
            "responded success without studio notification: {reason}"
        ),
        None => info!(
            %request_id,
            confirmation_id = %outcome.confirmation_id,
            notification_id = outcome.notification.message_id().unwrap_or(""),
            "responded success"
        ),
    }

    Ok(Json(json!({ "success": true })))
}

impl From<IntakeError> for AppError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::MissingField(field) => {
                AppError::Validation(format!("missing required field `{field}`"))
            }
            IntakeError::Confirmation(mail_err) => AppError::Mail(
                mail_err
                    .provider_message()
                    .unwrap_or("failed to send confirmation email")
                    .to_string(),
            ),
        }
    }
}
