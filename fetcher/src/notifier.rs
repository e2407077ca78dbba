use crate::logging;
use reqwest::{Client as HTTPClient, StatusCode};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use vdl_parking_core::{Snapshot, format_garage_message};

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("webhook error: status={status} body={body}")]
    Status { status: StatusCode, body: String },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotifyOutcome {
    pub sent: usize,
    pub failed: usize,
}

/// Posts one message per garage of `snapshot`. Failures are logged and
/// counted, they never stop the remaining sends.
pub async fn notify_garages(
    http_client: &HTTPClient,
    webhook_url: &str,
    snapshot: &Snapshot,
) -> NotifyOutcome {
    let mut outcome = NotifyOutcome::default();

    for garage in &snapshot.garages {
        let message = format_garage_message(garage, snapshot.timestamp);
        let logger = logging::Logger::new()
            .garage(&garage.title)
            .tier(garage.tier);

        match send_notification(http_client, webhook_url, &message).await {
            Ok(()) => {
                outcome.sent += 1;
                logger.info("webhook.sent", "Notification sent");
            }
            Err(err) => {
                outcome.failed += 1;
                let logger = match &err {
                    NotifyError::Status { status, .. } => logger.status_code(status.as_u16()),
                    NotifyError::Network(_) => logger,
                };
                logger
                    .error_text(err.to_string())
                    .error("webhook.send_failed", &err, "Failed to send notification");
            }
        }
    }

    outcome
}

async fn send_notification(
    http_client: &HTTPClient,
    webhook_url: &str,
    message: &str,
) -> Result<(), NotifyError> {
    let payload = json!({ "content": message });

    let response = http_client.post(webhook_url).json(&payload).send().await?;
    let status = response.status();
    if status != StatusCode::OK && status != StatusCode::NO_CONTENT {
        let body = response.text().await.unwrap_or_default();
        return Err(NotifyError::Status { status, body });
    }

    Ok(())
}
