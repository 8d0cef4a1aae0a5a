//! Outbound lead notifications.

use serde::Serialize;
use tracing as log;

/// Dispatcher of captured lead notifications to an external webhook.
///
/// Notification delivery is best-effort: a lead is already persisted by the
/// time a notification is dispatched, so any failure here is logged and
/// swallowed.
#[derive(Clone, Debug, Default)]
pub struct Notifier {
    /// HTTP client performing the requests.
    http: reqwest::Client,

    /// URL of the webhook to `POST` [`Payload`]s to.
    endpoint: Option<String>,
}

/// Notification payload `POST`ed to the webhook.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    /// Name of the person behind the lead.
    pub name: String,

    /// Phone number of the person behind the lead.
    pub phone: String,

    /// Email address of the person behind the lead, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Free-form message of the lead, if provided.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// ID of the property the lead is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,

    /// Title of the property the lead is about, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_title: Option<String>,
}

/// Outcome of a [`Notifier::dispatch()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The webhook accepted the notification.
    Dispatched,

    /// No webhook is configured.
    Skipped,

    /// The webhook rejected the notification or was unreachable.
    Failed,
}

impl Notifier {
    /// Creates a new [`Notifier`] dispatching to the provided `endpoint`.
    #[must_use]
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Dispatches the provided [`Payload`], reporting the [`Outcome`].
    pub async fn dispatch(&self, payload: &Payload) -> Outcome {
        let Some(endpoint) = &self.endpoint else {
            log::debug!("no notification endpoint configured, skipping");
            return Outcome::Skipped;
        };

        match self.http.post(endpoint).json(payload).send().await {
            Ok(resp) if resp.status().is_success() => Outcome::Dispatched,
            Ok(resp) => {
                log::warn!(
                    status = resp.status().as_u16(),
                    "lead notification rejected",
                );
                Outcome::Failed
            }
            Err(e) => {
                log::warn!(error = %e, "lead notification failed");
                Outcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod spec {
    use super::{Notifier, Outcome, Payload};

    #[tokio::test]
    async fn skips_without_an_endpoint() {
        let notifier = Notifier::new(None);

        let outcome = notifier
            .dispatch(&Payload {
                name: "John Doe".to_owned(),
                phone: "201224470757".to_owned(),
                email: None,
                message: None,
                property_id: None,
                property_title: None,
            })
            .await;

        assert_eq!(outcome, Outcome::Skipped);
    }
}
