//! Outbound SMS delivery.

use async_trait::async_trait;
use serde::Serialize;

use crate::server::error::delivery::DeliveryError;

/// Sends a text message to a phone number.
///
/// Failures are reported but never fatal to the caller's operation.
#[async_trait]
pub trait SmsSender: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> Result<(), DeliveryError>;
}

#[derive(Serialize)]
struct GatewayMessage<'a> {
    to: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    from: Option<&'a str>,
    body: &'a str,
}

/// Delivers SMS through an HTTP gateway accepting `{ to, from, body }` JSON.
pub struct HttpSmsSender {
    http_client: reqwest::Client,
    gateway_url: String,
    token: String,
    sender_id: Option<String>,
}

impl HttpSmsSender {
    pub fn new(
        http_client: reqwest::Client,
        gateway_url: String,
        token: String,
        sender_id: Option<String>,
    ) -> Self {
        Self {
            http_client,
            gateway_url,
            token,
            sender_id,
        }
    }
}

#[async_trait]
impl SmsSender for HttpSmsSender {
    async fn send(&self, to: &str, body: &str) -> Result<(), DeliveryError> {
        let response = self
            .http_client
            .post(&self.gateway_url)
            .bearer_auth(&self.token)
            .json(&GatewayMessage {
                to,
                from: self.sender_id.as_deref(),
                body,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Writes outgoing SMS to the log instead of sending them.
///
/// Used when no gateway is configured.
pub struct LogSmsSender;

#[async_trait]
impl SmsSender for LogSmsSender {
    async fn send(&self, to: &str, body: &str) -> Result<(), DeliveryError> {
        tracing::info!("SMS to {}: {}", to, body);
        Ok(())
    }
}
