use serde::Serialize;
use std::time::Duration;
use tracing::{error, warn};

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Outcome of one delivery attempt against the chat backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Delivered,
    /// Worth retrying on a later sweep: network problems, rate limiting, 5xx
    TransientFailure,
    /// Will not succeed by waiting: unknown recipient, malformed message
    PermanentFailure,
}

/// The only component that performs I/O against the chat backend
#[async_trait::async_trait]
pub trait ITransport: Send + Sync {
    async fn send(&self, recipient: i64, message: &str) -> Delivery;
}

/// Delivers messages through the Telegram Bot API
pub struct TelegramTransport {
    client: reqwest::Client,
    base_url: String,
}

impl TelegramTransport {
    pub fn new(token: &str) -> Self {
        Self::with_base_url(&format!("https://api.telegram.org/bot{}", token))
    }

    /// Used by tests to point the transport at a local server
    pub fn with_base_url(base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .expect("To build the chat transport HTTP client");
        Self {
            client,
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendMessageBody<'a> {
    chat_id: i64,
    text: &'a str,
    parse_mode: &'a str,
}

#[async_trait::async_trait]
impl ITransport for TelegramTransport {
    async fn send(&self, recipient: i64, message: &str) -> Delivery {
        let body = SendMessageBody {
            chat_id: recipient,
            text: message,
            parse_mode: "HTML",
        };
        let res = match self
            .client
            .post(&format!("{}/sendMessage", self.base_url))
            .json(&body)
            .send()
            .await
        {
            Ok(res) => res,
            Err(e) => {
                warn!(
                    "Unable to reach the chat backend for recipient {}: {:?}",
                    recipient, e
                );
                return Delivery::TransientFailure;
            }
        };

        let status = res.status();
        if status.is_success() {
            Delivery::Delivered
        } else if status.as_u16() == 429 || status.is_server_error() {
            warn!(
                "Chat backend unavailable for recipient {}: HTTP {}",
                recipient, status
            );
            Delivery::TransientFailure
        } else {
            error!(
                "Chat backend rejected the message for recipient {}: HTTP {}",
                recipient, status
            );
            Delivery::PermanentFailure
        }
    }
}

/// Stands in when no transport credentials are configured. Reports transient
/// failure so due reminders stay unsent and are retried once a real
/// transport is available.
pub struct DisabledTransport;

#[async_trait::async_trait]
impl ITransport for DisabledTransport {
    async fn send(&self, recipient: i64, _message: &str) -> Delivery {
        warn!(
            "Chat transport is disabled, leaving reminder for recipient {} unsent",
            recipient
        );
        Delivery::TransientFailure
    }
}
