//! Email relay client for contact-form submissions.
//!
//! Client-side (hydrate): posts to the EmailJS REST endpoint via `gloo-net`.
//! Server-side (SSR) and native tests: the request is built and validated
//! but never sent; `send_message` reports `RelayError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a `RelayError` value. The contact flow turns it into a
//! user-facing reason with `user_reason`; nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "relay_test.rs"]
mod relay_test;

use serde::Serialize;

/// EmailJS REST endpoint for template sends.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Reason shown when the relay gives nothing more specific.
pub const FALLBACK_FAILURE_REASON: &str = "Failed to send your message. Please try again later.";

const NOT_CONFIGURED_REASON: &str = "The contact form is not set up yet. Please reach out by email instead.";

/// Validated contact-form payload. Field names match the relay template
/// variables.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("relay credentials are not configured")]
    NotConfigured,
    #[error("relay request failed: {0}")]
    Transport(String),
    #[error("relay rejected message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("relay is only reachable from the browser")]
    Unavailable,
}

impl RelayError {
    /// Text shown in the contact form status banner.
    #[must_use]
    pub fn user_reason(&self) -> String {
        match self {
            Self::NotConfigured => NOT_CONFIGURED_REASON.to_owned(),
            Self::Rejected { body, .. } if !body.trim().is_empty() => body.trim().to_owned(),
            Self::Rejected { .. } | Self::Transport(_) | Self::Unavailable => FALLBACK_FAILURE_REASON.to_owned(),
        }
    }
}

/// Outbound message delivery. Resolves exactly once per call.
#[allow(async_fn_in_trait)]
pub trait Relay {
    async fn send_message(&self, message: &ContactMessage) -> Result<(), RelayError>;
}

/// EmailJS credentials, baked in at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: Option<&'static str>,
    pub template_id: Option<&'static str>,
    pub public_key: Option<&'static str>,
}

impl RelayConfig {
    /// Read `PORTFOLIO_EMAILJS_SERVICE_ID`, `PORTFOLIO_EMAILJS_TEMPLATE_ID`
    /// and `PORTFOLIO_EMAILJS_PUBLIC_KEY` from the build environment.
    #[must_use]
    pub const fn from_build_env() -> Self {
        Self {
            service_id: option_env!("PORTFOLIO_EMAILJS_SERVICE_ID"),
            template_id: option_env!("PORTFOLIO_EMAILJS_TEMPLATE_ID"),
            public_key: option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY"),
        }
    }
}

fn required(value: Option<&'static str>) -> Result<&'static str, RelayError> {
    value.filter(|v| !v.trim().is_empty()).ok_or(RelayError::NotConfigured)
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'static str,
    template_id: &'static str,
    user_id: &'static str,
    template_params: &'a ContactMessage,
}

fn send_request<'a>(config: &RelayConfig, message: &'a ContactMessage) -> Result<SendRequest<'a>, RelayError> {
    Ok(SendRequest {
        service_id: required(config.service_id)?,
        template_id: required(config.template_id)?,
        user_id: required(config.public_key)?,
        template_params: message,
    })
}

/// Relay backed by the EmailJS REST API.
#[derive(Clone, Copy, Debug)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    #[must_use]
    pub const fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn from_build_env() -> Self {
        Self::new(RelayConfig::from_build_env())
    }
}

impl Relay for EmailJsRelay {
    async fn send_message(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let request = send_request(&self.config, message)?;
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(EMAILJS_SEND_URL)
                .json(&request)
                .map_err(|e| RelayError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| RelayError::Transport(e.to_string()))?;
            if resp.ok() {
                return Ok(());
            }
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Err(RelayError::Rejected { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(RelayError::Unavailable)
        }
    }
}
