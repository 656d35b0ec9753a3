//! Gateway hand-off for tokenized payment credentials

use crate::types::PaymentData;
use crate::{PaySheetError, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use http::HeaderMap;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Collaborator that delivers an approved payment payload to the backend.
///
/// The authorization callback turns `Ok` into a success outcome and any
/// `Err` into an error outcome, so implementations must only resolve `Ok`
/// once the hand-off is actually dispatched.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Forward the payload's token to the payment gateway
    async fn process(&self, payment_data: &PaymentData) -> Result<()>;
}

/// Gateway endpoint configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL of the gateway charge API
    pub url: String,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl GatewayConfig {
    /// Create a new gateway config
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Validate the gateway configuration
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| PaySheetError::config(format!("Invalid gateway URL: {}", e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(PaySheetError::config(
                "Gateway URL must start with http:// or https://",
            ));
        }

        Ok(())
    }
}

/// Charge record posted to the gateway.
///
/// The upstream gateway contract is not finalized; this is the crate's
/// provisional shape.
/// TODO: align the charge shape with the gateway contract once the
/// backend service defines it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeRequest {
    /// Idempotency key for the charge
    #[serde(rename = "orderId")]
    pub order_id: Uuid,
    /// Opaque token received from the provider
    pub token: String,
    /// ISO 4217 currency code
    #[serde(rename = "currencyCode")]
    pub currency_code: String,
    /// When the credential was captured from the sheet
    #[serde(rename = "capturedAt")]
    pub captured_at: DateTime<Utc>,
}

/// HTTP client delivering tokens to the payment gateway
#[derive(Debug, Clone)]
pub struct GatewayClient {
    /// Base URL of the gateway charge API
    url: String,
    /// ISO 4217 currency code stamped on each charge
    currency_code: String,
    /// HTTP client
    client: Client,
    /// Extra headers sent with every request
    headers: HeaderMap,
}

impl GatewayClient {
    /// Create a new gateway client
    pub fn new(config: GatewayConfig, currency_code: impl Into<String>) -> Result<Self> {
        Self::with_headers(config, currency_code, HeaderMap::new())
    }

    /// Create a new gateway client sending extra headers, e.g. API keys
    pub fn with_headers(
        config: GatewayConfig,
        currency_code: impl Into<String>,
        headers: HeaderMap,
    ) -> Result<Self> {
        config.validate()?;

        let mut client_builder = Client::builder();
        if let Some(timeout) = config.timeout {
            client_builder = client_builder.timeout(timeout);
        }
        let client = client_builder
            .build()
            .map_err(|e| PaySheetError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url: config.url,
            currency_code: currency_code.into(),
            client,
            headers,
        })
    }

    /// Get the base URL of this gateway
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PaymentProcessor for GatewayClient {
    async fn process(&self, payment_data: &PaymentData) -> Result<()> {
        let token = payment_data.token()?;

        let charge = ChargeRequest {
            order_id: Uuid::new_v4(),
            token: token.to_string(),
            currency_code: self.currency_code.clone(),
            captured_at: Utc::now(),
        };

        debug!(order_id = %charge.order_id, "Dispatching charge to gateway");

        let response = self
            .client
            .post(format!("{}/charges", self.url.trim_end_matches('/')))
            .headers(self.headers.clone())
            .json(&charge)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PaySheetError::gateway(format!(
                "Charge failed with status: {}",
                response.status()
            )));
        }

        Ok(())
    }
}
