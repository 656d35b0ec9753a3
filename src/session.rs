//! Payment session orchestration
//!
//! Replaces the page-global provider handle with an explicitly owned
//! session: the hosting application constructs one `PaymentSession` per
//! page session and routes provider notifications (load, click,
//! authorization) through it.

use crate::config::MerchantConfig;
use crate::gateway::PaymentProcessor;
use crate::provider::{ButtonOptions, SheetProvider};
use crate::request;
use crate::types::{PaymentAuthorizationResult, PaymentData, TransactionInfo};
use crate::Result;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Message rendered by the provider when the hand-off fails. The cause is
/// not inspected at this layer, so the mapping is fixed.
const HANDOFF_FAILURE_MESSAGE: &str = "Insufficient funds";

/// One payment-sheet integration session.
///
/// Holds the single provider handle for the page's lifetime. Construct it
/// once; the provider ties sheet lifecycle to the instance it was first
/// asked through.
pub struct PaymentSession {
    config: MerchantConfig,
    button_options: ButtonOptions,
    provider: Arc<dyn SheetProvider>,
    processor: Arc<dyn PaymentProcessor>,
}

impl PaymentSession {
    /// Create a session over a validated merchant configuration
    pub fn new(
        config: MerchantConfig,
        provider: Arc<dyn SheetProvider>,
        processor: Arc<dyn PaymentProcessor>,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            button_options: ButtonOptions::default(),
            provider,
            processor,
        })
    }

    /// Override the rendered button's options
    pub fn with_button_options(mut self, options: ButtonOptions) -> Self {
        self.button_options = options;
        self
    }

    /// The merchant configuration this session was built with
    pub fn config(&self) -> &MerchantConfig {
        &self.config
    }

    /// The provider handle. Every call returns the same instance.
    pub fn provider(&self) -> Arc<dyn SheetProvider> {
        Arc::clone(&self.provider)
    }

    /// Bootstrap after the hosted provider has loaded.
    ///
    /// Queries readiness with the restricted method set; if the context
    /// can pay, renders the payment button and pre-warms the payment data
    /// path with an amount-free descriptor. Returns whether the button
    /// was rendered. Failures are observed and logged, never propagated.
    pub async fn on_provider_loaded(&self) -> bool {
        let ready = request::is_ready_to_pay_request();
        match self.provider.is_ready_to_pay(&ready).await {
            Ok(response) if response.result => {}
            Ok(_) => {
                info!("Context cannot pay; payment button not rendered");
                return false;
            }
            Err(e) => {
                error!("Readiness check failed: {}", e);
                return false;
            }
        }

        if let Err(e) = self.provider.create_button(&self.button_options) {
            error!("Failed to render payment button: {}", e);
            return false;
        }

        // Pre-warm only after the capability check; a failed prefetch
        // costs nothing but the warm cache.
        let prefetch = request::prefetch_payment_data_request(&self.config);
        if let Err(e) = self.provider.prefetch_payment_data(&prefetch).await {
            warn!("Payment data prefetch failed: {}", e);
        }

        true
    }

    /// Open the payment sheet for a concrete transaction.
    ///
    /// Fire-and-forget with respect to the payment outcome: approval or
    /// decline arrives later through [`Self::on_payment_authorized`]. An
    /// error here only means the sheet could not be opened.
    pub async fn on_button_clicked(&self, transaction_info: TransactionInfo) -> Result<()> {
        let request = request::payment_data_request(&self.config, transaction_info);
        self.provider.load_payment_data(&request).await
    }

    /// Handle the provider's post-authorization callback.
    ///
    /// Always resolves with a descriptor the provider understands: the
    /// hand-off outcome selects success or error, and nothing escapes as
    /// an error of this call itself.
    pub async fn on_payment_authorized(
        &self,
        payment_data: PaymentData,
    ) -> PaymentAuthorizationResult {
        match self.processor.process(&payment_data).await {
            Ok(()) => {
                info!("Payment authorized and handed off to gateway");
                PaymentAuthorizationResult::success()
            }
            Err(e) => {
                error!("Payment hand-off failed: {}", e);
                PaymentAuthorizationResult::payment_data_invalid(HANDOFF_FAILURE_MESSAGE)
            }
        }
    }
}
