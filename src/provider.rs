//! Boundary trait for the hosted payment-sheet provider
//!
//! The hosted SDK owns card validation, tokenization, sheet rendering and
//! 3-D Secure. This crate only parameterizes it, so the whole surface is
//! a trait the hosting application implements over whatever binding it
//! has to the real provider. Test doubles implement it directly.

use crate::types::{IsReadyToPayRequest, IsReadyToPayResponse, PaymentDataRequest};
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Visual style of the rendered payment button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonColor {
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "black")]
    Black,
    #[serde(rename = "white")]
    White,
}

/// Label variant of the rendered payment button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonType {
    #[serde(rename = "buy")]
    Buy,
    #[serde(rename = "plain")]
    Plain,
}

/// Options for rendering the payment button into the host surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonOptions {
    /// Id of the host container element the button is appended to
    #[serde(rename = "containerId")]
    pub container_id: String,
    /// Button color
    #[serde(rename = "buttonColor")]
    pub button_color: ButtonColor,
    /// Button label variant
    #[serde(rename = "buttonType")]
    pub button_type: ButtonType,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            container_id: "container".to_string(),
            button_color: ButtonColor::Default,
            button_type: ButtonType::Buy,
        }
    }
}

/// Operations the hosted provider exposes to this integration.
///
/// One live instance per page session; the provider ties sheet lifecycle
/// to the instance it was asked through, so implementations must be
/// constructed once and shared.
#[async_trait]
pub trait SheetProvider: Send + Sync {
    /// Ask whether the current context can pay with one of the offered
    /// methods
    async fn is_ready_to_pay(&self, request: &IsReadyToPayRequest)
        -> Result<IsReadyToPayResponse>;

    /// Pre-warm the provider's payment data path. Amount-free by
    /// contract; failures are advisory.
    async fn prefetch_payment_data(&self, request: &PaymentDataRequest) -> Result<()>;

    /// Open the payment sheet for a concrete transaction. The payment
    /// outcome arrives later through the authorization callback, not
    /// through this call.
    async fn load_payment_data(&self, request: &PaymentDataRequest) -> Result<()>;

    /// Render the payment button into the host surface
    fn create_button(&self, options: &ButtonOptions) -> Result<()>;
}
