//! # paysheet - hosted payment-sheet integration
//!
//! Configures and drives a hosted payment-sheet provider to collect a
//! tokenized card credential and hand it to a merchant payment gateway.
//! This library builds the provider's request descriptors, owns the
//! per-session provider handle, and maps authorization outcomes; card
//! validation, tokenization, sheet rendering and 3-D Secure all live
//! inside the hosted provider.

pub mod config;
pub mod error;
pub mod gateway;
pub mod provider;
pub mod request;
pub mod session;
pub mod types;

// Re-exports for convenience
pub use config::MerchantConfig;
pub use error::{PaySheetError, Result};
pub use gateway::{GatewayClient, GatewayConfig, PaymentProcessor};
pub use provider::{ButtonOptions, SheetProvider};
pub use session::PaymentSession;
pub use types::*;

/// Current version of the paysheet library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert_eq!(API_VERSION, 2);
        assert_eq!(API_VERSION_MINOR, 0);
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_ready_request_carries_version_fields() {
        let request = request::is_ready_to_pay_request();
        assert_eq!(request.api_version, API_VERSION);
        assert_eq!(request.api_version_minor, API_VERSION_MINOR);
    }

    #[test]
    fn test_default_config_builds_tokenized_method() {
        let config = MerchantConfig::default();
        let method = request::card_payment_method(&config);
        let spec = method.tokenization_specification.unwrap();
        assert_eq!(spec.parameters.gateway, "example");
        assert_eq!(spec.parameters.gateway_merchant_id, "exampleGatewayMerchantId");
    }
}
