//! Merchant configuration for the payment-sheet integration

use crate::types::Environment;
use crate::{PaySheetError, Result};
use serde::{Deserialize, Serialize};

/// Environment-specific constants a merchant must supply before going live
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantConfig {
    /// Provider environment
    pub environment: Environment,
    /// Provider-issued merchant identifier
    pub merchant_id: String,
    /// Merchant name shown on the payment sheet
    pub merchant_name: String,
    /// Gateway identifier as registered with the provider
    pub gateway: String,
    /// Merchant identifier issued by the gateway
    pub gateway_merchant_id: String,
    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
    /// ISO 4217 currency code
    pub currency_code: String,
}

impl Default for MerchantConfig {
    fn default() -> Self {
        // Documented test-integration values; every field must be replaced
        // with provider-issued values before production use.
        Self {
            environment: Environment::Test,
            merchant_id: "12345678901234567890".to_string(),
            merchant_name: "Demo Shop".to_string(),
            gateway: "example".to_string(),
            gateway_merchant_id: "exampleGatewayMerchantId".to_string(),
            country_code: "JP".to_string(),
            currency_code: "JPY".to_string(),
        }
    }
}

impl MerchantConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PaySheetError::config(format!("Failed to read config file: {}", e)))?;

        let config: MerchantConfig = serde_json::from_str(&content)
            .map_err(|e| PaySheetError::config(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `PAYSHEET_*` environment variables.
    ///
    /// Unset variables keep their test-integration defaults; set
    /// `PAYSHEET_ENVIRONMENT=PRODUCTION` to go live.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(environment) = std::env::var("PAYSHEET_ENVIRONMENT") {
            config.environment = match environment.as_str() {
                "TEST" => Environment::Test,
                "PRODUCTION" => Environment::Production,
                other => {
                    return Err(PaySheetError::config(format!(
                        "Unknown environment: {}",
                        other
                    )))
                }
            };
        }
        if let Ok(merchant_id) = std::env::var("PAYSHEET_MERCHANT_ID") {
            config.merchant_id = merchant_id;
        }
        if let Ok(merchant_name) = std::env::var("PAYSHEET_MERCHANT_NAME") {
            config.merchant_name = merchant_name;
        }
        if let Ok(gateway) = std::env::var("PAYSHEET_GATEWAY") {
            config.gateway = gateway;
        }
        if let Ok(gateway_merchant_id) = std::env::var("PAYSHEET_GATEWAY_MERCHANT_ID") {
            config.gateway_merchant_id = gateway_merchant_id;
        }
        if let Ok(country_code) = std::env::var("PAYSHEET_COUNTRY_CODE") {
            config.country_code = country_code;
        }
        if let Ok(currency_code) = std::env::var("PAYSHEET_CURRENCY_CODE") {
            config.currency_code = currency_code;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.merchant_id.is_empty() {
            return Err(PaySheetError::config("Merchant id cannot be empty"));
        }
        if self.merchant_name.is_empty() {
            return Err(PaySheetError::config("Merchant name cannot be empty"));
        }
        if self.gateway.is_empty() {
            return Err(PaySheetError::config("Gateway cannot be empty"));
        }
        if self.gateway_merchant_id.is_empty() {
            return Err(PaySheetError::config("Gateway merchant id cannot be empty"));
        }
        if self.country_code.len() != 2 || !self.country_code.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(PaySheetError::config(format!(
                "Country code must be two uppercase letters, got {:?}",
                self.country_code
            )));
        }
        if self.currency_code.len() != 3
            || !self.currency_code.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(PaySheetError::config(format!(
                "Currency code must be three uppercase letters, got {:?}",
                self.currency_code
            )));
        }
        Ok(())
    }
}
