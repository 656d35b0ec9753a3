//! Error types for the paysheet library

use thiserror::Error;

/// Result type alias for paysheet operations
pub type Result<T> = std::result::Result<T, PaySheetError>;

/// Main error type for paysheet operations
#[derive(Error, Debug)]
pub enum PaySheetError {
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Readiness check against the hosted provider failed
    #[error("Readiness check failed: {message}")]
    ReadinessCheck { message: String },

    /// Payment sheet could not be opened or rendered
    #[error("Sheet error: {message}")]
    Sheet { message: String },

    /// Payment payload returned by the provider is unusable
    #[error("Invalid payment data: {message}")]
    InvalidPaymentData { message: String },

    /// Payload carried no tokenized credential
    #[error("Payment data carries no token")]
    MissingToken,

    /// Gateway hand-off error
    #[error("Gateway error: {message}")]
    Gateway { message: String },

    /// Invalid amount
    #[error("Invalid amount: {value}")]
    InvalidAmount { value: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PaySheetError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a readiness check error
    pub fn readiness_check(message: impl Into<String>) -> Self {
        Self::ReadinessCheck {
            message: message.into(),
        }
    }

    /// Create a sheet error
    pub fn sheet(message: impl Into<String>) -> Self {
        Self::Sheet {
            message: message.into(),
        }
    }

    /// Create an invalid payment data error
    pub fn invalid_payment_data(message: impl Into<String>) -> Self {
        Self::InvalidPaymentData {
            message: message.into(),
        }
    }

    /// Create a gateway error
    pub fn gateway(message: impl Into<String>) -> Self {
        Self::Gateway {
            message: message.into(),
        }
    }

    /// Create an invalid amount error
    pub fn invalid_amount(value: impl Into<String>) -> Self {
        Self::InvalidAmount {
            value: value.into(),
        }
    }
}
