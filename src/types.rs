//! Core wire types for the hosted payment-sheet provider

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Major version of the provider request format
pub const API_VERSION: u8 = 2;

/// Minor version of the provider request format
pub const API_VERSION_MINOR: u8 = 0;

/// Hosted provider environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    /// Sandbox environment returning dummy credentials
    #[serde(rename = "TEST")]
    Test,
    /// Live environment returning chargeable credentials
    #[serde(rename = "PRODUCTION")]
    Production,
}

impl Environment {
    /// Get the environment identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Test => "TEST",
            Environment::Production => "PRODUCTION",
        }
    }

    /// Whether this is the sandbox environment
    pub fn is_test(&self) -> bool {
        matches!(self, Environment::Test)
    }
}

/// Card networks accepted on the payment sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardNetwork {
    #[serde(rename = "AMEX")]
    Amex,
    #[serde(rename = "DISCOVER")]
    Discover,
    #[serde(rename = "INTERAC")]
    Interac,
    #[serde(rename = "JCB")]
    Jcb,
    #[serde(rename = "MASTERCARD")]
    Mastercard,
    #[serde(rename = "VISA")]
    Visa,
}

impl CardNetwork {
    /// Get the network identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            CardNetwork::Amex => "AMEX",
            CardNetwork::Discover => "DISCOVER",
            CardNetwork::Interac => "INTERAC",
            CardNetwork::Jcb => "JCB",
            CardNetwork::Mastercard => "MASTERCARD",
            CardNetwork::Visa => "VISA",
        }
    }

    /// All networks the integration accepts
    pub fn all() -> Vec<CardNetwork> {
        vec![
            CardNetwork::Amex,
            CardNetwork::Discover,
            CardNetwork::Interac,
            CardNetwork::Jcb,
            CardNetwork::Mastercard,
            CardNetwork::Visa,
        ]
    }
}

/// Card authentication methods accepted on the payment sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardAuthMethod {
    /// Plain primary account number
    #[serde(rename = "PAN_ONLY")]
    PanOnly,
    /// Device-bound cryptogram with 3-D Secure
    #[serde(rename = "CRYPTOGRAM_3DS")]
    Cryptogram3ds,
}

impl CardAuthMethod {
    /// Get the auth method identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            CardAuthMethod::PanOnly => "PAN_ONLY",
            CardAuthMethod::Cryptogram3ds => "CRYPTOGRAM_3DS",
        }
    }

    /// All auth methods the integration accepts
    pub fn all() -> Vec<CardAuthMethod> {
        vec![CardAuthMethod::PanOnly, CardAuthMethod::Cryptogram3ds]
    }
}

/// How the credential is tokenized before it reaches this integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenizationType {
    /// A downstream gateway receives and detokenizes the credential
    #[serde(rename = "PAYMENT_GATEWAY")]
    PaymentGateway,
}

/// Gateway routing parameters for tokenization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayParameters {
    /// Gateway identifier as registered with the provider
    pub gateway: String,
    /// Merchant identifier issued by that gateway
    #[serde(rename = "gatewayMerchantId")]
    pub gateway_merchant_id: String,
}

/// Tokenization descriptor identifying the downstream gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizationSpecification {
    /// Tokenization type
    #[serde(rename = "type")]
    pub tokenization_type: TokenizationType,
    /// Gateway routing parameters
    pub parameters: GatewayParameters,
}

impl TokenizationSpecification {
    /// Create a gateway tokenization descriptor
    pub fn payment_gateway(
        gateway: impl Into<String>,
        gateway_merchant_id: impl Into<String>,
    ) -> Self {
        Self {
            tokenization_type: TokenizationType::PaymentGateway,
            parameters: GatewayParameters {
                gateway: gateway.into(),
                gateway_merchant_id: gateway_merchant_id.into(),
            },
        }
    }
}

/// Payment method family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethodType {
    #[serde(rename = "CARD")]
    Card,
}

/// Card acceptance parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardParameters {
    /// Accepted authentication methods
    #[serde(rename = "allowedAuthMethods")]
    pub allowed_auth_methods: Vec<CardAuthMethod>,
    /// Accepted card networks
    #[serde(rename = "allowedCardNetworks")]
    pub allowed_card_networks: Vec<CardNetwork>,
}

/// A payment method descriptor offered to the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Payment method family
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    /// Card acceptance parameters
    pub parameters: CardParameters,
    /// Tokenization descriptor; absent on capability queries
    #[serde(
        rename = "tokenizationSpecification",
        skip_serializing_if = "Option::is_none"
    )]
    pub tokenization_specification: Option<TokenizationSpecification>,
}

impl PaymentMethod {
    /// Create a card method accepting the full fixed network and auth sets
    pub fn card() -> Self {
        Self {
            method_type: PaymentMethodType::Card,
            parameters: CardParameters {
                allowed_auth_methods: CardAuthMethod::all(),
                allowed_card_networks: CardNetwork::all(),
            },
            tokenization_specification: None,
        }
    }

    /// Attach a tokenization descriptor
    pub fn with_tokenization(mut self, spec: TokenizationSpecification) -> Self {
        self.tokenization_specification = Some(spec);
        self
    }
}

/// Line item role on the payment sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayItemType {
    #[serde(rename = "SUBTOTAL")]
    Subtotal,
    #[serde(rename = "TAX")]
    Tax,
    #[serde(rename = "LINE_ITEM")]
    LineItem,
}

/// A labeled line item displayed on the payment sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayItem {
    /// Label shown to the payer
    pub label: String,
    /// Line item role
    #[serde(rename = "type")]
    pub item_type: DisplayItemType,
    /// Price in major units, as a decimal string
    pub price: String,
}

impl DisplayItem {
    /// Create a display item
    pub fn new(
        label: impl Into<String>,
        item_type: DisplayItemType,
        price: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            item_type,
            price: price.into(),
        }
    }

    /// Create a subtotal line
    pub fn subtotal(label: impl Into<String>, price: impl Into<String>) -> Self {
        Self::new(label, DisplayItemType::Subtotal, price)
    }

    /// Create a tax line
    pub fn tax(label: impl Into<String>, price: impl Into<String>) -> Self {
        Self::new(label, DisplayItemType::Tax, price)
    }
}

/// Finality of the transaction total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TotalPriceStatus {
    /// Committed final amount
    #[serde(rename = "FINAL")]
    Final,
    /// Amount may still change before authorization
    #[serde(rename = "ESTIMATED")]
    Estimated,
    /// Placeholder used when pre-warming the sheet
    #[serde(rename = "NOT_CURRENTLY_KNOWN")]
    NotCurrentlyKnown,
}

/// Transaction amount, currency and line items for the payment sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInfo {
    /// Line items shown to the payer
    #[serde(rename = "displayItems", skip_serializing_if = "Vec::is_empty", default)]
    pub display_items: Vec<DisplayItem>,
    /// ISO 3166-1 alpha-2 country of the transaction
    #[serde(rename = "countryCode", skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    /// ISO 4217 currency code
    #[serde(rename = "currencyCode")]
    pub currency_code: String,
    /// Finality of the total
    #[serde(rename = "totalPriceStatus")]
    pub total_price_status: TotalPriceStatus,
    /// Total in major units; absent when the total is not yet known
    #[serde(rename = "totalPrice", skip_serializing_if = "Option::is_none")]
    pub total_price: Option<String>,
    /// Label for the total line
    #[serde(rename = "totalPriceLabel", skip_serializing_if = "Option::is_none")]
    pub total_price_label: Option<String>,
}

impl TransactionInfo {
    /// Create a FINAL transaction whose total is the sum of its line items
    pub fn final_amount(
        country_code: impl Into<String>,
        currency_code: impl Into<String>,
        display_items: Vec<DisplayItem>,
        total_price_label: impl Into<String>,
    ) -> crate::Result<Self> {
        let total = Self::sum_items(&display_items)?;
        Ok(Self {
            display_items,
            country_code: Some(country_code.into()),
            currency_code: currency_code.into(),
            total_price_status: TotalPriceStatus::Final,
            total_price: Some(total),
            total_price_label: Some(total_price_label.into()),
        })
    }

    /// Create the placeholder transaction used for prefetching.
    ///
    /// Carries no literal total so the pre-warm can never be mistaken for
    /// a committed amount.
    pub fn not_currently_known(currency_code: impl Into<String>) -> Self {
        Self {
            display_items: Vec::new(),
            country_code: None,
            currency_code: currency_code.into(),
            total_price_status: TotalPriceStatus::NotCurrentlyKnown,
            total_price: None,
            total_price_label: None,
        }
    }

    fn sum_items(items: &[DisplayItem]) -> crate::Result<String> {
        let mut total = Decimal::ZERO;
        for item in items {
            let price: Decimal = item
                .price
                .parse()
                .map_err(|_| crate::PaySheetError::invalid_amount(&item.price))?;
            total += price;
        }
        Ok(total.normalize().to_string())
    }
}

/// Merchant identity shown on the payment sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantInfo {
    /// Provider-issued merchant identifier
    #[serde(rename = "merchantId")]
    pub merchant_id: String,
    /// Merchant display name
    #[serde(rename = "merchantName")]
    pub merchant_name: String,
}

impl MerchantInfo {
    /// Create a merchant descriptor
    pub fn new(merchant_id: impl Into<String>, merchant_name: impl Into<String>) -> Self {
        Self {
            merchant_id: merchant_id.into(),
            merchant_name: merchant_name.into(),
        }
    }
}

/// Capability query: can this browsing context pay with one of our methods
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsReadyToPayRequest {
    /// Major request format version
    #[serde(rename = "apiVersion")]
    pub api_version: u8,
    /// Minor request format version
    #[serde(rename = "apiVersionMinor")]
    pub api_version_minor: u8,
    /// Methods the query is about
    #[serde(rename = "allowedPaymentMethods")]
    pub allowed_payment_methods: Vec<PaymentMethod>,
}

impl IsReadyToPayRequest {
    /// Create a capability query for the given methods
    pub fn new(allowed_payment_methods: Vec<PaymentMethod>) -> Self {
        Self {
            api_version: API_VERSION,
            api_version_minor: API_VERSION_MINOR,
            allowed_payment_methods,
        }
    }
}

/// Provider answer to a capability query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsReadyToPayResponse {
    /// Whether the context can pay
    pub result: bool,
}

/// Hook points at which the provider defers to this integration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallbackIntent {
    /// Called after the payer approves the sheet, before the outcome is shown
    #[serde(rename = "PAYMENT_AUTHORIZATION")]
    PaymentAuthorization,
}

/// Full payment request opening the sheet for a concrete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDataRequest {
    /// Major request format version
    #[serde(rename = "apiVersion")]
    pub api_version: u8,
    /// Minor request format version
    #[serde(rename = "apiVersionMinor")]
    pub api_version_minor: u8,
    /// Methods the payer may choose from
    #[serde(rename = "allowedPaymentMethods")]
    pub allowed_payment_methods: Vec<PaymentMethod>,
    /// Transaction presented on the sheet
    #[serde(rename = "transactionInfo")]
    pub transaction_info: TransactionInfo,
    /// Merchant identity presented on the sheet
    #[serde(rename = "merchantInfo")]
    pub merchant_info: MerchantInfo,
    /// Declared callback hook points
    #[serde(rename = "callbackIntents")]
    pub callback_intents: Vec<CallbackIntent>,
}

/// Tokenized credential returned by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizationData {
    /// Tokenization type echo
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tokenization_type: Option<String>,
    /// Opaque token for the downstream gateway
    #[serde(default)]
    pub token: String,
}

/// Method-specific slice of the provider result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodData {
    /// Human-readable summary, e.g. a masked card number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tokenized credential
    #[serde(rename = "tokenizationData")]
    pub tokenization_data: TokenizationData,
}

/// Result payload delivered after the payer approves the sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentData {
    /// Method-specific payload slice
    #[serde(rename = "paymentMethodData")]
    pub payment_method_data: PaymentMethodData,
}

impl PaymentData {
    /// Extract the opaque gateway token from the payload
    pub fn token(&self) -> crate::Result<&str> {
        let token = self.payment_method_data.tokenization_data.token.as_str();
        if token.is_empty() {
            return Err(crate::PaySheetError::MissingToken);
        }
        Ok(token)
    }
}

/// Outcome of the authorization callback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionState {
    #[serde(rename = "SUCCESS")]
    Success,
    #[serde(rename = "ERROR")]
    Error,
}

/// Reason code attached to a failed authorization outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorReason {
    #[serde(rename = "PAYMENT_DATA_INVALID")]
    PaymentDataInvalid,
    #[serde(rename = "OTHER_ERROR")]
    OtherError,
}

/// Error descriptor the provider renders to the payer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDataError {
    /// Hook point the error belongs to
    pub intent: CallbackIntent,
    /// Human-readable message
    pub message: String,
    /// Machine-readable reason code
    pub reason: ErrorReason,
}

/// Descriptor the authorization callback must always resolve with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAuthorizationResult {
    /// Success or error
    #[serde(rename = "transactionState")]
    pub transaction_state: TransactionState,
    /// Error detail; present only on error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PaymentDataError>,
}

impl PaymentAuthorizationResult {
    /// Successful authorization outcome
    pub fn success() -> Self {
        Self {
            transaction_state: TransactionState::Success,
            error: None,
        }
    }

    /// Failed authorization outcome with the fixed invalid-data reason
    pub fn payment_data_invalid(message: impl Into<String>) -> Self {
        Self {
            transaction_state: TransactionState::Error,
            error: Some(PaymentDataError {
                intent: CallbackIntent::PaymentAuthorization,
                message: message.into(),
                reason: ErrorReason::PaymentDataInvalid,
            }),
        }
    }

    /// Whether the outcome is a success
    pub fn is_success(&self) -> bool {
        matches!(self.transaction_state, TransactionState::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_network_wire_names() {
        let json = serde_json::to_string(&CardNetwork::all()).unwrap();
        assert_eq!(
            json,
            r#"["AMEX","DISCOVER","INTERAC","JCB","MASTERCARD","VISA"]"#
        );
    }

    #[test]
    fn test_auth_method_wire_names() {
        let json = serde_json::to_string(&CardAuthMethod::all()).unwrap();
        assert_eq!(json, r#"["PAN_ONLY","CRYPTOGRAM_3DS"]"#);
    }

    #[test]
    fn test_card_method_omits_absent_tokenization() {
        let value = serde_json::to_value(PaymentMethod::card()).unwrap();
        assert_eq!(value["type"], "CARD");
        assert!(value["parameters"]["allowedAuthMethods"].is_array());
        assert!(value.get("tokenizationSpecification").is_none());
    }

    #[test]
    fn test_card_method_with_tokenization() {
        let method = PaymentMethod::card().with_tokenization(
            TokenizationSpecification::payment_gateway("example", "exampleGatewayMerchantId"),
        );
        let value = serde_json::to_value(method).unwrap();
        let spec = &value["tokenizationSpecification"];
        assert_eq!(spec["type"], "PAYMENT_GATEWAY");
        assert_eq!(spec["parameters"]["gateway"], "example");
        assert_eq!(
            spec["parameters"]["gatewayMerchantId"],
            "exampleGatewayMerchantId"
        );
    }

    #[test]
    fn test_final_transaction_total_is_item_sum() {
        let info = TransactionInfo::final_amount(
            "JP",
            "JPY",
            vec![
                DisplayItem::subtotal("Subtotal", "1000"),
                DisplayItem::tax("Tax", "100"),
            ],
            "Total",
        )
        .unwrap();

        assert_eq!(info.total_price.as_deref(), Some("1100"));
        assert_eq!(info.total_price_status, TotalPriceStatus::Final);
    }

    #[test]
    fn test_final_transaction_rejects_bad_price() {
        let result = TransactionInfo::final_amount(
            "JP",
            "JPY",
            vec![DisplayItem::subtotal("Subtotal", "ten")],
            "Total",
        );
        assert!(matches!(
            result,
            Err(crate::PaySheetError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_prefetch_transaction_has_no_total() {
        let info = TransactionInfo::not_currently_known("JPY");
        assert_eq!(info.total_price_status, TotalPriceStatus::NotCurrentlyKnown);
        assert!(info.total_price.is_none());

        let value = serde_json::to_value(info).unwrap();
        assert_eq!(value["totalPriceStatus"], "NOT_CURRENTLY_KNOWN");
        assert!(value.get("totalPrice").is_none());
        assert!(value.get("displayItems").is_none());
    }

    #[test]
    fn test_payment_data_token_extraction() {
        let data: PaymentData = serde_json::from_value(serde_json::json!({
            "paymentMethodData": {
                "description": "Visa •••• 1234",
                "tokenizationData": {
                    "type": "PAYMENT_GATEWAY",
                    "token": "examplePaymentMethodToken"
                }
            }
        }))
        .unwrap();

        assert_eq!(data.token().unwrap(), "examplePaymentMethodToken");
    }

    #[test]
    fn test_payment_data_missing_token() {
        let data: PaymentData = serde_json::from_value(serde_json::json!({
            "paymentMethodData": { "tokenizationData": {} }
        }))
        .unwrap();

        assert!(matches!(
            data.token(),
            Err(crate::PaySheetError::MissingToken)
        ));
    }

    #[test]
    fn test_authorization_result_shapes() {
        let ok = serde_json::to_value(PaymentAuthorizationResult::success()).unwrap();
        assert_eq!(ok["transactionState"], "SUCCESS");
        assert!(ok.get("error").is_none());

        let err =
            serde_json::to_value(PaymentAuthorizationResult::payment_data_invalid(
                "Insufficient funds",
            ))
            .unwrap();
        assert_eq!(err["transactionState"], "ERROR");
        assert_eq!(err["error"]["intent"], "PAYMENT_AUTHORIZATION");
        assert_eq!(err["error"]["reason"], "PAYMENT_DATA_INVALID");
        assert_eq!(err["error"]["message"], "Insufficient funds");
    }
}
