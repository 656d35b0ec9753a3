//! Request builders for the hosted payment-sheet provider
//!
//! Every builder returns a freshly owned descriptor. The provider may
//! retain references to whatever it is handed, so no nested array or
//! object is ever shared between two built requests.

use crate::config::MerchantConfig;
use crate::types::{
    CallbackIntent, IsReadyToPayRequest, MerchantInfo, PaymentDataRequest, PaymentMethod,
    TokenizationSpecification, TransactionInfo,
};

/// Card method used for capability queries: no tokenization descriptor
pub fn base_card_payment_method() -> PaymentMethod {
    PaymentMethod::card()
}

/// Card method offered on the sheet, routed to the configured gateway
pub fn card_payment_method(config: &MerchantConfig) -> PaymentMethod {
    PaymentMethod::card().with_tokenization(TokenizationSpecification::payment_gateway(
        config.gateway.clone(),
        config.gateway_merchant_id.clone(),
    ))
}

/// Capability query asking whether the context can pay with our card set
pub fn is_ready_to_pay_request() -> IsReadyToPayRequest {
    IsReadyToPayRequest::new(vec![base_card_payment_method()])
}

/// Full payment request for a concrete transaction, with the
/// post-authorization callback intent declared
pub fn payment_data_request(
    config: &MerchantConfig,
    transaction_info: TransactionInfo,
) -> PaymentDataRequest {
    PaymentDataRequest {
        api_version: crate::types::API_VERSION,
        api_version_minor: crate::types::API_VERSION_MINOR,
        allowed_payment_methods: vec![card_payment_method(config)],
        transaction_info,
        merchant_info: MerchantInfo::new(
            config.merchant_id.clone(),
            config.merchant_name.clone(),
        ),
        callback_intents: vec![CallbackIntent::PaymentAuthorization],
    }
}

/// Payment request used to pre-warm the provider before any real amount
/// exists. The transaction carries no literal total.
pub fn prefetch_payment_data_request(config: &MerchantConfig) -> PaymentDataRequest {
    payment_data_request(
        config,
        TransactionInfo::not_currently_known(config.currency_code.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DisplayItem, TotalPriceStatus};

    #[test]
    fn test_readiness_request_has_single_untokenized_method() {
        let request = is_ready_to_pay_request();

        assert_eq!(request.allowed_payment_methods.len(), 1);
        assert!(request.allowed_payment_methods[0]
            .tokenization_specification
            .is_none());
    }

    #[test]
    fn test_payment_request_has_single_tokenized_method() {
        let config = MerchantConfig::default();
        let info = TransactionInfo::final_amount(
            "JP",
            "JPY",
            vec![DisplayItem::subtotal("Subtotal", "1000")],
            "Total",
        )
        .unwrap();
        let request = payment_data_request(&config, info);

        assert_eq!(request.allowed_payment_methods.len(), 1);
        let spec = request.allowed_payment_methods[0]
            .tokenization_specification
            .as_ref()
            .unwrap();
        assert!(!spec.parameters.gateway.is_empty());
        assert!(!spec.parameters.gateway_merchant_id.is_empty());
        assert_eq!(
            request.callback_intents,
            vec![CallbackIntent::PaymentAuthorization]
        );
        assert_eq!(request.merchant_info.merchant_id, config.merchant_id);
    }

    #[test]
    fn test_prefetch_request_amount_is_not_currently_known() {
        let config = MerchantConfig::default();
        let request = prefetch_payment_data_request(&config);

        assert_eq!(
            request.transaction_info.total_price_status,
            TotalPriceStatus::NotCurrentlyKnown
        );
        assert!(request.transaction_info.total_price.is_none());
        assert_eq!(request.transaction_info.currency_code, "JPY");
    }

    #[test]
    fn test_builders_return_fresh_descriptors() {
        let config = MerchantConfig::default();

        let mut first = prefetch_payment_data_request(&config);
        first.allowed_payment_methods[0]
            .parameters
            .allowed_card_networks
            .clear();

        let second = prefetch_payment_data_request(&config);
        assert!(!second.allowed_payment_methods[0]
            .parameters
            .allowed_card_networks
            .is_empty());
    }
}
