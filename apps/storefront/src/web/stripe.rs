//! Stripe.js bindings.
//!
//! Expects `https://js.stripe.com/v3/` to be loaded by the page. Only the
//! card widget sees card data; we get back a payment method id or an error.

use async_trait::async_trait;
use boutique_commerce::checkout::{PaymentGateway, PaymentSdk, PublishableKey};
use boutique_commerce::{PaymentMethodId, TokenizationError};
use boutique_observability::StructuredLogger;
use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::sdk_error;

#[wasm_bindgen]
extern "C" {
    type StripeClient;

    #[wasm_bindgen(catch, js_name = Stripe)]
    fn stripe(publishable_key: &str) -> Result<StripeClient, JsValue>;

    #[wasm_bindgen(method)]
    fn elements(this: &StripeClient) -> StripeElements;

    #[wasm_bindgen(method, js_name = createPaymentMethod)]
    fn create_payment_method(this: &StripeClient, params: &Object) -> js_sys::Promise;

    type StripeElements;

    #[wasm_bindgen(method)]
    fn create(this: &StripeElements, kind: &str) -> CardElement;

    /// The hosted card input.
    #[derive(Clone)]
    pub type CardElement;

    #[wasm_bindgen(method)]
    pub fn mount(this: &CardElement, host: &web_sys::Element);
}

/// Entry point into Stripe.js.
pub struct StripeSdk {
    logger: StructuredLogger,
}

impl StripeSdk {
    pub fn new(logger: &StructuredLogger) -> Self {
        Self {
            logger: logger.for_component("stripe"),
        }
    }
}

impl PaymentSdk for StripeSdk {
    type Gateway = StripeGateway;

    fn initialize(&self, key: &PublishableKey) -> Option<StripeGateway> {
        let loaded = Reflect::has(&js_sys::global(), &JsValue::from_str("Stripe")).unwrap_or(false);
        if !loaded {
            self.logger.debug("Stripe.js is not loaded yet");
            return None;
        }

        match stripe(key.as_str()) {
            Ok(client) => {
                let elements = client.elements();
                Some(StripeGateway { client, elements })
            }
            Err(err) => {
                self.logger.error_with(
                    "Stripe.js rejected the publishable key",
                    &[("error", &describe(&err))],
                );
                None
            }
        }
    }
}

/// An initialized Stripe client.
pub struct StripeGateway {
    client: StripeClient,
    elements: StripeElements,
}

impl StripeGateway {
    /// Create a card widget; mount it before submitting.
    pub fn create_card(&self) -> CardElement {
        self.elements.create("card")
    }
}

#[async_trait(?Send)]
impl PaymentGateway for StripeGateway {
    type CardInput = CardElement;

    async fn create_payment_method(
        &self,
        card: &CardElement,
    ) -> Result<PaymentMethodId, TokenizationError> {
        let params = Object::new();
        set(&params, "type", &JsValue::from_str("card"))?;
        set(&params, "card", card.as_ref())?;

        let result = JsFuture::from(self.client.create_payment_method(&params))
            .await
            .map_err(|err| sdk_error::rejected(&describe(&err)))?;

        let error = get(&result, "error");
        if !error.is_undefined() && !error.is_null() {
            return Err(sdk_error::classify(
                string_field(&error, "type").as_deref(),
                string_field(&error, "code").as_deref(),
                string_field(&error, "message").as_deref(),
            ));
        }

        string_field(&get(&result, "paymentMethod"), "id")
            .map(PaymentMethodId::new)
            .ok_or_else(sdk_error::missing_payment_method)
    }
}

fn set(target: &Object, key: &str, value: &JsValue) -> Result<(), TokenizationError> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|err| TokenizationError::Sdk(describe(&err)))
}

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

fn string_field(target: &JsValue, key: &str) -> Option<String> {
    get(target, key).as_string()
}

fn describe(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| string_field(value, "message"))
        .unwrap_or_else(|| format!("{value:?}"))
}
