//! # Razorpay Checkout Widget
//!
//! [`PaymentGateway`] over the `Razorpay` constructor that `checkout.js`
//! installs on `window`. The widget reports back through callbacks; they are
//! bridged into a single future with a oneshot channel so that whichever of
//! `handler` and `modal.ondismiss` fires first settles the checkout.

use async_trait::async_trait;
use futures::channel::oneshot;
use js_sys::{Object, Reflect};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use store_core::{
    PaymentConfirmation, PaymentGateway, StoreError, StoreResult, WidgetOptions, WidgetOutcome,
};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    /// `window.Razorpay`
    #[wasm_bindgen(js_name = Razorpay)]
    type RazorpayCheckout;

    #[wasm_bindgen(constructor, js_class = "Razorpay", catch)]
    fn new(options: &JsValue) -> Result<RazorpayCheckout, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn open(this: &RazorpayCheckout) -> Result<(), JsValue>;

    #[wasm_bindgen(method)]
    fn on(this: &RazorpayCheckout, event: &str, callback: &JsValue);
}

type Settle = Rc<RefCell<Option<oneshot::Sender<StoreResult<WidgetOutcome>>>>>;

/// Closures handed to the widget. They live until the checkout settles and
/// are freed when this is dropped.
struct WidgetCallbacks {
    _on_success: Closure<dyn FnMut(JsValue)>,
    _on_dismiss: Closure<dyn FnMut()>,
    _on_failed: Option<Closure<dyn FnMut(JsValue)>>,
}

/// Opens Razorpay Checkout in an overlay
#[derive(Debug, Clone, Copy, Default)]
pub struct RazorpayGateway;

impl RazorpayGateway {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl PaymentGateway for RazorpayGateway {
    async fn open(&self, options: WidgetOptions) -> StoreResult<WidgetOutcome> {
        let (tx, rx) = oneshot::channel();
        let settle: Settle = Rc::new(RefCell::new(Some(tx)));

        let (js_options, mut callbacks) = build_options(&options, &settle)?;

        let checkout = RazorpayCheckout::new(&js_options)
            .map_err(|e| StoreError::Gateway(js_error_message(&e)))?;

        // The widget stays open after a failed attempt so the shopper can retry.
        let on_failed = Closure::<dyn FnMut(JsValue)>::new(|response: JsValue| {
            warn!("Payment attempt failed: {}", failure_reason(&response));
        });
        checkout.on("payment.failed", on_failed.as_ref());
        callbacks._on_failed = Some(on_failed);

        debug!(order_id = %options.order_id, "Opening Razorpay checkout");
        checkout
            .open()
            .map_err(|e| StoreError::Gateway(js_error_message(&e)))?;

        let outcome = rx
            .await
            .unwrap_or_else(|_| Err(StoreError::Gateway("widget closed without a result".to_string())));
        drop(callbacks);
        outcome
    }
}

/// Serialize the options and attach the success and dismiss callbacks
fn build_options(
    options: &WidgetOptions,
    settle: &Settle,
) -> StoreResult<(JsValue, WidgetCallbacks)> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    let js_options = options
        .serialize(&serializer)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;

    let on_success = {
        let settle = settle.clone();
        Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
            let outcome = parse_confirmation(response).map(WidgetOutcome::Completed);
            send(&settle, outcome);
        })
    };

    let on_dismiss = {
        let settle = settle.clone();
        Closure::<dyn FnMut()>::new(move || send(&settle, Ok(WidgetOutcome::Dismissed)))
    };

    let modal = Object::new();
    set(&modal, "ondismiss", on_dismiss.as_ref())?;
    set(&js_options, "handler", on_success.as_ref())?;
    set(&js_options, "modal", &modal)?;

    let callbacks = WidgetCallbacks {
        _on_success: on_success,
        _on_dismiss: on_dismiss,
        _on_failed: None,
    };
    Ok((js_options, callbacks))
}

/// Read the `razorpay_*` fields the widget passes to `handler`
fn parse_confirmation(response: JsValue) -> StoreResult<PaymentConfirmation> {
    serde_wasm_bindgen::from_value(response)
        .map_err(|e| StoreError::Gateway(format!("Unexpected widget response: {}", e)))
}

fn failure_reason(response: &JsValue) -> String {
    Reflect::get(response, &JsValue::from_str("error"))
        .and_then(|error| Reflect::get(&error, &JsValue::from_str("description")))
        .ok()
        .and_then(|d| d.as_string())
        .unwrap_or_default()
}

/// Settle the checkout; later callbacks find the sender gone and do nothing
fn send(settle: &Settle, outcome: StoreResult<WidgetOutcome>) {
    if let Some(tx) = settle.borrow_mut().take() {
        let _ = tx.send(outcome);
    }
}

fn set(target: &JsValue, key: &str, value: &JsValue) -> StoreResult<()> {
    Reflect::set(target, &JsValue::from_str(key), value)
        .map(|_| ())
        .map_err(|e| StoreError::Gateway(js_error_message(&e)))
}

fn js_error_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use js_sys::{Function, JSON};
    use store_core::{Product, StoreConfig};
    use wasm_bindgen_test::*;

    fn options() -> WidgetOptions {
        let order = store_core::OrderToken {
            id: "order_1".into(),
            amount: 299900,
            currency: Some("INR".into()),
        };
        WidgetOptions::for_order(
            &StoreConfig::default(),
            "rzp_test_key",
            &Product::new(1, "Premium Headphones", 2999),
            &order,
        )
    }

    fn settle() -> (Settle, oneshot::Receiver<StoreResult<WidgetOutcome>>) {
        let (tx, rx) = oneshot::channel();
        (Rc::new(RefCell::new(Some(tx))), rx)
    }

    fn get(target: &JsValue, key: &str) -> JsValue {
        Reflect::get(target, &JsValue::from_str(key)).unwrap()
    }

    fn success_payload() -> JsValue {
        JSON::parse(
            r#"{"razorpay_order_id":"order_1","razorpay_payment_id":"pay_1","razorpay_signature":"sig_1"}"#,
        )
        .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_options_carry_fields_and_callbacks() {
        let (settle, _rx) = settle();
        let (js_options, _callbacks) = build_options(&options(), &settle).unwrap();

        assert_eq!(get(&js_options, "key").as_string().as_deref(), Some("rzp_test_key"));
        assert_eq!(get(&js_options, "amount").as_f64(), Some(299900.0));
        assert_eq!(get(&js_options, "order_id").as_string().as_deref(), Some("order_1"));
        assert_eq!(
            get(&js_options, "description").as_string().as_deref(),
            Some("Payment for Premium Headphones")
        );
        assert_eq!(
            get(&get(&js_options, "theme"), "color").as_string().as_deref(),
            Some("#3B82F6")
        );
        assert!(get(&js_options, "handler").is_function());
        assert!(get(&get(&js_options, "modal"), "ondismiss").is_function());
    }

    #[wasm_bindgen_test]
    fn test_parse_confirmation() {
        let confirmation = parse_confirmation(success_payload()).unwrap();
        assert_eq!(
            confirmation,
            PaymentConfirmation {
                order_id: "order_1".into(),
                payment_id: "pay_1".into(),
                signature: "sig_1".into(),
            }
        );
    }

    #[wasm_bindgen_test]
    fn test_malformed_payload_is_gateway_error() {
        let payload = JSON::parse(r#"{"razorpay_payment_id":"pay_1"}"#).unwrap();
        assert!(matches!(
            parse_confirmation(payload),
            Err(StoreError::Gateway(_))
        ));
        assert!(matches!(
            parse_confirmation(JsValue::UNDEFINED),
            Err(StoreError::Gateway(_))
        ));
    }

    #[wasm_bindgen_test]
    async fn test_handler_settles_and_dismiss_is_ignored() {
        let (settle, rx) = settle();
        let (js_options, _callbacks) = build_options(&options(), &settle).unwrap();

        let handler: Function = get(&js_options, "handler").unchecked_into();
        let dismiss: Function = get(&get(&js_options, "modal"), "ondismiss").unchecked_into();

        handler.call1(&JsValue::NULL, &success_payload()).unwrap();
        dismiss.call0(&JsValue::NULL).unwrap();

        let outcome = rx.await.unwrap().unwrap();
        assert!(matches!(outcome, WidgetOutcome::Completed(ref c) if c.payment_id == "pay_1"));
        assert!(settle.borrow().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_first_callback_wins() {
        let (settle, rx) = settle();

        send(&settle, Ok(WidgetOutcome::Dismissed));
        send(
            &settle,
            Err(StoreError::Gateway("late handler".to_string())),
        );

        assert!(matches!(rx.await.unwrap(), Ok(WidgetOutcome::Dismissed)));
    }
}
