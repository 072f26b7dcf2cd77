//! # Checkout Seams
//!
//! The two capabilities the checkout flow is handed rather than reaching for
//! ambient globals:
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────────┐
//! │   OrderBackend (trait)       │   │   PaymentGateway (trait)     │
//! │  ├── create_order()          │   │  └── open()                  │
//! │  └── verify_payment()        │   │                              │
//! └──────────────▲───────────────┘   └──────────────▲───────────────┘
//!                │                                  │
//!        ┌───────┴────────┐               ┌─────────┴────────┐
//!        │HttpOrderBackend│               │ RazorpayGateway  │
//!        └────────────────┘               └──────────────────┘
//! ```
//!
//! Both traits are `?Send`: browser futures are single-threaded.

use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::order::{OrderToken, PaymentConfirmation};
use crate::product::Product;
use async_trait::async_trait;
use serde::Serialize;

/// Backend endpoints used during checkout
#[async_trait(?Send)]
pub trait OrderBackend {
    /// Create an order for `amount` whole rupees.
    async fn create_order(&self, amount: u64) -> StoreResult<OrderToken>;

    /// Ask the backend to check the widget's signature.
    ///
    /// Returns the backend's verdict; transport and parse failures are errors.
    async fn verify_payment(&self, confirmation: &PaymentConfirmation) -> StoreResult<bool>;
}

/// Hosted payment widget
#[async_trait(?Send)]
pub trait PaymentGateway {
    /// Open the widget and wait until the shopper pays or closes it.
    async fn open(&self, options: WidgetOptions) -> StoreResult<WidgetOutcome>;
}

/// How an opened widget settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetOutcome {
    /// The shopper paid; the payload still needs server verification
    Completed(PaymentConfirmation),
    /// The shopper closed the widget without paying
    Dismissed,
}

/// Options the widget is constructed with.
///
/// The success handler and dismiss hook are attached by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetOptions {
    pub key: String,
    /// Amount in paise, as returned with the order
    pub amount: u64,
    pub currency: String,
    pub name: String,
    pub description: String,
    pub order_id: String,
    pub prefill: Prefill,
    pub theme: Theme,
}

impl WidgetOptions {
    /// Build the options for paying `order` for `product`
    pub fn for_order(config: &StoreConfig, key: &str, product: &Product, order: &OrderToken) -> Self {
        Self {
            key: key.to_string(),
            amount: order.amount,
            currency: config.currency.as_str().to_string(),
            name: config.store_name.clone(),
            description: format!("Payment for {}", product.name),
            order_id: order.id.clone(),
            prefill: Prefill::default(),
            theme: Theme {
                color: config.theme_color.clone(),
            },
        }
    }
}

/// Customer details pre-filled in the widget (left empty)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Prefill {
    pub name: String,
    pub email: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_widget_options_shape() {
        let config = StoreConfig::new(Some("rzp_test_key".into()));
        let product = Product::new(1, "Premium Headphones", 2999);
        let order = OrderToken {
            id: "order_1".into(),
            amount: 299900,
            currency: None,
        };

        let options = WidgetOptions::for_order(&config, "rzp_test_key", &product, &order);

        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({
                "key": "rzp_test_key",
                "amount": 299900,
                "currency": "INR",
                "name": "Tech Store",
                "description": "Payment for Premium Headphones",
                "order_id": "order_1",
                "prefill": { "name": "", "email": "", "contact": "" },
                "theme": { "color": "#3B82F6" }
            })
        );
    }
}
