//! # Order Types
//!
//! Wire types exchanged with the store backend and the payment widget.

use serde::{Deserialize, Serialize};

/// Body of `POST /create-order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in whole rupees
    pub amount: u64,
}

/// Order token returned by `POST /create-order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderToken {
    /// Provider order identifier (e.g., "order_N5x...")
    pub id: String,

    /// Amount the provider expects, in paise
    pub amount: u64,

    /// Currency code, if the backend echoes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Signed confirmation handed to the widget's success handler.
///
/// Field names match the widget payload and the body of `POST /verify-payment`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    #[serde(rename = "razorpay_order_id")]
    pub order_id: String,

    #[serde(rename = "razorpay_payment_id")]
    pub payment_id: String,

    #[serde(rename = "razorpay_signature")]
    pub signature: String,
}

/// Response of `POST /verify-payment`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub verified: bool,
}
