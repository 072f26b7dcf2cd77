//! # Payment Methods
//!
//! The payment methods a shopper can pick and their display metadata.

use serde::{Deserialize, Serialize};

/// Payment method offered at checkout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    PayLater,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::Card,
        PaymentMethod::Upi,
        PaymentMethod::PayLater,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::PayLater => "paylater",
        }
    }

    /// Display metadata for this method
    pub fn option(&self) -> &'static PaymentOption {
        match self {
            PaymentMethod::Card => &PAYMENT_OPTIONS[0],
            PaymentMethod::Upi => &PAYMENT_OPTIONS[1],
            PaymentMethod::PayLater => &PAYMENT_OPTIONS[2],
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon shown next to a payment option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentIcon {
    CreditCard,
    IndianRupee,
    Clock,
}

/// Display metadata for a payment method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentOption {
    pub method: PaymentMethod,
    pub title: &'static str,
    pub icon: PaymentIcon,
    pub description: &'static str,
}

/// All payment options, in display order
pub static PAYMENT_OPTIONS: [PaymentOption; 3] = [
    PaymentOption {
        method: PaymentMethod::Card,
        title: "Card Payment",
        icon: PaymentIcon::CreditCard,
        description: "Pay securely with Credit/Debit card",
    },
    PaymentOption {
        method: PaymentMethod::Upi,
        title: "UPI",
        icon: PaymentIcon::IndianRupee,
        description: "Pay using UPI apps like GPay, PhonePe",
    },
    PaymentOption {
        method: PaymentMethod::PayLater,
        title: "Pay Later",
        icon: PaymentIcon::Clock,
        description: "Pay using Razorpay PayLater",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_card() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Card);
    }

    #[test]
    fn test_options_parallel_to_methods() {
        assert_eq!(PAYMENT_OPTIONS.len(), PaymentMethod::ALL.len());
        for method in PaymentMethod::ALL {
            assert_eq!(method.option().method, method);
        }
        assert_eq!(PaymentMethod::Upi.option().title, "UPI");
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::PayLater).unwrap(),
            "\"paylater\""
        );
        let method: PaymentMethod = serde_json::from_str("\"upi\"").unwrap();
        assert_eq!(method, PaymentMethod::Upi);
    }
}
