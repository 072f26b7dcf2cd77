//! # Store Configuration
//!
//! Branding and the public widget key used when opening checkout.

use crate::error::{StoreError, StoreResult};
use crate::product::Currency;

/// Storefront configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Merchant name shown in the header and the widget
    pub store_name: String,

    /// Widget theme colour (hex)
    pub theme_color: String,

    /// Store currency
    pub currency: Currency,

    /// Public widget key, if one was supplied
    pub key_id: Option<String>,
}

impl StoreConfig {
    pub fn new(key_id: Option<String>) -> Self {
        Self {
            key_id,
            ..Self::default()
        }
    }

    /// The public key, checked at checkout time
    pub fn key_id(&self) -> StoreResult<&str> {
        match self.key_id.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(StoreError::Configuration(
                "RAZORPAY_KEY_ID not set".to_string(),
            )),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: "Tech Store".to_string(),
            theme_color: "#3B82F6".to_string(),
            currency: Currency::INR,
            key_id: None,
        }
    }
}
