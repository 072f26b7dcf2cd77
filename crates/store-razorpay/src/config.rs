//! # Razorpay Configuration
//!
//! The public key id and the store backend URL. Both are public values;
//! the key secret never reaches the browser.

use store_core::{StoreConfig, StoreError, StoreResult};

/// Default store backend
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Razorpay client-side configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RazorpayConfig {
    /// Public key id (rzp_test_... or rzp_live_...)
    pub key_id: Option<String>,

    /// Base URL of the backend serving `/create-order` and `/verify-payment`
    pub api_base_url: String,
}

impl RazorpayConfig {
    pub fn new(key_id: Option<String>) -> Self {
        Self {
            key_id: key_id.filter(|k| !k.trim().is_empty()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Builder: set the backend base URL (trailing slashes are dropped)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Check the key format.
    ///
    /// A missing key is not an error here; checkout reports it when used.
    pub fn validate(&self) -> StoreResult<()> {
        match &self.key_id {
            Some(key) if !key.starts_with("rzp_test_") && !key.starts_with("rzp_live_") => {
                Err(StoreError::Configuration(
                    "RAZORPAY_KEY_ID must start with rzp_test_ or rzp_live_".to_string(),
                ))
            }
            _ => Ok(()),
        }
    }

    /// Check if using a test key
    pub fn is_test_mode(&self) -> bool {
        self.key_id
            .as_deref()
            .is_some_and(|k| k.starts_with("rzp_test_"))
    }

    /// Store configuration carrying this key
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.key_id.clone())
    }
}

impl Default for RazorpayConfig {
    fn default() -> Self {
        Self::new(None)
    }
}
