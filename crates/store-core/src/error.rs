//! # Store Error Types
//!
//! Typed error handling for the storefront checkout.
//! Every fallible operation returns `Result<T, StoreError>`.

use thiserror::Error;

/// Notification text shown when verification fails or cannot be completed.
pub const VERIFICATION_FAILED_MESSAGE: &str = "Payment verification failed";

/// Notification text shown for any failure before verification starts.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong!";

/// Core error type for catalog loading and checkout
#[derive(Debug, Error)]
pub enum StoreError {
    /// Configuration errors (missing key, invalid key format)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The embedded product catalog is malformed
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Network/HTTP error talking to the store backend
    #[error("Network error: {0}")]
    Network(String),

    /// The store backend answered with a non-success status
    #[error("Backend error [{status}]: {message}")]
    Backend { status: u16, message: String },

    /// Response or payload could not be (de)serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The payment widget could not be created or reported an error
    #[error("Payment widget error: {0}")]
    Gateway(String),

    /// The widget confirmed a different order than the one we created
    #[error("Order mismatch: expected {expected}, widget returned {actual}")]
    OrderMismatch { expected: String, actual: String },

    /// The backend checked the signature and rejected it
    #[error("Payment verification rejected for order {order_id}")]
    VerificationRejected { order_id: String },

    /// Verification could not be completed (transport or parse failure)
    #[error("Payment verification failed: {0}")]
    VerificationFailed(String),
}

impl StoreError {
    /// Returns true if the failure happened while confirming a completed payment
    pub fn is_verification_failure(&self) -> bool {
        matches!(
            self,
            StoreError::OrderMismatch { .. }
                | StoreError::VerificationRejected { .. }
                | StoreError::VerificationFailed(_)
        )
    }

    /// Returns true if retrying the same request could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::Network(_) | StoreError::VerificationFailed(_) => true,
            StoreError::Backend { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// The text shown to the shopper for this error
    pub fn user_message(&self) -> &'static str {
        if self.is_verification_failure() {
            VERIFICATION_FAILED_MESSAGE
        } else {
            GENERIC_FAILURE_MESSAGE
        }
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
