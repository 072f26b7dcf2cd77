//! # store-razorpay
//!
//! Razorpay adapters for the tech-store checkout flow.
//!
//! This crate provides:
//!
//! 1. **HttpOrderBackend** - client for the store backend
//!    - `POST /create-order` with `{ "amount": <rupees> }`
//!    - `POST /verify-payment` with the widget's signed payload
//!
//! 2. **RazorpayGateway** - the hosted Razorpay Checkout overlay (wasm32 only)
//!    - success handler and dismiss hook bridged into one future
//!    - requires `https://checkout.razorpay.com/v1/checkout.js` on the page
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use store_core::CheckoutFlow;
//! use store_razorpay::{HttpOrderBackend, RazorpayConfig, RazorpayGateway};
//!
//! let config = RazorpayConfig::new(Some("rzp_test_...".into()));
//! let flow = CheckoutFlow::new(
//!     config.store_config(),
//!     HttpOrderBackend::from_config(&config),
//!     RazorpayGateway::new(),
//! );
//! ```

pub mod backend;
pub mod config;
#[cfg(target_arch = "wasm32")]
pub mod widget;

// Re-exports
pub use backend::HttpOrderBackend;
pub use config::{RazorpayConfig, DEFAULT_API_BASE_URL};
#[cfg(target_arch = "wasm32")]
pub use widget::RazorpayGateway;
