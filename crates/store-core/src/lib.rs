//! # store-core
//!
//! Core types and checkout orchestration for the tech-store storefront.
//!
//! This crate provides:
//! - `Product` and `ProductCatalog` for the static catalog
//! - `PaymentMethod` and `PaymentOption` for method selection
//! - `Session` and `SessionAction`, the view's state machine
//! - `CheckoutFlow`, which drives order creation, the payment widget and verification
//! - `OrderBackend` and `PaymentGateway`, the seams the flow is handed
//! - `ToastQueue` for non-blocking notifications
//! - `StoreError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use store_core::{CheckoutFlow, Session, SessionAction, StoreConfig};
//!
//! let flow = CheckoutFlow::new(StoreConfig::new(Some(key)), backend, gateway);
//!
//! let session = Session::new().apply(SessionAction::SelectProduct(product));
//! let outcome = flow.run(&session, &observer).await;
//! ```

pub mod checkout;
pub mod config;
pub mod error;
pub mod gateway;
pub mod notify;
pub mod order;
pub mod payment;
pub mod product;
pub mod session;

// Re-exports for convenience
pub use checkout::{CheckoutFlow, CheckoutObserver, CheckoutOutcome, SkipReason};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult, GENERIC_FAILURE_MESSAGE, VERIFICATION_FAILED_MESSAGE};
pub use gateway::{OrderBackend, PaymentGateway, Prefill, Theme, WidgetOptions, WidgetOutcome};
pub use notify::{Notification, NotificationKind, Toast, ToastQueue, PAYMENT_SUCCESSFUL_MESSAGE};
pub use order::{CreateOrderRequest, OrderToken, PaymentConfirmation, VerificationResponse};
pub use payment::{PaymentIcon, PaymentMethod, PaymentOption, PAYMENT_OPTIONS};
pub use product::{Currency, Product, ProductCatalog};
pub use session::{CheckoutStatus, Screen, Session, SessionAction};
