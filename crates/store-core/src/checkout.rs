//! # Checkout Flow
//!
//! Orchestrates one checkout attempt:
//!
//! ```text
//! Idle ──▶ CreatingOrder ──▶ AwaitingWidget ──▶ Verifying ──▶ Idle
//!               │                  │                │
//!               └── error ─────────┴── dismissed ───┴── error / rejected ──▶ Idle
//! ```
//!
//! Status changes and notifications are pushed to a [`CheckoutObserver`];
//! the flow never reads view state after it starts.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::gateway::{OrderBackend, PaymentGateway, WidgetOptions, WidgetOutcome};
use crate::notify::{Notification, PAYMENT_SUCCESSFUL_MESSAGE};
use crate::order::PaymentConfirmation;
use crate::product::Product;
use crate::session::{CheckoutStatus, Session, SessionAction};
use std::cell::Cell;
use tracing::{debug, error, info, warn};

/// Receives the flow's state transitions and notifications
pub trait CheckoutObserver {
    fn transition(&self, action: SessionAction);
    fn notify(&self, notification: Notification);
}

/// Why a checkout request did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoProduct,
    InFlight,
}

/// Result of [`CheckoutFlow::run`]
#[derive(Debug)]
pub enum CheckoutOutcome {
    Skipped(SkipReason),
    Paid { order_id: String, payment_id: String },
    Dismissed { order_id: String },
    Failed(StoreError),
}

enum Settled {
    Paid(PaymentConfirmation),
    Dismissed { order_id: String },
}

/// Clears the in-flight flag however the attempt ends
struct InFlightGuard<'a>(&'a Cell<bool>);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

/// Checkout orchestration over an order backend and a payment widget
pub struct CheckoutFlow<B, G> {
    config: StoreConfig,
    backend: B,
    gateway: G,
    in_flight: Cell<bool>,
}

impl<B: OrderBackend, G: PaymentGateway> CheckoutFlow<B, G> {
    pub fn new(config: StoreConfig, backend: B, gateway: G) -> Self {
        Self {
            config,
            backend,
            gateway,
            in_flight: Cell::new(false),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// True while an attempt is between ordering and verification
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Run one checkout for the product selected in `session`.
    ///
    /// Every path that passes the guards ends with exactly one terminal
    /// transition (`CheckoutSucceeded`, `CheckoutFailed` or `Idle`).
    pub async fn run<O: CheckoutObserver + ?Sized>(
        &self,
        session: &Session,
        observer: &O,
    ) -> CheckoutOutcome {
        let Some(product) = session.selected_product.as_ref() else {
            debug!("Checkout requested without a selected product");
            return CheckoutOutcome::Skipped(SkipReason::NoProduct);
        };

        if session.status.is_busy() || self.in_flight.get() {
            debug!("Checkout already in flight, ignoring request");
            return CheckoutOutcome::Skipped(SkipReason::InFlight);
        }
        self.in_flight.set(true);
        let _guard = InFlightGuard(&self.in_flight);

        info!(
            product_id = product.id,
            method = %session.selected_method,
            "Starting checkout"
        );
        observer.transition(SessionAction::StatusChanged(CheckoutStatus::CreatingOrder));

        match self.execute(product, observer).await {
            Ok(Settled::Paid(confirmation)) => {
                info!(
                    order_id = %confirmation.order_id,
                    payment_id = %confirmation.payment_id,
                    "Payment verified"
                );
                observer.notify(Notification::success(PAYMENT_SUCCESSFUL_MESSAGE));
                observer.transition(SessionAction::CheckoutSucceeded {
                    product_id: product.id,
                });
                CheckoutOutcome::Paid {
                    order_id: confirmation.order_id,
                    payment_id: confirmation.payment_id,
                }
            }
            Ok(Settled::Dismissed { order_id }) => {
                info!(%order_id, "Payment widget dismissed");
                observer.transition(SessionAction::StatusChanged(CheckoutStatus::Idle));
                CheckoutOutcome::Dismissed { order_id }
            }
            Err(e) => {
                let retryable = e.is_retryable();
                if e.is_verification_failure() {
                    warn!(retryable, "Checkout failed during verification: {}", e);
                } else {
                    error!(retryable, "Checkout failed: {}", e);
                }
                observer.notify(Notification::error(e.user_message()));
                observer.transition(SessionAction::CheckoutFailed);
                CheckoutOutcome::Failed(e)
            }
        }
    }

    async fn execute<O: CheckoutObserver + ?Sized>(
        &self,
        product: &Product,
        observer: &O,
    ) -> StoreResult<Settled> {
        let key = self.config.key_id()?;

        let order = self.backend.create_order(product.price).await?;
        debug!(order_id = %order.id, amount = order.amount, "Order created");

        let options = WidgetOptions::for_order(&self.config, key, product, &order);
        observer.transition(SessionAction::StatusChanged(CheckoutStatus::AwaitingWidget));

        let confirmation = match self.gateway.open(options).await? {
            WidgetOutcome::Completed(confirmation) => confirmation,
            WidgetOutcome::Dismissed => return Ok(Settled::Dismissed { order_id: order.id }),
        };

        if confirmation.order_id != order.id {
            return Err(StoreError::OrderMismatch {
                expected: order.id,
                actual: confirmation.order_id,
            });
        }

        observer.transition(SessionAction::StatusChanged(CheckoutStatus::Verifying));
        let verified = self
            .backend
            .verify_payment(&confirmation)
            .await
            .map_err(|e| StoreError::VerificationFailed(e.to_string()))?;

        if !verified {
            return Err(StoreError::VerificationRejected {
                order_id: confirmation.order_id,
            });
        }

        Ok(Settled::Paid(confirmation))
    }
}
