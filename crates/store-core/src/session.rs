//! # Session State
//!
//! The view's selection state as a reducer. `show_payment` and `loading` are
//! derived, so a payment screen without a product cannot be represented.

use crate::payment::PaymentMethod;
use crate::product::Product;

/// Where the checkout currently is
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CheckoutStatus {
    #[default]
    Idle,
    /// Waiting for `POST /create-order`
    CreatingOrder,
    /// The widget is open
    AwaitingWidget,
    /// Waiting for `POST /verify-payment`
    Verifying,
}

impl CheckoutStatus {
    /// Any status other than `Idle` blocks a new checkout
    pub fn is_busy(&self) -> bool {
        !matches!(self, CheckoutStatus::Idle)
    }
}

/// Which screen is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Catalog,
    PaymentSelection,
}

/// State transitions of the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    SelectProduct(Product),
    SelectMethod(PaymentMethod),
    BackToCatalog,
    StatusChanged(CheckoutStatus),
    /// Verified payment for the given product id. Resets to a fresh catalog
    /// unless the shopper has since moved on to another product.
    CheckoutSucceeded { product_id: u32 },
    /// Failed payment: stay on the payment screen
    CheckoutFailed,
}

/// In-memory selection state owned by the view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub selected_method: PaymentMethod,
    pub selected_product: Option<Product>,
    pub status: CheckoutStatus,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        if self.show_payment() {
            Screen::PaymentSelection
        } else {
            Screen::Catalog
        }
    }

    pub fn show_payment(&self) -> bool {
        self.selected_product.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_busy()
    }

    /// A product is selected and no checkout is pending
    pub fn can_checkout(&self) -> bool {
        self.selected_product.is_some() && !self.status.is_busy()
    }

    /// Apply an action, returning the next state
    pub fn apply(&self, action: SessionAction) -> Session {
        match action {
            SessionAction::SelectProduct(product) => Session {
                selected_product: Some(product),
                ..self.clone()
            },
            SessionAction::SelectMethod(method) => Session {
                selected_method: method,
                ..self.clone()
            },
            // The status is kept: a pending checkout still settles and
            // must keep the trigger disabled until it does.
            SessionAction::BackToCatalog => Session {
                status: self.status,
                ..Session::default()
            },
            SessionAction::StatusChanged(status) => Session {
                status,
                ..self.clone()
            },
            SessionAction::CheckoutSucceeded { product_id } => {
                match &self.selected_product {
                    Some(product) if product.id != product_id => Session {
                        status: CheckoutStatus::Idle,
                        ..self.clone()
                    },
                    _ => Session::default(),
                }
            }
            SessionAction::CheckoutFailed => Session {
                status: CheckoutStatus::Idle,
                ..self.clone()
            },
        }
    }
}
