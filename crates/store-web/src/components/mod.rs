pub mod catalog;
pub mod icons;
pub mod payment;
pub mod toast;

pub use catalog::{CatalogView, ProductCard};
pub use icons::{PaymentIconView, ShoppingBagIcon};
pub use payment::{pay_button_label, PaymentOptionButton, PaymentPanel};
pub use toast::{ToastItem, ToastStack};
