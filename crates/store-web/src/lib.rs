//! # store-web
//!
//! Browser storefront for tech-store, built with Yew and compiled to WASM.
//!
//! The page lists the catalog, lets the shopper pick a payment method and
//! hands checkout to Razorpay. State lives in `store-core`; this crate only
//! renders it and wires the Razorpay adapters in.
//!
//! ## Building
//!
//! ```bash
//! cp .env.example .env   # RAZORPAY_KEY_ID, STORE_API_URL
//! cd crates/store-web
//! wasm-pack build --target web
//! ```
//!
//! `index.html` loads `checkout.js` and the generated `pkg/store_web.js`.

pub mod components;
pub mod config;
pub mod store;

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
pub use app::App;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Initialize logging and mount the storefront (called automatically)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    tracing_wasm::set_as_global_default();
    tracing::info!("Starting storefront v{}", env!("CARGO_PKG_VERSION"));

    yew::Renderer::<App>::new().render();
}
