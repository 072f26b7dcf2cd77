//! Root component: owns the session, the toasts and the checkout flow.

use crate::components::{CatalogView, PaymentPanel, ToastStack};
use crate::config;
use crate::store::{SessionStore, ToastAction, ToastStore, ViewObserver};
use std::rc::Rc;
use store_core::{CheckoutFlow, PaymentMethod, Product, ProductCatalog, SessionAction};
use store_razorpay::{HttpOrderBackend, RazorpayGateway};
use tracing::{debug, error, info};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

type StoreCheckout = CheckoutFlow<HttpOrderBackend, RazorpayGateway>;

fn build_checkout() -> StoreCheckout {
    let razorpay = config::razorpay_config();
    info!(
        api = %razorpay.api_base_url,
        test_mode = razorpay.is_test_mode(),
        "Configuring checkout"
    );
    CheckoutFlow::new(
        razorpay.store_config(),
        HttpOrderBackend::from_config(&razorpay),
        RazorpayGateway::new(),
    )
}

fn load_catalog() -> ProductCatalog {
    ProductCatalog::builtin().unwrap_or_else(|e| {
        error!("Failed to load catalog: {}", e);
        ProductCatalog::default()
    })
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_reducer(SessionStore::default);
    let toasts = use_reducer(ToastStore::default);
    let catalog = use_memo((), |_| load_catalog());
    let checkout = use_memo((), |_| build_checkout());

    let on_select_product = {
        let dispatcher = session.dispatcher();
        Callback::from(move |product: Product| {
            debug!(product_id = product.id, "Product selected");
            dispatcher.dispatch(SessionAction::SelectProduct(product));
        })
    };

    let on_select_method = {
        let dispatcher = session.dispatcher();
        Callback::from(move |method: PaymentMethod| {
            dispatcher.dispatch(SessionAction::SelectMethod(method));
        })
    };

    let on_back = {
        let dispatcher = session.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(SessionAction::BackToCatalog))
    };

    let on_pay = {
        let checkout = Rc::clone(&checkout);
        let snapshot = session.0.clone();
        let observer = ViewObserver::new(session.dispatcher(), toasts.dispatcher());
        Callback::from(move |_: MouseEvent| {
            let checkout = Rc::clone(&checkout);
            let snapshot = snapshot.clone();
            let observer = observer.clone();
            spawn_local(async move {
                let outcome = checkout.run(&snapshot, &observer).await;
                debug!(?outcome, "Checkout settled");
            });
        })
    };

    let on_dismiss_toast = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };

    let content = match &session.0.selected_product {
        None => html! {
            <CatalogView
                store_name={checkout.config().store_name.clone()}
                catalog={Rc::clone(&catalog)}
                on_select={on_select_product}
            />
        },
        Some(product) => html! {
            <PaymentPanel
                product={product.clone()}
                selected_method={session.0.selected_method}
                status={session.0.status}
                {on_select_method}
                {on_pay}
                {on_back}
            />
        },
    };

    html! {
        <div class="min-h-screen bg-gray-50 p-4">
            { content }
            <ToastStack
                toasts={toasts.0.iter().cloned().collect::<Vec<_>>()}
                on_dismiss={on_dismiss_toast}
            />
        </div>
    }
}
