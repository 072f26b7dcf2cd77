//! Payment screen: selected product, method picker and pay button.

use crate::components::icons::PaymentIconView;
use store_core::{CheckoutStatus, PaymentMethod, Product, PAYMENT_OPTIONS};
use yew::prelude::*;

/// Label of the pay button for the current checkout status
pub fn pay_button_label(status: CheckoutStatus, product: &Product) -> String {
    match status {
        CheckoutStatus::Idle => format!("Pay {} Now", product.display_price()),
        CheckoutStatus::CreatingOrder | CheckoutStatus::AwaitingWidget => {
            "Processing...".to_string()
        }
        CheckoutStatus::Verifying => "Verifying payment...".to_string(),
    }
}

fn pay_button_classes(busy: bool) -> Classes {
    let state = if busy {
        "bg-gray-400 cursor-not-allowed"
    } else {
        "bg-blue-600 hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-blue-500"
    };
    classes!(
        "w-full",
        "flex",
        "justify-center",
        "py-3",
        "px-4",
        "border",
        "border-transparent",
        "rounded-md",
        "shadow-sm",
        "text-sm",
        "font-medium",
        "text-white",
        state
    )
}

#[derive(Properties, PartialEq)]
pub struct PaymentPanelProps {
    pub product: Product,
    pub selected_method: PaymentMethod,
    pub status: CheckoutStatus,
    pub on_select_method: Callback<PaymentMethod>,
    pub on_pay: Callback<MouseEvent>,
    pub on_back: Callback<MouseEvent>,
}

#[function_component(PaymentPanel)]
pub fn payment_panel(props: &PaymentPanelProps) -> Html {
    let product = &props.product;
    let busy = props.status.is_busy();

    html! {
        <div class="max-w-md mx-auto bg-white rounded-lg shadow-lg p-6 space-y-6">
            <button
                onclick={props.on_back.clone()}
                class="text-blue-600 hover:text-blue-800 mb-4"
            >
                { "← Back to Products" }
            </button>

            <div class="flex items-center space-x-4">
                <img
                    src={product.image.clone()}
                    alt={product.name.clone()}
                    class="w-20 h-20 object-cover rounded-lg"
                />
                <div>
                    <h2 class="text-xl font-semibold text-gray-900">{ product.name.clone() }</h2>
                    <p class="text-gray-500">{ product.description.clone() }</p>
                </div>
            </div>

            <div class="border-t border-b border-gray-100 py-4">
                <div class="flex justify-between items-center">
                    <span class="text-gray-600">{ "Price" }</span>
                    <span class="text-2xl font-bold text-gray-900">{ product.display_price() }</span>
                </div>
            </div>

            <div class="space-y-4">
                <label class="block text-sm font-medium text-gray-700">
                    { "Select Payment Method" }
                </label>
                <div class="grid gap-3">
                    { for PAYMENT_OPTIONS.iter().map(|option| html! {
                        <PaymentOptionButton
                            key={option.method.as_str()}
                            method={option.method}
                            selected={option.method == props.selected_method}
                            on_select={props.on_select_method.clone()}
                        />
                    }) }
                </div>

                <button
                    onclick={props.on_pay.clone()}
                    disabled={busy}
                    class={pay_button_classes(busy)}
                >
                    { pay_button_label(props.status, product) }
                </button>
            </div>

            <p class="mt-4 text-xs text-gray-500 text-center">
                { "Secure payments powered by Razorpay" }
            </p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PaymentOptionButtonProps {
    pub method: PaymentMethod,
    pub selected: bool,
    pub on_select: Callback<PaymentMethod>,
}

#[function_component(PaymentOptionButton)]
pub fn payment_option_button(props: &PaymentOptionButtonProps) -> Html {
    let option = props.method.option();
    let onclick = {
        let method = props.method;
        props.on_select.reform(move |_: MouseEvent| method)
    };

    let (border, icon, title) = if props.selected {
        ("border-blue-500 bg-blue-50", "text-blue-500", "text-blue-700")
    } else {
        (
            "border-gray-200 hover:border-blue-200 hover:bg-gray-50",
            "text-gray-400",
            "text-gray-900",
        )
    };

    html! {
        <button
            {onclick}
            class={classes!("flex", "items-center", "p-4", "border", "rounded-lg", "transition-all", border)}
        >
            <div class={icon}>
                <PaymentIconView icon={option.icon} class={classes!("h-6", "w-6")} />
            </div>
            <div class="ml-4 flex-1">
                <h3 class={classes!("font-medium", title)}>{ option.title }</h3>
                <p class="text-sm text-gray-500">{ option.description }</p>
            </div>
        </button>
    }
}
