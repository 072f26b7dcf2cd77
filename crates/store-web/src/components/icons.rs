//! Inline SVG icons (lucide outlines).

use store_core::PaymentIcon;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

#[derive(Properties, PartialEq)]
pub struct PaymentIconProps {
    pub icon: PaymentIcon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PaymentIconView)]
pub fn payment_icon_view(props: &PaymentIconProps) -> Html {
    let paths = match props.icon {
        PaymentIcon::CreditCard => html! {
            <>
                <rect width="20" height="14" x="2" y="5" rx="2" />
                <line x1="2" x2="22" y1="10" y2="10" />
            </>
        },
        PaymentIcon::IndianRupee => html! {
            <>
                <path d="M6 3h12" />
                <path d="M6 8h12" />
                <path d="m6 13 8.5 8" />
                <path d="M6 13h3" />
                <path d="M9 13c6.667 0 6.667-10 0-10" />
            </>
        },
        PaymentIcon::Clock => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <polyline points="12 6 12 12 16 14" />
            </>
        },
    };

    outline(props.class.clone(), paths)
}

#[function_component(ShoppingBagIcon)]
pub fn shopping_bag_icon(props: &IconProps) -> Html {
    outline(
        props.class.clone(),
        html! {
            <>
                <path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z" />
                <path d="M3 6h18" />
                <path d="M16 10a4 4 0 0 1-8 0" />
            </>
        },
    )
}

fn outline(class: Classes, paths: Html) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            {class}
        >
            { paths }
        </svg>
    }
}
