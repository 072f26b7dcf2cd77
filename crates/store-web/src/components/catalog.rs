//! Product grid shown on the catalog screen.

use crate::components::icons::ShoppingBagIcon;
use std::rc::Rc;
use store_core::{Product, ProductCatalog};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CatalogViewProps {
    pub store_name: AttrValue,
    pub catalog: Rc<ProductCatalog>,
    pub on_select: Callback<Product>,
}

#[function_component(CatalogView)]
pub fn catalog_view(props: &CatalogViewProps) -> Html {
    html! {
        <div class="max-w-6xl mx-auto">
            <div class="flex items-center justify-between mb-8">
                <h1 class="text-3xl font-bold text-gray-900">{ props.store_name.clone() }</h1>
                <ShoppingBagIcon class={classes!("h-8", "w-8", "text-blue-500")} />
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for props.catalog.iter().map(|product| html! {
                    <ProductCard
                        key={product.id}
                        product={product.clone()}
                        on_select={props.on_select.clone()}
                    />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub on_select: Callback<Product>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;
    let onclick = {
        let product = product.clone();
        props.on_select.reform(move |_: MouseEvent| product.clone())
    };

    html! {
        <div class="bg-white rounded-lg shadow-lg overflow-hidden">
            <img
                src={product.image.clone()}
                alt={product.name.clone()}
                class="w-full h-48 object-cover"
            />
            <div class="p-6">
                <h3 class="text-xl font-semibold text-gray-900">{ product.name.clone() }</h3>
                <p class="mt-2 text-gray-500">{ product.description.clone() }</p>
                <div class="mt-4 flex items-center justify-between">
                    <span class="text-2xl font-bold text-gray-900">{ product.display_price() }</span>
                    <button
                        {onclick}
                        class="bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700 transition-colors"
                    >
                        { "Buy Now" }
                    </button>
                </div>
            </div>
        </div>
    }
}
