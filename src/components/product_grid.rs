use yew::prelude::*;

use crate::components::product_card::ProductCard;
use crate::config::Config;
use crate::hooks::use_cart::AddToCart;
use crate::hooks::use_products::ProductsState;

#[derive(Properties, PartialEq)]
pub struct ProductGridProps {
    pub state: ProductsState,
    pub on_add: Callback<AddToCart>,
}

/// Renders the catalogue area for whatever state the fetch is in:
/// pulsing placeholders, an error banner, or one card per product.
/// Cards are keyed by product id so each keeps its own size selection.
#[function_component(ProductGrid)]
pub fn product_grid(props: &ProductGridProps) -> Html {
    match &props.state {
        ProductsState::Loading => html! {
            <div class="product-grid">
                {
                    (0..Config::SKELETON_CARDS).map(|_| html! {
                        <div class="skeleton-card"></div>
                    }).collect::<Html>()
                }
            </div>
        },
        ProductsState::Error(message) => html! {
            <div class="error-banner">{message}</div>
        },
        ProductsState::Loaded(products) => html! {
            <div class="product-grid">
                {
                    products.iter().map(|product| html! {
                        <ProductCard
                            key={product.id.clone()}
                            product={product.clone()}
                            on_add={props.on_add.clone()}
                        />
                    }).collect::<Html>()
                }
            </div>
        },
    }
}
