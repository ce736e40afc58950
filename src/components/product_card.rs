use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::star_rating::StarRating;
use crate::hooks::use_cart::AddToCart;
use crate::models::product::Product;

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub product: Product,
    pub on_add: Callback<AddToCart>,
}

/// One catalogue card. Size selection and the in-flight flag live here;
/// the add call itself is the root's, reached through `on_add`. The flag
/// clears when the request settles, so the button never sticks on
/// "Adding..." even when the backend rejects the add.
#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let size = use_state(|| props.product.default_size());
    let adding = use_state(|| false);

    let on_size_change = {
        let size = size.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(picked) = target.value().parse::<f64>() {
                size.set(picked);
            }
        })
    };

    let on_add_click = {
        let adding = adding.clone();
        let size = size.clone();
        let product_id = props.product.id.clone();
        let on_add = props.on_add.clone();

        Callback::from(move |_| {
            adding.set(true);

            // Reset fires on both outcome paths of the add call
            let reset = {
                let adding = adding.clone();
                Callback::from(move |()| adding.set(false))
            };

            on_add.emit(AddToCart {
                product_id: product_id.clone(),
                size: *size,
                on_settled: reset,
            });
        })
    };

    let product = &props.product;

    html! {
        <div class="product-card">
            <div class="product-media">
                <img src={product.image.clone()} alt={product.name.clone()} />
                <div class="product-media-shade"></div>
                <div class="product-brand-chip">{&product.brand}</div>
            </div>
            <div class="product-body">
                <div class="product-head">
                    <div>
                        <h3 class="product-name">{&product.name}</h3>
                        <StarRating rating={product.rating_or_default()} />
                    </div>
                    <div class="product-pricing">
                        <div class="product-price">{format!("${:.2}", product.price)}</div>
                        <div class="product-colorway">{&product.colorway}</div>
                    </div>
                </div>
                <p class="product-description">{&product.description}</p>
                <div class="product-actions">
                    <select
                        class="size-select"
                        onchange={on_size_change}
                        aria-label="Select US size"
                        title="Select US size"
                    >
                        {
                            product.size_options().into_iter().map(|s| {
                                let value = s.to_string();
                                let selected = s == *size;
                                html! {
                                    <option value={value.clone()} {selected}>{format!("US {value}")}</option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                    <button class="add-button" onclick={on_add_click} disabled={*adding}>
                        { if *adding { "Adding..." } else { "Add to Cart" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
