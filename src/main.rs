use yew::prelude::*;

use sneaker_boutique::components::footer::Footer;
use sneaker_boutique::components::hero::Hero;
use sneaker_boutique::components::{CartDrawer, Navbar, ProductGrid};
use sneaker_boutique::config::Config;
use sneaker_boutique::hooks::use_cart::use_cart;
use sneaker_boutique::hooks::use_products::use_products;

#[function_component(App)]
fn app() -> Html {
    let products = use_products();
    let cart = use_cart();

    let on_close = {
        let set_drawer_open = cart.set_drawer_open.clone();
        Callback::from(move |()| set_drawer_open.emit(false))
    };

    html! {
        <div class="page">
            <Navbar
                cart={cart.cart.clone()}
                drawer_open={cart.drawer_open}
                on_toggle={cart.toggle_drawer.clone()}
            />

            <Hero />

            <section id="shop" class="shop-section">
                <div class="shop-inner">
                    <div class="shop-header">
                        <div>
                            <h2>{"Featured Sneakers"}</h2>
                            <p class="shop-subtitle">{"Hand-picked styles and colorways"}</p>
                        </div>
                        <div class="api-chip">
                            <span>{"API:"}</span>
                            <span class="api-chip-url">{Config::API_URL}</span>
                        </div>
                    </div>

                    <ProductGrid state={(*products).clone()} on_add={cart.add_to_cart.clone()} />
                </div>
            </section>

            <Footer />

            <CartDrawer
                open={cart.drawer_open}
                cart={cart.cart.clone()}
                on_close={on_close}
            />

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
