use std::rc::Rc;
use yew::prelude::*;

use crate::models::cart::Cart;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub cart: Option<Rc<Cart>>,
    pub drawer_open: bool,
    pub on_toggle: Callback<()>,
}

/// Sticky header: brand mark, status link and the cart button. The badge
/// counts distinct cart lines, not summed quantities.
#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let line_count = props.cart.as_ref().map_or(0, |cart| cart.line_count());

    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_| on_toggle.emit(()))
    };

    html! {
        <header class="navbar">
            <div class="navbar-inner">
                <div class="navbar-brand">
                    <div class="navbar-logo">{"SB"}</div>
                    <span class="navbar-title">{"Sneaker Boutique"}</span>
                </div>
                <div class="navbar-actions">
                    <a href="/test" class="navbar-status-link">{"Status"}</a>
                    <button
                        class="cart-button"
                        {onclick}
                        aria-expanded={props.drawer_open.to_string()}
                        aria-label="Toggle cart drawer"
                    >
                        <svg
                            class="cart-icon"
                            viewBox="0 0 24 24"
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <circle cx="9" cy="21" r="1" />
                            <circle cx="20" cy="21" r="1" />
                            <path d="M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6" />
                        </svg>
                        <span>{"Cart"}</span>
                        if line_count > 0 {
                            <span class="cart-badge">{line_count}</span>
                        }
                    </button>
                </div>
            </div>
        </header>
    }
}
