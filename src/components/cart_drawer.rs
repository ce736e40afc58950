use gloo::events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::models::cart::Cart;

#[derive(Properties, PartialEq)]
pub struct CartDrawerProps {
    pub open: bool,
    pub cart: Option<Rc<Cart>>,
    pub on_close: Callback<()>,
}

/// Slide-out panel showing the latest cart snapshot. Pure display: the
/// close button, the backdrop and the Escape key all just flip the open
/// flag, the snapshot itself is never touched from here.
#[function_component(CartDrawer)]
pub fn cart_drawer(props: &CartDrawerProps) -> Html {
    // Escape closes the drawer; the listener exists only while open
    {
        use_effect_with(
            (props.open, props.on_close.clone()),
            |(open, on_close)| {
                let listener = open.then(|| {
                    let on_close = on_close.clone();
                    EventListener::new(&web_sys::window().unwrap(), "keydown", move |event| {
                        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                            if key_event.key() == "Escape" {
                                on_close.emit(());
                            }
                        }
                    })
                });

                move || drop(listener)
            },
        );
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    let overlay_class = if props.open {
        "cart-overlay open"
    } else {
        "cart-overlay"
    };

    let subtotal = props.cart.as_ref().map_or(0.0, |cart| cart.subtotal);

    html! {
        <div class={overlay_class}>
            <div class="cart-backdrop" onclick={on_backdrop_click}></div>
            <aside class="cart-panel">
                <div class="cart-header">
                    <h3>{"Your Cart"}</h3>
                    <button class="cart-close" onclick={on_close_click}>{"Close"}</button>
                </div>
                <div class="cart-items">
                    { render_items(props.cart.as_deref()) }
                </div>
                <div class="cart-footer">
                    <div>
                        <div class="cart-subtotal-label">{"Subtotal"}</div>
                        <div class="cart-subtotal">{format!("${subtotal:.2}")}</div>
                    </div>
                    // Checkout is out of scope for the demo; the link is a stub
                    <a href="#" class="checkout-stub">{"Checkout"}</a>
                </div>
            </aside>
        </div>
    }
}

fn render_items(cart: Option<&Cart>) -> Html {
    match cart {
        Some(cart) if !cart.is_empty() => cart
            .items
            .iter()
            .map(|item| {
                html! {
                    <div class="cart-item">
                        <img
                            class="cart-item-image"
                            src={item.image.clone()}
                            alt={item.name.clone()}
                        />
                        <div class="cart-item-info">
                            <div class="cart-item-name">{&item.name}</div>
                            <div class="cart-item-variant">
                                {format!("{} • US {}", item.brand, item.size)}
                            </div>
                            <div class="cart-item-qty">{format!("Qty {}", item.quantity)}</div>
                        </div>
                        <div class="cart-item-total">{format!("${:.2}", item.line_total())}</div>
                    </div>
                }
            })
            .collect::<Html>(),
        _ => html! {
            <p class="cart-empty">{"Your cart is empty. Add some heat!"}</p>
        },
    }
}
