use std::rc::Rc;
use yew::prelude::*;

use crate::models::cart::Cart;
use crate::services::api;
use wasm_bindgen_futures::spawn_local;

/// Payload a product card emits when the shopper hits "Add to Cart".
#[derive(Clone)]
pub struct AddToCart {
    pub product_id: String,
    /// US size chosen in the card's picker.
    pub size: f64,
    /// Fired once the backend call settles, on success and failure both,
    /// so the card can clear its in-flight flag.
    pub on_settled: Callback<()>,
}

/// Handle returned by `use_cart` hook
#[derive(Clone, PartialEq)]
pub struct CartHandle {
    /// Latest snapshot returned by the backend, if any add succeeded yet.
    pub cart: Option<Rc<Cart>>,
    /// Whether the slide-out drawer is visible.
    pub drawer_open: bool,
    pub add_to_cart: Callback<AddToCart>,
    pub set_drawer_open: Callback<bool>,
    pub toggle_drawer: Callback<()>,
}

/// Custom hook owning the cart snapshot and the drawer flag.
///
/// Each successful add replaces the whole snapshot with the server's
/// response and opens the drawer. Overlapping adds are not deduplicated:
/// snapshots apply in response-arrival order and the last arrival wins.
/// A failed add alerts the shopper and leaves both snapshot and drawer
/// untouched.
#[hook]
pub fn use_cart() -> CartHandle {
    let cart = use_state(|| None::<Rc<Cart>>);
    let drawer_open = use_state(|| false);

    let add_to_cart = {
        let cart = cart.clone();
        let drawer_open = drawer_open.clone();

        Callback::from(move |request: AddToCart| {
            let cart = cart.clone();
            let drawer_open = drawer_open.clone();

            spawn_local(async move {
                match api::add_to_cart(&request.product_id, request.size).await {
                    Ok(snapshot) => {
                        cart.set(Some(Rc::new(snapshot)));
                        drawer_open.set(true);
                    }
                    Err(e) => {
                        gloo::console::error!(format!("Add to cart failed: {e}"));
                        gloo::dialogs::alert("Failed to add to cart");
                    }
                }

                request.on_settled.emit(());
            });
        })
    };

    // Toggle callback: flips the drawer without touching cart data
    let toggle_drawer = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |()| drawer_open.set(!*drawer_open))
    };

    // Set callback for explicit open/close
    let set_drawer_open = {
        let drawer_open = drawer_open.clone();
        Callback::from(move |open| drawer_open.set(open))
    };

    CartHandle {
        cart: (*cart).clone(),
        drawer_open: *drawer_open,
        add_to_cart,
        set_drawer_open,
        toggle_drawer,
    }
}
