use std::rc::Rc;
use yew::prelude::*;

use crate::models::product::Product;
use crate::services::api::{fetch_products, seed_backend};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum ProductsState {
    Loading,
    Loaded(Rc<Vec<Product>>),
    Error(String),
}

impl ProductsState {
    /// Returns true if the catalogue is still loading
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the products if they are loaded
    pub fn data(&self) -> Option<&Rc<Vec<Product>>> {
        match self {
            Self::Loaded(products) => Some(products),
            _ => None,
        }
    }
}

/// Loads the catalogue once per page load: a best-effort seed call first
/// (a fresh backend fills itself with demo stock; any outcome is
/// ignored), then the product fetch that the grid actually renders.
#[hook]
pub fn use_products() -> UseStateHandle<ProductsState> {
    let state = use_state(|| ProductsState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |()| {
            spawn_local(async move {
                seed_backend().await;

                match fetch_products().await {
                    Ok(products) => state.set(ProductsState::Loaded(Rc::new(products))),
                    Err(e) => state.set(ProductsState::Error(e.to_string())),
                }
            });

            || () // Cleanup
        });
    }

    state
}
