//! Page Bridge
//!
//! Product pages are rendered outside this app. They add to the basket by
//! dispatching a DOM event on `window`:
//!
//! ```js
//! window.dispatchEvent(new CustomEvent("basket:add", {
//!     detail: { id: 1, size: "M", name: "Hoodie", price: 1200 },
//! }));
//! ```

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::ShopContext;
use crate::models::Product;

pub const ADD_EVENT: &str = "basket:add";

/// Listen for add-to-basket events for the lifetime of the page
pub fn bind_add_to_basket(shop: ShopContext) {
    let on_add = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
        let Some(custom) = ev.dyn_ref::<web_sys::CustomEvent>() else {
            log::warn!("[BRIDGE] '{}' without detail ignored", ADD_EVENT);
            return;
        };
        match serde_wasm_bindgen::from_value::<Product>(custom.detail()) {
            Ok(product) => shop.add_to_basket(product),
            Err(e) => log::warn!("[BRIDGE] Bad product in '{}': {}", ADD_EVENT, e),
        }
    });

    if let Some(win) = web_sys::window() {
        if let Err(e) = win.add_event_listener_with_callback(ADD_EVENT, on_add.as_ref().unchecked_ref()) {
            log::warn!("[BRIDGE] Could not listen for '{}': {:?}", ADD_EVENT, e);
        }
    }
    on_add.forget();
}
