//! Shop State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use reactive_stores::Store;

use crate::basket::{Basket, PanelState};

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Basket contents, mirrored to storage
    pub basket: Basket,
    /// Basket side panel
    pub panel: PanelState,
}

impl ShopState {
    /// Panel always starts closed
    pub fn new(basket: Basket) -> Self {
        Self {
            basket,
            panel: PanelState::Closed,
        }
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;
