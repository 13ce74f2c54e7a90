//! Basket Persistence
//!
//! Mirrors the whole basket into one key of a `KeyValueStore` as a JSON array.
//! An empty basket is stored as an absent key, never as `[]`.

use web_kv::KeyValueStore;

use crate::basket::Basket;
use crate::error::{ShopError, ShopResult};
use crate::models::LineItem;

/// Reads and writes the basket under a fixed key
pub struct BasketRepository<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> BasketRepository<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored basket; an absent key is an empty basket
    pub fn load(&self) -> ShopResult<Basket> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(Basket::new());
        };
        let items: Vec<LineItem> = serde_json::from_str(&raw).map_err(ShopError::Corrupt)?;
        Ok(Basket::from_items(items))
    }

    /// Load, falling back to an empty basket on any error
    ///
    /// A corrupt blob is deleted so the next save starts clean.
    pub fn load_or_default(&self) -> Basket {
        match self.load() {
            Ok(basket) => {
                log::debug!("[BASKET] Restored {} line items from '{}'", basket.len(), self.key);
                basket
            }
            Err(ShopError::Corrupt(e)) => {
                log::warn!("[BASKET] Discarding unreadable basket under '{}': {}", self.key, e);
                if let Err(e) = self.store.remove(&self.key) {
                    log::warn!("[BASKET] Could not clear '{}': {}", self.key, e);
                }
                Basket::new()
            }
            Err(e) => {
                log::warn!("[BASKET] Could not load basket: {}", e);
                Basket::new()
            }
        }
    }

    /// Overwrite the stored basket with the full list
    pub fn save(&self, basket: &Basket) -> ShopResult<()> {
        if basket.is_empty() {
            self.store.remove(&self.key)?;
            return Ok(());
        }
        let raw = serde_json::to_string(basket.items()).map_err(ShopError::Serialize)?;
        self.store.set(&self.key, &raw)?;
        Ok(())
    }
}
