//! Shop Context
//!
//! Store, config and persistence handle provided via Leptos Context API.
//! Every basket mutation goes through `dispatch`, which saves on change.

use leptos::prelude::*;
use web_kv::KeyValueStore;

use crate::basket::{Basket, BasketCommand, PanelEvent, PanelState};
use crate::config::SiteConfig;
use crate::models::Product;
use crate::persistence::BasketRepository;
use crate::store::{ShopState, ShopStateStoreFields, ShopStore};

type Repository = BasketRepository<Box<dyn KeyValueStore>>;

/// App-wide shop handle
#[derive(Clone, Copy)]
pub struct ShopContext {
    pub store: ShopStore,
    config: StoredValue<SiteConfig>,
    repository: StoredValue<Repository>,
}

impl ShopContext {
    /// Restore the basket from `storage` and wrap it in a reactive store
    pub fn new(config: SiteConfig, storage: Box<dyn KeyValueStore>) -> Self {
        let repository = BasketRepository::new(storage, config.storage_key.clone());
        let basket = repository.load_or_default();
        log::info!("[SHOP] Basket ready with {} items", basket.total_count());
        Self {
            store: ShopStore::new(ShopState::new(basket)),
            config: StoredValue::new(config),
            repository: StoredValue::new(repository),
        }
    }

    /// Read from the site config
    pub fn config<R>(&self, f: impl FnOnce(&SiteConfig) -> R) -> R {
        self.config.with_value(f)
    }

    /// Apply a basket command; persists and notifies only on change
    pub fn dispatch(&self, command: BasketCommand) {
        let mut next = Basket::clone(&self.store.basket().read_untracked());
        log::debug!("[SHOP] {:?}", command);
        if !next.apply(command) {
            return;
        }
        self.repository.with_value(|repository| {
            if let Err(e) = repository.save(&next) {
                log::warn!("[SHOP] Could not persist basket under '{}': {}", repository.key(), e);
            }
        });
        *self.store.basket().write() = next;
    }

    /// Entry point for product pages
    pub fn add_to_basket(&self, product: Product) {
        self.dispatch(BasketCommand::Add(product));
    }

    pub fn panel_event(&self, event: PanelEvent) {
        let next = self.store.panel().get_untracked().on(event);
        self.store.panel().set(next);
    }

    pub fn panel(&self) -> PanelState {
        self.store.panel().get()
    }

    /// Reactive sum of quantities
    pub fn total_count(&self) -> u32 {
        self.store.basket().read().total_count()
    }
}

/// Get the shop context
pub fn use_shop() -> ShopContext {
    expect_context::<ShopContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basket::Basket;
    use crate::models::LineItem;
    use leptos::reactive::owner::Owner;
    use web_kv::{MemoryStore, StorageError, StorageResult};

    /// Storage whose writes always fail, as with a full quota
    struct FullStore(MemoryStore);

    impl KeyValueStore for FullStore {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Js("QuotaExceededError".to_string()))
        }

        fn remove(&self, key: &str) -> StorageResult<()> {
            self.0.remove(key)
        }
    }

    fn tee(size: &str) -> Product {
        Product {
            id: 1,
            size: size.to_string(),
            name: "Tee".to_string(),
            price: 100.0,
        }
    }

    fn stored_items(memory: &MemoryStore, key: &str) -> Vec<LineItem> {
        let raw = memory.get(key).unwrap().expect("basket slot should be written");
        serde_json::from_str(&raw).unwrap()
    }

    fn basket(shop: &ShopContext) -> Basket {
        Basket::clone(&shop.store.basket().read_untracked())
    }

    #[test]
    fn test_dispatch_saves_every_change() {
        Owner::new().with(|| {
            let memory = MemoryStore::new();
            let key = SiteConfig::default().storage_key;
            let shop = ShopContext::new(SiteConfig::default(), Box::new(memory.clone()));
            assert!(!memory.contains(&key));

            shop.add_to_basket(tee("M"));
            assert_eq!(stored_items(&memory, &key), basket(&shop).items());

            shop.dispatch(BasketCommand::Increment { id: 1, size: "M".to_string() });
            assert_eq!(stored_items(&memory, &key)[0].quantity, 2);

            shop.dispatch(BasketCommand::Remove { id: 1, size: "M".to_string() });
            assert!(basket(&shop).is_empty());
            assert!(!memory.contains(&key));
        });
    }

    #[test]
    fn test_unchanged_basket_is_not_saved() {
        Owner::new().with(|| {
            let memory = MemoryStore::new();
            let key = SiteConfig::default().storage_key;
            let shop = ShopContext::new(SiteConfig::default(), Box::new(memory.clone()));
            shop.add_to_basket(tee("M"));

            // Marker survives only if nothing is written
            memory.set(&key, "marker").unwrap();
            shop.dispatch(BasketCommand::Remove { id: 9, size: "M".to_string() });
            shop.dispatch(BasketCommand::SetQuantity { id: 1, size: "M".to_string(), quantity: 1 });

            assert_eq!(memory.get(&key).unwrap(), Some("marker".to_string()));
        });
    }

    #[test]
    fn test_failed_save_still_updates_basket() {
        Owner::new().with(|| {
            let shop = ShopContext::new(SiteConfig::default(), Box::new(FullStore(MemoryStore::new())));

            shop.add_to_basket(tee("M"));
            shop.add_to_basket(tee("L"));

            let basket = basket(&shop);
            assert_eq!(basket.len(), 2);
            assert_eq!(basket.total_count(), 2);
        });
    }

    #[test]
    fn test_restores_stored_basket() {
        Owner::new().with(|| {
            let memory = MemoryStore::new();
            let key = SiteConfig::default().storage_key;
            memory
                .set(&key, r#"[{"id":1,"size":"M","name":"Tee","price":100,"quantity":3}]"#)
                .unwrap();

            let shop = ShopContext::new(SiteConfig::default(), Box::new(memory));

            assert_eq!(basket(&shop).total_count(), 3);
            assert_eq!(shop.store.panel().get_untracked(), PanelState::Closed);
        });
    }

    #[test]
    fn test_panel_events() {
        Owner::new().with(|| {
            let shop = ShopContext::new(SiteConfig::default(), Box::new(MemoryStore::new()));

            shop.panel_event(PanelEvent::TriggerPressed);
            assert!(shop.store.panel().get_untracked().is_open());
            shop.panel_event(PanelEvent::CheckoutPressed);
            assert!(!shop.store.panel().get_untracked().is_open());
        });
    }
}
