//! Site Configuration
//!
//! Storefront constants with a JSON override document bundled at build time.

use serde::{Deserialize, Serialize};

use crate::error::{ShopError, ShopResult};
use crate::models::Category;

/// Bundled override document
const SITE_JSON: &str = include_str!("../config/site.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    /// localStorage key holding the basket
    pub storage_key: String,
    /// Product listing route, filtered with `?category=`
    pub listing_route: String,
    pub checkout_route: String,
    pub basket_icon: String,
    pub currency: String,
    /// Badge shows `{cap}+` above this count
    pub badge_cap: u32,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
    pub categories: Vec<Category>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "CaliPuff".to_string(),
            storage_key: "basketItems".to_string(),
            listing_route: "/products".to_string(),
            checkout_route: "/final".to_string(),
            basket_icon: "/site/basket.svg".to_string(),
            currency: "₴".to_string(),
            badge_cap: 99,
            log_level: "info".to_string(),
            categories: vec![
                Category::new("Hoodies", "Hoodies"),
                Category::new("TShirts", "T-Shirts"),
                Category::new("Pants", "Pants"),
                Category::new("Accessories", "Accessories"),
            ],
        }
    }
}

impl SiteConfig {
    /// Parse an override document; missing fields keep their defaults
    pub fn from_json(raw: &str) -> ShopResult<Self> {
        serde_json::from_str(raw).map_err(ShopError::Config)
    }

    /// Bundled config, or defaults if it does not parse
    pub fn bundled() -> Self {
        Self::from_json(SITE_JSON).unwrap_or_else(|e| {
            log::warn!("[CONFIG] {}, using defaults", e);
            Self::default()
        })
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
