//! CaliPuff Storefront App
//!
//! Root component: restores the basket and provides the shop context.

use leptos::prelude::*;

use crate::bridge;
use crate::components::SiteHeader;
use crate::config::SiteConfig;
use crate::context::ShopContext;

#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    // Restore basket once per page load
    let shop = ShopContext::new(config, web_kv::browser_or_memory());
    provide_context(shop);
    bridge::bind_add_to_basket(shop);

    view! {
        <div class="app-layout">
            <SiteHeader />
            <main class="main-content"></main>
        </div>
    }
}
