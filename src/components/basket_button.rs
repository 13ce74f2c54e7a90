//! Basket Button Component
//!
//! Header basket icon with a count badge. Pressing it toggles a side panel
//! listing the basket contents; backdrop, close button and checkout link
//! all close the panel again.

use leptos::prelude::*;

use crate::basket::{badge_label, format_price, BasketCommand, PanelEvent};
use crate::components::BasketLine;
use crate::context::use_shop;
use crate::store::ShopStateStoreFields;

/// Basket icon, badge and toggleable panel
#[component]
pub fn BasketButton() -> impl IntoView {
    let shop = use_shop();
    let (icon, cap) = shop.config(|c| (c.basket_icon.clone(), c.badge_cap));

    let is_open = move || shop.panel().is_open();
    let badge = move || {
        badge_label(shop.total_count(), cap).map(|label| view! { <span class="basket-badge">{label}</span> })
    };

    view! {
        <div class="basket">
            <button
                class="basket-trigger"
                aria-label="Basket"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| shop.panel_event(PanelEvent::TriggerPressed)
            >
                <img src=icon height="32" width="32" alt="shopping basket" />
                {badge}
            </button>

            <Show when=is_open>
                <div class="basket-backdrop" on:click=move |_| shop.panel_event(PanelEvent::BackdropPressed)></div>
                <aside class="basket-panel">
                    <div class="basket-panel-header">
                        <span class="basket-title">"Your Basket"</span>
                        <button
                            class="basket-close"
                            aria-label="Close basket"
                            on:click=move |_| shop.panel_event(PanelEvent::ClosePressed)
                        >
                            "×"
                        </button>
                    </div>
                    <Show
                        when=move || shop.store.basket().read().has_checkout()
                        fallback=|| view! { <p class="basket-empty">"Your basket is empty"</p> }
                    >
                        <BasketLines />
                    </Show>
                </aside>
            </Show>
        </div>
    }
}

/// Line list, subtotal and checkout link for a non-empty basket
#[component]
fn BasketLines() -> impl IntoView {
    let shop = use_shop();
    let (currency, checkout_route) = shop.config(|c| (c.currency.clone(), c.checkout_route.clone()));
    let subtotal = move || format_price(shop.store.basket().read().subtotal(), &currency);

    view! {
        <div class="basket-lines">
            // Quantity is part of the key so changed rows re-render
            <For
                each=move || shop.store.basket().read().items().to_vec()
                key=|item| (item.key(), item.quantity)
                children=move |item| view! { <BasketLine item=item /> }
            />
            <div class="basket-summary">
                <span class="basket-subtotal">"Subtotal: " {subtotal}</span>
                <button class="basket-clear" on:click=move |_| shop.dispatch(BasketCommand::Clear)>
                    "Clear basket"
                </button>
            </div>
            <a
                href=checkout_route
                class="basket-checkout"
                on:click=move |_| shop.panel_event(PanelEvent::CheckoutPressed)
            >
                "Checkout"
            </a>
        </div>
    }
}
