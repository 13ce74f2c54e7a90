//! Site Header Component
//!
//! Brand, category navigation, search slot and basket.

use leptos::prelude::*;

use crate::components::BasketButton;
use crate::context::use_shop;
use crate::navigation::nav_links;

/// Page header; `children` is the search trigger
#[component]
pub fn SiteHeader(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    let shop = use_shop();
    let (brand, links) = shop.config(|c| (c.brand.clone(), nav_links(&c.listing_route, &c.categories)));

    view! {
        <header class="site-header">
            <h1 class="site-brand">{brand}</h1>
            <nav class="site-nav">
                <For
                    each=move || links.clone()
                    key=|link| link.key.clone()
                    children=move |link| view! {
                        <a href=link.href class="site-nav-link">{link.label}</a>
                    }
                />
            </nav>
            <div class="site-header-actions">
                {children.map(|children| children())}
                <BasketButton />
            </div>
        </header>
    }
}
