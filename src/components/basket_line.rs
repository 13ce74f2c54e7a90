//! Basket Line Component
//!
//! One row of the basket panel with quantity stepper and remove button.

use leptos::prelude::*;

use crate::basket::{format_price, BasketCommand};
use crate::context::use_shop;
use crate::models::LineItem;

#[component]
pub fn BasketLine(item: LineItem) -> impl IntoView {
    let shop = use_shop();
    let unit_price = shop.config(|c| format_price(item.price, &c.currency));
    let id = item.id;
    let decrement_size = item.size.clone();
    let increment_size = item.size.clone();
    let quantity_size = item.size.clone();
    let remove_size = item.size.clone();

    view! {
        <div class="basket-line">
            <div class="basket-line-info">
                <p class="basket-line-name">{item.name.clone()}</p>
                <p class="basket-line-meta">"Size: " {item.size.clone()}</p>
                <p class="basket-line-meta">{format!("{} x {}", item.quantity, unit_price)}</p>
            </div>
            <div class="basket-line-stepper">
                <button
                    class="stepper-btn"
                    aria-label="Decrease quantity"
                    on:click=move |_| shop.dispatch(BasketCommand::Decrement { id, size: decrement_size.clone() })
                >
                    "−"
                </button>
                <input
                    class="stepper-value"
                    type="number"
                    min="0"
                    aria-label="Quantity"
                    prop:value=item.quantity.to_string()
                    on:change=move |ev| {
                        // Non-numeric input leaves the line as it is
                        if let Ok(quantity) = event_target_value(&ev).trim().parse::<u32>() {
                            shop.dispatch(BasketCommand::SetQuantity { id, size: quantity_size.clone(), quantity });
                        }
                    }
                />
                <button
                    class="stepper-btn"
                    aria-label="Increase quantity"
                    on:click=move |_| shop.dispatch(BasketCommand::Increment { id, size: increment_size.clone() })
                >
                    "+"
                </button>
            </div>
            <button
                class="basket-line-remove"
                aria-label="Remove item"
                on:click=move |_| shop.dispatch(BasketCommand::Remove { id, size: remove_size.clone() })
            >
                "×"
            </button>
        </div>
    }
}
