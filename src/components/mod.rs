//! UI Components
//!
//! Header and basket Leptos components.

mod basket_button;
mod basket_line;
mod site_header;

pub use basket_button::BasketButton;
pub use basket_line::BasketLine;
pub use site_header::SiteHeader;
