//! Basket State
//!
//! Pure reducer over the list of line items plus the open/closed panel
//! state machine. Components send `BasketCommand`s and `PanelEvent`s;
//! nothing in here touches the DOM or storage.

use crate::models::{LineItem, Product};

/// A user action on the basket contents
#[derive(Debug, Clone, PartialEq)]
pub enum BasketCommand {
    Add(Product),
    Remove { id: u32, size: String },
    /// Zero removes the entry
    SetQuantity { id: u32, size: String, quantity: u32 },
    Increment { id: u32, size: String },
    Decrement { id: u32, size: String },
    Clear,
}

/// Ordered basket contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Basket {
    items: Vec<LineItem>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from stored items, folding any `(id, size)` duplicates into the first entry
    pub fn from_items(items: Vec<LineItem>) -> Self {
        let mut basket = Basket::new();
        for item in items {
            match basket.position(item.id, &item.size) {
                Some(index) => {
                    let merged = &mut basket.items[index];
                    merged.quantity = merged.quantity.saturating_add(item.quantity);
                }
                None => basket.items.push(item),
            }
        }
        basket.items.retain(|item| item.quantity > 0);
        basket
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checkout is only offered for a non-empty basket
    pub fn has_checkout(&self) -> bool {
        !self.is_empty()
    }

    pub fn find(&self, id: u32, size: &str) -> Option<&LineItem> {
        self.items.iter().find(|item| item.matches(id, size))
    }

    fn position(&self, id: u32, size: &str) -> Option<usize> {
        self.items.iter().position(|item| item.matches(id, size))
    }

    /// Sum of all quantities, saturating at `u32::MAX`
    pub fn total_count(&self) -> u32 {
        self.items.iter().fold(0u32, |total, item| total.saturating_add(item.quantity))
    }

    /// Sum of all line totals
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Apply a command, returning whether the contents changed
    pub fn apply(&mut self, command: BasketCommand) -> bool {
        match command {
            BasketCommand::Add(product) => {
                self.add(product);
                true
            }
            BasketCommand::Remove { id, size } => self.remove(id, &size),
            BasketCommand::SetQuantity { id, size, quantity } => self.set_quantity(id, &size, quantity),
            BasketCommand::Increment { id, size } => match self.find(id, &size) {
                Some(item) => {
                    let quantity = item.quantity.saturating_add(1);
                    self.set_quantity(id, &size, quantity)
                }
                None => false,
            },
            BasketCommand::Decrement { id, size } => match self.find(id, &size) {
                Some(item) => {
                    let quantity = item.quantity.saturating_sub(1);
                    self.set_quantity(id, &size, quantity)
                }
                None => false,
            },
            BasketCommand::Clear => {
                let changed = !self.items.is_empty();
                self.items.clear();
                changed
            }
        }
    }

    /// Existing `(id, size)` gains one, otherwise a new entry with quantity 1 is appended
    pub fn add(&mut self, product: Product) {
        match self.position(product.id, &product.size) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(1);
            }
            None => self.items.push(LineItem::from_product(product)),
        }
    }

    pub fn remove(&mut self, id: u32, size: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.matches(id, size));
        self.items.len() != before
    }

    pub fn set_quantity(&mut self, id: u32, size: &str, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(id, size);
        }
        match self.items.iter_mut().find(|item| item.matches(id, size)) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }
}

/// Badge text for the basket button; `None` hides the badge
pub fn badge_label(count: u32, cap: u32) -> Option<String> {
    match count {
        0 => None,
        n if n > cap => Some(format!("{}+", cap)),
        n => Some(n.to_string()),
    }
}

/// Whole amounts without decimals, everything else to the cent
pub fn format_price(amount: f64, currency: &str) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}{}", amount, currency)
    } else {
        format!("{:.2}{}", amount, currency)
    }
}

// ========================
// Panel
// ========================

/// Basket side panel visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

/// Things the user can press that affect the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    TriggerPressed,
    BackdropPressed,
    CheckoutPressed,
    ClosePressed,
}

impl PanelState {
    pub fn on(self, event: PanelEvent) -> PanelState {
        match (self, event) {
            (PanelState::Closed, PanelEvent::TriggerPressed) => PanelState::Open,
            (PanelState::Open, _) => PanelState::Closed,
            (PanelState::Closed, _) => PanelState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == PanelState::Open
    }
}
