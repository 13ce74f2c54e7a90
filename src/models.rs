//! Frontend Models
//!
//! Basket line items, products offered for adding, and nav categories.

use serde::{Deserialize, Deserializer, Serialize};

/// One basket entry, unique by `(id, size)`
///
/// Field names are the persisted JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: u32,
    pub size: String,
    #[serde(deserialize_with = "string_or_number")]
    pub name: String,
    pub price: f64,
    #[serde(deserialize_with = "clamped_quantity")]
    pub quantity: u32,
}

impl LineItem {
    /// New entry for a product with quantity 1
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            size: product.size,
            name: product.name,
            price: product.price,
            quantity: 1,
        }
    }

    pub fn matches(&self, id: u32, size: &str) -> bool {
        self.id == id && self.size == size
    }

    /// Render key, stable across quantity changes
    pub fn key(&self) -> String {
        format!("{}-{}", self.id, self.size)
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// A product variant as offered by a product page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub size: String,
    pub name: String,
    pub price: f64,
}

/// Product category shown in the header navigation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    pub label: String,
}

impl Category {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
        }
    }
}

/// Older baskets stored `name` as a JSON number
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Name {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Name::deserialize(deserializer)? {
        Name::Text(text) => text,
        Name::Number(number) => number.to_string(),
    })
}

/// Older baskets could store zero or negative quantities; those load as 0
/// and are dropped when the basket is rebuilt
fn clamped_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let quantity = i64::deserialize(deserializer)?;
    Ok(u32::try_from(quantity.max(0)).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_from_product() {
        let product = Product {
            id: 7,
            size: "M".to_string(),
            name: "Classic Hoodie".to_string(),
            price: 1200.0,
        };
        let item = LineItem::from_product(product);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.key(), "7-M");
        assert!(item.matches(7, "M"));
        assert!(!item.matches(7, "L"));
    }

    #[test]
    fn test_line_total() {
        let item = LineItem {
            id: 1,
            size: "S".to_string(),
            name: "Tee".to_string(),
            price: 250.5,
            quantity: 4,
        };
        assert_eq!(item.line_total(), 1002.0);
    }

    #[test]
    fn test_numeric_name_is_accepted() {
        let raw = r#"{"id":3,"size":"XL","name":42,"price":99.9,"quantity":2}"#;
        let item: LineItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.name, "42");
        assert_eq!(item.quantity, 2);
    }

    #[test]
    fn test_out_of_range_quantities_are_clamped() {
        let parse = |quantity: &str| {
            let raw = format!(r#"{{"id":1,"size":"M","name":"Tee","price":1,"quantity":{}}}"#, quantity);
            serde_json::from_str::<LineItem>(&raw).unwrap().quantity
        };
        assert_eq!(parse("-1"), 0);
        assert_eq!(parse("0"), 0);
        assert_eq!(parse("3"), 3);
        assert_eq!(parse("99999999999"), u32::MAX);
    }

    #[test]
    fn test_persisted_field_names() {
        let item = LineItem {
            id: 1,
            size: "M".to_string(),
            name: "Cap".to_string(),
            price: 100.0,
            quantity: 1,
        };
        let value = serde_json::to_value(&item).unwrap();
        for field in ["id", "size", "name", "price", "quantity"] {
            assert!(value.get(field).is_some(), "missing field {}", field);
        }
    }
}
