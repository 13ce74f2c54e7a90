//! Header Navigation
//!
//! Projects configured categories to product listing links.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::Category;

/// Query value escape set: keep unreserved characters readable
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub key: String,
    pub label: String,
    pub href: String,
}

/// `{listing_route}?category={key}` with the key lowercased
pub fn category_href(listing_route: &str, key: &str) -> String {
    let key = key.to_lowercase();
    format!("{}?category={}", listing_route, utf8_percent_encode(&key, QUERY_VALUE))
}

/// One link per category, in configuration order
pub fn nav_links(listing_route: &str, categories: &[Category]) -> Vec<NavLink> {
    categories
        .iter()
        .map(|category| NavLink {
            key: category.key.clone(),
            label: category.label.clone(),
            href: category_href(listing_route, &category.key),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_lowercases_key() {
        assert_eq!(category_href("/products", "Hoodies"), "/products?category=hoodies");
        assert_eq!(category_href("/products", "TShirts"), "/products?category=tshirts");
    }

    #[test]
    fn test_href_escapes_query_value() {
        assert_eq!(category_href("/products", "Gift Cards"), "/products?category=gift%20cards");
        assert_eq!(category_href("/products", "a&b"), "/products?category=a%26b");
        assert_eq!(category_href("/products", "new-in"), "/products?category=new-in");
    }

    #[test]
    fn test_nav_links_keep_order_and_labels() {
        let categories = vec![
            Category::new("Pants", "Pants"),
            Category::new("TShirts", "T-Shirts"),
        ];
        let links = nav_links("/products", &categories);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].label, "Pants");
        assert_eq!(links[1].label, "T-Shirts");
        assert_eq!(links[1].href, "/products?category=tshirts");
    }

    #[test]
    fn test_no_categories() {
        assert!(nav_links("/products", &[]).is_empty());
    }
}
