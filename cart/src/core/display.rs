//! Display strings derived from the cart lines
//!
//! Pure functions over a line slice; nothing here touches a store.

use num_format::{Locale, ToFormattedString};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::line::CartLine;

/// Separator between labels and vendor names in every rendered list
pub const LIST_SEPARATOR: &str = ", ";

/// Cart summary as shown in the gallery's order panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartDisplay {
    /// Comma-joined item labels in first-add order
    pub items: String,
    /// Comma-joined distinct vendor names in first-seen order
    pub vendors: String,
    /// Total grouped for the configured locale
    pub total: String,
}

/// Values for the order form's hidden inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFormFields {
    /// One summary row per line, newline separated
    pub cart_items: String,
    pub total: String,
    pub from: String,
}

/// Format an integer amount with the locale's digit grouping
pub fn format_amount(amount: u128, locale: &Locale) -> String {
    amount.to_formatted_string(locale)
}

/// Join line labels, `"Name *qty"` for quantities above one
pub fn item_labels(lines: &[CartLine]) -> String {
    lines
        .iter()
        .map(CartLine::label)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Join distinct vendor names, keeping the order they were first seen
pub fn unique_vendors(lines: &[CartLine]) -> String {
    let mut seen = HashSet::new();
    lines
        .iter()
        .filter(|line| seen.insert(line.vendor_name.as_str()))
        .map(|line| line.vendor_name.as_str())
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Every note of every line, in line order then note order
pub fn flatten_notes(lines: &[CartLine], delimiter: &str) -> String {
    lines
        .iter()
        .flat_map(|line| line.notes.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// One order-form summary row for a line
pub fn summary_row(line: &CartLine) -> String {
    format!(
        "{} (x{}) - Restaurant: {} - Price: ${}.00",
        line.item_name,
        line.quantity,
        line.vendor_name,
        line.line_total()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::line::LineKey;

    fn line(item: &str, vendor: &str, price: u64, quantity: u32) -> CartLine {
        let mut line = CartLine::new(LineKey::new(item, vendor), price);
        line.quantity = quantity;
        line
    }

    #[test]
    fn test_format_amount_grouping() {
        assert_eq!(format_amount(0, &Locale::en), "0");
        assert_eq!(format_amount(999, &Locale::en), "999");
        assert_eq!(format_amount(1000, &Locale::en), "1,000");
        assert_eq!(format_amount(13000, &Locale::en), "13,000");
        assert_eq!(format_amount(1_234_567, &Locale::en), "1,234,567");
        assert_eq!(format_amount(100_000, &Locale::de), "100.000");
    }

    #[test]
    fn test_format_amount_indian_grouping() {
        assert_eq!(format_amount(100_000, &Locale::en_IN), "1,00,000");
        assert_eq!(format_amount(12_345_678, &Locale::en_IN), "1,23,45,678");
        assert_eq!(format_amount(999, &Locale::en_IN), "999");
    }

    #[test]
    fn test_item_labels() {
        let lines = vec![line("Burger", "Joe's", 5000, 2), line("Pizza", "Ann's", 8000, 1)];
        assert_eq!(item_labels(&lines), "Burger *2, Pizza");
        assert_eq!(item_labels(&[]), "");
    }

    #[test]
    fn test_unique_vendors_keeps_first_seen_order() {
        let lines = vec![
            line("Burger", "Joe's", 5000, 1),
            line("Pizza", "Ann's", 8000, 1),
            line("Fries", "Joe's", 2000, 1),
        ];
        assert_eq!(unique_vendors(&lines), "Joe's, Ann's");
    }

    #[test]
    fn test_flatten_notes() {
        let mut burger = line("Burger", "Joe's", 5000, 2);
        burger.notes = vec!["no onions".to_string(), "extra cheese".to_string()];
        let mut pizza = line("Pizza", "Ann's", 8000, 1);
        pizza.notes = vec!["well done".to_string()];
        let plain = line("Fries", "Joe's", 2000, 1);

        let lines = vec![burger, plain, pizza];
        assert_eq!(flatten_notes(&lines, " | "), "no onions | extra cheese | well done");
    }

    #[test]
    fn test_summary_row() {
        let row = summary_row(&line("Burger", "Joe's", 5000, 2));
        assert_eq!(row, "Burger (x2) - Restaurant: Joe's - Price: $10000.00");
    }
}
