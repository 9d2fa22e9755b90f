//! Test fixtures and data for cart tests

/// One gallery item as the rendering layer would hand it over
#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub name: &'static str,
    pub vendor: &'static str,
    pub price_text: &'static str,
    pub price: u64,
}

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    pub const JOES: &'static str = "Joe's";
    pub const ANNS: &'static str = "Ann's";

    pub const BURGER: MenuItem = MenuItem { name: "Burger", vendor: Self::JOES, price_text: "Price: 5,000", price: 5000 };
    pub const FRIES: MenuItem = MenuItem { name: "Fries", vendor: Self::JOES, price_text: "Price: 2,000", price: 2000 };
    pub const PIZZA: MenuItem = MenuItem { name: "Pizza", vendor: Self::ANNS, price_text: "Price: 8,000", price: 8000 };
    pub const BIBIMBAP: MenuItem = MenuItem { name: "Bibimbap", vendor: Self::ANNS, price_text: "Price:\n13,000", price: 13000 };
    /// Same item name as `BURGER`, different vendor
    pub const ANNS_BURGER: MenuItem = MenuItem { name: "Burger", vendor: Self::ANNS, price_text: "7000", price: 7000 };
    pub const WATER: MenuItem = MenuItem { name: "Water", vendor: Self::JOES, price_text: "free", price: 0 };

    /// Whole menu in gallery order
    pub fn menu() -> Vec<MenuItem> {
        vec![Self::BURGER, Self::FRIES, Self::PIZZA, Self::BIBIMBAP, Self::ANNS_BURGER, Self::WATER]
    }

    /// Price texts that must all parse to zero
    pub fn malformed_prices() -> Vec<&'static str> {
        vec!["", "free", "Price: TBD", "market price", ".", ",", "Price: .50"]
    }
}
