//! Test helpers and builder patterns for cart tests

use cart::{CartAggregator, CartConfig};

use super::fixtures::{MenuItem, TestFixtures};

/// One user action against the cart
#[derive(Debug, Clone, Copy)]
pub enum CartOp {
    Add(MenuItem, Option<&'static str>),
    Remove(MenuItem),
}

/// Builder for carts with a prepared line set
pub struct CartBuilder {
    config: CartConfig,
    ops: Vec<CartOp>,
}

impl CartBuilder {
    pub fn new() -> Self {
        Self {
            config: CartConfig::default(),
            ops: Vec::new(),
        }
    }

    pub fn with_config(mut self, config: CartConfig) -> Self {
        self.config = config;
        self
    }

    pub fn add(mut self, item: MenuItem) -> Self {
        self.ops.push(CartOp::Add(item, None));
        self
    }

    pub fn add_with_note(mut self, item: MenuItem, note: &'static str) -> Self {
        self.ops.push(CartOp::Add(item, Some(note)));
        self
    }

    pub fn remove(mut self, item: MenuItem) -> Self {
        self.ops.push(CartOp::Remove(item));
        self
    }

    pub fn build(self) -> CartAggregator {
        let mut cart = CartAggregator::with_config(self.config);
        for op in self.ops {
            TestHelpers::apply(&mut cart, op);
        }
        cart
    }
}

pub struct TestHelpers;

impl TestHelpers {
    pub fn apply(cart: &mut CartAggregator, op: CartOp) {
        match op {
            CartOp::Add(item, note) => cart.add_item_text(item.name, item.vendor, item.price_text, note),
            CartOp::Remove(item) => {
                cart.remove_item(item.name, item.vendor);
            }
        }
    }

    /// Total recomputed independently of the aggregator
    pub fn expected_total(cart: &CartAggregator) -> u128 {
        cart.lines()
            .iter()
            .map(|line| u128::from(line.unit_price) * u128::from(line.quantity))
            .sum()
    }

    /// Deterministic pseudo-random op sequence over the fixture menu
    pub fn op_sequence(seed: u64, len: usize) -> Vec<CartOp> {
        let menu = TestFixtures::menu();
        let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let mut ops = Vec::with_capacity(len);

        for _ in 0..len {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let item = menu[(state >> 33) as usize % menu.len()];
            if (state >> 17) % 3 == 0 {
                ops.push(CartOp::Remove(item));
            } else {
                ops.push(CartOp::Add(item, Some("note")));
            }
        }
        ops
    }
}
