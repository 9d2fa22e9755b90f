//! Core cart logic with no I/O dependencies

pub mod aggregator;
pub mod display;
pub mod line;
pub mod price;

pub use aggregator::{CartAggregator, CartSnapshot, RemoveOutcome};
pub use display::{CartDisplay, OrderFormFields, format_amount};
pub use line::{CartLine, LineKey};
pub use price::parse_price;
