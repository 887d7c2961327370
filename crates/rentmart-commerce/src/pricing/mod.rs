//! Pricing module.
//!
//! Duration-interpolated rental quotes and advance-payment math.

mod engine;
mod quote;

pub use engine::{duration_discount_percent, nearest_plan, quote_rental, quote_rental_with_advance};
pub use quote::{AdvancePayment, PriceQuote};
