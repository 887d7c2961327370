//! Cart module.
//!
//! Session-scoped carts, line snapshots, and checkout breakdowns.

mod breakdown;
mod cart;

pub use breakdown::CheckoutBreakdown;
pub use cart::{CartLine, LineMode, RentalCart};
