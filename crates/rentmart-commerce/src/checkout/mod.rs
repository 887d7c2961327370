//! Checkout module.
//!
//! Shipping details, payment methods, and saved addresses.

mod address;
mod shipping;

pub use address::CustomerAddress;
pub use shipping::{PaymentMethod, ShippingDetails};
