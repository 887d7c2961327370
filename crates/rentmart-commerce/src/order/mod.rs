//! Order module.
//!
//! Orders, their status machine, checkout payments, monthly rent
//! charges, and vendor payouts.

mod order;
mod payment;
mod payout;

pub use order::{Order, OrderFinancials, OrderStatus};
pub use payment::{BillingMonth, MonthlyPayment, Payment, PaymentStatus};
pub use payout::{PayoutStatus, PayoutType, VendorPayout};
