//! Order services for the RentMart marketplace.
//!
//! The services in this crate orchestrate the domain types from
//! `rentmart-commerce` over a [`rentmart_store::MarketplaceStore`]:
//!
//! - [`CheckoutService`] turns a cart into orders and payments,
//! - [`OrderLifecycle`] walks orders through their status machine and
//!   creates confirmation payouts,
//! - [`RentCollection`] collects monthly rent and settles payouts.
//!
//! # Example
//!
//! ```rust,ignore
//! use rentmart_orders::{CheckoutRequest, CheckoutService};
//!
//! let service = CheckoutService::new(store, settings);
//! let outcome = service.place_order(&cart, request).await?;
//! for placed in &outcome.created {
//!     println!("{} due now {}", placed.order_number, placed.payable_now);
//! }
//! ```

mod checkout;
mod collection;
mod error;
mod lifecycle;

pub use checkout::{CheckoutOutcome, CheckoutRequest, CheckoutService, PlacedOrder};
pub use collection::{RentCollection, RentReceipt};
pub use error::{OrdersError, OrdersResult};
pub use lifecycle::OrderLifecycle;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        CheckoutOutcome, CheckoutRequest, CheckoutService, OrderLifecycle, OrdersError,
        OrdersResult, PlacedOrder, RentCollection, RentReceipt,
    };
}
