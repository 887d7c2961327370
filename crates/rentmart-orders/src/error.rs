//! Order service error types.

use rentmart_commerce::error::RentalError;
use rentmart_commerce::order::OrderStatus;
use rentmart_store::StoreError;
use thiserror::Error;

/// Result alias for order services.
pub type OrdersResult<T> = Result<T, OrdersError>;

/// Errors from checkout, order lifecycle, and rent collection.
#[derive(Error, Debug)]
pub enum OrdersError {
    /// Checkout was started with no cart lines.
    #[error("cart is empty")]
    EmptyCart,

    /// A rental line references a product with no active plans.
    #[error("product is not available for rent: {product}")]
    RentalUnavailable { product: String },

    /// The product is not approved for sale.
    #[error("product is not listed: {product}")]
    ProductNotListed { product: String },

    /// The requested status change is not an edge of the status machine.
    #[error("cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// Rent can only be collected on active orders.
    #[error("order is not collectable: {order}")]
    NotCollectable { order: String },

    /// Rent for this order and month was already collected.
    #[error("rent already collected for order {order} in {billing_month}")]
    AlreadyCollected { order: String, billing_month: String },

    #[error(transparent)]
    Domain(#[from] RentalError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
