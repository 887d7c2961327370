//! Store error types.

use thiserror::Error;

/// Errors from the persistence layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A row lookup that must succeed found nothing.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// An insert reused an existing id.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// Order numbers are unique across all orders.
    #[error("order number already exists: {0}")]
    DuplicateOrderNumber(String),

    /// At most one confirmation payout per order, and one rent payout per
    /// order and billing month.
    #[error("payout already recorded for order {order_id} ({payout_type})")]
    DuplicatePayout {
        order_id: String,
        payout_type: &'static str,
    },

    /// At most one rent charge per order and billing month.
    #[error("rent already recorded for order {order_id} in {billing_month}")]
    DuplicateMonthlyPayment {
        order_id: String,
        billing_month: String,
    },

    /// The backing store failed.
    #[error("storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
