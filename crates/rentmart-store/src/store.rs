//! The persistence boundary for marketplace state.

use crate::error::StoreError;
use async_trait::async_trait;
use rentmart_commerce::catalog::{Product, Vendor};
use rentmart_commerce::checkout::CustomerAddress;
use rentmart_commerce::ids::{CustomerId, OrderId, PayoutId, ProductId, VendorId};
use rentmart_commerce::order::{
    BillingMonth, MonthlyPayment, Order, Payment, PayoutType, VendorPayout,
};

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations the marketplace services need.
///
/// Implementations enforce the uniqueness rules the money flow depends
/// on: order numbers, one confirmation payout per order, and one rent
/// charge and one rent payout per order and billing month. Lookups for a
/// single row fail with `StoreError::NotFound` rather than inventing
/// data; nothing in the store auto-provisions catalog rows.
#[async_trait]
pub trait MarketplaceStore: Send + Sync {
    async fn insert_vendor(&self, vendor: Vendor) -> StoreResult<()>;
    async fn vendor(&self, id: &VendorId) -> StoreResult<Vendor>;

    async fn insert_product(&self, product: Product) -> StoreResult<()>;
    async fn product(&self, id: &ProductId) -> StoreResult<Product>;
    async fn product_by_slug(&self, slug: &str) -> StoreResult<Option<Product>>;

    /// The customer's default address, if one was saved.
    async fn default_address(&self, customer_id: &CustomerId)
        -> StoreResult<Option<CustomerAddress>>;
    async fn insert_address(&self, address: CustomerAddress) -> StoreResult<()>;
    async fn update_address(&self, address: CustomerAddress) -> StoreResult<()>;

    async fn insert_order(&self, order: Order) -> StoreResult<()>;
    async fn order(&self, id: &OrderId) -> StoreResult<Order>;
    async fn update_order(&self, order: Order) -> StoreResult<()>;

    async fn insert_payment(&self, payment: Payment) -> StoreResult<()>;
    async fn payments_for_order(&self, order_id: &OrderId) -> StoreResult<Vec<Payment>>;

    async fn insert_payout(&self, payout: VendorPayout) -> StoreResult<()>;
    async fn payout(&self, id: &PayoutId) -> StoreResult<VendorPayout>;
    async fn find_payout(
        &self,
        order_id: &OrderId,
        payout_type: PayoutType,
    ) -> StoreResult<Option<VendorPayout>>;
    async fn update_payout(&self, payout: VendorPayout) -> StoreResult<()>;
    async fn payouts_for_order(&self, order_id: &OrderId) -> StoreResult<Vec<VendorPayout>>;

    async fn insert_monthly_payment(&self, payment: MonthlyPayment) -> StoreResult<()>;
    async fn find_monthly_payment(
        &self,
        order_id: &OrderId,
        billing_month: &BillingMonth,
    ) -> StoreResult<Option<MonthlyPayment>>;
}
