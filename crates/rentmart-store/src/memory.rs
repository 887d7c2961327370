//! In-memory store for demos and tests.

use crate::error::StoreError;
use crate::store::{MarketplaceStore, StoreResult};
use async_trait::async_trait;
use rentmart_commerce::catalog::{Product, Vendor};
use rentmart_commerce::checkout::CustomerAddress;
use rentmart_commerce::ids::{
    AddressId, CustomerId, MonthlyPaymentId, OrderId, PaymentId, PayoutId, ProductId, VendorId,
};
use rentmart_commerce::order::{
    BillingMonth, MonthlyPayment, Order, Payment, PayoutType, VendorPayout,
};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Tables {
    vendors: HashMap<VendorId, Vendor>,
    products: HashMap<ProductId, Product>,
    addresses: HashMap<AddressId, CustomerAddress>,
    orders: HashMap<OrderId, Order>,
    payments: HashMap<PaymentId, Payment>,
    payouts: HashMap<PayoutId, VendorPayout>,
    monthly_payments: HashMap<MonthlyPaymentId, MonthlyPayment>,
}

/// `MarketplaceStore` backed by process memory.
///
/// Rows are cloned on the way in and out, and the uniqueness rules a
/// database would enforce with constraints are checked under the write
/// lock.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MarketplaceStore for MemoryStore {
    async fn insert_vendor(&self, vendor: Vendor) -> StoreResult<()> {
        let mut t = self.tables.write().await;
        if t.vendors.contains_key(&vendor.id) {
            return Err(StoreError::DuplicateId(vendor.id.to_string()));
        }
        t.vendors.insert(vendor.id.clone(), vendor);
        Ok(())
    }

    async fn vendor(&self, id: &VendorId) -> StoreResult<Vendor> {
        self.tables
            .read()
            .await
            .vendors
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("vendor", id.as_str()))
    }

    async fn insert_product(&self, product: Product) -> StoreResult<()> {
        let mut t = self.tables.write().await;
        if t.products.contains_key(&product.id) {
            return Err(StoreError::DuplicateId(product.id.to_string()));
        }
        t.products.insert(product.id.clone(), product);
        Ok(())
    }

    async fn product(&self, id: &ProductId) -> StoreResult<Product> {
        self.tables
            .read()
            .await
            .products
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("product", id.as_str()))
    }

    async fn product_by_slug(&self, slug: &str) -> StoreResult<Option<Product>> {
        Ok(self
            .tables
            .read()
            .await
            .products
            .values()
            .find(|p| p.slug == slug)
            .cloned())
    }

    async fn default_address(
        &self,
        customer_id: &CustomerId,
    ) -> StoreResult<Option<CustomerAddress>> {
        Ok(self
            .tables
            .read()
            .await
            .addresses
            .values()
            .find(|a| &a.customer_id == customer_id && a.is_default)
            .cloned())
    }

    async fn insert_address(&self, address: CustomerAddress) -> StoreResult<()> {
        let mut t = self.tables.write().await;
        if t.addresses.contains_key(&address.id) {
            return Err(StoreError::DuplicateId(address.id.to_string()));
        }
        t.addresses.insert(address.id.clone(), address);
        Ok(())
    }

    async fn update_address(&self, address: CustomerAddress) -> StoreResult<()> {
        let mut t = self.tables.write().await;
        if !t.addresses.contains_key(&address.id) {
            return Err(StoreError::not_found("address", address.id.as_str()));
        }
        t.addresses.insert(address.id.clone(), address);
        Ok(())
    }

    async fn insert_order(&self, order: Order) -> StoreResult<()> {
        let mut t = self.tables.write().await;
        if t.orders.contains_key(&order.id) {
            return Err(StoreError::DuplicateId(order.id.to_string()));
        }
        if t.orders
            .values()
            .any(|o| o.order_number == order.order_number)
        {
            return Err(StoreError::DuplicateOrderNumber(order.order_number));
        }
        t.orders.insert(order.id.clone(), order);
        Ok(())
    }

    async fn order(&self, id: &OrderId) -> StoreResult<Order> {
        self.tables
            .read()
            .await
            .orders
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("order", id.as_str()))
    }

    async fn update_order(&self, order: Order) -> StoreResult<()> {
        let mut t = self.tables.write().await;
        if !t.orders.contains_key(&order.id) {
            return Err(StoreError::not_found("order", order.id.as_str()));
        }
        t.orders.insert(order.id.clone(), order);
        Ok(())
    }

    async fn insert_payment(&self, payment: Payment) -> StoreResult<()> {
        let mut t = self.tables.write().await;
        if t.payments.contains_key(&payment.id) {
            return Err(StoreError::DuplicateId(payment.id.to_string()));
        }
        t.payments.insert(payment.id.clone(), payment);
        Ok(())
    }

    async fn payments_for_order(&self, order_id: &OrderId) -> StoreResult<Vec<Payment>> {
        let mut payments: Vec<Payment> = self
            .tables
            .read()
            .await
            .payments
            .values()
            .filter(|p| &p.order_id == order_id)
            .cloned()
            .collect();
        payments.sort_by_key(|p| p.created_at);
        Ok(payments)
    }

    async fn insert_payout(&self, payout: VendorPayout) -> StoreResult<()> {
        let mut t = self.tables.write().await;
        if t.payouts.contains_key(&payout.id) {
            return Err(StoreError::DuplicateId(payout.id.to_string()));
        }
        let duplicate = t.payouts.values().any(|p| {
            p.order_id == payout.order_id
                && p.payout_type == payout.payout_type
                && match payout.payout_type {
                    PayoutType::OrderConfirmation => true,
                    PayoutType::MonthlyRent => p.billing_month == payout.billing_month,
                }
        });
        if duplicate {
            return Err(StoreError::DuplicatePayout {
                order_id: payout.order_id.to_string(),
                payout_type: payout.payout_type.as_str(),
            });
        }
        t.payouts.insert(payout.id.clone(), payout);
        Ok(())
    }

    async fn payout(&self, id: &PayoutId) -> StoreResult<VendorPayout> {
        self.tables
            .read()
            .await
            .payouts
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("payout", id.as_str()))
    }

    async fn find_payout(
        &self,
        order_id: &OrderId,
        payout_type: PayoutType,
    ) -> StoreResult<Option<VendorPayout>> {
        Ok(self
            .tables
            .read()
            .await
            .payouts
            .values()
            .find(|p| &p.order_id == order_id && p.payout_type == payout_type)
            .cloned())
    }

    async fn update_payout(&self, payout: VendorPayout) -> StoreResult<()> {
        let mut t = self.tables.write().await;
        if !t.payouts.contains_key(&payout.id) {
            return Err(StoreError::not_found("payout", payout.id.as_str()));
        }
        t.payouts.insert(payout.id.clone(), payout);
        Ok(())
    }

    async fn payouts_for_order(&self, order_id: &OrderId) -> StoreResult<Vec<VendorPayout>> {
        let mut payouts: Vec<VendorPayout> = self
            .tables
            .read()
            .await
            .payouts
            .values()
            .filter(|p| &p.order_id == order_id)
            .cloned()
            .collect();
        payouts.sort_by_key(|p| p.created_at);
        Ok(payouts)
    }

    async fn insert_monthly_payment(&self, payment: MonthlyPayment) -> StoreResult<()> {
        let mut t = self.tables.write().await;
        if t.monthly_payments.contains_key(&payment.id) {
            return Err(StoreError::DuplicateId(payment.id.to_string()));
        }
        if t.monthly_payments
            .values()
            .any(|m| m.order_id == payment.order_id && m.billing_month == payment.billing_month)
        {
            return Err(StoreError::DuplicateMonthlyPayment {
                order_id: payment.order_id.to_string(),
                billing_month: payment.billing_month.to_string(),
            });
        }
        t.monthly_payments.insert(payment.id.clone(), payment);
        Ok(())
    }

    async fn find_monthly_payment(
        &self,
        order_id: &OrderId,
        billing_month: &BillingMonth,
    ) -> StoreResult<Option<MonthlyPayment>> {
        Ok(self
            .tables
            .read()
            .await
            .monthly_payments
            .values()
            .find(|m| &m.order_id == order_id && &m.billing_month == billing_month)
            .cloned())
    }
}
