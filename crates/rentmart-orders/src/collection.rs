//! Monthly rent collection and payout settlement.
//!
//! Collection is operator triggered; nothing here runs on a schedule.
//! Each collected month writes one MonthlyPayment from the order's
//! financial snapshot and one MonthlyRent payout for the vendor's share,
//! with the commission taken at the vendor's effective rate at
//! collection time.

use crate::error::{OrdersError, OrdersResult};
use rentmart_commerce::ids::{OrderId, PayoutId};
use rentmart_commerce::order::{BillingMonth, MonthlyPayment, PayoutStatus, VendorPayout};
use rentmart_commerce::settings::PlatformSettings;
use rentmart_store::MarketplaceStore;
use std::sync::Arc;
use tracing::info;

/// A collected month: the customer charge and the vendor's payout.
#[derive(Debug, Clone)]
pub struct RentReceipt {
    pub payment: MonthlyPayment,
    pub payout: VendorPayout,
}

pub struct RentCollection {
    store: Arc<dyn MarketplaceStore>,
    settings: PlatformSettings,
}

impl RentCollection {
    pub fn new(store: Arc<dyn MarketplaceStore>, settings: PlatformSettings) -> Self {
        Self { store, settings }
    }

    /// Collect one month of rent for an active order. A month can only
    /// be collected once per order; the store's uniqueness checks back
    /// up the lookup here.
    pub async fn collect_rent(
        &self,
        order_id: &OrderId,
        billing_month: BillingMonth,
    ) -> OrdersResult<RentReceipt> {
        let order = self.store.order(order_id).await?;
        if !order.status.is_active() {
            return Err(OrdersError::NotCollectable {
                order: order.order_number,
            });
        }
        if self
            .store
            .find_monthly_payment(order_id, &billing_month)
            .await?
            .is_some()
        {
            return Err(OrdersError::AlreadyCollected {
                order: order.order_number,
                billing_month: billing_month.to_string(),
            });
        }

        let vendor = self.store.vendor(&order.vendor_id).await?;
        let rate = vendor.effective_commission_rate(self.settings.pricing.commission_rate);
        let rent = order.financials.monthly_rent;
        let payout_amount = rent - rent.fraction(rate);

        let payment = MonthlyPayment::for_order(&order, billing_month);
        self.store.insert_monthly_payment(payment.clone()).await?;
        let payout = VendorPayout::monthly_rent(&order, billing_month, payout_amount);
        self.store.insert_payout(payout.clone()).await?;

        info!(
            order = %order.order_number,
            month = %billing_month,
            collected = %payment.total_amount,
            payout = %payout.amount,
            "rent collected"
        );
        Ok(RentReceipt { payment, payout })
    }

    /// Mark a pending payout paid. Completing a completed payout is a
    /// no-op that returns it unchanged.
    pub async fn complete_payout(&self, payout_id: &PayoutId) -> OrdersResult<VendorPayout> {
        let mut payout = self.store.payout(payout_id).await?;
        if payout.status == PayoutStatus::Completed {
            return Ok(payout);
        }
        payout.complete(current_timestamp());
        self.store.update_payout(payout.clone()).await?;
        info!(payout = %payout.id, amount = %payout.amount, "payout completed");
        Ok(payout)
    }
}

fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
