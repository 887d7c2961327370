//! Vendor payout records.

use crate::ids::{OrderId, PayoutId, VendorId};
use crate::money::Money;
use crate::order::order::Order;
use crate::order::payment::BillingMonth;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a payout compensates the vendor for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutType {
    /// One-time payout created when an order is confirmed.
    OrderConfirmation,
    /// Recurring payout for one collected month of rent.
    MonthlyRent,
}

impl PayoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutType::OrderConfirmation => "order_confirmation",
            PayoutType::MonthlyRent => "monthly_rent",
        }
    }
}

impl fmt::Display for PayoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PayoutStatus {
    #[default]
    Pending,
    Completed,
}

impl PayoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutStatus::Pending => "pending",
            PayoutStatus::Completed => "completed",
        }
    }
}

/// Money owed to a vendor for one order event.
///
/// At most one `OrderConfirmation` payout exists per order, and at most
/// one `MonthlyRent` payout per order and billing month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VendorPayout {
    pub id: PayoutId,
    pub vendor_id: VendorId,
    pub order_id: OrderId,
    pub payout_type: PayoutType,
    pub amount: Money,
    pub status: PayoutStatus,
    /// Set on `MonthlyRent` payouts.
    pub billing_month: Option<BillingMonth>,
    pub created_at: i64,
    pub completed_at: Option<i64>,
}

impl VendorPayout {
    /// Pending payout created when an order is confirmed, for the
    /// vendor-payout amount snapshotted on the order.
    pub fn order_confirmation(order: &Order) -> Self {
        Self {
            id: PayoutId::generate(),
            vendor_id: order.vendor_id.clone(),
            order_id: order.id.clone(),
            payout_type: PayoutType::OrderConfirmation,
            amount: order.financials.vendor_payout,
            status: PayoutStatus::Pending,
            billing_month: None,
            created_at: current_timestamp(),
            completed_at: None,
        }
    }

    /// Pending payout for one collected month of rent.
    pub fn monthly_rent(order: &Order, billing_month: BillingMonth, amount: Money) -> Self {
        Self {
            id: PayoutId::generate(),
            vendor_id: order.vendor_id.clone(),
            order_id: order.id.clone(),
            payout_type: PayoutType::MonthlyRent,
            amount,
            status: PayoutStatus::Pending,
            billing_month: Some(billing_month),
            created_at: current_timestamp(),
            completed_at: None,
        }
    }

    /// Mark the payout paid. Completing twice keeps the first stamp.
    pub fn complete(&mut self, at: i64) {
        if self.status != PayoutStatus::Completed {
            self.status = PayoutStatus::Completed;
            self.completed_at = Some(at);
        }
    }
}

fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
