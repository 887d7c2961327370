//! Orders and their status machine.

use crate::cart::LineMode;
use crate::ids::{AddressId, CustomerId, OrderId, PlanId, ProductId, VendorId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Returned,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Returned => "returned",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Returned => "Returned",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Cancelled | OrderStatus::Returned)
    }

    /// Cancellation is only allowed before fulfilment starts.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }

    /// Active orders accrue monthly rent.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            OrderStatus::Confirmed
                | OrderStatus::Processing
                | OrderStatus::Shipped
                | OrderStatus::Delivered
        )
    }

    /// Valid edges of the status machine.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (*self, next),
            (Pending, Confirmed)
                | (Confirmed, Processing)
                | (Processing, Shipped)
                | (Shipped, Delivered)
                | (Pending, Cancelled)
                | (Confirmed, Cancelled)
                | (Delivered, Returned)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Money figures captured on an order when it is placed.
///
/// Orders never recompute pricing; these snapshots are what every later
/// charge and payout reads.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderFinancials {
    pub security_deposit: Money,
    pub delivery_fee: Money,
    pub installation_fee: Money,
    /// Deposit and one-time fees, plus the sale price on purchase orders.
    pub payable_now_total: Money,
    /// Sale price; zero on rental orders.
    pub purchase_price: Money,
    pub monthly_rent: Money,
    /// GST on the monthly rent alone.
    pub monthly_gst: Money,
    pub protection_plan_fee: Money,
    pub monthly_total: Money,
    /// Platform's cut of one month of rent.
    pub platform_commission: Money,
    /// Vendor's share of one month of rent.
    pub vendor_payout: Money,
}

/// A placed order for a single product line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: OrderId,
    /// Customer-facing number, unique across all orders.
    pub order_number: String,
    pub customer_id: CustomerId,
    pub vendor_id: VendorId,
    pub product_id: ProductId,
    /// The plan row the rental was booked against; `None` on purchase
    /// orders.
    pub rental_plan_id: Option<PlanId>,
    pub address_id: AddressId,
    pub mode: LineMode,
    /// Rental length in months; 0 on purchase orders.
    pub duration_months: u32,
    pub financials: OrderFinancials,
    pub status: OrderStatus,
    pub created_at: i64,
    pub updated_at: i64,
    pub confirmed_at: Option<i64>,
    pub processing_at: Option<i64>,
    pub shipped_at: Option<i64>,
    pub delivered_at: Option<i64>,
    pub cancelled_at: Option<i64>,
    pub returned_at: Option<i64>,
}

impl Order {
    /// Create a pending order shell; the caller fills in plan, duration,
    /// and financials.
    pub fn new(
        order_number: impl Into<String>,
        customer_id: CustomerId,
        vendor_id: VendorId,
        product_id: ProductId,
        address_id: AddressId,
        mode: LineMode,
    ) -> Self {
        let now = current_timestamp();
        Self {
            id: OrderId::generate(),
            order_number: order_number.into(),
            customer_id,
            vendor_id,
            product_id,
            rental_plan_id: None,
            address_id,
            mode,
            duration_months: 0,
            financials: OrderFinancials::default(),
            status: OrderStatus::default(),
            created_at: now,
            updated_at: now,
            confirmed_at: None,
            processing_at: None,
            shipped_at: None,
            delivered_at: None,
            cancelled_at: None,
            returned_at: None,
        }
    }

    /// Move to `next` and stamp the matching transition time. Callers
    /// check `can_transition_to` first.
    pub fn record_transition(&mut self, next: OrderStatus, at: i64) {
        self.status = next;
        self.updated_at = at;
        match next {
            OrderStatus::Confirmed => self.confirmed_at = Some(at),
            OrderStatus::Processing => self.processing_at = Some(at),
            OrderStatus::Shipped => self.shipped_at = Some(at),
            OrderStatus::Delivered => self.delivered_at = Some(at),
            OrderStatus::Cancelled => self.cancelled_at = Some(at),
            OrderStatus::Returned => self.returned_at = Some(at),
            OrderStatus::Pending => {}
        }
    }
}

fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
