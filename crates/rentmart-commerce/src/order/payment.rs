//! Checkout payments and collected monthly rent.

use crate::checkout::PaymentMethod;
use crate::error::{RentalError, RentalResult};
use crate::ids::{MonthlyPaymentId, OrderId, PaymentId};
use crate::money::Money;
use crate::order::order::Order;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of a recorded payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
            PaymentStatus::Refunded => "refunded",
        }
    }
}

/// Money collected at checkout for one order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: PaymentId,
    pub order_id: OrderId,
    /// The order's payable-now total.
    pub amount: Money,
    pub status: PaymentStatus,
    pub method: PaymentMethod,
    /// Gateway label; this platform only talks to a simulated gateway.
    pub gateway: String,
    pub created_at: i64,
}

impl Payment {
    /// A completed checkout payment against the simulated gateway.
    pub fn completed(order_id: OrderId, amount: Money, method: PaymentMethod) -> Self {
        Self {
            id: PaymentId::generate(),
            order_id,
            amount,
            status: PaymentStatus::Completed,
            method,
            gateway: "simulated".to_string(),
            created_at: current_timestamp(),
        }
    }
}

/// The calendar month a rent charge applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BillingMonth {
    pub year: i32,
    /// 1 through 12.
    pub month: u32,
}

impl BillingMonth {
    pub fn new(year: i32, month: u32) -> RentalResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(RentalError::InvalidBillingMonth(format!(
                "{:04}-{:02}",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    /// The current calendar month (UTC).
    pub fn current() -> Self {
        let now = Utc::now();
        Self {
            year: now.year(),
            month: now.month(),
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Parse a `YYYY-MM` string.
    pub fn parse(s: &str) -> RentalResult<Self> {
        let invalid = || RentalError::InvalidBillingMonth(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl fmt::Display for BillingMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One collected month of rent for an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyPayment {
    pub id: MonthlyPaymentId,
    pub order_id: OrderId,
    pub billing_month: BillingMonth,
    pub monthly_rent: Money,
    pub gst: Money,
    pub protection_plan_fee: Money,
    pub total_amount: Money,
    pub status: PaymentStatus,
    pub collected_at: i64,
}

impl MonthlyPayment {
    /// Build a completed charge from the order's financial snapshot.
    pub fn for_order(order: &Order, billing_month: BillingMonth) -> Self {
        Self {
            id: MonthlyPaymentId::generate(),
            order_id: order.id.clone(),
            billing_month,
            monthly_rent: order.financials.monthly_rent,
            gst: order.financials.monthly_gst,
            protection_plan_fee: order.financials.protection_plan_fee,
            total_amount: order.financials.monthly_total,
            status: PaymentStatus::Completed,
            collected_at: current_timestamp(),
        }
    }
}

fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
