//! Rental plan tiers.

use crate::ids::{PlanId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A rentable duration tier for a product.
///
/// A product carries a ladder of plans, unique by duration. The shortest
/// plan is the pricing base: its deposit and one-time fees apply to every
/// rental of the product, whatever duration the customer picks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentalPlan {
    pub id: PlanId,
    pub product_id: ProductId,
    /// Committed rental length in months. Always at least 1.
    pub duration_months: u32,
    /// Rent per month at this duration.
    pub monthly_rent: Money,
    /// Refundable deposit collected up front.
    pub security_deposit: Money,
    /// One-time delivery charge, if any.
    pub delivery_fee: Option<Money>,
    /// One-time installation charge, if any.
    pub installation_fee: Option<Money>,
    /// Inactive plans are ignored by pricing.
    pub active: bool,
    pub created_at: i64,
}

impl RentalPlan {
    pub fn new(
        product_id: ProductId,
        duration_months: u32,
        monthly_rent: Money,
        security_deposit: Money,
    ) -> Self {
        Self {
            id: PlanId::generate(),
            product_id,
            duration_months,
            monthly_rent,
            security_deposit,
            delivery_fee: None,
            installation_fee: None,
            active: true,
            created_at: current_timestamp(),
        }
    }

    pub fn with_delivery_fee(mut self, fee: Money) -> Self {
        self.delivery_fee = Some(fee);
        self
    }

    pub fn with_installation_fee(mut self, fee: Money) -> Self {
        self.installation_fee = Some(fee);
        self
    }

    /// Take this plan off pricing without deleting the row.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
