//! Product listings.

use crate::catalog::plan::RentalPlan;
use crate::error::{RentalError, RentalResult};
use crate::ids::{ProductId, VendorId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Approval state of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Pending => "pending",
            ProductStatus::Approved => "approved",
            ProductStatus::Rejected => "rejected",
        }
    }

    /// Only approved products are listed and sellable.
    pub fn is_listed(&self) -> bool {
        matches!(self, ProductStatus::Approved)
    }
}

/// How a product can currently be offered to customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// At least one active rental plan.
    Rentable,
    /// No active plans, but an outright purchase price exists.
    BuyOnly,
    Unavailable,
}

/// A listing owned by a vendor, with its rental plan ladder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub vendor_id: VendorId,
    /// Stable URL identity.
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ProductStatus,
    /// Outright purchase price, when the product can be bought.
    pub buy_price: Option<Money>,
    /// Discount offered for paying the whole rental up front.
    /// Zero disables advance payment.
    pub advance_discount_percent: f64,
    /// Plan ladder, kept sorted ascending by duration.
    pub plans: Vec<RentalPlan>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Product {
    /// Create a pending listing with no plans.
    pub fn new(vendor_id: VendorId, slug: impl Into<String>, name: impl Into<String>) -> Self {
        let now = current_timestamp();
        Self {
            id: ProductId::generate(),
            vendor_id,
            slug: slug.into(),
            name: name.into(),
            description: None,
            status: ProductStatus::default(),
            buy_price: None,
            advance_discount_percent: 0.0,
            plans: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_buy_price(mut self, price: Money) -> Self {
        self.buy_price = Some(price);
        self
    }

    /// Enable advance payment at the given discount percentage.
    pub fn with_advance_discount(mut self, percent: f64) -> RentalResult<Self> {
        if !(0.0..=100.0).contains(&percent) {
            return Err(RentalError::InvalidPercent(percent));
        }
        self.advance_discount_percent = percent;
        Ok(self)
    }

    /// Add a plan to the ladder. Durations must be positive and unique
    /// within the product; the ladder stays sorted ascending.
    pub fn add_plan(&mut self, plan: RentalPlan) -> RentalResult<()> {
        if plan.duration_months == 0 {
            return Err(RentalError::InvalidDuration(0));
        }
        if self
            .plans
            .iter()
            .any(|p| p.duration_months == plan.duration_months)
        {
            return Err(RentalError::DuplicatePlanDuration(plan.duration_months));
        }
        self.plans.push(plan);
        self.plans.sort_by_key(|p| p.duration_months);
        self.updated_at = current_timestamp();
        Ok(())
    }

    /// Active plans, sorted ascending by duration.
    pub fn active_plans(&self) -> Vec<&RentalPlan> {
        self.plans.iter().filter(|p| p.active).collect()
    }

    pub fn availability(&self) -> Availability {
        if self.plans.iter().any(|p| p.active) {
            Availability::Rentable
        } else if self.buy_price.is_some() {
            Availability::BuyOnly
        } else {
            Availability::Unavailable
        }
    }
}

fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new(VendorId::generate(), "ergocomfort-chair", "ErgoComfort Chair")
    }

    #[test]
    fn test_new_product_is_pending_and_unavailable() {
        let p = product();
        assert_eq!(p.status, ProductStatus::Pending);
        assert!(!p.status.is_listed());
        assert_eq!(p.availability(), Availability::Unavailable);
    }

    #[test]
    fn test_add_plan_sorts_by_duration() {
        let mut p = product();
        p.add_plan(RentalPlan::new(p.id.clone(), 12, Money::new(399), Money::new(1000)))
            .unwrap();
        p.add_plan(RentalPlan::new(p.id.clone(), 3, Money::new(599), Money::new(2000)))
            .unwrap();
        let durations: Vec<u32> = p.plans.iter().map(|pl| pl.duration_months).collect();
        assert_eq!(durations, vec![3, 12]);
        assert_eq!(p.availability(), Availability::Rentable);
    }

    #[test]
    fn test_add_plan_rejects_duplicates_and_zero_duration() {
        let mut p = product();
        p.add_plan(RentalPlan::new(p.id.clone(), 3, Money::new(599), Money::new(2000)))
            .unwrap();
        let dup = RentalPlan::new(p.id.clone(), 3, Money::new(499), Money::new(1500));
        assert_eq!(
            p.add_plan(dup),
            Err(RentalError::DuplicatePlanDuration(3))
        );
        let zero = RentalPlan::new(p.id.clone(), 0, Money::new(499), Money::new(1500));
        assert_eq!(p.add_plan(zero), Err(RentalError::InvalidDuration(0)));
    }

    #[test]
    fn test_buy_only_when_all_plans_inactive() {
        let mut p = product().with_buy_price(Money::new(15999));
        assert_eq!(p.availability(), Availability::BuyOnly);
        p.add_plan(RentalPlan::new(p.id.clone(), 3, Money::new(599), Money::new(2000)))
            .unwrap();
        assert_eq!(p.availability(), Availability::Rentable);
        p.plans[0].deactivate();
        assert_eq!(p.availability(), Availability::BuyOnly);
    }

    #[test]
    fn test_advance_discount_validation() {
        assert!(product().with_advance_discount(10.0).is_ok());
        assert_eq!(
            product().with_advance_discount(120.0).unwrap_err(),
            RentalError::InvalidPercent(120.0)
        );
        assert!(product().with_advance_discount(-1.0).is_err());
    }

    #[test]
    fn test_active_plans_filters_inactive() {
        let mut p = product();
        p.add_plan(RentalPlan::new(p.id.clone(), 3, Money::new(599), Money::new(2000)))
            .unwrap();
        p.add_plan(RentalPlan::new(p.id.clone(), 12, Money::new(399), Money::new(1000)))
            .unwrap();
        p.plans[0].deactivate();
        let active = p.active_plans();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].duration_months, 12);
    }
}
