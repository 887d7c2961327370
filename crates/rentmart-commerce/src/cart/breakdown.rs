//! Checkout totals computed from cart lines.

use crate::cart::cart::{CartLine, LineMode};
use crate::error::{RentalError, RentalResult};
use crate::money::Money;
use crate::settings::PricingSettings;
use serde::{Deserialize, Serialize};

/// The money summary shown at checkout.
///
/// One-time charges (`payable_now`, plus `purchase_total` for outright
/// purchases) are due immediately; the monthly block bills every month of
/// the rental. The two groups never mix: rent, GST, and protection stay
/// out of `payable_now`, and deposits and fees stay out of the monthly
/// total.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutBreakdown {
    pub security_deposit: Money,
    pub delivery_fee: Money,
    pub installation_fee: Money,
    /// Deposit plus one-time fees, exactly.
    pub payable_now: Money,
    /// Sale-price total across purchase lines.
    pub purchase_total: Money,
    pub monthly_rent: Money,
    pub protection_plan: Money,
    /// GST over monthly rent plus protection.
    pub gst: Money,
    pub monthly_total: Money,
}

impl CheckoutBreakdown {
    /// Everything charged at checkout time.
    pub fn due_now(&self) -> Money {
        self.payable_now + self.purchase_total
    }
}

pub(crate) fn compute(
    lines: &[CartLine],
    pricing: &PricingSettings,
) -> RentalResult<CheckoutBreakdown> {
    let mut b = CheckoutBreakdown::default();
    for line in lines {
        match line.mode {
            LineMode::Rent => {
                b.security_deposit = add(b.security_deposit, line.quote.security_deposit)?;
                b.delivery_fee = add(b.delivery_fee, line.quote.delivery_fee)?;
                b.installation_fee = add(b.installation_fee, line.quote.installation_fee)?;
                b.monthly_rent = add(b.monthly_rent, line.quote.monthly_rent)?;
                if line.protection_plan {
                    b.protection_plan =
                        add(b.protection_plan, pricing.protection_plan_monthly)?;
                }
            }
            LineMode::Buy => {
                if let Some(price) = line.purchase_price {
                    b.purchase_total = add(b.purchase_total, price)?;
                }
            }
        }
    }
    b.payable_now = add(add(b.security_deposit, b.delivery_fee)?, b.installation_fee)?;
    b.gst = add(b.monthly_rent, b.protection_plan)?.fraction(pricing.gst_rate);
    b.monthly_total = add(add(b.monthly_rent, b.gst)?, b.protection_plan)?;
    Ok(b)
}

fn add(a: Money, b: Money) -> RentalResult<Money> {
    a.checked_add(b).ok_or(RentalError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::cart::{CartLine, RentalCart};
    use crate::catalog::{Product, RentalPlan};
    use crate::ids::VendorId;
    use crate::pricing::quote_rental;

    fn pricing() -> PricingSettings {
        PricingSettings::default()
    }

    fn chair_product() -> Product {
        let mut p = Product::new(VendorId::generate(), "chair", "Office Chair");
        p.add_plan(
            RentalPlan::new(p.id.clone(), 3, Money::new(599), Money::new(2000))
                .with_delivery_fee(Money::new(299))
                .with_installation_fee(Money::new(199)),
        )
        .unwrap();
        p.add_plan(RentalPlan::new(p.id.clone(), 12, Money::new(399), Money::new(1000)))
            .unwrap();
        p
    }

    fn chair_line() -> CartLine {
        let product = chair_product();
        CartLine::rent(&product, quote_rental(&product.plans, 6).unwrap())
    }

    #[test]
    fn test_single_rental_line_breakdown() {
        let mut cart = RentalCart::new();
        cart.add_or_update(chair_line());
        let b = cart.breakdown(&pricing()).unwrap();
        assert_eq!(b.security_deposit, Money::new(2000));
        assert_eq!(b.delivery_fee, Money::new(299));
        assert_eq!(b.installation_fee, Money::new(199));
        assert_eq!(b.payable_now, Money::new(2498));
        assert_eq!(b.monthly_rent, Money::new(508));
        assert_eq!(b.protection_plan, Money::zero());
        assert_eq!(b.gst, Money::new(91));
        assert_eq!(b.monthly_total, Money::new(599));
        assert_eq!(b.due_now(), Money::new(2498));
    }

    #[test]
    fn test_protection_plan_raises_monthly_only() {
        let line = chair_line();
        let product_id = line.product_id.clone();
        let mut cart = RentalCart::new();
        cart.add_or_update(line);
        cart.set_protection_plan(&product_id, true);

        let b = cart.breakdown(&pricing()).unwrap();
        assert_eq!(b.payable_now, Money::new(2498));
        assert_eq!(b.protection_plan, Money::new(99));
        assert_eq!(b.gst, Money::new(109));
        assert_eq!(b.monthly_total, Money::new(716));
    }

    #[test]
    fn test_breakdown_is_additive_across_lines() {
        let mut cart = RentalCart::new();
        cart.add_or_update(chair_line());
        cart.add_or_update(chair_line());
        let b = cart.breakdown(&pricing()).unwrap();
        assert_eq!(b.security_deposit, Money::new(4000));
        assert_eq!(b.payable_now, Money::new(4996));
        assert_eq!(b.monthly_rent, Money::new(1016));
        // GST rounds once over the summed base, not per line.
        assert_eq!(b.gst, Money::new(183));
        assert_eq!(b.monthly_total, Money::new(1199));
    }

    #[test]
    fn test_one_time_and_monthly_groups_are_independent() {
        let line = chair_line();
        let product_id = line.product_id.clone();
        let mut cart = RentalCart::new();
        cart.add_or_update(line);
        let before = cart.breakdown(&pricing()).unwrap();

        cart.set_protection_plan(&product_id, true);
        let after = cart.breakdown(&pricing()).unwrap();
        assert_eq!(before.payable_now, after.payable_now);
        assert_eq!(before.security_deposit, after.security_deposit);
        assert_ne!(before.monthly_total, after.monthly_total);
    }

    #[test]
    fn test_purchase_lines_stay_out_of_payable_now() {
        let product = chair_product().with_buy_price(Money::new(8999));
        let mut cart = RentalCart::new();
        cart.add_or_update(chair_line());
        cart.add_or_update(CartLine::buy(&product).unwrap());

        let b = cart.breakdown(&pricing()).unwrap();
        assert_eq!(b.payable_now, Money::new(2498));
        assert_eq!(b.purchase_total, Money::new(8999));
        assert_eq!(b.due_now(), Money::new(11497));
        assert_eq!(b.monthly_rent, Money::new(508));
    }

    #[test]
    fn test_empty_cart_breakdown_is_all_zero() {
        let cart = RentalCart::new();
        let b = cart.breakdown(&pricing()).unwrap();
        assert_eq!(b, CheckoutBreakdown::default());
        assert!(b.due_now().is_zero());
    }

    #[test]
    fn test_breakdown_tracks_cart_mutations() {
        let line = chair_line();
        let product_id = line.product_id.clone();
        let mut cart = RentalCart::new();
        cart.add_or_update(line);
        assert!(!cart.breakdown(&pricing()).unwrap().payable_now.is_zero());

        cart.remove(&product_id);
        assert!(cart.breakdown(&pricing()).unwrap().payable_now.is_zero());
    }
}
