//! Duration-interpolated rental pricing.
//!
//! A product's plan ladder prices a few committed durations. Customers may
//! request any duration, so the rent for durations between and beyond the
//! ladder is interpolated: the two endpoint plans define a per-month
//! discount rate on the shortest plan's rent, capped so long rentals stay
//! above a floor of the base rent.

use crate::catalog::RentalPlan;
use crate::error::{RentalError, RentalResult};
use crate::money::Money;
use crate::pricing::quote::{AdvancePayment, PriceQuote};
use crate::settings::DURATION_DISCOUNT_CAP_PERCENT;

/// Price a rental for `duration_months`, without advance payment.
pub fn quote_rental(plans: &[RentalPlan], duration_months: u32) -> RentalResult<PriceQuote> {
    quote_rental_with_advance(plans, duration_months, 0.0)
}

/// Price a rental, attaching advance-payment figures when the product
/// offers an advance discount and the duration allows one (more than a
/// single month).
pub fn quote_rental_with_advance(
    plans: &[RentalPlan],
    duration_months: u32,
    advance_discount_percent: f64,
) -> RentalResult<PriceQuote> {
    if duration_months == 0 {
        return Err(RentalError::InvalidDuration(duration_months));
    }
    let active = active_sorted(plans);
    let base = *active.first().ok_or(RentalError::NoActivePlans)?;

    let discount_percent = discount_for(&active, duration_months);
    let monthly_rent = if discount_percent > 0.0 {
        Money::rounded(base.monthly_rent.as_f64() * (1.0 - discount_percent / 100.0))
    } else {
        base.monthly_rent
    };

    let mut quote = PriceQuote {
        duration_months,
        monthly_rent,
        security_deposit: base.security_deposit,
        delivery_fee: base.delivery_fee.unwrap_or_default(),
        installation_fee: base.installation_fee.unwrap_or_default(),
        duration_discount_percent: discount_percent,
        advance: None,
    };
    if advance_discount_percent > 0.0 && duration_months > 1 {
        quote.advance = Some(advance_payment(
            monthly_rent,
            duration_months,
            advance_discount_percent,
        )?);
    }
    Ok(quote)
}

/// Total duration discount for `duration_months`, in percent, capped.
pub fn duration_discount_percent(plans: &[RentalPlan], duration_months: u32) -> f64 {
    discount_for(&active_sorted(plans), duration_months)
}

/// The plan whose duration best matches `duration_months`: the longest
/// active plan not exceeding it, else the shortest active plan. Orders
/// reference this plan row; amounts always come from the quote.
pub fn nearest_plan<'a>(plans: &'a [RentalPlan], duration_months: u32) -> Option<&'a RentalPlan> {
    let active = active_sorted(plans);
    active
        .iter()
        .rev()
        .find(|p| p.duration_months <= duration_months)
        .copied()
        .or_else(|| active.first().copied())
}

fn active_sorted(plans: &[RentalPlan]) -> Vec<&RentalPlan> {
    let mut active: Vec<&RentalPlan> = plans.iter().filter(|p| p.active).collect();
    active.sort_by_key(|p| p.duration_months);
    active
}

fn discount_for(active: &[&RentalPlan], duration_months: u32) -> f64 {
    let (Some(base), Some(longest)) = (active.first(), active.last()) else {
        return 0.0;
    };
    if active.len() == 1 || duration_months <= base.duration_months {
        return 0.0;
    }
    // Degenerate ladders cannot define a rate.
    if base.monthly_rent.is_zero() || longest.duration_months <= 1 {
        return 0.0;
    }
    let spread_percent = (base.monthly_rent.as_f64() - longest.monthly_rent.as_f64())
        / base.monthly_rent.as_f64()
        * 100.0;
    let rate_per_month = spread_percent / (longest.duration_months - 1) as f64;
    let total = rate_per_month * (duration_months - 1) as f64;
    total.clamp(0.0, DURATION_DISCOUNT_CAP_PERCENT)
}

fn advance_payment(
    monthly_rent: Money,
    duration_months: u32,
    percent: f64,
) -> RentalResult<AdvancePayment> {
    if !(0.0..=100.0).contains(&percent) {
        return Err(RentalError::InvalidPercent(percent));
    }
    let total = monthly_rent
        .checked_mul(duration_months as i64)
        .ok_or(RentalError::Overflow)?;
    let discount = total.percentage(percent);
    Ok(AdvancePayment {
        total_without_discount: total,
        discount_amount: discount,
        total_payable: total - discount,
        discount_percent: percent,
    })
}
