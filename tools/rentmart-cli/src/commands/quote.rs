//! Quote command: price a duration against a plan ladder.

use anyhow::{bail, Result};
use rentmart_commerce::catalog::RentalPlan;
use rentmart_commerce::ids::ProductId;
use rentmart_commerce::money::Money;
use rentmart_commerce::pricing::quote_rental_with_advance;

use super::QuoteArgs;
use crate::context::Context;

/// Run the quote command.
pub async fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let rentals = &ctx.settings.rentals;
    if args.months < rentals.min_duration_months || args.months > rentals.max_duration_months {
        bail!(
            "duration {} months is outside the allowed range {}-{} months",
            args.months,
            rentals.min_duration_months,
            rentals.max_duration_months
        );
    }

    let plans = build_ladder(&args);
    for plan in &plans {
        ctx.output.debug(&format!(
            "plan: {} months at {}, deposit {}",
            plan.duration_months, plan.monthly_rent, plan.security_deposit
        ));
    }
    let quote = quote_rental_with_advance(&plans, args.months, args.advance_percent)?;

    if ctx.output.is_json() {
        ctx.output.json(&quote);
        return Ok(());
    }

    ctx.output
        .header(&format!("Quote for {} months", args.months));
    ctx.output.kv("monthly rent", &quote.monthly_rent.to_string());
    ctx.output.kv(
        "duration discount",
        &format!("{:.1}%", quote.duration_discount_percent),
    );
    ctx.output
        .kv("security deposit", &quote.security_deposit.to_string());
    if !quote.delivery_fee.is_zero() {
        ctx.output.kv("delivery fee", &quote.delivery_fee.to_string());
    }
    if !quote.installation_fee.is_zero() {
        ctx.output
            .kv("installation fee", &quote.installation_fee.to_string());
    }
    ctx.output
        .kv("due at checkout", &quote.one_time_total().to_string());

    if let Some(advance) = quote.advance {
        ctx.output.header("Pay in advance");
        ctx.output.kv(
            "total without discount",
            &advance.total_without_discount.to_string(),
        );
        ctx.output.kv(
            &format!("discount ({:.0}%)", advance.discount_percent),
            &advance.discount_amount.to_string(),
        );
        ctx.output.kv("total payable", &advance.total_payable.to_string());
    }
    Ok(())
}

/// One or two plans from the flags. Equal durations collapse to a
/// single-plan ladder.
fn build_ladder(args: &QuoteArgs) -> Vec<RentalPlan> {
    let product_id = ProductId::generate();
    let mut base = RentalPlan::new(
        product_id.clone(),
        args.base_duration,
        Money::new(args.base_rent),
        Money::new(args.deposit),
    );
    if let Some(fee) = args.delivery_fee {
        base = base.with_delivery_fee(Money::new(fee));
    }
    if let Some(fee) = args.installation_fee {
        base = base.with_installation_fee(Money::new(fee));
    }
    let mut plans = vec![base];
    if args.long_duration != args.base_duration {
        plans.push(RentalPlan::new(
            product_id,
            args.long_duration,
            Money::new(args.long_rent),
            Money::new(args.long_deposit),
        ));
    }
    plans
}
