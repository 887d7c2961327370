//! Demo command: the full marketplace flow against an in-memory store.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use rentmart_commerce::cart::{CartLine, RentalCart};
use rentmart_commerce::checkout::{PaymentMethod, ShippingDetails};
use rentmart_commerce::ids::CustomerId;
use rentmart_commerce::order::BillingMonth;
use rentmart_commerce::pricing::quote_rental_with_advance;
use rentmart_orders::{CheckoutRequest, CheckoutService, OrderLifecycle, RentCollection};
use rentmart_store::{demo_catalog, seed_catalog, MarketplaceStore, MemoryStore};

use super::DemoArgs;
use crate::context::Context;
use crate::output::status_badge;

const STEPS: usize = 6;

/// Run the demo command.
pub async fn run(args: DemoArgs, ctx: &Context) -> Result<()> {
    let out = &ctx.output;
    let store = Arc::new(MemoryStore::new());

    out.header("RentMart demo");

    out.step(1, STEPS, "Seeding the demo catalog");
    let (vendors, products) = demo_catalog()?;
    let report = seed_catalog(store.as_ref(), vendors, products).await?;
    out.success(&format!(
        "{} vendors, {} products, {} plans",
        report.vendors, report.products, report.plans
    ));

    out.step(
        2,
        STEPS,
        &format!("Building a cart: chair rental for {} months", args.months),
    );
    let chair = store
        .product_by_slug("ergocomfort-office-chair")
        .await?
        .ok_or_else(|| anyhow!("demo catalog is missing the chair"))?;
    let quote =
        quote_rental_with_advance(&chair.plans, args.months, chair.advance_discount_percent)?;
    let chair_id = chair.id.clone();
    let mut cart = RentalCart::new();
    cart.add_or_update(CartLine::rent(&chair, quote));
    if args.protection {
        cart.set_protection_plan(&chair_id, true);
        out.info("Protection plan added");
    }
    if args.include_purchase {
        let bed = store
            .product_by_slug("aurora-queen-bed")
            .await?
            .ok_or_else(|| anyhow!("demo catalog is missing the bed"))?;
        out.info(&format!("Buying {} outright", bed.name));
        cart.add_or_update(CartLine::buy(&bed)?);
    }

    let breakdown = cart.breakdown(&ctx.settings.pricing)?;
    out.header("Checkout breakdown");
    out.kv("security deposit", &breakdown.security_deposit.to_string());
    out.kv("delivery fee", &breakdown.delivery_fee.to_string());
    out.kv("installation fee", &breakdown.installation_fee.to_string());
    out.kv("payable now", &breakdown.payable_now.to_string());
    if !breakdown.purchase_total.is_zero() {
        out.kv("purchase total", &breakdown.purchase_total.to_string());
    }
    out.kv("monthly rent", &breakdown.monthly_rent.to_string());
    if !breakdown.protection_plan.is_zero() {
        out.kv("protection plan", &breakdown.protection_plan.to_string());
    }
    out.kv("GST", &breakdown.gst.to_string());
    out.kv("monthly total", &breakdown.monthly_total.to_string());
    out.kv("due now", &breakdown.due_now().to_string());

    out.step(3, STEPS, "Placing the order");
    let service = CheckoutService::new(store.clone(), ctx.settings.clone());
    let request = CheckoutRequest {
        customer_id: CustomerId::generate(),
        shipping: demo_shipping(),
        payment_method: PaymentMethod::Upi,
    };
    let outcome = service.place_order(&cart, request).await?;
    if let (Some(index), Some(error)) = (outcome.failed_at, &outcome.error) {
        out.warn(&format!("cart line {} failed: {}", index, error));
    }
    for placed in &outcome.created {
        out.success(&format!(
            "{} placed, {} collected now",
            placed.order_number, placed.payable_now
        ));
        out.debug(&format!("stored as {}", placed.order_id));
    }
    if outcome.is_complete() {
        cart.clear();
    }
    let first = outcome
        .created
        .first()
        .ok_or_else(|| anyhow!("no order was placed"))?;

    out.step(4, STEPS, "Confirming the order");
    let lifecycle = OrderLifecycle::new(store.clone());
    let order = lifecycle.confirm(&first.order_id).await?;
    out.success(&format!(
        "{} is now {}",
        order.order_number,
        status_badge(order.status.as_str())
    ));

    let month = match &args.month {
        Some(raw) => BillingMonth::parse(raw)?,
        None => BillingMonth::current(),
    };
    out.step(5, STEPS, &format!("Collecting rent for {}", month));
    let collection = RentCollection::new(store.clone(), ctx.settings.clone());
    let receipt = collection.collect_rent(&first.order_id, month).await?;
    out.debug(&format!("recorded monthly payment {}", receipt.payment.id));
    out.success(&format!(
        "Collected {} from the customer",
        receipt.payment.total_amount
    ));
    out.kv("vendor share", &receipt.payout.amount.to_string());

    out.step(6, STEPS, "Completing vendor payouts");
    let payouts = store.payouts_for_order(&first.order_id).await?;
    for payout in &payouts {
        let completed = collection.complete_payout(&payout.id).await?;
        out.list_item(&format!(
            "{} payout of {} is {}",
            completed.payout_type,
            completed.amount,
            status_badge(completed.status.as_str())
        ));
    }
    out.success(&format!("{} payouts completed", payouts.len()));

    out.header("Demo complete");
    out.info(&format!("Orders placed: {}", outcome.created.len()));
    Ok(())
}

fn demo_shipping() -> ShippingDetails {
    ShippingDetails {
        full_name: "Asha Verma".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9876543210".to_string(),
        address: "14 Lake View Road".to_string(),
        city: "Pune".to_string(),
        state: "Maharashtra".to_string(),
        pincode: "411001".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rentmart_commerce::settings::PlatformSettings;

    use crate::output::Output;

    fn verbose_context() -> Context {
        Context {
            settings: PlatformSettings::default(),
            settings_path: None,
            output: Output::new(true, false),
        }
    }

    #[tokio::test]
    async fn test_demo_flow_runs_end_to_end() {
        let args = DemoArgs {
            months: 6,
            protection: true,
            include_purchase: true,
            month: Some("2025-03".to_string()),
        };

        let result = run(args, &verbose_context()).await;
        assert!(result.is_ok(), "demo flow failed: {:?}", result.err());
    }
}
