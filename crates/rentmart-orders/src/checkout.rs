//! Checkout: turning a cart into orders and payments.
//!
//! Checkout runs in two phases. Validation and the address upsert are
//! fail-closed: any problem aborts with an error and nothing is
//! persisted. Line placement is best-effort: lines are processed in cart
//! order, the first failure stops the loop, and orders placed before it
//! stand. There is no rollback; the outcome reports exactly how far
//! checkout got.

use crate::error::{OrdersError, OrdersResult};
use rand::Rng;
use rentmart_commerce::cart::{CartLine, LineMode, RentalCart};
use rentmart_commerce::catalog::Vendor;
use rentmart_commerce::checkout::{CustomerAddress, PaymentMethod, ShippingDetails};
use rentmart_commerce::error::RentalError;
use rentmart_commerce::ids::{CustomerId, OrderId, ProductId};
use rentmart_commerce::money::Money;
use rentmart_commerce::order::{Order, OrderFinancials, Payment};
use rentmart_commerce::pricing;
use rentmart_commerce::settings::{PlatformSettings, PricingSettings};
use rentmart_store::MarketplaceStore;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Who is checking out, where to deliver, and how they pay.
#[derive(Debug, Clone)]
pub struct CheckoutRequest {
    pub customer_id: CustomerId,
    pub shipping: ShippingDetails,
    pub payment_method: PaymentMethod,
}

/// One successfully placed order line.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub order_number: String,
    pub product_id: ProductId,
    pub payable_now: Money,
    pub monthly_total: Money,
}

/// What checkout achieved: the orders that were placed, and where it
/// stopped if a line failed.
#[derive(Debug, Default)]
pub struct CheckoutOutcome {
    pub created: Vec<PlacedOrder>,
    /// Index of the cart line that failed, if any.
    pub failed_at: Option<usize>,
    pub error: Option<OrdersError>,
}

impl CheckoutOutcome {
    /// Every line was placed.
    pub fn is_complete(&self) -> bool {
        self.failed_at.is_none()
    }

    /// Some lines were placed before a later one failed.
    pub fn is_partial(&self) -> bool {
        self.failed_at.is_some() && !self.created.is_empty()
    }

    pub fn order_numbers(&self) -> Vec<String> {
        self.created.iter().map(|p| p.order_number.clone()).collect()
    }
}

/// Places orders from a cart against the store.
pub struct CheckoutService {
    store: Arc<dyn MarketplaceStore>,
    settings: PlatformSettings,
}

impl CheckoutService {
    pub fn new(store: Arc<dyn MarketplaceStore>, settings: PlatformSettings) -> Self {
        Self { store, settings }
    }

    /// Validate the request, upsert the delivery address, then place one
    /// order and one completed payment per cart line.
    pub async fn place_order(
        &self,
        cart: &RentalCart,
        request: CheckoutRequest,
    ) -> OrdersResult<CheckoutOutcome> {
        if cart.is_empty() {
            return Err(OrdersError::EmptyCart);
        }
        request.shipping.validate()?;
        let address = self
            .upsert_default_address(&request.customer_id, &request.shipping)
            .await?;

        let mut outcome = CheckoutOutcome::default();
        for (index, line) in cart.lines().iter().enumerate() {
            match self.place_line(&request, &address, line).await {
                Ok(placed) => {
                    info!(
                        order = %placed.order_number,
                        product = %placed.product_id,
                        payable_now = %placed.payable_now,
                        "order placed"
                    );
                    outcome.created.push(placed);
                }
                Err(error) => {
                    warn!(index, product = %line.product_id, %error, "checkout line failed");
                    outcome.failed_at = Some(index);
                    outcome.error = Some(error);
                    break;
                }
            }
        }
        Ok(outcome)
    }

    /// Refresh the customer's default address from the shipping details,
    /// creating it on first checkout.
    async fn upsert_default_address(
        &self,
        customer_id: &CustomerId,
        shipping: &ShippingDetails,
    ) -> OrdersResult<CustomerAddress> {
        match self.store.default_address(customer_id).await? {
            Some(mut address) => {
                address.apply_details(shipping);
                self.store.update_address(address.clone()).await?;
                Ok(address)
            }
            None => {
                let address = CustomerAddress::from_details(customer_id.clone(), shipping);
                self.store.insert_address(address.clone()).await?;
                Ok(address)
            }
        }
    }

    async fn place_line(
        &self,
        request: &CheckoutRequest,
        address: &CustomerAddress,
        line: &CartLine,
    ) -> OrdersResult<PlacedOrder> {
        let product = self.store.product(&line.product_id).await?;
        if !product.status.is_listed() {
            return Err(OrdersError::ProductNotListed {
                product: product.slug,
            });
        }
        let vendor = self.store.vendor(&product.vendor_id).await?;

        let rental_plan_id = match line.mode {
            LineMode::Rent => {
                let plan = pricing::nearest_plan(&product.plans, line.duration_months).ok_or(
                    OrdersError::RentalUnavailable {
                        product: product.slug.clone(),
                    },
                )?;
                Some(plan.id.clone())
            }
            LineMode::Buy => None,
        };

        let financials = line_financials(line, &vendor, &self.settings.pricing)?;
        debug!(
            product = %product.slug,
            rent = %financials.monthly_rent,
            commission = %financials.platform_commission,
            "line priced"
        );

        let mut order = Order::new(
            generate_order_number(),
            request.customer_id.clone(),
            vendor.id.clone(),
            product.id.clone(),
            address.id.clone(),
            line.mode,
        );
        order.rental_plan_id = rental_plan_id;
        order.duration_months = line.duration_months;
        order.financials = financials;
        self.store.insert_order(order.clone()).await?;

        let payment = Payment::completed(
            order.id.clone(),
            financials.payable_now_total,
            request.payment_method,
        );
        self.store.insert_payment(payment).await?;

        Ok(PlacedOrder {
            order_id: order.id,
            order_number: order.order_number,
            product_id: product.id,
            payable_now: financials.payable_now_total,
            monthly_total: financials.monthly_total,
        })
    }
}

/// Money snapshot for one order, from the line's quote. GST here is on
/// the rent alone; the protection fee is not in the per-order GST base.
fn line_financials(
    line: &CartLine,
    vendor: &Vendor,
    pricing: &PricingSettings,
) -> OrdersResult<OrderFinancials> {
    let quote = &line.quote;
    let purchase_price = match line.mode {
        LineMode::Buy => line.purchase_price.ok_or(RentalError::MissingBuyPrice)?,
        LineMode::Rent => Money::zero(),
    };
    let monthly_rent = quote.monthly_rent;
    let monthly_gst = monthly_rent.fraction(pricing.gst_rate);
    let protection_plan_fee = if line.is_rental() && line.protection_plan {
        pricing.protection_plan_monthly
    } else {
        Money::zero()
    };
    let monthly_total = monthly_rent + monthly_gst + protection_plan_fee;
    let platform_commission =
        monthly_rent.fraction(vendor.effective_commission_rate(pricing.commission_rate));
    Ok(OrderFinancials {
        security_deposit: quote.security_deposit,
        delivery_fee: quote.delivery_fee,
        installation_fee: quote.installation_fee,
        payable_now_total: quote.one_time_total() + purchase_price,
        purchase_price,
        monthly_rent,
        monthly_gst,
        protection_plan_fee,
        monthly_total,
        platform_commission,
        vendor_payout: monthly_rent - platform_commission,
    })
}

const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// Customer-facing order number: millisecond timestamp plus a short
/// random suffix. The store's uniqueness check is the collision backstop.
fn generate_order_number() -> String {
    let millis = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let mut rng = rand::thread_rng();
    let suffix: String = (0..4)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("RM{}{}", millis, suffix)
}
