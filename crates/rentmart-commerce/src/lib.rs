//! Rental marketplace domain for RentMart.
//!
//! This crate provides:
//! - **Catalog**: vendors, product listings, and rental plan ladders
//! - **Pricing**: duration-interpolated quotes and advance payment
//! - **Cart**: session-scoped carts and checkout breakdowns
//! - **Checkout**: shipping details and saved addresses
//! - **Orders**: placed orders, payments, monthly rent, vendor payouts
//! - **Settings**: typed platform configuration with contract defaults
//!
//! # Example
//!
//! ```rust,ignore
//! use rentmart_commerce::prelude::*;
//!
//! let quote = quote_rental(&product.plans, 6)?;
//! let mut cart = RentalCart::new();
//! cart.add_or_update(CartLine::rent(&product, quote));
//! let breakdown = cart.breakdown(&settings.pricing)?;
//! println!("due now: {}", breakdown.payable_now);
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;
pub mod order;
pub mod pricing;
pub mod settings;

pub use error::{RentalError, RentalResult};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartLine, CheckoutBreakdown, LineMode, RentalCart};
    pub use crate::catalog::{Availability, Product, ProductStatus, RentalPlan, Vendor, VendorStatus};
    pub use crate::checkout::{CustomerAddress, PaymentMethod, ShippingDetails};
    pub use crate::error::{RentalError, RentalResult};
    pub use crate::ids::{
        AddressId, CustomerId, MonthlyPaymentId, OrderId, PaymentId, PayoutId, PlanId, ProductId,
        VendorId,
    };
    pub use crate::money::Money;
    pub use crate::order::{
        BillingMonth, MonthlyPayment, Order, OrderFinancials, OrderStatus, Payment, PaymentStatus,
        PayoutStatus, PayoutType, VendorPayout,
    };
    pub use crate::pricing::{
        duration_discount_percent, nearest_plan, quote_rental, quote_rental_with_advance,
        AdvancePayment, PriceQuote,
    };
    pub use crate::settings::{
        ApprovalSettings, GeneralSettings, PlatformSettings, PricingSettings, RentalSettings,
    };
}
