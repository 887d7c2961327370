//! Session-scoped rental cart.

use crate::cart::breakdown::{self, CheckoutBreakdown};
use crate::catalog::Product;
use crate::error::{RentalError, RentalResult};
use crate::ids::{ProductId, VendorId};
use crate::money::Money;
use crate::pricing::PriceQuote;
use crate::settings::PricingSettings;
use serde::{Deserialize, Serialize};

/// Whether a line is a rental or an outright purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineMode {
    Rent,
    Buy,
}

impl LineMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineMode::Rent => "rent",
            LineMode::Buy => "buy",
        }
    }
}

/// One product in the cart. Carts hold one unit per product line; adding
/// a product that is already present replaces its line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    /// Denormalized for display.
    pub product_name: String,
    pub vendor_id: VendorId,
    pub mode: LineMode,
    /// Chosen rental length; 0 on purchase lines.
    pub duration_months: u32,
    /// Quote snapshot taken when the line was added.
    pub quote: PriceQuote,
    pub protection_plan: bool,
    /// Sale price snapshot on purchase lines.
    pub purchase_price: Option<Money>,
}

impl CartLine {
    /// Rental line from a product and its quote for the chosen duration.
    pub fn rent(product: &Product, quote: PriceQuote) -> Self {
        Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            vendor_id: product.vendor_id.clone(),
            mode: LineMode::Rent,
            duration_months: quote.duration_months,
            quote,
            protection_plan: false,
            purchase_price: None,
        }
    }

    /// Purchase line; the product must have a buy price.
    pub fn buy(product: &Product) -> RentalResult<Self> {
        let price = product.buy_price.ok_or(RentalError::MissingBuyPrice)?;
        Ok(Self {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            vendor_id: product.vendor_id.clone(),
            mode: LineMode::Buy,
            duration_months: 0,
            quote: PriceQuote::empty(),
            protection_plan: false,
            purchase_price: Some(price),
        })
    }

    pub fn is_rental(&self) -> bool {
        self.mode == LineMode::Rent
    }
}

/// A customer's cart. Construct one per session and pass it where it is
/// needed; nothing global holds cart state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RentalCart {
    lines: Vec<CartLine>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl RentalCart {
    pub fn new() -> Self {
        let now = current_timestamp();
        Self {
            lines: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a line, replacing any existing line for the same product.
    pub fn add_or_update(&mut self, line: CartLine) {
        match self
            .lines
            .iter_mut()
            .find(|l| l.product_id == line.product_id)
        {
            Some(existing) => *existing = line,
            None => self.lines.push(line),
        }
        self.touch();
    }

    /// Remove a product's line. Removing an absent product is a no-op.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        let removed = self.lines.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Toggle the protection plan on one rental line. Returns false when
    /// the product is absent or is a purchase line.
    pub fn set_protection_plan(&mut self, product_id: &ProductId, enabled: bool) -> bool {
        match self
            .lines
            .iter_mut()
            .find(|l| &l.product_id == product_id)
        {
            Some(line) if line.is_rental() => {
                line.protection_plan = enabled;
                self.touch();
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.touch();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Compute checkout totals from the current lines. Always recomputed;
    /// never cached.
    pub fn breakdown(&self, pricing: &PricingSettings) -> RentalResult<CheckoutBreakdown> {
        breakdown::compute(&self.lines, pricing)
    }

    fn touch(&mut self) {
        self.updated_at = current_timestamp();
    }
}

impl Default for RentalCart {
    fn default() -> Self {
        Self::new()
    }
}

fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
