//! Quote types produced by the pricing engine.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Figures for paying the whole rental up front.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AdvancePayment {
    /// Monthly rent times the rental duration.
    pub total_without_discount: Money,
    pub discount_amount: Money,
    pub total_payable: Money,
    pub discount_percent: f64,
}

/// Priced terms for renting a product for a specific duration.
///
/// Deposit and one-time fees always come from the product's shortest
/// plan; only the monthly rent varies with the requested duration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PriceQuote {
    pub duration_months: u32,
    pub monthly_rent: Money,
    pub security_deposit: Money,
    pub delivery_fee: Money,
    pub installation_fee: Money,
    /// Duration discount applied to the base rent, in percent.
    pub duration_discount_percent: f64,
    pub advance: Option<AdvancePayment>,
}

impl PriceQuote {
    /// One-time charges due at checkout: deposit plus delivery and
    /// installation fees.
    pub fn one_time_total(&self) -> Money {
        self.security_deposit + self.delivery_fee + self.installation_fee
    }

    /// An all-zero quote, used for cart lines that are outright
    /// purchases rather than rentals.
    pub fn empty() -> Self {
        Self {
            duration_months: 0,
            monthly_rent: Money::zero(),
            security_deposit: Money::zero(),
            delivery_fee: Money::zero(),
            installation_fee: Money::zero(),
            duration_discount_percent: 0.0,
            advance: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_time_total() {
        let quote = PriceQuote {
            duration_months: 6,
            monthly_rent: Money::new(508),
            security_deposit: Money::new(2000),
            delivery_fee: Money::new(299),
            installation_fee: Money::new(199),
            duration_discount_percent: 15.2,
            advance: None,
        };
        assert_eq!(quote.one_time_total(), Money::new(2498));
    }

    #[test]
    fn test_empty_quote_is_all_zero() {
        let quote = PriceQuote::empty();
        assert!(quote.monthly_rent.is_zero());
        assert!(quote.one_time_total().is_zero());
        assert!(quote.advance.is_none());
    }
}
