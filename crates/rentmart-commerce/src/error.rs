//! Error types for the commerce domain.

use thiserror::Error;

/// Result alias for domain operations.
pub type RentalResult<T> = Result<T, RentalError>;

/// Errors from catalog, pricing, and cart operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RentalError {
    /// A rental quote was requested for a product with no active plans.
    #[error("no active rental plans")]
    NoActivePlans,

    /// Rental durations start at one month.
    #[error("invalid rental duration: {0} months")]
    InvalidDuration(u32),

    /// A required checkout field was blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A percentage outside 0-100 was supplied.
    #[error("invalid percentage: {0}")]
    InvalidPercent(f64),

    /// An outright purchase was requested for a product without a buy price.
    #[error("product has no buy price")]
    MissingBuyPrice,

    /// Plans are unique by duration within a product.
    #[error("a plan with duration {0} months already exists")]
    DuplicatePlanDuration(u32),

    /// A billing month string or month number was out of range.
    #[error("invalid billing month: {0}")]
    InvalidBillingMonth(String),

    /// A platform setting failed validation.
    #[error("invalid setting: {0}")]
    InvalidSetting(&'static str),

    /// Amount arithmetic overflowed.
    #[error("amount overflow")]
    Overflow,
}
