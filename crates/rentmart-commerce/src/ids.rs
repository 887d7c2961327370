//! Typed identifiers for marketplace entities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a prefixed, process-unique identifier.
fn generate_id(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let count = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{}_{:x}{:04x}", prefix, nanos, count & 0xffff)
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh identifier.
            pub fn generate() -> Self {
                Self(generate_id($prefix))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifies a vendor account.
    VendorId,
    "vnd"
);
define_id!(
    /// Identifies a product listing.
    ProductId,
    "prd"
);
define_id!(
    /// Identifies a rental plan row.
    PlanId,
    "pln"
);
define_id!(
    /// Identifies a customer.
    CustomerId,
    "cus"
);
define_id!(
    /// Identifies a saved customer address.
    AddressId,
    "adr"
);
define_id!(
    /// Identifies an order.
    OrderId,
    "ord"
);
define_id!(
    /// Identifies a checkout payment.
    PaymentId,
    "pay"
);
define_id!(
    /// Identifies a vendor payout.
    PayoutId,
    "pyt"
);
define_id!(
    /// Identifies a collected monthly rent payment.
    MonthlyPaymentId,
    "mpy"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = OrderId::generate();
        let b = OrderId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_generated_ids_carry_prefix() {
        assert!(OrderId::generate().as_str().starts_with("ord_"));
        assert!(ProductId::generate().as_str().starts_with("prd_"));
        assert!(PayoutId::generate().as_str().starts_with("pyt_"));
    }

    #[test]
    fn test_conversions() {
        let id = VendorId::from("vnd_abc");
        assert_eq!(id.as_str(), "vnd_abc");
        assert_eq!(id.to_string(), "vnd_abc");
        assert_eq!(id.clone().into_inner(), "vnd_abc".to_string());
        assert_eq!(VendorId::new("vnd_abc"), id);
    }
}
