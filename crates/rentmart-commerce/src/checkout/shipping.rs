//! Shipping details captured at checkout.

use crate::error::{RentalError, RentalResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Customer-entered delivery details.
///
/// Validated before any order is placed; checkout never persists anything
/// when a field is missing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ShippingDetails {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl ShippingDetails {
    /// Every field is required; the first blank one is reported.
    pub fn validate(&self) -> RentalResult<()> {
        let fields: [(&str, &'static str); 7] = [
            (&self.full_name, "full_name"),
            (&self.email, "email"),
            (&self.phone, "phone"),
            (&self.address, "address"),
            (&self.city, "city"),
            (&self.state, "state"),
            (&self.pincode, "pincode"),
        ];
        for (value, name) in fields {
            if value.trim().is_empty() {
                return Err(RentalError::MissingField(name));
            }
        }
        Ok(())
    }
}

/// How the customer pays the amount due at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Card,
    Upi,
    NetBanking,
    Cod,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Upi => "upi",
            PaymentMethod::NetBanking => "net_banking",
            PaymentMethod::Cod => "cod",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
