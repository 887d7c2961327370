//! Saved customer addresses.

use crate::checkout::shipping::ShippingDetails;
use crate::ids::{AddressId, CustomerId};
use serde::{Deserialize, Serialize};

/// A customer's saved delivery address. Each customer keeps at most one
/// default address; checkout refreshes it in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerAddress {
    pub id: AddressId,
    pub customer_id: CustomerId,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub is_default: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl CustomerAddress {
    /// New default address from validated shipping details.
    pub fn from_details(customer_id: CustomerId, details: &ShippingDetails) -> Self {
        let now = current_timestamp();
        Self {
            id: AddressId::generate(),
            customer_id,
            full_name: details.full_name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone(),
            address: details.address.clone(),
            city: details.city.clone(),
            state: details.state.clone(),
            pincode: details.pincode.clone(),
            is_default: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the stored fields from fresh shipping details.
    pub fn apply_details(&mut self, details: &ShippingDetails) {
        self.full_name = details.full_name.clone();
        self.email = details.email.clone();
        self.phone = details.phone.clone();
        self.address = details.address.clone();
        self.city = details.city.clone();
        self.state = details.state.clone();
        self.pincode = details.pincode.clone();
        self.updated_at = current_timestamp();
    }

    /// Single-line rendering for logs and CLI output.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.pincode
        )
    }
}

fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(city: &str) -> ShippingDetails {
        ShippingDetails {
            full_name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "14 Lake View Road".to_string(),
            city: city.to_string(),
            state: "Maharashtra".to_string(),
            pincode: "411001".to_string(),
        }
    }

    #[test]
    fn test_from_details_is_default() {
        let address = CustomerAddress::from_details(CustomerId::generate(), &details("Pune"));
        assert!(address.is_default);
        assert_eq!(address.city, "Pune");
    }

    #[test]
    fn test_apply_details_keeps_identity() {
        let mut address = CustomerAddress::from_details(CustomerId::generate(), &details("Pune"));
        let id = address.id.clone();
        let customer_id = address.customer_id.clone();
        address.apply_details(&details("Mumbai"));
        assert_eq!(address.id, id);
        assert_eq!(address.customer_id, customer_id);
        assert_eq!(address.city, "Mumbai");
        assert!(address.is_default);
    }

    #[test]
    fn test_one_line() {
        let address = CustomerAddress::from_details(CustomerId::generate(), &details("Pune"));
        assert_eq!(
            address.one_line(),
            "14 Lake View Road, Pune, Maharashtra 411001"
        );
    }
}
