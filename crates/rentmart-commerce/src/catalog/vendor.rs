//! Vendor accounts.

use crate::ids::VendorId;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a vendor account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    #[default]
    Pending,
    Approved,
    Suspended,
}

impl VendorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorStatus::Pending => "pending",
            VendorStatus::Approved => "approved",
            VendorStatus::Suspended => "suspended",
        }
    }

    /// Only approved vendors can sell.
    pub fn is_active(&self) -> bool {
        matches!(self, VendorStatus::Approved)
    }
}

/// A seller on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vendor {
    pub id: VendorId,
    pub name: String,
    /// Stable URL identity.
    pub slug: String,
    pub status: VendorStatus,
    /// Commission override; `None` uses the platform default rate.
    pub commission_rate: Option<f64>,
    pub created_at: i64,
}

impl Vendor {
    /// Create a pending vendor.
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: VendorId::generate(),
            name: name.into(),
            slug: slug.into(),
            status: VendorStatus::default(),
            commission_rate: None,
            created_at: current_timestamp(),
        }
    }

    /// Set a vendor-specific commission rate.
    pub fn with_commission_rate(mut self, rate: f64) -> Self {
        self.commission_rate = Some(rate);
        self
    }

    /// The commission rate applied to this vendor's orders. Overrides are
    /// clamped to a sane range so bad data cannot produce negative payouts.
    pub fn effective_commission_rate(&self, default_rate: f64) -> f64 {
        self.commission_rate
            .unwrap_or(default_rate)
            .clamp(0.0, 1.0)
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

    #[test]
    fn test_new_vendor_is_pending() {
        let vendor = Vendor::new("UrbanNest Furnishings", "urbannest");
        assert_eq!(vendor.status, VendorStatus::Pending);
        assert!(!vendor.status.is_active());
        assert!(vendor.commission_rate.is_none());
    }

    #[test]
    fn test_effective_commission_rate() {
        let vendor = Vendor::new("A", "a");
        assert_eq!(vendor.effective_commission_rate(0.30), 0.30);

        let vendor = Vendor::new("B", "b").with_commission_rate(0.25);
        assert_eq!(vendor.effective_commission_rate(0.30), 0.25);

        let vendor = Vendor::new("C", "c").with_commission_rate(3.0);
        assert_eq!(vendor.effective_commission_rate(0.30), 1.0);
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(VendorStatus::Pending.as_str(), "pending");
        assert_eq!(VendorStatus::Approved.as_str(), "approved");
        assert_eq!(VendorStatus::Suspended.as_str(), "suspended");
    }
}
