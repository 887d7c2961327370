//! Platform configuration.
//!
//! Settings are a typed document loaded once at startup and passed to the
//! services that need them. Defaults match the platform contract below, so
//! an absent or partial settings file always yields a working deployment.

use crate::error::{RentalError, RentalResult};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// GST applied to the monthly bill.
pub const GST_RATE: f64 = 0.18;

/// Flat monthly protection plan fee, in rupees.
pub const PROTECTION_PLAN_MONTHLY: i64 = 99;

/// Platform commission on monthly rent, unless a vendor overrides it.
pub const DEFAULT_COMMISSION_RATE: f64 = 0.30;

/// Hard ceiling on the duration discount, in percent.
pub const DURATION_DISCOUNT_CAP_PERCENT: f64 = 80.0;

/// All platform settings, grouped by concern.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformSettings {
    pub general: GeneralSettings,
    pub pricing: PricingSettings,
    pub rentals: RentalSettings,
    pub approvals: ApprovalSettings,
}

impl PlatformSettings {
    /// Check every group; the first violation is returned.
    pub fn validate(&self) -> RentalResult<()> {
        self.pricing.validate()?;
        self.rentals.validate()?;
        Ok(())
    }
}

/// Marketplace identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub marketplace_name: String,
    pub support_email: String,
    /// ISO currency code; the platform is single-currency.
    pub currency: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            marketplace_name: default_marketplace_name(),
            support_email: default_support_email(),
            currency: default_currency(),
        }
    }
}

/// Rates and fees used by checkout and payout math.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    #[serde(default = "default_gst_rate")]
    pub gst_rate: f64,
    #[serde(default = "default_protection_plan_monthly")]
    pub protection_plan_monthly: Money,
    #[serde(default = "default_commission_rate")]
    pub commission_rate: f64,
}

impl PricingSettings {
    fn validate(&self) -> RentalResult<()> {
        if !(0.0..1.0).contains(&self.gst_rate) {
            return Err(RentalError::InvalidSetting(
                "pricing.gst_rate must be at least 0 and below 1",
            ));
        }
        if !(0.0..1.0).contains(&self.commission_rate) {
            return Err(RentalError::InvalidSetting(
                "pricing.commission_rate must be at least 0 and below 1",
            ));
        }
        if self.protection_plan_monthly.rupees() < 0 {
            return Err(RentalError::InvalidSetting(
                "pricing.protection_plan_monthly must not be negative",
            ));
        }
        Ok(())
    }
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            gst_rate: default_gst_rate(),
            protection_plan_monthly: default_protection_plan_monthly(),
            commission_rate: default_commission_rate(),
        }
    }
}

/// Bounds on rental durations customers may request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalSettings {
    #[serde(default = "default_min_duration")]
    pub min_duration_months: u32,
    #[serde(default = "default_max_duration")]
    pub max_duration_months: u32,
}

impl RentalSettings {
    fn validate(&self) -> RentalResult<()> {
        if self.min_duration_months == 0 {
            return Err(RentalError::InvalidSetting(
                "rentals.min_duration_months must be at least 1",
            ));
        }
        if self.max_duration_months < self.min_duration_months {
            return Err(RentalError::InvalidSetting(
                "rentals.max_duration_months must not be below the minimum",
            ));
        }
        Ok(())
    }
}

impl Default for RentalSettings {
    fn default() -> Self {
        Self {
            min_duration_months: default_min_duration(),
            max_duration_months: default_max_duration(),
        }
    }
}

/// Whether vendor and product registrations skip manual review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalSettings {
    pub auto_approve_vendors: bool,
    pub auto_approve_products: bool,
}

fn default_marketplace_name() -> String {
    "RentMart".to_string()
}

fn default_support_email() -> String {
    "support@rentmart.example".to_string()
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_gst_rate() -> f64 {
    GST_RATE
}

fn default_protection_plan_monthly() -> Money {
    Money::new(PROTECTION_PLAN_MONTHLY)
}

fn default_commission_rate() -> f64 {
    DEFAULT_COMMISSION_RATE
}

fn default_min_duration() -> u32 {
    1
}

fn default_max_duration() -> u32 {
    36
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_contract() {
        let settings = PlatformSettings::default();
        assert_eq!(settings.pricing.gst_rate, GST_RATE);
        assert_eq!(
            settings.pricing.protection_plan_monthly,
            Money::new(PROTECTION_PLAN_MONTHLY)
        );
        assert_eq!(settings.pricing.commission_rate, DEFAULT_COMMISSION_RATE);
        assert_eq!(settings.rentals.min_duration_months, 1);
        assert!(!settings.approvals.auto_approve_vendors);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let json = r#"{"pricing": {"commission_rate": 0.25}}"#;
        let settings: PlatformSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.pricing.commission_rate, 0.25);
        assert_eq!(settings.pricing.gst_rate, GST_RATE);
        assert_eq!(settings.general.currency, "INR");
    }

    #[test]
    fn test_validation_rejects_bad_rates() {
        let mut settings = PlatformSettings::default();
        settings.pricing.gst_rate = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = PlatformSettings::default();
        settings.pricing.commission_rate = -0.1;
        assert!(settings.validate().is_err());

        let mut settings = PlatformSettings::default();
        settings.rentals.min_duration_months = 0;
        assert!(settings.validate().is_err());

        let mut settings = PlatformSettings::default();
        settings.rentals.max_duration_months = 0;
        assert!(matches!(
            settings.validate(),
            Err(RentalError::InvalidSetting(_))
        ));
    }
}
