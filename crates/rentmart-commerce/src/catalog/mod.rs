//! Catalog module.
//!
//! Vendors, product listings, and their rental plan ladders.

mod plan;
mod product;
mod vendor;

pub use plan::RentalPlan;
pub use product::{Availability, Product, ProductStatus};
pub use vendor::{Vendor, VendorStatus};
