//! Persistence layer for the RentMart marketplace.
//!
//! Defines the [`MarketplaceStore`] trait the order services are written
//! against, an in-memory implementation for demos and tests, and catalog
//! seeding helpers.
//!
//! # Example
//!
//! ```rust,ignore
//! use rentmart_store::{demo_catalog, seed_catalog, MarketplaceStore, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let (vendors, products) = demo_catalog()?;
//! let report = seed_catalog(&store, vendors, products).await?;
//! println!("seeded {} products", report.products);
//!
//! let chair = store.product_by_slug("ergocomfort-office-chair").await?;
//! ```

mod error;
mod memory;
mod seed;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use seed::{demo_catalog, register_product, register_vendor, seed_catalog, SeedReport};
pub use store::{MarketplaceStore, StoreResult};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        demo_catalog, seed_catalog, MarketplaceStore, MemoryStore, SeedReport, StoreError,
        StoreResult,
    };
}
