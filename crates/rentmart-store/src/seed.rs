//! Catalog onboarding and demo data.

use crate::store::{MarketplaceStore, StoreResult};
use rentmart_commerce::catalog::{Product, ProductStatus, RentalPlan, Vendor, VendorStatus};
use rentmart_commerce::error::RentalResult;
use rentmart_commerce::money::Money;
use rentmart_commerce::settings::ApprovalSettings;
use tracing::{debug, info};

/// Counts of what a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub vendors: usize,
    pub products: usize,
    pub plans: usize,
}

/// Register a vendor, applying the platform's approval policy.
pub async fn register_vendor(
    store: &dyn MarketplaceStore,
    mut vendor: Vendor,
    approvals: &ApprovalSettings,
) -> StoreResult<Vendor> {
    if approvals.auto_approve_vendors {
        vendor.status = VendorStatus::Approved;
    }
    store.insert_vendor(vendor.clone()).await?;
    debug!(vendor = %vendor.id, status = vendor.status.as_str(), "vendor registered");
    Ok(vendor)
}

/// Register a product listing for an existing vendor, applying the
/// platform's approval policy. Fails if the owning vendor is unknown.
pub async fn register_product(
    store: &dyn MarketplaceStore,
    mut product: Product,
    approvals: &ApprovalSettings,
) -> StoreResult<Product> {
    store.vendor(&product.vendor_id).await?;
    if approvals.auto_approve_products {
        product.status = ProductStatus::Approved;
    }
    store.insert_product(product.clone()).await?;
    debug!(product = %product.id, status = product.status.as_str(), "product registered");
    Ok(product)
}

/// Insert a prepared catalog. Every product must reference a vendor that
/// is already in the batch; an orphaned product aborts the run.
pub async fn seed_catalog(
    store: &dyn MarketplaceStore,
    vendors: Vec<Vendor>,
    products: Vec<Product>,
) -> StoreResult<SeedReport> {
    let mut report = SeedReport::default();
    for vendor in vendors {
        store.insert_vendor(vendor).await?;
        report.vendors += 1;
    }
    for product in products {
        store.vendor(&product.vendor_id).await?;
        report.plans += product.plans.len();
        store.insert_product(product).await?;
        report.products += 1;
    }
    info!(
        vendors = report.vendors,
        products = report.products,
        plans = report.plans,
        "catalog seeded"
    );
    Ok(report)
}

/// A small furniture-and-appliances catalog used by the demo command and
/// the service tests: two approved vendors, a rentable chair with a
/// two-plan ladder and an advance-payment offer, a rentable fridge, and
/// a buy-only bed.
pub fn demo_catalog() -> RentalResult<(Vec<Vendor>, Vec<Product>)> {
    let mut urbannest = Vendor::new("UrbanNest Furnishings", "urbannest");
    urbannest.status = VendorStatus::Approved;
    let mut spintron = Vendor::new("Spintron Appliances", "spintron").with_commission_rate(0.25);
    spintron.status = VendorStatus::Approved;

    let mut chair = Product::new(
        urbannest.id.clone(),
        "ergocomfort-office-chair",
        "ErgoComfort Office Chair",
    )
    .with_description("High-back mesh chair with lumbar support")
    .with_advance_discount(10.0)?;
    chair.status = ProductStatus::Approved;
    chair.add_plan(
        RentalPlan::new(chair.id.clone(), 3, Money::new(599), Money::new(2000))
            .with_delivery_fee(Money::new(299))
            .with_installation_fee(Money::new(199)),
    )?;
    chair.add_plan(RentalPlan::new(
        chair.id.clone(),
        12,
        Money::new(399),
        Money::new(1000),
    ))?;

    let mut fridge = Product::new(
        spintron.id.clone(),
        "frostline-260l-fridge",
        "FrostLine 260L Refrigerator",
    )
    .with_description("Frost-free double door, 260 litres");
    fridge.status = ProductStatus::Approved;
    fridge.add_plan(
        RentalPlan::new(fridge.id.clone(), 6, Money::new(1099), Money::new(3000))
            .with_delivery_fee(Money::new(349)),
    )?;
    fridge.add_plan(RentalPlan::new(
        fridge.id.clone(),
        12,
        Money::new(899),
        Money::new(2000),
    ))?;

    let mut bed = Product::new(urbannest.id.clone(), "aurora-queen-bed", "Aurora Queen Bed")
        .with_description("Engineered wood queen bed with storage")
        .with_buy_price(Money::new(15999));
    bed.status = ProductStatus::Approved;

    Ok((vec![urbannest, spintron], vec![chair, fridge, bed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use crate::memory::MemoryStore;
    use rentmart_commerce::catalog::Availability;
    use rentmart_commerce::ids::VendorId;

    #[test]
    fn test_demo_catalog_shape() {
        let (vendors, products) = demo_catalog().unwrap();
        assert_eq!(vendors.len(), 2);
        assert_eq!(products.len(), 3);
        assert!(vendors.iter().all(|v| v.status.is_active()));
        assert!(products.iter().all(|p| p.status.is_listed()));

        let chair = &products[0];
        assert_eq!(chair.slug, "ergocomfort-office-chair");
        assert_eq!(chair.plans.len(), 2);
        assert_eq!(chair.advance_discount_percent, 10.0);
        assert_eq!(chair.availability(), Availability::Rentable);

        let bed = &products[2];
        assert_eq!(bed.availability(), Availability::BuyOnly);
        assert_eq!(bed.buy_price, Some(Money::new(15999)));
    }

    #[tokio::test]
    async fn test_seed_catalog_counts_and_lookup() {
        let store = MemoryStore::new();
        let (vendors, products) = demo_catalog().unwrap();
        let report = seed_catalog(&store, vendors, products).await.unwrap();
        assert_eq!(
            report,
            SeedReport {
                vendors: 2,
                products: 3,
                plans: 4
            }
        );

        let chair = store
            .product_by_slug("ergocomfort-office-chair")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(chair.name, "ErgoComfort Office Chair");
        store.vendor(&chair.vendor_id).await.unwrap();
    }

    #[tokio::test]
    async fn test_seed_rejects_orphan_product() {
        let store = MemoryStore::new();
        let orphan = Product::new(VendorId::generate(), "ghost", "Ghost Product");
        let result = seed_catalog(&store, Vec::new(), vec![orphan]).await;
        assert!(matches!(
            result,
            Err(StoreError::NotFound { entity: "vendor", .. })
        ));
    }

    #[tokio::test]
    async fn test_register_vendor_honors_approval_policy() {
        let store = MemoryStore::new();

        let manual = register_vendor(
            &store,
            Vendor::new("Manual Traders", "manual"),
            &ApprovalSettings::default(),
        )
        .await
        .unwrap();
        assert_eq!(manual.status, VendorStatus::Pending);

        let auto = register_vendor(
            &store,
            Vendor::new("Auto Traders", "auto"),
            &ApprovalSettings {
                auto_approve_vendors: true,
                auto_approve_products: false,
            },
        )
        .await
        .unwrap();
        assert_eq!(auto.status, VendorStatus::Approved);
        assert_eq!(store.vendor(&auto.id).await.unwrap().status, VendorStatus::Approved);
    }

    #[tokio::test]
    async fn test_register_product_requires_vendor() {
        let store = MemoryStore::new();
        let approvals = ApprovalSettings {
            auto_approve_vendors: true,
            auto_approve_products: true,
        };

        let orphan = Product::new(VendorId::generate(), "ghost", "Ghost Product");
        assert!(matches!(
            register_product(&store, orphan, &approvals).await,
            Err(StoreError::NotFound { entity: "vendor", .. })
        ));

        let vendor = register_vendor(&store, Vendor::new("A", "a"), &approvals)
            .await
            .unwrap();
        let product = register_product(
            &store,
            Product::new(vendor.id.clone(), "lamp", "Desk Lamp"),
            &approvals,
        )
        .await
        .unwrap();
        assert_eq!(product.status, ProductStatus::Approved);
    }
}
