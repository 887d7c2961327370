//! Order status transitions and the confirmation payout.

use crate::error::{OrdersError, OrdersResult};
use rentmart_commerce::ids::OrderId;
use rentmart_commerce::order::{Order, OrderStatus, PayoutType, VendorPayout};
use rentmart_store::{MarketplaceStore, StoreError};
use std::sync::Arc;
use tracing::{info, warn};

/// Moves orders through their status machine and keeps the money flow
/// in step: confirming an order creates its one confirmation payout.
pub struct OrderLifecycle {
    store: Arc<dyn MarketplaceStore>,
}

impl OrderLifecycle {
    pub fn new(store: Arc<dyn MarketplaceStore>) -> Self {
        Self { store }
    }

    /// Move an order to `to`. Only edges of the status machine are
    /// allowed; anything else is `InvalidTransition`.
    pub async fn transition(&self, order_id: &OrderId, to: OrderStatus) -> OrdersResult<Order> {
        let mut order = self.store.order(order_id).await?;
        if !order.status.can_transition_to(to) {
            return Err(OrdersError::InvalidTransition {
                from: order.status,
                to,
            });
        }
        order.record_transition(to, current_timestamp());
        self.store.update_order(order.clone()).await?;
        info!(order = %order.order_number, status = %order.status, "order status updated");

        if to == OrderStatus::Confirmed {
            self.ensure_confirmation_payout(&order).await?;
        }
        Ok(order)
    }

    pub async fn confirm(&self, order_id: &OrderId) -> OrdersResult<Order> {
        self.transition(order_id, OrderStatus::Confirmed).await
    }

    pub async fn cancel(&self, order_id: &OrderId) -> OrdersResult<Order> {
        self.transition(order_id, OrderStatus::Cancelled).await
    }

    /// Create the order's confirmation payout unless one already exists.
    /// The store's uniqueness check backs up the lookup under
    /// concurrent confirms; a duplicate there is skipped the same way.
    async fn ensure_confirmation_payout(&self, order: &Order) -> OrdersResult<()> {
        if let Some(existing) = self
            .store
            .find_payout(&order.id, PayoutType::OrderConfirmation)
            .await?
        {
            warn!(
                order = %order.order_number,
                payout = %existing.id,
                "confirmation payout already exists, skipping"
            );
            return Ok(());
        }
        match self.store.insert_payout(VendorPayout::order_confirmation(order)).await {
            Ok(()) => {
                info!(
                    order = %order.order_number,
                    amount = %order.financials.vendor_payout,
                    "confirmation payout created"
                );
                Ok(())
            }
            Err(StoreError::DuplicatePayout { .. }) => {
                warn!(order = %order.order_number, "confirmation payout raced, skipping");
                Ok(())
            }
            Err(other) => Err(other.into()),
        }
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
    use rentmart_commerce::cart::LineMode;
    use rentmart_commerce::ids::{AddressId, CustomerId, ProductId, VendorId};
    use rentmart_commerce::money::Money;
    use rentmart_commerce::order::{OrderFinancials, PayoutStatus};
    use rentmart_store::MemoryStore;

    async fn stored_order() -> (OrderLifecycle, Arc<MemoryStore>, OrderId) {
        let store = Arc::new(MemoryStore::new());
        let mut order = Order::new(
            "RM1700000000000AB12",
            CustomerId::generate(),
            VendorId::generate(),
            ProductId::generate(),
            AddressId::generate(),
            LineMode::Rent,
        );
        order.financials = OrderFinancials {
            monthly_rent: Money::new(508),
            platform_commission: Money::new(152),
            vendor_payout: Money::new(356),
            ..OrderFinancials::default()
        };
        let id = order.id.clone();
        store.insert_order(order).await.unwrap();
        (OrderLifecycle::new(store.clone()), store, id)
    }

    #[tokio::test]
    async fn test_confirm_creates_one_payout() {
        let (lifecycle, store, order_id) = stored_order().await;
        let order = lifecycle.confirm(&order_id).await.unwrap();
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert!(order.confirmed_at.is_some());

        let payouts = store.payouts_for_order(&order_id).await.unwrap();
        assert_eq!(payouts.len(), 1);
        assert_eq!(payouts[0].payout_type, PayoutType::OrderConfirmation);
        assert_eq!(payouts[0].amount, Money::new(356));
        assert_eq!(payouts[0].status, PayoutStatus::Pending);
    }

    #[tokio::test]
    async fn test_double_confirm_leaves_one_payout() {
        let (lifecycle, store, order_id) = stored_order().await;
        lifecycle.confirm(&order_id).await.unwrap();

        let result = lifecycle.confirm(&order_id).await;
        assert!(matches!(
            result,
            Err(OrdersError::InvalidTransition {
                from: OrderStatus::Confirmed,
                to: OrderStatus::Confirmed,
            })
        ));
        assert_eq!(store.payouts_for_order(&order_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_existing_payout_is_skipped_on_confirm() {
        let (lifecycle, store, order_id) = stored_order().await;
        let order = store.order(&order_id).await.unwrap();
        store
            .insert_payout(VendorPayout::order_confirmation(&order))
            .await
            .unwrap();

        lifecycle.confirm(&order_id).await.unwrap();
        assert_eq!(store.payouts_for_order(&order_id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_forward_path_stamps_each_step() {
        let (lifecycle, _store, order_id) = stored_order().await;
        lifecycle.confirm(&order_id).await.unwrap();
        lifecycle
            .transition(&order_id, OrderStatus::Processing)
            .await
            .unwrap();
        lifecycle
            .transition(&order_id, OrderStatus::Shipped)
            .await
            .unwrap();
        let order = lifecycle
            .transition(&order_id, OrderStatus::Delivered)
            .await
            .unwrap();
        assert!(order.processing_at.is_some());
        assert!(order.shipped_at.is_some());
        assert!(order.delivered_at.is_some());

        let order = lifecycle
            .transition(&order_id, OrderStatus::Returned)
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Returned);
        assert!(order.status.is_terminal());
    }

    #[tokio::test]
    async fn test_skipping_steps_is_rejected() {
        let (lifecycle, _store, order_id) = stored_order().await;
        let result = lifecycle.transition(&order_id, OrderStatus::Shipped).await;
        assert!(matches!(
            result,
            Err(OrdersError::InvalidTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Shipped,
            })
        ));
    }

    #[tokio::test]
    async fn test_cancel_window() {
        let (lifecycle, _store, order_id) = stored_order().await;
        let order = lifecycle.cancel(&order_id).await.unwrap();
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert!(order.cancelled_at.is_some());

        let (lifecycle, _store, order_id) = stored_order().await;
        lifecycle.confirm(&order_id).await.unwrap();
        lifecycle
            .transition(&order_id, OrderStatus::Processing)
            .await
            .unwrap();
        let result = lifecycle.cancel(&order_id).await;
        assert!(matches!(
            result,
            Err(OrdersError::InvalidTransition { .. })
        ));
    }

    #[tokio::test]
    async fn test_missing_order_is_loud() {
        let store = Arc::new(MemoryStore::new());
        let lifecycle = OrderLifecycle::new(store);
        let result = lifecycle.confirm(&OrderId::from("ord_missing")).await;
        assert!(matches!(
            result,
            Err(OrdersError::Store(StoreError::NotFound { .. }))
        ));
    }
}
