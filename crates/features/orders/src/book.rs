//! In-memory order repository.
//!
//! One `RwLock` guards orders and analytics snapshots together, so every operation (including
//! the snapshot refresh that follows a mutation) is atomic with respect to other requests.

use crate::analytics::{
    DashboardStats, DestinationBreakdown, PriorityBreakdown, StatusBreakdown, Tally, ValueMetrics,
};
use crate::error::OrdersError;
use crate::export;
use crate::filter::OrderFilter;
use crate::model::{NewOrder, Order, OrderAnalytics, OrderPatch, OrderStats};
use fxhash::FxHashMap;
use parking_lot::RwLock;
use sledger_domain::config::OrdersConfig;
use sledger_domain::vocabulary::OrderStatus;
use sledger_kernel::ids::{IdSequence, order_id};
use sledger_kernel::security::OwnershipGuard;
use sledger_kernel::time;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Debug, Default)]
struct Ledger {
    /// Keyed by numeric id, which is also creation order.
    orders: BTreeMap<u64, Order>,
    by_order_id: FxHashMap<String, u64>,
    analytics: FxHashMap<u64, OrderAnalytics>,
}

impl Ledger {
    fn get(&self, order_id: &str) -> Option<&Order> {
        self.by_order_id.get(order_id).and_then(|id| self.orders.get(id))
    }

    fn get_mut(&mut self, order_id: &str) -> Option<&mut Order> {
        self.by_order_id.get(order_id).and_then(|id| self.orders.get_mut(id))
    }

    fn owned_mut(&mut self, order_id: &str, user_id: u64) -> Result<&mut Order, OrdersError> {
        let order = self.get_mut(order_id).ok_or_else(OrdersError::order_not_found)?;
        OwnershipGuard::ensure(order.user_id, user_id, "Order")?;
        Ok(order)
    }

    fn of_user(&self, user_id: u64) -> impl Iterator<Item = &Order> {
        self.orders.values().filter(move |order| order.user_id == user_id)
    }

    fn fresh_order_id(&self) -> String {
        loop {
            let candidate = order_id();
            if !self.by_order_id.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    fn refresh_analytics(&mut self, user_id: u64, ids: &IdSequence) {
        let tally = Tally::of(self.of_user(user_id));
        let now = time::now();
        let snapshot = self.analytics.entry(user_id).or_insert_with(|| OrderAnalytics {
            id: ids.next_id(),
            user_id,
            total_orders: 0,
            completed_orders: 0,
            in_transit_orders: 0,
            pending_orders: 0,
            cancelled_orders: 0,
            total_shipment_value: 0.0,
            average_order_value: 0.0,
            created_at: now,
            updated_at: now,
        });

        snapshot.total_orders = tally.total;
        snapshot.completed_orders = tally.delivered;
        snapshot.in_transit_orders = tally.in_transit;
        snapshot.pending_orders = tally.pending;
        snapshot.cancelled_orders = tally.cancelled;
        snapshot.total_shipment_value = tally.value;
        snapshot.average_order_value = tally.average();
        snapshot.updated_at = now;
    }
}

#[derive(Debug)]
struct OrderBookInner {
    ledger: RwLock<Ledger>,
    order_ids: IdSequence,
    analytics_ids: IdSequence,
    price_per_kg: f64,
    top_destinations: usize,
}

/// Shared handle over the order repository; clones see the same orders.
#[derive(Debug, Clone)]
pub struct OrderBook {
    inner: Arc<OrderBookInner>,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new(&OrdersConfig::default())
    }
}

impl OrderBook {
    #[must_use]
    pub fn new(config: &OrdersConfig) -> Self {
        Self {
            inner: Arc::new(OrderBookInner {
                ledger: RwLock::default(),
                order_ids: IdSequence::default(),
                analytics_ids: IdSequence::default(),
                price_per_kg: config.price_per_kg,
                top_destinations: config.top_destinations,
            }),
        }
    }

    /// Places a `Pending` order for `user_id`.
    ///
    /// # Errors
    /// [`OrdersError::InvalidInput`] for a negative or non-finite weight.
    #[instrument(skip(self, new), fields(destination = %new.destination))]
    pub fn create(&self, user_id: u64, new: NewOrder) -> Result<Order, OrdersError> {
        if !new.weight.is_finite() || new.weight < 0.0 {
            return Err(OrdersError::InvalidInput {
                message: "Weight must be a non-negative number".into(),
                context: None,
            });
        }

        let mut ledger = self.inner.ledger.write();
        let now = time::now();
        let order = Order {
            id: self.inner.order_ids.next_id(),
            order_id: ledger.fresh_order_id(),
            user_id,
            origin: new.origin,
            destination: new.destination,
            weight: new.weight,
            priority: new.priority,
            status: OrderStatus::Pending,
            due_date: new.due_date,
            value: new.weight * self.inner.price_per_kg,
            created_at: now,
            updated_at: now,
        };

        ledger.by_order_id.insert(order.order_id.clone(), order.id);
        ledger.orders.insert(order.id, order.clone());
        ledger.refresh_analytics(user_id, &self.inner.analytics_ids);

        info!(order_id = %order.order_id, value = order.value, "Order created");
        Ok(order)
    }

    /// The user's orders in creation order, narrowed by `filter`.
    pub fn list(&self, user_id: u64, filter: &OrderFilter) -> Vec<Order> {
        let ledger = self.inner.ledger.read();
        ledger.of_user(user_id).filter(|order| filter.matches(order)).cloned().collect()
    }

    /// # Errors
    /// [`OrdersError::NotFound`] before [`OrdersError::Forbidden`].
    pub fn detail(&self, order_id: &str, user_id: u64) -> Result<Order, OrdersError> {
        let ledger = self.inner.ledger.read();
        let order = ledger.get(order_id).ok_or_else(OrdersError::order_not_found)?;
        OwnershipGuard::ensure(order.user_id, user_id, "Order")?;
        Ok(order.clone())
    }

    /// Applies the provided fields of `patch`.
    ///
    /// # Errors
    /// [`OrdersError::NotFound`] or [`OrdersError::Forbidden`].
    #[instrument(skip(self, patch))]
    pub fn update(
        &self,
        order_id: &str,
        user_id: u64,
        patch: OrderPatch,
    ) -> Result<Order, OrdersError> {
        let mut ledger = self.inner.ledger.write();
        let order = ledger.owned_mut(order_id, user_id)?;

        if let Some(status) = patch.status {
            order.status = status;
        }
        if let Some(priority) = patch.priority {
            order.priority = priority;
        }
        if let Some(due_date) = patch.due_date {
            order.due_date = due_date;
        }
        order.updated_at = time::now();
        let updated = order.clone();

        ledger.refresh_analytics(user_id, &self.inner.analytics_ids);
        debug!(status = %updated.status, "Order updated");
        Ok(updated)
    }

    /// # Errors
    /// [`OrdersError::NotFound`], [`OrdersError::Forbidden`], or [`OrdersError::InvalidState`]
    /// for delivered and already cancelled orders.
    #[instrument(skip(self))]
    pub fn cancel(&self, order_id: &str, user_id: u64) -> Result<Order, OrdersError> {
        let mut ledger = self.inner.ledger.write();
        let order = ledger.owned_mut(order_id, user_id)?;

        let refusal = match order.status {
            OrderStatus::Delivered => Some("Cannot cancel a delivered order"),
            OrderStatus::Cancelled => Some("Order is already cancelled"),
            OrderStatus::Pending | OrderStatus::InTransit => None,
        };
        if let Some(message) = refusal {
            return Err(OrdersError::state(message));
        }

        order.status = OrderStatus::Cancelled;
        order.updated_at = time::now();
        let cancelled = order.clone();

        ledger.refresh_analytics(user_id, &self.inner.analytics_ids);
        info!("Order cancelled");
        Ok(cancelled)
    }

    /// # Errors
    /// [`OrdersError::NotFound`] or [`OrdersError::Forbidden`].
    #[instrument(skip(self))]
    pub fn delete(&self, order_id: &str, user_id: u64) -> Result<(), OrdersError> {
        let mut ledger = self.inner.ledger.write();
        let id = ledger.owned_mut(order_id, user_id)?.id;

        ledger.orders.remove(&id);
        ledger.by_order_id.remove(order_id);
        ledger.refresh_analytics(user_id, &self.inner.analytics_ids);
        info!("Order deleted");
        Ok(())
    }

    /// Moves an order to `status` on behalf of another slice; no ownership check.
    ///
    /// Returns `None` when the order does not exist.
    #[instrument(skip(self))]
    pub fn set_status(&self, order_id: &str, status: OrderStatus) -> Option<Order> {
        let mut ledger = self.inner.ledger.write();
        let order = ledger.get_mut(order_id)?;
        order.status = status;
        order.updated_at = time::now();
        let updated = order.clone();

        ledger.refresh_analytics(updated.user_id, &self.inner.analytics_ids);
        debug!("Order status propagated");
        Some(updated)
    }

    #[must_use]
    pub fn owner_of(&self, order_id: &str) -> Option<u64> {
        self.inner.ledger.read().get(order_id).map(|order| order.user_id)
    }

    pub fn stats(&self, user_id: u64) -> OrderStats {
        self.tally(user_id).into()
    }

    /// CSV of the user's orders, narrowed by `filter`.
    pub fn export_csv(&self, user_id: u64, filter: &OrderFilter) -> String {
        let ledger = self.inner.ledger.read();
        export::to_csv(ledger.of_user(user_id).filter(|order| filter.matches(order)))
    }

    pub fn dashboard(&self, user_id: u64) -> DashboardStats {
        self.tally(user_id).into()
    }

    /// # Errors
    /// [`OrdersError::NotFound`] until the user's first order mutation.
    pub fn user_analytics(&self, user_id: u64) -> Result<OrderAnalytics, OrdersError> {
        self.inner.ledger.read().analytics.get(&user_id).cloned().ok_or_else(|| {
            OrdersError::NotFound { message: "Analytics not found".into(), context: None }
        })
    }

    pub fn status_breakdown(&self, user_id: u64) -> StatusBreakdown {
        self.tally(user_id).into()
    }

    pub fn priority_breakdown(&self, user_id: u64) -> PriorityBreakdown {
        self.inner.ledger.read().of_user(user_id).collect()
    }

    pub fn destination_breakdown(&self, user_id: u64) -> DestinationBreakdown {
        let ledger = self.inner.ledger.read();
        DestinationBreakdown::top(ledger.of_user(user_id), self.inner.top_destinations)
    }

    pub fn value_metrics(&self, user_id: u64) -> ValueMetrics {
        self.tally(user_id).into()
    }

    fn tally(&self, user_id: u64) -> Tally {
        Tally::of(self.inner.ledger.read().of_user(user_id))
    }
}
