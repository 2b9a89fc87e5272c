use crate::error::ShipmentsError;
use crate::ledger::{self, LedgerVerification, OrderLedger, ShipmentSeal};
use crate::model::{DelayReport, NewShipment, Shipment, ShipmentPatch};
use chrono::TimeDelta;
use parking_lot::RwLock;
use sledger_domain::vocabulary::{OrderStatus, ShipmentStatus};
use sledger_forecast::delay::{DelayPredictor, city_coordinates};
use sledger_kernel::ids::IdSequence;
use sledger_kernel::security::OwnershipGuard;
use sledger_kernel::time;
use sledger_orders::OrderBook;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Debug)]
struct RegistryInner {
    /// Keyed by id, which is also creation order.
    shipments: RwLock<BTreeMap<u64, Shipment>>,
    ids: IdSequence,
    orders: OrderBook,
    predictor: DelayPredictor,
    transit_days: u32,
}

/// Shared handle over the shipment repository.
///
/// Locks are taken registry first, order book second; the order book never calls back.
#[derive(Debug, Clone)]
pub struct ShipmentRegistry {
    inner: Arc<RegistryInner>,
}

impl ShipmentRegistry {
    #[must_use]
    pub fn new(orders: OrderBook, predictor: DelayPredictor, transit_days: u32) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                shipments: RwLock::default(),
                ids: IdSequence::default(),
                orders,
                predictor,
                transit_days,
            }),
        }
    }

    /// Registers and seals a shipment, then moves the referenced order (if any) to
    /// `In Transit`.
    #[instrument(skip(self, new), fields(order_id = %new.order_id))]
    pub fn create(&self, new: NewShipment) -> Shipment {
        let now = time::now();
        let source_coords = new.source_coords.or_else(|| city_coordinates(&new.source));
        let dest_coords = new.dest_coords.or_else(|| city_coordinates(&new.destination));

        let mut shipment = Shipment {
            id: self.inner.ids.next_id(),
            order_id: new.order_id,
            source: new.source,
            destination: new.destination,
            source_coords,
            dest_coords,
            distance_km: new.distance_km,
            status: ShipmentStatus::Created,
            blockchain_hash: String::new(),
            sealed_at: now,
            estimated_delivery: now + TimeDelta::days(i64::from(self.inner.transit_days)),
            created_at: now,
            updated_at: now,
        };
        ledger::reseal(&mut shipment, now);

        self.inner.shipments.write().insert(shipment.id, shipment.clone());
        self.inner.orders.set_status(&shipment.order_id, OrderStatus::InTransit);

        info!(shipment_id = shipment.id, hash = %shipment.blockchain_hash, "Shipment created");
        shipment
    }

    /// # Errors
    /// [`ShipmentsError::NotFound`] before [`ShipmentsError::Forbidden`].
    pub fn get(&self, id: u64, user_id: u64) -> Result<Shipment, ShipmentsError> {
        let shipments = self.inner.shipments.read();
        let shipment = shipments.get(&id).ok_or_else(Self::missing)?;
        self.ensure_owner(shipment, user_id)?;
        Ok(shipment.clone())
    }

    /// First shipment of `order_id`.
    ///
    /// # Errors
    /// [`ShipmentsError::NotFound`] when the order has none.
    pub fn by_order(&self, order_id: &str) -> Result<Shipment, ShipmentsError> {
        self.inner
            .shipments
            .read()
            .values()
            .find(|s| s.order_id == order_id)
            .cloned()
            .ok_or_else(|| ShipmentsError::not_found("Shipment not found for order"))
    }

    /// Applies `patch`; a status change reseals, and `DELIVERED` delivers the order.
    ///
    /// # Errors
    /// [`ShipmentsError::NotFound`] or [`ShipmentsError::Forbidden`].
    #[instrument(skip(self, patch))]
    pub fn update(
        &self,
        id: u64,
        user_id: u64,
        patch: ShipmentPatch,
    ) -> Result<Shipment, ShipmentsError> {
        let updated = {
            let mut shipments = self.inner.shipments.write();
            let shipment = shipments.get_mut(&id).ok_or_else(Self::missing)?;
            self.ensure_owner(shipment, user_id)?;

            let now = time::now();
            if let Some(status) = patch.status {
                shipment.status = status;
                ledger::reseal(shipment, now);
            }
            if let Some(estimated_delivery) = patch.estimated_delivery {
                shipment.estimated_delivery = estimated_delivery;
            }
            shipment.updated_at = now;
            shipment.clone()
        };

        if patch.status == Some(ShipmentStatus::Delivered) {
            self.inner.orders.set_status(&updated.order_id, OrderStatus::Delivered);
        }
        debug!(status = %updated.status, "Shipment updated");
        Ok(updated)
    }

    /// Sets the status and reseals; no ownership check and no order propagation.
    ///
    /// # Errors
    /// [`ShipmentsError::NotFound`].
    #[instrument(skip(self))]
    pub fn patch_status(
        &self,
        id: u64,
        status: ShipmentStatus,
    ) -> Result<Shipment, ShipmentsError> {
        let mut shipments = self.inner.shipments.write();
        let shipment = shipments.get_mut(&id).ok_or_else(Self::missing)?;

        let now = time::now();
        shipment.status = status;
        ledger::reseal(shipment, now);
        shipment.updated_at = now;
        Ok(shipment.clone())
    }

    /// # Errors
    /// [`ShipmentsError::NotFound`], or [`ShipmentsError::MissingCoordinates`] when either end
    /// of the route is unknown.
    pub fn predict_delay(&self, id: u64) -> Result<DelayReport, ShipmentsError> {
        let shipment = self.find(id)?;
        let (Some(from), Some(to)) = (shipment.source_coords, shipment.dest_coords) else {
            return Err(ShipmentsError::MissingCoordinates {
                message: "Shipment coordinates not available for delay prediction".into(),
                context: None,
            });
        };

        let prediction = self.inner.predictor.predict(from, to, &shipment.destination);
        Ok(DelayReport {
            shipment_id: shipment.id,
            order_id: shipment.order_id,
            source: shipment.source,
            destination: shipment.destination,
            prediction,
            estimated_delivery: shipment.estimated_delivery,
        })
    }

    /// # Errors
    /// [`ShipmentsError::NotFound`].
    pub fn verify(&self, id: u64) -> Result<LedgerVerification, ShipmentsError> {
        let report = ledger::verify(&self.find(id)?);
        if report.tampered {
            tracing::warn!(shipment_id = id, "Ledger seal mismatch");
        }
        Ok(report)
    }

    /// # Errors
    /// [`ShipmentsError::NotFound`].
    pub fn seal(&self, id: u64) -> Result<ShipmentSeal, ShipmentsError> {
        self.find(id).map(|shipment| ShipmentSeal::from(&shipment))
    }

    /// # Errors
    /// [`ShipmentsError::NotFound`] when the order has no shipments.
    pub fn order_ledger(&self, order_id: &str) -> Result<OrderLedger, ShipmentsError> {
        let shipments: Vec<ShipmentSeal> = self
            .inner
            .shipments
            .read()
            .values()
            .filter(|s| s.order_id == order_id)
            .map(ShipmentSeal::from)
            .collect();

        if shipments.is_empty() {
            return Err(ShipmentsError::not_found("No shipments found for order"));
        }
        Ok(OrderLedger {
            order_id: order_id.to_owned(),
            total_shipments: shipments.len(),
            shipments,
        })
    }

    fn find(&self, id: u64) -> Result<Shipment, ShipmentsError> {
        self.inner.shipments.read().get(&id).cloned().ok_or_else(Self::missing)
    }

    fn missing() -> ShipmentsError {
        ShipmentsError::not_found("Shipment not found")
    }

    /// Shipments of orders that no longer exist are readable by anyone.
    fn ensure_owner(&self, shipment: &Shipment, user_id: u64) -> Result<(), ShipmentsError> {
        match self.inner.orders.owner_of(&shipment.order_id) {
            Some(owner) => Ok(OwnershipGuard::ensure(owner, user_id, "Shipment")?),
            None => Ok(()),
        }
    }
}
