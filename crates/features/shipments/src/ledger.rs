//! Integrity seals.
//!
//! A seal is the hex SHA-256 of `id|source|destination|distance_km|status|sealed_at`, with
//! `sealed_at` in RFC 3339 (microseconds, `Z`). The instant is stored next to the seal, so
//! verification recomputes over exactly the same input and only a change to a sealed field
//! breaks it.

use crate::model::Shipment;
use chrono::{DateTime, SecondsFormat, Utc};
use sha2::{Digest, Sha256};
use sledger_derive::api_model;
use sledger_domain::vocabulary::ShipmentStatus;

const INTACT: &str = "Shipment data is intact and has not been tampered with.";
const TAMPERED: &str = "WARNING: Shipment data has been modified. Original hash does not match.";

/// Seals the shipment's current fields at `sealed_at`.
#[must_use]
pub fn seal(shipment: &Shipment, sealed_at: DateTime<Utc>) -> String {
    let payload = format!(
        "{}|{}|{}|{}|{}|{}",
        shipment.id,
        shipment.source,
        shipment.destination,
        shipment.distance_km,
        shipment.status,
        sealed_at.to_rfc3339_opts(SecondsFormat::Micros, true),
    );

    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recomputes the seal and stamps the shipment with it.
pub(crate) fn reseal(shipment: &mut Shipment, now: DateTime<Utc>) {
    shipment.sealed_at = now;
    shipment.blockchain_hash = seal(shipment, now);
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct LedgerVerification {
    pub valid: bool,
    pub stored_hash: String,
    pub current_hash: String,
    pub tampered: bool,
    pub message: String,
    pub shipment_id: u64,
    pub order_id: String,
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub status: ShipmentStatus,
}

#[must_use]
pub fn verify(shipment: &Shipment) -> LedgerVerification {
    let current_hash = seal(shipment, shipment.sealed_at);
    let valid = current_hash == shipment.blockchain_hash;

    LedgerVerification {
        valid,
        stored_hash: shipment.blockchain_hash.clone(),
        current_hash,
        tampered: !valid,
        message: if valid { INTACT } else { TAMPERED }.to_owned(),
        shipment_id: shipment.id,
        order_id: shipment.order_id.clone(),
        status: shipment.status,
    }
}

/// A shipment's seal and the fields it covers.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct ShipmentSeal {
    pub shipment_id: u64,
    pub order_id: String,
    pub blockchain_hash: String,
    #[cfg_attr(feature = "server", schema(value_type = String))]
    pub status: ShipmentStatus,
    pub source: String,
    pub destination: String,
    pub distance_km: u32,
    pub sealed_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Shipment> for ShipmentSeal {
    fn from(s: &Shipment) -> Self {
        Self {
            shipment_id: s.id,
            order_id: s.order_id.clone(),
            blockchain_hash: s.blockchain_hash.clone(),
            status: s.status,
            source: s.source.clone(),
            destination: s.destination.clone(),
            distance_km: s.distance_km,
            sealed_at: s.sealed_at,
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}

/// Every seal of one order, in shipment creation order.
#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct OrderLedger {
    pub order_id: String,
    pub shipments: Vec<ShipmentSeal>,
    pub total_shipments: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use sledger_kernel::time;

    fn shipment() -> Shipment {
        let now = time::now();
        let mut shipment = Shipment {
            id: 4,
            order_id: "ORD-AB23CD45".to_owned(),
            source: "Mumbai".to_owned(),
            destination: "Delhi".to_owned(),
            source_coords: None,
            dest_coords: None,
            distance_km: 1400,
            status: ShipmentStatus::Created,
            blockchain_hash: String::new(),
            sealed_at: now,
            estimated_delivery: now,
            created_at: now,
            updated_at: now,
        };
        reseal(&mut shipment, now);
        shipment
    }

    #[test]
    fn seal_is_sha256_of_pipe_joined_fields() {
        let shipment = shipment();
        let payload = format!(
            "4|Mumbai|Delhi|1400|CREATED|{}",
            shipment.sealed_at.to_rfc3339_opts(SecondsFormat::Micros, true)
        );
        let expected = hex::encode(Sha256::digest(payload.as_bytes()));

        assert_eq!(shipment.blockchain_hash, expected);
        assert_eq!(shipment.blockchain_hash.len(), 64);
    }

    #[test]
    fn untouched_shipment_verifies() {
        let report = verify(&shipment());
        assert!(report.valid);
        assert!(!report.tampered);
        assert_eq!(report.stored_hash, report.current_hash);
        assert_eq!(report.message, INTACT);
    }

    #[test]
    fn edited_field_is_detected() {
        let mut shipment = shipment();
        shipment.destination = "Kolkata".to_owned();

        let report = verify(&shipment);
        assert!(report.tampered);
        assert_ne!(report.stored_hash, report.current_hash);
        assert_eq!(report.message, TAMPERED);
    }

    #[test]
    fn unsealed_fields_do_not_matter() {
        let mut shipment = shipment();
        shipment.estimated_delivery += chrono::TimeDelta::days(3);
        assert!(verify(&shipment).valid);
    }
}
