//! Rule-based delivery estimate.
//!
//! Starting from a three-day, low-risk baseline the rules run in a fixed order; the critical
//! rule *assigns* while the weight and international rules *add*, so reordering changes results:
//!
//! | rule | days | risk |
//! |---|---|---|
//! | baseline | `3` | Low |
//! | priority `critical` | `= 1` | Medium |
//! | weight `> 50` kg | `+ 2` | High |
//! | type `international` | `+ 4` | High |

use crate::descriptor::ShipmentDescriptor;
use sledger_derive::api_model;
use sledger_domain::vocabulary::{Priority, ShipmentType};

pub const BASE_DAYS: u32 = 3;
pub const CRITICAL_DAYS: u32 = 1;
/// Strictly above this many kilograms a shipment counts as heavy.
pub const HEAVY_WEIGHT_KG: f64 = 50.0;
pub const HEAVY_EXTRA_DAYS: u32 = 2;
pub const INTERNATIONAL_EXTRA_DAYS: u32 = 4;

/// Qualitative chance that a shipment arrives late.
#[api_model(rename_all = "PascalCase")]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    /// Projected delivery duration, at least one day.
    pub estimated_days: u32,
    pub risk_level: RiskLevel,
}

/// Estimates delivery days and delay risk. Total and pure: equal inputs give equal outputs.
#[must_use]
pub fn estimate(descriptor: &ShipmentDescriptor) -> RiskAssessment {
    let mut estimated_days = BASE_DAYS;
    let mut risk_level = RiskLevel::Low;

    match descriptor.priority {
        Priority::Critical => {
            estimated_days = CRITICAL_DAYS;
            risk_level = RiskLevel::Medium;
        },
        // Unrecognized tags never count as critical.
        Priority::Low | Priority::Medium | Priority::High | Priority::Other(_) => {},
    }

    if descriptor.weight > HEAVY_WEIGHT_KG {
        estimated_days += HEAVY_EXTRA_DAYS;
        risk_level = RiskLevel::High;
    }

    match descriptor.shipment_type {
        ShipmentType::International => {
            estimated_days += INTERNATIONAL_EXTRA_DAYS;
            risk_level = RiskLevel::High;
        },
        ShipmentType::Standard | ShipmentType::Express | ShipmentType::Other(_) => {},
    }

    RiskAssessment { estimated_days, risk_level }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(priority: &str, weight: f64, shipment_type: &str) -> (u32, RiskLevel) {
        let descriptor =
            ShipmentDescriptor::new(priority, weight, ShipmentType::from(shipment_type));
        let RiskAssessment { estimated_days, risk_level } = estimate(&descriptor);
        (estimated_days, risk_level)
    }

    #[test]
    fn baseline() {
        assert_eq!(run("low", 0.0, "standard"), (3, RiskLevel::Low));
    }

    #[test]
    fn critical_assigns() {
        assert_eq!(run("critical", 0.0, "standard"), (1, RiskLevel::Medium));
    }

    #[test]
    fn heavy_adds_two_days() {
        assert_eq!(run("low", 60.0, "standard"), (5, RiskLevel::High));
    }

    #[test]
    fn international_adds_four_days() {
        assert_eq!(run("low", 0.0, "international"), (7, RiskLevel::High));
    }

    #[test]
    fn every_rule_fires_in_order() {
        assert_eq!(run("critical", 60.0, "international"), (7, RiskLevel::High));
        assert_eq!(run("critical", 60.0, "standard"), (3, RiskLevel::High));
    }

    #[test]
    fn fifty_kilograms_is_not_heavy() {
        assert_eq!(run("medium", 50.0, "standard"), (3, RiskLevel::Low));
        assert_eq!(run("medium", 50.01, "standard"), (5, RiskLevel::High));
    }

    #[test]
    fn unknown_tags_fall_through() {
        assert_eq!(run("urgent", 0.0, "air"), (3, RiskLevel::Low));
        assert_eq!(run("Critical", 0.0, "International"), (3, RiskLevel::Low));
    }

    #[test]
    fn wire_names() {
        let json = serde_json::to_value(estimate(&ShipmentDescriptor::from(Priority::Critical)))
            .unwrap();
        assert_eq!(json, serde_json::json!({"estimated_days": 1, "risk_level": "Medium"}));
    }
}
