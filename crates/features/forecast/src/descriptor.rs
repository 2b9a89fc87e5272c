use sledger_derive::api_model;
use sledger_domain::vocabulary::{Priority, ShipmentType};

/// What the estimator looks at: urgency, mass and transport class of one shipment.
///
/// Callers holding an optional descriptor skip estimation entirely; there is no "absent" input.
#[api_model]
#[derive(Clone, PartialEq)]
pub struct ShipmentDescriptor {
    #[cfg_attr(feature = "server", schema(value_type = String, example = "critical"))]
    pub priority: Priority,
    /// Kilograms; zero is valid.
    pub weight: f64,
    #[serde(alias = "shipmentType")]
    #[cfg_attr(feature = "server", schema(value_type = String, example = "international"))]
    pub shipment_type: ShipmentType,
}

impl ShipmentDescriptor {
    pub fn new(priority: impl Into<Priority>, weight: f64, shipment_type: ShipmentType) -> Self {
        Self { priority: priority.into(), weight, shipment_type }
    }

    /// Descriptor for the order-creation form, which only collects weight and priority.
    ///
    /// The weight arrives as typed text: it is trimmed and parsed, and anything that does not
    /// parse to a finite number (`NaN`, `inf`) counts as zero. Form orders always ship `standard`.
    pub fn from_form(weight: &str, priority: &str) -> Self {
        let weight = weight.trim().parse::<f64>().ok().filter(|w| w.is_finite()).unwrap_or(0.0);
        Self { priority: Priority::from(priority), weight, shipment_type: ShipmentType::Standard }
    }
}

impl From<Priority> for ShipmentDescriptor {
    fn from(priority: Priority) -> Self {
        Self { priority, weight: 0.0, shipment_type: ShipmentType::Standard }
    }
}
