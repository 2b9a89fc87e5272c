use proptest::prelude::*;
use sledger_domain::vocabulary::{Priority, ShipmentType};
use sledger_forecast::{RiskLevel, ShipmentDescriptor, estimate};

fn priority() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Low),
        Just(Priority::Medium),
        Just(Priority::High),
        Just(Priority::Critical),
        "[A-Za-z]{0,12}".prop_map(|raw| Priority::from(raw.as_str())),
    ]
}

fn shipment_type() -> impl Strategy<Value = ShipmentType> {
    prop_oneof![
        Just(ShipmentType::Standard),
        Just(ShipmentType::Express),
        Just(ShipmentType::International),
        "[A-Za-z]{0,12}".prop_map(|raw| ShipmentType::from(raw.as_str())),
    ]
}

/// Free text plus the spellings `f64::from_str` reads as infinite or NaN.
fn form_weight() -> impl Strategy<Value = String> {
    prop_oneof![".{0,16}", " ?[+-]?(inf|INF|Inf|infinity|Infinity|INFINITY|NaN|nan) ?"]
}

fn descriptor() -> impl Strategy<Value = ShipmentDescriptor> {
    (priority(), 0.0f64..10_000.0, shipment_type()).prop_map(|(priority, weight, shipment_type)| {
        ShipmentDescriptor { priority, weight, shipment_type }
    })
}

proptest! {
    #[test]
    fn estimate_is_bounded(descriptor in descriptor()) {
        let assessment = estimate(&descriptor);
        prop_assert!((1..=9).contains(&assessment.estimated_days));
    }

    #[test]
    fn estimate_is_idempotent(descriptor in descriptor()) {
        prop_assert_eq!(estimate(&descriptor), estimate(&descriptor.clone()));
    }

    #[test]
    fn non_critical_light_domestic_is_baseline(
        priority in priority().prop_filter("non-critical", |p| !p.is_critical()),
        weight in 0.0f64..=50.0,
    ) {
        let assessment = estimate(&ShipmentDescriptor::new(priority, weight, ShipmentType::Standard));
        prop_assert_eq!(assessment.estimated_days, 3);
        prop_assert_eq!(assessment.risk_level, RiskLevel::Low);
    }

    #[test]
    fn international_is_always_high(descriptor in descriptor()) {
        let descriptor = ShipmentDescriptor { shipment_type: ShipmentType::International, ..descriptor };
        let assessment = estimate(&descriptor);
        prop_assert_eq!(assessment.risk_level, RiskLevel::High);
        prop_assert!(assessment.estimated_days >= 5);
    }

    #[test]
    fn form_input_never_panics(weight in form_weight(), priority in ".{0,16}") {
        let descriptor = ShipmentDescriptor::from_form(&weight, &priority);
        prop_assert!(descriptor.weight.is_finite());
        prop_assert_eq!(&descriptor.shipment_type, &ShipmentType::Standard);
        let _ = estimate(&descriptor);
    }
}
