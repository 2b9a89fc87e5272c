use sledger_domain::filters::StatusFilter;
use sledger_domain::vocabulary::{OrderStatus, Priority, ShipmentStatus, ShipmentType};
use serde_json::json;

#[test]
fn lenient_tags_round_trip_unknown_values() {
    let priority: Priority = serde_json::from_value(json!("unknown")).unwrap();
    assert_eq!(priority, Priority::Other("unknown".to_owned()));
    assert_eq!(serde_json::to_value(&priority).unwrap(), json!("unknown"));

    let kind: ShipmentType = serde_json::from_value(json!("international")).unwrap();
    assert!(kind.is_international());
}

#[test]
fn strict_statuses_reject_unknown_values() {
    assert!(serde_json::from_value::<OrderStatus>(json!("Lost")).is_err());
    assert!(serde_json::from_value::<ShipmentStatus>(json!("created")).is_err());

    let status: OrderStatus = serde_json::from_value(json!("In Transit")).unwrap();
    assert_eq!(status, OrderStatus::InTransit);
    assert_eq!(serde_json::to_value(ShipmentStatus::PickedUp).unwrap(), json!("PICKED_UP"));
}

#[test]
fn status_filter_serializes_as_names() {
    assert_eq!(serde_json::to_value(StatusFilter::ALL).unwrap(), json!("all"));

    let filter = StatusFilter::PENDING | StatusFilter::CANCELLED;
    assert_eq!(serde_json::to_value(filter).unwrap(), json!("Pending,Cancelled"));

    let parsed: StatusFilter = serde_json::from_value(json!("pending")).unwrap();
    assert_eq!(parsed, StatusFilter::PENDING);
}
