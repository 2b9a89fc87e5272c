//! CSV rendering of order lists.

use crate::model::Order;
use std::borrow::Cow;

pub const CSV_HEADER: &str = "Order ID,Status,Origin,Destination,Weight,Priority,Value,Date";
pub const CSV_FILE_NAME: &str = "orders.csv";

/// Quotes a field containing a comma, quote or line break, doubling inner quotes.
#[must_use]
pub fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Header plus one line per order, `\n` terminated.
pub fn to_csv<'a>(orders: impl IntoIterator<Item = &'a Order>) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for order in orders {
        let status: &'static str = order.status.into();
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            escape(&order.order_id),
            escape(status),
            escape(&order.origin),
            escape(&order.destination),
            order.weight,
            escape(order.priority.as_str()),
            order.value,
            order.created_at.format("%Y-%m-%d"),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields_are_untouched() {
        assert_eq!(escape("Mumbai"), "Mumbai");
    }

    #[test]
    fn special_fields_are_quoted() {
        assert_eq!(escape("Paris, FR"), "\"Paris, FR\"");
        assert_eq!(escape("the \"big\" one"), "\"the \"\"big\"\" one\"");
        assert_eq!(escape("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn one_terminated_line_per_order() {
        use chrono::TimeZone;
        use sledger_domain::vocabulary::{OrderStatus, Priority};

        let created_at = chrono::Utc.with_ymd_and_hms(2030, 1, 15, 9, 30, 0).unwrap();
        let order = Order {
            id: 1,
            order_id: "ORD-AB23CD45".to_owned(),
            user_id: 1,
            origin: "Mumbai".to_owned(),
            destination: "Paris, FR".to_owned(),
            weight: 2.5,
            priority: Priority::High,
            status: OrderStatus::InTransit,
            due_date: created_at,
            value: 250.0,
            created_at,
            updated_at: created_at,
        };

        let csv = to_csv([&order, &order]);
        let expected_line = "ORD-AB23CD45,In Transit,Mumbai,\"Paris, FR\",2.5,high,250,2030-01-15\n";
        assert_eq!(csv, format!("{CSV_HEADER}\n{expected_line}{expected_line}"));
    }
}
