use crate::model::Order;
use sledger_derive::api_model;
use sledger_domain::filters::StatusFilter;

/// Narrowing applied to order lists and exports.
#[api_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct OrderFilter {
    /// Case-insensitive substring of the order id or destination.
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>, example = "Pending,In Transit"))]
    pub status: StatusFilter,
}

impl OrderFilter {
    #[must_use]
    pub fn matches(&self, order: &Order) -> bool {
        if !self.status.matches(order.status) {
            return false;
        }

        match self.q.as_deref().map(str::trim).filter(|q| !q.is_empty()) {
            None => true,
            Some(q) => {
                let needle = q.to_lowercase();
                order.order_id.to_lowercase().contains(&needle)
                    || order.destination.to_lowercase().contains(&needle)
            },
        }
    }
}
