//! Aggregates over one user's orders.

use crate::model::{Order, OrderStats};
use sledger_derive::api_model;
use sledger_domain::vocabulary::{OrderStatus, Priority};

/// Counters shared by every aggregate; built in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Tally {
    pub(crate) total: usize,
    pub(crate) pending: usize,
    pub(crate) in_transit: usize,
    pub(crate) delivered: usize,
    pub(crate) cancelled: usize,
    pub(crate) value: f64,
}

impl Tally {
    pub(crate) fn of<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        orders.into_iter().fold(Self::default(), |mut tally, order| {
            tally.total += 1;
            tally.value += order.value;
            match order.status {
                OrderStatus::Pending => tally.pending += 1,
                OrderStatus::InTransit => tally.in_transit += 1,
                OrderStatus::Delivered => tally.delivered += 1,
                OrderStatus::Cancelled => tally.cancelled += 1,
            }
            tally
        })
    }

    /// Zero for a user without orders.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn average(&self) -> f64 {
        if self.total == 0 { 0.0 } else { self.value / self.total as f64 }
    }
}

#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    /// Number of orders, shipped or not.
    pub total_shipments: usize,
    pub in_transit: usize,
    pub delivered: usize,
    pub pending: usize,
}

#[api_model]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub delivered: usize,
    pub in_transit: usize,
    pub pending: usize,
}

/// Orders per recognized priority; free-form priorities are not counted.
#[api_model]
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct PriorityBreakdown {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[api_model]
#[derive(Clone, PartialEq, Eq)]
pub struct DestinationCount {
    pub name: String,
    pub orders: usize,
}

#[api_model]
#[derive(Clone, PartialEq, Eq, Default)]
pub struct DestinationBreakdown {
    pub destinations: Vec<DestinationCount>,
}

#[api_model]
#[derive(Clone, Copy, PartialEq)]
pub struct ValueMetrics {
    pub total_value: f64,
    pub average_value: f64,
    pub total_orders: usize,
}

impl From<Tally> for DashboardStats {
    fn from(t: Tally) -> Self {
        Self {
            total_shipments: t.total,
            in_transit: t.in_transit,
            delivered: t.delivered,
            pending: t.pending,
        }
    }
}

impl From<Tally> for StatusBreakdown {
    fn from(t: Tally) -> Self {
        Self { delivered: t.delivered, in_transit: t.in_transit, pending: t.pending }
    }
}

impl From<Tally> for ValueMetrics {
    fn from(t: Tally) -> Self {
        Self { total_value: t.value, average_value: t.average(), total_orders: t.total }
    }
}

impl From<Tally> for OrderStats {
    fn from(t: Tally) -> Self {
        Self {
            total_orders: t.total,
            delivered: t.delivered,
            in_transit: t.in_transit,
            pending: t.pending,
            total_value: t.value,
            average_value: t.average(),
        }
    }
}

impl<'a> FromIterator<&'a Order> for PriorityBreakdown {
    fn from_iter<I: IntoIterator<Item = &'a Order>>(orders: I) -> Self {
        orders.into_iter().fold(Self::default(), |mut acc, order| {
            match order.priority {
                Priority::Critical => acc.critical += 1,
                Priority::High => acc.high += 1,
                Priority::Medium => acc.medium += 1,
                Priority::Low => acc.low += 1,
                Priority::Other(_) => {},
            }
            acc
        })
    }
}

impl DestinationBreakdown {
    /// The `top` most frequent destinations, busiest first; ties keep first-seen order.
    pub fn top<'a>(orders: impl IntoIterator<Item = &'a Order>, top: usize) -> Self {
        let mut counts: Vec<DestinationCount> = Vec::new();
        for order in orders {
            match counts.iter_mut().find(|c| c.name == order.destination) {
                Some(entry) => entry.orders += 1,
                None => counts.push(DestinationCount { name: order.destination.clone(), orders: 1 }),
            }
        }

        // Stable sort keeps first-seen order among equal counts.
        counts.sort_by(|a, b| b.orders.cmp(&a.orders));
        counts.truncate(top);
        Self { destinations: counts }
    }
}
