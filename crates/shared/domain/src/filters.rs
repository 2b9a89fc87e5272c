use crate::vocabulary::OrderStatus;
use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use strum::IntoEnumIterator;

bitflags! {
    /// Set of order statuses an order list is narrowed to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusFilter: u8 {
        const PENDING = 1 << 0;
        const IN_TRANSIT = 1 << 1;
        const DELIVERED = 1 << 2;
        const CANCELLED = 1 << 3;

        const ALL = Self::PENDING.bits()
            | Self::IN_TRANSIT.bits()
            | Self::DELIVERED.bits()
            | Self::CANCELLED.bits();
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::ALL
    }
}

impl StatusFilter {
    #[must_use]
    pub const fn matches(self, status: OrderStatus) -> bool {
        self.contains(Self::from_status(status))
    }

    #[must_use]
    pub const fn from_status(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Pending => Self::PENDING,
            OrderStatus::InTransit => Self::IN_TRANSIT,
            OrderStatus::Delivered => Self::DELIVERED,
            OrderStatus::Cancelled => Self::CANCELLED,
        }
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        Self::from_status(status)
    }
}

/// `"all"`, `"*"` or an empty string select everything; otherwise a comma separated list of
/// status names (case-insensitive). Unknown names select nothing.
impl From<&str> for StatusFilter {
    fn from(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == "*" || raw.eq_ignore_ascii_case("all") {
            return Self::ALL;
        }

        raw.split(',')
            .filter_map(|name| OrderStatus::from_str(name.trim()).ok())
            .fold(Self::empty(), |acc, status| acc | Self::from_status(status))
    }
}

impl Serialize for StatusFilter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if *self == Self::ALL {
            return serializer.serialize_str("all");
        }
        let names: Vec<&'static str> = OrderStatus::iter()
            .filter(|status| self.matches(*status))
            .map(Into::into)
            .collect();
        serializer.serialize_str(&names.join(","))
    }
}

impl<'de> Deserialize<'de> for StatusFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from(raw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selects_every_status() {
        for raw in ["all", "ALL", "", "*"] {
            assert_eq!(StatusFilter::from(raw), StatusFilter::ALL);
        }
    }

    #[test]
    fn names_are_case_insensitive() {
        let filter = StatusFilter::from("in transit, Delivered");
        assert!(filter.matches(OrderStatus::InTransit));
        assert!(filter.matches(OrderStatus::Delivered));
        assert!(!filter.matches(OrderStatus::Pending));
    }

    #[test]
    fn unknown_status_selects_nothing() {
        assert!(StatusFilter::from("Lost").is_empty());
    }
}
