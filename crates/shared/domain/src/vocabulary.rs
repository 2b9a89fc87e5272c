//! Shipment and order vocabularies.
//!
//! [`Priority`] and [`ShipmentType`] arrive from free-form inputs (form selects, JSON bodies) and
//! are lenient: an unrecognized tag is kept verbatim in `Other` instead of failing. Matching is
//! exact and case-sensitive, so `"Critical"` is *not* [`Priority::Critical`].
//!
//! [`OrderStatus`] and [`ShipmentStatus`] are lifecycle states owned by the service and are
//! strict: unknown values are rejected at deserialization.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Order urgency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
    /// Any other tag, kept as received.
    Other(String),
}

impl Priority {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self, Self::Critical)
    }
}

impl From<&str> for Priority {
    fn from(raw: &str) -> Self {
        match raw {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "critical" => Self::Critical,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Transport class of a shipment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ShipmentType {
    #[default]
    Standard,
    Express,
    International,
    /// Any other tag, kept as received; treated as domestic.
    Other(String),
}

impl ShipmentType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
            Self::International => "international",
            Self::Other(raw) => raw,
        }
    }

    #[must_use]
    pub const fn is_international(&self) -> bool {
        matches!(self, Self::International)
    }
}

impl From<&str> for ShipmentType {
    fn from(raw: &str) -> Self {
        match raw {
            "standard" => Self::Standard,
            "express" => Self::Express,
            "international" => Self::International,
            other => Self::Other(other.to_owned()),
        }
    }
}

macro_rules! lenient_tag {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Ok(Self::from(raw.as_str()))
            }
        }
    };
}

lenient_tag!(Priority);
lenient_tag!(ShipmentType);

/// Order lifecycle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Pending")]
    #[strum(serialize = "Pending")]
    Pending,
    #[serde(rename = "In Transit")]
    #[strum(serialize = "In Transit")]
    InTransit,
    #[serde(rename = "Delivered")]
    #[strum(serialize = "Delivered")]
    Delivered,
    #[serde(rename = "Cancelled")]
    #[strum(serialize = "Cancelled")]
    Cancelled,
}

/// Shipment lifecycle as tracked on the ledger.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    #[default]
    Created,
    PickedUp,
    InTransit,
    OutForDelivery,
    Delivered,
    Delayed,
    Cancelled,
}
