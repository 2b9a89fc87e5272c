//! UTC timestamps.
//!
//! Client-supplied dates (`due_date`, `estimated_delivery`) are accepted as RFC 3339, as a naive
//! `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC) or as a bare `YYYY-MM-DD` (midnight UTC). They are
//! always written back as RFC 3339.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Parses any of the accepted date shapes.
#[must_use]
pub fn parse_lenient(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `#[serde(deserialize_with = "lenient")]` for required timestamps.
///
/// # Errors
/// Fails on strings matching none of the accepted shapes.
pub fn lenient<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_lenient(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid datetime '{raw}'")))
}

/// `#[serde(default, deserialize_with = "lenient_opt")]` for optional timestamps.
///
/// # Errors
/// Fails on strings matching none of the accepted shapes.
pub fn lenient_opt<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|raw| {
            parse_lenient(&raw)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid datetime '{raw}'")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn accepts_three_shapes() {
        let full = parse_lenient("2025-03-01T10:30:00+02:00").unwrap();
        assert_eq!(full.hour(), 8);

        let naive = parse_lenient("2025-03-01T10:30:00.250").unwrap();
        assert_eq!(naive.hour(), 10);

        let date = parse_lenient(" 2025-03-01 ").unwrap();
        assert_eq!((date.day(), date.hour()), (1, 0));

        assert!(parse_lenient("next tuesday").is_none());
    }

    #[test]
    fn optional_field_deserializes() {
        #[derive(Deserialize)]
        struct Patch {
            #[serde(default, deserialize_with = "lenient_opt")]
            due: Option<DateTime<Utc>>,
        }

        let patch: Patch = serde_json::from_str(r#"{"due":"2025-01-02"}"#).unwrap();
        assert!(patch.due.is_some());
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert!(patch.due.is_none());
    }
}
