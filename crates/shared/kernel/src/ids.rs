//! Identifier generation.

use sledger_domain::constants::{ORDER_ID_LEN, ORDER_ID_PREFIX};
use std::sync::atomic::{AtomicU64, Ordering};

/// Upper-case alphabet without look-alikes (no `0`, `1`, `I`, `O`).
pub const ORDER_ALPHABET: [char; 32] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Fresh public order id: `ORD-` followed by eight characters of [`ORDER_ALPHABET`].
#[must_use]
pub fn order_id() -> String {
    format!("{ORDER_ID_PREFIX}{}", nanoid::nanoid!(ORDER_ID_LEN, &ORDER_ALPHABET))
}

/// Checks the shape produced by [`order_id`]. Ids minted elsewhere (upper-case hex) also pass.
#[must_use]
pub fn is_order_id(candidate: &str) -> bool {
    candidate.strip_prefix(ORDER_ID_PREFIX).is_some_and(|tail| {
        tail.len() == ORDER_ID_LEN
            && tail.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    })
}

/// Monotonic numeric id source starting at 1.
#[derive(Debug)]
pub struct IdSequence(AtomicU64);

impl Default for IdSequence {
    fn default() -> Self {
        Self(AtomicU64::new(1))
    }
}

impl IdSequence {
    /// Returns the next id; never yields the same value twice.
    pub fn next_id(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_ids_use_safe_alphabet() {
        let id = order_id();
        assert!(is_order_id(&id), "{id} should validate");
        assert!(id[ORDER_ID_PREFIX.len()..].chars().all(|c| ORDER_ALPHABET.contains(&c)));
    }

    #[test]
    fn order_id_shape_is_checked() {
        assert!(is_order_id("ORD-3F9A0B1C"));
        assert!(!is_order_id("ORD-3f9a0b1c"));
        assert!(!is_order_id("ORD-123"));
        assert!(!is_order_id("PO-12345678"));
    }

    #[test]
    fn sequence_is_monotonic() {
        let seq = IdSequence::default();
        assert_eq!(seq.next_id(), 1);
        assert_eq!(seq.next_id(), 2);
        assert_eq!(seq.next_id(), 3);
    }
}
