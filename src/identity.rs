//! # Identity module
//!
//! ## Description
//! Canonical auto-generated edge ids have the shape `e<N>`, `N` a positive base-10
//! integer without a leading zero. [`IdentityCounter`] owns the monotonic counter
//! that drives generation and the compare-and-swap catch-up used whenever a caller
//! supplies an explicit id that happens to land in canonical form.
use std::sync::atomic::{AtomicU64, Ordering};

// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * CANONICAL ID PARSING                                                             *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *

/// Parse `id` as a canonical auto-generated edge id (`e` followed by a positive
/// base-10 integer, no leading zero) and return its numeric value. Returns `None`
/// for anything else, including overflow, a leading zero, or `e0`.
pub fn parse_canonical(id: &str) -> Option<u64> {
    let digits = id.strip_prefix('e')?;
    if digits.is_empty() || digits == "0" {
        return None;
    }
    if digits.starts_with('0') {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u64>().ok()
}

/// Format the canonical auto-generated id for counter value `n`.
pub fn format_canonical(n: u64) -> String {
    format!("e{n}")
}

// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * IDENTITY COUNTER                                                                  *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *

/// # Monotonic edge-id counter
///
/// ## Description
/// Tracks the largest `N` ever observed for a canonical `e<N>` id, whether
/// produced by auto-generation or supplied explicitly by a caller. The next
/// auto-generated id is always strictly greater than every `N` seen so far.
#[derive(Debug, Default)]
pub struct IdentityCounter(AtomicU64);

impl IdentityCounter {
    pub fn new() -> Self {
        Self(AtomicU64::new(0))
    }

    /// Restore a counter to a previously observed raw value (used by clones and
    /// derived views to carry the source graph's counter forward unchanged).
    pub fn from_raw(value: u64) -> Self {
        Self(AtomicU64::new(value))
    }

    /// Current raw counter value.
    pub fn load(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Reserve and return the next canonical id, e.g. `"e7"`.
    pub fn next_canonical(&self) -> String {
        let n = self.0.fetch_add(1, Ordering::SeqCst) + 1;
        format_canonical(n)
    }

    /// Advance the counter to at least `n` without ever decreasing it. Uses a
    /// compare-and-swap loop so concurrent catch-ups from different threads never
    /// regress each other.
    pub fn advance_to_at_least(&self, n: u64) {
        let mut current = self.0.load(Ordering::SeqCst);
        while current < n {
            match self.0.compare_exchange_weak(current, n, Ordering::SeqCst, Ordering::SeqCst) {
                Ok(_) => break,
                Err(observed) => current = observed,
            }
        }
    }

    /// If `id` is in canonical form, advance the counter to catch up with it.
    pub fn observe(&self, id: &str) {
        if let Some(n) = parse_canonical(id) {
            self.advance_to_at_least(n);
        }
    }

    /// Unconditionally reset the counter to zero. Only safe to call while
    /// holding an exclusive lock over every operation that could otherwise
    /// race an auto-id reservation (see `Graph::clear`).
    pub fn hard_reset(&self) {
        self.0.store(0, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_parsing_accepts_valid_forms() {
        assert_eq!(parse_canonical("e1"), Some(1));
        assert_eq!(parse_canonical("e42"), Some(42));
    }

    #[test]
    fn canonical_parsing_rejects_invalid_forms() {
        assert_eq!(parse_canonical(""), None);
        assert_eq!(parse_canonical("e"), None);
        assert_eq!(parse_canonical("e0"), None);
        assert_eq!(parse_canonical("e01"), None);
        assert_eq!(parse_canonical("stable-1"), None);
        assert_eq!(parse_canonical("E1"), None);
        assert_eq!(parse_canonical("e-1"), None);
        assert_eq!(parse_canonical("e1.5"), None);
        assert_eq!(parse_canonical("e99999999999999999999999999"), None);
    }

    #[test]
    fn counter_generates_monotonically() {
        let counter = IdentityCounter::new();
        assert_eq!(counter.next_canonical(), "e1");
        assert_eq!(counter.next_canonical(), "e2");
    }

    #[test]
    fn observe_advances_counter_for_explicit_canonical_id() {
        let counter = IdentityCounter::new();
        counter.observe("e7");
        assert_eq!(counter.next_canonical(), "e8");
    }

    #[test]
    fn observe_ignores_non_canonical_id() {
        let counter = IdentityCounter::new();
        counter.observe("stable-1");
        assert_eq!(counter.next_canonical(), "e1");
    }

    #[test]
    fn advance_never_decreases() {
        let counter = IdentityCounter::new();
        counter.advance_to_at_least(10);
        counter.advance_to_at_least(3);
        assert_eq!(counter.load(), 10);
    }
}
