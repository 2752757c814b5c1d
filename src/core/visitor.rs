//! Visitor ID derivation
//!
//! Canonicalize the anchor, extend the stable hash by chaining a second
//! digest over the first, and truncate to 22 lowercase hex characters.
//! Byte-identical canonical anchors yield identical IDs; nothing else is
//! guaranteed.

use crate::core::hash::stable_hash;
use crate::types::AnchorPayload;
use crate::VISITOR_ID_LEN;

/// Derive the visitor ID from an anchor payload
pub fn derive_visitor_id(anchor: &AnchorPayload) -> String {
    visitor_id_from_canonical(&anchor.canonical())
}

/// Derive the ID from an already-canonicalized anchor string
pub(crate) fn visitor_id_from_canonical(canonical: &str) -> String {
    let first = stable_hash(canonical);
    let second = stable_hash(&format!("{first}{canonical}"));
    let mut id = first;
    id.push_str(&second);
    id.truncate(VISITOR_ID_LEN);
    id
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::types::AnchorPayload;

    fn anchor_with_concurrency(n: u32) -> AnchorPayload {
        AnchorPayload {
            hardware_concurrency: Some(n),
            ..Default::default()
        }
    }

    #[test]
    fn test_id_is_22_lowercase_hex_characters() {
        for anchor in [AnchorPayload::default(), anchor_with_concurrency(4)] {
            let id = derive_visitor_id(&anchor);
            assert_eq!(id.len(), VISITOR_ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
            assert_eq!(id, id.to_lowercase());
        }
    }

    #[test]
    fn test_identical_anchors_yield_identical_ids() {
        let a = anchor_with_concurrency(4);
        let b = anchor_with_concurrency(4);
        assert_eq!(derive_visitor_id(&a), derive_visitor_id(&b));
    }

    #[test]
    fn test_concurrency_change_changes_the_id() {
        let four = derive_visitor_id(&anchor_with_concurrency(4));
        let eight = derive_visitor_id(&anchor_with_concurrency(8));
        assert_ne!(four, eight);
    }

    #[test]
    fn test_known_ids() {
        // Recorded reference IDs for the derivation chain.
        assert_eq!(visitor_id_from_canonical("{}"), "6fd7e2ac2588c8cf7afa0c");
        assert_eq!(
            derive_visitor_id(&anchor_with_concurrency(4)),
            "a6109d099b37d53e0eb8dc"
        );
        assert_eq!(
            derive_visitor_id(&anchor_with_concurrency(8)),
            "53f1288418cca0c81fb265"
        );
    }
}
