//! Stable hash: deterministic, non-cryptographic, fixed-length
//!
//! Two independent 32-bit multiplicative-mix lanes, seeded with distinct
//! constants folded with the input length, then cross-pollinated in the
//! finalizer so a change anywhere in the input tends to flip bits in both
//! halves. Output is the two lanes as 8 hex digits each.
//!
//! This exists purely for compactness and determinism of a low-stakes
//! fingerprint; no preimage or collision resistance is claimed.

use serde_json::Value;

use crate::core::canonical_string;

/// Lane A seed
const SEED_LANE_A: u32 = 0x9E37_79B9;
/// Lane B seed
const SEED_LANE_B: u32 = 0x85EB_CA6B;
/// Lane A fold multiplier
const FOLD_PRIME_A: u32 = 0x0100_0193;
/// Lane B fold multiplier
const FOLD_PRIME_B: u32 = 0xCC9E_2D51;
/// Finalizer multipliers
const FINAL_MIX_A: u32 = 0xC2B2_AE35;
const FINAL_MIX_B: u32 = 0x27D4_EB2F;

/// Hash a string into 16 lowercase hex characters
///
/// Input is folded in as UTF-16 code units so the digest is portable across
/// hosts that index strings that way.
pub fn stable_hash(input: &str) -> String {
    let units: Vec<u16> = input.encode_utf16().collect();
    let len = units.len() as u32;

    let mut h1 = SEED_LANE_A ^ len;
    let mut h2 = SEED_LANE_B ^ len;

    for &unit in &units {
        let c = u32::from(unit);
        h1 = (h1 ^ c).wrapping_mul(FOLD_PRIME_A);
        h1 ^= h1 >> 15;
        h2 = (h2 ^ c).wrapping_mul(FOLD_PRIME_B);
        h2 ^= h2 >> 13;
    }

    // Cross-pollinate: each lane folds in a rotation of the other's
    // pre-final value.
    let (a, b) = (h1, h2);
    h1 ^= b.rotate_left(13);
    h1 = h1.wrapping_mul(FINAL_MIX_A);
    h1 ^= h1 >> 16;
    h2 ^= a.rotate_left(7);
    h2 = h2.wrapping_mul(FINAL_MIX_B);
    h2 ^= h2 >> 15;

    format!("{:08x}{:08x}", h1, h2)
}

/// Hash a value tree via its canonical form
pub fn stable_hash_value(value: &Value) -> String {
    stable_hash(&canonical_string(value))
}

// =============================================================================
// TESTS
// =============================================================================
