//! Top-level collection: one `get()` per session
//!
//! Finalizes the deferred audio signal (absorbing its recognized failures
//! into the timeout sentinel), builds the anchor, derives the ID. A missing
//! signal never fails the call; only an unexpected internal audio error does.

use chrono::Utc;
use tracing::debug;

use crate::core::anchor::build_anchor;
use crate::core::visitor::derive_visitor_id;
use crate::types::{AudioError, AudioSignal, Fingerprint, SignalBag};

/// Compute the fingerprint for one collection session
pub async fn get(mut bag: SignalBag) -> Result<Fingerprint, AudioError> {
    bag.audio = match bag.audio.take() {
        Some(AudioSignal::Deferred(handle)) => {
            let outcome = handle.finalize().await?;
            debug!(?outcome, "audio acquisition finalized");
            Some(outcome.into())
        }
        other => other,
    };

    let anchor = build_anchor(&bag);
    let visitor_id = derive_visitor_id(&anchor);
    Ok(Fingerprint {
        anchor,
        visitor_id,
        collected_at: Utc::now(),
    })
}

// =============================================================================
// TESTS
// =============================================================================
