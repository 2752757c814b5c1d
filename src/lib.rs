//! Anchorprint: stable visitor ID derivation from locally observable signals
//!
//! Pipeline: signal bag → anchor builder → canonical encoder → stable hash → visitor ID.
//! The audio digest is the one asynchronous signal; everything else is plain data.

pub mod core;
pub mod types;

// =============================================================================
// AUDIO ACQUISITION BUDGETS [C]
// =============================================================================

/// Maximum suspended-state retries once finalize has been requested
pub const RENDER_RETRY_MAX_COUNT: u32 = 3;

/// Delay between suspended-state retries (milliseconds)
pub const RENDER_RETRY_DELAY_MS: u64 = 500;

/// Maximum wait for a running render after finalize (milliseconds)
pub const RUNNING_MAX_AWAIT_MS: u64 = 500;

/// Total running time considered sufficient before timing out (milliseconds)
/// Measured from the instant the render first reached the running state
pub const RUNNING_SUFFICIENT_TIME_MS: u64 = 5000;

// =============================================================================
// RENDER GEOMETRY [C]
// =============================================================================

/// Offline render sample rate (Hz)
pub const RENDER_SAMPLE_RATE: u32 = 44_100;

/// Total samples rendered per acquisition
pub const RENDER_BUFFER_SAMPLES: usize = 5000;

/// First sample of the digest window (the head of the buffer is still settling)
pub const DIGEST_FROM_SAMPLE: usize = 4500;

/// One past the last sample of the digest window
pub const DIGEST_TO_SAMPLE: usize = 5000;

// =============================================================================
// ENGINE VERSION GATES [C]
// =============================================================================

/// First WebKit engine version that starts audio contexts outside a user gesture
pub const WEBKIT_SUSPEND_FIXED_VERSION: u32 = 606;

/// First WebKit engine version known to inject anti-fingerprinting noise
pub const WEBKIT_NOISE_VERSION: u32 = 616;

// =============================================================================
// DIGEST SHAPE [C]
// =============================================================================

/// Length of a stable hash digest (hex characters)
pub const STABLE_HASH_HEX_LEN: usize = 16;

/// Length of a visitor ID (hex characters)
pub const VISITOR_ID_LEN: usize = 22;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
