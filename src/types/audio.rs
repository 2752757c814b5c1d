//! Audio acquisition result types
//!
//! The acquisition component resolves to exactly one of:
//! - a sentinel (capability absent or environment known-bad), synchronously;
//! - a deferred handle whose `finalize()` commits to waiting;
//! - a plain digest (replayed bags, tests).

use serde::{Deserialize, Serialize};
use serde_json::Number;
use thiserror::Error;
use tokio::sync::{oneshot, watch};

/// Observed state of the offline rendering context after a start attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Render is progressing toward completion
    Running,
    /// Engine refused to start (no user gesture, backgrounded tab, ...)
    Suspended,
}

/// Terminal "could not measure, and here is why" codes
///
/// Sentinels are stable per environment and never retried by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioSentinel {
    /// Engine keeps audio contexts suspended outside a user gesture
    KnownForSuspending,
    /// No offline audio-rendering capability at all
    NotSupported,
    /// Render did not finish within its budget after finalize
    Timeout,
    /// Engine injects anti-fingerprinting noise into the signal path
    KnownForAntifingerprinting,
}

impl AudioSentinel {
    /// Numeric code carried into the anchor
    pub fn code(&self) -> i64 {
        match self {
            Self::KnownForSuspending => -1,
            Self::NotSupported => -2,
            Self::Timeout => -3,
            Self::KnownForAntifingerprinting => -4,
        }
    }

    /// Short name (for logging)
    pub fn name(&self) -> &'static str {
        match self {
            Self::KnownForSuspending => "KNOWN_FOR_SUSPENDING",
            Self::NotSupported => "NOT_SUPPORTED",
            Self::Timeout => "TIMEOUT",
            Self::KnownForAntifingerprinting => "KNOWN_FOR_ANTIFINGERPRINTING",
        }
    }
}

impl std::fmt::Display for AudioSentinel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.code())
    }
}

/// Hard failures the acquisition component does not absorb
#[derive(Debug, Error)]
pub enum AudioError {
    /// The rendering backend reported an error the protocol does not recognize
    #[error("render backend failed: {0}")]
    Backend(String),
    /// The backend dropped its completion channel before resolving
    #[error("render job dropped its completion channel before resolving")]
    RenderAbandoned,
    /// The acquisition task exited without reporting a result
    #[error("acquisition task exited without reporting a result")]
    TaskLost,
}

/// Internal terminal condition of one render job
#[derive(Debug)]
pub(crate) enum RenderFailure {
    /// Retry budget exhausted while suspended
    Suspended,
    /// Completion timeout elapsed after finalize
    Timeout,
    /// Anything else; propagated, never absorbed
    Fatal(AudioError),
}

/// Resolved value of a finalized acquisition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioOutcome {
    /// Sum of absolute sample magnitudes over the digest window
    Digest(f64),
    /// Terminal failure absorbed at the acquisition boundary
    Sentinel(AudioSentinel),
}

impl From<AudioOutcome> for AudioSignal {
    fn from(outcome: AudioOutcome) -> Self {
        match outcome {
            AudioOutcome::Digest(digest) => AudioSignal::Ready(digest),
            AudioOutcome::Sentinel(sentinel) => AudioSignal::Sentinel(sentinel),
        }
    }
}

/// Two-phase handle to an eagerly started render job
///
/// The job retries patiently until `finalize()` is called; only then are the
/// retry budget and completion timeout armed.
#[derive(Debug)]
pub struct AudioHandle {
    pub(crate) finalize_tx: watch::Sender<bool>,
    pub(crate) result_rx: oneshot::Receiver<Result<f64, RenderFailure>>,
}

impl AudioHandle {
    /// Request the soft deadline and wait for the single resolution
    ///
    /// Suspension-budget exhaustion and completion timeout both reduce to
    /// `AudioSentinel::Timeout`; any other failure propagates.
    pub async fn finalize(self) -> Result<AudioOutcome, AudioError> {
        let _ = self.finalize_tx.send(true);
        match self.result_rx.await {
            Ok(Ok(digest)) => Ok(AudioOutcome::Digest(digest)),
            Ok(Err(RenderFailure::Suspended)) | Ok(Err(RenderFailure::Timeout)) => {
                Ok(AudioOutcome::Sentinel(AudioSentinel::Timeout))
            }
            Ok(Err(RenderFailure::Fatal(error))) => Err(error),
            Err(_) => Err(AudioError::TaskLost),
        }
    }
}

/// Union shape returned by the acquisition component
#[derive(Debug)]
pub enum AudioSignal {
    /// Resolved synchronously without starting a render
    Sentinel(AudioSentinel),
    /// Digest already in hand
    Ready(f64),
    /// Render started eagerly; finalize to wait
    Deferred(AudioHandle),
}

impl AudioSignal {
    /// The resolved number this signal contributes to the anchor, if any
    ///
    /// Sentinels are terminal and environment-stable, so they count as
    /// resolved; a still-deferred signal does not.
    pub fn resolved_number(&self) -> Option<Number> {
        match self {
            Self::Ready(digest) => Number::from_f64(*digest),
            Self::Sentinel(sentinel) => Some(Number::from(sentinel.code())),
            Self::Deferred(_) => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
