//! Audio acquisition state machine
//!
//! Protocol:
//! - NotStarted → Rendering → {Suspended, Running} → {Completed, TimedOut, SuspendedFailure}
//! - capability absent / known-bad engine: resolve synchronously with a sentinel
//! - Suspended: retry every 500 ms; foreground suspensions consume the retry
//!   budget (3), background ones do not; the budget only applies once finalize
//!   has been requested
//! - Running: wait for natural completion; once finalize is requested, arm a
//!   timeout of min(500 ms, whatever remains of the 5000 ms running budget)
//! - completion reduces the buffer to a sum of absolute magnitudes over the
//!   digest window; suspension/timeout reduce to the Timeout sentinel at the
//!   handle; anything else propagates
//!
//! Each call owns its job, timers, and retry counter; nothing is shared
//! across concurrent acquisitions, and a job resolves at most once.

use tokio::sync::{oneshot, watch};
use tokio::time::{self, Duration, Instant};
use tracing::{debug, warn};

use crate::core::environment::{always_suspends_audio, injects_audio_noise};
use crate::types::{
    AudioError, AudioHandle, AudioSentinel, AudioSignal, ContextState, EnvironmentProfile,
    RenderFailure,
};
use crate::{
    DIGEST_FROM_SAMPLE, DIGEST_TO_SAMPLE, RENDER_RETRY_DELAY_MS, RENDER_RETRY_MAX_COUNT,
    RUNNING_MAX_AWAIT_MS, RUNNING_SUFFICIENT_TIME_MS,
};

/// Offline audio-rendering job, as the state machine sees it
///
/// One backend instance is exclusively owned by the acquisition call that
/// created it. `start_rendering` must be idempotent: calling it on a job
/// that is already running is a no-op that reports `Running`.
pub trait RenderBackend: Send + 'static {
    /// Attempt to start (or resume) the render; report the context state
    fn start_rendering(&mut self) -> Result<ContextState, AudioError>;

    /// Single-shot channel carrying the rendered sample buffer
    ///
    /// Taken once, before the first start attempt. `None` means the backend
    /// cannot deliver a buffer, which is a hard failure.
    fn take_completion(&mut self) -> Option<oneshot::Receiver<Vec<f32>>>;

    /// Whether the hosting page is foregrounded right now
    fn is_foreground(&self) -> bool;
}

/// Start an acquisition against the given environment
///
/// Resolves synchronously with a sentinel when the capability is absent or
/// the engine is known-bad; otherwise the render is started eagerly and a
/// deferred handle is returned. The caller pays the waiting cost only when
/// it finalizes the handle.
pub fn acquire<B: RenderBackend>(env: &EnvironmentProfile, backend: Option<B>) -> AudioSignal {
    let Some(backend) = backend else {
        return AudioSignal::Sentinel(AudioSentinel::NotSupported);
    };
    if always_suspends_audio(env) {
        return AudioSignal::Sentinel(AudioSentinel::KnownForSuspending);
    }
    if injects_audio_noise(env) {
        return AudioSignal::Sentinel(AudioSentinel::KnownForAntifingerprinting);
    }

    let (finalize_tx, finalize_rx) = watch::channel(false);
    let (result_tx, result_rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = drive(backend, finalize_rx).await;
        // Receiver may be gone if the handle was dropped; the job is
        // superseded and its result discarded.
        let _ = result_tx.send(outcome);
    });

    AudioSignal::Deferred(AudioHandle {
        finalize_tx,
        result_rx,
    })
}

/// Run one render job to its single terminal condition
async fn drive<B: RenderBackend>(
    mut backend: B,
    mut finalized: watch::Receiver<bool>,
) -> Result<f64, RenderFailure> {
    let mut completion = match backend.take_completion() {
        Some(rx) => rx,
        None => return Err(RenderFailure::Fatal(AudioError::RenderAbandoned)),
    };

    let retry_delay = Duration::from_millis(RENDER_RETRY_DELAY_MS);
    let mut retry_count: u32 = 0;

    // Retry loop: ends when the context reaches the running state or the
    // post-finalize budget is exhausted.
    let started_running_at = loop {
        match backend
            .start_rendering()
            .map_err(RenderFailure::Fatal)?
        {
            ContextState::Running => break Instant::now(),
            ContextState::Suspended => {
                // Background suspensions are expected and not the engine's
                // fault; only foreground ones count against the budget.
                if backend.is_foreground() {
                    retry_count += 1;
                }
                debug!(retry_count, "render context suspended");
                if *finalized.borrow() && retry_count >= RENDER_RETRY_MAX_COUNT {
                    warn!(retry_count, "render abandoned: suspended past retry budget");
                    return Err(RenderFailure::Suspended);
                }
                time::sleep(retry_delay).await;
            }
        }
    };
    debug!("render context running");

    // Before finalize: wait patiently for natural completion.
    if !*finalized.borrow() {
        tokio::select! {
            rendered = &mut completion => {
                return match rendered {
                    Ok(buffer) => Ok(sample_window_digest(&buffer)),
                    Err(_) => Err(RenderFailure::Fatal(AudioError::RenderAbandoned)),
                };
            }
            // Resolves on finalize, or immediately if the handle was
            // dropped; either way the timeout below takes over.
            _ = finalized.changed() => {}
        }
    }

    // After finalize: the lesser of the max-await window and whatever is
    // left of the sufficient-running-time budget.
    let sufficient_until = started_running_at + Duration::from_millis(RUNNING_SUFFICIENT_TIME_MS);
    let budget = sufficient_until
        .saturating_duration_since(Instant::now())
        .min(Duration::from_millis(RUNNING_MAX_AWAIT_MS));
    debug!(budget_ms = budget.as_millis() as u64, "finalize requested, arming completion timeout");

    match time::timeout(budget, completion).await {
        Ok(Ok(buffer)) => Ok(sample_window_digest(&buffer)),
        Ok(Err(_)) => Err(RenderFailure::Fatal(AudioError::RenderAbandoned)),
        Err(_) => {
            warn!("render abandoned: completion timeout elapsed");
            Err(RenderFailure::Timeout)
        }
    }
}

/// Reduce a rendered buffer to its deterministic content digest
///
/// Sum of absolute sample magnitudes over the digest window. The head of the
/// buffer is skipped because the signal there is still settling.
pub fn sample_window_digest(samples: &[f32]) -> f64 {
    let end = samples.len().min(DIGEST_TO_SAMPLE);
    let start = DIGEST_FROM_SAMPLE.min(end);
    samples[start..end].iter().map(|s| f64::from(s.abs())).sum()
}

// =============================================================================
// TESTS
// =============================================================================
