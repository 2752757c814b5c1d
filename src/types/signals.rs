//! Signal bag assembled from the independent probes
//!
//! Every field is independently optional; absence means the probe could not
//! run or chose not to report, and is distinct from a false/zero/empty value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::AudioSignal;

/// WebGPU support flags reported by the adapter probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebGpuSupport {
    /// An adapter was obtainable at all
    pub supported: bool,
    /// Only a software fallback adapter was offered
    pub fallback: bool,
}

/// Performance-timer resolution sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimerSample {
    /// Smallest observable timer increment (milliseconds)
    pub precision: f64,
    /// Baseline reading used to detect clamping (milliseconds)
    pub baseline: f64,
}

/// Viewport dimensions (collected but never anchored)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// One collection session's worth of probe output
///
/// Held in memory for the duration of a single `get()` call and discarded.
#[derive(Debug, Default)]
pub struct SignalBag {
    /// Logical CPU count
    pub hardware_concurrency: Option<u32>,
    /// Device memory in GiB (can be fractional)
    pub device_memory: Option<f64>,
    /// Masked GPU vendor string
    pub gpu_vendor: Option<String>,
    /// Masked GPU renderer string
    pub gpu_renderer: Option<String>,
    /// Unmasked GPU vendor string (debug-info extension)
    pub gpu_vendor_unmasked: Option<String>,
    /// Unmasked GPU renderer string (debug-info extension)
    pub gpu_renderer_unmasked: Option<String>,
    /// Supported WebGL extension names
    pub webgl_extensions: Option<Vec<String>>,
    /// Raw WebGL parameter and shader-precision strings
    pub webgl_parameters: Option<Vec<String>>,
    /// WebGPU adapter flags
    pub webgpu: Option<WebGpuSupport>,
    /// DRM/EME capability
    pub drm_supported: Option<bool>,
    /// Performance-timer resolution sample
    pub timer: Option<TimerSample>,
    /// Math-quirk fingerprint record
    pub math: Option<Value>,
    /// Audio digest, sentinel, or still-deferred render
    pub audio: Option<AudioSignal>,

    // Volatile under emulation and responsive testing; collected for
    // diagnostics but never anchored.
    /// User agent string
    pub user_agent: Option<String>,
    /// Platform string
    pub platform: Option<String>,
    /// Device pixel ratio
    pub device_pixel_ratio: Option<f64>,
    /// Viewport dimensions
    pub viewport: Option<Viewport>,
}

impl SignalBag {
    /// Empty bag; hosts fill in whatever their probes produced
    pub fn new() -> Self {
        Self::default()
    }
}
