//! Anchor builder: stability-filtered reduction of a signal bag
//!
//! Selected: GPU identity, WebGL digest, hardware concurrency, device memory,
//! resolved audio number, math quirks, WebGPU flags, DRM bit, timer digest.
//! Deliberately excluded: user agent, platform, device pixel ratio, viewport.
//! Those vary under emulation and responsive testing and would destabilize
//! the anchor.

use serde_json::{json, Map, Value};

use crate::core::hash::stable_hash_value;
use crate::types::{AnchorPayload, AudioSignal, GpuIdentity, SignalBag, TimerSample};

/// Build the anchor payload from a partially populated bag
///
/// Every absent input stays structurally absent in the output. A
/// still-deferred audio signal contributes nothing; a resolved digest or
/// terminal sentinel contributes its number.
pub fn build_anchor(bag: &SignalBag) -> AnchorPayload {
    AnchorPayload {
        audio: bag.audio.as_ref().and_then(AudioSignal::resolved_number),
        device_memory: bag.device_memory,
        drm: bag.drm_supported.map(u8::from),
        gpu: gpu_identity(bag),
        hardware_concurrency: bag.hardware_concurrency,
        math: bag.math.clone(),
        timers: bag.timer.as_ref().map(timer_digest),
        webgl: webgl_digest(bag),
        webgpu: bag.webgpu,
    }
}

/// Trimmed-lowercase GPU strings, unmasked preferred over masked
fn gpu_identity(bag: &SignalBag) -> Option<GpuIdentity> {
    let vendor = bag
        .gpu_vendor_unmasked
        .as_deref()
        .or(bag.gpu_vendor.as_deref())
        .map(normalize_gpu_string);
    let renderer = bag
        .gpu_renderer_unmasked
        .as_deref()
        .or(bag.gpu_renderer.as_deref())
        .map(normalize_gpu_string);
    if vendor.is_none() && renderer.is_none() {
        return None;
    }
    Some(GpuIdentity { vendor, renderer })
}

fn normalize_gpu_string(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Digest of the sorted extension and parameter lists
fn webgl_digest(bag: &SignalBag) -> Option<String> {
    if bag.webgl_extensions.is_none() && bag.webgl_parameters.is_none() {
        return None;
    }
    let mut record = Map::new();
    if let Some(extensions) = &bag.webgl_extensions {
        let mut sorted = extensions.clone();
        sorted.sort();
        record.insert("extensions".into(), json!(sorted));
    }
    if let Some(parameters) = &bag.webgl_parameters {
        let mut sorted = parameters.clone();
        sorted.sort();
        record.insert("parameters".into(), json!(sorted));
    }
    Some(stable_hash_value(&Value::Object(record)))
}

/// Digest of the timer precision/baseline pair
fn timer_digest(timer: &TimerSample) -> String {
    stable_hash_value(&json!({
        "baseline": timer.baseline,
        "precision": timer.precision,
    }))
}

// =============================================================================
// TESTS
// =============================================================================
