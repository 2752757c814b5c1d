//! Anchor payload and fingerprint output
//!
//! The anchor keeps only fields expected to survive viewport changes,
//! emulation, and minor configuration drift. Absent fields are structurally
//! omitted from serialization, never emitted as null.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::core::canonical_string;
use crate::types::WebGpuSupport;

/// Normalized GPU identity (trimmed, lowercased)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpuIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renderer: Option<String>,
}

/// Stability-filtered snapshot of a signal bag
///
/// Two anchors built from equal bags canonicalize to byte-identical strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnchorPayload {
    /// Audio digest or terminal sentinel code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<Number>,
    /// Device memory in GiB
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_memory: Option<f64>,
    /// 0/1 reduction of DRM support
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drm: Option<u8>,
    /// Normalized GPU vendor/renderer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpu: Option<GpuIdentity>,
    /// Logical CPU count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_concurrency: Option<u32>,
    /// Math-quirk record, passed through
    #[serde(skip_serializing_if = "Option::is_none")]
    pub math: Option<Value>,
    /// Digest of the timer precision/baseline pair
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timers: Option<String>,
    /// Digest of the sorted WebGL extension/parameter lists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webgl: Option<String>,
    /// WebGPU support flags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webgpu: Option<WebGpuSupport>,
}

impl AnchorPayload {
    /// Canonical byte-stable form of this anchor
    pub fn canonical(&self) -> String {
        // Plain data; Value conversion cannot fail for this shape.
        let value = serde_json::to_value(self).unwrap_or(Value::Null);
        canonical_string(&value)
    }
}

/// Output of one collection session
#[derive(Debug, Clone, Serialize)]
pub struct Fingerprint {
    /// The anchor the ID was derived from
    pub anchor: AnchorPayload,
    /// 22-character lowercase hex identifier
    pub visitor_id: String,
    /// When this session ran (diagnostic only, not anchored)
    pub collected_at: DateTime<Utc>,
}

// =============================================================================
// TESTS
// =============================================================================
