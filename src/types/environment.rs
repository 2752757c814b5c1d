//! Environment descriptor supplied by the hosting collaborator
//!
//! The acquisition state machine never sniffs the environment itself; it is
//! handed an explicit profile so classification stays a pure function.

use serde::{Deserialize, Serialize};

/// Rendering engine family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineFamily {
    /// Chromium and derivatives
    Blink,
    /// Firefox
    Gecko,
    /// Safari and everything iOS
    WebKit,
    /// Anything unrecognized
    Other,
}

/// Classification input for engine-specific audio behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentProfile {
    /// Engine family
    pub engine: EngineFamily,
    /// Engine major version (0 when unknown)
    pub engine_version: u32,
    /// Desktop browser, as opposed to a mobile or embedded shell
    pub desktop_browser: bool,
    /// Genuine vendor build rather than an embedded view or a spoof
    pub genuine_vendor_browser: bool,
}

impl Default for EnvironmentProfile {
    fn default() -> Self {
        Self {
            engine: EngineFamily::Other,
            engine_version: 0,
            desktop_browser: false,
            genuine_vendor_browser: false,
        }
    }
}
