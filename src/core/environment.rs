//! Engine classification for the audio path
//!
//! Pure predicates over an explicit environment profile, so the acquisition
//! state machine can be exercised with synthetic environments.

use crate::types::{EngineFamily, EnvironmentProfile};
use crate::{WEBKIT_NOISE_VERSION, WEBKIT_SUSPEND_FIXED_VERSION};

/// Engine keeps audio contexts suspended outside a user gesture
///
/// Mobile WebKit before the autoplay-policy fix never lets an offline
/// context leave the suspended state without a gesture, so rendering is
/// pointless to even attempt.
pub fn always_suspends_audio(env: &EnvironmentProfile) -> bool {
    env.engine == EngineFamily::WebKit
        && !env.desktop_browser
        && env.engine_version < WEBKIT_SUSPEND_FIXED_VERSION
}

/// Engine injects anti-fingerprinting noise into the rendered signal
///
/// Recent genuine-vendor WebKit builds perturb the samples, so a digest
/// would be unstable across visits. Only the vendor's own builds do this;
/// embedded WebKit views render clean.
pub fn injects_audio_noise(env: &EnvironmentProfile) -> bool {
    env.engine == EngineFamily::WebKit
        && env.genuine_vendor_browser
        && env.engine_version >= WEBKIT_NOISE_VERSION
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn webkit(version: u32, desktop: bool, genuine: bool) -> EnvironmentProfile {
        EnvironmentProfile {
            engine: EngineFamily::WebKit,
            engine_version: version,
            desktop_browser: desktop,
            genuine_vendor_browser: genuine,
        }
    }

    #[test]
    fn test_old_mobile_webkit_always_suspends() {
        assert!(always_suspends_audio(&webkit(605, false, true)));
    }

    #[test]
    fn test_fixed_mobile_webkit_does_not() {
        assert!(!always_suspends_audio(&webkit(606, false, true)));
    }

    #[test]
    fn test_desktop_webkit_never_classified_as_suspending() {
        assert!(!always_suspends_audio(&webkit(605, true, true)));
    }

    #[test]
    fn test_other_engines_never_classified_as_suspending() {
        let env = EnvironmentProfile {
            engine: EngineFamily::Blink,
            engine_version: 100,
            desktop_browser: false,
            genuine_vendor_browser: true,
        };
        assert!(!always_suspends_audio(&env));
    }

    #[test]
    fn test_recent_genuine_webkit_injects_noise() {
        assert!(injects_audio_noise(&webkit(616, true, true)));
        assert!(injects_audio_noise(&webkit(620, false, true)));
    }

    #[test]
    fn test_older_webkit_renders_clean() {
        assert!(!injects_audio_noise(&webkit(615, true, true)));
    }

    #[test]
    fn test_embedded_webkit_renders_clean() {
        assert!(!injects_audio_noise(&webkit(616, true, false)));
    }
}
