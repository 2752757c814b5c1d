//! End-to-end fingerprint pipeline tests
//!
//! The golden scenario pins the canonical anchor bytes and the visitor ID
//! for a fully populated bag; it is the regression harness for any change
//! to the encoder, the hash, or the anchor field selection.

use pretty_assertions::assert_eq;
use serde_json::json;

use anchorprint::core::{build_anchor, derive_visitor_id, get};
use anchorprint::types::{
    AudioSentinel, AudioSignal, SignalBag, TimerSample, Viewport, WebGpuSupport,
};
use anchorprint::VISITOR_ID_LEN;

fn full_bag() -> SignalBag {
    SignalBag {
        hardware_concurrency: Some(8),
        device_memory: Some(8.0),
        gpu_vendor: Some("WebKit".into()),
        gpu_renderer: Some("WebKit WebGL".into()),
        gpu_vendor_unmasked: Some("  Google Inc. (NVIDIA)  ".into()),
        gpu_renderer_unmasked: Some(
            "ANGLE (NVIDIA, NVIDIA GeForce RTX 3060 Direct3D11 vs_5_0 ps_5_0, D3D11)".into(),
        ),
        webgl_extensions: Some(vec![
            "WEBGL_debug_renderer_info".into(),
            "OES_texture_float".into(),
        ]),
        webgl_parameters: Some(vec![
            "MAX_TEXTURE_SIZE=16384".into(),
            "ALIASED_LINE_WIDTH_RANGE=1,1".into(),
        ]),
        webgpu: Some(WebGpuSupport {
            supported: true,
            fallback: false,
        }),
        drm_supported: Some(true),
        timer: Some(TimerSample {
            precision: 0.005,
            baseline: 5.5,
        }),
        math: Some(json!({
            "acos": -1.4214488238747245,
            "sin": 0.8414709848078965,
        })),
        audio: Some(AudioSignal::Ready(124.0434)),
        user_agent: Some("Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36".into()),
        platform: Some("Linux x86_64".into()),
        device_pixel_ratio: Some(2.0),
        viewport: Some(Viewport {
            width: 1280,
            height: 720,
        }),
    }
}

// =============================================================================
// GOLDEN REGRESSION
// =============================================================================

const GOLDEN_ANCHOR: &str = concat!(
    r#"{"audio":124.0434,"device_memory":8.0,"drm":1,"#,
    r#""gpu":{"renderer":"angle (nvidia, nvidia geforce rtx 3060 direct3d11 vs_5_0 ps_5_0, d3d11)","vendor":"google inc. (nvidia)"},"#,
    r#""hardware_concurrency":8,"#,
    r#""math":{"acos":-1.4214488238747245,"sin":0.8414709848078965},"#,
    r#""timers":"457b7a56802e858b","webgl":"1b0f19337d39044f","#,
    r#""webgpu":{"fallback":false,"supported":true}}"#,
);

const GOLDEN_VISITOR_ID: &str = "acbf80d24b90062874ccc2";

#[test]
fn test_golden_anchor_bytes() {
    let anchor = build_anchor(&full_bag());
    assert_eq!(anchor.canonical(), GOLDEN_ANCHOR);
}

#[test]
fn test_golden_visitor_id() {
    let anchor = build_anchor(&full_bag());
    assert_eq!(derive_visitor_id(&anchor), GOLDEN_VISITOR_ID);
}

#[tokio::test]
async fn test_golden_end_to_end() {
    let fingerprint = get(full_bag()).await.unwrap();
    assert_eq!(fingerprint.anchor.canonical(), GOLDEN_ANCHOR);
    assert_eq!(fingerprint.visitor_id, GOLDEN_VISITOR_ID);
}

// =============================================================================
// STABILITY
// =============================================================================

#[tokio::test]
async fn test_emulation_changes_do_not_move_the_id() {
    let mut emulated = full_bag();
    emulated.user_agent = Some("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)".into());
    emulated.platform = Some("iPhone".into());
    emulated.device_pixel_ratio = Some(3.0);
    emulated.viewport = Some(Viewport {
        width: 390,
        height: 844,
    });

    let fingerprint = get(emulated).await.unwrap();
    assert_eq!(fingerprint.visitor_id, GOLDEN_VISITOR_ID);
}

#[tokio::test]
async fn test_probe_report_order_does_not_move_the_id() {
    let mut reordered = full_bag();
    reordered.webgl_extensions = Some(vec![
        "OES_texture_float".into(),
        "WEBGL_debug_renderer_info".into(),
    ]);
    reordered.webgl_parameters = Some(vec![
        "ALIASED_LINE_WIDTH_RANGE=1,1".into(),
        "MAX_TEXTURE_SIZE=16384".into(),
    ]);

    let fingerprint = get(reordered).await.unwrap();
    assert_eq!(fingerprint.visitor_id, GOLDEN_VISITOR_ID);
}

#[tokio::test]
async fn test_hardware_change_moves_the_id() {
    let mut changed = full_bag();
    changed.hardware_concurrency = Some(4);
    let fingerprint = get(changed).await.unwrap();
    assert_ne!(fingerprint.visitor_id, GOLDEN_VISITOR_ID);
    assert_eq!(fingerprint.visitor_id.len(), VISITOR_ID_LEN);
}

// =============================================================================
// SPARSE BAGS
// =============================================================================

#[tokio::test]
async fn test_bag_with_no_gpu_audio_or_webgpu_round_trips() {
    let mut sparse = SignalBag::new();
    sparse.hardware_concurrency = Some(4);
    sparse.user_agent = Some("Mozilla/5.0".into());

    let fingerprint = get(sparse).await.unwrap();
    assert_eq!(fingerprint.anchor.canonical(), r#"{"hardware_concurrency":4}"#);
    assert!(!fingerprint.anchor.canonical().contains("null"));
    assert_eq!(fingerprint.visitor_id.len(), VISITOR_ID_LEN);
}

#[tokio::test]
async fn test_audio_sentinel_is_part_of_the_anchor() {
    let mut bag = SignalBag::new();
    bag.audio = Some(AudioSignal::Sentinel(AudioSentinel::KnownForSuspending));
    let fingerprint = get(bag).await.unwrap();
    assert_eq!(fingerprint.anchor.canonical(), r#"{"audio":-1}"#);
}
