//! Core types for Anchorprint

mod anchor;
mod audio;
mod environment;
mod signals;

pub use anchor::{AnchorPayload, Fingerprint, GpuIdentity};
pub use audio::{
    AudioError, AudioHandle, AudioOutcome, AudioSentinel, AudioSignal, ContextState,
};
pub use environment::{EngineFamily, EnvironmentProfile};
pub use signals::{SignalBag, TimerSample, Viewport, WebGpuSupport};

pub(crate) use audio::RenderFailure;
