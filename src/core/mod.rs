//! Core behavior for Anchorprint

pub mod anchor;
pub mod audio;
pub mod canonical;
pub mod collect;
pub mod environment;
pub mod hash;
pub mod visitor;

pub use anchor::build_anchor;
pub use audio::{acquire, sample_window_digest, RenderBackend};
pub use canonical::canonical_string;
pub use collect::get;
pub use environment::{always_suspends_audio, injects_audio_noise};
pub use hash::{stable_hash, stable_hash_value};
pub use visitor::derive_visitor_id;
