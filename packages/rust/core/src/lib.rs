//! Release announcement orchestration and text composition for relnotify.
//!
//! This crate ties together placeholder interpolation, asset resolution,
//! message composition, and the chat transport into the end-to-end
//! [`publisher::publish_release`] workflow.

pub mod assets;
pub mod message;
pub mod publisher;
pub mod template;

pub use assets::resolve_assets;
pub use publisher::{
    PublishConfig, PublishOutcome, PublishProgress, PublishStage, SilentProgress,
    publish_release,
};
pub use template::interpolate;
