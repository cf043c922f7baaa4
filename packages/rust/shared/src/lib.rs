//! Shared types, error model, configuration, and transport seam for relnotify.
//!
//! This crate is the foundation depended on by all other relnotify crates.
//! It provides:
//! - [`RelnotifyError`], the unified error type
//! - Domain types ([`ReleaseContext`], [`Commit`], [`Branch`], [`AssetDeclaration`], [`ResolvedAssets`])
//! - Configuration ([`AppConfig`], [`NotifyConfig`], [`EffectiveConfig`], config loading)
//! - The [`ChatTransport`] trait implemented by concrete chat backends

pub mod config;
pub mod error;
pub mod transport;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, EffectiveConfig, NotifyConfig, PrereleaseOverrides, SlackConfig, config_dir,
    config_file_path, init_config, load_config, load_config_from, resolve_token,
};
pub use error::{RelnotifyError, Result};
pub use transport::{ChatTransport, PostedMessage, UploadOutcome, UploadRequest};
pub use types::{AssetDeclaration, Branch, Commit, ReleaseContext, ResolvedAssets};
