//! Application configuration for relnotify.
//!
//! Project config lives at `./relnotify.toml`; a user-wide fallback may live at
//! `~/.relnotify/relnotify.toml`. CLI flags override config file values, which
//! override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RelnotifyError, Result};
use crate::types::{AssetDeclaration, Branch};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "relnotify.toml";

/// Default user-wide config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".relnotify";

// ---------------------------------------------------------------------------
// Config structs (matching relnotify.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Slack transport settings.
    #[serde(default)]
    pub slack: SlackConfig,

    /// Announcement content settings.
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// `[slack]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Channel name or ID to announce in. Required; may come from the CLI.
    #[serde(default)]
    pub channel: String,

    /// Name of the env var holding the bot token (never store the token itself).
    #[serde(default = "default_token_env")]
    pub token_env: String,

    /// Base URL of the Slack Web API.
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            channel: String::new(),
            token_env: default_token_env(),
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_token_env() -> String {
    "SLACK_TOKEN".into()
}
fn default_api_base() -> String {
    "https://slack.com/api/".into()
}
fn default_timeout_secs() -> u64 {
    30
}

/// `[notify]` section: the base announcement configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyConfig {
    /// Announcement headline. Supports `${version}` and `${release_notes}`.
    #[serde(default = "default_message_template")]
    pub message_template: String,

    /// Append the release notes as a "Changelog" section.
    #[serde(default = "default_true")]
    pub include_changelog: bool,

    /// Append the most recent commit's body as a "Description" section.
    #[serde(default)]
    pub include_last_commit_text: bool,

    /// Text appended verbatim after the download links.
    #[serde(default)]
    pub last_line: String,

    /// Whether prerelease branches are announced at all.
    #[serde(default)]
    pub prerelease_enabled: bool,

    /// Files to attach to the announcement thread.
    #[serde(default)]
    pub assets: Vec<AssetDeclaration>,

    /// Overrides applied when the release branch is a prerelease branch.
    #[serde(default)]
    pub prerelease: PrereleaseOverrides,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            message_template: default_message_template(),
            include_changelog: true,
            include_last_commit_text: false,
            last_line: String::new(),
            prerelease_enabled: false,
            assets: Vec::new(),
            prerelease: PrereleaseOverrides::default(),
        }
    }
}

fn default_message_template() -> String {
    "New release: ${version}".into()
}
fn default_true() -> bool {
    true
}

/// `[notify.prerelease]` section. Unset fields fall back to `[notify]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrereleaseOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_changelog: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_last_commit_text: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<AssetDeclaration>>,
}

// ---------------------------------------------------------------------------
// Effective config (selected once per run)
// ---------------------------------------------------------------------------

/// The configuration view used for one publish run, after choosing between
/// the base settings and the prerelease overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveConfig {
    pub message_template: String,
    pub include_changelog: bool,
    pub include_last_commit_text: bool,
    pub last_line: String,
    pub assets: Vec<AssetDeclaration>,
    pub prerelease_enabled: bool,
}

impl NotifyConfig {
    /// Select the effective configuration for a release cut from `branch`.
    pub fn effective_for(&self, branch: &Branch) -> EffectiveConfig {
        let base = EffectiveConfig {
            message_template: self.message_template.clone(),
            include_changelog: self.include_changelog,
            include_last_commit_text: self.include_last_commit_text,
            last_line: self.last_line.clone(),
            assets: self.assets.clone(),
            prerelease_enabled: self.prerelease_enabled,
        };

        if !branch.prerelease {
            return base;
        }

        let overrides = &self.prerelease;
        EffectiveConfig {
            message_template: overrides
                .message_template
                .clone()
                .unwrap_or(base.message_template),
            include_changelog: overrides.include_changelog.unwrap_or(base.include_changelog),
            include_last_commit_text: overrides
                .include_last_commit_text
                .unwrap_or(base.include_last_commit_text),
            last_line: overrides.last_line.clone().unwrap_or(base.last_line),
            assets: overrides.assets.clone().unwrap_or(base.assets),
            prerelease_enabled: base.prerelease_enabled,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the user-wide config directory (`~/.relnotify/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| RelnotifyError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the config file path inside `dir`.
pub fn config_file_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// Load the config for a project rooted at `workdir`.
///
/// Tries `<workdir>/relnotify.toml`, then `~/.relnotify/relnotify.toml`, and
/// returns defaults if neither exists.
pub fn load_config(workdir: &Path) -> Result<AppConfig> {
    let project = config_file_path(workdir);
    if project.exists() {
        return load_config_from(&project);
    }

    if let Ok(dir) = config_dir() {
        let user = config_file_path(&dir);
        if user.exists() {
            return load_config_from(&user);
        }
    }

    tracing::debug!(?project, "config file not found, using defaults");
    Ok(AppConfig::default())
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| RelnotifyError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        RelnotifyError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Write a default config file into `dir`. Refuses to overwrite an existing file.
/// Returns the path to the created file.
pub fn init_config(dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| RelnotifyError::io(dir, e))?;

    let path = config_file_path(dir);
    if path.exists() {
        return Err(RelnotifyError::config(format!(
            "{} already exists",
            path.display()
        )));
    }

    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| RelnotifyError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| RelnotifyError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

/// Read the Slack bot token from the configured env var.
pub fn resolve_token(config: &SlackConfig) -> Result<String> {
    let var_name = &config.token_env;
    match std::env::var(var_name) {
        Ok(val) if !val.trim().is_empty() => Ok(val),
        _ => Err(RelnotifyError::config(format!(
            "Slack token not found. Set the {var_name} environment variable."
        ))),
    }
}

impl SlackConfig {
    /// Check the settings required before any work begins.
    pub fn validate(&self) -> Result<()> {
        if self.channel.trim().is_empty() {
            return Err(RelnotifyError::config(
                "no Slack channel configured. Set [slack].channel or pass --channel.",
            ));
        }
        url::Url::parse(&self.api_base).map_err(|e| {
            RelnotifyError::config(format!("invalid Slack api_base '{}': {e}", self.api_base))
        })?;
        Ok(())
    }
}
