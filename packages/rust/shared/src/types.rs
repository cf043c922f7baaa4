//! Core domain types for a release announcement.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ReleaseContext
// ---------------------------------------------------------------------------

/// A single commit included in the release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// Full commit message (subject, body, trailers).
    pub message: String,
}

impl Commit {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The branch the release was cut from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch name (e.g. `main`, `beta`).
    pub name: String,
    /// Whether releases from this branch are prereleases.
    #[serde(default)]
    pub prerelease: bool,
}

/// Everything known about the release being announced. Read-only for the run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseContext {
    /// Version string (e.g. `1.2.0`).
    pub version: String,
    /// Generated release notes, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Commits in the release, most recent first.
    #[serde(default)]
    pub commits: Vec<Commit>,
    /// Source branch.
    #[serde(default)]
    pub branch: Branch,
}

impl ReleaseContext {
    /// Release notes, or the empty string when absent.
    pub fn notes_or_empty(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// A user-declared asset: a path or glob pattern plus the label shown in the
/// download list. The pattern may contain template placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDeclaration {
    /// Path or glob pattern, relative to the working directory unless absolute.
    pub path: String,
    /// Human-readable label.
    pub label: String,
}

impl AssetDeclaration {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            label: label.into(),
        }
    }
}

/// Concrete files to upload, each with its label, in resolution order.
///
/// Inserting a path that is already present replaces its label in place
/// (last write wins) without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedAssets {
    entries: Vec<(PathBuf, String)>,
}

impl ResolvedAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resolved file, overwriting the label of an existing entry.
    pub fn insert(&mut self, path: PathBuf, label: impl Into<String>) {
        let label = label.into();
        match self.entries.iter_mut().find(|(p, _)| *p == path) {
            Some(entry) => entry.1 = label,
            None => self.entries.push((path, label)),
        }
    }

    /// Label for a resolved path, if present.
    pub fn label_for(&self, path: &Path) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, label)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.entries
            .iter()
            .map(|(path, label)| (path.as_path(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
