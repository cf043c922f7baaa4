//! Asset resolution: declared path patterns → concrete files on disk.
//!
//! Every declaration is interpolated, then expanded as a glob relative to the
//! working directory. Resolution is all-or-nothing: if any pattern matches no
//! file, the whole set fails with a single error naming every such pattern.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use relnotify_shared::{AssetDeclaration, RelnotifyError, ReleaseContext, ResolvedAssets, Result};

use crate::template::interpolate;

/// Resolve `declarations` against the files under `workdir`.
///
/// A pattern matching several files adds each of them under the same label.
/// Matches within one pattern come back in the glob crate's (sorted) order.
#[instrument(skip_all, fields(workdir = %workdir.display(), declared = declarations.len()))]
pub fn resolve_assets(
    declarations: &[AssetDeclaration],
    release: &ReleaseContext,
    workdir: &Path,
) -> Result<ResolvedAssets> {
    let mut resolved = ResolvedAssets::new();
    let mut missing: Vec<String> = Vec::new();

    for declaration in declarations {
        let pattern = interpolate(&declaration.path, release);
        let matches = expand_pattern(&pattern, workdir)?;

        if matches.is_empty() {
            debug!(%pattern, "asset pattern matched nothing");
            missing.push(pattern);
            continue;
        }

        debug!(%pattern, count = matches.len(), label = %declaration.label, "asset pattern resolved");
        for path in matches {
            resolved.insert(path, declaration.label.clone());
        }
    }

    if !missing.is_empty() {
        return Err(RelnotifyError::UnmatchedAssets { patterns: missing });
    }

    Ok(resolved)
}

/// Expand one interpolated pattern to the regular files it matches.
fn expand_pattern(pattern: &str, workdir: &Path) -> Result<Vec<PathBuf>> {
    let full = if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        let base = glob::Pattern::escape(&workdir.to_string_lossy());
        format!("{}/{pattern}", base.trim_end_matches('/'))
    };

    let entries = glob::glob(&full).map_err(|e| RelnotifyError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            RelnotifyError::io(path, e.into_error())
        })?;
        if path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}
