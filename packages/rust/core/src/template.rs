//! Release placeholder interpolation.

use relnotify_shared::ReleaseContext;

/// Replaced with the release version.
pub const VERSION_PLACEHOLDER: &str = "${version}";

/// Replaced with the release notes (empty when there are none).
pub const NOTES_PLACEHOLDER: &str = "${release_notes}";

/// Replace every release placeholder in `template`.
///
/// Substituted values are not rescanned, so a version string that happens to
/// contain a placeholder is inserted literally. Unknown `${...}` sequences are
/// left untouched.
pub fn interpolate(template: &str, release: &ReleaseContext) -> String {
    let notes = release.notes_or_empty();
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find("${") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if let Some(after) = tail.strip_prefix(VERSION_PLACEHOLDER) {
            out.push_str(&release.version);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(NOTES_PLACEHOLDER) {
            out.push_str(notes);
            rest = after;
        } else {
            out.push_str("${");
            rest = &tail[2..];
        }
    }

    out.push_str(rest);
    out
}
