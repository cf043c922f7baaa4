//! Announcement text: section layout, last-commit excerpt, and the notices
//! posted when a release goes wrong.

use relnotify_shared::{Commit, EffectiveConfig, RelnotifyError};

/// Commit trailers that never belong in the description.
const TRAILER_PREFIXES: [&str; 2] = ["signed-off-by:", "co-authored-by:"];

const DESCRIPTION_HEADING: &str = "Description:";
const CHANGELOG_HEADING: &str = "Changelog:";
const DOWNLOADS_HEADING: &str = "Download Links:";

/// Appended to the announcement when publishing fails partway.
pub const CAUTION_SUFFIX: &str =
    ":warning: An issue occurred with this release. Do not use this version.";

/// Body of the most recent commit, without its subject line, blank lines, or
/// sign-off / co-author trailers. Empty if there are no commits.
pub fn last_commit_excerpt(commits: &[Commit]) -> String {
    let Some(commit) = commits.first() else {
        return String::new();
    };

    commit
        .message
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !is_trailer(line))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn is_trailer(line: &str) -> bool {
    let lowered = line.trim().to_lowercase();
    TRAILER_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

/// Build the announcement body.
///
/// Layout is always headline, then description, then changelog. Each section
/// is followed by a blank line and is skipped when disabled or empty.
pub fn compose_message(
    headline: &str,
    config: &EffectiveConfig,
    excerpt: &str,
    notes: &str,
) -> String {
    let mut text = format!("{headline}\n\n");

    if config.include_last_commit_text && !excerpt.trim().is_empty() {
        text.push_str(&format!("{DESCRIPTION_HEADING}\n{excerpt}\n\n"));
    }

    if config.include_changelog && !notes.trim().is_empty() {
        text.push_str(&format!("{CHANGELOG_HEADING}\n{notes}\n\n"));
    }

    text
}

/// One entry of the download list.
pub fn format_download_link(label: &str, url: &str) -> String {
    format!("• {label}: {url}")
}

/// Append the download list and optional closing line to a composed body.
pub fn append_download_links(body: &str, links: &[String], last_line: &str) -> String {
    let mut text = body.to_string();
    text.push_str(DOWNLOADS_HEADING);
    text.push('\n');
    text.push_str(&links.join("\n"));

    if !last_line.is_empty() {
        text.push_str("\n\n");
        text.push_str(last_line);
    }

    text.trim_end().to_string()
}

/// Thread reply posted when the run fails after the announcement exists.
pub fn error_reply(version: &str, error: &RelnotifyError) -> String {
    format!(
        ":rotating_light: An error occurred while publishing release {version}: {error}. \
         Please do not use this release."
    )
}

/// The last known announcement text with the caution notice appended.
pub fn with_caution(text: &str) -> String {
    format!("{}\n\n{CAUTION_SUFFIX}", text.trim_end())
}
