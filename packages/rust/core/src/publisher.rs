//! End-to-end `publish` flow: resolve → post → upload → update, with
//! best-effort annotation of the announcement when anything fails.
//!
//! Every transport call is sequential. Each step needs the message ID or the
//! link list produced by the previous one, and download links must appear in
//! upload order.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, instrument, warn};

use relnotify_shared::{
    ChatTransport, EffectiveConfig, NotifyConfig, PostedMessage, RelnotifyError, ReleaseContext,
    Result, UploadOutcome, UploadRequest,
};

use crate::assets::resolve_assets;
use crate::message::{
    append_download_links, compose_message, error_reply, format_download_link,
    last_commit_excerpt, with_caution,
};
use crate::template::interpolate;

/// Configuration for the `publish_release` flow.
#[derive(Debug, Clone)]
pub struct PublishConfig {
    /// Channel to announce in (name or ID).
    pub channel: String,
    /// Directory relative asset patterns are resolved against.
    pub workdir: PathBuf,
    /// Announcement settings, including prerelease overrides.
    pub notify: NotifyConfig,
}

/// Result of the `publish_release` flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishOutcome {
    /// Prerelease branch with prerelease announcements disabled.
    Skipped,
    /// Announcement posted and rewritten with download links.
    Published {
        channel: String,
        message_id: String,
        links: Vec<String>,
    },
    /// Announcement posted; no asset produced a download link.
    PostedWithoutLinks { channel: String, message_id: String },
}

/// Where a publish run currently is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PublishStage {
    #[default]
    Idle,
    Resolving,
    Posted,
    Uploading,
    Updated,
    Failed,
}

impl fmt::Display for PublishStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Resolving => "resolving",
            Self::Posted => "posted",
            Self::Uploading => "uploading",
            Self::Updated => "updated",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Progress callback for reporting publish status.
pub trait PublishProgress: Send + Sync {
    /// Called when entering a new stage.
    fn stage(&self, stage: PublishStage);
    /// Called after each asset is uploaded and linked.
    fn asset_uploaded(&self, label: &str, current: usize, total: usize);
    /// Called when the flow completes successfully.
    fn done(&self, outcome: &PublishOutcome);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl PublishProgress for SilentProgress {
    fn stage(&self, _stage: PublishStage) {}
    fn asset_uploaded(&self, _label: &str, _current: usize, _total: usize) {}
    fn done(&self, _outcome: &PublishOutcome) {}
}

/// Mutable state for one run. Never outlives `publish_release`.
#[derive(Debug, Default)]
struct PublishState {
    stage: PublishStage,
    /// The announcement as last successfully written.
    message: Option<PostedMessage>,
    /// Download lines in upload order. Only ever appended to.
    links: Vec<String>,
    uploaded_any: bool,
}

impl PublishState {
    fn enter(&mut self, stage: PublishStage, progress: &dyn PublishProgress) {
        debug!(from = %self.stage, to = %stage, "publish stage transition");
        self.stage = stage;
        progress.stage(stage);
    }
}

/// Run the full `publish` flow.
///
/// 1. Skip prerelease branches unless enabled
/// 2. Resolve assets (fails before any transport call)
/// 3. Post the announcement
/// 4. Upload each asset into the announcement thread
/// 5. Rewrite the announcement with download links
///
/// On failure after step 2, the thread gets an error reply and the
/// announcement gets a caution notice; the original error is then returned.
#[instrument(skip_all, fields(version = %release.version, channel = %config.channel))]
pub async fn publish_release<T: ChatTransport>(
    transport: &T,
    config: &PublishConfig,
    release: &ReleaseContext,
    progress: &dyn PublishProgress,
) -> Result<PublishOutcome> {
    let effective = config.notify.effective_for(&release.branch);

    if release.branch.prerelease && !effective.prerelease_enabled {
        info!(branch = %release.branch.name, "prerelease announcements disabled, skipping");
        let outcome = PublishOutcome::Skipped;
        progress.done(&outcome);
        return Ok(outcome);
    }

    let mut state = PublishState::default();

    match run(transport, config, &effective, release, &mut state, progress).await {
        Ok(outcome) => {
            progress.done(&outcome);
            Ok(outcome)
        }
        Err(err) => {
            let failed_in = state.stage;
            state.enter(PublishStage::Failed, progress);
            error!(stage = %failed_in, error = %err, "release announcement failed");
            annotate_failure(transport, &state, release, &err).await;
            Err(err)
        }
    }
}

async fn run<T: ChatTransport>(
    transport: &T,
    config: &PublishConfig,
    effective: &EffectiveConfig,
    release: &ReleaseContext,
    state: &mut PublishState,
    progress: &dyn PublishProgress,
) -> Result<PublishOutcome> {
    // --- Resolve ---
    state.enter(PublishStage::Resolving, progress);
    let assets = resolve_assets(&effective.assets, release, &config.workdir)?;
    info!(assets = assets.len(), "assets resolved");

    // --- Post ---
    let headline = interpolate(&effective.message_template, release);
    let excerpt = if effective.include_last_commit_text {
        last_commit_excerpt(&release.commits)
    } else {
        String::new()
    };
    let body = compose_message(&headline, effective, &excerpt, release.notes_or_empty());

    state.enter(PublishStage::Posted, progress);
    let posted = transport
        .post_message(&config.channel, body.trim_end(), None)
        .await?;
    info!(message_id = %posted.id, channel = %posted.channel, "announcement posted");
    state.message = Some(posted.clone());

    // --- Upload ---
    state.enter(PublishStage::Uploading, progress);
    let total = assets.len();

    for (index, (path, label)) in assets.iter().enumerate() {
        ensure_asset_present(path).await?;

        let display_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| label.to_string());

        let request = UploadRequest {
            channel: &posted.channel,
            thread_id: &posted.id,
            path,
            display_name: &display_name,
            caption: label,
        };

        match transport.upload_file(request).await? {
            UploadOutcome::Uploaded {
                file_id,
                download_url,
            } => {
                debug!(%file_id, path = %path.display(), "asset uploaded");
                state.links.push(format_download_link(label, &download_url));
                state.uploaded_any = true;
                progress.asset_uploaded(label, index + 1, total);
            }
            UploadOutcome::Anomalous { reason } => {
                warn!(path = %path.display(), %reason, "upload not confirmed, skipping asset");
            }
        }
    }

    // --- Update ---
    if !state.uploaded_any {
        info!("no download links collected, announcement left as posted");
        return Ok(PublishOutcome::PostedWithoutLinks {
            channel: posted.channel,
            message_id: posted.id,
        });
    }

    let updated = append_download_links(&body, &state.links, &effective.last_line);
    transport
        .update_message(&posted.channel, &posted.id, &updated)
        .await?;

    if let Some(message) = state.message.as_mut() {
        message.text = updated;
    }
    state.enter(PublishStage::Updated, progress);
    info!(links = state.links.len(), "announcement updated with download links");

    Ok(PublishOutcome::Published {
        channel: posted.channel,
        message_id: posted.id,
        links: state.links.clone(),
    })
}

/// Re-check an asset right before its upload. A file that is gone is
/// `MissingAsset`; an error while checking is reported as itself.
async fn ensure_asset_present(path: &Path) -> Result<()> {
    match tokio::fs::try_exists(path).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(RelnotifyError::MissingAsset {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(RelnotifyError::io(path, e)),
    }
}

/// Flag a failed release in the channel. Failures here are logged; the
/// caller still returns the error that triggered the annotation.
async fn annotate_failure<T: ChatTransport>(
    transport: &T,
    state: &PublishState,
    release: &ReleaseContext,
    err: &RelnotifyError,
) {
    let Some(message) = &state.message else {
        debug!("no announcement was posted, nothing to annotate");
        return;
    };

    let reply = error_reply(&release.version, err);
    if let Err(e) = transport
        .post_message(&message.channel, &reply, Some(&message.id))
        .await
    {
        error!(error = %e, "failed to post error reply in release thread");
    }

    let cautioned = with_caution(&message.text);
    if let Err(e) = transport
        .update_message(&message.channel, &message.id, &cautioned)
        .await
    {
        error!(error = %e, "failed to add caution notice to announcement");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use relnotify_shared::{AssetDeclaration, Branch, Commit};

    use super::*;
    use crate::message::CAUTION_SUFFIX;

    const CHANNEL_ID: &str = "C0RELEASES";
    const MESSAGE_ID: &str = "1700000000.000100";

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Post {
            text: String,
            thread: Option<String>,
        },
        Update {
            channel: String,
            id: String,
            text: String,
        },
        Upload {
            thread: String,
            name: String,
            caption: String,
        },
    }

    /// In-memory transport that records every call.
    #[derive(Default)]
    struct RecordingTransport {
        calls: Mutex<Vec<Call>>,
        fail_post: bool,
        fail_upload: bool,
        fail_update: bool,
        fail_reply: bool,
        /// File names the service "accepts" without returning metadata.
        anomalous: Vec<String>,
        /// Removed from disk when the first upload happens.
        delete_on_upload: Option<PathBuf>,
    }

    impl RecordingTransport {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl ChatTransport for RecordingTransport {
        async fn post_message(
            &self,
            _channel: &str,
            text: &str,
            thread_id: Option<&str>,
        ) -> Result<PostedMessage> {
            self.record(Call::Post {
                text: text.to_string(),
                thread: thread_id.map(String::from),
            });
            if thread_id.is_none() && self.fail_post {
                return Err(RelnotifyError::transport("chat.postMessage: not_in_channel"));
            }
            if thread_id.is_some() && self.fail_reply {
                return Err(RelnotifyError::transport("chat.postMessage: ratelimited"));
            }
            Ok(PostedMessage {
                channel: CHANNEL_ID.into(),
                id: if thread_id.is_some() {
                    "1700000000.000200".into()
                } else {
                    MESSAGE_ID.into()
                },
                text: text.to_string(),
            })
        }

        async fn update_message(&self, channel: &str, message_id: &str, text: &str) -> Result<()> {
            self.record(Call::Update {
                channel: channel.to_string(),
                id: message_id.to_string(),
                text: text.to_string(),
            });
            let is_caution = text.ends_with(CAUTION_SUFFIX);
            if self.fail_update && !is_caution {
                return Err(RelnotifyError::transport("chat.update: msg_too_long"));
            }
            Ok(())
        }

        async fn upload_file(&self, request: UploadRequest<'_>) -> Result<UploadOutcome> {
            self.record(Call::Upload {
                thread: request.thread_id.to_string(),
                name: request.display_name.to_string(),
                caption: request.caption.to_string(),
            });
            if let Some(path) = &self.delete_on_upload {
                let _ = std::fs::remove_file(path);
            }
            if self.fail_upload {
                return Err(RelnotifyError::transport("upload: connection reset"));
            }
            if self.anomalous.iter().any(|n| n == request.display_name) {
                return Ok(UploadOutcome::Anomalous {
                    reason: "no file metadata in response".into(),
                });
            }
            Ok(UploadOutcome::Uploaded {
                file_id: format!("F-{}", request.display_name),
                download_url: format!("https://files.example.com/{}", request.display_name),
            })
        }
    }

    fn scenario_release() -> ReleaseContext {
        ReleaseContext {
            version: "1.2.0".into(),
            notes: Some("fix bug".into()),
            commits: vec![Commit::new("fix: bug\n\nDetails here\nSigned-off-by: X")],
            branch: Branch {
                name: "main".into(),
                prerelease: false,
            },
        }
    }

    fn scenario_config(workdir: &Path, assets: Vec<AssetDeclaration>) -> PublishConfig {
        let notify = NotifyConfig {
            include_changelog: true,
            include_last_commit_text: true,
            assets,
            ..Default::default()
        };
        PublishConfig {
            channel: "#releases".into(),
            workdir: workdir.to_path_buf(),
            notify,
        }
    }

    fn touch(dir: &Path, rel: &str) -> PathBuf {
        let path = dir.join(rel);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"payload").unwrap();
        path
    }

    fn binary_asset() -> Vec<AssetDeclaration> {
        vec![AssetDeclaration::new("dist/app.bin", "Binary")]
    }

    #[tokio::test]
    async fn scenario_a_posts_uploads_and_updates() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dist/app.bin");
        let transport = RecordingTransport::default();
        let config = scenario_config(dir.path(), binary_asset());

        let outcome = publish_release(&transport, &config, &scenario_release(), &SilentProgress)
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(calls.len(), 3);

        let Call::Post { text, thread } = &calls[0] else {
            panic!("expected initial post, got {:?}", calls[0]);
        };
        assert!(thread.is_none());
        assert_eq!(
            text,
            "New release: 1.2.0\n\nDescription:\nDetails here\n\nChangelog:\nfix bug"
        );

        assert_eq!(
            calls[1],
            Call::Upload {
                thread: MESSAGE_ID.into(),
                name: "app.bin".into(),
                caption: "Binary".into(),
            }
        );

        let Call::Update { channel, id, text } = &calls[2] else {
            panic!("expected update, got {:?}", calls[2]);
        };
        assert_eq!(channel, CHANNEL_ID);
        assert_eq!(id, MESSAGE_ID);
        assert!(text.starts_with("New release: 1.2.0\n\nDescription:\nDetails here\n\nChangelog:\nfix bug"));
        assert!(text.contains("Download Links:\n• Binary: https://files.example.com/app.bin"));

        assert_eq!(
            outcome,
            PublishOutcome::Published {
                channel: CHANNEL_ID.into(),
                message_id: MESSAGE_ID.into(),
                links: vec!["• Binary: https://files.example.com/app.bin".into()],
            }
        );
    }

    #[tokio::test]
    async fn scenario_b_missing_asset_fails_before_any_call() {
        let dir = tempfile::tempdir().unwrap();
        let transport = RecordingTransport::default();
        let config = scenario_config(dir.path(), binary_asset());

        let err = publish_release(&transport, &config, &scenario_release(), &SilentProgress)
            .await
            .unwrap_err();

        match err {
            RelnotifyError::UnmatchedAssets { patterns } => {
                assert_eq!(patterns, vec!["dist/app.bin"]);
            }
            other => panic!("expected UnmatchedAssets, got {other:?}"),
        }
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn scenario_c_upload_error_annotates_and_propagates() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dist/app.bin");
        let transport = RecordingTransport {
            fail_upload: true,
            ..Default::default()
        };
        let config = scenario_config(dir.path(), binary_asset());

        let err = publish_release(&transport, &config, &scenario_release(), &SilentProgress)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("connection reset"));

        let calls = transport.calls();
        assert_eq!(calls.len(), 4);

        let Call::Post { text, thread } = &calls[2] else {
            panic!("expected thread reply, got {:?}", calls[2]);
        };
        assert_eq!(thread.as_deref(), Some(MESSAGE_ID));
        assert!(text.contains("1.2.0"));
        assert!(text.contains("connection reset"));

        let Call::Update { id, text, .. } = &calls[3] else {
            panic!("expected caution update, got {:?}", calls[3]);
        };
        assert_eq!(id, MESSAGE_ID);
        assert!(text.starts_with("New release: 1.2.0"));
        assert!(text.ends_with(CAUTION_SUFFIX));
    }

    #[tokio::test]
    async fn scenario_d_prerelease_skipped_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let transport = RecordingTransport::default();
        let config = scenario_config(dir.path(), binary_asset());
        let mut release = scenario_release();
        release.branch = Branch {
            name: "beta".into(),
            prerelease: true,
        };

        let outcome = publish_release(&transport, &config, &release, &SilentProgress)
            .await
            .unwrap();

        assert_eq!(outcome, PublishOutcome::Skipped);
        assert!(transport.calls().is_empty());
    }

    #[tokio::test]
    async fn prerelease_uses_override_template_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let transport = RecordingTransport::default();
        let mut config = scenario_config(dir.path(), Vec::new());
        config.notify.prerelease_enabled = true;
        config.notify.prerelease.message_template = Some("Pre-release: ${version}".into());
        let mut release = scenario_release();
        release.version = "2.0.0-beta.1".into();
        release.branch.prerelease = true;

        publish_release(&transport, &config, &release, &SilentProgress)
            .await
            .unwrap();

        let Call::Post { text, .. } = &transport.calls()[0] else {
            panic!("expected post");
        };
        assert!(text.starts_with("Pre-release: 2.0.0-beta.1"));
    }

    #[tokio::test]
    async fn no_assets_leaves_message_as_posted() {
        let dir = tempfile::tempdir().unwrap();
        let transport = RecordingTransport::default();
        let config = scenario_config(dir.path(), Vec::new());

        let outcome = publish_release(&transport, &config, &scenario_release(), &SilentProgress)
            .await
            .unwrap();

        assert_eq!(
            outcome,
            PublishOutcome::PostedWithoutLinks {
                channel: CHANNEL_ID.into(),
                message_id: MESSAGE_ID.into(),
            }
        );
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn anomalous_upload_is_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dist/a.bin");
        touch(dir.path(), "dist/b.bin");
        let transport = RecordingTransport {
            anomalous: vec!["a.bin".into()],
            ..Default::default()
        };
        let config = scenario_config(dir.path(), vec![AssetDeclaration::new("dist/*.bin", "Build")]);

        let outcome = publish_release(&transport, &config, &scenario_release(), &SilentProgress)
            .await
            .unwrap();

        let PublishOutcome::Published { links, .. } = outcome else {
            panic!("expected Published");
        };
        assert_eq!(links, vec!["• Build: https://files.example.com/b.bin"]);
    }

    #[tokio::test]
    async fn all_uploads_anomalous_reports_without_update() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dist/app.bin");
        let transport = RecordingTransport {
            anomalous: vec!["app.bin".into()],
            ..Default::default()
        };
        let config = scenario_config(dir.path(), binary_asset());

        let outcome = publish_release(&transport, &config, &scenario_release(), &SilentProgress)
            .await
            .unwrap();

        assert!(matches!(outcome, PublishOutcome::PostedWithoutLinks { .. }));
        assert!(
            !transport
                .calls()
                .iter()
                .any(|c| matches!(c, Call::Update { .. }))
        );
    }

    #[tokio::test]
    async fn links_follow_upload_order_and_last_line_closes_message() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dist/app.bin");
        touch(dir.path(), "dist/src.tar.gz");
        let transport = RecordingTransport::default();
        let mut config = scenario_config(
            dir.path(),
            vec![
                AssetDeclaration::new("dist/src.tar.gz", "Source"),
                AssetDeclaration::new("dist/app.bin", "Binary"),
            ],
        );
        config.notify.last_line = "Happy shipping!".into();

        publish_release(&transport, &config, &scenario_release(), &SilentProgress)
            .await
            .unwrap();

        let Some(Call::Update { text, .. }) = transport.calls().last().cloned() else {
            panic!("expected final update");
        };
        assert!(text.ends_with(
            "Download Links:\n• Source: https://files.example.com/src.tar.gz\n\
             • Binary: https://files.example.com/app.bin\n\nHappy shipping!"
        ));
    }

    #[tokio::test]
    async fn file_removed_before_upload_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dist/a.bin");
        let second = touch(dir.path(), "dist/b.bin");
        let transport = RecordingTransport {
            delete_on_upload: Some(second.clone()),
            ..Default::default()
        };
        let config = scenario_config(dir.path(), vec![AssetDeclaration::new("dist/*.bin", "Build")]);

        let err = publish_release(&transport, &config, &scenario_release(), &SilentProgress)
            .await
            .unwrap_err();

        match err {
            RelnotifyError::MissingAsset { path } => assert_eq!(path, second),
            other => panic!("expected MissingAsset, got {other:?}"),
        }

        // One upload, then the error reply and caution update.
        let calls = transport.calls();
        let uploads = calls.iter().filter(|c| matches!(c, Call::Upload { .. })).count();
        assert_eq!(uploads, 1);
        assert!(matches!(calls.last(), Some(Call::Update { text, .. }) if text.ends_with(CAUTION_SUFFIX)));
    }

    #[tokio::test]
    async fn failed_post_has_nothing_to_annotate() {
        let dir = tempfile::tempdir().unwrap();
        let transport = RecordingTransport {
            fail_post: true,
            ..Default::default()
        };
        let config = scenario_config(dir.path(), Vec::new());

        let err = publish_release(&transport, &config, &scenario_release(), &SilentProgress)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("not_in_channel"));
        assert_eq!(transport.calls().len(), 1);
    }

    #[tokio::test]
    async fn failed_update_cautions_the_original_text() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dist/app.bin");
        let transport = RecordingTransport {
            fail_update: true,
            ..Default::default()
        };
        let config = scenario_config(dir.path(), binary_asset());

        let err = publish_release(&transport, &config, &scenario_release(), &SilentProgress)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("msg_too_long"));

        let Some(Call::Update { text, .. }) = transport.calls().last().cloned() else {
            panic!("expected caution update");
        };
        assert_eq!(
            text,
            format!(
                "New release: 1.2.0\n\nDescription:\nDetails here\n\nChangelog:\nfix bug\n\n{CAUTION_SUFFIX}"
            )
        );
    }

    #[tokio::test]
    async fn recovery_failure_still_surfaces_original_error() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "dist/app.bin");
        let transport = RecordingTransport {
            fail_upload: true,
            fail_reply: true,
            ..Default::default()
        };
        let config = scenario_config(dir.path(), binary_asset());

        let err = publish_release(&transport, &config, &scenario_release(), &SilentProgress)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("connection reset"));
        // The caution update is still attempted after the reply fails.
        assert!(matches!(
            transport.calls().last(),
            Some(Call::Update { text, .. }) if text.ends_with(CAUTION_SUFFIX)
        ));
    }

    #[tokio::test]
    async fn present_asset_passes_check() {
        let dir = tempfile::tempdir().unwrap();
        let file = touch(dir.path(), "dist/app.bin");
        ensure_asset_present(&file).await.unwrap();
    }

    #[tokio::test]
    async fn absent_asset_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ensure_asset_present(&dir.path().join("gone.bin"))
            .await
            .unwrap_err();
        assert!(matches!(err, RelnotifyError::MissingAsset { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn failed_existence_check_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = touch(dir.path(), "dist/app.bin");

        // A regular file used as a directory fails with ENOTDIR, not NotFound.
        let err = ensure_asset_present(&file.join("nested.bin"))
            .await
            .unwrap_err();
        assert!(matches!(err, RelnotifyError::Io { .. }), "got {err:?}");
    }

    #[test]
    fn stage_names() {
        assert_eq!(PublishStage::default().to_string(), "idle");
        assert_eq!(PublishStage::Uploading.to_string(), "uploading");
    }
}
