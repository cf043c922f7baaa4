//! The chat transport seam.
//!
//! The publisher only talks to a chat service through [`ChatTransport`]. Wire
//! formats, authentication, and timeouts belong to the implementation.

use std::future::Future;
use std::path::Path;

use crate::error::Result;

/// A message as acknowledged by the chat service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedMessage {
    /// Channel ID the service filed the message under. Later updates and
    /// replies must use this rather than the configured channel name.
    pub channel: String,
    /// Message identifier, also the thread anchor for replies.
    pub id: String,
    /// Text as posted.
    pub text: String,
}

/// A single file to attach to a thread.
#[derive(Debug, Clone, Copy)]
pub struct UploadRequest<'a> {
    pub channel: &'a str,
    pub thread_id: &'a str,
    pub path: &'a Path,
    /// File name shown in the chat client.
    pub display_name: &'a str,
    /// Comment posted alongside the file.
    pub caption: &'a str,
}

/// Result of an upload call that did not fail outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The file was delivered and can be downloaded from `download_url`.
    Uploaded {
        file_id: String,
        download_url: String,
    },
    /// The call completed but the service did not confirm the file.
    Anomalous { reason: String },
}

/// Operations the release publisher needs from a chat service.
///
/// Any `Err` is treated as fatal for the run. An upload the service silently
/// rejected is reported as [`UploadOutcome::Anomalous`] instead.
pub trait ChatTransport: Send + Sync {
    /// Post a message to `channel`, optionally as a reply in `thread_id`.
    fn post_message(
        &self,
        channel: &str,
        text: &str,
        thread_id: Option<&str>,
    ) -> impl Future<Output = Result<PostedMessage>> + Send;

    /// Replace the text of an existing message in place.
    fn update_message(
        &self,
        channel: &str,
        message_id: &str,
        text: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Upload a local file into a thread.
    fn upload_file(
        &self,
        request: UploadRequest<'_>,
    ) -> impl Future<Output = Result<UploadOutcome>> + Send;
}
