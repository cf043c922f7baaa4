//! Slack Web API response shapes, limited to the fields relnotify reads.

use serde::Deserialize;
use serde_json::Value;

use relnotify_shared::{RelnotifyError, Result};

/// `chat.postMessage`
#[derive(Debug, Deserialize)]
pub(crate) struct PostMessageResponse {
    pub channel: String,
    pub ts: String,
}

/// `files.getUploadURLExternal`
#[derive(Debug, Deserialize)]
pub(crate) struct UploadUrlResponse {
    pub upload_url: String,
    pub file_id: String,
}

/// `files.completeUploadExternal`
#[derive(Debug, Default, Deserialize)]
pub(crate) struct CompleteUploadResponse {
    #[serde(default)]
    pub files: Vec<UploadedFile>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UploadedFile {
    pub id: String,
    #[serde(default)]
    pub url_private_download: Option<String>,
    #[serde(default)]
    pub permalink: Option<String>,
}

impl UploadedFile {
    /// Best link for downloading the file from the chat client.
    pub fn download_url(&self) -> Option<&str> {
        self.url_private_download
            .as_deref()
            .or(self.permalink.as_deref())
    }
}

/// The `ok`/`error` envelope every Web API method returns.
pub(crate) fn api_error(body: &Value) -> Option<String> {
    if body.get("ok").and_then(Value::as_bool) == Some(true) {
        return None;
    }
    Some(
        body.get("error")
            .and_then(Value::as_str)
            .unwrap_or("unknown_error")
            .to_string(),
    )
}

/// Check the envelope, then decode the method-specific fields.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(method: &str, body: Value) -> Result<T> {
    if let Some(error) = api_error(&body) {
        return Err(RelnotifyError::transport(format!("{method}: {error}")));
    }
    serde_json::from_value(body).map_err(|e| {
        RelnotifyError::validation(format!("{method}: unexpected response shape: {e}"))
    })
}
