//! Slack Web API transport for relnotify.
//!
//! Implements [`ChatTransport`] with `chat.postMessage`, `chat.update`, and the
//! external upload flow (`files.getUploadURLExternal` → raw upload →
//! `files.completeUploadExternal`).

mod api;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde_json::{Value, json};
use tracing::{debug, instrument, warn};
use url::Url;

use relnotify_shared::{
    ChatTransport, PostedMessage, RelnotifyError, Result, SlackConfig, UploadOutcome,
    UploadRequest, resolve_token,
};

use api::{CompleteUploadResponse, PostMessageResponse, UploadUrlResponse};

/// User-Agent string for Slack requests.
const USER_AGENT: &str = concat!("relnotify/", env!("CARGO_PKG_VERSION"));

/// Settings needed to talk to Slack.
#[derive(Debug, Clone)]
pub struct SlackOptions {
    /// Bot token (`xoxb-...`).
    pub token: String,
    /// Web API base. A missing trailing `/` is added so method names join
    /// under it.
    pub api_base: Url,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// `Url::join` replaces the last segment of a base without a trailing slash.
fn with_trailing_slash(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

/// A Slack Web API client.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http: Client,
    api_base: Url,
    token: String,
}

impl SlackClient {
    pub fn new(opts: SlackOptions) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()
            .map_err(|e| RelnotifyError::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_base: with_trailing_slash(opts.api_base),
            token: opts.token,
        })
    }

    /// Build a client from the `[slack]` config section, reading the token
    /// from its env var. Fails with a config error if anything is missing.
    pub fn from_config(config: &SlackConfig) -> Result<Self> {
        config.validate()?;
        let token = resolve_token(config)?;
        let api_base = Url::parse(&config.api_base).map_err(|e| {
            RelnotifyError::config(format!("invalid Slack api_base '{}': {e}", config.api_base))
        })?;

        Self::new(SlackOptions {
            token,
            api_base,
            timeout_secs: config.timeout_secs,
        })
    }

    fn endpoint(&self, method: &str) -> Result<Url> {
        self.api_base
            .join(method)
            .map_err(|e| RelnotifyError::config(format!("invalid Slack endpoint {method}: {e}")))
    }

    /// Send an authenticated request and return the decoded JSON body.
    async fn send(&self, method: &str, request: RequestBuilder) -> Result<Value> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| RelnotifyError::transport(format!("{method}: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelnotifyError::transport(format!("{method}: HTTP {status}")));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| RelnotifyError::transport(format!("{method}: failed to read body: {e}")))
    }

    async fn post_json(&self, method: &str, body: &Value) -> Result<Value> {
        let url = self.endpoint(method)?;
        self.send(method, self.http.post(url).json(body)).await
    }

    async fn post_form(&self, method: &str, form: &[(&str, String)]) -> Result<Value> {
        let url = self.endpoint(method)?;
        self.send(method, self.http.post(url).form(form)).await
    }
}

impl ChatTransport for SlackClient {
    #[instrument(skip_all, fields(%channel, thread = thread_id.unwrap_or("")))]
    async fn post_message(
        &self,
        channel: &str,
        text: &str,
        thread_id: Option<&str>,
    ) -> Result<PostedMessage> {
        const METHOD: &str = "chat.postMessage";

        let mut body = json!({
            "channel": channel,
            "text": text,
        });
        if let Some(ts) = thread_id {
            body["thread_ts"] = Value::String(ts.to_string());
        }

        let response: PostMessageResponse = api::decode(METHOD, self.post_json(METHOD, &body).await?)?;
        debug!(ts = %response.ts, channel = %response.channel, "message posted");

        Ok(PostedMessage {
            channel: response.channel,
            id: response.ts,
            text: text.to_string(),
        })
    }

    #[instrument(skip_all, fields(%channel, %message_id))]
    async fn update_message(&self, channel: &str, message_id: &str, text: &str) -> Result<()> {
        const METHOD: &str = "chat.update";

        let body = json!({
            "channel": channel,
            "ts": message_id,
            "text": text,
        });

        let response = self.post_json(METHOD, &body).await?;
        if let Some(error) = api::api_error(&response) {
            return Err(RelnotifyError::transport(format!("{METHOD}: {error}")));
        }

        debug!("message updated");
        Ok(())
    }

    #[instrument(skip_all, fields(path = %request.path.display(), thread = request.thread_id))]
    async fn upload_file(&self, request: UploadRequest<'_>) -> Result<UploadOutcome> {
        const GET_URL: &str = "files.getUploadURLExternal";
        const COMPLETE: &str = "files.completeUploadExternal";

        let file = tokio::fs::File::open(request.path)
            .await
            .map_err(|e| RelnotifyError::io(request.path, e))?;
        let length = file
            .metadata()
            .await
            .map_err(|e| RelnotifyError::io(request.path, e))?
            .len();

        // 1. Reserve an upload slot.
        let slot: UploadUrlResponse = api::decode(
            GET_URL,
            self.post_form(
                GET_URL,
                &[
                    ("filename", request.display_name.to_string()),
                    ("length", length.to_string()),
                ],
            )
            .await?,
        )?;

        // 2. Stream the raw bytes.
        let response = self
            .http
            .post(&slot.upload_url)
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_LENGTH, length)
            .body(reqwest::Body::from(file))
            .send()
            .await
            .map_err(|e| RelnotifyError::transport(format!("file upload: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelnotifyError::transport(format!("file upload: HTTP {status}")));
        }

        // 3. Share it into the thread.
        let files = json!([{ "id": slot.file_id, "title": request.display_name }]);
        let completed = self
            .post_form(
                COMPLETE,
                &[
                    ("files", files.to_string()),
                    ("channel_id", request.channel.to_string()),
                    ("thread_ts", request.thread_id.to_string()),
                    ("initial_comment", request.caption.to_string()),
                ],
            )
            .await?;

        if let Some(error) = api::api_error(&completed) {
            warn!(%error, "upload completion rejected");
            return Ok(UploadOutcome::Anomalous {
                reason: format!("{COMPLETE}: {error}"),
            });
        }

        let completed: CompleteUploadResponse =
            serde_json::from_value(completed).unwrap_or_default();

        match completed.files.first() {
            Some(file) => match file.download_url() {
                Some(url) => Ok(UploadOutcome::Uploaded {
                    file_id: file.id.clone(),
                    download_url: url.to_string(),
                }),
                None => Ok(UploadOutcome::Anomalous {
                    reason: format!("{COMPLETE}: file {} has no download link", file.id),
                }),
            },
            None => Ok(UploadOutcome::Anomalous {
                reason: format!("{COMPLETE}: response contained no file metadata"),
            }),
        }
    }
}
