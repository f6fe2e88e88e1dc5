use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::sse::{SseDecoder, SseFrame};
use crate::{FailureKind, Role, TranslateError, TranslationRequest};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub temperature: f32,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            temperature: 0.3,
        }
    }
}

/// Receives the accumulated translation every time it grows.
pub trait PartialSink: Send + Sync {
    fn emit(&self, text: &str);
}

#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Runs one translation to completion and returns the full text.
    async fn translate(
        &self,
        request: &TranslationRequest,
        sink: &dyn PartialSink,
    ) -> Result<String, TranslateError>;
}

/// Streams translations from an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiTranslator {
    settings: ClientSettings,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatChunk {
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    error: Option<ChatError>,
}

#[derive(Deserialize)]
struct ChatError {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize)]
struct ChatChoice {
    #[serde(default)]
    delta: Option<ChatContent>,
    #[serde(default)]
    message: Option<ChatContent>,
}

#[derive(Deserialize)]
struct ChatContent {
    #[serde(default)]
    content: Option<String>,
}

impl ChatChunk {
    fn content(&self) -> Option<&str> {
        let choice = self.choices.first()?;
        choice
            .delta
            .as_ref()
            .or(choice.message.as_ref())?
            .content
            .as_deref()
    }
}

impl OpenAiTranslator {
    pub fn new(settings: ClientSettings) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TranslateError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn endpoint(base_url: &str) -> Result<Url, TranslateError> {
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(TranslateError::new(FailureKind::InvalidUrl, "empty base url"));
        }
        Url::parse(&format!("{base}/chat/completions"))
            .map_err(|err| TranslateError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn body(&self, request: &TranslationRequest) -> Result<Vec<u8>, TranslateError> {
        let chat = ChatRequest {
            model: &request.model.id,
            messages: vec![ChatMessage {
                role: request.role,
                content: &request.assistant.prompt,
            }],
            temperature: self.settings.temperature,
            stream: true,
        };
        serde_json::to_vec(&chat)
            .map_err(|err| TranslateError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Translator for OpenAiTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
        sink: &dyn PartialSink,
    ) -> Result<String, TranslateError> {
        let endpoint = Self::endpoint(&request.model.base_url)?;
        engine_info!(
            "translate request id={} model={} target={} text_len={}",
            request.id,
            request.model.id,
            request.target_language,
            request.text.len()
        );

        let mut builder = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "text/event-stream")
            .body(self.body(request)?);
        if let Some(key) = request.model.resolve_api_key() {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TranslateError::new(
                FailureKind::HttpStatus(status.as_u16()),
                truncate(&detail, 200),
            ));
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));
        if is_json {
            // Endpoint ignored `stream: true` and answered in one piece.
            let body = response.bytes().await.map_err(map_reqwest_error)?;
            let text = parse_chunk(&body)?.unwrap_or_default();
            if text.is_empty() {
                return Err(TranslateError::new(FailureKind::EmptyResponse, "no content"));
            }
            sink.emit(&text);
            return Ok(text);
        }

        let mut decoder = SseDecoder::new();
        let mut translated = String::new();
        let mut stream = response.bytes_stream();
        let mut done = false;
        while !done {
            let Some(chunk) = stream.next().await else {
                break;
            };
            let chunk = chunk.map_err(map_reqwest_error)?;
            for frame in decoder.push(&chunk) {
                if !apply_frame(frame, &mut translated, sink)? {
                    done = true;
                    break;
                }
            }
        }
        if !done {
            for frame in decoder.finish() {
                if !apply_frame(frame, &mut translated, sink)? {
                    break;
                }
            }
        }

        if translated.is_empty() {
            return Err(TranslateError::new(FailureKind::EmptyResponse, "no content"));
        }
        engine_debug!(
            "translate request id={} finished chars={}",
            request.id,
            translated.chars().count()
        );
        Ok(translated)
    }
}

/// Returns `false` once the stream signalled completion.
fn apply_frame(
    frame: SseFrame,
    translated: &mut String,
    sink: &dyn PartialSink,
) -> Result<bool, TranslateError> {
    match frame {
        SseFrame::Done => Ok(false),
        SseFrame::Data(payload) => {
            if let Some(content) = parse_chunk(payload.as_bytes())? {
                if !content.is_empty() {
                    translated.push_str(&content);
                    sink.emit(translated);
                }
            }
            Ok(true)
        }
    }
}

fn parse_chunk(payload: &[u8]) -> Result<Option<String>, TranslateError> {
    let chunk: ChatChunk = serde_json::from_slice(payload)
        .map_err(|err| TranslateError::new(FailureKind::MalformedStream, err.to_string()))?;
    if let Some(error) = chunk.error {
        let message = error
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| "unspecified error".to_string());
        return Err(TranslateError::new(FailureKind::Service, message));
    }
    Ok(chunk.content().map(ToOwned::to_owned))
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn map_reqwest_error(err: reqwest::Error) -> TranslateError {
    if err.is_timeout() {
        return TranslateError::new(FailureKind::Timeout, err.to_string());
    }
    TranslateError::new(FailureKind::Network, err.to_string())
}
