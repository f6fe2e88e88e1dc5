use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::prompt::{default_translate_assistant, TranslateAssistant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sending,
    Pending,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
}

/// A chat-completions compatible model endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub id: String,
    pub provider: String,
    /// Display name; falls back to `id` when empty.
    #[serde(default)]
    pub name: String,
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is not set.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl ModelConfig {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }

    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = self.api_key.as_deref().filter(|key| !key.trim().is_empty()) {
            return Some(key.trim().to_string());
        }
        let var = self.api_key_env.as_deref()?.trim();
        if var.is_empty() {
            return None;
        }
        std::env::var(var).ok().filter(|key| !key.trim().is_empty())
    }
}

/// One submission from the translate page. Built fresh for every request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationRequest {
    pub id: Uuid,
    pub topic_id: Uuid,
    pub assistant: TranslateAssistant,
    pub role: Role,
    pub text: String,
    pub target_language: String,
    pub model: ModelConfig,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub status: MessageStatus,
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        target_language: impl Into<String>,
        model: ModelConfig,
    ) -> Self {
        let text = text.into();
        let target_language = target_language.into();
        Self {
            id: Uuid::new_v4(),
            topic_id: Uuid::new_v4(),
            assistant: default_translate_assistant(&target_language, &text),
            role: Role::User,
            text,
            target_language,
            model,
            created_at: Utc::now(),
            kind: MessageKind::Text,
            status: MessageStatus::Sending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ModelConfig {
        ModelConfig {
            id: "gpt-4o-mini".to_string(),
            provider: "openai".to_string(),
            name: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: None,
            api_key_env: None,
        }
    }

    #[test]
    fn every_request_gets_a_fresh_id() {
        let first = TranslationRequest::new("hello", "french", model());
        let second = TranslationRequest::new("hello", "french", model());
        assert_ne!(first.id, second.id);
        assert_eq!(first.role, Role::User);
        assert_eq!(first.status, MessageStatus::Sending);
        assert_eq!(first.assistant.target_language, "french");
    }

    #[test]
    fn request_serializes_with_wire_names() {
        let request = TranslationRequest::new("hello", "french", model());
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["type"], "text");
        assert_eq!(json["status"], "sending");
        assert!(json["created_at"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn explicit_api_key_wins_and_display_name_falls_back() {
        let mut config = model();
        assert_eq!(config.display_name(), "gpt-4o-mini");
        assert_eq!(config.resolve_api_key(), None);

        config.api_key = Some(" sk-test ".to_string());
        config.api_key_env = Some("TRANSLATE_ENGINE_TEST_UNSET_KEY".to_string());
        assert_eq!(config.resolve_api_key().as_deref(), Some("sk-test"));

        config.api_key = None;
        assert_eq!(config.resolve_api_key(), None);
    }
}
