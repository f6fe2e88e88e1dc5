//! Translate engine: model requests, streaming, persistence and effect execution.
mod client;
mod engine;
mod persist;
mod prompt;
mod request;
mod settings;
mod sse;
mod types;

pub use client::{ClientSettings, OpenAiTranslator, PartialSink, Translator};
pub use engine::EngineHandle;
pub use persist::{ensure_dir, load_ron, save_ron, AtomicFileWriter, PersistError};
pub use prompt::{default_translate_assistant, TranslateAssistant, TRANSLATE_ASSISTANT_ID};
pub use request::{MessageKind, MessageStatus, ModelConfig, Role, TranslationRequest};
pub use settings::{RonSettingsStore, SettingsStore, SETTINGS_FILENAME};
pub use sse::{SseDecoder, SseFrame};
pub use types::{EngineEvent, FailureKind, Generation, TranslateError};
