use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use translate_engine::{
    EngineEvent, EngineHandle, FailureKind, ModelConfig, PartialSink, TranslateError,
    TranslationRequest, Translator,
};

/// Emits the configured chunks, then succeeds with their concatenation.
struct EchoTranslator {
    chunks: Vec<&'static str>,
}

#[async_trait::async_trait]
impl Translator for EchoTranslator {
    async fn translate(
        &self,
        _request: &TranslationRequest,
        sink: &dyn PartialSink,
    ) -> Result<String, TranslateError> {
        let mut text = String::new();
        for chunk in &self.chunks {
            text.push_str(chunk);
            sink.emit(&text);
        }
        Ok(text)
    }
}

/// Never finishes on its own.
struct StalledTranslator;

#[async_trait::async_trait]
impl Translator for StalledTranslator {
    async fn translate(
        &self,
        _request: &TranslationRequest,
        sink: &dyn PartialSink,
    ) -> Result<String, TranslateError> {
        sink.emit("partial");
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Ok("never".to_string())
    }
}

fn request() -> TranslationRequest {
    TranslationRequest::new(
        "hello",
        "french",
        ModelConfig {
            id: "stub".to_string(),
            provider: "test".to_string(),
            name: String::new(),
            base_url: "http://localhost".to_string(),
            api_key: None,
            api_key_env: None,
        },
    )
}

fn next(events: &Receiver<EngineEvent>) -> EngineEvent {
    events
        .recv_timeout(Duration::from_secs(5))
        .expect("engine event")
}

#[test]
fn partials_then_completion_are_tagged_with_generation() {
    let (engine, events) = EngineHandle::spawn(Arc::new(EchoTranslator {
        chunks: vec!["bonjour"],
    }));

    engine.translate(3, request());

    assert_eq!(
        next(&events),
        EngineEvent::Partial {
            generation: 3,
            text: "bonjour".to_string()
        }
    );
    assert_eq!(
        next(&events),
        EngineEvent::Completed {
            generation: 3,
            result: Ok("bonjour".to_string())
        }
    );
}

#[test]
fn cancel_completes_with_cancelled() {
    let (engine, events) = EngineHandle::spawn(Arc::new(StalledTranslator));

    engine.translate(1, request());
    assert!(matches!(
        next(&events),
        EngineEvent::Partial { generation: 1, .. }
    ));

    engine.cancel(1);
    match next(&events) {
        EngineEvent::Completed {
            generation,
            result: Err(err),
        } => {
            assert_eq!(generation, 1);
            assert_eq!(err.kind, FailureKind::Cancelled);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn cancelling_unknown_generation_is_harmless() {
    let (engine, events) = EngineHandle::spawn(Arc::new(EchoTranslator {
        chunks: vec!["a", "b"],
    }));

    engine.cancel(42);
    engine.translate(1, request());

    let mut partials = Vec::new();
    loop {
        match next(&events) {
            EngineEvent::Partial { text, .. } => partials.push(text),
            EngineEvent::Completed { result, .. } => {
                assert_eq!(result, Ok("ab".to_string()));
                break;
            }
        }
    }
    assert_eq!(partials, vec!["a", "ab"]);
}
