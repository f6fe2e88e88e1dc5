use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use engine_logging::{engine_debug, engine_info, engine_warn};
use translate_core::{
    Effect, Generation, Msg, Route, TimerKind, TranslationOutcome, TARGET_LANGUAGE_SETTING_ID,
};
use translate_engine::{
    EngineEvent, EngineHandle, FailureKind, ModelConfig, SettingsStore, TranslationRequest,
    Translator,
};

/// Executes effects emitted by the page state machine and feeds the
/// answers back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
    settings: Arc<dyn SettingsStore>,
    clipboard: Option<arboard::Clipboard>,
    model: Option<ModelConfig>,
    msg_tx: mpsc::Sender<Msg>,
    ctx: egui::Context,
}

impl EffectRunner {
    pub fn new(
        ctx: egui::Context,
        msg_tx: mpsc::Sender<Msg>,
        translator: Arc<dyn Translator>,
        settings: Arc<dyn SettingsStore>,
        model: Option<ModelConfig>,
    ) -> Self {
        let (engine, events) = EngineHandle::spawn(translator);
        spawn_event_loop(events, msg_tx.clone(), ctx.clone());

        let clipboard = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(err) => {
                engine_warn!("system clipboard unavailable, using egui output: {}", err);
                None
            }
        };

        Self {
            engine,
            settings,
            clipboard,
            model,
            msg_tx,
            ctx,
        }
    }

    pub fn set_model(&mut self, model: Option<ModelConfig>) {
        self.model = model;
    }

    /// Runs `effects` in order and returns the navigations among them.
    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Route> {
        let mut routes = Vec::new();
        for effect in effects {
            match effect {
                Effect::LoadTargetLanguage => {
                    let stored = match self.settings.get(TARGET_LANGUAGE_SETTING_ID) {
                        Ok(value) => value,
                        Err(err) => {
                            engine_warn!("failed to read target language: {}", err);
                            None
                        }
                    };
                    self.send(Msg::TargetLanguageLoaded(stored));
                }
                Effect::PersistTargetLanguage { language } => {
                    if let Err(err) = self.settings.put(TARGET_LANGUAGE_SETTING_ID, &language) {
                        engine_warn!("failed to persist target language {}: {}", language, err);
                    }
                }
                Effect::Translate {
                    generation,
                    text,
                    target_language,
                } => self.start_translation(generation, text, target_language),
                Effect::CancelTranslation { generation } => self.engine.cancel(generation),
                Effect::CopyToClipboard { text } => self.copy(text),
                Effect::StartTimer {
                    timer,
                    generation,
                    after,
                } => self.start_timer(timer, generation, after),
                Effect::Navigate(route) => routes.push(route),
            }
        }
        routes
    }

    fn start_translation(&self, generation: Generation, text: String, target_language: String) {
        let Some(model) = self.model.clone() else {
            // The page checks for a model before submitting; config may have changed since.
            engine_warn!("translation generation={} has no model", generation);
            self.send(Msg::TranslationFinished {
                generation,
                outcome: TranslationOutcome::Failed("no translation model".to_string()),
            });
            return;
        };
        engine_info!(
            "Translate generation={} model={} target={} text_len={}",
            generation,
            model.id,
            target_language,
            text.len()
        );
        let request = TranslationRequest::new(text, target_language, model);
        self.engine.translate(generation, request);
    }

    fn copy(&mut self, text: String) {
        let copied = match self.clipboard.as_mut() {
            Some(clipboard) => match clipboard.set_text(text.clone()) {
                Ok(()) => true,
                Err(err) => {
                    engine_warn!("clipboard write failed: {}", err);
                    false
                }
            },
            None => false,
        };
        if !copied {
            self.ctx.output_mut(|output| output.copied_text = text);
        }
    }

    fn start_timer(&self, timer: TimerKind, generation: Generation, after: Duration) {
        let msg_tx = self.msg_tx.clone();
        let ctx = self.ctx.clone();
        thread::spawn(move || {
            thread::sleep(after);
            if msg_tx.send(Msg::TimerElapsed { timer, generation }).is_ok() {
                ctx.request_repaint();
            }
        });
    }

    fn send(&self, msg: Msg) {
        if self.msg_tx.send(msg).is_ok() {
            self.ctx.request_repaint();
        }
    }
}

fn spawn_event_loop(
    events: mpsc::Receiver<EngineEvent>,
    msg_tx: mpsc::Sender<Msg>,
    ctx: egui::Context,
) {
    thread::spawn(move || {
        for event in events.iter() {
            if msg_tx.send(map_event(event)).is_err() {
                break;
            }
            ctx.request_repaint();
        }
        engine_debug!("engine event loop finished");
    });
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::Partial { generation, text } => Msg::TranslationPartial { generation, text },
        EngineEvent::Completed { generation, result } => Msg::TranslationFinished {
            generation,
            outcome: match result {
                Ok(text) => TranslationOutcome::Completed(text),
                Err(err) if err.kind == FailureKind::Cancelled => TranslationOutcome::Cancelled,
                Err(err) => TranslationOutcome::Failed(err.to_string()),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use translate_engine::TranslateError;

    #[test]
    fn partials_keep_their_generation() {
        let msg = map_event(EngineEvent::Partial {
            generation: 4,
            text: "Bon".to_string(),
        });
        assert_eq!(
            msg,
            Msg::TranslationPartial {
                generation: 4,
                text: "Bon".to_string()
            }
        );
    }

    #[test]
    fn completion_outcomes_are_mapped() {
        let ok = map_event(EngineEvent::Completed {
            generation: 1,
            result: Ok("Bonjour".to_string()),
        });
        assert_eq!(
            ok,
            Msg::TranslationFinished {
                generation: 1,
                outcome: TranslationOutcome::Completed("Bonjour".to_string())
            }
        );

        let cancelled = map_event(EngineEvent::Completed {
            generation: 2,
            result: Err(TranslateError {
                kind: FailureKind::Cancelled,
                message: "cancelled".to_string(),
            }),
        });
        assert_eq!(
            cancelled,
            Msg::TranslationFinished {
                generation: 2,
                outcome: TranslationOutcome::Cancelled
            }
        );

        let failed = map_event(EngineEvent::Completed {
            generation: 3,
            result: Err(TranslateError {
                kind: FailureKind::HttpStatus(500),
                message: "boom".to_string(),
            }),
        });
        match failed {
            Msg::TranslationFinished {
                generation: 3,
                outcome: TranslationOutcome::Failed(detail),
            } => assert!(detail.contains("boom")),
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
