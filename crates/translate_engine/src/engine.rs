use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;

use engine_logging::{engine_debug, engine_error, engine_warn};
use tokio_util::sync::CancellationToken;

use crate::client::{PartialSink, Translator};
use crate::{EngineEvent, FailureKind, Generation, TranslateError, TranslationRequest};

enum EngineCommand {
    Translate {
        generation: Generation,
        request: Box<TranslationRequest>,
    },
    Cancel {
        generation: Generation,
    },
}

type TokenMap = Arc<Mutex<HashMap<Generation, CancellationToken>>>;

/// Runs translations on a background tokio runtime.
///
/// Dropping the handle stops the worker thread; unfinished translations
/// are dropped with the runtime.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn spawn(translator: Arc<dyn Translator>) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    engine_error!("failed to start translation runtime: {}", err);
                    return;
                }
            };
            let tokens: TokenMap = Arc::default();
            while let Ok(command) = cmd_rx.recv() {
                match command {
                    EngineCommand::Translate {
                        generation,
                        request,
                    } => {
                        let token = CancellationToken::new();
                        lock(&tokens).insert(generation, token.clone());
                        runtime.spawn(run_translation(
                            translator.clone(),
                            generation,
                            request,
                            token,
                            tokens.clone(),
                            event_tx.clone(),
                        ));
                    }
                    EngineCommand::Cancel { generation } => {
                        match lock(&tokens).remove(&generation) {
                            Some(token) => {
                                engine_debug!("cancelling translation generation={}", generation);
                                token.cancel();
                            }
                            None => engine_debug!(
                                "cancel for finished translation generation={}",
                                generation
                            ),
                        }
                    }
                }
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn translate(&self, generation: Generation, request: TranslationRequest) {
        if self
            .cmd_tx
            .send(EngineCommand::Translate {
                generation,
                request: Box::new(request),
            })
            .is_err()
        {
            engine_warn!("translation worker is gone; generation={} dropped", generation);
        }
    }

    pub fn cancel(&self, generation: Generation) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { generation });
    }
}

struct ChannelPartialSink {
    generation: Generation,
    tx: mpsc::Sender<EngineEvent>,
}

impl PartialSink for ChannelPartialSink {
    fn emit(&self, text: &str) {
        let _ = self.tx.send(EngineEvent::Partial {
            generation: self.generation,
            text: text.to_string(),
        });
    }
}

async fn run_translation(
    translator: Arc<dyn Translator>,
    generation: Generation,
    request: Box<TranslationRequest>,
    token: CancellationToken,
    tokens: TokenMap,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let sink = ChannelPartialSink {
        generation,
        tx: event_tx.clone(),
    };
    let result = tokio::select! {
        _ = token.cancelled() => Err(TranslateError::new(FailureKind::Cancelled, "cancelled")),
        result = translator.translate(&request, &sink) => result,
    };
    lock(&tokens).remove(&generation);

    if let Err(err) = &result {
        if err.kind != FailureKind::Cancelled {
            engine_warn!("translation generation={} failed: {}", generation, err);
        }
    }
    let _ = event_tx.send(EngineEvent::Completed { generation, result });
}

fn lock(
    tokens: &TokenMap,
) -> std::sync::MutexGuard<'_, HashMap<Generation, CancellationToken>> {
    tokens.lock().unwrap_or_else(PoisonError::into_inner)
}
