use crate::{
    Effect, Msg, NoticeKind, PageState, Route, TimerKind, TranslationOutcome, COPY_RESET_DELAY,
    NOTICE_DURATION,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::Mounted => vec![Effect::LoadTargetLanguage],
        Msg::Unmounted => match state.abandon_translation() {
            Some(generation) => vec![Effect::CancelTranslation { generation }],
            None => Vec::new(),
        },
        Msg::TextChanged(text) => {
            // The input is read-only while a translation runs.
            if !state.is_loading() {
                state.set_text(text);
            }
            Vec::new()
        }
        Msg::TextCleared => {
            if !state.is_loading() {
                state.set_text(String::new());
            }
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::TargetLanguageLoaded(stored) => {
            if let Some(language) = stored.filter(|language| !language.trim().is_empty()) {
                state.set_target_language(language);
            }
            Vec::new()
        }
        Msg::TargetLanguageSelected(language) => {
            if language.trim().is_empty() || !state.set_target_language(language.clone()) {
                Vec::new()
            } else {
                vec![Effect::PersistTargetLanguage { language }]
            }
        }
        Msg::ModelChanged(model) => {
            state.set_model(model);
            Vec::new()
        }
        Msg::TranslationPartial { generation, text } => {
            if state.is_active(generation) {
                state.set_result(text);
            }
            Vec::new()
        }
        Msg::TranslationFinished {
            generation,
            outcome,
        } => {
            if !state.is_active(generation) {
                return (state, Vec::new());
            }
            state.finish_translation();
            match outcome {
                TranslationOutcome::Completed(text) => {
                    if !text.is_empty() {
                        state.set_result(text);
                    }
                    Vec::new()
                }
                // Partial output received so far stays visible.
                TranslationOutcome::Failed(detail) => {
                    notify(&mut state, NoticeKind::TranslationFailed { detail })
                }
                TranslationOutcome::Cancelled => Vec::new(),
            }
        }
        Msg::CopyClicked => {
            if state.result().is_empty() {
                Vec::new()
            } else {
                let text = state.result().to_string();
                let generation = state.mark_copied();
                vec![
                    Effect::CopyToClipboard { text },
                    Effect::StartTimer {
                        timer: TimerKind::CopyReset,
                        generation,
                        after: COPY_RESET_DELAY,
                    },
                ]
            }
        }
        Msg::TimerElapsed { timer, generation } => {
            match timer {
                TimerKind::CopyReset => state.reset_copied(generation),
                TimerKind::NoticeExpiry => state.expire_notice(generation),
            }
            Vec::new()
        }
        Msg::NoticeDismissed => {
            state.dismiss_notice();
            Vec::new()
        }
        Msg::OpenModelSettings => vec![Effect::Navigate(Route::ModelSettings)],
    };

    (state, effects)
}

fn submit(state: &mut PageState) -> Vec<Effect> {
    if state.is_loading() || state.text().trim().is_empty() {
        return Vec::new();
    }
    if !state.has_model() {
        return notify(state, NoticeKind::NotConfigured);
    }

    let text = state.text().to_string();
    let target_language = state.target_language().to_string();
    let generation = state.begin_translation();
    vec![Effect::Translate {
        generation,
        text,
        target_language,
    }]
}

fn notify(state: &mut PageState, kind: NoticeKind) -> Vec<Effect> {
    let generation = state.show_notice(kind);
    vec![Effect::StartTimer {
        timer: TimerKind::NoticeExpiry,
        generation,
        after: NOTICE_DURATION,
    }]
}
