use crate::{Generation, ModelSummary, TimerKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Page became visible.
    Mounted,
    /// Page is going away; any in-flight translation is abandoned.
    Unmounted,
    /// User edited the source text.
    TextChanged(String),
    /// User clicked the clear control of the input.
    TextCleared,
    /// User clicked Translate.
    SubmitClicked,
    /// Settings store answered the target-language lookup.
    TargetLanguageLoaded(Option<String>),
    /// User picked a target language from the dropdown.
    TargetLanguageSelected(String),
    /// Configured translation model changed (or was removed).
    ModelChanged(Option<ModelSummary>),
    /// Accumulated output so far for a translation.
    TranslationPartial { generation: Generation, text: String },
    /// Engine finished a translation, successfully or not.
    TranslationFinished {
        generation: Generation,
        outcome: TranslationOutcome,
    },
    /// User clicked the copy control.
    CopyClicked,
    TimerElapsed { timer: TimerKind, generation: Generation },
    /// User closed the notification.
    NoticeDismissed,
    /// User followed the model status link.
    OpenModelSettings,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Completed(String),
    Failed(String),
    Cancelled,
}
