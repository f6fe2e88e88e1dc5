use std::time::Duration;

use crate::Generation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Read the persisted target language; answer with `Msg::TargetLanguageLoaded`.
    LoadTargetLanguage,
    PersistTargetLanguage { language: String },
    Translate {
        generation: Generation,
        text: String,
        target_language: String,
    },
    CancelTranslation { generation: Generation },
    CopyToClipboard { text: String },
    /// Answer with `Msg::TimerElapsed` once `after` has passed.
    StartTimer {
        timer: TimerKind,
        generation: Generation,
        after: Duration,
    },
    Navigate(Route),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    CopyReset,
    NoticeExpiry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Translate,
    ModelSettings,
}
