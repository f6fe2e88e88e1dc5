//! Translate core: pure page state machine and view-model helpers.
pub mod autosize;
mod debounce;
mod effect;
mod i18n;
mod languages;
mod msg;
mod state;
mod update;
mod view_model;

pub use debounce::Debouncer;
pub use effect::{Effect, Route, TimerKind};
pub use i18n::{Locale, Localizer};
pub use languages::{
    find_language, search_languages, LanguageOption, DEFAULT_TARGET_LANGUAGE, LANGUAGE_OPTIONS,
};
pub use msg::{Msg, TranslationOutcome};
pub use state::{
    Generation, ModelSummary, Notice, NoticeKind, PageState, COPY_RESET_DELAY, NOTICE_DURATION,
    TARGET_LANGUAGE_SETTING_ID,
};
pub use update::update;
pub use view_model::{ModelStatus, PageViewModel};
