use std::time::Duration;

use crate::view_model::{ModelStatus, PageViewModel};
use crate::DEFAULT_TARGET_LANGUAGE;

pub type Generation = u64;

/// Settings key under which the target language is persisted.
pub const TARGET_LANGUAGE_SETTING_ID: &str = "translate:target:language";

/// How long the copy control shows its "copied" state.
pub const COPY_RESET_DELAY: Duration = Duration::from_millis(2000);

/// How long a notice stays up unless dismissed earlier.
pub const NOTICE_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    pub name: String,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoticeKind {
    NotConfigured,
    TranslationFailed { detail: String },
}

/// A single-slot notification; showing a new one replaces the old one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub generation: Generation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    text: String,
    result: String,
    target_language: String,
    loading: bool,
    copied: bool,
    model: Option<ModelSummary>,
    local_ai: bool,
    notice: Option<Notice>,
    next_generation: Generation,
    active_generation: Option<Generation>,
    copy_generation: Generation,
    notice_generation: Generation,
    dirty: bool,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            text: String::new(),
            result: String::new(),
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            loading: false,
            copied: false,
            model: None,
            local_ai: false,
            notice: None,
            next_generation: 0,
            active_generation: None,
            copy_generation: 0,
            notice_generation: 0,
            dirty: false,
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: Option<ModelSummary>) -> Self {
        self.model = model;
        self
    }

    /// Local-AI builds have no model settings screen to link to.
    pub fn with_local_ai(mut self, local_ai: bool) -> Self {
        self.local_ai = local_ai;
        self
    }

    pub fn view(&self) -> PageViewModel {
        let model_status = if self.local_ai {
            ModelStatus::Hidden
        } else {
            match &self.model {
                Some(model) => ModelStatus::Configured(model.clone()),
                None => ModelStatus::NotConfigured,
            }
        };
        PageViewModel {
            text: self.text.clone(),
            result: self.result.clone(),
            target_language: self.target_language.clone(),
            loading: self.loading,
            copied: self.copied,
            can_submit: !self.loading && !self.text.trim().is_empty(),
            can_copy: !self.result.is_empty(),
            model_status,
            notice: self.notice.clone(),
        }
    }

    /// Returns whether anything changed since the last call and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_generation(&self) -> Option<Generation> {
        self.active_generation
    }

    pub(crate) fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Emptying the text clears the result in the same step.
    pub(crate) fn set_text(&mut self, text: String) {
        if text == self.text {
            return;
        }
        if text.is_empty() {
            self.result.clear();
        }
        self.text = text;
        self.dirty = true;
    }

    pub(crate) fn set_result(&mut self, result: String) {
        if result != self.result {
            self.result = result;
            self.dirty = true;
        }
    }

    pub(crate) fn set_target_language(&mut self, language: String) -> bool {
        if language == self.target_language {
            return false;
        }
        self.target_language = language;
        self.dirty = true;
        true
    }

    pub(crate) fn set_model(&mut self, model: Option<ModelSummary>) {
        if model != self.model {
            self.model = model;
            self.dirty = true;
        }
    }

    pub(crate) fn begin_translation(&mut self) -> Generation {
        self.next_generation += 1;
        self.active_generation = Some(self.next_generation);
        self.loading = true;
        self.dirty = true;
        self.next_generation
    }

    pub(crate) fn is_active(&self, generation: Generation) -> bool {
        self.active_generation == Some(generation)
    }

    pub(crate) fn finish_translation(&mut self) {
        self.active_generation = None;
        self.loading = false;
        self.dirty = true;
    }

    pub(crate) fn abandon_translation(&mut self) -> Option<Generation> {
        let generation = self.active_generation.take()?;
        self.loading = false;
        self.dirty = true;
        Some(generation)
    }

    pub(crate) fn mark_copied(&mut self) -> Generation {
        self.copy_generation += 1;
        self.copied = true;
        self.dirty = true;
        self.copy_generation
    }

    pub(crate) fn reset_copied(&mut self, generation: Generation) {
        if self.copied && generation == self.copy_generation {
            self.copied = false;
            self.dirty = true;
        }
    }

    pub(crate) fn show_notice(&mut self, kind: NoticeKind) -> Generation {
        self.notice_generation += 1;
        self.notice = Some(Notice {
            kind,
            generation: self.notice_generation,
        });
        self.dirty = true;
        self.notice_generation
    }

    pub(crate) fn expire_notice(&mut self, generation: Generation) {
        if self
            .notice
            .as_ref()
            .is_some_and(|notice| notice.generation == generation)
        {
            self.dismiss_notice();
        }
    }

    pub(crate) fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.dirty = true;
        }
    }
}
