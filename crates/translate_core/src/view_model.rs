use crate::{ModelSummary, Notice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStatus {
    Configured(ModelSummary),
    NotConfigured,
    /// Local-AI mode: no indicator at all.
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel {
    pub text: String,
    pub result: String,
    pub target_language: String,
    pub loading: bool,
    pub copied: bool,
    pub can_submit: bool,
    pub can_copy: bool,
    pub model_status: ModelStatus,
    pub notice: Option<Notice>,
}
