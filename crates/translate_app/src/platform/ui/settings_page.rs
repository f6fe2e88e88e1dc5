use egui::{Align, Layout};
use translate_core::Localizer;
use translate_engine::ModelConfig;

use super::constants::{PAGE_PADDING, SETTINGS_FORM_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub enum SettingsAction {
    Save(ModelConfig),
    Remove,
    Back,
}

/// Editable copy of the translation model settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelSettingsForm {
    provider: String,
    model_id: String,
    display_name: String,
    base_url: String,
    api_key_env: String,
    /// Literal key from the config file; not editable here.
    api_key: Option<String>,
    saved: bool,
}

impl ModelSettingsForm {
    pub fn from_model(model: Option<&ModelConfig>) -> Self {
        let Some(model) = model else {
            return Self::default();
        };
        Self {
            provider: model.provider.clone(),
            model_id: model.id.clone(),
            display_name: model.name.clone(),
            base_url: model.base_url.clone(),
            api_key_env: model.api_key_env.clone().unwrap_or_default(),
            api_key: model.api_key.clone(),
            saved: false,
        }
    }

    /// The model described by the form, or `None` while a required field is blank.
    pub fn to_model(&self) -> Option<ModelConfig> {
        let id = self.model_id.trim();
        let base_url = self.base_url.trim();
        if id.is_empty() || base_url.is_empty() {
            return None;
        }
        let api_key_env = self.api_key_env.trim();
        Some(ModelConfig {
            id: id.to_string(),
            provider: self.provider.trim().to_string(),
            name: self.display_name.trim().to_string(),
            base_url: base_url.to_string(),
            api_key: self.api_key.clone(),
            api_key_env: (!api_key_env.is_empty()).then(|| api_key_env.to_string()),
        })
    }

    pub fn mark_saved(&mut self) {
        self.saved = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, localizer: &Localizer) -> Option<SettingsAction> {
        let mut action = None;

        egui::TopBottomPanel::top("settings_navbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(format!("← {}", localizer.text("settings.model.back"))).clicked() {
                    action = Some(SettingsAction::Back);
                }
                ui.with_layout(Layout::top_down(Align::Center), |ui| {
                    ui.heading(localizer.text("settings.model.title"));
                });
            });
        });

        let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(PAGE_PADDING);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.set_max_width(SETTINGS_FORM_WIDTH);
            let mut edited = false;
            egui::Grid::new("model_settings_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    let rows = [
                        ("settings.model.provider", &mut self.provider),
                        ("settings.model.name", &mut self.model_id),
                        ("settings.model.base_url", &mut self.base_url),
                        ("settings.model.api_key_env", &mut self.api_key_env),
                    ];
                    for (key, value) in rows {
                        edited |= field(ui, localizer.text(key), value);
                    }
                });
            if edited {
                self.saved = false;
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let model = self.to_model();
                let save = egui::Button::new(localizer.text("settings.model.save"));
                if ui.add_enabled(model.is_some(), save).clicked() {
                    action = model.map(SettingsAction::Save);
                }
                if ui.button(localizer.text("settings.model.remove")).clicked() {
                    action = Some(SettingsAction::Remove);
                }
                if self.saved {
                    ui.label(localizer.text("settings.model.saved"));
                }
            });
        });

        action
    }
}

fn field(ui: &mut egui::Ui, label: &str, value: &mut String) -> bool {
    ui.label(label);
    let changed = ui
        .add(egui::TextEdit::singleline(value).desired_width(f32::INFINITY))
        .changed();
    ui.end_row();
    changed
}
