use std::time::Instant;

use egui::{Align, Layout, RichText};
use translate_core::autosize::InputGeometry;
use translate_core::{
    find_language, search_languages, LanguageOption, Localizer, ModelStatus, Msg, Notice,
    NoticeKind, PageViewModel,
};

use super::constants::*;
use super::layout::InputSizer;

/// Widget state of the translate page that egui needs between frames.
#[derive(Default)]
pub struct TranslatePage {
    input: String,
    language_search: String,
    sizer: InputSizer,
}

impl TranslatePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_mount(&mut self) {
        self.language_search.clear();
        self.sizer.reset();
    }

    /// Draws the page and returns the messages raised by this frame's input.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        view: &PageViewModel,
        localizer: &Localizer,
    ) -> Vec<Msg> {
        let mut msgs = Vec::new();

        let now = Instant::now();
        if let Some(deadline) = self.sizer.observe_window(ctx.screen_rect(), now) {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
        if self.input != view.text {
            self.input.clone_from(&view.text);
            self.sizer.request_fit();
        }

        egui::TopBottomPanel::top("translate_navbar").show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading(localizer.text("translate.title")));
        });
        if let Some(notice) = &view.notice {
            egui::TopBottomPanel::top("translate_notice").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(ui.visuals().error_fg_color, notice_text(notice, localizer));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let dismiss = ui
                            .small_button("✖")
                            .on_hover_text(localizer.text("translate.notice.dismiss"));
                        if dismiss.clicked() {
                            msgs.push(Msg::NoticeDismissed);
                        }
                    });
                });
            });
        }

        let frame = egui::Frame::central_panel(&ctx.style()).inner_margin(PAGE_PADDING);
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            let container_bottom = ui.max_rect().bottom();
            self.operation_bar(ui, view, localizer, &mut msgs);
            ui.add_space(PANE_GAP / 2.0);
            ui.columns(2, |columns| {
                self.input_pane(&mut columns[0], view, localizer, container_bottom, &mut msgs);
                output_pane(&mut columns[1], view, localizer, &mut msgs);
            });
        });

        msgs
    }

    fn operation_bar(
        &mut self,
        ui: &mut egui::Ui,
        view: &PageViewModel,
        localizer: &Localizer,
        msgs: &mut Vec<Msg>,
    ) {
        ui.horizontal(|ui| {
            ui.add_enabled_ui(false, |ui| {
                egui::ComboBox::from_id_source("source_language")
                    .width(LANGUAGE_SELECT_WIDTH)
                    .selected_text(localizer.text("translate.any.language"))
                    .show_ui(ui, |_| {});
            });
            ui.label("→");

            let selected = find_language(&view.target_language)
                .map(|option| language_label(option, localizer))
                .unwrap_or_else(|| view.target_language.clone());
            egui::ComboBox::from_id_source("target_language")
                .width(LANGUAGE_SELECT_WIDTH)
                .selected_text(selected)
                .show_ui(ui, |ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut self.language_search)
                            .hint_text(localizer.text("translate.search.placeholder")),
                    );
                    for option in search_languages(&self.language_search, localizer) {
                        let is_selected = option.value == view.target_language;
                        let label = language_label(option, localizer);
                        if ui.selectable_label(is_selected, label).clicked() {
                            msgs.push(Msg::TargetLanguageSelected(option.value.to_string()));
                            self.language_search.clear();
                        }
                    }
                });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                model_status(ui, &view.model_status, localizer, msgs);
            });
        });
    }

    fn input_pane(
        &mut self,
        ui: &mut egui::Ui,
        view: &PageViewModel,
        localizer: &Localizer,
        container_bottom: f32,
        msgs: &mut Vec<Msg>,
    ) {
        let stroke = ui.visuals().widgets.noninteractive.bg_stroke;
        egui::Frame::none()
            .stroke(stroke)
            .rounding(PANE_ROUNDING)
            .inner_margin(PANE_MARGIN)
            .show(ui, |ui| {
                ui.set_min_height(PANE_MIN_HEIGHT);
                let line_height = ui.text_style_height(&egui::TextStyle::Body);
                let height = self.sizer.height(line_height * 3.0);

                let scroll = ui
                    .add_enabled_ui(!view.loading, |ui| {
                        egui::ScrollArea::vertical()
                            .id_source("source_text_scroll")
                            .max_height(height)
                            .min_scrolled_height(height)
                            .show(ui, |ui| {
                                egui::TextEdit::multiline(&mut self.input)
                                    .hint_text(localizer.text("translate.input.placeholder"))
                                    .desired_width(f32::INFINITY)
                                    .min_size(egui::vec2(0.0, height))
                                    .frame(false)
                                    .show(ui)
                            })
                    })
                    .inner;
                let text = scroll.inner;
                if text.response.changed() {
                    msgs.push(Msg::TextChanged(self.input.clone()));
                    self.sizer.request_fit();
                }

                // The button row below the input shares the container.
                let footer = ui.spacing().interact_size.y + ui.spacing().item_spacing.y * 2.0;
                let geometry = InputGeometry {
                    input_top: scroll.inner_rect.top(),
                    input_bottom: scroll.inner_rect.bottom(),
                    content_height: text.galley.size().y + INPUT_TEXT_MARGIN,
                    container_bottom: Some(container_bottom - footer - PANE_MARGIN),
                    line_height: Some(line_height),
                };
                if self.sizer.fit(&geometry) {
                    ui.ctx().request_repaint();
                }

                ui.horizontal(|ui| {
                    let clear =
                        egui::Button::new(format!("✖ {}", localizer.text("translate.clear")));
                    if ui.add_enabled(!view.loading && !view.text.is_empty(), clear).clicked() {
                        msgs.push(Msg::TextCleared);
                    }
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let submit =
                            egui::Button::new(localizer.text("translate.button.translate"));
                        if ui.add_enabled(view.can_submit, submit).clicked() {
                            msgs.push(Msg::SubmitClicked);
                        }
                        if view.loading {
                            ui.spinner();
                        }
                    });
                });
            });
    }
}

fn output_pane(
    ui: &mut egui::Ui,
    view: &PageViewModel,
    localizer: &Localizer,
    msgs: &mut Vec<Msg>,
) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(PANE_ROUNDING)
        .inner_margin(PANE_MARGIN)
        .show(ui, |ui| {
            ui.set_min_height(PANE_MIN_HEIGHT);
            ui.set_width(ui.available_width());
            let footer = ui.spacing().interact_size.y * 2.0;
            let body_height = (ui.available_height() - footer).max(0.0);
            egui::ScrollArea::vertical()
                .id_source("result_scroll")
                .max_height(body_height)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if view.result.is_empty() {
                        let placeholder =
                            RichText::new(localizer.text("translate.output.placeholder"))
                                .color(ui.visuals().weak_text_color());
                        ui.label(placeholder);
                    } else {
                        ui.add(egui::Label::new(view.result.as_str()).wrap(true));
                    }
                });

            ui.horizontal(|ui| {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let copy = egui::Button::new(copy_label(view, localizer));
                    if ui.add_enabled(view.can_copy, copy).clicked() {
                        msgs.push(Msg::CopyClicked);
                    }
                });
            });
        });
}

fn model_status(
    ui: &mut egui::Ui,
    status: &ModelStatus,
    localizer: &Localizer,
    msgs: &mut Vec<Msg>,
) {
    match status {
        ModelStatus::Configured(model) => {
            let link = ui
                .link(format!("⚙ {}", model.name))
                .on_hover_text(model.provider.as_str());
            if link.clicked() {
                msgs.push(Msg::OpenModelSettings);
            }
        }
        ModelStatus::NotConfigured => {
            let text = format!("⚠ {}", localizer.text("translate.error.not_configured"));
            let warning = RichText::new(text).color(ui.visuals().warn_fg_color);
            let link = ui
                .link(warning)
                .on_hover_text(localizer.text("settings.model.link"));
            if link.clicked() {
                msgs.push(Msg::OpenModelSettings);
            }
        }
        ModelStatus::Hidden => {}
    }
}

fn language_label(option: &LanguageOption, localizer: &Localizer) -> String {
    format!("{} {}", option.emoji, localizer.text(option.label_key))
}

fn copy_label(view: &PageViewModel, localizer: &Localizer) -> String {
    if view.copied {
        format!("✔ {}", localizer.text("translate.copied"))
    } else {
        format!("📋 {}", localizer.text("translate.copy"))
    }
}

pub fn notice_text(notice: &Notice, localizer: &Localizer) -> String {
    match &notice.kind {
        NoticeKind::NotConfigured => localizer.text("translate.error.not_configured").to_string(),
        NoticeKind::TranslationFailed { detail } => {
            format!("{}: {}", localizer.text("translate.error.failed"), detail)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use translate_core::{Locale, PageState};

    #[test]
    fn notices_are_localized() {
        let zh = Localizer::new(Locale::ZhCn);
        let notice = Notice {
            kind: NoticeKind::NotConfigured,
            generation: 1,
        };
        assert_eq!(notice_text(&notice, &zh), "翻译模型未配置");

        let en = Localizer::new(Locale::EnUs);
        let failed = Notice {
            kind: NoticeKind::TranslationFailed {
                detail: "http status 500: boom".to_string(),
            },
            generation: 2,
        };
        assert_eq!(
            notice_text(&failed, &en),
            "Translation failed: http status 500: boom"
        );
    }

    #[test]
    fn copy_label_follows_the_copied_flag() {
        let en = Localizer::new(Locale::EnUs);
        let mut view = PageState::new().view();
        assert_eq!(copy_label(&view, &en), "📋 Copy");
        view.copied = true;
        assert_eq!(copy_label(&view, &en), "✔ Copied");
    }

    #[test]
    fn language_labels_carry_the_flag() {
        let en = Localizer::new(Locale::EnUs);
        let german = find_language("german").unwrap();
        assert_eq!(language_label(german, &en), "🇩🇪 German");
    }
}
