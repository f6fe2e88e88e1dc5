use std::path::PathBuf;
use std::sync::{mpsc, Arc};

use engine_logging::{engine_debug, engine_error, engine_info};
use translate_core::{update, Localizer, Msg, PageState, PageViewModel, Route};
use translate_engine::{SettingsStore, Translator};

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::ui::render::TranslatePage;
use super::ui::settings_page::{ModelSettingsForm, SettingsAction};

pub struct TranslateApp {
    home: PathBuf,
    config: AppConfig,
    localizer: Localizer,
    state: PageState,
    view: PageViewModel,
    route: Route,
    msg_rx: mpsc::Receiver<Msg>,
    effects: EffectRunner,
    page: TranslatePage,
    settings_form: ModelSettingsForm,
}

impl TranslateApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        home: PathBuf,
        config: AppConfig,
        translator: Arc<dyn Translator>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let effects = EffectRunner::new(
            cc.egui_ctx.clone(),
            msg_tx,
            translator,
            settings,
            config.translate_model.clone(),
        );
        let state = PageState::new()
            .with_model(config.model_summary())
            .with_local_ai(config.local_ai);

        let mut app = Self {
            home,
            localizer: Localizer::new(config.locale()),
            view: state.view(),
            state,
            route: Route::Translate,
            msg_rx,
            effects,
            page: TranslatePage::new(),
            settings_form: ModelSettingsForm::from_model(config.translate_model.as_ref()),
            config,
        };
        app.dispatch(Msg::Mounted);
        app
    }

    fn process_pending_messages(&mut self) {
        let inbox: Vec<Msg> = self.msg_rx.try_iter().collect();
        for msg in inbox {
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let view = state.view();
        if state.consume_dirty() {
            self.view = view;
        }
        self.state = state;

        for route in self.effects.run(effects) {
            self.navigate(route);
        }
    }

    fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        engine_debug!("navigate {:?} -> {:?}", self.route, route);
        let leaving_page = self.route == Route::Translate;
        self.route = route;
        match route {
            Route::ModelSettings => {
                self.settings_form =
                    ModelSettingsForm::from_model(self.config.translate_model.as_ref());
            }
            Route::Translate => {
                self.page.on_mount();
                self.dispatch(Msg::Mounted);
            }
        }
        if leaving_page {
            self.dispatch(Msg::Unmounted);
        }
    }

    fn apply_settings_action(&mut self, action: SettingsAction) {
        let model = match action {
            SettingsAction::Back => {
                self.navigate(Route::Translate);
                return;
            }
            SettingsAction::Save(model) => Some(model),
            SettingsAction::Remove => None,
        };

        let mut next = self.config.clone();
        next.translate_model = model;
        if let Err(err) = config::save_config(&self.home, &next) {
            engine_error!("failed to save model settings: {}", err);
            return;
        }
        engine_info!(
            "translation model {}",
            next.translate_model
                .as_ref()
                .map_or("removed", |model| model.display_name())
        );

        self.settings_form = ModelSettingsForm::from_model(next.translate_model.as_ref());
        self.settings_form.mark_saved();
        self.effects.set_model(next.translate_model.clone());
        let summary = next.model_summary();
        self.config = next;
        self.dispatch(Msg::ModelChanged(summary));
    }
}

impl eframe::App for TranslateApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_pending_messages();

        match self.route {
            Route::Translate => {
                let msgs = self.page.show(ctx, &self.view, &self.localizer);
                for msg in msgs {
                    self.dispatch(msg);
                }
            }
            Route::ModelSettings => {
                if let Some(action) = self.settings_form.show(ctx, &self.localizer) {
                    self.apply_settings_action(action);
                }
            }
        }
    }
}

impl Drop for TranslateApp {
    fn drop(&mut self) {
        // Stop streaming into a closed window.
        self.dispatch(Msg::Unmounted);
    }
}
